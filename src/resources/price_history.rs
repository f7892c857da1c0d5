use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::format;
use crate::models::PriceHistoryRecord;

/// Projects one price-change entry. Same audit convention as the property
/// resource: creator/modifier keys appear only when their relation was
/// loaded, a loaded-but-absent modifier is an explicit null.
pub fn price_history_to_api_value(record: &PriceHistoryRecord) -> Value {
    let mut obj = Map::new();

    obj.insert("id".into(), json!(record.id));
    obj.insert("property_id".into(), json!(record.property_id));
    obj.insert("deal_type".into(), json!(record.deal_type));
    obj.insert("value".into(), json!(record.value));
    obj.insert("formatted_value".into(), json!(format::format_currency(record.value)));
    obj.insert("start_date".into(), json!(record.start_date));
    obj.insert("formatted_start_date".into(), json!(format::format_date_br(record.start_date)));
    obj.insert("end_date".into(), json!(record.end_date));
    obj.insert(
        "formatted_end_date".into(),
        json!(record.end_date.map(format::format_date_br)),
    );
    obj.insert(
        "is_current".into(),
        json!(is_current(record.end_date, format::reference_today())),
    );
    obj.insert("reason".into(), json!(record.reason));
    obj.insert("notes".into(), json!(record.notes));
    obj.insert("created_at".into(), json!(format::format_datetime_sql(record.created_at)));
    obj.insert("updated_at".into(), json!(format::format_datetime_sql(record.updated_at)));
    obj.insert("created_by".into(), json!(record.created_by));
    obj.insert("updated_by".into(), json!(record.updated_by));

    if let Some(creator) = record.creator.as_loaded() {
        obj.insert("creator".into(), json!({ "id": creator.id, "name": creator.name }));
    }
    if let Some(modifier) = record.modifier.as_loaded() {
        let value = match modifier {
            Some(user) => json!({ "id": user.id, "name": user.name }),
            None => Value::Null,
        };
        obj.insert("modifier".into(), value);
    }

    Value::Object(obj)
}

pub fn price_histories_to_api_values(records: &[PriceHistoryRecord]) -> Vec<Value> {
    records.iter().map(price_history_to_api_value).collect()
}

/// A price is current while its validity window is open: no end date, or an
/// end date on or after today. Day granularity, in the reference timezone.
pub fn is_current(end_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match end_date {
        None => true,
        Some(end) => end >= today,
    }
}
