use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::User;
use crate::types::Relation;

/// One price-change entry of a property. An open-ended entry (`end_date`
/// null) is the current price for its deal type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PriceHistoryRecord {
    pub id: i64,
    pub property_id: i64,
    /// `"sale"` or `"rental"`
    pub deal_type: String,
    pub value: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub created_by: i64,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub creator: Relation<User>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub modifier: Relation<Option<User>>,
}
