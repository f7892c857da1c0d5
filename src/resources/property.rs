//! The property projection: (record + loaded relations + mode) -> document.
//!
//! Two rules govern every key. A relation the caller never loaded is omitted
//! from the output entirely; a loaded-but-empty to-one relation is an
//! explicit null. Detailed-only blocks additionally require
//! `options.detailed` and never leak into summary output.

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::error::ProjectionError;
use crate::format::{self, AddressParts};
use crate::models::{
    Condominium, FloorPlan, PointOfInterest, PropertyDetails, PropertyFeature, PropertyImage,
    PropertyRecord, PropertyVideo, User,
};
use crate::resources::options::ProjectionOptions;

pub fn property_to_api_value(
    record: &PropertyRecord,
    options: &ProjectionOptions,
) -> Result<Value, ProjectionError> {
    let mut obj = Map::new();

    obj.insert("id".into(), json!(record.id));
    obj.insert("reference_code".into(), json!(record.reference_code));
    obj.insert("type".into(), json!(record.property_type));
    obj.insert("subtype".into(), json!(record.subtype));
    obj.insert("profile".into(), json!(record.profile));
    obj.insert("status".into(), json!(record.status));

    obj.insert("address".into(), build_address(record));
    obj.insert("physical_characteristics".into(), build_physical(record));
    obj.insert("pricing".into(), build_pricing(record));
    obj.insert(
        "publication".into(),
        json!({
            "publish_on_site": record.publish_on_site.unwrap_or(false),
            "featured": record.featured.unwrap_or(false),
        }),
    );
    obj.insert(
        "negotiation".into(),
        json!({
            "accepts_financing": record.accepts_financing.unwrap_or(false),
            "accepts_trade": record.accepts_trade.unwrap_or(false),
        }),
    );
    obj.insert("created_at".into(), json!(record.created_at.to_rfc3339()));
    obj.insert("updated_at".into(), json!(record.updated_at.to_rfc3339()));

    if let Some(images) = record.images.as_loaded() {
        obj.insert("primary_image".into(), build_primary_image(images));
    }

    if options.detailed {
        build_detailed_blocks(record, &mut obj)?;
    }

    Ok(Value::Object(obj))
}

pub fn properties_to_api_values(
    records: &[PropertyRecord],
    options: &ProjectionOptions,
) -> Result<Vec<Value>, ProjectionError> {
    records.iter().map(|r| property_to_api_value(r, options)).collect()
}

fn build_address(record: &PropertyRecord) -> Value {
    let parts = AddressParts {
        street: record.street.as_deref(),
        number: record.number.as_deref(),
        complement: record.complement.as_deref(),
        district: record.district.as_deref(),
        city: record.city.as_deref(),
        state: record.state.as_deref(),
    };
    json!({
        "postal_code": record.postal_code,
        "state": record.state,
        "city": record.city,
        "district": record.district,
        "street": record.street,
        "number": record.number,
        "complement": record.complement,
        "show_on_site": record.show_address_on_site.unwrap_or(false),
        "formatted_address": format::format_address(&parts),
    })
}

fn build_physical(record: &PropertyRecord) -> Value {
    json!({
        "total_area": record.total_area,
        "private_area": record.private_area,
        "bedrooms": record.bedrooms,
        "bathrooms": record.bathrooms,
        "suites": record.suites,
        "parking_spaces": record.parking_spaces,
    })
}

fn build_pricing(record: &PropertyRecord) -> Value {
    json!({
        "sale_price": record.sale_price,
        "formatted_sale_price": formatted_currency(record.sale_price),
        "rental_price": record.rental_price,
        "formatted_rental_price": formatted_currency(record.rental_price),
        "condo_fee": record.condo_fee,
        "formatted_condo_fee": formatted_currency(record.condo_fee),
        "property_tax": record.property_tax,
        "formatted_property_tax": formatted_currency(record.property_tax),
        "show_on_site": record.show_prices_on_site.unwrap_or(false),
    })
}

fn formatted_currency(value: Option<Decimal>) -> Option<String> {
    value.map(format::format_currency)
}

/// Primary-flagged image, falling back to the first in relation order.
/// Loaded-but-empty is an explicit null.
fn build_primary_image(images: &[PropertyImage]) -> Value {
    let selected = images.iter().find(|img| img.is_primary).or_else(|| images.first());
    match selected {
        Some(img) => json!({ "id": img.id, "title": img.title, "url": img.url }),
        None => Value::Null,
    }
}

fn build_detailed_blocks(
    record: &PropertyRecord,
    obj: &mut Map<String, Value>,
) -> Result<(), ProjectionError> {
    if let Some(owner) = record.owner.as_loaded() {
        obj.insert("owner".into(), nullable(owner.as_ref(), |c| {
            json!({ "id": c.id, "name": c.name, "email": c.email })
        }));
    }
    if let Some(agent) = record.agent.as_loaded() {
        obj.insert("agent".into(), nullable(agent.as_ref(), build_person));
    }
    if let Some(condominium) = record.condominium.as_loaded() {
        obj.insert("condominium".into(), nullable(condominium.as_ref(), build_condominium));
    }
    if let Some(details) = record.details.as_loaded() {
        let value = match details {
            Some(details) => build_details(record.id, details)?,
            None => Value::Null,
        };
        obj.insert("details".into(), value);
    }
    if let Some(features) = record.features.as_loaded() {
        obj.insert("features".into(), build_features(features));
    }
    if let Some(points) = record.points_of_interest.as_loaded() {
        obj.insert("points_of_interest".into(), build_points_of_interest(points));
    }
    if let Some(images) = record.images.as_loaded() {
        obj.insert("images".into(), build_images(images));
    }
    if let Some(videos) = record.videos.as_loaded() {
        obj.insert("videos".into(), build_videos(videos));
    }
    if let Some(plans) = record.floor_plans.as_loaded() {
        obj.insert("floor_plans".into(), build_floor_plans(plans));
    }
    obj.insert("audit".into(), build_audit(record));
    Ok(())
}

fn nullable<T>(value: Option<&T>, build: impl FnOnce(&T) -> Value) -> Value {
    value.map(build).unwrap_or(Value::Null)
}

fn build_person(user: &User) -> Value {
    json!({ "id": user.id, "name": user.name, "email": user.email })
}

fn build_condominium(condominium: &Condominium) -> Value {
    let parts = AddressParts {
        street: condominium.street.as_deref(),
        number: condominium.number.as_deref(),
        complement: condominium.complement.as_deref(),
        district: condominium.district.as_deref(),
        city: condominium.city.as_deref(),
        state: condominium.state.as_deref(),
    };
    json!({
        "id": condominium.id,
        "name": condominium.name,
        "formatted_address": format::format_address(&parts),
    })
}

fn build_details(property_id: i64, details: &PropertyDetails) -> Result<Value, ProjectionError> {
    let display_config = details.decode_display_config().map_err(|err| {
        tracing::warn!(property_id, error = %err, "stored display_config failed to decode");
        err
    })?;

    Ok(json!({
        "title": details.title,
        "show_title": details.show_title.unwrap_or(false),
        "description": details.description,
        "show_description": details.show_description.unwrap_or(false),
        "keywords": details.keywords,
        "internal_notes": details.internal_notes,
        "exclusive": details.exclusive.unwrap_or(false),
        "exclusivity_start": details.exclusivity_start,
        "exclusivity_end": details.exclusivity_end,
        "commission_value": details.commission_value,
        "commission_type": details.commission_type,
        "display_config": display_config,
    }))
}

fn build_features(features: &[PropertyFeature]) -> Value {
    Value::Array(
        features
            .iter()
            .map(|f| {
                json!({
                    "id": f.id,
                    "name": f.name,
                    "description": f.description,
                    "icon": f.icon,
                    "category": f.category,
                })
            })
            .collect(),
    )
}

fn build_points_of_interest(points: &[PointOfInterest]) -> Value {
    Value::Array(
        points
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "description": p.description,
                    "icon": p.icon,
                    "category": p.category,
                    "distance_meters": p.distance_meters,
                    "distance_text": p.distance_text,
                    "formatted_distance": p.distance_meters.map(format::format_distance),
                })
            })
            .collect(),
    )
}

fn build_images(images: &[PropertyImage]) -> Value {
    Value::Array(
        images
            .iter()
            .map(|img| {
                json!({
                    "id": img.id,
                    "title": img.title,
                    "url": img.url,
                    "order": img.order,
                    "is_primary": img.is_primary,
                })
            })
            .collect(),
    )
}

fn build_videos(videos: &[PropertyVideo]) -> Value {
    Value::Array(
        videos
            .iter()
            .map(|v| {
                json!({
                    "id": v.id,
                    "title": v.title,
                    "url": v.url,
                    "order": v.order,
                    "provider_video_id": v.provider_video_id,
                    "thumbnail_url": v.thumbnail_url,
                    "embed_url": v.embed_url,
                })
            })
            .collect(),
    )
}

fn build_floor_plans(plans: &[FloorPlan]) -> Value {
    let base_url = crate::config::config().storage.base_url.trim_end_matches('/');
    Value::Array(
        plans
            .iter()
            .map(|plan| {
                json!({
                    "id": plan.id,
                    "title": plan.title,
                    "full_url": format!("{}/{}", base_url, plan.file_path.trim_start_matches('/')),
                    "order": plan.order,
                })
            })
            .collect(),
    )
}

fn build_audit(record: &PropertyRecord) -> Value {
    let mut audit = Map::new();
    if let Some(creator) = record.creator.as_loaded() {
        audit.insert("creator".into(), json!({ "id": creator.id, "name": creator.name }));
    }
    if let Some(modifier) = record.modifier.as_loaded() {
        let value = nullable(modifier.as_ref(), |u| json!({ "id": u.id, "name": u.name }));
        audit.insert("modifier".into(), value);
    }
    audit.insert("created_at".into(), json!(record.created_at.to_rfc3339()));
    audit.insert("updated_at".into(), json!(record.updated_at.to_rfc3339()));
    audit.insert("deleted_at".into(), json!(record.deleted_at.map(|dt| dt.to_rfc3339())));
    Value::Object(audit)
}
