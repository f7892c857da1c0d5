use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ProjectionError;
use crate::models::{Client, Condominium, FloorPlan, PropertyImage, PropertyVideo, User};
use crate::types::Relation;

/// A property row plus whichever relations the persistence layer resolved
/// before handing it to the resource layer. Relation slots default to
/// `NotLoaded`; projection never triggers a fetch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyRecord {
    pub id: i64,
    pub reference_code: String,
    pub property_type: String,
    pub subtype: Option<String>,
    pub profile: Option<String>,
    pub status: String,

    // Address columns
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub show_address_on_site: Option<bool>,

    // Physical attributes
    pub total_area: Option<Decimal>,
    pub private_area: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub suites: Option<i32>,
    pub parking_spaces: Option<i32>,

    // Monetary columns
    pub sale_price: Option<Decimal>,
    pub rental_price: Option<Decimal>,
    pub condo_fee: Option<Decimal>,
    pub property_tax: Option<Decimal>,
    pub show_prices_on_site: Option<bool>,

    // Publication and negotiation flags
    pub publish_on_site: Option<bool>,
    pub featured: Option<bool>,
    pub accepts_financing: Option<bool>,
    pub accepts_trade: Option<bool>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,

    // Relations, attached by the caller after the scalar row is mapped
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub images: Relation<Vec<PropertyImage>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub owner: Relation<Option<Client>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub agent: Relation<Option<User>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub condominium: Relation<Option<Condominium>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub details: Relation<Option<PropertyDetails>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub features: Relation<Vec<PropertyFeature>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub points_of_interest: Relation<Vec<PointOfInterest>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub videos: Relation<Vec<PropertyVideo>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub floor_plans: Relation<Vec<FloorPlan>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub creator: Relation<User>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub modifier: Relation<Option<User>>,
}

/// Extended marketing/commercial details, a one-to-one relation of the
/// property. `display_config` is a serialized-JSON column; decode it through
/// [`PropertyDetails::decode_display_config`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyDetails {
    pub property_id: i64,
    pub title: Option<String>,
    pub show_title: Option<bool>,
    pub description: Option<String>,
    pub show_description: Option<bool>,
    pub keywords: Option<String>,
    pub internal_notes: Option<String>,
    pub exclusive: Option<bool>,
    pub exclusivity_start: Option<NaiveDate>,
    pub exclusivity_end: Option<NaiveDate>,
    pub commission_value: Option<Decimal>,
    pub commission_type: Option<String>,
    pub display_config: Option<String>,
}

impl PropertyDetails {
    /// Decodes the stored display configuration into its typed form. A null
    /// column is `Ok(None)`; malformed JSON is a `DecodeError` the caller
    /// must surface, never swallow.
    pub fn decode_display_config(&self) -> Result<Option<DisplayConfig>, ProjectionError> {
        match self.display_config.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| ProjectionError::DecodeError { field: "display_config", source }),
        }
    }
}

/// Typed form of the stored per-property display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub show_map: bool,
    #[serde(default)]
    pub show_street_view: bool,
    #[serde(default)]
    pub show_nearby: bool,
    #[serde(default)]
    pub watermark_photos: bool,
    #[serde(default)]
    pub badge_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyFeature {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PointOfInterest {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub distance_meters: Option<i32>,
    pub distance_text: Option<String>,
}
