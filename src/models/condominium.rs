use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Condominium with the same address columns as a property; its projected
/// `formatted_address` goes through the shared address rule.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Condominium {
    pub id: i64,
    pub name: String,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
