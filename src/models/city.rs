use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::Relation;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub state: String,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Relation::is_not_loaded")]
    pub neighborhoods: Relation<Vec<Neighborhood>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Neighborhood {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
}
