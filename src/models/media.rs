use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property photo. `url` is absolute; ordering and the primary flag come
/// straight from the columns, the resource layer never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyImage {
    pub id: i64,
    pub property_id: i64,
    pub title: Option<String>,
    pub url: String,
    pub order: i32,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyVideo {
    pub id: i64,
    pub property_id: i64,
    pub title: Option<String>,
    pub url: String,
    pub order: i32,
    pub provider_video_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub embed_url: Option<String>,
}

/// Floor plans store a path relative to the storage base URL, unlike images
/// and videos which store absolute URLs. `full_url` is derived at projection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FloorPlan {
    pub id: i64,
    pub property_id: i64,
    pub title: Option<String>,
    pub file_path: String,
    pub order: i32,
}
