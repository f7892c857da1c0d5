use serde_json::{json, Value};

use crate::models::User;

/// User projection. The password hash never reaches any document.
pub fn user_to_api_value(user: &User) -> Value {
    json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "creci": user.creci,
        "active": user.active.unwrap_or(false),
        "created_at": user.created_at.to_rfc3339(),
        "updated_at": user.updated_at.to_rfc3339(),
    })
}

pub fn users_to_api_values(users: &[User]) -> Vec<Value> {
    users.iter().map(user_to_api_value).collect()
}
