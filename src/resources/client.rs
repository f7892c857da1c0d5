use serde_json::{json, Value};

use crate::models::Client;

pub fn client_to_api_value(client: &Client) -> Value {
    json!({
        "id": client.id,
        "name": client.name,
        "email": client.email,
        "phone": client.phone,
        "document": client.document,
        "type": client.client_type,
        "created_at": client.created_at.to_rfc3339(),
        "updated_at": client.updated_at.to_rfc3339(),
    })
}

pub fn clients_to_api_values(clients: &[Client]) -> Vec<Value> {
    clients.iter().map(client_to_api_value).collect()
}
