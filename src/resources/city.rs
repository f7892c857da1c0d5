use serde_json::{json, Map, Value};

use crate::models::{City, Neighborhood};

/// City projection. `neighborhoods` follows the relation rule: key omitted
/// unless the caller loaded the collection.
pub fn city_to_api_value(city: &City) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(city.id));
    obj.insert("name".into(), json!(city.name));
    obj.insert("state".into(), json!(city.state));
    if let Some(neighborhoods) = city.neighborhoods.as_loaded() {
        obj.insert(
            "neighborhoods".into(),
            Value::Array(neighborhoods.iter().map(neighborhood_to_api_value).collect()),
        );
    }
    Value::Object(obj)
}

pub fn neighborhood_to_api_value(neighborhood: &Neighborhood) -> Value {
    json!({
        "id": neighborhood.id,
        "city_id": neighborhood.city_id,
        "name": neighborhood.name,
    })
}

pub fn cities_to_api_values(cities: &[City]) -> Vec<Value> {
    cities.iter().map(city_to_api_value).collect()
}
