//! Lookup-table projections backing the dropdown endpoints.

use serde_json::{json, Value};

use crate::models::{Profile, Situation, SolarPosition};

pub fn profile_to_api_value(profile: &Profile) -> Value {
    json!({
        "id": profile.id,
        "name": profile.name,
        "description": profile.description,
    })
}

pub fn solar_position_to_api_value(position: &SolarPosition) -> Value {
    json!({ "id": position.id, "name": position.name })
}

pub fn situation_to_api_value(situation: &Situation) -> Value {
    json!({ "id": situation.id, "name": situation.name })
}

pub fn profiles_to_api_values(profiles: &[Profile]) -> Vec<Value> {
    profiles.iter().map(profile_to_api_value).collect()
}

pub fn solar_positions_to_api_values(positions: &[SolarPosition]) -> Vec<Value> {
    positions.iter().map(solar_position_to_api_value).collect()
}

pub fn situations_to_api_values(situations: &[Situation]) -> Vec<Value> {
    situations.iter().map(situation_to_api_value).collect()
}
