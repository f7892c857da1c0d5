use serde_json::{json, Value};

use crate::format::{self, AddressParts};
use crate::models::Condominium;

pub fn condominium_to_api_value(condominium: &Condominium) -> Value {
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
        "address": {
            "postal_code": condominium.postal_code,
            "state": condominium.state,
            "city": condominium.city,
            "district": condominium.district,
            "street": condominium.street,
            "number": condominium.number,
            "complement": condominium.complement,
            "formatted_address": format::format_address(&parts),
        },
        "created_at": condominium.created_at.to_rfc3339(),
        "updated_at": condominium.updated_at.to_rfc3339(),
    })
}

pub fn condominiums_to_api_values(condominiums: &[Condominium]) -> Vec<Value> {
    condominiums.iter().map(condominium_to_api_value).collect()
}
