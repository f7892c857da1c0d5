pub mod catalog;
pub mod city;
pub mod client;
pub mod condominium;
pub mod envelope;
pub mod options;
pub mod price_history;
pub mod property;
pub mod user;

pub use envelope::{CollectionEnvelope, PageMeta};
pub use options::ProjectionOptions;
pub use price_history::price_history_to_api_value;
pub use property::{properties_to_api_values, property_to_api_value};
