pub mod catalog;
pub mod city;
pub mod client;
pub mod condominium;
pub mod media;
pub mod price_history;
pub mod property;
pub mod user;

pub use catalog::{Profile, Situation, SolarPosition};
pub use city::{City, Neighborhood};
pub use client::Client;
pub use condominium::Condominium;
pub use media::{FloorPlan, PropertyImage, PropertyVideo};
pub use price_history::PriceHistoryRecord;
pub use property::{
    DisplayConfig, PointOfInterest, PropertyDetails, PropertyFeature, PropertyRecord,
};
pub use user::User;
