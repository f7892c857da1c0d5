#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use imovel_resources::models::{
    Client, Condominium, FloorPlan, PointOfInterest, PriceHistoryRecord, PropertyDetails,
    PropertyFeature, PropertyImage, PropertyRecord, PropertyVideo, User,
};
use imovel_resources::Relation;

pub fn ts(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
}

pub fn day(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

pub fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

/// A fully populated scalar row with every relation left `NotLoaded`.
/// Suites load the relations they exercise.
pub fn base_property() -> PropertyRecord {
    PropertyRecord {
        id: 101,
        reference_code: "AP0101".to_string(),
        property_type: "apartment".to_string(),
        subtype: Some("duplex".to_string()),
        profile: Some("residential".to_string()),
        status: "available".to_string(),
        postal_code: Some("88058-500".to_string()),
        state: Some("SC".to_string()),
        city: Some("Florianópolis".to_string()),
        district: Some("Ingleses".to_string()),
        street: Some("Rua das Gaivotas".to_string()),
        number: Some("1020".to_string()),
        complement: Some("Bloco B".to_string()),
        show_address_on_site: Some(true),
        total_area: Some(dec("142.50")),
        private_area: Some(dec("118.00")),
        bedrooms: Some(3),
        bathrooms: Some(2),
        suites: Some(1),
        parking_spaces: Some(2),
        sale_price: Some(dec("850000.00")),
        rental_price: None,
        condo_fee: Some(dec("1234.5")),
        property_tax: Some(dec("320.00")),
        show_prices_on_site: Some(true),
        publish_on_site: Some(true),
        featured: None,
        accepts_financing: Some(true),
        accepts_trade: None,
        created_at: ts("2024-01-15T10:30:00Z"),
        updated_at: ts("2024-03-02T08:00:00Z"),
        deleted_at: None,
        images: Relation::NotLoaded,
        owner: Relation::NotLoaded,
        agent: Relation::NotLoaded,
        condominium: Relation::NotLoaded,
        details: Relation::NotLoaded,
        features: Relation::NotLoaded,
        points_of_interest: Relation::NotLoaded,
        videos: Relation::NotLoaded,
        floor_plans: Relation::NotLoaded,
        creator: Relation::NotLoaded,
        modifier: Relation::NotLoaded,
    }
}

pub fn image(id: i64, order: i32, is_primary: bool) -> PropertyImage {
    PropertyImage {
        id,
        property_id: 101,
        title: Some(format!("Foto {}", id)),
        url: format!("https://cdn.example.com.br/storage/imoveis/101/{}.jpg", id),
        order,
        is_primary,
    }
}

pub fn video(id: i64, order: i32) -> PropertyVideo {
    PropertyVideo {
        id,
        property_id: 101,
        title: Some("Tour virtual".to_string()),
        url: format!("https://youtu.be/video{}", id),
        order,
        provider_video_id: Some(format!("video{}", id)),
        thumbnail_url: Some(format!("https://img.youtube.com/vi/video{}/0.jpg", id)),
        embed_url: Some(format!("https://www.youtube.com/embed/video{}", id)),
    }
}

pub fn floor_plan(id: i64, order: i32) -> FloorPlan {
    FloorPlan {
        id,
        property_id: 101,
        title: Some(format!("Pavimento {}", order)),
        file_path: format!("plantas/101/{}.pdf", id),
        order,
    }
}

pub fn feature(id: i64, name: &str) -> PropertyFeature {
    PropertyFeature {
        id,
        name: name.to_string(),
        description: None,
        icon: Some("check".to_string()),
        category: Some("leisure".to_string()),
    }
}

pub fn point_of_interest(id: i64, name: &str, distance_meters: Option<i32>) -> PointOfInterest {
    PointOfInterest {
        id,
        name: name.to_string(),
        description: None,
        icon: Some("pin".to_string()),
        category: Some("services".to_string()),
        distance_meters,
        distance_text: distance_meters.map(|m| format!("{} metros a pé", m)),
    }
}

pub fn details(display_config: Option<&str>) -> PropertyDetails {
    PropertyDetails {
        property_id: 101,
        title: Some("Apartamento duplex nos Ingleses".to_string()),
        show_title: Some(true),
        description: Some("Vista para o mar, sol da manhã.".to_string()),
        show_description: None,
        keywords: Some("duplex, praia, ingleses".to_string()),
        internal_notes: Some("Chaves na portaria".to_string()),
        exclusive: Some(true),
        exclusivity_start: Some(day("2024-01-01")),
        exclusivity_end: Some(day("2024-06-30")),
        commission_value: Some(dec("6.00")),
        commission_type: Some("percent".to_string()),
        display_config: display_config.map(str::to_string),
    }
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@imobiliaria.com.br", name.to_lowercase().replace(' ', ".")),
        role: Some("broker".to_string()),
        creci: Some("SC-12345".to_string()),
        active: Some(true),
        password_hash: "$2y$10$secret".to_string(),
        created_at: ts("2023-05-01T12:00:00Z"),
        updated_at: ts("2023-05-01T12:00:00Z"),
    }
}

pub fn client(id: i64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        email: Some(format!("{}@gmail.com", name.to_lowercase().replace(' ', "."))),
        phone: Some("+55 48 99999-0000".to_string()),
        document: Some("12345678901".to_string()),
        client_type: Some("owner".to_string()),
        created_at: ts("2023-02-10T09:00:00Z"),
        updated_at: ts("2023-02-10T09:00:00Z"),
    }
}

pub fn condominium(id: i64, name: &str) -> Condominium {
    Condominium {
        id,
        name: name.to_string(),
        postal_code: Some("88058-500".to_string()),
        state: Some("SC".to_string()),
        city: Some("Florianópolis".to_string()),
        district: Some("Ingleses".to_string()),
        street: Some("Rua das Gaivotas".to_string()),
        number: Some("1000".to_string()),
        complement: None,
        created_at: ts("2022-08-01T00:00:00Z"),
        updated_at: ts("2022-08-01T00:00:00Z"),
    }
}

pub fn price_history(end_date: Option<NaiveDate>) -> PriceHistoryRecord {
    PriceHistoryRecord {
        id: 9001,
        property_id: 101,
        deal_type: "sale".to_string(),
        value: dec("850000.00"),
        start_date: day("2024-01-15"),
        end_date,
        reason: Some("Ajuste de mercado".to_string()),
        notes: None,
        created_by: 7,
        updated_by: None,
        created_at: ts("2024-01-15T10:30:00Z"),
        updated_at: ts("2024-03-02T08:00:00Z"),
        creator: Relation::NotLoaded,
        modifier: Relation::NotLoaded,
    }
}

/// A property with every relation loaded and populated.
pub fn property_with_all_relations() -> PropertyRecord {
    let mut record = base_property();
    record.images =
        Relation::Loaded(vec![image(1, 1, false), image(2, 2, true), image(3, 3, false)]);
    record.owner = Relation::Loaded(Some(client(51, "Paulo Andrade")));
    record.agent = Relation::Loaded(Some(user(7, "Marina Costa")));
    record.condominium = Relation::Loaded(Some(condominium(31, "Residencial Costa Norte")));
    record.details = Relation::Loaded(Some(details(Some(r#"{"show_map": true}"#))));
    record.features = Relation::Loaded(vec![feature(11, "Piscina"), feature(12, "Churrasqueira")]);
    record.points_of_interest =
        Relation::Loaded(vec![point_of_interest(21, "Supermercado", Some(850))]);
    record.videos = Relation::Loaded(vec![video(41, 1)]);
    record.floor_plans = Relation::Loaded(vec![floor_plan(61, 1)]);
    record.creator = Relation::Loaded(user(7, "Marina Costa"));
    record.modifier = Relation::Loaded(Some(user(8, "Rafael Lima")));
    record
}
