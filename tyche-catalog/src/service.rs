use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of vehicle the brokerage charters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Jet,
    Yacht,
    Car,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [ServiceType::Jet, ServiceType::Yacht, ServiceType::Car];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Jet => "jet",
            ServiceType::Yacht => "yacht",
            ServiceType::Car => "car",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jet" => Ok(ServiceType::Jet),
            "yacht" => Ok(ServiceType::Yacht),
            "car" => Ok(ServiceType::Car),
            other => Err(CatalogError::UnknownServiceType(other.to_string())),
        }
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown service type: {0}")]
    UnknownServiceType(String),
}

/// Charter rate of a service. Jets are billed by the hour, everything else by the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    PerHour(i64),
    PerDay(i64),
}

impl Rate {
    pub fn amount(&self) -> i64 {
        match self {
            Rate::PerHour(amount) | Rate::PerDay(amount) => *amount,
        }
    }
}

/// A bookable catalog item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

/// Service data before the store has assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub service_type: ServiceType,
    pub name: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub image_url: String,
    pub gallery_urls: Vec<String>,
    pub price_per_hour: Option<i64>,
    pub price_per_day: Option<i64>,
    pub capacity: Option<i32>,
    pub features: Vec<String>,
    pub is_featured: bool,
    pub rating: Option<i32>,
}

impl NewService {
    pub fn new(
        service_type: ServiceType,
        name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        rate: Rate,
    ) -> Self {
        let (price_per_hour, price_per_day) = match rate {
            Rate::PerHour(amount) => (Some(amount), None),
            Rate::PerDay(amount) => (None, Some(amount)),
        };

        Self {
            service_type,
            name: name.into(),
            description: description.into(),
            detailed_description: None,
            image_url: image_url.into(),
            gallery_urls: Vec::new(),
            price_per_hour,
            price_per_day,
            capacity: None,
            features: Vec::new(),
            is_featured: false,
            rating: None,
        }
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn into_service(self, id: i64) -> Service {
        Service {
            id,
            service_type: self.service_type,
            name: self.name,
            description: self.description,
            detailed_description: self.detailed_description,
            image_url: self.image_url,
            gallery_urls: self.gallery_urls,
            price_per_hour: self.price_per_hour,
            price_per_day: self.price_per_day,
            capacity: self.capacity,
            features: self.features,
            is_featured: self.is_featured,
            rating: self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_parsing() {
        assert_eq!("jet".parse::<ServiceType>(), Ok(ServiceType::Jet));
        assert_eq!("yacht".parse::<ServiceType>(), Ok(ServiceType::Yacht));
        assert_eq!("car".parse::<ServiceType>(), Ok(ServiceType::Car));
        assert_eq!(
            "boat".parse::<ServiceType>(),
            Err(CatalogError::UnknownServiceType("boat".to_string()))
        );
        assert!("Jet".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_rate_sets_exactly_one_price() {
        let jet = NewService::new(ServiceType::Jet, "G650", "jet", "img", Rate::PerHour(5000)).into_service(1);
        assert_eq!(jet.price_per_hour, Some(5000));
        assert_eq!(jet.price_per_day, None);

        let car = NewService::new(ServiceType::Car, "Aventador", "car", "img", Rate::PerDay(1200)).into_service(2);
        assert_eq!(car.price_per_hour, None);
        assert_eq!(car.price_per_day, Some(1200));
    }

    #[test]
    fn test_service_wire_shape() {
        let service = NewService::new(ServiceType::Yacht, "Nirvana", "yacht", "img", Rate::PerDay(15000))
            .with_capacity(12)
            .with_features(["Jacuzzi", "Gym"])
            .into_service(4);

        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["type"], "yacht");
        assert_eq!(json["imageUrl"], "img");
        assert_eq!(json["pricePerDay"], 15000);
        assert_eq!(json["capacity"], 12);
        assert_eq!(json["features"], serde_json::json!(["Jacuzzi", "Gym"]));
        assert!(json.get("pricePerHour").is_none());
    }
}
