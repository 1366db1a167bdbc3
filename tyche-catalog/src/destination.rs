use serde::{Deserialize, Serialize};

/// A travel location shown alongside the charter catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    /// Star rating at 10x fixed point: 49 reads as 4.9 stars.
    pub rating: i32,
    pub region: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attractions: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDestination {
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub rating: i32,
    pub region: String,
    pub attractions: Vec<String>,
    pub is_featured: bool,
}

impl NewDestination {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        rating: i32,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            description: description.into(),
            image_url: image_url.into(),
            rating,
            region: region.into(),
            attractions: Vec::new(),
            is_featured: false,
        }
    }

    pub fn into_destination(self, id: i64) -> Destination {
        Destination {
            id,
            name: self.name,
            location: self.location,
            description: self.description,
            image_url: self.image_url,
            rating: self.rating,
            region: self.region,
            attractions: self.attractions,
            is_featured: self.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_fixed_point() {
        let monaco = NewDestination::new("Monaco", "French Riviera", "desc", "img", 50, "Mediterranean")
            .into_destination(6);
        let json = serde_json::to_value(&monaco).unwrap();
        assert_eq!(json["rating"], 50);
        assert_eq!(json["imageUrl"], "img");
        assert_eq!(json["isFeatured"], false);
    }
}
