use serde::{Deserialize, Serialize};
use crate::service::ServiceType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub avatar: String,
    pub quote: String,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub name: String,
    pub location: String,
    pub avatar: String,
    pub quote: String,
    pub rating: i32,
    pub service_type: Option<ServiceType>,
    pub featured: bool,
}

impl NewTestimonial {
    pub fn into_testimonial(self, id: i64) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            location: self.location,
            avatar: self.avatar,
            quote: self.quote,
            rating: self.rating,
            service_type: self.service_type,
            featured: self.featured,
        }
    }
}
