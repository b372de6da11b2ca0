use serde::Serialize;

use crate::domain::entities::Amenity;

/// Transport-shaped projection of an amenity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmenityView {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Amenity> for AmenityView {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: amenity.id.to_string(),
            name: amenity.name.clone(),
            created_at: amenity.created_at.to_rfc3339(),
            updated_at: amenity.updated_at.to_rfc3339(),
        }
    }
}
