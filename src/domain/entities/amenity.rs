//! Amenity entity - Features a place can offer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{non_empty, ValidationError};
use crate::domain::value_objects::AmenityId;

use super::Identifiable;

/// A bookable feature (wifi, parking, pool). Referenced by places; carries
/// no relationships of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        non_empty("name", &name)?;

        let now = Utc::now();
        Ok(Self {
            id: AmenityId::new(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct with a known identity (imports, fixtures).
    pub fn with_id(mut self, id: AmenityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        non_empty("name", &name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Refresh `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Amenity {
    type Id = AmenityId;

    fn id(&self) -> AmenityId {
        self.id
    }
}
