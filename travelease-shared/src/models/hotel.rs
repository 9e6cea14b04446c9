use serde::{Deserialize, Serialize};
use super::{Entity, EntityId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: EntityId,
    pub name: String,
    pub destination_id: EntityId,
    pub description: String,
    pub address: String,
    pub image_path: String,
    pub rating: u8,
    pub price_per_night: i32,
    /// Amenity labels. Duplicates are allowed, order carries no meaning.
    pub facilities: Vec<String>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub destination_id: EntityId,
    pub description: String,
    pub address: String,
    pub image_path: String,
    #[serde(default)]
    pub rating: u8,
    pub price_per_night: i32,
    pub facilities: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Hotel {
    /// Case-insensitive substring match against name or description.
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities.iter().any(|f| f == facility)
    }
}

impl Entity for Hotel {
    type New = NewHotel;

    const KIND: &'static str = "hotel";

    fn from_new(id: EntityId, new: NewHotel) -> Self {
        Self {
            id,
            name: new.name,
            destination_id: new.destination_id,
            description: new.description,
            address: new.address,
            image_path: new.image_path,
            rating: new.rating.min(5),
            price_per_night: new.price_per_night,
            facilities: new.facilities,
            is_featured: new.is_featured,
        }
    }
}
