use serde::{Deserialize, Serialize};
use super::{Entity, EntityId};

/// A city or region that hotels belong to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: EntityId,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_path: String,
    pub property_count: u32,
    /// 0..=5
    pub rating: u8,
    pub is_popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_path: String,
    #[serde(default)]
    pub property_count: u32,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub is_popular: bool,
}

impl Destination {
    /// Case-insensitive substring match against name or country.
    pub fn matches_place(&self, fragment: &str) -> bool {
        let needle = fragment.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.country.to_lowercase().contains(&needle)
    }
}

impl Entity for Destination {
    type New = NewDestination;

    const KIND: &'static str = "destination";

    fn from_new(id: EntityId, new: NewDestination) -> Self {
        Self {
            id,
            name: new.name,
            country: new.country,
            description: new.description,
            image_path: new.image_path,
            property_count: new.property_count,
            rating: new.rating.min(5),
            is_popular: new.is_popular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Destination {
        Destination::from_new(1, NewDestination {
            name: "Paris".to_string(),
            country: "France".to_string(),
            description: "The City of Light".to_string(),
            image_path: "paris.jpg".to_string(),
            property_count: 126,
            rating: 5,
            is_popular: true,
        })
    }

    #[test]
    fn test_matches_place_by_name_or_country() {
        let dest = paris();
        assert!(dest.matches_place("par"));
        assert!(dest.matches_place("FRANCE"));
        assert!(!dest.matches_place("japan"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(paris()).unwrap();
        assert_eq!(json["imagePath"], "paris.jpg");
        assert_eq!(json["propertyCount"], 126);
        assert_eq!(json["isPopular"], true);
    }

    #[test]
    fn test_rating_is_clamped() {
        let mut new = NewDestination {
            name: "Nowhere".to_string(),
            country: "Atlantis".to_string(),
            description: String::new(),
            image_path: String::new(),
            property_count: 0,
            rating: 9,
            is_popular: false,
        };
        assert_eq!(Destination::from_new(1, new.clone()).rating, 5);
        new.rating = 3;
        assert_eq!(Destination::from_new(1, new).rating, 3);
    }
}
