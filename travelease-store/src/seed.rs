use tracing::{info, warn};
use travelease_shared::{EntityId, NewDestination, NewHotel};
use crate::memory::MemoryStore;

const IMAGE_PARAMS: &str = "ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=600&h=400";

fn image(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{}?{}", photo, IMAGE_PARAMS)
}

fn destination(
    name: &str,
    country: &str,
    description: &str,
    photo: &str,
    property_count: u32,
    rating: u8,
) -> NewDestination {
    NewDestination {
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        image_path: image(photo),
        property_count,
        rating,
        is_popular: true,
    }
}

fn sample_destinations() -> [NewDestination; 6] {
    [
        destination(
            "Paris",
            "France",
            "The City of Light, famous for its stunning architecture, art museums, historical monuments, and romantic atmosphere.",
            "1502602898657-3e91760cbb34",
            126,
            5,
        ),
        destination(
            "Bali",
            "Indonesia",
            "A beautiful island known for its volcanic mountains, beaches, coral reefs, religious sites, and vibrant nightlife.",
            "1539367628448-4bc5c9d171c8",
            214,
            5,
        ),
        destination(
            "New York",
            "USA",
            "The Big Apple, known for its skyscrapers, Broadway shows, iconic landmarks, and diverse culture.",
            "1522083165195-3424ed129620",
            305,
            4,
        ),
        destination(
            "Sydney",
            "Australia",
            "Australia's largest city, known for its Opera House, harbor bridge, beautiful beaches, and vibrant culture.",
            "1506973035872-a4ec16b8e8d9",
            176,
            4,
        ),
        destination(
            "Santorini",
            "Greece",
            "A stunning island known for its white-washed buildings, blue domes, beautiful sunsets, and crystalline waters.",
            "1533105079780-92b9be482077",
            93,
            5,
        ),
        destination(
            "Tokyo",
            "Japan",
            "Japan's busy capital, mixing the ultramodern and the traditional, from neon-lit skyscrapers to historic temples.",
            "1503899036084-c55cdd92da26",
            287,
            4,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn hotel(
    name: &str,
    destination_id: EntityId,
    description: &str,
    address: &str,
    photo: &str,
    rating: u8,
    price_per_night: i32,
    facilities: [&str; 4],
) -> NewHotel {
    NewHotel {
        name: name.to_string(),
        destination_id,
        description: description.to_string(),
        address: address.to_string(),
        image_path: image(photo),
        rating,
        price_per_night,
        facilities: facilities.iter().map(|f| f.to_string()).collect(),
        is_featured: true,
    }
}

/// `ids` are the destination ids assigned to `sample_destinations()`, in order.
fn sample_hotels(ids: [EntityId; 6]) -> Vec<NewHotel> {
    let [paris, bali, new_york, _, _, tokyo] = ids;

    vec![
        hotel(
            "Luxury Ocean View",
            bali,
            "Elegant beachfront resort with breathtaking ocean views, infinity pools, and luxurious spa treatments.",
            "Jl. Karang Mas Sejahtera, Bali, Indonesia",
            "1582719478250-c89cae4dc85b",
            5,
            299,
            ["Swimming Pool", "Spa", "Restaurant", "Free Wifi"],
        ),
        hotel(
            "Urban Oasis",
            new_york,
            "Sophisticated urban retreat in the heart of Manhattan, offering stunning city skyline views and premium amenities.",
            "123 Fifth Avenue, New York, USA",
            "1566073771259-6a8506099945",
            5,
            359,
            ["Gym", "Rooftop Bar", "Business Center", "Free Wifi"],
        ),
        hotel(
            "Mountain Lodge Retreat",
            new_york,
            "Cozy mountain lodge with rustic charm, fireplace lounge, and easy access to ski slopes and hiking trails.",
            "789 Mountain Road, Aspen, USA",
            "1520250497591-112f2f40a3f4",
            4,
            249,
            ["Fireplace", "Hot Tub", "Ski Access", "Free Wifi"],
        ),
        hotel(
            "Beachfront Paradise",
            bali,
            "Exclusive overwater bungalows with private pools, direct access to crystal clear waters, and world-class dining.",
            "Maldives Island Resort, North Malé Atoll, Maldives",
            "1571896349842-33c89424de2d",
            5,
            599,
            ["Private Pool", "Beach Access", "Butler Service", "Free Wifi"],
        ),
        hotel(
            "Historic Boutique",
            paris,
            "Charming boutique hotel housed in a historic building, offering elegant rooms with Parisian flair and modern comforts.",
            "45 Rue de Rivoli, Paris, France",
            "1578683010236-d716f9a3f461",
            5,
            329,
            ["Concierge", "Fine Dining", "City Views", "Free Wifi"],
        ),
        hotel(
            "Zen Sanctuary",
            tokyo,
            "Minimalist Japanese-inspired hotel offering tranquil spaces, traditional tea ceremonies, and zen gardens.",
            "2-8-1 Shinjuku, Tokyo, Japan",
            "1590490360182-c33d57733427",
            4,
            289,
            ["Meditation Room", "Japanese Garden", "Tea Ceremony", "Free Wifi"],
        ),
    ]
}

impl MemoryStore {
    /// Loads the sample catalog. A store that already holds destinations is
    /// left untouched. The emptiness check and the inserts share one write
    /// lock, so concurrent calls load the catalog at most once.
    pub fn seed(&self) {
        let mut guard = self.tables.write();
        let tables = &mut *guard;

        if !tables.destinations.is_empty() {
            warn!("Store already holds destinations, skipping seed");
            return;
        }

        let ids = sample_destinations().map(|new| tables.destinations.insert(new).id);
        for new in sample_hotels(ids) {
            tables.hotels.insert(new);
        }

        info!(
            "Seeded {} destinations and {} hotels",
            tables.destinations.len(),
            tables.hotels.len()
        );
    }
}
