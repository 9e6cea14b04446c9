use std::sync::Arc;
use travelease_core::repository::{DestinationRepository, HotelRepository};
use travelease_core::CoreResult;
use travelease_shared::{Destination, EntityId, Hotel};

/// Named read operations over destinations and hotels
#[derive(Clone)]
pub struct CatalogService {
    destinations: Arc<dyn DestinationRepository>,
    hotels: Arc<dyn HotelRepository>,
}

impl CatalogService {
    pub fn new(
        destinations: Arc<dyn DestinationRepository>,
        hotels: Arc<dyn HotelRepository>,
    ) -> Self {
        Self { destinations, hotels }
    }

    pub async fn destinations(&self) -> CoreResult<Vec<Destination>> {
        self.destinations.list_destinations().await
    }

    pub async fn popular_destinations(&self) -> CoreResult<Vec<Destination>> {
        self.destinations.list_popular_destinations().await
    }

    pub async fn destination(&self, id: EntityId) -> CoreResult<Option<Destination>> {
        self.destinations.get_destination(id).await
    }

    pub async fn hotels(&self) -> CoreResult<Vec<Hotel>> {
        self.hotels.list_hotels().await
    }

    pub async fn featured_hotels(&self) -> CoreResult<Vec<Hotel>> {
        self.hotels.list_featured_hotels().await
    }

    pub async fn hotel(&self, id: EntityId) -> CoreResult<Option<Hotel>> {
        self.hotels.get_hotel(id).await
    }

    /// Hotels of one destination. Does not check that the destination exists,
    /// an unknown id simply yields no hotels.
    pub async fn hotels_by_destination(&self, destination_id: EntityId) -> CoreResult<Vec<Hotel>> {
        self.hotels.list_hotels_by_destination(destination_id).await
    }
}
