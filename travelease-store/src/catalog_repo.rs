use async_trait::async_trait;
use travelease_core::repository::{DestinationRepository, HotelRepository};
use travelease_core::{CoreError, CoreResult};
use travelease_shared::{Destination, Entity, EntityId, Hotel, NewDestination, NewHotel};
use crate::memory::MemoryStore;

#[async_trait]
impl DestinationRepository for MemoryStore {
    async fn create_destination(&self, destination: NewDestination) -> CoreResult<Destination> {
        Ok(self.create(destination))
    }

    async fn get_destination(&self, id: EntityId) -> CoreResult<Option<Destination>> {
        Ok(self.get(id))
    }

    async fn list_destinations(&self) -> CoreResult<Vec<Destination>> {
        Ok(self.list())
    }

    async fn list_popular_destinations(&self) -> CoreResult<Vec<Destination>> {
        Ok(self.list_where(|d: &Destination| d.is_popular))
    }
}

#[async_trait]
impl HotelRepository for MemoryStore {
    async fn create_hotel(&self, hotel: NewHotel) -> CoreResult<Hotel> {
        self.create_checked::<Hotel, _>(hotel, |tables, new| {
            if tables.destinations.contains(new.destination_id) {
                Ok(())
            } else {
                Err(CoreError::MissingReference {
                    kind: Destination::KIND,
                    id: new.destination_id,
                })
            }
        })
    }

    async fn get_hotel(&self, id: EntityId) -> CoreResult<Option<Hotel>> {
        Ok(self.get(id))
    }

    async fn list_hotels(&self) -> CoreResult<Vec<Hotel>> {
        Ok(self.list())
    }

    async fn list_featured_hotels(&self) -> CoreResult<Vec<Hotel>> {
        Ok(self.list_where(|h: &Hotel| h.is_featured))
    }

    async fn list_hotels_by_destination(&self, destination_id: EntityId) -> CoreResult<Vec<Hotel>> {
        Ok(self.list_where(|h: &Hotel| h.destination_id == destination_id))
    }
}
