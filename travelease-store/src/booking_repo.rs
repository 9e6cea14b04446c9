use async_trait::async_trait;
use travelease_core::repository::{BookingRepository, UserRepository};
use travelease_core::{CoreError, CoreResult};
use travelease_shared::{Booking, Entity, EntityId, Hotel, NewBooking, NewUser, User};
use crate::memory::MemoryStore;

#[async_trait]
impl UserRepository for MemoryStore {
    /// Usernames are unique. The lookup runs under the insert's write lock.
    async fn create_user(&self, user: NewUser) -> CoreResult<User> {
        self.create_checked::<User, _>(user, |tables, new| {
            if tables.users.iter().any(|u| u.username == new.username) {
                return Err(CoreError::Conflict(format!(
                    "Username {} is already taken",
                    new.username
                )));
            }
            Ok(())
        })
    }

    async fn get_user(&self, id: EntityId) -> CoreResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        Ok(self.find(|u: &User| u.username == username))
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn create_booking(&self, booking: NewBooking) -> CoreResult<Booking> {
        self.create_checked::<Booking, _>(booking, |tables, new| {
            if !tables.users.contains(new.user_id) {
                return Err(CoreError::MissingReference { kind: User::KIND, id: new.user_id });
            }
            if !tables.hotels.contains(new.hotel_id) {
                return Err(CoreError::MissingReference { kind: Hotel::KIND, id: new.hotel_id });
            }
            Ok(())
        })
    }

    async fn list_bookings_by_user(&self, user_id: EntityId) -> CoreResult<Vec<Booking>> {
        Ok(self.list_where(|b: &Booking| b.user_id == user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "secret".into(),
            email: format!("{}@example.com", username),
            full_name: "Test User".to_string(),
        }
    }

    fn new_booking(user_id: EntityId, hotel_id: EntityId) -> NewBooking {
        NewBooking {
            user_id,
            hotel_id,
            check_in_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            total_price: 897,
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice")).await.unwrap();
        let bob = store.create_user(new_user("bob")).await.unwrap();

        let found = store.get_user_by_username("bob").await.unwrap().unwrap();
        assert_eq!(found.id, bob.id);
        assert!(store.get_user_by_username("carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice")).await.unwrap();

        let err = store.create_user(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
        assert_eq!(store.count::<User>(), 1);

        let bob = store.create_user(new_user("bob")).await.unwrap();
        assert_eq!(bob.id, 2);
    }

    #[test]
    fn test_concurrent_registrations_keep_usernames_unique() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    tokio::runtime::Builder::new_current_thread()
                        .build()
                        .unwrap()
                        .block_on(store.create_user(new_user("alice")))
                        .is_ok()
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(created, 1);
        assert_eq!(store.count::<User>(), 1);
    }

    #[tokio::test]
    async fn test_booking_references_are_checked() {
        let store = MemoryStore::seeded();
        let user = store.create_user(new_user("alice")).await.unwrap();

        let err = store.create_booking(new_booking(99, 1)).await.unwrap_err();
        assert!(matches!(err, CoreError::MissingReference { kind: "user", .. }));

        let err = store.create_booking(new_booking(user.id, 99)).await.unwrap_err();
        assert!(matches!(err, CoreError::MissingReference { kind: "hotel", .. }));

        let booking = store.create_booking(new_booking(user.id, 1)).await.unwrap();
        assert_eq!(booking.id, 1);
        assert_eq!(store.list_bookings_by_user(user.id).await.unwrap(), vec![booking]);
        assert!(store.list_bookings_by_user(99).await.unwrap().is_empty());
    }
}
