use parking_lot::RwLock;
use std::collections::BTreeMap;
use travelease_core::CoreResult;
use travelease_shared::{Booking, ContactForm, Destination, Entity, EntityId, Hotel, User};

/// One collection of records plus its id sequence.
///
/// Rows are keyed in a `BTreeMap`, so iteration is ascending id order, which
/// is also creation order.
#[derive(Debug)]
pub struct Table<T: Entity> {
    rows: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Entity> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub(crate) fn insert(&mut self, new: T::New) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = T::from_new(id, new);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Entity> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every collection the store holds.
#[derive(Debug, Default)]
pub struct Tables {
    pub users: Table<User>,
    pub destinations: Table<Destination>,
    pub hotels: Table<Hotel>,
    pub contact_forms: Table<ContactForm>,
    pub bookings: Table<Booking>,
}

/// Maps an entity kind to its collection inside `Tables`.
pub trait Stored: Entity {
    fn table(tables: &Tables) -> &Table<Self>;
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

macro_rules! stored_in {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn table(tables: &Tables) -> &Table<Self> {
                &tables.$field
            }

            fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
                &mut tables.$field
            }
        }
    };
}

stored_in!(User, users);
stored_in!(Destination, destinations);
stored_in!(Hotel, hotels);
stored_in!(ContactForm, contact_forms);
stored_in!(Booking, bookings);

/// In-memory entity store. Construct one per process (or per test) and share
/// it behind an `Arc`; nothing here is global.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh store with the sample catalog loaded.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.seed();
        store
    }

    /// Assigns the next id for `T` and stores the record.
    pub fn create<T: Stored>(&self, new: T::New) -> T {
        let mut tables = self.tables.write();
        T::table_mut(&mut tables).insert(new)
    }

    /// Like `create`, but runs `check` against the current tables under the
    /// same write lock, so a passing check cannot be invalidated before insert.
    pub fn create_checked<T, F>(&self, new: T::New, check: F) -> CoreResult<T>
    where
        T: Stored,
        F: FnOnce(&Tables, &T::New) -> CoreResult<()>,
    {
        let mut tables = self.tables.write();
        check(&tables, &new)?;
        Ok(T::table_mut(&mut tables).insert(new))
    }

    pub fn get<T: Stored>(&self, id: EntityId) -> Option<T> {
        T::table(&self.tables.read()).get(id).cloned()
    }

    pub fn list<T: Stored>(&self) -> Vec<T> {
        T::table(&self.tables.read()).iter().cloned().collect()
    }

    pub fn list_where<T, P>(&self, predicate: P) -> Vec<T>
    where
        T: Stored,
        P: Fn(&T) -> bool,
    {
        T::table(&self.tables.read())
            .iter()
            .filter(|row| predicate(*row))
            .cloned()
            .collect()
    }

    /// First record (lowest id) satisfying `predicate`.
    pub fn find<T, P>(&self, predicate: P) -> Option<T>
    where
        T: Stored,
        P: Fn(&T) -> bool,
    {
        T::table(&self.tables.read())
            .iter()
            .find(|row| predicate(*row))
            .cloned()
    }

    pub fn count<T: Stored>(&self) -> usize {
        T::table(&self.tables.read()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelease_core::CoreError;
    use travelease_shared::{NewContactForm, NewDestination};

    fn destination(name: &str, popular: bool) -> NewDestination {
        NewDestination {
            name: name.to_string(),
            country: "Testland".to_string(),
            description: String::new(),
            image_path: String::new(),
            property_count: 0,
            rating: 3,
            is_popular: popular,
        }
    }

    fn contact(first_name: &str) -> NewContactForm {
        NewContactForm {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            destination: None,
            message: "Hello".to_string(),
            consent_marketing: false,
        }
    }

    #[test]
    fn test_ids_are_sequential_per_kind() {
        let store = MemoryStore::new();

        let a: Destination = store.create(destination("A", true));
        let b: Destination = store.create(destination("B", false));
        let form: ContactForm = store.create(contact("Jane"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        // Each kind keeps its own sequence
        assert_eq!(form.id, 1);
        assert_eq!(store.count::<Destination>(), 2);
        assert_eq!(store.count::<ContactForm>(), 1);
    }

    #[test]
    fn test_get_absent_is_none() {
        let store = MemoryStore::new();
        store.create::<Destination>(destination("A", true));

        assert!(store.get::<Destination>(1).is_some());
        assert!(store.get::<Destination>(2).is_none());
        assert!(store.get::<Hotel>(1).is_none());
    }

    #[test]
    fn test_list_where_keeps_creation_order() {
        let store = MemoryStore::new();
        for (name, popular) in [("A", true), ("B", false), ("C", true)] {
            store.create::<Destination>(destination(name, popular));
        }

        let popular: Vec<String> = store
            .list_where::<Destination, _>(|d| d.is_popular)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(popular, vec!["A", "C"]);

        let all: Vec<EntityId> = store.list::<Destination>().iter().map(|d| d.id).collect();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_check_does_not_consume_id() {
        let store = MemoryStore::new();

        let rejected = store.create_checked::<ContactForm, _>(contact("Nope"), |_, _| {
            Err(CoreError::Conflict("rejected".to_string()))
        });
        assert!(rejected.is_err());
        assert_eq!(store.count::<ContactForm>(), 0);

        let accepted = store
            .create_checked::<ContactForm, _>(contact("Yes"), |_, _| Ok(()))
            .unwrap();
        assert_eq!(accepted.id, 1);
    }

    #[test]
    fn test_concurrent_creates_never_share_an_id() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| store.create::<ContactForm>(contact(&format!("t{}", i))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<EntityId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=400).collect::<Vec<_>>());
    }
}
