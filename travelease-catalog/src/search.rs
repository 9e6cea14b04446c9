use tracing::debug;
use travelease_core::search::SearchRequest;
use travelease_core::CoreResult;
use travelease_shared::{Destination, Hotel};
use crate::catalog::CatalogService;
use crate::filter::HotelFilter;

/// Free-text and destination search over hotels
#[derive(Clone)]
pub struct SearchEngine {
    catalog: CatalogService,
}

impl SearchEngine {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }

    /// Hotels matching `query` (name or description) within the destination
    /// resolved from `destination` (name or country). Both are
    /// case-insensitive substring matches; `None` means "don't filter".
    pub async fn search(
        &self,
        query: Option<&str>,
        destination: Option<&str>,
    ) -> CoreResult<Vec<Hotel>> {
        let mut hotels = match destination {
            Some(fragment) => {
                let destinations = self.catalog.destinations().await?;
                match resolve_destination(&destinations, fragment) {
                    Some(dest) => {
                        debug!("Destination {:?} resolved to {} ({})", fragment, dest.name, dest.id);
                        self.catalog.hotels_by_destination(dest.id).await?
                    }
                    None => {
                        debug!("Destination {:?} matched nothing", fragment);
                        return Ok(Vec::new());
                    }
                }
            }
            None => self.catalog.hotels().await?,
        };

        if let Some(query) = query {
            hotels.retain(|h| h.matches_text(query));
        }

        Ok(hotels)
    }

    /// `search` followed by the price/facility narrowing of `req`.
    pub async fn run(&self, req: &SearchRequest) -> CoreResult<Vec<Hotel>> {
        let hotels = self
            .search(req.query.as_deref(), req.destination.as_deref())
            .await?;
        Ok(HotelFilter::from(req).apply(hotels))
    }
}

/// The destination whose name or country contains `fragment`. When several
/// match, the lowest id wins.
pub fn resolve_destination<'a>(destinations: &'a [Destination], fragment: &str) -> Option<&'a Destination> {
    destinations
        .iter()
        .filter(|d| d.matches_place(fragment))
        .min_by_key(|d| d.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use travelease_core::search::PriceRange;
    use travelease_store::MemoryStore;
    use travelease_shared::NewDestination;

    fn engine_over(store: Arc<MemoryStore>) -> SearchEngine {
        SearchEngine::new(CatalogService::new(store.clone(), store))
    }

    fn engine() -> SearchEngine {
        engine_over(Arc::new(MemoryStore::seeded()))
    }

    fn names(hotels: Vec<Hotel>) -> Vec<String> {
        hotels.into_iter().map(|h| h.name).collect()
    }

    #[tokio::test]
    async fn test_no_filters_returns_everything() {
        let store = Arc::new(MemoryStore::seeded());
        let all = store.list::<Hotel>();
        let hits = engine_over(store).search(None, None).await.unwrap();
        assert_eq!(hits, all);
    }

    #[tokio::test]
    async fn test_destination_by_country() {
        let hits = engine().search(None, Some("France")).await.unwrap();
        assert_eq!(names(hits), vec!["Historic Boutique"]);

        let hits = engine().search(None, Some("nEw yOrK")).await.unwrap();
        assert_eq!(names(hits), vec!["Urban Oasis", "Mountain Lodge Retreat"]);
    }

    #[tokio::test]
    async fn test_unknown_destination_is_empty_regardless_of_query() {
        let engine = engine();
        assert!(engine.search(None, Some("Atlantis")).await.unwrap().is_empty());
        assert!(engine.search(Some("Boutique"), Some("Atlantis")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_matches_name_or_description() {
        let engine = engine();

        let hits = engine.search(Some("ocean"), None).await.unwrap();
        assert_eq!(names(hits), vec!["Luxury Ocean View"]);

        let hits = engine.search(Some("SKI"), None).await.unwrap();
        assert_eq!(names(hits), vec!["Mountain Lodge Retreat"]);

        let hits = engine.search(Some("pools"), Some("bali")).await.unwrap();
        assert_eq!(names(hits), vec!["Luxury Ocean View", "Beachfront Paradise"]);
    }

    #[tokio::test]
    async fn test_lowest_id_wins_when_several_destinations_match() {
        // "a" is in Paris, Bali, Sydney/Australia, Santorini, Japan
        let store = Arc::new(MemoryStore::seeded());
        let hits = engine_over(store.clone()).search(None, Some("a")).await.unwrap();
        assert_eq!(names(hits), vec!["Historic Boutique"]);

        let destinations = store.list::<Destination>();
        assert_eq!(resolve_destination(&destinations, "i").unwrap().name, "Paris");
        assert_eq!(resolve_destination(&destinations, "greece").unwrap().name, "Santorini");
    }

    #[tokio::test]
    async fn test_resolve_ignores_slice_order() {
        let store = MemoryStore::new();
        for name in ["Porto", "Lisbon"] {
            store.create::<Destination>(NewDestination {
                name: name.to_string(),
                country: "Portugal".to_string(),
                description: String::new(),
                image_path: String::new(),
                property_count: 1,
                rating: 4,
                is_popular: false,
            });
        }
        let mut destinations = store.list::<Destination>();
        destinations.reverse();

        assert_eq!(resolve_destination(&destinations, "portugal").unwrap().name, "Porto");
    }

    #[tokio::test]
    async fn test_run_applies_secondary_filters() {
        let req = SearchRequest {
            query: None,
            destination: Some("bali".to_string()),
            price: PriceRange::between(0, 300),
            facilities: vec!["Spa".to_string()],
        };
        let hits = engine().run(&req).await.unwrap();
        assert_eq!(names(hits), vec!["Luxury Ocean View"]);

        let req = SearchRequest {
            price: PriceRange::between(0, 280),
            ..SearchRequest::default()
        };
        assert_eq!(names(engine().run(&req).await.unwrap()), vec!["Mountain Lodge Retreat"]);
    }
}
