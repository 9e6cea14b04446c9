use travelease_core::search::{PriceRange, SearchRequest};
use travelease_shared::Hotel;

/// Secondary narrowing applied after a search: price band and required facilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    pub price: PriceRange,
    /// Every label here must be on the hotel. Empty means no constraint.
    pub facilities: Vec<String>,
}

impl HotelFilter {
    pub fn new(price: PriceRange, facilities: Vec<String>) -> Self {
        Self { price, facilities }
    }

    pub fn is_noop(&self) -> bool {
        self.price.is_unbounded() && self.facilities.is_empty()
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        self.price.contains(hotel.price_per_night)
            && self.facilities.iter().all(|f| hotel.has_facility(f))
    }

    pub fn apply(&self, hotels: Vec<Hotel>) -> Vec<Hotel> {
        if self.is_noop() {
            return hotels;
        }
        hotels.into_iter().filter(|h| self.matches(h)).collect()
    }
}

impl From<&SearchRequest> for HotelFilter {
    fn from(req: &SearchRequest) -> Self {
        Self::new(req.price, req.facilities.clone())
    }
}

/// Distinct facility labels across `hotels`, in first-seen order.
pub fn facility_options(hotels: &[Hotel]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for facility in hotels.iter().flat_map(|h| h.facilities.iter()) {
        if !options.contains(facility) {
            options.push(facility.clone());
        }
    }
    options
}
