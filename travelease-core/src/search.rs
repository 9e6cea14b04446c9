use serde::Deserialize;
use crate::validation::ValidationErrors;

/// Raw `/api/search` query string. Every value arrives as text and is only
/// trusted after `SearchRequest::parse`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub destination: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Comma separated facility labels
    pub facilities: Option<String>,
}

/// Inclusive nightly price bounds. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl PriceRange {
    pub fn between(min: i32, max: i32) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn contains(&self, price: i32) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub destination: Option<String>,
    pub price: PriceRange,
    pub facilities: Vec<String>,
}

impl SearchRequest {
    pub fn parse(params: SearchParams) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let min = parse_price(params.min_price, "minPrice", &mut errors);
        let max = parse_price(params.max_price, "maxPrice", &mut errors);
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                errors.push("minPrice", "Must not be greater than maxPrice");
            }
        }

        let facilities = params
            .facilities
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        errors.into_result(Self {
            query: non_blank(params.query),
            destination: non_blank(params.destination),
            price: PriceRange { min, max },
            facilities,
        })
    }
}

/// Blank means absent. Anything else is kept verbatim.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_price(raw: Option<String>, path: &str, errors: &mut ValidationErrors) -> Option<i32> {
    let raw = non_blank(raw)?;
    match raw.trim().parse::<i32>() {
        Ok(value) if value >= 0 => Some(value),
        Ok(_) => {
            errors.push(path, "Must be greater than or equal to 0");
            None
        }
        Err(_) => {
            errors.push(path, "Expected integer");
            None
        }
    }
}
