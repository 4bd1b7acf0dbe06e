//! Energy-density lookup via the Open Food Facts search API.
//!
//! Returns kcal per 100 g for a free-text food name; 0.0 means "nothing
//! found" and is surfaced to the user by the food-logging dialog.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const SEARCH_URL: &str = "https://world.openfoodfacts.org/cgi/search.pl";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    // The API serves this field as either a number or a string.
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<Value>,
}

impl Nutriments {
    fn energy_density(&self) -> f64 {
        match &self.energy_kcal_100g {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

/// Client for the food-composition provider.
#[derive(Clone, Debug, Default)]
pub struct FoodClient {
    http: reqwest::Client,
}

impl FoodClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Energy density of `food` in kcal/100g, taken from the first search
    /// result. Any failure or empty result yields 0.0.
    pub async fn energy_density(&self, food: &str) -> f64 {
        let result = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("action", "process"),
                ("search_terms", food),
                ("json", "1"),
                ("page_size", "20"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => match resp.json::<SearchResponse>().await {
                Ok(body) => {
                    let density = body
                        .products
                        .first()
                        .map(|p| p.nutriments.energy_density())
                        .unwrap_or(0.0);
                    debug!(food, density, "Food lookup completed");
                    density
                }
                Err(e) => {
                    warn!(food, error = %e, "Failed to decode food search response");
                    0.0
                }
            },
            Ok(resp) => {
                warn!(food, status = %resp.status(), "Food lookup returned non-success status");
                0.0
            }
            Err(e) => {
                warn!(food, error = %e, "Food lookup failed");
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_density_accepts_number_or_string() {
        let numeric: SearchResponse =
            serde_json::from_str(r#"{"products":[{"nutriments":{"energy-kcal_100g":89.5}}]}"#)
                .unwrap();
        assert_eq!(numeric.products[0].nutriments.energy_density(), 89.5);

        let stringy: SearchResponse =
            serde_json::from_str(r#"{"products":[{"nutriments":{"energy-kcal_100g":"52"}}]}"#)
                .unwrap();
        assert_eq!(stringy.products[0].nutriments.energy_density(), 52.0);
    }

    #[test]
    fn test_missing_nutriments_yield_zero() {
        let body: SearchResponse = serde_json::from_str(r#"{"products":[{}]}"#).unwrap();
        assert_eq!(body.products[0].nutriments.energy_density(), 0.0);

        let empty: SearchResponse = serde_json::from_str(r#"{"products":[]}"#).unwrap();
        assert!(empty.products.is_empty());
    }
}
