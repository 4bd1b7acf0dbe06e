//! Current-temperature lookup via OpenWeatherMap.
//!
//! Lookup failure is data, not an error: every failure path yields the
//! fixed fallback temperature so goal computation always has a value.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

/// Temperature assumed when the provider cannot answer.
pub const FALLBACK_TEMP_C: f64 = 20.0;

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

/// Client for the weather provider. Cloneable; shares one reqwest client.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Current temperature for `city` in °C.
    ///
    /// A missing API key, transport failure, non-success status or decode
    /// failure all fall back to [`FALLBACK_TEMP_C`].
    pub async fn temperature(&self, city: &str) -> f64 {
        let Some(key) = self.api_key.as_deref() else {
            debug!("No weather API key configured, using fallback temperature");
            return FALLBACK_TEMP_C;
        };

        let result = self
            .http
            .get(WEATHER_URL)
            .query(&[("q", city), ("appid", key), ("units", "metric")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => match resp.json::<WeatherResponse>().await {
                Ok(body) => {
                    debug!(city, temp = body.main.temp, "Weather lookup succeeded");
                    body.main.temp
                }
                Err(e) => {
                    warn!(city, error = %e, "Failed to decode weather response");
                    FALLBACK_TEMP_C
                }
            },
            Ok(resp) => {
                warn!(city, status = %resp.status(), "Weather lookup returned non-success status");
                FALLBACK_TEMP_C
            }
            Err(e) => {
                warn!(city, error = %e, "Weather lookup failed");
                FALLBACK_TEMP_C
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_uses_fallback() {
        let client = WeatherClient::new(None);
        assert_eq!(client.temperature("Paris").await, FALLBACK_TEMP_C);
    }
}
