use std::env;

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hydrocal::bot::message_handler;
use hydrocal::dialogue::TrackerState;
use hydrocal::food::FoodClient;
use hydrocal::profile::ProfileStore;
use hydrocal::weather::WeatherClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Hydrocal Telegram Bot");

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    // Weather key is optional; without it water goals use the fallback
    // temperature.
    let weather_api_key = env::var("OPENWEATHER_API_KEY").ok();
    if weather_api_key.is_none() {
        info!("OPENWEATHER_API_KEY not set, using fallback temperature for water goals");
    }

    let bot = Bot::new(bot_token);
    let store = ProfileStore::new();
    let weather = WeatherClient::new(weather_api_key);
    let food = FoodClient::new();

    info!("Bot initialized, starting dispatcher");

    let handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<TrackerState>, TrackerState>()
        .endpoint(message_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<TrackerState>::new(),
            store,
            weather,
            food
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
