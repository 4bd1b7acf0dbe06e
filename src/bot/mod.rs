//! Bot module for handling Telegram interactions
//!
//! - `message_handler`: dialogue-first routing and command dispatch
//! - `dialogue_manager`: profile-setup and food-grams step handlers

pub mod dialogue_manager;
pub mod message_handler;

// Re-export main handler function for use in main.rs
pub use message_handler::message_handler;

// Re-export for integration tests
pub use message_handler::{parse_water_amount, Command};
