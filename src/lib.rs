//! # Hydrocal Telegram Bot
//!
//! A Telegram bot that tracks daily water intake, calories and activity
//! against per-user goals computed from a short profile-setup dialog.

pub mod bot;
pub mod dialogue;
pub mod food;
pub mod goals;
pub mod profile;
pub mod texts;
pub mod weather;
