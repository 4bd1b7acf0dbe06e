//! Per-user profile data and the in-memory profile store.
//!
//! State is process-memory only and lost on restart; durability is
//! deliberately out of scope.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use teloxide::types::UserId;
use tokio::sync::Mutex;

/// Gender used by the BMR formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a user-entered gender token, case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A user's tracking profile: static fields collected by the setup dialog,
/// derived daily goals, and the day's accumulators.
///
/// `water_goal` and `calorie_goal` are always derived via [`crate::goals`],
/// never set directly from user input. The accumulators only grow until
/// `/delete_day` zeroes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight: f64,
    pub height: u32,
    pub age: u32,
    pub gender: Gender,
    pub activity_minutes: u32,
    pub city: String,
    pub water_goal: f64,
    pub calorie_goal: f64,
    pub logged_water: f64,
    pub logged_calories: f64,
    pub burned_calories: f64,
}

impl UserProfile {
    /// Zero the day's accumulators. Goals and static fields are untouched.
    pub fn reset_day(&mut self) {
        self.logged_water = 0.0;
        self.logged_calories = 0.0;
        self.burned_calories = 0.0;
    }
}

/// Cloneable handle to the shared user-id → profile map.
///
/// All mutations go through [`ProfileStore::update`], which runs the
/// closure under the store lock so a single user's profile is never
/// observed in a torn intermediate state. The lock is never held across
/// a provider call.
#[derive(Clone, Debug, Default)]
pub struct ProfileStore {
    inner: Arc<Mutex<HashMap<UserId, UserProfile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace the profile for `user_id`.
    pub async fn insert(&self, user_id: UserId, profile: UserProfile) {
        self.inner.lock().await.insert(user_id, profile);
    }

    /// A snapshot of the profile for `user_id`, if one exists.
    pub async fn get(&self, user_id: UserId) -> Option<UserProfile> {
        self.inner.lock().await.get(&user_id).cloned()
    }

    /// Run `f` against the user's profile under the store lock.
    ///
    /// Returns `None` without touching anything when the user has no
    /// profile on record.
    pub async fn update<T>(
        &self,
        user_id: UserId,
        f: impl FnOnce(&mut UserProfile) -> T,
    ) -> Option<T> {
        self.inner.lock().await.get_mut(&user_id).map(f)
    }
}
