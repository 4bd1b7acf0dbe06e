//! Daily goal computation: BMR, calorie goal, water goal and workout burn.
//!
//! Everything in this module is a pure function over a [`UserProfile`] and
//! auxiliary inputs (ambient temperature, activity kind/duration). Input
//! validation happens in the dialog layer, not here.

use crate::profile::{Gender, UserProfile};

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
pub fn bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * f64::from(profile.height)
        - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calorie goal: BMR scaled by an activity factor derived from
/// minutes of activity per day.
pub fn calorie_goal(profile: &UserProfile) -> f64 {
    let activity_factor = 1.2 + (f64::from(profile.activity_minutes) / 1440.0) * 0.5;
    bmr(profile) * activity_factor
}

/// Daily water goal in ml for the given ambient temperature in °C.
///
/// 30 ml per kg of body weight, plus 500 ml per full 30 minutes of daily
/// activity, plus 750 ml on hot days (above 25 °C).
pub fn water_goal(profile: &UserProfile, temp_c: f64) -> f64 {
    let base = profile.weight * 30.0;
    let activity_bonus = f64::from(profile.activity_minutes / 30) * 500.0;
    let weather_bonus = if temp_c > 25.0 { 750.0 } else { 0.0 };
    base + activity_bonus + weather_bonus
}

/// Calories burned by a workout, from the MET of the activity kind.
pub fn calories_burned(kind: &str, minutes: f64, weight: f64) -> f64 {
    met_for(kind) * 3.5 * weight / 200.0 * minutes
}

/// Extra water credited to the daily goal per logged workout:
/// 200 ml per full 30 minutes.
pub fn workout_water_bonus(minutes: f64) -> f64 {
    (minutes / 30.0).floor() * 200.0
}

/// MET values for the supported activity kinds, matched case-insensitively.
/// Unrecognized kinds count as 1.0.
fn met_for(kind: &str) -> f64 {
    match kind.to_lowercase().as_str() {
        "running" => 10.0,
        "cycling" => 8.0,
        "swimming" => 6.0,
        "walking" => 2.0,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight: f64, activity_minutes: u32) -> UserProfile {
        UserProfile {
            weight,
            height: 170,
            age: 25,
            gender: Gender::Male,
            activity_minutes,
            city: "Paris".to_string(),
            water_goal: 0.0,
            calorie_goal: 0.0,
            logged_water: 0.0,
            logged_calories: 0.0,
            burned_calories: 0.0,
        }
    }

    #[test]
    fn test_met_lookup_is_case_insensitive() {
        assert_eq!(calories_burned("Running", 30.0, 70.0), calories_burned("running", 30.0, 70.0));
        assert_eq!(calories_burned("SWIMMING", 10.0, 70.0), calories_burned("swimming", 10.0, 70.0));
    }

    #[test]
    fn test_unknown_activity_defaults_to_met_one() {
        // MET 1.0: 1.0 * 3.5 * 70 / 200 * 30
        assert!((calories_burned("yoga", 30.0, 70.0) - 36.75).abs() < 1e-9);
    }

    #[test]
    fn test_water_goal_activity_bonus_is_floored() {
        // 29 minutes does not reach a full 30-minute block
        assert_eq!(water_goal(&profile(70.0, 29), 20.0), 2100.0);
        assert_eq!(water_goal(&profile(70.0, 30), 20.0), 2600.0);
    }
}
