//! Reply texts and prompts. The bot speaks a single fixed language, so
//! these are plain constants and formatters rather than a translation layer.

use crate::profile::UserProfile;

pub const PROMPT_WEIGHT: &str = "Enter your weight (kg):";
pub const PROMPT_HEIGHT: &str = "Enter your height (cm):";
pub const PROMPT_AGE: &str = "Enter your age:";
pub const PROMPT_GENDER: &str = "Gender (male/female):";
pub const PROMPT_ACTIVITY: &str = "Minutes of activity per day:";
pub const PROMPT_CITY: &str = "Your city:";

pub const RETRY_NUMBER: &str = "Invalid format. Enter a number:";
pub const RETRY_GENDER: &str = "Enter male or female:";

pub const SET_PROFILE_FIRST: &str = "Set up your profile first: /set_profile";
pub const WATER_USAGE: &str = "Usage: /log_water 400";
pub const FOOD_USAGE: &str = "Usage: /log_food <product>";
pub const WORKOUT_USAGE: &str =
    "Usage: /log_workout <kind> <minutes>, e.g. /log_workout running 30";
pub const GRAMS_INVALID: &str = "Invalid format. Enter the number of grams (e.g. 100):";
pub const GRAMS_RANGE: &str = "Enter a sensible amount of grams (1-5000):";
pub const DAY_RESET: &str = "Daily data reset!";

pub const HELP: &str = "Hi! I track water, calories and activity.\n\
Commands:\n\
/set_profile - set up your profile\n\
/log_water <ml> - log water\n\
/log_food <food> - log food\n\
/log_workout <kind> <minutes> - log a workout\n\
/delete_day - reset today's data\n\
/check_progress - show progress";

/// First character uppercased, the rest lowercased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

pub fn grams_prompt(food: &str) -> String {
    format!("{food}: how many grams did you eat?")
}

// The amount is echoed exactly as credited, including fractions.
pub fn water_logged(amount: f64, remaining: f64) -> String {
    format!("Logged {amount} ml. Remaining: {remaining:.0} ml")
}

pub fn food_not_found(food: &str) -> String {
    format!("Could not find data for {food}. Use /log_food again.")
}

pub fn food_logged(calories: f64, grams: f64, food: &str, density: f64) -> String {
    format!(
        "Logged: {calories:.1} kcal from {grams:.0} g of {food}\n\
         (Energy density: {density:.1} kcal/100g)"
    )
}

pub fn workout_logged(kind: &str, minutes: f64, burned: f64, extra_water: f64) -> String {
    format!(
        "{} {minutes:.0} min: {burned:.0} kcal burned.\n\
         Extra water for today: {extra_water:.0} ml",
        capitalize(kind)
    )
}

pub fn profile_saved(profile: &UserProfile, temp_c: f64) -> String {
    format!(
        "Profile saved!\n\
         Water goal: {:.0} ml\n\
         Calorie goal: {:.0} kcal\n\
         Temperature in {}: {:.1} C",
        profile.water_goal, profile.calorie_goal, profile.city, temp_c
    )
}

pub fn progress_report(profile: &UserProfile) -> String {
    let water_remaining = (profile.water_goal - profile.logged_water).max(0.0);
    let calorie_remaining =
        (profile.calorie_goal - profile.logged_calories + profile.burned_calories).max(0.0);
    format!(
        "Progress:\n\n\
         Water:\n\
         - Drunk: {:.0} ml of {:.0} ml\n\
         - Remaining: {:.0} ml\n\n\
         Calories:\n\
         - Consumed: {:.0} kcal of {:.0}\n\
         - Burned: {:.0} kcal\n\
         - Remaining: {:.0} kcal",
        profile.logged_water,
        profile.water_goal,
        water_remaining,
        profile.logged_calories,
        profile.calorie_goal,
        profile.burned_calories,
        calorie_remaining
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_logged_echoes_exact_amount() {
        assert_eq!(water_logged(330.5, 2269.5), "Logged 330.5 ml. Remaining: 2270 ml");
        assert_eq!(water_logged(400.0, 2200.0), "Logged 400 ml. Remaining: 2200 ml");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("paris"), "Paris");
        assert_eq!(capitalize("NEW YORK"), "New york");
        assert_eq!(capitalize("  moscow  "), "Moscow");
        assert_eq!(capitalize(""), "");
    }
}
