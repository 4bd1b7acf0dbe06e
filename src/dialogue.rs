//! Conversation state machine for the profile-setup and food-logging dialogs.
//!
//! The step logic here is synchronous and provider-free; the handlers in
//! [`crate::bot::dialogue_manager`] perform the weather and food lookups
//! and feed the results back in.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::goals;
use crate::profile::{Gender, UserProfile};
use crate::texts;

/// Per-chat conversation state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum TrackerState {
    #[default]
    Idle,
    SettingProfile {
        step: ProfileStep,
        draft: ProfileDraft,
    },
    LoggingFood {
        food: String,
    },
}

/// Type alias for the tracker dialogue
pub type TrackerDialogue = Dialogue<TrackerState, InMemStorage<TrackerState>>;

/// Ordered steps of the profile-setup dialog. `City` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStep {
    Weight,
    Height,
    Age,
    Gender,
    Activity,
    City,
}

impl ProfileStep {
    pub fn prompt(self) -> &'static str {
        match self {
            ProfileStep::Weight => texts::PROMPT_WEIGHT,
            ProfileStep::Height => texts::PROMPT_HEIGHT,
            ProfileStep::Age => texts::PROMPT_AGE,
            ProfileStep::Gender => texts::PROMPT_GENDER,
            ProfileStep::Activity => texts::PROMPT_ACTIVITY,
            ProfileStep::City => texts::PROMPT_CITY,
        }
    }

    fn retry_prompt(self) -> &'static str {
        match self {
            ProfileStep::Gender => texts::RETRY_GENDER,
            _ => texts::RETRY_NUMBER,
        }
    }
}

/// Validated fields collected so far by the setup dialog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub weight: Option<f64>,
    pub height: Option<u32>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_minutes: Option<u32>,
}

/// Result of feeding one message into the profile-setup dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Field stored, dialog advanced to `next`.
    Next { draft: ProfileDraft, next: ProfileStep },
    /// Input rejected; the same step is re-prompted and nothing changes.
    Retry { message: &'static str },
    /// Terminal step accepted; the caller fetches the city's temperature
    /// and finalizes via [`finish_profile`].
    Complete { draft: ProfileDraft, city: String },
}

/// Apply one message to the current setup step.
pub fn apply_step(step: ProfileStep, draft: &ProfileDraft, text: &str) -> StepOutcome {
    let mut draft = draft.clone();
    let text = text.trim();
    let next = match step {
        ProfileStep::Weight => match text.parse::<f64>() {
            Ok(weight) if weight > 0.0 => {
                draft.weight = Some(weight);
                ProfileStep::Height
            }
            _ => return StepOutcome::Retry { message: step.retry_prompt() },
        },
        ProfileStep::Height => match text.parse::<u32>() {
            Ok(height) if height > 0 => {
                draft.height = Some(height);
                ProfileStep::Age
            }
            _ => return StepOutcome::Retry { message: step.retry_prompt() },
        },
        ProfileStep::Age => match text.parse::<u32>() {
            Ok(age) if age > 0 => {
                draft.age = Some(age);
                ProfileStep::Gender
            }
            _ => return StepOutcome::Retry { message: step.retry_prompt() },
        },
        ProfileStep::Gender => match Gender::parse(text) {
            Some(gender) => {
                draft.gender = Some(gender);
                ProfileStep::Activity
            }
            None => return StepOutcome::Retry { message: step.retry_prompt() },
        },
        ProfileStep::Activity => match text.parse::<u32>() {
            Ok(minutes) => {
                draft.activity_minutes = Some(minutes);
                ProfileStep::City
            }
            Err(_) => return StepOutcome::Retry { message: step.retry_prompt() },
        },
        ProfileStep::City => {
            if text.is_empty() {
                return StepOutcome::Retry { message: texts::PROMPT_CITY };
            }
            return StepOutcome::Complete {
                draft,
                city: texts::capitalize(text),
            };
        }
    };
    StepOutcome::Next { draft, next }
}

/// Build the finished profile from a complete draft, computing both goals
/// with the given ambient temperature.
///
/// Every field must have been collected; a missing field is a bug in the
/// dialog flow, not a user-input problem, and is never papered over with
/// defaults.
pub fn finish_profile(draft: &ProfileDraft, city: String, temp_c: f64) -> Result<UserProfile> {
    let (Some(weight), Some(height), Some(age), Some(gender), Some(activity_minutes)) = (
        draft.weight,
        draft.height,
        draft.age,
        draft.gender,
        draft.activity_minutes,
    ) else {
        bail!("profile dialog finished with an incomplete draft: {draft:?}");
    };

    let mut profile = UserProfile {
        weight,
        height,
        age,
        gender,
        activity_minutes,
        city,
        water_goal: 0.0,
        calorie_goal: 0.0,
        logged_water: 0.0,
        logged_calories: 0.0,
        burned_calories: 0.0,
    };
    profile.water_goal = goals::water_goal(&profile, temp_c);
    profile.calorie_goal = goals::calorie_goal(&profile);
    Ok(profile)
}

/// Result of validating a grams entry in the food-logging dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum GramsOutcome {
    Valid(f64),
    /// Re-prompt; the dialog state is kept so the user can retry.
    Retry(&'static str),
}

/// Validate a grams entry. Out-of-range values re-prompt just like parse
/// failures, without clearing the dialog.
pub fn validate_grams(text: &str) -> GramsOutcome {
    match text.trim().parse::<f64>() {
        Ok(grams) if grams > 0.0 && grams <= 5000.0 => GramsOutcome::Valid(grams),
        Ok(_) => GramsOutcome::Retry(texts::GRAMS_RANGE),
        Err(_) => GramsOutcome::Retry(texts::GRAMS_INVALID),
    }
}

/// Validates a food name given to /log_food.
pub fn validate_food_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_boundaries() {
        assert_eq!(validate_grams("5000"), GramsOutcome::Valid(5000.0));
        assert_eq!(validate_grams("5000.01"), GramsOutcome::Retry(texts::GRAMS_RANGE));
        assert_eq!(validate_grams("0"), GramsOutcome::Retry(texts::GRAMS_RANGE));
        assert_eq!(validate_grams("-10"), GramsOutcome::Retry(texts::GRAMS_RANGE));
        assert_eq!(validate_grams("abc"), GramsOutcome::Retry(texts::GRAMS_INVALID));
    }

    #[test]
    fn test_food_name_validation() {
        assert_eq!(validate_food_name("  banana  "), Some("banana".to_string()));
        assert_eq!(validate_food_name("   "), None);
        assert_eq!(validate_food_name(""), None);
    }

    #[test]
    fn test_rejected_step_keeps_draft() {
        let draft = ProfileDraft {
            weight: Some(70.0),
            ..Default::default()
        };
        let outcome = apply_step(ProfileStep::Height, &draft, "not a number");
        assert_eq!(
            outcome,
            StepOutcome::Retry { message: texts::RETRY_NUMBER }
        );
    }
}
