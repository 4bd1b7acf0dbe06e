//! Dialogue manager: handles the next step of an active dialog.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ReplyMarkup, UserId};
use tracing::{info, warn};

use crate::dialogue::{
    self, GramsOutcome, ProfileDraft, ProfileStep, StepOutcome, TrackerDialogue, TrackerState,
};
use crate::food::FoodClient;
use crate::profile::ProfileStore;
use crate::texts;
use crate::weather::WeatherClient;

/// Handle one message of the profile-setup dialog.
///
/// On the terminal step the city's temperature is fetched, both goals are
/// computed, the profile is stored (replacing any previous one) and the
/// dialog ends. The completion reply clears any pending reply keyboard.
#[allow(clippy::too_many_arguments)]
pub async fn handle_profile_step_input(
    bot: &Bot,
    msg: &Message,
    dialogue: TrackerDialogue,
    store: ProfileStore,
    weather: WeatherClient,
    user_id: UserId,
    step: ProfileStep,
    draft: ProfileDraft,
    text: &str,
) -> Result<()> {
    match dialogue::apply_step(step, &draft, text) {
        StepOutcome::Next { draft, next } => {
            dialogue
                .update(TrackerState::SettingProfile { step: next, draft })
                .await?;
            bot.send_message(msg.chat.id, next.prompt()).await?;
        }
        StepOutcome::Retry { message } => {
            // State untouched; the user retries the same step.
            bot.send_message(msg.chat.id, message).await?;
        }
        StepOutcome::Complete { draft, city } => {
            let temp_c = weather.temperature(&city).await;
            let profile = dialogue::finish_profile(&draft, city, temp_c)?;
            let reply = texts::profile_saved(&profile, temp_c);

            store.insert(user_id, profile).await;
            dialogue.exit().await?;

            info!(user_id = %user_id, "Profile saved");
            bot.send_message(msg.chat.id, reply)
                .reply_markup(ReplyMarkup::kb_remove())
                .await?;
        }
    }
    Ok(())
}

/// Handle the grams entry of the food-logging dialog.
///
/// Invalid or out-of-range grams re-prompt with the dialog kept alive. A
/// failed density lookup ends the dialog with an explicit failure message.
#[allow(clippy::too_many_arguments)]
pub async fn handle_food_grams_input(
    bot: &Bot,
    msg: &Message,
    dialogue: TrackerDialogue,
    store: ProfileStore,
    food_client: FoodClient,
    user_id: UserId,
    food: &str,
    text: &str,
) -> Result<()> {
    let grams = match dialogue::validate_grams(text) {
        GramsOutcome::Valid(grams) => grams,
        GramsOutcome::Retry(message) => {
            bot.send_message(msg.chat.id, message).await?;
            return Ok(());
        }
    };

    let density = food_client.energy_density(food).await;
    if density <= 0.0 {
        warn!(user_id = %user_id, food, "Food lookup returned no energy data");
        bot.send_message(msg.chat.id, texts::food_not_found(food))
            .await?;
        dialogue.exit().await?;
        return Ok(());
    }

    let calories = density * grams / 100.0;
    let credited = store
        .update(user_id, |profile| {
            profile.logged_calories += calories;
        })
        .await;

    if credited.is_some() {
        info!(user_id = %user_id, food, grams, calories, "Food logged");
        bot.send_message(msg.chat.id, texts::food_logged(calories, grams, food, density))
            .await?;
    } else {
        bot.send_message(msg.chat.id, texts::SET_PROFILE_FIRST)
            .await?;
    }

    dialogue.exit().await?;
    Ok(())
}
