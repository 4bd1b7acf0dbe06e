//! Message handler: routes each inbound message, dialogue first, then by
//! command. Messages that match neither get no reply.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::UserId;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

use crate::dialogue::{self, ProfileDraft, ProfileStep, TrackerDialogue, TrackerState};
use crate::food::FoodClient;
use crate::goals;
use crate::profile::ProfileStore;
use crate::texts;
use crate::weather::WeatherClient;

use super::dialogue_manager::{handle_food_grams_input, handle_profile_step_input};

/// The closed command surface of the bot. Parsing is exhaustive: anything
/// that does not match one of these variants is ignored.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case")]
pub enum Command {
    Start,
    SetProfile,
    LogWater(String),
    LogFood(String),
    LogWorkout(String),
    CheckProgress,
    DeleteDay,
}

/// Unit suffixes accepted after a water amount.
const WATER_UNIT_SUFFIXES: &[&str] = &["ml"];

/// Parse a water amount in ml, tolerating a trailing unit suffix
/// ("400", "400 ml", "400ml"). Non-positive amounts are rejected.
pub fn parse_water_amount(args: &str) -> Option<f64> {
    let mut text = args.trim();
    for unit in WATER_UNIT_SUFFIXES {
        if let Some(stripped) = text.strip_suffix(unit) {
            text = stripped.trim_end();
            break;
        }
    }
    let amount: f64 = text.parse().ok()?;
    (amount > 0.0).then_some(amount)
}

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: TrackerDialogue,
    store: ProfileStore,
    weather: WeatherClient,
    food: FoodClient,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(user_id) = msg.from.as_ref().map(|user| user.id) else {
        return Ok(());
    };

    info!(user_id = %user_id, text, "Inbound message");

    // An active dialog consumes the message unconditionally; dialog input
    // is never interpreted as a new command.
    match dialogue.get().await? {
        Some(TrackerState::SettingProfile { step, draft }) => {
            return handle_profile_step_input(
                &bot, &msg, dialogue, store, weather, user_id, step, draft, text,
            )
            .await;
        }
        Some(TrackerState::LoggingFood { food: food_name }) => {
            return handle_food_grams_input(
                &bot, &msg, dialogue, store, food, user_id, &food_name, text,
            )
            .await;
        }
        Some(TrackerState::Idle) | None => {}
    }

    let command = match Command::parse(text, "hydrocal_bot") {
        Ok(command) => command,
        Err(_) => {
            debug!(user_id = %user_id, "Ignoring unrecognized message");
            return Ok(());
        }
    };

    match command {
        Command::Start => {
            bot.send_message(msg.chat.id, texts::HELP).await?;
        }
        Command::SetProfile => {
            // Any in-progress dialog is discarded; an existing profile is
            // only replaced once the new dialog finalizes.
            dialogue
                .update(TrackerState::SettingProfile {
                    step: ProfileStep::Weight,
                    draft: ProfileDraft::default(),
                })
                .await?;
            bot.send_message(msg.chat.id, ProfileStep::Weight.prompt())
                .await?;
        }
        Command::LogWater(args) => {
            handle_log_water(&bot, &msg, &store, user_id, &args).await?;
        }
        Command::LogFood(args) => {
            handle_log_food(&bot, &msg, dialogue, &args).await?;
        }
        Command::LogWorkout(args) => {
            handle_log_workout(&bot, &msg, &store, user_id, &args).await?;
        }
        Command::CheckProgress => {
            handle_check_progress(&bot, &msg, &store, &weather, user_id).await?;
        }
        Command::DeleteDay => {
            handle_delete_day(&bot, &msg, &store, user_id).await?;
        }
    }

    Ok(())
}

async fn handle_log_water(
    bot: &Bot,
    msg: &Message,
    store: &ProfileStore,
    user_id: UserId,
    args: &str,
) -> Result<()> {
    let Some(amount) = parse_water_amount(args) else {
        bot.send_message(msg.chat.id, texts::WATER_USAGE).await?;
        return Ok(());
    };

    let reply = store
        .update(user_id, |profile| {
            profile.logged_water += amount;
            let remaining = (profile.water_goal - profile.logged_water).max(0.0);
            texts::water_logged(amount, remaining)
        })
        .await;

    match reply {
        Some(reply) => {
            bot.send_message(msg.chat.id, reply).await?;
        }
        None => {
            bot.send_message(msg.chat.id, texts::SET_PROFILE_FIRST)
                .await?;
        }
    }
    Ok(())
}

async fn handle_log_food(
    bot: &Bot,
    msg: &Message,
    dialogue: TrackerDialogue,
    args: &str,
) -> Result<()> {
    let Some(food) = dialogue::validate_food_name(args) else {
        bot.send_message(msg.chat.id, texts::FOOD_USAGE).await?;
        return Ok(());
    };

    bot.send_message(msg.chat.id, texts::grams_prompt(&food))
        .await?;
    dialogue.update(TrackerState::LoggingFood { food }).await?;
    Ok(())
}

async fn handle_log_workout(
    bot: &Bot,
    msg: &Message,
    store: &ProfileStore,
    user_id: UserId,
    args: &str,
) -> Result<()> {
    let mut parts = args.split_whitespace();
    let (Some(kind), Some(minutes_raw)) = (parts.next(), parts.next()) else {
        bot.send_message(msg.chat.id, texts::WORKOUT_USAGE).await?;
        return Ok(());
    };
    let minutes: f64 = match minutes_raw.parse() {
        Ok(minutes) if minutes > 0.0 => minutes,
        _ => {
            bot.send_message(msg.chat.id, texts::WORKOUT_USAGE).await?;
            return Ok(());
        }
    };

    let reply = store
        .update(user_id, |profile| {
            let burned = goals::calories_burned(kind, minutes, profile.weight);
            let extra_water = goals::workout_water_bonus(minutes);
            profile.burned_calories += burned;
            // The bonus raises the goal itself; it is not a logged amount.
            profile.water_goal += extra_water;
            texts::workout_logged(kind, minutes, burned, extra_water)
        })
        .await;

    match reply {
        Some(reply) => {
            bot.send_message(msg.chat.id, reply).await?;
        }
        None => {
            bot.send_message(msg.chat.id, texts::SET_PROFILE_FIRST)
                .await?;
        }
    }
    Ok(())
}

async fn handle_check_progress(
    bot: &Bot,
    msg: &Message,
    store: &ProfileStore,
    weather: &WeatherClient,
    user_id: UserId,
) -> Result<()> {
    // Snapshot the city first so the store lock is not held across the
    // provider call.
    let Some(city) = store.update(user_id, |profile| profile.city.clone()).await else {
        bot.send_message(msg.chat.id, texts::SET_PROFILE_FIRST)
            .await?;
        return Ok(());
    };

    let temp_c = weather.temperature(&city).await;

    let report = store
        .update(user_id, |profile| {
            // water_goal tracks current weather; calorie_goal stays as
            // computed at profile setup.
            profile.water_goal = goals::water_goal(profile, temp_c);
            texts::progress_report(profile)
        })
        .await;

    if let Some(report) = report {
        bot.send_message(msg.chat.id, report).await?;
    }
    Ok(())
}

async fn handle_delete_day(
    bot: &Bot,
    msg: &Message,
    store: &ProfileStore,
    user_id: UserId,
) -> Result<()> {
    let reset = store
        .update(user_id, |profile| profile.reset_day())
        .await;

    // Silent no-op when there is no profile on record.
    if reset.is_some() {
        info!(user_id = %user_id, "Daily accumulators reset");
        bot.send_message(msg.chat.id, texts::DAY_RESET).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_water_amount_formats() {
        assert_eq!(parse_water_amount("400"), Some(400.0));
        assert_eq!(parse_water_amount(" 400 ml "), Some(400.0));
        assert_eq!(parse_water_amount("400ml"), Some(400.0));
        assert_eq!(parse_water_amount("250.5"), Some(250.5));
    }

    #[test]
    fn test_parse_water_amount_rejects_garbage() {
        assert_eq!(parse_water_amount(""), None);
        assert_eq!(parse_water_amount("ml"), None);
        assert_eq!(parse_water_amount("a lot"), None);
        assert_eq!(parse_water_amount("-100"), None);
        assert_eq!(parse_water_amount("0"), None);
    }
}
