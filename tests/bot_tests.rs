use hydrocal::bot::{parse_water_amount, Command};
use teloxide::utils::command::BotCommands;

/// The command surface parses as a closed set.
#[test]
fn test_command_parsing() {
    assert_eq!(
        Command::parse("/start", "hydrocal_bot").unwrap(),
        Command::Start
    );
    assert_eq!(
        Command::parse("/set_profile", "hydrocal_bot").unwrap(),
        Command::SetProfile
    );
    assert_eq!(
        Command::parse("/log_water 400 ml", "hydrocal_bot").unwrap(),
        Command::LogWater("400 ml".to_string())
    );
    assert_eq!(
        Command::parse("/log_food oatmeal", "hydrocal_bot").unwrap(),
        Command::LogFood("oatmeal".to_string())
    );
    assert_eq!(
        Command::parse("/log_workout running 30", "hydrocal_bot").unwrap(),
        Command::LogWorkout("running 30".to_string())
    );
    assert_eq!(
        Command::parse("/check_progress", "hydrocal_bot").unwrap(),
        Command::CheckProgress
    );
    assert_eq!(
        Command::parse("/delete_day", "hydrocal_bot").unwrap(),
        Command::DeleteDay
    );
}

/// Anything outside the command set fails to parse (and the handler then
/// stays silent).
#[test]
fn test_unknown_commands_do_not_parse() {
    assert!(Command::parse("/unknown", "hydrocal_bot").is_err());
    assert!(Command::parse("hello there", "hydrocal_bot").is_err());
}

#[test]
fn test_water_amount_accepted_formats() {
    assert_eq!(parse_water_amount("400"), Some(400.0));
    assert_eq!(parse_water_amount("400 ml"), Some(400.0));
    assert_eq!(parse_water_amount("400ml"), Some(400.0));
    assert_eq!(parse_water_amount("  330.5  "), Some(330.5));
}

#[test]
fn test_water_amount_rejected_formats() {
    assert_eq!(parse_water_amount(""), None);
    assert_eq!(parse_water_amount("ml"), None);
    assert_eq!(parse_water_amount("two glasses"), None);
    assert_eq!(parse_water_amount("-250"), None);
    assert_eq!(parse_water_amount("0"), None);
}
