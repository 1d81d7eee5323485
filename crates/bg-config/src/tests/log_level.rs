use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_known_levels_parse_case_insensitively() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str(" warning ").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_unknown_level_falls_back_to_info() {
    assert_eq!(LogLevel::from_str("chatty").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_non_string_toml_value_falls_back_to_info() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let parsed: Wrapper = toml::from_str("level = 3").unwrap();

    assert_eq!(parsed.level.0, LevelFilter::Info);
}
