use shift_time::config::Config;
use shift_time::{DisplayPrecision, TimeConversionService};
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("REFERENCE_TIMEZONE", "Europe/Berlin");
    env::set_var("DISPLAY_PLACEHOLDER", "Time pending");

    let config = Config::from_env().unwrap();

    assert_eq!(config.reference_timezone, chrono_tz::Europe::Berlin);
    assert_eq!(config.display_placeholder, "Time pending");

    // Clean up
    env::remove_var("REFERENCE_TIMEZONE");
    env::remove_var("DISPLAY_PLACEHOLDER");
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("REFERENCE_TIMEZONE");
    env::remove_var("DISPLAY_PLACEHOLDER");

    let config = Config::from_env().unwrap();

    assert_eq!(config.reference_timezone, chrono_tz::Australia::Melbourne);
    assert_eq!(config.display_placeholder, "Date TBD");
}

#[test]
fn test_config_invalid_timezone() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("REFERENCE_TIMEZONE", "Australia/Nowhere");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid REFERENCE_TIMEZONE"));

    // Clean up
    env::remove_var("REFERENCE_TIMEZONE");
}

#[test]
fn test_config_empty_values_use_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("REFERENCE_TIMEZONE", "");
    env::set_var("DISPLAY_PLACEHOLDER", "   ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.reference_timezone, chrono_tz::Australia::Melbourne);
    assert_eq!(config.display_placeholder, "Date TBD");

    // Clean up
    env::remove_var("REFERENCE_TIMEZONE");
    env::remove_var("DISPLAY_PLACEHOLDER");
}

#[test]
fn test_config_whitespace_timezone_trimmed() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("REFERENCE_TIMEZONE", "  Australia/Sydney  ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.reference_timezone, chrono_tz::Australia::Sydney);

    // Clean up
    env::remove_var("REFERENCE_TIMEZONE");
}

#[test]
fn test_service_from_config() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("REFERENCE_TIMEZONE", "Australia/Melbourne");
    env::set_var("DISPLAY_PLACEHOLDER", "Time pending");

    let config = Config::from_env().unwrap();
    let service = TimeConversionService::from_config(&config);

    assert_eq!(service.reference_zone(), chrono_tz::Australia::Melbourne);
    assert_eq!(
        service.format_for_display(None, DisplayPrecision::DateTimeMinutes),
        "Time pending"
    );

    // Clean up
    env::remove_var("REFERENCE_TIMEZONE");
    env::remove_var("DISPLAY_PLACEHOLDER");
}
