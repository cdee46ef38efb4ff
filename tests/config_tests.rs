use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use mishkat::error::{ConfigError, Error};
use mishkat::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("mishkat-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[api]
quran_edition = "quran-uthmani"
tafseer_edition = "ar-tafsir-ibn-kathir"
prayer_method = 5

[http]
timeout_ms = 8000

[location]
latitude = 30.0444
longitude = 31.2357

[audio]
default_reciter = 2

[storage]
path = "/tmp/mishkat.json"

[logging]
level = "debug"
format = "json"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    let config = result.expect("config loads");

    assert_eq!(config.api.quran_edition, "quran-uthmani");
    assert_eq!(config.api.prayer_method, 5);
    assert_eq!(config.http.timeout_ms, 8000);
    assert_eq!(config.audio.default_reciter, 2);
    assert_eq!(config.storage.path.as_deref(), Some("/tmp/mishkat.json"));
    assert_eq!(config.logging.format, "json");

    let coordinates = config.coordinates().expect("valid").expect("set");
    assert_eq!(coordinates.longitude, 31.2357);
}

#[test]
fn config_rejects_out_of_range_location() {
    let path = write_temp_config("[location]\nlatitude = 95.0\nlongitude = 10.0\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "location",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid location error, got {err}"),
        Ok(_) => panic!("Expected invalid location error, got Ok"),
    }
}

#[test]
fn config_rejects_unknown_log_format() {
    let path = write_temp_config("[logging]\nformat = \"xml\"\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format",
            ..
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error_but_not_for_load_or_default() {
    let mut path = std::env::temp_dir();
    path.push("mishkat-config-test-does-not-exist.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));

    let config = Config::load_or_default(&path).expect("defaults");
    assert_eq!(config.api.tafseer_edition, "ar-muyassar");
}

#[test]
fn example_config_is_valid() {
    let template = include_str!("../config.toml.example");
    let config = Config::parse_toml(template).expect("example parses");
    assert_eq!(config.http.retry_max_attempts, 2);
    assert_eq!(config.audio.default_reciter, 1);
}
