//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use super::diagnostic::ConfigDiagnostic;
use super::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your location", path.display()));
    output::note(&format!(
        "2. Run: mishkat config validate -c {}",
        path.display()
    ));
    output::note("3. Run: mishkat prayer");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path, config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }
    println!();
    output::lines(&config.to_toml());
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());

    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    let config = match Config::parse_toml(&content) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Parse(err))) => {
            if let Some(diagnostic) = ConfigDiagnostic::from_toml(&err, &content) {
                if !output::is_json() {
                    eprintln!("{}", diagnostic.render());
                }
            }
            return Err(ConfigError::Parse(err).into());
        }
        Err(e) => return Err(e),
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success("Config file is valid");
    if config.location.latitude.is_none() {
        output::section("Warnings");
        output::warning("No [location] set; prayer times default to Mecca");
    }
    output::field("Next", format!("mishkat config show -c {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_config_template_is_valid_config() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).expect("template parses");
        assert_eq!(config.api.tafseer_edition, "ar-muyassar");
        assert!(config.coordinates().expect("valid").is_none());
    }

    #[test]
    fn test_execute_init_writes_template_content() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        execute_init(&config_path, false).expect("init");
        let content = fs::read_to_string(&config_path).expect("read back");
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_respects_existing_file() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").expect("seed");

        assert!(execute_init(&config_path, false).is_err());
        assert_eq!(
            fs::read_to_string(&config_path).expect("read back"),
            "existing content"
        );

        execute_init(&config_path, true).expect("forced init");
        assert_eq!(
            fs::read_to_string(&config_path).expect("read back"),
            CONFIG_TEMPLATE
        );
    }

    #[test]
    fn test_execute_validate_reports_parse_errors() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[http\n").expect("seed");

        let result = execute_validate(&config_path);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_execute_validate_missing_file() {
        let temp_dir = create_temp_dir();
        let result = execute_validate(&temp_dir.path().join("absent.toml"));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }
}
