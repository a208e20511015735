use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentProvider, Validate, YamlConfigSerializer};

use super::ScoresConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scores: ScoresConfig,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.scores.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.is_empty()
        {
            return Err("log_prefix must not be empty if provided".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigSerializer, ContentProvider};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            scores: ScoresConfig {
                location: "elsewhere.yaml".to_string(),
                confirm_reset: false,
            },
            log_prefix: Some("Client".to_string()),
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh_manager = get_config_manager(Some(&file_path));
        assert_eq!(fresh_manager.get_config(), Ok(config));
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentProvider::new(file_path.as_str());
        provider.set_content("log_prefix: Table 1\n").unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.scores, ScoresConfig::default());
        assert_eq!(config.log_prefix, Some("Table 1".to_string()));
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_scores_section_fields_are_optional() {
        let file_path = get_temp_file_path();
        let provider = FileContentProvider::new(file_path.as_str());
        provider.set_content("scores:\n  confirm_reset: false\n").unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.scores.location, ScoresConfig::default().location);
        assert!(!config.scores.confirm_reset);

        provider.set_content("scores:\n  location: shared/scores.yaml\n").unwrap();
        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.scores.location, "shared/scores.yaml");
        assert!(config.scores.confirm_reset);
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentProvider::new(file_path.as_str());
        provider
            .set_content("scores:\n  location: \"  \"\n  confirm_reset: true\n")
            .unwrap();

        assert!(get_config_manager(Some(&file_path)).get_config().is_err());
        std::fs::remove_file(&file_path).ok();
    }
}
