// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::services::detection::panel::DEFAULT_ROSTER;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub version: String,
    pub default_provider: Option<String>,
    pub detection: DetectionConfig,
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Ordered detector roster; order is preserved in responses.
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,
    /// Fixed noise seed for the simulator. Unset means seed per process start.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            seed: None,
        }
    }
}

fn default_roster() -> Vec<String> {
    DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect()
}

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("textmorph"))
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), String> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config dir: {}", e))
    }

    /// Load configuration from file
    pub fn load(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration, writing the default file on first run
    pub fn load_or_init(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            let config = AppConfig::default();
            self.save(&config)?;
            return Ok(config);
        }
        self.load()
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), String> {
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&self.config_file, content)
            .map_err(|e| format!("Failed to write config: {}", e))
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<(), String> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)
            .map_err(|e| format!("Failed to create backup dir: {}", e))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file)
            .map_err(|e| format!("Failed to create backup: {}", e))?;

        // Keep only last 10 backups
        self.cleanup_old_backups(&backup_dir, 10)?;

        Ok(())
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &PathBuf, keep: usize) -> Result<(), String> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|e| format!("Failed to read backup dir: {}", e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Sort by modification time (oldest first)
        entries.sort_by_key(|e| {
            e.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });

        // Remove oldest entries
        for entry in entries.iter().take(entries.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }

    /// Get provider API key from config file
    pub fn get_api_key(&self, provider: &str) -> Result<Option<String>, String> {
        let config = self.load()?;
        Ok(config.api_keys.get(provider).cloned())
    }

    /// Store provider API key in config file
    pub fn set_api_key(&self, provider: &str, key: &str) -> Result<(), String> {
        let mut config = self.load()?;
        config.api_keys.insert(provider.to_string(), key.to_string());
        self.save(&config)
    }

    /// Delete provider API key from config file
    pub fn delete_api_key(&self, provider: &str) -> Result<(), String> {
        let mut config = self.load()?;
        config.api_keys.remove(provider);
        self.save(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.detection.roster.len(), 5);
        assert_eq!(config.detection.roster[0], "GPTZero");
        assert!(config.detection.seed.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            version: "1.0.0".to_string(),
            default_provider: Some("deepseek".to_string()),
            detection: DetectionConfig {
                roster: vec!["GPTZero".to_string()],
                seed: Some(42),
            },
            api_keys: HashMap::new(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, "1.0.0");
        assert_eq!(parsed.detection.seed, Some(42));
        assert_eq!(parsed.detection.roster, vec!["GPTZero".to_string()]);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let store = ConfigStore::new(PathBuf::from("/nonexistent/textmorph-test"));
        let config = store.load().unwrap();
        assert_eq!(config.detection.roster.len(), 5);
    }

    #[test]
    fn test_load_or_init_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        let config = store.load_or_init().unwrap();
        assert_eq!(config.detection.roster.len(), 5);
        assert!(dir.path().join("config.json").exists());

        // second call reads the file it just wrote
        let reloaded = store.load_or_init().unwrap();
        assert_eq!(reloaded.detection.roster, config.detection.roster);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.detection.seed = Some(7);
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.detection.seed, Some(7));
    }

    #[test]
    fn test_save_backs_up_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        store.save(&AppConfig::default()).unwrap();
        let mut updated = AppConfig::default();
        updated.detection.seed = Some(99);
        store.save(&updated).unwrap();

        let backups: Vec<_> = fs::read_dir(dir.path().join("backups"))
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(backups.len(), 1);
    }

    #[test]
    fn test_backup_rotation_keeps_ten() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());
        store.save(&AppConfig::default()).unwrap();

        // pre-seed more backups than the retention cap
        let backup_dir = dir.path().join("backups");
        fs::create_dir_all(&backup_dir).unwrap();
        for i in 0..12 {
            fs::write(backup_dir.join(format!("config_2020010{}_000000.json", i)), "{}").unwrap();
        }

        store.save(&AppConfig::default()).unwrap();

        let count = fs::read_dir(&backup_dir).unwrap().filter_map(|e| e.ok()).count();
        assert_eq!(count, 10);
    }

    #[test]
    fn test_api_key_set_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        store.set_api_key("deepseek", "sk-test").unwrap();
        assert_eq!(store.get_api_key("deepseek").unwrap(), Some("sk-test".to_string()));

        store.delete_api_key("deepseek").unwrap();
        assert_eq!(store.get_api_key("deepseek").unwrap(), None);
    }
}
