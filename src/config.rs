//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Playlist fetched when the user has not configured or overridden one.
pub const DEFAULT_PLAYLIST_URL: &str = "https://iptv-org.github.io/iptv/categories/business.m3u";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_playlist_url")]
    pub playlist_url: String,
    // Empty means ffplay
    #[serde(default)]
    pub external_player: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_true")]
    pub pass_user_agent_to_player: bool,
}

fn default_playlist_url() -> String {
    DEFAULT_PLAYLIST_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            playlist_url: default_playlist_url(),
            external_player: String::new(),
            user_agent: default_user_agent(),
            pass_user_agent_to_player: true,
        }
    }
}

impl AppConfig {
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("africatv");
        fs::create_dir_all(&path).ok();
        path.push("config.json");
        path
    }

    pub fn load() -> Self {
        let path = Self::config_path();

        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
            }
        }

        Self::default()
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Ok(content) = serde_json::to_string_pretty(self) {
            if let Err(e) = fs::write(&path, content) {
                log::warn!("could not save config to {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.playlist_url, DEFAULT_PLAYLIST_URL);
        assert!(config.external_player.is_empty());
        assert!(config.pass_user_agent_to_player);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"external_player": "mpv"}"#).unwrap();
        assert_eq!(config.external_player, "mpv");
        assert_eq!(config.playlist_url, DEFAULT_PLAYLIST_URL);
        assert!(config.pass_user_agent_to_player);
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut config = AppConfig::default();
        config.playlist_url = "https://example.com/list.m3u".to_string();
        config.external_player = "vlc".to_string();

        let encoded = serde_json::to_string_pretty(&config).unwrap();
        let decoded: AppConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.playlist_url, config.playlist_url);
        assert_eq!(decoded.external_player, "vlc");
    }
}
