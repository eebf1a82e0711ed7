//! Persistent favorites, keyed by channel URL

use std::fs;
use std::path::PathBuf;

/// User-curated set of favorite channel URLs, stored as a JSON array.
///
/// Kept in insertion order. The file is rewritten wholesale on every toggle;
/// there is no schema version and a missing or unreadable file just means an
/// empty set.
#[derive(Debug)]
pub struct Favorites {
    urls: Vec<String>,
    path: PathBuf,
}

impl Favorites {
    /// Load favorites from the default per-user location.
    pub fn load() -> Self {
        Self::load_from(favorites_path())
    }

    /// Load favorites from an explicit file path.
    pub fn load_from(path: PathBuf) -> Self {
        let urls = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { urls, path }
    }

    /// Flip membership for `url` and persist; returns true when the URL is
    /// a favorite afterwards. Toggling twice restores the original set.
    pub fn toggle(&mut self, url: &str) -> bool {
        let now_favorite = toggle_url(&mut self.urls, url);
        self.save();
        now_favorite
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).ok();
        }
        match serde_json::to_string_pretty(&self.urls) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    log::warn!("could not save favorites to {}: {}", self.path.display(), e);
                }
            }
            Err(e) => log::warn!("could not encode favorites: {}", e),
        }
    }
}

/// Symmetric-difference step on the URL set: remove `url` if present,
/// append it otherwise. Returns the resulting membership.
fn toggle_url(urls: &mut Vec<String>, url: &str) -> bool {
    if let Some(pos) = urls.iter().position(|u| u == url) {
        urls.remove(pos);
        false
    } else {
        urls.push(url.to_string());
        true
    }
}

fn favorites_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("africatv");
    path.push("favorites.json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorites_in(dir: &tempfile::TempDir) -> Favorites {
        Favorites::load_from(dir.path().join("favorites.json"))
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let dir = tempfile::tempdir().unwrap();
        let mut favorites = favorites_in(&dir);

        assert!(favorites.toggle("http://example.com/a.m3u8"));
        assert!(favorites.contains("http://example.com/a.m3u8"));
        assert!(!favorites.toggle("http://example.com/a.m3u8"));
        assert!(!favorites.contains("http://example.com/a.m3u8"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();

        let mut favorites = favorites_in(&dir);
        favorites.toggle("http://example.com/a.m3u8");
        favorites.toggle("http://example.com/b.m3u8");

        let reloaded = favorites_in(&dir);
        assert_eq!(
            reloaded.urls(),
            &[
                "http://example.com/a.m3u8".to_string(),
                "http://example.com/b.m3u8".to_string(),
            ]
        );

        let mut favorites = reloaded;
        favorites.toggle("http://example.com/a.m3u8");
        let reloaded = favorites_in(&dir);
        assert_eq!(reloaded.urls(), &["http://example.com/b.m3u8".to_string()]);
    }

    #[test]
    fn test_missing_or_corrupt_file_means_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(favorites_in(&dir).is_empty());

        let path = dir.path().join("favorites.json");
        fs::write(&path, "this is not json").unwrap();
        assert!(Favorites::load_from(path).is_empty());
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut urls = Vec::new();
        toggle_url(&mut urls, "c");
        toggle_url(&mut urls, "a");
        toggle_url(&mut urls, "b");
        toggle_url(&mut urls, "a");
        assert_eq!(urls, vec!["c".to_string(), "b".to_string()]);
    }
}
