//! Pure filters and lookups over a parsed playlist
//!
//! Every filter consumes the playlist and returns the narrowed one, so the
//! side-effecting edges (fetch, favorites file) stay out of this module.

use crate::models::{Channel, Playlist};

/// Case-insensitive substring check without allocation
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Keep channels whose name contains `query`, ignoring ASCII case.
pub fn search(mut playlist: Playlist, query: &str) -> Playlist {
    playlist
        .channels
        .retain(|c| contains_ignore_case(&c.name, query));
    playlist
}

/// Keep channels in `category`; uncategorized channels live under the
/// placeholder category and can be selected through it.
pub fn by_category(mut playlist: Playlist, category: &str) -> Playlist {
    playlist
        .channels
        .retain(|c| c.category_or_default().eq_ignore_ascii_case(category));
    playlist
}

/// Keep channels whose URL is in the favorites set.
pub fn favorites_only(mut playlist: Playlist, favorite_urls: &[String]) -> Playlist {
    playlist
        .channels
        .retain(|c| favorite_urls.iter().any(|u| u == &c.url));
    playlist
}

/// Distinct category labels in first-appearance order, placeholder included.
pub fn categories(channels: &[Channel]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for channel in channels {
        let category = channel.category_or_default();
        if !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// Find one channel by 1-based playlist position or by name fragment.
/// A numeric selector is always treated as a position.
pub fn resolve<'a>(channels: &'a [Channel], selector: &str) -> Option<&'a Channel> {
    if let Ok(position) = selector.parse::<usize>() {
        return position.checked_sub(1).and_then(|i| channels.get(i));
    }
    channels
        .iter()
        .find(|c| contains_ignore_case(&c.name, selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, url: &str, category: Option<&str>) -> Channel {
        Channel {
            name: name.to_string(),
            url: url.to_string(),
            category: category.map(str::to_string),
            ..Channel::default()
        }
    }

    fn sample() -> Playlist {
        Playlist {
            channels: vec![
                channel("BBC World News", "http://example.com/bbc.m3u8", Some("News")),
                channel("Bloomberg TV", "http://example.com/blm.m3u8", Some("Business")),
                channel("Channel 3", "http://example.com/three.m3u8", None),
                channel("CNBC", "http://example.com/cnbc.m3u8", Some("Business")),
            ],
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = search(sample(), "bloomberg");
        assert_eq!(found.len(), 1);
        assert_eq!(found.channels[0].name, "Bloomberg TV");

        assert!(search(sample(), "no such channel").is_empty());
        assert_eq!(search(sample(), "").len(), 4);
    }

    #[test]
    fn test_by_category() {
        let business = by_category(sample(), "business");
        assert_eq!(business.len(), 2);
        assert_eq!(business.channels[0].name, "Bloomberg TV");
        assert_eq!(business.channels[1].name, "CNBC");
    }

    #[test]
    fn test_uncategorized_selectable_through_placeholder() {
        let rest = by_category(sample(), "Uncategorized");
        assert_eq!(rest.len(), 1);
        assert_eq!(rest.channels[0].name, "Channel 3");
    }

    #[test]
    fn test_favorites_only() {
        let favorites = vec![
            "http://example.com/cnbc.m3u8".to_string(),
            "http://example.com/bbc.m3u8".to_string(),
        ];
        let kept = favorites_only(sample(), &favorites);
        // Playlist order wins over favorites order
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.channels[0].name, "BBC World News");
        assert_eq!(kept.channels[1].name, "CNBC");
    }

    #[test]
    fn test_categories_first_appearance_order() {
        assert_eq!(
            categories(&sample().channels),
            vec!["News", "Business", "Uncategorized"]
        );
    }

    #[test]
    fn test_resolve_by_position_and_name() {
        let playlist = sample();
        assert_eq!(
            resolve(&playlist.channels, "2").map(|c| c.name.as_str()),
            Some("Bloomberg TV")
        );
        assert_eq!(
            resolve(&playlist.channels, "cnbc").map(|c| c.name.as_str()),
            Some("CNBC")
        );
        assert_eq!(resolve(&playlist.channels, "0"), None);
        assert_eq!(resolve(&playlist.channels, "99"), None);
        assert_eq!(resolve(&playlist.channels, "zzz"), None);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("BBC World News", "world"));
        assert!(contains_ignore_case("BBC", ""));
        assert!(!contains_ignore_case("BBC", "BBC World"));
    }
}
