//! Extended M3U playlist parsing

use std::collections::HashMap;

use crate::models::Channel;

/// Parse M3U text into channels, in order of appearance.
///
/// The format is treated as a line protocol: `#EXTINF` directives stage
/// metadata for the next stream, lines starting with `http` emit a channel,
/// and everything else (headers, comments, blanks) is skipped. Parsing never
/// fails; unusable metadata just degrades to placeholder fields.
pub fn parse(content: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut pending: Option<HashMap<String, String>> = None;

    for line in content.lines() {
        let line = line.trim();

        if let Some(body) = line.strip_prefix("#EXTINF") {
            // A new directive replaces any unconsumed one.
            let body = body.strip_prefix(':').unwrap_or(body);
            pending = Some(extract_attrs(body));
        } else if line.starts_with("http") {
            // A bare URL with no directive still becomes a channel.
            let mut attrs = pending.take().unwrap_or_default();
            // Empty values count as absent, same as a missing attribute
            let mut take = |key: &str| attrs.remove(key).filter(|v| !v.is_empty());

            let name = take("tvg-name")
                .unwrap_or_else(|| format!("Channel {}", channels.len() + 1));

            channels.push(Channel {
                name,
                url: line.to_string(),
                id: take("tvg-id"),
                category: take("group-title"),
                logo: take("tvg-logo"),
                description: take("desc"),
                quality: take("quality"),
                resolution: take("resolution"),
                language: take("language"),
                status: take("status"),
            });
        }
    }

    channels
}

/// Scan a directive body for `key="value"` pairs (unquoted values work too).
///
/// Each attribute is picked up independently, so one malformed pair never
/// takes the rest of the line down with it. Keys are lowercased; the
/// trailing `,Display Title` part is not attribute data and is left alone.
fn extract_attrs(info: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    let mut chars = info.chars().peekable();

    while chars.peek().is_some() {
        // Skip separators between pairs
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == ',' || c == '-' && attrs.is_empty() {
                chars.next();
            } else {
                break;
            }
        }

        // Skip the duration token at the start (e.g. "-1" or "10.5")
        if attrs.is_empty() {
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() || c == '-' || c == '.' {
                    chars.next();
                } else {
                    break;
                }
            }
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    chars.next();
                } else {
                    break;
                }
            }
        }

        // Collect key until '='
        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' {
                chars.next();
                break;
            }
            if c == ',' {
                // Past the last attribute; the rest is the display title
                return attrs;
            }
            key.push(chars.next().unwrap());
        }

        let key = key.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }

        match chars.peek() {
            Some(&'"') => {
                chars.next();
                let mut value = String::new();
                while let Some(c) = chars.next() {
                    if c == '"' {
                        break;
                    }
                    if c == '\\' {
                        if let Some(&next) = chars.peek() {
                            if next == '"' {
                                value.push(chars.next().unwrap());
                                continue;
                            }
                        }
                    }
                    value.push(c);
                }
                attrs.insert(key, value);
            }
            Some(_) => {
                // Unquoted value runs until whitespace or comma
                let mut value = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == ',' {
                        break;
                    }
                    value.push(chars.next().unwrap());
                }
                if !value.is_empty() {
                    attrs.insert(key, value);
                }
            }
            None => {}
        }
    }

    attrs
}

#[cfg(test)]
#[path = "m3u_tests.rs"]
mod tests;
