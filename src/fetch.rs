//! Playlist loading over HTTP or from a local file

use std::fs;
use std::time::Duration;

use crate::m3u;
use crate::models::Playlist;

/// Why a playlist could not be loaded. Reported to the user once; there is
/// no retry. A load failure never touches favorites or configuration.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(ureq::Error),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("read failed: {0}")]
    Read(ureq::Error),
    #[error("cannot read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
}

/// Load and parse a playlist from an HTTP(S) URL or a local file path.
pub fn load_playlist(source: &str, user_agent: &str) -> Result<Playlist, FetchError> {
    let content = if source.starts_with("http://") || source.starts_with("https://") {
        download(source, user_agent)?
    } else {
        fs::read_to_string(source).map_err(|e| FetchError::File {
            path: source.to_string(),
            source: e,
        })?
    };

    let channels = m3u::parse(&content);
    log::info!("loaded {} channels from {}", channels.len(), source);

    Ok(Playlist {
        channels,
        source: source.to_string(),
    })
}

fn download(url: &str, user_agent: &str) -> Result<String, FetchError> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(120)))
        .timeout_connect(Some(Duration::from_secs(30)))
        .build()
        .new_agent();

    let mut response = agent
        .get(url)
        .header("User-Agent", user_agent)
        .call()
        .map_err(|e| match e {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            other => FetchError::Request(other),
        })?;

    if response.status() != 200 {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    response.body_mut().read_to_string().map_err(FetchError::Read)
}
