//! External player handoff
//!
//! Playback is delegated entirely to an HLS-capable player binary; this
//! module only builds the invocation and hands over the stream URL.

use std::process::{Command, ExitStatus};

use crate::config::AppConfig;
use crate::models::Channel;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("could not start {player}: {source}")]
    Spawn {
        player: String,
        source: std::io::Error,
    },
    #[error("lost track of {player}: {source}")]
    Wait {
        player: String,
        source: std::io::Error,
    },
}

/// Build the player program and argument list for a channel.
///
/// An empty `external_player` means ffplay. Known players get a window
/// title and reconnect/user-agent options in their own dialect; anything
/// else is just handed the URL.
pub fn build_command(config: &AppConfig, channel: &Channel) -> (String, Vec<String>) {
    let player = if config.external_player.is_empty() {
        "ffplay".to_string()
    } else {
        config.external_player.clone()
    };
    let player_lower = player.to_lowercase();

    let stream_name = channel.url.split('/').last().unwrap_or("stream");
    let title = format!("{} - {}", channel.name, stream_name);

    let mut args;
    if player_lower.contains("mpv") {
        args = vec![channel.url.clone(), format!("--title={}", title)];
        if channel.url.starts_with("http") {
            args.push("--stream-lavf-o=reconnect=1".to_string());
            args.push("--stream-lavf-o=reconnect_streamed=1".to_string());
        }
        if config.pass_user_agent_to_player {
            args.push(format!("--user-agent={}", config.user_agent));
        }
    } else if player_lower.contains("vlc") {
        args = vec![
            channel.url.clone(),
            format!("--meta-title={}", title),
            "--http-reconnect".to_string(),
        ];
        if config.pass_user_agent_to_player {
            args.push(format!("--http-user-agent={}", config.user_agent));
        }
    } else if player_lower.contains("ffplay") {
        // ffplay takes the input URL directly, not with an -i flag
        args = vec![
            channel.url.clone(),
            "-autoexit".to_string(),
            "-sync".to_string(),
            "audio".to_string(),
            "-framedrop".to_string(),
            "-window_title".to_string(),
            title,
        ];
        if channel.url.starts_with("http") {
            args.extend([
                "-reconnect".to_string(),
                "1".to_string(),
                "-reconnect_streamed".to_string(),
                "1".to_string(),
                "-reconnect_delay_max".to_string(),
                "10".to_string(),
            ]);
        }
        if config.pass_user_agent_to_player {
            args.extend(["-user_agent".to_string(), config.user_agent.clone()]);
        }
    } else {
        // Unknown player, just pass the URL
        args = vec![channel.url.clone()];
    }

    (player, args)
}

/// Launch the configured player on a channel and wait for it to exit.
pub fn play(config: &AppConfig, channel: &Channel) -> Result<ExitStatus, PlayerError> {
    let (player, args) = build_command(config, channel);
    log::info!("handing {} to {}", channel.url, player);

    let mut child = Command::new(&player)
        .args(&args)
        .spawn()
        .map_err(|source| PlayerError::Spawn {
            player: player.clone(),
            source,
        })?;

    child.wait().map_err(|source| PlayerError::Wait { player, source })
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
