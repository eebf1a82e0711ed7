//! africatv - terminal browser for M3U IPTV playlists
//! Search, filter and favorite channels, then hand streams to an external player

// Use mimalloc for faster memory allocation (Linux, macOS)
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::error::Error;

use clap::{Args, Parser, Subcommand};

mod config;
mod favorites;
mod fetch;
mod m3u;
mod models;
mod player;
mod query;

use config::AppConfig;
use favorites::Favorites;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Playlist URL or local file to browse instead of the configured one
    #[arg(long, global = true)]
    playlist: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the channels in the playlist
    List(ListArgs),
    /// List the playlist's categories with channel counts
    Categories,
    /// List favorite channels
    Favorites,
    /// Add a channel to the favorites, or remove it again
    Toggle(ToggleArgs),
    /// Hand a channel's stream to the external player
    Play(PlayArgs),
    /// Show everything known about one channel
    Show(ShowArgs),
    /// Save a new default playlist URL to the config file
    SetUrl(SetUrlArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Only channels in this category
    #[arg(long)]
    category: Option<String>,
    /// Only channels whose name contains this text
    #[arg(long)]
    search: Option<String>,
    /// Only favorite channels
    #[arg(long)]
    favorites: bool,
    /// Print the channels as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ToggleArgs {
    /// Channel URL, unfiltered list position, or name fragment
    channel: String,
}

#[derive(Args)]
struct PlayArgs {
    /// Unfiltered list position or name fragment
    channel: String,
}

#[derive(Args)]
struct ShowArgs {
    /// Unfiltered list position or name fragment
    channel: String,
}

#[derive(Args)]
struct SetUrlArgs {
    url: String,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn"));

    let cli = Cli::parse();
    let config = AppConfig::load();
    let source = cli
        .playlist
        .clone()
        .unwrap_or_else(|| config.playlist_url.clone());

    let res = match &cli.command {
        Commands::List(args) => cli_list(&config, &source, args),
        Commands::Categories => cli_categories(&config, &source),
        Commands::Favorites => cli_favorites(&config, &source),
        Commands::Toggle(args) => cli_toggle(&config, &source, args),
        Commands::Play(args) => cli_play(&config, &source, args),
        Commands::Show(args) => cli_show(&config, &source, args),
        Commands::SetUrl(args) => cli_set_url(config, args),
    };

    if let Err(err) = res {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn cli_list(config: &AppConfig, source: &str, args: &ListArgs) -> Result<(), Box<dyn Error>> {
    let favorites = Favorites::load();
    let mut playlist = fetch::load_playlist(source, &config.user_agent)?;

    if let Some(category) = &args.category {
        playlist = query::by_category(playlist, category);
    }
    if let Some(text) = &args.search {
        playlist = query::search(playlist, text);
    }
    if args.favorites {
        playlist = query::favorites_only(playlist, favorites.urls());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&playlist.channels)?);
        return Ok(());
    }

    if playlist.is_empty() {
        println!("No channels matched.");
        return Ok(());
    }

    for (i, channel) in playlist.channels.iter().enumerate() {
        let star = if favorites.contains(&channel.url) { '*' } else { ' ' };
        println!(
            "{:>4} {} {}  [{}]",
            i + 1,
            star,
            channel.name,
            channel.category_or_default()
        );
    }
    println!("({} channels)", playlist.len());

    Ok(())
}

fn cli_categories(config: &AppConfig, source: &str) -> Result<(), Box<dyn Error>> {
    let playlist = fetch::load_playlist(source, &config.user_agent)?;
    let categories = query::categories(&playlist.channels);

    println!("Categories in {}:", playlist.source);
    for category in &categories {
        let count = playlist
            .channels
            .iter()
            .filter(|c| c.category_or_default() == category)
            .count();
        println!("  * {} ({})", category, count);
    }
    println!("({} categories)", categories.len());

    Ok(())
}

fn cli_favorites(config: &AppConfig, source: &str) -> Result<(), Box<dyn Error>> {
    let favorites = Favorites::load();
    if favorites.is_empty() {
        println!("No favorites yet. Star one with: africatv toggle <channel>");
        return Ok(());
    }

    let playlist = fetch::load_playlist(source, &config.user_agent)?;
    let starred = query::favorites_only(playlist, favorites.urls());

    for channel in &starred.channels {
        println!("  * {}  [{}]", channel.name, channel.category_or_default());
    }

    // Favorites persist even when their channel left the playlist
    let missing = favorites
        .urls()
        .iter()
        .filter(|url| !starred.channels.iter().any(|c| &c.url == *url))
        .count();
    if missing > 0 {
        println!(
            "({} favorites, {} not in this playlist)",
            favorites.len(),
            missing
        );
    } else {
        println!("({} favorites)", favorites.len());
    }

    Ok(())
}

fn cli_toggle(config: &AppConfig, source: &str, args: &ToggleArgs) -> Result<(), Box<dyn Error>> {
    let mut favorites = Favorites::load();

    // A URL toggles directly, so favorites stay editable while the
    // playlist host is down
    let (url, name) = if args.channel.starts_with("http") {
        (args.channel.clone(), args.channel.clone())
    } else {
        let playlist = fetch::load_playlist(source, &config.user_agent)?;
        let channel = query::resolve(&playlist.channels, &args.channel)
            .ok_or_else(|| format!("no channel matches '{}'", args.channel))?;
        (channel.url.clone(), channel.name.clone())
    };

    if favorites.toggle(&url) {
        println!("Added {} to favorites.", name);
    } else {
        println!("Removed {} from favorites.", name);
    }

    Ok(())
}

fn cli_play(config: &AppConfig, source: &str, args: &PlayArgs) -> Result<(), Box<dyn Error>> {
    let playlist = fetch::load_playlist(source, &config.user_agent)?;
    let channel = query::resolve(&playlist.channels, &args.channel)
        .ok_or_else(|| format!("no channel matches '{}'", args.channel))?;

    println!("Playing {} ({})", channel.name, channel.url);
    let status = player::play(config, channel)?;
    if !status.success() {
        println!("Player exited with {}", status);
    }

    Ok(())
}

fn cli_show(config: &AppConfig, source: &str, args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let favorites = Favorites::load();
    let playlist = fetch::load_playlist(source, &config.user_agent)?;
    let channel = query::resolve(&playlist.channels, &args.channel)
        .ok_or_else(|| format!("no channel matches '{}'", args.channel))?;

    println!("Name:        {}", channel.name);
    println!("URL:         {}", channel.url);
    println!("Category:    {}", channel.category_or_default());
    println!("Id:          {}", or_dash(&channel.id));
    println!("Logo:        {}", or_dash(&channel.logo));
    println!("Description: {}", or_dash(&channel.description));
    println!("Quality:     {}", or_dash(&channel.quality));
    println!("Resolution:  {}", or_dash(&channel.resolution));
    println!("Language:    {}", or_dash(&channel.language));
    println!("Status:      {}", or_dash(&channel.status));
    println!(
        "Favorite:    {}",
        if favorites.contains(&channel.url) { "yes" } else { "no" }
    );

    Ok(())
}

fn cli_set_url(mut config: AppConfig, args: &SetUrlArgs) -> Result<(), Box<dyn Error>> {
    config.playlist_url = args.url.clone();
    config.save();
    println!("Default playlist is now {}", config.playlist_url);

    Ok(())
}

/// Placeholder for absent metadata in `show` output
fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
