//! CLI command implementations

use crate::output::{render_top, render_tracks, to_json, OutputFormat};
use console::style;
use setlist_core::{
    filter, source_for, Error, LoadedPlaylist, LyricsClient, ManifestParser, PlayQueue,
    PlayTally, PlaylistLoader, SetlistConfig,
};
use url::Url;

/// Settings shared by every command
pub struct Context {
    pub config: SetlistConfig,
    pub format: String,
}

impl Context {
    fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }

    fn base_url(&self) -> anyhow::Result<Option<Url>> {
        Ok(self.config.base_url.as_deref().map(Url::parse).transpose()?)
    }
}

async fn load(ctx: &Context, source: Option<&str>) -> Result<LoadedPlaylist, Error> {
    let location = source.unwrap_or(&ctx.config.playlist_source);
    let base = ctx
        .base_url()
        .map_err(|e| Error::InvalidConfig(format!("base_url: {}", e)))?;
    let source = source_for(location, base.as_ref(), ctx.config.request_timeout())?;

    let loader = PlaylistLoader::new(ManifestParser::with_options(ctx.config.parse_options()));
    loader.load(source.as_ref()).await
}

/// List every track
pub async fn list(ctx: &Context, source: Option<&str>) -> anyhow::Result<()> {
    let loaded = load(ctx, source).await?;
    let entries = filter(&loaded.playlist, "");

    println!("{}", render_tracks(&entries, ctx.output_format()));
    Ok(())
}

/// List tracks matching a query
pub async fn search(ctx: &Context, source: Option<&str>, query: &str) -> anyhow::Result<()> {
    let loaded = load(ctx, source).await?;
    let entries = filter(&loaded.playlist, query);

    if entries.is_empty() && ctx.output_format() != OutputFormat::Json {
        println!("No songs found.");
        return Ok(());
    }

    println!("{}", render_tracks(&entries, ctx.output_format()));
    Ok(())
}

/// Validate that a playlist loads
pub async fn validate(ctx: &Context, source: Option<&str>, strict: bool) -> anyhow::Result<()> {
    let location = source.unwrap_or(&ctx.config.playlist_source).to_string();

    let loaded = match load(ctx, source).await {
        Ok(loaded) => loaded,
        Err(e) => {
            if ctx.output_format() == OutputFormat::Json {
                println!(
                    "{}",
                    to_json(&serde_json::json!({
                        "source": location,
                        "ok": false,
                        "error_code": e.error_code(),
                        "error": e.to_string(),
                    }))
                );
            } else {
                println!("{} {} ({})", style("FAIL").red().bold(), e, e.error_code());
            }
            std::process::exit(1);
        }
    };

    let total = loaded.playlist.total_duration();
    if ctx.output_format() == OutputFormat::Json {
        println!(
            "{}",
            to_json(&serde_json::json!({
                "source": loaded.source,
                "ok": true,
                "tracks": loaded.playlist.len(),
                "dropped_entries": loaded.dropped_entries,
                "total_duration": total,
                "loaded_at": loaded.loaded_at,
            }))
        );
    } else {
        println!("Playlist: {}", loaded.source);
        println!("  Tracks: {}", loaded.playlist.len());
        println!("  Dropped entries: {}", loaded.dropped_entries);
        println!("  Total time: {}", setlist_core::format_time(total));
    }

    if strict && loaded.dropped_entries > 0 {
        if ctx.output_format() != OutputFormat::Json {
            println!(
                "\n{} {} info line(s) without a locator",
                style("FAIL").red().bold(),
                loaded.dropped_entries
            );
        }
        std::process::exit(1);
    }

    if ctx.output_format() != OutputFormat::Json {
        println!("\n{}", style("PASSED").green().bold());
    }
    Ok(())
}

/// Print lyrics for a song
pub async fn lyrics(
    ctx: &Context,
    artist: &str,
    title: &str,
    endpoint: Option<&str>,
) -> anyhow::Result<()> {
    let endpoint = endpoint.unwrap_or(&ctx.config.lyrics_endpoint);
    let endpoint = match Url::parse(endpoint) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => match ctx.base_url()? {
            Some(base) => base.join(endpoint)?,
            None => anyhow::bail!("relative lyrics endpoint '{}' needs base_url", endpoint),
        },
        Err(e) => return Err(e.into()),
    };

    let client = LyricsClient::new(endpoint, ctx.config.request_timeout())?;
    let text = match client.fetch(artist, title).await {
        Ok(text) => text,
        Err(Error::LyricsNotFound { .. }) => setlist_core::lyrics::LYRICS_UNAVAILABLE.to_string(),
        Err(e) => return Err(e.into()),
    };

    if ctx.output_format() == OutputFormat::Json {
        println!(
            "{}",
            to_json(&serde_json::json!({ "artist": artist, "title": title, "lyrics": text }))
        );
    } else {
        println!("{} - {}\n", style(artist).bold(), style(title).bold());
        println!("{}", text);
    }
    Ok(())
}

/// Replay a sequence of plays and print the most played tracks
pub async fn top(
    ctx: &Context,
    source: Option<&str>,
    plays: &[usize],
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let loaded = load(ctx, source).await?;
    let mut queue = PlayQueue::for_playlist(&loaded.playlist);
    let mut tally = PlayTally::new();

    for &number in plays {
        // Track numbers are shown 1-based
        let index = number
            .checked_sub(1)
            .ok_or_else(|| anyhow::anyhow!("track numbers start at 1"))?;
        let index = queue.select(index)?;
        if let Some(track) = loaded.playlist.get(index) {
            tally.record(track);
        }
    }

    let limit = limit.unwrap_or(ctx.config.top_tracks_limit);
    let ranked = tally.top(limit);
    if ranked.is_empty() && ctx.output_format() != OutputFormat::Json {
        println!("No listening data yet.");
        return Ok(());
    }

    println!("{}", render_top(&ranked, ctx.output_format()));
    Ok(())
}
