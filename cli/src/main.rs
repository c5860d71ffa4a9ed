//! BetterSocial stream CLI
//!
//! Renders the post feed or a single post view and prints the mount point's
//! HTML to stdout. Configuration comes from the environment (see
//! `bettersocial_stream::Config`).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bettersocial_stream::adapters::{AmmoniaSanitizer, HttpPostSource, PulldownMarkdown};
use bettersocial_stream::render::{CommentRenderer, PostRenderer, TimestampFormat};
use bettersocial_stream::{Config, CurrentUser, FeedAggregator, LoadOutcome, MountPoint, SinglePostView};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bettersocial")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Id of the viewing user; owner actions are shown on their posts
    #[arg(long)]
    current_user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch local and remote posts and render the merged feed
    Feed,
    /// Render one post and its comment thread from JSON files
    Post {
        /// File holding the post object
        post_file: PathBuf,
        /// File holding the comment array
        comments_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the rendered HTML
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bettersocial_stream=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let current_user = match args.current_user {
        Some(id) => CurrentUser::new(id),
        None => CurrentUser::anonymous(),
    };

    let sanitizer = Arc::new(AmmoniaSanitizer);
    let timestamps = TimestampFormat::from_config(&config);
    let posts = Arc::new(PostRenderer::new(
        sanitizer.clone(),
        Arc::new(PulldownMarkdown),
        timestamps.clone(),
    ));

    let mount = match args.command {
        Command::Feed => {
            tracing::info!(base_url = %config.base_url, "Loading feed");

            let http = HttpPostSource::build_client(config.fetch_timeout)
                .context("Failed to build HTTP client")?;
            let aggregator = FeedAggregator::new(
                Arc::new(HttpPostSource::local(http.clone(), &config)),
                Arc::new(HttpPostSource::remote(http, &config)),
                posts,
                config.fetch_timeout,
            );

            let mut mount = MountPoint::new(config.feed_mount_id.clone());
            let outcome = aggregator
                .load_feed(&current_user, &mut mount)
                .await
                .context("Failed to load feed")?;

            if outcome == LoadOutcome::Untouched {
                tracing::info!("No posts to show");
            }
            mount
        }
        Command::Post {
            post_file,
            comments_file,
        } => {
            let post_payload = tokio::fs::read_to_string(&post_file)
                .await
                .with_context(|| format!("Failed to read {}", post_file.display()))?;
            let comments_payload = tokio::fs::read_to_string(&comments_file)
                .await
                .with_context(|| format!("Failed to read {}", comments_file.display()))?;

            let view = SinglePostView::new(posts, CommentRenderer::new(sanitizer, timestamps));

            let mut mount = MountPoint::new(config.post_mount_id.clone());
            view.render_single_post(&post_payload, &comments_payload, &current_user, &mut mount)
                .context("Failed to render post")?;
            mount
        }
    };

    println!("{}", mount.to_html());

    Ok(())
}
