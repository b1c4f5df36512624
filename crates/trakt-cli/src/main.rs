//! trakt - command-line front end for the Trakt REST API.

/// Application configuration (TOML).
mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::AppConfig;
use trakt_api::options::{Rating, SearchType};
use trakt_api::types::{Ids, ShowProgress};
use trakt_api::{Extended, Pagination, TraktClient};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Movie lists and details.
    Movies(MoviesCommand),
    /// Show lists, details and progress.
    Shows(ShowsCommand),
    /// Episode details.
    Episodes(EpisodesCommand),
    /// Search movies, shows, episodes, people and lists.
    Search(SearchArgs),
    /// Read the authenticated user's library.
    Sync(SyncCommand),
    /// Manage the OAuth token.
    Auth(AuthCommand),
}

/// Options shared by list commands.
#[derive(clap::Args)]
struct ListArgs {
    /// Detail level: min, full, images, "full,images", metadata, episodes, noseasons.
    #[arg(long)]
    extended: Option<Extended>,

    /// Page number (1-based).
    #[arg(long)]
    page: Option<u32>,

    /// Items per page.
    #[arg(long)]
    limit: Option<u32>,
}

impl ListArgs {
    fn extended(&self) -> Extended {
        self.extended.unwrap_or_default()
    }

    const fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}

/// Arguments for commands that take a single item id.
#[derive(clap::Args)]
struct IdArgs {
    /// Trakt id, slug or IMDB id.
    id: String,

    /// Shared list options.
    #[command(flatten)]
    list: ListArgs,
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesCommand {
    /// Movies subcommand to run.
    #[command(subcommand)]
    command: MoviesSubcommands,
}

/// Available movies subcommands.
#[derive(Subcommand)]
enum MoviesSubcommands {
    /// Most popular movies.
    Popular(ListArgs),
    /// Movies being watched right now.
    Trending(ListArgs),
    /// A single movie.
    Summary(IdArgs),
    /// Comments on a movie.
    Comments(IdArgs),
}

/// Arguments for the `shows` subcommand.
#[derive(clap::Args)]
struct ShowsCommand {
    /// Shows subcommand to run.
    #[command(subcommand)]
    command: ShowsSubcommands,
}

/// Available shows subcommands.
#[derive(Subcommand)]
enum ShowsSubcommands {
    /// Most popular shows.
    Popular(ListArgs),
    /// Shows being watched right now.
    Trending(ListArgs),
    /// A single show.
    Summary(IdArgs),
    /// Watched (or collected) progress of a show. Requires login.
    Progress(ProgressArgs),
}

/// Arguments for the `shows progress` subcommand.
#[derive(clap::Args)]
struct ProgressArgs {
    /// Trakt id, slug or IMDB id.
    id: String,

    /// Report collection progress instead of watched progress.
    #[arg(long)]
    collection: bool,
}

/// Arguments for the `episodes` subcommand.
#[derive(clap::Args)]
struct EpisodesCommand {
    /// Episodes subcommand to run.
    #[command(subcommand)]
    command: EpisodesSubcommands,
}

/// Available episodes subcommands.
#[derive(Subcommand)]
enum EpisodesSubcommands {
    /// Comments on an episode.
    Comments(EpisodeCommentsArgs),
}

/// Arguments for the `episodes comments` subcommand.
#[derive(clap::Args)]
struct EpisodeCommentsArgs {
    /// Show id or slug.
    id: String,

    /// Season number.
    #[arg(long)]
    season: u32,

    /// Episode number.
    #[arg(long)]
    episode: u32,

    /// Page number (1-based).
    #[arg(long)]
    page: Option<u32>,

    /// Items per page.
    #[arg(long)]
    limit: Option<u32>,
}

/// Item type filter for `search`.
#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    /// Movies.
    Movie,
    /// Shows.
    Show,
    /// Episodes.
    Episode,
    /// People.
    Person,
    /// Custom lists.
    List,
}

impl From<SearchKind> for SearchType {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Movie => Self::Movie,
            SearchKind::Show => Self::Show,
            SearchKind::Episode => Self::Episode,
            SearchKind::Person => Self::Person,
            SearchKind::List => Self::List,
        }
    }
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search text.
    query: String,

    /// Restrict results to one item type.
    #[arg(long = "type")]
    kind: Option<SearchKind>,

    /// Shared list options.
    #[command(flatten)]
    list: ListArgs,
}

/// Library section selector for `sync` reads.
#[derive(Clone, Copy, Default, ValueEnum)]
enum MediaKind {
    /// Movies.
    #[default]
    Movies,
    /// Shows.
    Shows,
    /// Seasons.
    Seasons,
    /// Episodes.
    Episodes,
}

/// Arguments for the `sync` subcommand.
#[derive(clap::Args)]
struct SyncCommand {
    /// Sync subcommand to run.
    #[command(subcommand)]
    command: SyncSubcommands,
}

/// Available sync subcommands.
#[derive(Subcommand)]
enum SyncSubcommands {
    /// Timestamps of the user's latest library changes.
    LastActivities,
    /// Watchlisted items.
    Watchlist(WatchlistArgs),
    /// Rated items.
    Ratings(RatingsArgs),
}

/// Arguments for the `sync watchlist` subcommand.
#[derive(clap::Args)]
struct WatchlistArgs {
    /// Library section.
    #[arg(long = "type", value_enum, default_value_t)]
    kind: MediaKind,
}

/// Arguments for the `sync ratings` subcommand.
#[derive(clap::Args)]
struct RatingsArgs {
    /// Library section.
    #[arg(long = "type", value_enum, default_value_t)]
    kind: MediaKind,

    /// Only items rated with this value (1-10).
    #[arg(long)]
    rating: Option<u8>,
}

/// Arguments for the `auth` subcommand.
#[derive(clap::Args)]
struct AuthCommand {
    /// Auth subcommand to run.
    #[command(subcommand)]
    command: AuthSubcommands,
}

/// Available auth subcommands.
#[derive(Subcommand)]
enum AuthSubcommands {
    /// Print the authorization page URL.
    Url(AuthUrlArgs),
    /// Exchange an authorization code and store the token.
    Login(LoginArgs),
    /// Refresh the stored token.
    Refresh,
    /// Revoke and forget the stored token.
    Logout,
}

/// Arguments for the `auth url` subcommand.
#[derive(clap::Args)]
struct AuthUrlArgs {
    /// Opaque value echoed back to the redirect URI.
    #[arg(long)]
    state: Option<String>,

    /// Open the page in the default browser.
    #[arg(long)]
    open: bool,
}

/// Arguments for the `auth login` subcommand.
#[derive(clap::Args)]
struct LoginArgs {
    /// Authorization code shown after approving the application.
    code: String,
}

/// Loads the config file selected by `--dir`.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file cannot be parsed.
fn load_config(dir: Option<&PathBuf>) -> Result<(PathBuf, AppConfig)> {
    let config_path =
        AppConfig::resolve_path(dir.map(PathBuf::as_path)).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    Ok((config_path, config))
}

/// Reads a non-empty environment variable.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Builds a client from environment variables and the config file.
///
/// `TRAKT_CLIENT_ID` and `TRAKT_CLIENT_SECRET` take precedence over the file.
///
/// # Errors
///
/// Returns an error if no client id is configured, a configured URL is
/// invalid, or the HTTP client cannot be built.
fn build_trakt_client(config: &AppConfig) -> Result<TraktClient> {
    let client_id = env_value("TRAKT_CLIENT_ID")
        .or_else(|| config.trakt.client_id.clone())
        .context(
            "client_id is not configured; set TRAKT_CLIENT_ID or [trakt].client_id in config.toml",
        )?;

    let mut builder = TraktClient::builder()
        .client_id(client_id)
        .force_authentication(config.trakt.force_authentication)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

    if let Some(secret) =
        env_value("TRAKT_CLIENT_SECRET").or_else(|| config.trakt.client_secret.clone())
    {
        builder = builder.client_secret(secret);
    }
    if let Some(uri) = &config.trakt.redirect_uri {
        builder = builder.redirect_uri(uri.clone());
    }
    if let Some(base) = &config.trakt.base_url {
        let url = Url::parse(base).with_context(|| format!("invalid base_url: {base}"))?;
        builder = builder.base_url(url);
    }
    if let Some(base) = &config.trakt.oauth_base_url {
        let url = Url::parse(base).with_context(|| format!("invalid oauth_base_url: {base}"))?;
        builder = builder.oauth_base_url(url);
    }
    if let Some(version) = config.trakt.api_version {
        builder = builder.api_version(version);
    }
    if let Some(token) = &config.auth.token {
        if token.is_expired(Utc::now()) {
            tracing::warn!("Stored access token has expired. Run `trakt auth refresh`.");
        }
        builder = builder.access_token(token.clone());
    }

    builder.build().context("failed to build Trakt client")
}

/// Formats an optional year as ` (YYYY)`.
fn year_suffix(year: Option<u32>) -> String {
    year.map(|y| format!(" ({y})")).unwrap_or_default()
}

/// Formats an optional timestamp.
fn timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| String::from("-"), |t| t.to_rfc3339())
}

/// Formats the id users pass back to other commands.
fn display_id(ids: &Ids) -> String {
    ids.best_id().unwrap_or_else(|| String::from("-"))
}

/// Runs the `movies` subcommands.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movies(cmd: &MoviesSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (_, config) = load_config(dir)?;
    let client = build_trakt_client(&config)?;
    let movies = client.movies();

    match cmd {
        MoviesSubcommands::Popular(args) => {
            let list = movies
                .popular(args.extended(), args.pagination())
                .await
                .context("movies/popular request failed")?;
            for movie in &list {
                tracing::info!(
                    "{}\t{}{}",
                    display_id(&movie.ids),
                    movie.title,
                    year_suffix(movie.year)
                );
            }
        }
        MoviesSubcommands::Trending(args) => {
            let list = movies
                .trending(args.extended(), args.pagination())
                .await
                .context("movies/trending request failed")?;
            for item in &list {
                tracing::info!(
                    "{:>5} watching\t{}{}",
                    item.watchers,
                    item.movie.title,
                    year_suffix(item.movie.year)
                );
            }
        }
        MoviesSubcommands::Summary(args) => {
            let movie = movies
                .summary(&args.id, args.list.extended())
                .await
                .context("movies summary request failed")?;
            tracing::info!("{}{}", movie.title, year_suffix(movie.year));
            if let Some(tagline) = &movie.tagline {
                tracing::info!("  {tagline}");
            }
            if let Some(rating) = movie.rating {
                tracing::info!("  Rating: {rating:.1} ({} votes)", movie.votes.unwrap_or(0));
            }
            if let Some(overview) = &movie.overview {
                tracing::info!("  {overview}");
            }
        }
        MoviesSubcommands::Comments(args) => {
            let comments = movies
                .comments(&args.id, args.list.pagination())
                .await
                .context("movies comments request failed")?;
            for comment in &comments {
                let author = comment.user.as_ref().map_or("-", |u| u.username.as_str());
                tracing::info!("[{}] {}: {}", comment.id, author, comment.comment);
            }
        }
    }

    Ok(())
}

/// Runs the `shows` subcommands.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_shows(cmd: &ShowsSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (_, config) = load_config(dir)?;
    let client = build_trakt_client(&config)?;
    let shows = client.shows();

    match cmd {
        ShowsSubcommands::Popular(args) => {
            let list = shows
                .popular(args.extended(), args.pagination())
                .await
                .context("shows/popular request failed")?;
            for show in &list {
                tracing::info!(
                    "{}\t{}{}",
                    display_id(&show.ids),
                    show.title,
                    year_suffix(show.year)
                );
            }
        }
        ShowsSubcommands::Trending(args) => {
            let list = shows
                .trending(args.extended(), args.pagination())
                .await
                .context("shows/trending request failed")?;
            for item in &list {
                tracing::info!(
                    "{:>5} watching\t{}{}",
                    item.watchers,
                    item.show.title,
                    year_suffix(item.show.year)
                );
            }
        }
        ShowsSubcommands::Summary(args) => {
            let show = shows
                .summary(&args.id, args.list.extended())
                .await
                .context("shows summary request failed")?;
            tracing::info!("{}{}", show.title, year_suffix(show.year));
            if let Some(network) = &show.network {
                tracing::info!("  Network: {network}");
            }
            if let Some(status) = &show.status {
                tracing::info!("  Status: {status}");
            }
            if let Some(overview) = &show.overview {
                tracing::info!("  {overview}");
            }
        }
        ShowsSubcommands::Progress(args) => {
            let progress = if args.collection {
                shows
                    .collection_progress(&args.id, Extended::Unspecified)
                    .await
                    .context("collection progress request failed")?
            } else {
                shows
                    .watched_progress(&args.id, Extended::Unspecified)
                    .await
                    .context("watched progress request failed")?
            };
            log_progress(&progress);
        }
    }

    Ok(())
}

/// Logs a show progress report.
fn log_progress(progress: &ShowProgress) {
    tracing::info!("{}/{} episodes", progress.completed, progress.aired);
    for season in &progress.seasons {
        tracing::info!(
            "  Season {:>2}: {}/{}",
            season.number,
            season.completed,
            season.aired
        );
    }
    if let Some(next) = &progress.next_episode {
        tracing::info!(
            "Next: S{:02}E{:02} {}",
            next.season.unwrap_or(0),
            next.number.unwrap_or(0),
            next.title.as_deref().unwrap_or("-")
        );
    }
}

/// Runs the `episodes` subcommands.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_episodes(cmd: &EpisodesSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (_, config) = load_config(dir)?;
    let client = build_trakt_client(&config)?;

    match cmd {
        EpisodesSubcommands::Comments(args) => {
            let comments = client
                .episodes()
                .comments(
                    &args.id,
                    args.season,
                    args.episode,
                    Pagination::new(args.page, args.limit),
                )
                .await
                .context("episode comments request failed")?;
            for comment in &comments {
                let author = comment.user.as_ref().map_or("-", |u| u.username.as_str());
                tracing::info!("[{}] {}: {}", comment.id, author, comment.comment);
            }
        }
    }

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let (_, config) = load_config(dir)?;
    let client = build_trakt_client(&config)?;

    let results = client
        .search()
        .text(
            &args.query,
            args.kind.map(SearchType::from),
            args.list.extended(),
            args.list.pagination(),
        )
        .await
        .context("search request failed")?;

    tracing::info!("Results: {}", results.len());
    for result in &results {
        tracing::info!(
            "{:<8}{:>8}\t{}",
            result.result_type,
            result.score.map(|s| format!("{s:.1}")).unwrap_or_default(),
            result.title().unwrap_or("-")
        );
    }

    Ok(())
}

/// Runs the `sync` subcommands.
///
/// # Errors
///
/// Returns an error if the client fails to build, no token is stored, or
/// the API request fails.
#[instrument(skip_all)]
async fn run_sync(cmd: &SyncSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (_, config) = load_config(dir)?;
    let client = build_trakt_client(&config)?;

    match cmd {
        SyncSubcommands::LastActivities => {
            let activities = client
                .sync()
                .last_activities()
                .await
                .context("sync/last_activities request failed")?;
            tracing::info!("All:      {}", timestamp(activities.all));
            tracing::info!("Movies:   watched {}", timestamp(activities.movies.watched_at));
            tracing::info!("Episodes: watched {}", timestamp(activities.episodes.watched_at));
            tracing::info!("Shows:    rated {}", timestamp(activities.shows.rated_at));
        }
        SyncSubcommands::Watchlist(args) => log_watchlist(&client, args.kind).await?,
        SyncSubcommands::Ratings(args) => {
            let rating = args
                .rating
                .map(Rating::new)
                .transpose()
                .context("invalid --rating")?;
            log_ratings(&client, args.kind, rating).await?;
        }
    }

    Ok(())
}

/// Logs one watchlist section.
///
/// # Errors
///
/// Returns an error if the API request fails.
async fn log_watchlist(client: &TraktClient, kind: MediaKind) -> Result<()> {
    let sync = client.sync();
    let context = "sync/watchlist request failed";
    match kind {
        MediaKind::Movies => {
            let items = sync
                .watchlist_movies(Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                tracing::info!(
                    "{}\t{}{}",
                    timestamp(item.listed_at),
                    item.movie.title,
                    year_suffix(item.movie.year)
                );
            }
        }
        MediaKind::Shows => {
            let items = sync
                .watchlist_shows(Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                tracing::info!(
                    "{}\t{}{}",
                    timestamp(item.listed_at),
                    item.show.title,
                    year_suffix(item.show.year)
                );
            }
        }
        MediaKind::Seasons => {
            let items = sync
                .watchlist_seasons(Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                let show = item.show.as_ref().map_or("-", |s| s.title.as_str());
                tracing::info!(
                    "{}\t{} season {}",
                    timestamp(item.listed_at),
                    show,
                    item.season.number.unwrap_or(0)
                );
            }
        }
        MediaKind::Episodes => {
            let items = sync
                .watchlist_episodes(Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                let show = item.show.as_ref().map_or("-", |s| s.title.as_str());
                tracing::info!(
                    "{}\t{} S{:02}E{:02}",
                    timestamp(item.listed_at),
                    show,
                    item.episode.season.unwrap_or(0),
                    item.episode.number.unwrap_or(0)
                );
            }
        }
    }
    Ok(())
}

/// Logs one ratings section, optionally filtered to a single rating.
///
/// # Errors
///
/// Returns an error if the API request fails.
async fn log_ratings(client: &TraktClient, kind: MediaKind, rating: Option<Rating>) -> Result<()> {
    let sync = client.sync();
    let context = "sync/ratings request failed";
    match kind {
        MediaKind::Movies => {
            let items = sync
                .rated_movies(rating, Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                tracing::info!(
                    "{:>2}\t{}{}",
                    item.rating,
                    item.movie.title,
                    year_suffix(item.movie.year)
                );
            }
        }
        MediaKind::Shows => {
            let items = sync
                .rated_shows(rating, Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                tracing::info!(
                    "{:>2}\t{}{}",
                    item.rating,
                    item.show.title,
                    year_suffix(item.show.year)
                );
            }
        }
        MediaKind::Seasons => {
            let items = sync
                .rated_seasons(rating, Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                let show = item.show.as_ref().map_or("-", |s| s.title.as_str());
                tracing::info!(
                    "{:>2}\t{} season {}",
                    item.rating,
                    show,
                    item.season.number.unwrap_or(0)
                );
            }
        }
        MediaKind::Episodes => {
            let items = sync
                .rated_episodes(rating, Extended::Unspecified)
                .await
                .context(context)?;
            for item in items {
                let show = item.show.as_ref().map_or("-", |s| s.title.as_str());
                tracing::info!(
                    "{:>2}\t{} S{:02}E{:02}",
                    item.rating,
                    show,
                    item.episode.season.unwrap_or(0),
                    item.episode.number.unwrap_or(0)
                );
            }
        }
    }
    Ok(())
}

/// Writes the client's current token into the config file.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
async fn store_token(client: &TraktClient, mut config: AppConfig, path: &Path) -> Result<()> {
    config.auth.token = client.access_token().await;
    config.save(path).context("failed to save config")
}

/// Runs the `auth` subcommands.
///
/// # Errors
///
/// Returns an error if the client fails to build, the token call fails,
/// or the config file cannot be written.
#[instrument(skip_all)]
async fn run_auth(cmd: &AuthSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let (config_path, config) = load_config(dir)?;
    let client = build_trakt_client(&config)?;
    let oauth = client.oauth();

    match cmd {
        AuthSubcommands::Url(args) => {
            let url = oauth
                .authorize_url(args.state.as_deref())
                .context("failed to build authorize URL")?;
            tracing::info!("{url}");
            if args.open {
                open::that(url.as_str()).context("failed to open browser")?;
            }
        }
        AuthSubcommands::Login(args) => {
            let token = oauth
                .exchange_code(&args.code)
                .await
                .context("token exchange failed")?;
            store_token(&client, config, &config_path).await?;
            tracing::info!(
                "Logged in. Token expires at {}",
                timestamp(token.expires_at())
            );
        }
        AuthSubcommands::Refresh => {
            let token = oauth.refresh(None).await.context("token refresh failed")?;
            store_token(&client, config, &config_path).await?;
            tracing::info!(
                "Token refreshed. Expires at {}",
                timestamp(token.expires_at())
            );
        }
        AuthSubcommands::Logout => {
            oauth.revoke().await.context("token revoke failed")?;
            store_token(&client, config, &config_path).await?;
            tracing::info!("Logged out.");
        }
    }

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Movies(cmd) => run_movies(&cmd.command, dir).await,
        Commands::Shows(cmd) => run_shows(&cmd.command, dir).await,
        Commands::Episodes(cmd) => run_episodes(&cmd.command, dir).await,
        Commands::Search(args) => run_search(&args, dir).await,
        Commands::Sync(cmd) => run_sync(&cmd.command, dir).await,
        Commands::Auth(cmd) => run_auth(&cmd.command, dir).await,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        // Arrange & Act & Assert
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_args_parse_extended_and_pagination() {
        // Arrange & Act
        let cli = Cli::try_parse_from([
            "trakt", "movies", "popular", "--extended", "full", "--page", "2", "--limit", "5",
        ])
        .unwrap();

        // Assert
        match cli.command {
            Commands::Movies(MoviesCommand {
                command: MoviesSubcommands::Popular(args),
            }) => {
                assert_eq!(args.extended(), Extended::Full);
                assert_eq!(args.pagination(), Pagination::new(Some(2), Some(5)));
            }
            _ => panic!("parsed a different command"),
        }
    }

    #[test]
    fn test_unknown_extended_is_rejected() {
        // Arrange & Act
        let result = Cli::try_parse_from(["trakt", "movies", "popular", "--extended", "all"]);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_search_kind_maps_to_search_type() {
        // Arrange & Act
        let mapped = SearchType::from(SearchKind::Person);

        // Assert
        assert_eq!(mapped, SearchType::Person);
    }

    #[test]
    fn test_year_suffix() {
        // Arrange & Act & Assert
        assert_eq!(year_suffix(Some(2010)), " (2010)");
        assert_eq!(year_suffix(None), "");
    }

    #[test]
    fn test_build_client_applies_config() {
        // Arrange
        let mut config = AppConfig::default();
        config.trakt.client_id = Some(String::from("from-file"));
        config.trakt.base_url = Some(String::from("http://localhost:9999"));
        config.trakt.api_version = Some(3);

        // Act
        let client = build_trakt_client(&config).unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://localhost:9999/");
        assert_eq!(client.api_version(), 3);
    }

    #[test]
    fn test_build_client_rejects_bad_base_url() {
        // Arrange
        let mut config = AppConfig::default();
        config.trakt.client_id = Some(String::from("from-file"));
        config.trakt.base_url = Some(String::from("not a url"));

        // Act
        let err = build_trakt_client(&config).unwrap_err();

        // Assert
        assert!(err.to_string().starts_with("invalid base_url"));
    }
}
