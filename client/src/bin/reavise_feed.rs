//! Loads the home feed once, in demo or live mode, and logs a summary.

use std::sync::Arc;

use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use demo_data::DemoDataset;
use reavise_client::api::LiveApi;
use reavise_client::demo::{DatasetLoadError, DemoApi, DemoApiError, load_dataset};
use reavise_client::domain::ports::{MemoryKeyValueStore, TokioSleeper, TransportError};
use reavise_client::outbound::http::ReqwestTransport;
use reavise_client::state::AppState;
use reavise_client::{ApiMode, ClientSettings};

/// Failures that stop the preview.
#[derive(Debug, thiserror::Error)]
enum FeedPreviewError {
    #[error("failed to load configuration: {message}")]
    Config { message: String },
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Dataset(#[from] DatasetLoadError),
    #[error(transparent)]
    Demo(#[from] DemoApiError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[tokio::main]
async fn main() -> Result<(), FeedPreviewError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ClientSettings::load().map_err(|error| FeedPreviewError::Config {
        message: error.to_string(),
    })?;
    let state = AppState::new();
    match settings.mode() {
        ApiMode::Demo => preview_demo(&settings, &state).await,
        ApiMode::Live => preview_live(&settings, &state).await,
    }
}

async fn preview_demo(settings: &ClientSettings, state: &AppState) -> Result<(), FeedPreviewError> {
    let dataset = match &settings.demo_dataset_path {
        Some(path) => load_dataset(path)?,
        None => DemoDataset::bundled(),
    };
    let mut api = DemoApi::new(dataset, Arc::new(TokioSleeper), Arc::new(DefaultClock))?;
    if let Some(seed) = settings.like_seed {
        api = api.with_like_seed(seed);
    }

    let (user, posts) = state
        .while_loading(async { (api.get_current_user().await, api.get_posts(None).await) })
        .await;
    info!(
        mode = "demo",
        user = %user.data.username,
        posts = posts.data.len(),
        "feed loaded"
    );
    Ok(())
}

async fn preview_live(settings: &ClientSettings, state: &AppState) -> Result<(), FeedPreviewError> {
    let store = Arc::new(MemoryKeyValueStore::default());
    let transport = ReqwestTransport::new(
        settings.api_base_url()?,
        settings.request_timeout(),
        store.clone(),
    )?;
    let api = LiveApi::new(Arc::new(transport), store);

    let mode = state.feed_mode.get();
    let posts = state.while_loading(api.feed.feed(mode)).await?;
    let count = posts.len();
    state.posts.set(posts);
    info!(mode = "live", feed = mode.as_segment(), posts = count, "feed loaded");
    Ok(())
}
