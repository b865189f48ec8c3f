use crate::{
    middlewares::signature::signature_middleware,
    routes::apply_routes,
    services::{
        line_client::line_service::{LineService, LineServiceConfig, DEFAULT_LINE_API_HOST},
        transit_service::transit_client::{
            BoundFilter, TransitService, TransitServiceConfig, DEFAULT_TRANSIT_API_URL,
        },
    },
    types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use validator::Validate;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub channel_secret: String,
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub channel_access_token: String,
    #[validate(url(message = "Must be a URL"))]
    pub transit_api_url: String,
    #[validate(url(message = "Must be a URL"))]
    pub line_api_host: String,
    pub arrival_filter: BoundFilter,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Specify {0} as environment variable.")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("Invalid ARRIVAL_BOUND: {0}")]
    InvalidBound(String),

    #[error("Invalid PORT: {0:?}")]
    InvalidPort(String),
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let arrival_filter = match lookup("ARRIVAL_BOUND") {
            Some(b) => b.parse::<BoundFilter>().map_err(ConfigError::InvalidBound)?,
            None => BoundFilter::default(),
        };

        let port = match lookup("PORT") {
            Some(p) => p.parse::<u16>().map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };

        let config = AppConfig {
            channel_secret: required("LINE_CHANNEL_SECRET")?,
            channel_access_token: required("LINE_CHANNEL_ACCESS_TOKEN")?,
            transit_api_url: lookup("TRANSIT_API_URL")
                .unwrap_or_else(|| DEFAULT_TRANSIT_API_URL.to_string()),
            line_api_host: lookup("LINE_API_HOST")
                .map(|h| h.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_LINE_API_HOST.to_string()),
            arrival_filter,
            port,
        };

        config.validate()?;

        Ok(config)
    }
}

pub fn gen_app(config: AppConfig) -> Router {
    let state = AppState {
        transit_service: TransitService::new(TransitServiceConfig {
            url: config.transit_api_url,
        }),
        line_service: LineService::new(LineServiceConfig {
            channel_access_token: config.channel_access_token,
            host: config.line_api_host,
        }),
        channel_secret: config.channel_secret,
        arrival_filter: config.arrival_filter,
    };

    // the signature check only guards the webhook routes registered above it
    apply_routes(Router::new())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            signature_middleware,
        ))
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// health check
async fn root() -> &'static str {
    "Hello World!"
}

#[cfg(test)]
pub const TEST_CHANNEL_SECRET: &str = "test-channel-secret";

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub transit_server: mockito::ServerGuard,
    pub line_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let transit_server = mockito::Server::new_async().await;
    let line_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        channel_secret: TEST_CHANNEL_SECRET.to_string(),
        channel_access_token: "test-access-token".to_string(),
        transit_api_url: format!("{}/api.php", transit_server.url()),
        line_api_host: line_server.url(),
        arrival_filter: BoundFilter::default(),
        port: DEFAULT_PORT,
    });

    MockApp {
        app,
        transit_server,
        line_server,
    }
}
