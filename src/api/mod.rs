//! HTTP API for the trivia game.

mod error;
mod handlers;
pub mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::selection::{PickPolicy, QuizPicker};

pub use error::{ApiError, ErrorResponse, ServerError};
pub use state::AppState;

/// Environment variable for the bind address.
pub const HOST_ENV: &str = "TRIVIA_HOST";
/// Environment variable for the listen port.
pub const PORT_ENV: &str = "TRIVIA_PORT";
/// Environment variable for the quiz pick policy (`random` or `first`).
pub const PICK_ENV: &str = "TRIVIA_QUIZ_PICK";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// How the quiz endpoint chooses among unseen questions
    pub pick_policy: PickPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            pick_policy: PickPolicy::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `TRIVIA_HOST`, `TRIVIA_PORT`, and
    /// `TRIVIA_QUIZ_PICK`. Unparsable values are ignored.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or(HOST_ENV, defaults.host),
            port: env_or(PORT_ENV, defaults.port),
            pick_policy: env_or(PICK_ENV, defaults.pick_policy),
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_pick_policy(mut self, pick_policy: PickPolicy) -> Self {
        self.pick_policy = pick_policy;
        self
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and database
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ServerError> {
    let state = AppState::new(db, QuizPicker::new(config.pick_policy));
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(pick_policy = %config.pick_policy, "API server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)?;
    Ok(())
}
