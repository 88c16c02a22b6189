mod browser;


pub use browser::open_in_browser;

use crate::library::{Library, LibraryLoader};
use crate::render;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Settings for the listing server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Folder rescanned on every request
    pub folder: PathBuf,
    /// Port to listen on
    pub port: u16,
    /// Bind every interface instead of loopback only
    pub public: bool,
    /// Open the listing page once the socket is bound
    pub open_browser: bool,
    pub loader: LibraryLoader,
}

impl ServerConfig {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            port: DEFAULT_PORT,
            public: false,
            open_browser: false,
            loader: LibraryLoader::new(),
        }
    }

    pub fn host(&self) -> &'static str {
        if self.public {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }

    /// Address a local browser should visit
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// Build the application router
pub fn router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/bookmarklets.json", get(bookmarklets_json))
        .with_state(config)
}

/// Bind and serve until the process is interrupted
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host(), config.port);
    let socket_addr: SocketAddr = addr.parse().context("Failed to parse socket address")?;

    let listener = tokio::net::TcpListener::bind(&socket_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Serving {} on http://{}", config.folder.display(), addr);

    if config.open_browser {
        if let Err(e) = open_in_browser(&config.local_url()) {
            warn!("Failed to open browser: {:#}", e);
        }
    }

    axum::serve(listener, router(Arc::new(config)))
        .await
        .context("Server error")?;

    Ok(())
}

async fn index(State(config): State<Arc<ServerConfig>>) -> Response {
    match load_library(config).await {
        Ok(library) => Html(render::index_page(library.bookmarklets())).into_response(),
        Err(response) => response,
    }
}

async fn bookmarklets_json(State(config): State<Arc<ServerConfig>>) -> Response {
    match load_library(config).await {
        Ok(library) => Json(library.into_bookmarklets()).into_response(),
        Err(response) => response,
    }
}

/// Rebuild the library from disk off the async workers
async fn load_library(config: Arc<ServerConfig>) -> Result<Library, Response> {
    let loaded = tokio::task::spawn_blocking(move || config.loader.load(&config.folder)).await;

    match loaded {
        Ok(Ok(library)) => Ok(library),
        Ok(Err(e)) => {
            error!("Failed to load bookmarklets: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
        }
        Err(e) => {
            error!("Loader task failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Loader task failed").into_response())
        }
    }
}
