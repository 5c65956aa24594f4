//! Startup and serving errors for the SSR host.

/// Fatal server errors. `main` logs these and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config: {0}")]
    Config(String),

    /// Leptos options could not be loaded from `[package.metadata.leptos]`.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The upstream HTTP client could not be built.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The listening socket could not be bound.
    #[error("bind failed: {0}")]
    Bind(std::io::Error),

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
