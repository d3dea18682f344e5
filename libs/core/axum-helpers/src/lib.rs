//! # Axum Helpers
//!
//! Shared building blocks for the HTTP side of the services in this workspace.
//!
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body
//! - **[`extractors`]**: JSON, path and query extractors that reject with [`AppError`]
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_router, serve, ShutdownCoordinator};
//!
//! let router = create_router::<ApiDoc>(api_routes);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! let (coordinator, _rx) = ShutdownCoordinator::new();
//! serve(listener, router, coordinator.wait()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{JsonBody, PathParam, QueryParam};
pub use server::{ShutdownCoordinator, create_router, health_router, serve, shutdown_signal};
