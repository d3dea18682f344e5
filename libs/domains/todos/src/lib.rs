//! ToDo Domain
//!
//! Business logic for the ToDo list and the REST gateway that fronts it.
//!
//! # Architecture
//!
//! ```text
//!   HTTP+JSON                gRPC
//!       │                      │
//! ┌─────▼──────┐         ┌─────▼──────┐
//! │  Gateway   │──gRPC──▶│  Service   │  ← API version, validation, error kinds
//! └────────────┘         └─────┬──────┘
//!                              │
//!                        ┌─────▼──────┐
//!                        │ Repository │  ← one SQL statement per operation
//!                        └─────┬──────┘
//!                              │
//!                        ┌─────▼──────┐
//!                        │   Models   │
//!                        └────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::postgres::{PostgresConfig, connect};
//! use domain_todos::{MIGRATOR, PgTodoRepository, TodoService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = connect(&PostgresConfig::new("postgres://...")).await?;
//! connector.run_migrations(&MIGRATOR, "todo").await?;
//!
//! let service = TodoService::new(PgTodoRepository::new(connector));
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ToDoError, TodoResult};
pub use handlers::{GatewayApiDoc, ROUTES, gateway_router};
pub use models::{NewToDo, ToDo};
pub use postgres::{MIGRATOR, PgTodoRepository};
pub use repository::TodoRepository;
pub use service::{API_VERSION, TodoService};
