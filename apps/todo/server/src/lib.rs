//! ToDo server
//!
//! One process, two listeners over the same business logic.
//!
//! ```text
//! HTTP+JSON client            gRPC client
//!   ↓                           ↓
//! REST gateway ──loopback gRPC──▶ ToDoServiceImpl (service.rs)
//!                                 ↓
//!                               TodoService (domain layer)
//!                                 ↓
//!                               PgTodoRepository
//!                                 ↓
//!                               PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: process configuration from the environment
//! - `server`: listener lifecycle for the gRPC server and the gateway
//! - `service`: tonic adapter over the domain service

pub mod config;
pub mod server;
pub mod service;

pub use config::Config;
pub use server::{App, Gateway, RpcServer};
pub use service::ToDoServiceImpl;
