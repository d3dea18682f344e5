//! gRPC server configuration and health wiring
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig};
//! use rpc::todo::v1::to_do_service_server::{ToDoServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(ToDoServiceServer::new(my_impl))
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::GrpcServer;
pub use config::ServerConfig;
