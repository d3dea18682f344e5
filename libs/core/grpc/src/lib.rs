//! # gRPC helpers
//!
//! Channel creation for in-process clients, server configuration and health
//! wiring, and protobuf well-known-type conversions shared by the services in
//! this workspace.
//!
//! ## Client
//! ```ignore
//! use grpc_client::{create_channel_lazy_with_config, ChannelConfig};
//! use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
//!
//! let channel = create_channel_lazy_with_config("http://127.0.0.1:9090", ChannelConfig::default())?;
//! let client = ToDoServiceClient::new(channel);
//! ```
//!
//! ## Server
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//! ```

pub mod channel;
pub mod conversions;
pub mod error;
pub mod server;

pub use channel::{ChannelConfig, create_channel_lazy_with_config};
pub use error::{GrpcError, GrpcResult};
