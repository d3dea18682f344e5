use std::net::SocketAddr;
use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors from channel creation and server lifecycle
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  /// Listener could not be bound
  #[error("failed to listen on {addr}: {source}")]
  Bind {
    addr: SocketAddr,
    #[source]
    source: std::io::Error,
  },

  /// Server stopped with a transport error
  #[error("gRPC server error: {0}")]
  Serve(tonic::transport::Error),
}
