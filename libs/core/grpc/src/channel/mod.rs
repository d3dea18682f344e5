pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

fn endpoint(addr: &str, config: &ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;
  Ok(config.apply_to_endpoint(endpoint))
}

/// Creates a channel that connects on the first request.
///
/// Used when the target server starts in the same process and may not be
/// accepting yet.
///
/// ```ignore
/// let channel = create_channel_lazy_with_config("http://127.0.0.1:9090", ChannelConfig::default())?;
/// let client = ToDoServiceClient::new(channel);
/// ```
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, &config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_uri() {
    let result = create_channel_lazy_with_config("not a valid uri", ChannelConfig::default());
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidUri(_)));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    // Nothing listens on port 1; a lazy channel must still be created
    let result = create_channel_lazy_with_config("http://127.0.0.1:1", ChannelConfig::default());
    assert!(result.is_ok());
  }
}
