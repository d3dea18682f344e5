//! Listener lifecycle for the gRPC server and the REST gateway
//!
//! Both listeners move through the same states:
//!
//! ```text
//! RpcServer<Created> ──bind()──▶ RpcServer<Listening> ──serve(shutdown)──▶ stopped
//! Gateway<Created>   ──bind()──▶ Gateway<Listening>   ──serve(shutdown)──▶ stopped
//! ```
//!
//! Binding is separate from serving so that bind failures surface before
//! anything is accepted, and so the gateway learns the gRPC port even when it
//! was picked by the OS.

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use axum_helpers::{ShutdownCoordinator, create_router, health_router};
use core_config::server::ServerConfig;
use domain_todos::{GatewayApiDoc, TodoRepository, TodoService, gateway_router};
use eyre::{Result, WrapErr, eyre};
use grpc_client::server::{GrpcServer, ServerConfig as GrpcServerConfig};
use grpc_client::{ChannelConfig, GrpcError, GrpcResult, create_channel_lazy_with_config};
use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
use rpc::todo::v1::to_do_service_server::{SERVICE_NAME, ToDoServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::service::ToDoServiceImpl;

/// Not bound yet
pub struct Created;

/// Bound and ready to serve
pub struct Listening {
    listener: TcpListener,
    local_addr: SocketAddr,
}

/// gRPC listener for `todo.v1.ToDoService` and `grpc.health.v1.Health`
pub struct RpcServer<State = Created> {
    config: GrpcServerConfig,
    state: State,
}

impl RpcServer<Created> {
    pub fn new(config: GrpcServerConfig) -> Self {
        Self {
            config,
            state: Created,
        }
    }

    pub async fn bind(self) -> GrpcResult<RpcServer<Listening>> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|e| GrpcError::InvalidConfig(e.to_string()))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GrpcError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| GrpcError::Bind { addr, source })?;

        info!(%local_addr, "gRPC listener bound");
        Ok(RpcServer {
            config: self.config,
            state: Listening {
                listener,
                local_addr,
            },
        })
    }
}

impl RpcServer<Listening> {
    pub fn local_addr(&self) -> SocketAddr {
        self.state.local_addr
    }

    /// Serve until `shutdown` resolves, then drain in-flight calls
    pub async fn serve<R, F>(self, service: TodoService<R>, shutdown: F) -> GrpcResult<()>
    where
        R: TodoRepository + 'static,
        F: Future<Output = ()> + Send,
    {
        let (health_reporter, health_service) = health_reporter();
        GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
        GrpcServer::log_startup(&self.config, SERVICE_NAME);

        let mut todo_service = ToDoServiceServer::new(ToDoServiceImpl::new(service))
            .max_decoding_message_size(self.config.max_message_size)
            .max_encoding_message_size(self.config.max_message_size);
        if self.config.enable_compression {
            todo_service = todo_service
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd);
        }

        let shutdown = async move {
            shutdown.await;
            GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        };

        Server::builder()
            .add_service(health_service)
            .add_service(todo_service)
            .serve_with_incoming_shutdown(TcpListenerStream::new(self.state.listener), shutdown)
            .await
            .map_err(GrpcError::Serve)?;

        info!("gRPC server stopped");
        Ok(())
    }
}

/// HTTP+JSON gateway forwarding to the gRPC server over loopback
pub struct Gateway<State = Created> {
    config: ServerConfig,
    state: State,
}

impl Gateway<Created> {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: Created,
        }
    }

    pub async fn bind(self) -> Result<Gateway<Listening>> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .wrap_err_with(|| format!("Failed to bind REST gateway to {}", addr))?;
        let local_addr = listener.local_addr()?;

        info!(%local_addr, "REST gateway listener bound");
        Ok(Gateway {
            config: self.config,
            state: Listening {
                listener,
                local_addr,
            },
        })
    }
}

impl Gateway<Listening> {
    pub fn local_addr(&self) -> SocketAddr {
        self.state.local_addr
    }

    /// Serve until `shutdown` resolves, forwarding every route to `rpc_addr`
    pub async fn serve<F>(self, rpc_addr: SocketAddr, compression: bool, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let endpoint = format!("http://{}", loopback_target(rpc_addr));
        let channel = create_channel_lazy_with_config(endpoint.as_str(), ChannelConfig::default())?;
        let mut client = ToDoServiceClient::new(channel);
        if compression {
            client = client
                .send_compressed(CompressionEncoding::Zstd)
                .accept_compressed(CompressionEncoding::Zstd);
        }

        info!(upstream = %endpoint, "REST gateway forwarding to gRPC server");

        let apis = gateway_router(client)
            .merge(health_router("todo-gateway", env!("CARGO_PKG_VERSION")));
        let router = create_router::<GatewayApiDoc>(apis);

        axum_helpers::serve(self.state.listener, router, shutdown)
            .await
            .wrap_err_with(|| format!("REST gateway on {} failed", self.config.address()))
    }
}

/// Address a local client should dial to reach a listener bound to `addr`
fn loopback_target(addr: SocketAddr) -> SocketAddr {
    match addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => {
            SocketAddr::new(Ipv4Addr::LOCALHOST.into(), addr.port())
        }
        IpAddr::V6(ip) if ip.is_unspecified() => {
            SocketAddr::new(Ipv6Addr::LOCALHOST.into(), addr.port())
        }
        _ => addr,
    }
}

/// Both listeners bound, sharing one domain service
pub struct App<R: TodoRepository + 'static> {
    rpc: RpcServer<Listening>,
    gateway: Gateway<Listening>,
    service: TodoService<R>,
    shutdown_timeout: Duration,
}

impl<R: TodoRepository + 'static> App<R> {
    /// Bind both listeners; either failing is fatal
    pub async fn bind(config: &Config, service: TodoService<R>) -> Result<Self> {
        let rpc = RpcServer::new(config.grpc.clone())
            .bind()
            .await
            .wrap_err("Failed to bind gRPC listener")?;
        let gateway = Gateway::new(config.http.clone()).bind().await?;

        Ok(Self {
            rpc,
            gateway,
            service,
            shutdown_timeout: config.shutdown_timeout,
        })
    }

    pub fn grpc_addr(&self) -> SocketAddr {
        self.rpc.local_addr()
    }

    pub fn http_addr(&self) -> SocketAddr {
        self.gateway.local_addr()
    }

    /// Run the gateway in the background and the gRPC server in the
    /// foreground until `coordinator` signals shutdown.
    ///
    /// A gateway failure shuts the whole process down.
    pub async fn run(self, coordinator: ShutdownCoordinator) -> Result<()> {
        let rpc_addr = self.rpc.local_addr();
        let compression = self.rpc.config.enable_compression;

        let gateway_coordinator = coordinator.clone();
        let gateway = self.gateway;
        let gateway_task = tokio::spawn(async move {
            let result = gateway
                .serve(rpc_addr, compression, gateway_coordinator.wait())
                .await;
            if let Err(e) = &result {
                error!("REST gateway stopped: {:?}", e);
                gateway_coordinator.shutdown();
            }
            result
        });

        let deadline = drain_deadline(&coordinator, self.shutdown_timeout);
        let rpc_result = tokio::select! {
            result = self.rpc.serve(self.service, coordinator.wait()) => result,
            _ = deadline => {
                warn!(timeout = ?self.shutdown_timeout, "gRPC server did not drain in time");
                Ok(())
            }
        };
        // The gRPC server may have stopped on its own
        coordinator.shutdown();

        let gateway_result =
            match tokio::time::timeout(self.shutdown_timeout, gateway_task).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => Err(eyre!("REST gateway task failed: {}", e)),
                Err(_) => {
                    warn!(timeout = ?self.shutdown_timeout, "REST gateway did not drain in time");
                    Ok(())
                }
            };

        rpc_result.wrap_err("gRPC server failed")?;
        gateway_result
    }
}

/// Resolves `timeout` after shutdown has been initiated
fn drain_deadline(
    coordinator: &ShutdownCoordinator,
    timeout: Duration,
) -> impl Future<Output = ()> + Send + 'static {
    let initiated = coordinator.wait();
    async move {
        initiated.await;
        tokio::time::sleep(timeout).await;
    }
}
