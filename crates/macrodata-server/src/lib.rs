pub mod config;
pub mod gateway;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;

pub use config::{AppConfig, LoggingConfig, ServerConfig, UpstreamConfig};
pub use gateway::{GatewayError, IndicatorGateway, UpstreamClient};
pub use observability::init_tracing;
pub use server::{AppState, MacrodataServer, ServerBuilder, build_app, build_router};
