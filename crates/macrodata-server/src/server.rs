use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    gateway::{self, IndicatorGateway, UpstreamClient},
    handlers, middleware as app_middleware,
};

/// Shared, immutable request-handling state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<IndicatorGateway>,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(cfg.upstream.base_url.clone(), cfg.upstream_timeout())
            .context("failed to build upstream HTTP client")?;
        Ok(Self {
            gateway: Arc::new(IndicatorGateway::new(upstream)),
        })
    }
}

pub struct MacrodataServer {
    addr: SocketAddr,
    app: Router,
}

pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = AppState::from_config(cfg)?;
    Ok(build_router(state))
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(
            "/",
            get(handlers::root).fallback(gateway::router::not_found_handler),
        )
        .route(
            "/healthz",
            get(handlers::healthz).fallback(gateway::router::not_found_handler),
        )
        .merge(gateway::api_routes())
        .fallback(gateway::router::not_found_handler)
        .with_state(state);
    with_middleware(router)
}

/// Wraps a router in the request middleware stack.
///
/// Outermost first: request id, panic guard, trace, pre-flight, CORS. The request id
/// wraps everything so caught panics and `OPTIONS` answers carry it too.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(app_middleware::request_id))
            .layer(CatchPanicLayer::custom(app_middleware::panic_response))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|req: &axum::http::Request<_>| {
                        use tracing::field::Empty;
                        let req_id = req
                            .extensions()
                            .get::<axum::http::HeaderValue>()
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("")
                            .to_string();
                        tracing::info_span!(
                            "http.request",
                            http.method = %req.method(),
                            http.target = %req.uri(),
                            http.status_code = Empty,
                            request_id = %req_id
                        )
                    })
                    .on_response(
                        |res: &axum::http::Response<_>,
                         latency: std::time::Duration,
                         span: &tracing::Span| {
                            span.record(
                                "http.status_code",
                                tracing::field::display(res.status().as_u16()),
                            );
                            tracing::info!(
                                http.status = %res.status().as_u16(),
                                elapsed_ms = %latency.as_millis(),
                                "request handled"
                            );
                        },
                    ),
            )
            .layer(middleware::from_fn(app_middleware::preflight))
            .layer(app_middleware::cors_layer()),
    )
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn build(self) -> anyhow::Result<MacrodataServer> {
        let app = build_app(&self.config)?;

        Ok(MacrodataServer {
            addr: self.addr,
            app,
        })
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MacrodataServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
