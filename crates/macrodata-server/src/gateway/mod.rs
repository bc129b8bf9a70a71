//! Indicator gateway: catalog-driven access to the upstream statistical API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Request   │  GET /api/{indicator}?from=&to=&country=
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ IndicatorGateway │  catalog lookup -> query resolution
//! └──────┬───────────┘
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ UpstreamClient   │  one GET, explicit timeout
//! └──────┬───────────┘
//!        │
//!        ▼
//!   normalization -> {"data": ...}
//! ```
//!
//! Failures never escape a request: they render as `{"error": "..."}` through
//! [`GatewayError`].

pub mod error;
pub mod router;
pub mod service;
pub mod upstream;

pub use error::GatewayError;
pub use router::api_routes;
pub use service::IndicatorGateway;
pub use upstream::UpstreamClient;
