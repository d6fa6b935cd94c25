//! # ReasonEdge Server
//!
//! HTTP front end for the reasoner:
//!
//! - `GET /` health probe
//! - `GET /algorithms` registered reasoning algorithms
//! - `POST /reason` run one reasoning request
//!
//! Validation failures answer `400` with the offending value named; every
//! other failure answers a generic `500`.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use app::{build_provider, build_reasoner, serve};
pub use config::ServiceConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::{router, AppState};
