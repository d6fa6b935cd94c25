//! # ReasonEdge Client
//!
//! Typed async client for a running ReasonEdge service.
//!
//! ```ignore
//! use reasonedge_client::ReasonEdgeClient;
//!
//! let client = ReasonEdgeClient::builder()
//!     .base_url("http://localhost:3100")
//!     .api_key("secret")
//!     .build()?;
//!
//! let result = client.reason("What is 17 * 23?", "chain_of_thought", 0.2).await?;
//! println!("{}", result.final_answer);
//! ```

pub mod client;

pub use client::{HealthStatus, ReasonEdgeClient, ReasonEdgeClientBuilder, API_KEY_HEADER};
