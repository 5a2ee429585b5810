//! # Flomote
//!
//! Slimmer werken met AI: a small HTTP service that turns a company QuickScan
//! into recommended automation workflows, stores intake submissions and
//! renders outreach pitches.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=file:///var/lib/flomote PORT=8000 flomote serve
//! ```
//!
//! ## Modules
//!
//! - `schema` - Request/response payloads and validation
//! - `store` - Document store gateway with file, memory and disconnected backends
//! - `advice` - Recommendation rule engine (QuickScan → AdviceReport)
//! - `pitch` - Deterministic outreach pitch templating
//! - `api` - axum router, handlers and error mapping
//! - `app` - Configuration, logging and runtime
pub mod advice;
pub mod api;
pub mod app;
pub mod error;
pub mod pitch;
pub mod schema;
pub mod store;

pub use error::{Error, Result};
