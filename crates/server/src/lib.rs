//! C-CDA Records Server - HTTP surface
//!
//! A small local server over a single records directory of C-CDA XML files.
//! Every request is a stateless read-and-respond against the filesystem; the
//! directory may change freely between requests.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - liveness, timestamp, and records directory status
//! - `GET /api/files` - listing: one entry per `.xml` document with display
//!   name, patient name, and most recent encounter date
//! - `GET /api/file/{filename}` - the raw document, guarded against path
//!   traversal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
