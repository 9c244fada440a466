//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the lock and cache use cases.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered configuration (defaults, TOML, `KEYLOCK__` env) |
//! | [`store`] | Store adapter selection from configuration |
//! | [`bootstrap`] | `AppContext`: shared store handle, services, shutdown |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Store reachability probe |
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
