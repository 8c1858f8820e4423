//! Robokit: session and locator engines for keyword-driven automation
//!
//! This library provides the two stateful cores a keyword-execution engine
//! calls into: stack-ordered session registries for external resources
//! (database connections, browser driver sessions) and a strategy-based
//! locator resolution engine for live documents.

pub mod config;
pub mod error;

pub mod document;
pub mod locator;
pub mod session;

// Re-exports
pub use error::{Error, Result};

use document::DriverSession;
use session::traits::DatabaseConnection;
use session::SessionRegistry;

/// Registry of open browser/automation driver sessions
pub type DriverRegistry = SessionRegistry<dyn DriverSession>;

/// Registry of open database connection sessions
pub type ConnectionRegistry = SessionRegistry<dyn DatabaseConnection>;

/// Robokit library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
