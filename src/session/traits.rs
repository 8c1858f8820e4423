//! Session resource traits
//!
//! The registry never constructs the external resources it manages; callers
//! hand it opened handles behind these traits.

use async_trait::async_trait;

/// An external, session-bearing resource managed by a registry.
///
/// Implementations wrap whatever the surrounding application opened (a SQL
/// connection, a driver session) and know how to release it. `release` is
/// called at most once per registered record by the registry itself.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Release the underlying resource (close the connection, quit the driver).
    async fn release(&self) -> Result<(), crate::Error>;

    /// Whether the underlying resource is still usable.
    fn is_active(&self) -> bool;
}

/// Marker for SQL connection handles.
///
/// The query surface lives with the caller; the registry only tracks
/// lifetime and the "current" selection.
pub trait DatabaseConnection: Resource {}
