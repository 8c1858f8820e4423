//! Mock resources for testing
//!
//! In-memory stand-ins for the external handles a registry manages.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::session::traits::{DatabaseConnection, Resource};
use crate::{Error, Result};

/// Mock SQL connection handle
///
/// Tracks release calls and can be configured to fail its release, which is
/// how the best-effort close-all path is exercised.
#[derive(Debug)]
pub struct MockConnection {
    label: String,
    active: AtomicBool,
    release_calls: AtomicUsize,
    fail_release: bool,
}

impl MockConnection {
    /// Create an open mock connection
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            active: AtomicBool::new(true),
            release_calls: AtomicUsize::new(0),
            fail_release: false,
        }
    }

    /// Create an open mock connection whose release always fails
    pub fn failing(label: &str) -> Self {
        Self {
            fail_release: true,
            ..Self::new(label)
        }
    }

    /// Connection label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of times release was called
    pub fn release_count(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Resource for MockConnection {
    async fn release(&self) -> Result<()> {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        self.active.store(false, Ordering::SeqCst);
        if self.fail_release {
            return Err(Error::release_failure(format!(
                "connection '{}' refused to close",
                self.label
            )));
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl DatabaseConnection for MockConnection {}
