//! Session registry implementation
//!
//! Stack-ordered, dual-addressed lifecycle manager for external resource
//! sessions. One instance is created per resource kind (driver sessions, DB
//! connections); the most recently registered or switched-to session is the
//! "current" one.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use futures::future::join_all;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::session::address;
use crate::session::traits::Resource;
use crate::{Error, Result};

/// One registered session: generated id, caller-owned handle, optional alias.
pub struct SessionRecord<R: ?Sized> {
    /// Immutable id generated at registration
    pub id: Uuid,
    /// Handle to the external resource
    pub handle: Arc<R>,
    /// Caller-supplied alias, empty when none was given
    pub alias: String,
}

impl<R: ?Sized> Clone for SessionRecord<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            handle: self.handle.clone(),
            alias: self.alias.clone(),
        }
    }
}

struct Inner<R: ?Sized> {
    sessions: HashMap<Uuid, SessionRecord<R>>,
    stack: Vec<Uuid>,
}

/// Registry of open resource sessions of one kind.
///
/// The selection stack keeps the most recently registered or switched-to id
/// on top; `current()` resolves through it. All bookkeeping mutations happen
/// under one lock, and the lock is never held across a release await.
pub struct SessionRegistry<R: Resource + ?Sized> {
    inner: RwLock<Inner<R>>,
}

impl<R: Resource + ?Sized> SessionRegistry<R> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                sessions: HashMap::new(),
                stack: Vec::new(),
            }),
        }
    }

    /// Register an open resource handle and make it the current session.
    ///
    /// With a non-empty alias the session id is derived deterministically
    /// from the alias, so re-registering the same alias overwrites the
    /// earlier record while pushing a fresh stack entry. Returns the session
    /// id as a string.
    pub fn register(&self, handle: Arc<R>, alias: &str) -> Result<String> {
        if !handle.is_active() {
            return Err(Error::invalid_argument(
                "resource should be open before calling register",
            ));
        }

        let id = address::new_session_id(alias);
        let mut inner = self
            .inner
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?;
        inner.sessions.insert(
            id,
            SessionRecord {
                id,
                handle,
                alias: alias.to_string(),
            },
        );
        inner.stack.push(id);
        debug!(session_id = %id, alias, "registered session");
        Ok(id.to_string())
    }

    /// Handle of the current session, or `None` when no session is open.
    ///
    /// A dangling top-of-stack id (left behind by an alias re-registration
    /// that was later closed) resolves to `None` rather than an error.
    pub fn current(&self) -> Option<Arc<R>> {
        let inner = self.inner.read().ok()?;
        let id = inner.stack.last()?;
        inner.sessions.get(id).map(|record| record.handle.clone())
    }

    /// Session id of the current session, or `None` when the stack is empty.
    pub fn current_session_id(&self) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.stack.last().map(Uuid::to_string)
    }

    /// Handle addressed by session id or alias. Does not affect the current
    /// selection. `None` when no such session exists.
    pub fn get(&self, id_or_alias: &str) -> Option<Arc<R>> {
        let id = address::resolve(id_or_alias)?;
        let inner = self.inner.read().ok()?;
        inner.sessions.get(&id).map(|record| record.handle.clone())
    }

    /// Make the addressed session current. No-op when the session id or
    /// alias does not resolve to a registered session.
    pub fn switch_to(&self, id_or_alias: &str) -> Result<()> {
        let Some(id) = address::resolve(id_or_alias) else {
            return Ok(());
        };
        let mut inner = self
            .inner
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?;
        if inner.sessions.contains_key(&id) {
            inner.stack.retain(|other| *other != id);
            inner.stack.push(id);
            debug!(session_id = %id, "switched current session");
        }
        Ok(())
    }

    /// Close the current session and release its resource.
    ///
    /// The stack entry is popped and the record removed before the release
    /// is awaited, so `size()` stays consistent even when the release fails;
    /// the release error is still propagated.
    pub async fn close(&self) -> Result<()> {
        let record = {
            let mut inner = self
                .inner
                .write()
                .map_err(|e| Error::internal(format!("Lock error: {}", e)))?;
            match inner.stack.pop() {
                Some(id) => inner.sessions.remove(&id),
                None => None,
            }
        };

        match record {
            Some(record) => Self::release_record(&record).await,
            None => Ok(()),
        }
    }

    /// Close the addressed session and release its resource. No-op when the
    /// session id or alias does not resolve to a registered session.
    pub async fn close_session(&self, id_or_alias: &str) -> Result<()> {
        let Some(id) = address::resolve(id_or_alias) else {
            return Ok(());
        };
        let record = {
            let mut inner = self
                .inner
                .write()
                .map_err(|e| Error::internal(format!("Lock error: {}", e)))?;
            let record = inner.sessions.remove(&id);
            if record.is_some() {
                inner.stack.retain(|other| *other != id);
            }
            record
        };

        match record {
            Some(record) => Self::release_record(&record).await,
            None => Ok(()),
        }
    }

    /// Close every session, best-effort.
    ///
    /// Every remaining handle is released even when earlier releases fail;
    /// failures are aggregated into a single [`Error::ReleaseFailure`]. The
    /// map and stack are emptied regardless of the outcome. No release
    /// ordering is guaranteed.
    pub async fn close_all(&self) -> Result<()> {
        let records: Vec<SessionRecord<R>> = {
            let mut inner = self
                .inner
                .write()
                .map_err(|e| Error::internal(format!("Lock error: {}", e)))?;
            inner.stack.clear();
            inner.sessions.drain().map(|(_, record)| record).collect()
        };

        if records.is_empty() {
            return Ok(());
        }

        let total = records.len();
        let results = join_all(records.iter().map(|record| record.handle.release())).await;
        let failures: Vec<String> = records
            .iter()
            .zip(results)
            .filter_map(|(record, result)| {
                result
                    .err()
                    .map(|e| format!("session {}: {}", record.id, e))
            })
            .collect();

        if failures.is_empty() {
            debug!(count = total, "closed all sessions");
            Ok(())
        } else {
            warn!(
                failed = failures.len(),
                total, "some sessions failed to release"
            );
            Err(Error::release_failure(format!(
                "{} of {} sessions failed to release: {}",
                failures.len(),
                total,
                failures.join("; ")
            )))
        }
    }

    /// Number of registered sessions
    pub fn size(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.sessions.len())
            .unwrap_or(0)
    }

    /// Whether no session is registered
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Close every session and clear all bookkeeping state. Idempotent.
    pub async fn cleanup(&self) -> Result<()> {
        let result = self.close_all().await;
        if let Ok(mut inner) = self.inner.write() {
            inner.sessions.clear();
            inner.stack.clear();
        }
        result
    }

    async fn release_record(record: &SessionRecord<R>) -> Result<()> {
        record
            .handle
            .release()
            .await
            .map_err(|e| Error::release_failure(format!("session {}: {}", record.id, e)))
    }
}

impl<R: Resource + ?Sized> Default for SessionRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
