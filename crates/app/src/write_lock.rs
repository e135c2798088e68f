//! Serialized critical section for check-then-act sequences.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// A process-wide lock shared by every service that mutates the catalogue.
///
/// Holding the guard across "check" and "act" makes each mutating use-case
/// atomic with respect to every other one, across both stores. Cloning
/// yields a handle to the same lock.
#[derive(Debug, Clone, Default)]
pub struct WriteLock {
    inner: Arc<Mutex<()>>,
}

impl WriteLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
