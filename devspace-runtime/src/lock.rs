use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OwnedMutexGuard;

/// Per-workspace mutual exclusion. Recovery, injection and abnormal-stop
/// handling for the same workspace id serialize on one lock; different
/// workspaces proceed independently.
#[derive(Debug, Default)]
pub struct WorkspaceLocks {
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl WorkspaceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, workspace_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().expect("workspace locks poisoned");
            // A strong count of 1 means the map holds the only reference:
            // nobody owns or awaits that lock, so the entry can go. Keeps
            // the map bounded by the number of in-flight workspaces.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(workspace_id.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
