//! Mutation replay against an optional backup target.
//!
//! Every mutating facade operation is captured as an [`Operation`] value and,
//! once the primary has succeeded, re-issued with identical arguments against
//! a secondary [`PathStore`] if one is configured. The relay is a best-effort
//! mirror, not a two-phase write: its failures are logged and swallowed,
//! never rolled back into or reported with the primary result.

use std::sync::Arc;

use tracing::warn;

use crate::traits::PathStore;

/// A mutating facade operation, captured with its arguments for replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `mkdir(dir, recursive)`
    Mkdir { dir: String, recursive: bool },
    /// `put(content, path)`
    Put { content: Vec<u8>, path: String },
    /// `append(content, path)`
    Append { content: Vec<u8>, path: String },
}

impl Operation {
    /// The operation's name, for log events.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Mkdir { .. } => "mkdir",
            Operation::Put { .. } => "put",
            Operation::Append { .. } => "append",
        }
    }
}

/// Re-issues mutating operations against a backup target.
///
/// Constructed once with an optional target; absence is a valid, permanent
/// state with no lazy attachment later.
pub struct BackupRelay {
    target: Option<Arc<dyn PathStore>>,
}

impl BackupRelay {
    /// Create a relay, with or without a target.
    pub fn new(target: Option<Arc<dyn PathStore>>) -> Self {
        Self { target }
    }

    /// Whether a backup target is configured.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Replay `op` against the backup target, if one is configured.
    ///
    /// Called only after the primary operation has succeeded. A failing
    /// replay is logged at `warn` and otherwise ignored.
    pub fn replay(&self, op: &Operation) {
        let Some(target) = &self.target else {
            return;
        };
        let result = match op {
            Operation::Mkdir { dir, recursive } => target.mkdir(dir, *recursive),
            Operation::Put { content, path } => target.put(content, path).map(|_| ()),
            Operation::Append { content, path } => target.append(content, path),
        };
        if let Err(error) = result {
            warn!(operation = op.name(), %error, "backup replay failed");
        }
    }
}

impl std::fmt::Debug for BackupRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackupRelay")
            .field("active", &self.is_active())
            .finish()
    }
}
