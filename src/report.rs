/// Severity of a transient user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Informational or success message.
    Success,
    /// Something failed; no automatic retry follows.
    Error,
}

/// Transient user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Display text.
    pub message: String,
}

impl Notification {
    /// Success message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Outcome class of one item in a finalize run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Output written.
    Success,
    /// Render failed; the run continued.
    Error,
    /// Not selected for processing.
    Skipped,
}

/// Per-item record of a finalize run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    /// Outcome class.
    pub kind: LogKind,
    /// Display text.
    pub message: String,
}

impl LogEntry {
    pub(crate) fn success(name: &str) -> Self {
        Self {
            kind: LogKind::Success,
            message: format!("✓ {name} processed"),
        }
    }

    pub(crate) fn error(name: &str, reason: &str) -> Self {
        Self {
            kind: LogKind::Error,
            message: format!("✗ {name} failed: {reason}"),
        }
    }

    pub(crate) fn skipped(name: &str) -> Self {
        Self {
            kind: LogKind::Skipped,
            message: format!("⏭ {name} skipped (not selected)"),
        }
    }
}

/// Ordered per-item log of a finalize run.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessingReport {
    /// Entries in processing order; skipped items follow processed ones.
    pub entries: Vec<LogEntry>,
}

impl ProcessingReport {
    fn count(&self, kind: LogKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Items written successfully.
    pub fn succeeded(&self) -> usize {
        self.count(LogKind::Success)
    }

    /// Items that failed to render.
    pub fn failed(&self) -> usize {
        self.count(LogKind::Error)
    }

    /// Items skipped because they were not selected.
    pub fn skipped(&self) -> usize {
        self.count(LogKind::Skipped)
    }

    /// Summary notification for the whole run.
    pub fn summary(&self) -> Notification {
        let ok = self.succeeded();
        let failed = self.failed();
        let skipped = self.skipped();
        let processed = ok + failed;

        if processed == 0 {
            return Notification::success("No images were processed.");
        }
        if failed == 0 {
            let tail = if skipped > 0 {
                format!(", skipped: {skipped}")
            } else {
                String::new()
            };
            return Notification::success(format!(
                "All images processed! (processed: {ok}{tail})"
            ));
        }
        let tail = if skipped > 0 {
            format!(" (skipped: {skipped})")
        } else {
            String::new()
        };
        Notification::error(format!("{ok}/{processed} images processed{tail}"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/batch/report.rs"]
mod tests;
