use crate::core::{DeskError, FileRecord};
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// User-facing failure report of a lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub operation: Operation,
    pub file_id: Option<String>,
    pub message: String,
    /// The failure was the network round trip itself.
    pub transport: bool,
}

impl Notice {
    pub fn from_error(operation: Operation, file_id: Option<&str>, err: &DeskError) -> Self {
        Self {
            operation,
            file_id: file_id.map(str::to_string),
            message: err.to_string(),
            transport: err.is_transport(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file_id {
            Some(id) => write!(f, "Failed to {} file {}: {}", self.operation.verb(), id, self.message),
            None => write!(f, "Failed to {} files: {}", self.operation.verb(), self.message),
        }
    }
}

/// Where failure notices are surfaced.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::error!(
            operation = notice.operation.verb(),
            file_id = notice.file_id.as_deref().unwrap_or("-"),
            transport = notice.transport,
            "{}",
            notice.message
        );
    }
}

/// Keeps notices until they are drained, and logs them as well.
#[derive(Debug, Default)]
pub struct NoticeBuffer {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut notices) => std::mem::take(&mut *notices),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for NoticeBuffer {
    fn notify(&self, notice: &Notice) {
        LogNotifier.notify(notice);
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
    }
}

/// Explicit confirmation asked before a delete goes ahead.
pub trait Confirm: Send + Sync {
    fn confirm(&self, record: &FileRecord) -> bool;
}

/// Fixed answer, for scripted use.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _record: &FileRecord) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text_and_transport_flag() {
        let err = DeskError::Transport("connection refused".into());
        let notice = Notice::from_error(Operation::Delete, Some("A1"), &err);
        assert!(notice.transport);
        assert_eq!(
            notice.to_string(),
            "Failed to delete file A1: Transport error: connection refused"
        );

        let notice = Notice::from_error(Operation::Load, None, &DeskError::Decode("bad".into()));
        assert!(!notice.transport);
        assert!(notice.to_string().starts_with("Failed to load files"));
    }

    #[test]
    fn test_buffer_drains() {
        let buffer = NoticeBuffer::new();
        let err = DeskError::Storage("disk full".into());
        buffer.notify(&Notice::from_error(Operation::Create, Some("B2"), &err));
        assert_eq!(buffer.drain().len(), 1);
        assert!(buffer.drain().is_empty());
    }
}
