//! Transient user-visible notifications
//!
//! Managers push notices over an unbounded channel; the rendering layer
//! drains the receiving end and shows them as toasts. No retry, no
//! persistence: a notice not drained before shutdown is simply lost.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sending half of the notice channel, shared by all managers
#[derive(Debug, Clone)]
pub struct NoticeSink {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticeSink {
    /// Create a sink together with its receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Push a success notice
    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    /// Push an error notice
    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    /// Push a notice; a closed receiver means nobody is rendering, so the
    /// notice is dropped
    pub fn push(&self, notice: Notice) {
        if self.tx.send(notice).is_err() {
            tracing::trace!("Notice receiver closed, dropping notice");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notices_arrive_in_order() {
        let (sink, mut rx) = NoticeSink::channel();
        sink.success("first");
        sink.error("second");

        assert_eq!(rx.recv().await.unwrap(), Notice::success("first"));
        assert_eq!(rx.recv().await.unwrap(), Notice::error("second"));
    }

    #[tokio::test]
    async fn test_closed_receiver_does_not_panic() {
        let (sink, rx) = NoticeSink::channel();
        drop(rx);
        sink.success("nobody listening");
    }
}
