//! Clipboard copy and the transient "Copied!" acknowledgement.
//!
//! [`copy_text`] performs the clipboard write. [`CopyAck`] is the per-snippet
//! acknowledgement state machine:
//!
//! ```text
//! Idle ──copy ok──▶ Acknowledged ──ack duration, no new copy──▶ Idle
//!                    │      ▲
//!                    └──────┘ copy ok (reset task restarted)
//! ```
//!
//! The reset is a spawned tokio task that sleeps and then posts
//! [`AppMessage::CopyAckExpired`]. A newer copy aborts the pending task and
//! bumps the generation, so an expiry that slipped through is ignored.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::error::ReportResult;
use crate::models::SnippetId;
use crate::traits::ClipboardProvider;

/// Copy `text` to the clipboard through a scoped handle.
///
/// The handle is released when this function returns, on success and on
/// failure alike.
pub fn copy_text(provider: &dyn ClipboardProvider, text: &str) -> ReportResult<()> {
    let mut handle = provider.acquire()?;
    handle.set_text(text)
}

/// Acknowledgement phase of a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckPhase {
    Idle,
    Acknowledged,
}

/// Acknowledgement state for one snippet.
#[derive(Debug)]
pub struct CopyAck {
    snippet: SnippetId,
    phase: AckPhase,
    generation: u64,
    reset_task: Option<JoinHandle<()>>,
}

impl CopyAck {
    pub fn new(snippet: SnippetId) -> Self {
        Self {
            snippet,
            phase: AckPhase::Idle,
            generation: 0,
            reset_task: None,
        }
    }

    pub fn phase(&self) -> AckPhase {
        self.phase
    }

    pub fn is_acknowledged(&self) -> bool {
        self.phase == AckPhase::Acknowledged
    }

    /// Generation of the most recent acknowledgement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a reset task is scheduled and still running.
    pub fn reset_pending(&self) -> bool {
        self.reset_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Enter (or re-enter) the acknowledged phase and schedule the reset.
    ///
    /// Must be called from within a tokio runtime.
    pub fn acknowledge(&mut self, after: Duration, tx: &UnboundedSender<AppMessage>) {
        self.cancel_reset();
        self.generation = self.generation.wrapping_add(1);
        self.phase = AckPhase::Acknowledged;

        let snippet = self.snippet;
        let generation = self.generation;
        let tx = tx.clone();
        self.reset_task = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(AppMessage::CopyAckExpired {
                snippet,
                generation,
            });
        }));

        tracing::debug!(
            snippet = snippet.label(),
            generation,
            "copy acknowledged, reset in {:?}",
            after
        );
    }

    /// Handle a reset posted by the task for `generation`.
    ///
    /// Returns true when the phase changed back to idle.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase == AckPhase::Idle {
            tracing::debug!(
                snippet = self.snippet.label(),
                generation,
                current = self.generation,
                "ignoring stale copy reset"
            );
            return false;
        }
        self.phase = AckPhase::Idle;
        self.reset_task = None;
        true
    }

    fn cancel_reset(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }
    }
}

impl Drop for CopyAck {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryClipboard;
    use tokio::sync::mpsc;

    #[test]
    fn test_copy_text_writes_exact_text() {
        let clipboard = InMemoryClipboard::new();
        copy_text(&clipboard, "  line one\n\tline two  ").unwrap();
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("  line one\n\tline two  ")
        );
    }

    #[test]
    fn test_copy_text_releases_handle_on_write_failure() {
        let clipboard = InMemoryClipboard::rejecting();
        assert!(copy_text(&clipboard, "abc").is_err());
        assert_eq!(clipboard.acquisitions(), 1);
        assert_eq!(clipboard.releases(), 1);
    }

    #[test]
    fn test_new_ack_is_idle() {
        let ack = CopyAck::new(SnippetId::Methodology);
        assert_eq!(ack.phase(), AckPhase::Idle);
        assert!(!ack.reset_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_acknowledge_then_expire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ack = CopyAck::new(SnippetId::Methodology);

        ack.acknowledge(Duration::from_millis(2000), &tx);
        assert!(ack.is_acknowledged());

        let Some(AppMessage::CopyAckExpired { generation, .. }) = rx.recv().await else {
            panic!("expected an expiry message");
        };
        assert!(ack.expire(generation));
        assert_eq!(ack.phase(), AckPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ack = CopyAck::new(SnippetId::Retrospective);

        ack.acknowledge(Duration::from_millis(2000), &tx);
        let first = ack.generation();
        ack.acknowledge(Duration::from_millis(2000), &tx);

        assert!(!ack.expire(first));
        assert!(ack.is_acknowledged());
        assert!(ack.expire(first + 1));
    }
}
