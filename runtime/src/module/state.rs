//! Readiness state of the inference module.
//!
//! The state lives in a single-writer cell: exactly one [`StatusPublisher`]
//! exists (owned by the loader) and any number of [`StatusReader`]s observe it.
//! The only transitions are `Uninitialized -> Ready` and
//! `Uninitialized -> Failed`; both targets are final.

use tokio::sync::watch;

/// Lifecycle of the inference module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleState {
    /// Initialization has not completed.
    #[default]
    Uninitialized,
    /// The module is operable.
    Ready,
    /// Initialization failed. Absorbing.
    Failed,
}

impl ModuleState {
    /// Whether the state can no longer change.
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

/// Create a fresh status cell in the `Uninitialized` state.
pub fn status_cell() -> (StatusPublisher, StatusReader) {
    let (tx, rx) = watch::channel(ModuleState::Uninitialized);
    (StatusPublisher { tx }, StatusReader { rx })
}

/// The single writer of the module state.
#[derive(Debug)]
pub struct StatusPublisher {
    tx: watch::Sender<ModuleState>,
}

impl StatusPublisher {
    /// Move to `Ready`. Returns false if the state was already settled.
    pub fn mark_ready(&self) -> bool {
        self.settle(ModuleState::Ready)
    }

    /// Move to `Failed`. Returns false if the state was already settled.
    pub fn mark_failed(&self) -> bool {
        self.settle(ModuleState::Failed)
    }

    /// Another reader on the same cell.
    pub fn subscribe(&self) -> StatusReader {
        StatusReader {
            rx: self.tx.subscribe(),
        }
    }

    fn settle(&self, target: ModuleState) -> bool {
        self.tx.send_if_modified(|state| {
            if state.is_settled() {
                return false;
            }
            *state = target;
            true
        })
    }
}

/// Read-only view of the module state.
#[derive(Debug, Clone)]
pub struct StatusReader {
    rx: watch::Receiver<ModuleState>,
}

impl StatusReader {
    /// Current state.
    pub fn current(&self) -> ModuleState {
        *self.rx.borrow()
    }

    /// Wait until the state is `Ready` or `Failed` and return it.
    ///
    /// If the publisher is dropped while still `Uninitialized`, the module can
    /// never become ready, which is reported as `Failed`.
    pub async fn settled(&self) -> ModuleState {
        let mut rx = self.rx.clone();
        let state = match rx.wait_for(|state| state.is_settled()).await {
            Ok(state) => *state,
            Err(_) => ModuleState::Failed,
        };
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_uninitialized() {
        let (_publisher, reader) = status_cell();
        assert_eq!(reader.current(), ModuleState::Uninitialized);
        assert!(!reader.current().is_settled());
    }

    #[test]
    fn test_ready_is_final() {
        let (publisher, reader) = status_cell();
        assert!(publisher.mark_ready());
        assert!(!publisher.mark_failed());
        assert!(!publisher.mark_ready());
        assert_eq!(reader.current(), ModuleState::Ready);
    }

    #[test]
    fn test_failed_is_absorbing() {
        let (publisher, reader) = status_cell();
        assert!(publisher.mark_failed());
        assert!(!publisher.mark_ready());
        assert_eq!(reader.current(), ModuleState::Failed);
    }

    #[test]
    fn test_publish_without_readers() {
        let (publisher, reader) = status_cell();
        drop(reader);
        assert!(publisher.mark_ready());
        assert_eq!(publisher.subscribe().current(), ModuleState::Ready);
    }

    #[tokio::test]
    async fn test_settled_waits_for_transition() {
        let (publisher, reader) = status_cell();
        let waiter = reader.clone();
        let (state, _) = tokio::join!(waiter.settled(), async {
            tokio::task::yield_now().await;
            publisher.mark_ready();
        });
        assert_eq!(state, ModuleState::Ready);
    }

    #[tokio::test]
    async fn test_settled_returns_current_final_state() {
        let (publisher, reader) = status_cell();
        publisher.mark_ready();
        assert_eq!(reader.settled().await, ModuleState::Ready);
        assert_eq!(reader.settled().await, ModuleState::Ready);
    }

    #[tokio::test]
    async fn test_settled_after_publisher_dropped() {
        let (publisher, reader) = status_cell();
        drop(publisher);
        assert_eq!(reader.settled().await, ModuleState::Failed);
    }
}
