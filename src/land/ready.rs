use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct ReadyState {
    ready: bool,
    subscribers: Vec<Sender<bool>>,
}

/// One-shot `false -> true` readiness flag with subscribers.
///
/// Cloning shares the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct ReadySignal {
    state: Arc<Mutex<ReadyState>>,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ReadyState> {
        // The state is a bool and a list of senders; a poisoned lock is still consistent
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_ready(&self) -> bool {
        self.lock().ready
    }

    /// Receive the current value now and, if not yet ready, exactly one
    /// `true` when the transition happens.
    pub fn subscribe(&self) -> Receiver<bool> {
        let (tx, rx) = mpsc::channel();
        let mut state = self.lock();
        // The receiver is still alive here, so sending cannot fail
        let _ = tx.send(state.ready);
        if !state.ready {
            state.subscribers.push(tx);
        }
        rx
    }

    /// Flip to ready. Returns `false` if the signal had already fired.
    pub fn mark_ready(&self) -> bool {
        let mut state = self.lock();
        if state.ready {
            return false;
        }
        state.ready = true;
        for subscriber in state.subscribers.drain(..) {
            // Dropped receivers are fine to skip
            let _ = subscriber.send(true);
        }
        true
    }
}
