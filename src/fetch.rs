//! Background-fetch bookkeeping: one slot per REST endpoint.
//!
//! Requests run on short-lived worker threads and report back over an mpsc
//! channel polled once per frame, so the UI thread never blocks on the
//! network.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// State of one endpoint's data: the latest value, the latest error, and
/// the in-flight request if any. Stale data stays visible while a reload
/// is in flight.
pub struct FetchSlot<T> {
    data: Option<T>,
    error: Option<String>,
    loading: bool,
    receiver: Option<Receiver<Result<T, String>>>,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            receiver: None,
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, returning the sender the worker thread reports
    /// into. A previous in-flight request is abandoned (its send fails
    /// harmlessly).
    pub fn begin(&mut self) -> Sender<Result<T, String>> {
        let (tx, rx) = mpsc::channel();
        self.receiver = Some(rx);
        self.loading = true;
        self.error = None;
        tx
    }

    /// Drop the current value and error (used before regenerating the
    /// report so the old one does not linger under the skeleton).
    pub fn reset(&mut self) {
        self.data = None;
        self.error = None;
    }

    /// Check for a delivered result. Returns true when one landed this
    /// call.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.receiver.as_ref() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("worker exited before reporting a result".to_string()))
            }
        };
        let Some(result) = outcome else {
            return false;
        };

        self.receiver = None;
        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_without_request_is_a_noop() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        assert!(!slot.poll());
        assert!(!slot.is_loading());
        assert!(slot.data().is_none());
    }

    #[test]
    fn begin_marks_loading_and_clears_previous_error() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let tx = slot.begin();
        let _ = tx.send(Err("boom".into()));
        assert!(slot.poll());
        assert_eq!(slot.error(), Some("boom"));

        let _tx = slot.begin();
        assert!(slot.is_loading());
        assert!(slot.error().is_none());
    }

    #[test]
    fn delivered_value_lands_and_loading_ends() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let tx = slot.begin();
        assert!(!slot.poll()); // nothing delivered yet
        let _ = tx.send(Ok(42));
        assert!(slot.poll());
        assert_eq!(slot.data(), Some(&42));
        assert!(!slot.is_loading());
    }

    #[test]
    fn error_keeps_stale_data_visible() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let tx = slot.begin();
        let _ = tx.send(Ok(7));
        slot.poll();

        let tx = slot.begin();
        let _ = tx.send(Err("offline".into()));
        slot.poll();
        assert_eq!(slot.data(), Some(&7));
        assert_eq!(slot.error(), Some("offline"));
    }

    #[test]
    fn dead_worker_surfaces_an_error_instead_of_hanging() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let tx = slot.begin();
        drop(tx);
        assert!(slot.poll());
        assert!(!slot.is_loading());
        assert!(slot.error().is_some());
    }
}
