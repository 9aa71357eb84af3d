//! Shared test helpers
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use critique::remote::{ReviewBackend, ReviewError};
use critique::runtime::Runtime;

/// Scripted review backend: pops pre-loaded responses and counts calls
pub struct MockBackend {
    responses: Mutex<Vec<Result<String, ReviewError>>>,
    calls: AtomicUsize,
    /// Simulated latency per call
    pub delay: Duration,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    /// Queue a response (served in push order)
    pub fn push_response(&self, response: Result<String, ReviewError>) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReviewBackend for MockBackend {
    fn review_code(&self, _code: &str) -> Result<String, ReviewError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("Looks fine.".to_string())
        } else {
            responses.remove(0)
        }
    }
}

/// Runtime wired to a shared mock backend
pub fn test_runtime() -> (Runtime, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::new());
    let runtime = Runtime::new(backend.clone());
    (runtime, backend)
}

/// Settle timeout long enough for debounce plus worker round trips
pub const SETTLE: Duration = Duration::from_secs(10);
