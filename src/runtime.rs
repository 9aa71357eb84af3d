//! Headless message pump
//!
//! Owns the model and executes commands: debounce timers and review
//! requests run on short-lived threads, highlight jobs go to a single
//! long-lived worker that owns the grammar registry. Every side effect
//! reports back as exactly one message on the shared channel.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{Msg, ReviewMsg, SyntaxMsg};
use crate::model::AppModel;
use crate::remote::ReviewBackend;
use crate::syntax::{Highlighter, LanguageId};
use crate::update::update;

struct HighlightJob {
    generation: u64,
    source: String,
    language: LanguageId,
}

pub struct Runtime {
    pub model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    highlight_tx: Sender<HighlightJob>,
    backend: Arc<dyn ReviewBackend>,
    /// Side effects in flight; each one sends back exactly one message
    pending: usize,
}

impl Runtime {
    pub fn new(backend: Arc<dyn ReviewBackend>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let (highlight_tx, highlight_rx) = mpsc::channel::<HighlightJob>();

        // The highlight worker owns the registry and parsers for its
        // whole lifetime (tree-sitter state is not Sync)
        let worker_tx = msg_tx.clone();
        thread::spawn(move || {
            let mut highlighter = Highlighter::new();
            while let Ok(job) = highlight_rx.recv() {
                let markup = highlighter.highlight(&job.source, job.language);
                let msg = Msg::Syntax(SyntaxMsg::HighlightCompleted {
                    generation: job.generation,
                    markup,
                });
                if worker_tx.send(msg).is_err() {
                    break;
                }
            }
        });

        Self {
            model: AppModel::new(),
            msg_tx,
            msg_rx,
            highlight_tx,
            backend,
            pending: 0,
        }
    }

    /// Apply a message to the model and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }

            Cmd::DebouncedHighlight {
                generation,
                delay_ms,
            } => {
                self.pending += 1;
                let tx = self.msg_tx.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::Syntax(SyntaxMsg::HighlightReady { generation }));
                });
            }

            Cmd::RunHighlight {
                generation,
                source,
                language,
            } => {
                self.pending += 1;
                let job = HighlightJob {
                    generation,
                    source,
                    language,
                };
                if self.highlight_tx.send(job).is_err() {
                    // Worker gone; nothing will answer, don't wait for it
                    tracing::error!("Highlight worker is not running");
                    self.pending -= 1;
                }
            }

            Cmd::SubmitReview { code } => {
                self.pending += 1;
                let tx = self.msg_tx.clone();
                let backend = Arc::clone(&self.backend);
                thread::spawn(move || {
                    let result = backend.review_code(&code);
                    let _ = tx.send(Msg::Review(ReviewMsg::Completed(result)));
                });
            }
        }
    }

    /// Wait for one side-effect message and dispatch it. Returns false
    /// when nothing arrived within the timeout.
    pub fn step(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.pending = self.pending.saturating_sub(1);
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    /// Drain side effects until nothing is in flight. Returns false when
    /// the deadline passed with work still outstanding.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending > 0 {
            let now = Instant::now();
            if now >= deadline {
                tracing::warn!("settle timed out with {} side effects in flight", self.pending);
                return false;
            }
            self.step(deadline - now);
        }
        true
    }

    /// Number of side effects currently in flight
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Sender half of the message channel (for external event sources)
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }
}
