//! Mock UI for unit tests.

use std::sync::{Arc, Mutex};

use super::output::OutputMode;
use super::{SpinnerHandle, UserInterface};

/// Records every UI interaction for later assertions.
#[derive(Default)]
pub struct MockUI {
    pub messages: Vec<String>,
    pub successes: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub headers: Vec<String>,
    pub spinners: Vec<String>,
    spinner_results: Arc<Mutex<Vec<String>>>,
}

impl MockUI {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished spinner messages ("ok: ..." / "err: ...") in order.
    pub fn spinner_results(&self) -> Vec<String> {
        self.spinner_results.lock().unwrap().clone()
    }

    /// All recorded output concatenated, for substring assertions.
    pub fn transcript(&self) -> String {
        let mut all = Vec::new();
        all.extend(self.headers.iter().cloned());
        all.extend(self.messages.iter().cloned());
        all.extend(self.successes.iter().cloned());
        all.extend(self.warnings.iter().cloned());
        all.extend(self.errors.iter().cloned());
        all.join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            results: Arc::clone(&self.spinner_results),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that records its terminal state into the owning [`MockUI`].
pub struct MockSpinner {
    results: Arc<Mutex<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.results.lock().unwrap().push(format!("ok: {msg}"));
    }

    fn finish_error(&mut self, msg: &str) {
        self.results.lock().unwrap().push(format!("err: {msg}"));
    }
}
