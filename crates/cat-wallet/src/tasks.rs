//! Background fetches. Work runs on a worker thread; results land in an
//! inbox the UI thread drains on its next frame.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use eframe::egui;

/// Acquire mutex lock, recovering from poisoned state if necessary.
macro_rules! lock_or_recover {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("task inbox mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    };
}

#[derive(Debug)]
pub struct Inbox<T> {
    results: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for Inbox<T> {
    fn default() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Send + 'static> Inbox<T> {
    /// Run `job` off the UI thread and wake the UI when it finishes.
    pub fn spawn(
        &self,
        ctx: &egui::Context,
        job: impl FnOnce() -> T + Send + 'static,
    ) -> JoinHandle<()> {
        let results = Arc::clone(&self.results);
        let ctx = ctx.clone();
        thread::spawn(move || {
            let value = job();
            lock_or_recover!(results).push(value);
            ctx.request_repaint();
        })
    }

    /// Results in completion order.
    pub fn drain(&self) -> Vec<T> {
        std::mem::take(&mut *lock_or_recover!(self.results))
    }
}
