use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use log::error;

/// Last-resort containment for panics raised while building the view.
///
/// Once tripped it stays tripped: every later render returns the fallback
/// until the application is restarted.
///
/// Only the construction of the element tree runs inside the guard. Panics
/// raised later by iced while laying out or drawing those elements are not
/// caught here.
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    has_error: Cell<bool>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.has_error.get()
    }

    pub fn guard<T>(&self, render: impl FnOnce() -> T, fallback: impl FnOnce() -> T) -> T {
        if self.has_error.get() {
            return fallback();
        }
        match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(rendered) => rendered,
            Err(payload) => {
                error!("ErrorBoundary caught an error: {}", panic_message(payload.as_ref()));
                self.has_error.set(true);
                fallback()
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
