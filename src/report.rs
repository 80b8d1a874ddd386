//! Parse results paired with the warnings raised while producing them.

use std::fmt::Display;

/// A parsed value plus every soft warning emitted on the way.
///
/// Each warning has already been logged at `warn` level when it was recorded;
/// the list exists so callers can inspect which fallback path was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T, W> {
    pub value: T,
    pub warnings: Vec<W>,
}

impl<T, W> Report<T, W> {
    /// Returns `true` if no warning was raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discards the warnings.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Collects warnings during a single parse, logging each as it arrives.
#[derive(Debug)]
pub(crate) struct Warnings<W> {
    list: Vec<W>,
}

impl<W: Display> Warnings<W> {
    pub(crate) fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub(crate) fn push(&mut self, warning: W) {
        log::warn!("{warning}");
        self.list.push(warning);
    }

    pub(crate) fn finish<T>(self, value: T) -> Report<T, W> {
        Report {
            value,
            warnings: self.list,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
