//! Process-wide installation guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Single-installation guard.
///
/// The process global backs the script-tag bootstrap path; tests inject
/// their own instances so suites stay independent.
#[derive(Debug, Default)]
pub struct Registry {
    claimed: AtomicBool,
}

static GLOBAL: Registry = Registry::new();

impl Registry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            claimed: AtomicBool::new(false),
        }
    }

    /// The process-wide registry used by auto-installation.
    #[must_use]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Claims the slot; `false` when already claimed.
    pub fn try_claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Releases the slot (teardown in embeddings that support it).
    pub fn release(&self) {
        self.claimed.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}
