//! Thread affinity checks.
//!
//! A button is driven exclusively from the host's input-and-render loop and
//! holds no locks. [`ThreadAffinity`] records the thread a widget was created on
//! so that accidental cross-thread use is caught in debug builds.
//!
//! ```
//! use tapnode_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn bump(&self) {
//!         self.affinity.debug_assert_same_thread();
//!         self.value.set(self.value.get() + 1);
//!     }
//! }
//!
//! let counter = Counter {
//!     affinity: ThreadAffinity::current(),
//!     value: std::cell::Cell::new(0),
//! };
//! counter.bump();
//! assert_eq!(counter.value.get(), 1);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::ThreadId;

/// Flag to enable/disable runtime thread checks globally.
static THREAD_CHECKS_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Enable or disable runtime thread checks.
///
/// Checks default to on in debug builds and off in release builds.
pub fn set_thread_checks_enabled(enabled: bool) {
    THREAD_CHECKS_ENABLED.store(enabled, Ordering::SeqCst);
}

/// Check if runtime thread checks are currently enabled.
#[inline]
pub fn are_thread_checks_enabled() -> bool {
    THREAD_CHECKS_ENABLED.load(Ordering::Relaxed)
}

/// Records the thread an object was created on.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create an affinity bound to the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Assert that we are on the bound thread.
    ///
    /// Always runs, regardless of build profile.
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg("widget accessed from wrong thread")
    }

    /// Assert that we are on the bound thread, with a custom message.
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            self.panic_wrong_thread(msg);
        }
    }

    /// Assert that we are on the bound thread when checks are enabled.
    ///
    /// A no-op in release builds unless [`set_thread_checks_enabled`] turned
    /// checks on.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        if are_thread_checks_enabled() {
            self.assert_same_thread();
        }
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(&self, msg: &str) -> ! {
        let current = std::thread::current();
        let current_name = current.name().unwrap_or("<unnamed>");
        let current_id = current.id();

        panic!(
            "thread affinity violation: {msg}\n\
             widget was created on thread {:?}, \
             accessed from \"{current_name}\" ({current_id:?}).\n\
             Widgets must be driven from the host's input-and-render thread.",
            self.thread_id
        )
    }
}
