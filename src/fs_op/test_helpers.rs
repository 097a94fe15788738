//! Test-only hooks that force failure paths in the move helpers.
//!
//! The hooks only exist when the `test-helpers` feature is enabled; without
//! it they compile to no-ops so production code can call them unconditionally.

#[cfg(feature = "test-helpers")]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "test-helpers")]
use std::sync::{Mutex, MutexGuard, OnceLock};

#[cfg(feature = "test-helpers")]
static FORCE_CROSS_DEVICE: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "test-helpers")]
static FORCE_RENAME_FAIL_IN_COPY: AtomicBool = AtomicBool::new(false);

/// Make every rename in `atomic_rename_or_copy` behave as if source and
/// destination lived on different filesystems.
#[cfg(feature = "test-helpers")]
pub fn set_force_cross_device(v: bool) {
    FORCE_CROSS_DEVICE.store(v, Ordering::SeqCst);
}
#[cfg(feature = "test-helpers")]
pub fn should_force_cross_device() -> bool {
    FORCE_CROSS_DEVICE.load(Ordering::SeqCst)
}

/// Make the final rename of `atomic_copy_file` fail so temp-file cleanup
/// can be observed.
#[cfg(feature = "test-helpers")]
pub fn set_force_rename_fail_in_copy(v: bool) {
    FORCE_RENAME_FAIL_IN_COPY.store(v, Ordering::SeqCst);
}
#[cfg(feature = "test-helpers")]
pub fn should_force_rename_fail_in_copy() -> bool {
    FORCE_RENAME_FAIL_IN_COPY.load(Ordering::SeqCst)
}

/// Serialize tests that flip the global hooks.
#[cfg(feature = "test-helpers")]
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    static TEST_HOOK_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    TEST_HOOK_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

// No-op fallbacks when the feature is not active.
#[cfg(not(feature = "test-helpers"))]
pub fn should_force_cross_device() -> bool {
    false
}
#[cfg(not(feature = "test-helpers"))]
pub fn should_force_rename_fail_in_copy() -> bool {
    false
}
