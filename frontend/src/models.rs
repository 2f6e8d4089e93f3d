//! In-memory proxy used by `--features mock` builds.

use std::cell::RefCell;

use proxy_console_shared::mock_store::MockBackend;

thread_local! {
    static BACKEND: RefCell<MockBackend> = RefCell::new(MockBackend::seeded());
}

/// Run `f` against the mock proxy.
pub fn with_backend<R>(f: impl FnOnce(&mut MockBackend) -> R) -> R {
    BACKEND.with(|backend| f(&mut backend.borrow_mut()))
}
