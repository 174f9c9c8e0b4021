//! The test-context capability.
//!
//! An assertion does not fail a test by itself: it hands a [`Report`] to a
//! [`Context`], and the context is what records the failure and halts the
//! current test body. Two contexts are provided:
//! - [`Harness`] delivers the report to libtest by panicking, which is the
//!   host framework's fatal-failure mechanism;
//! - [`Recorder`] captures the report instead, so that the assertions
//!   themselves (and any wrapper built on them) can be tested without
//!   failing the enclosing test. See [`trap`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use crate::report::Report;

/// The capability consumed from the host test framework: record one failure
/// and stop the current test body, nothing else.
///
/// `fail_now` never returns; the halt is scoped to the calling test. A
/// context must not share process-wide state, so that tests running
/// concurrently stay isolated.
pub trait Context {
    /// Record `report` as a test failure and halt the current test.
    fn fail_now(&mut self, report: Report) -> !;
}

/// The libtest-backed context. This is the one to use inside `#[test]`
/// functions; the report becomes the panic message that libtest prints for
/// the failed test.
#[derive(Debug, Clone, Copy, Default)]
pub struct Harness;

impl Context for Harness {
    #[track_caller]
    #[expect(clippy::panic, reason = "unwinding is libtest's fatal-failure primitive")]
    fn fail_now(&mut self, report: Report) -> ! {
        panic!("{report}");
    }
}

/// Unwind payload used by [`Recorder`] so that [`trap`] can tell a halted
/// assertion apart from an unrelated panic.
struct Halt;

/// A context that captures the report instead of printing it.
///
/// `fail_now` still halts the caller (by unwinding with a private sentinel),
/// so the contract is the same as [`Harness`]; only the delivery differs.
/// Use through [`trap`], which installs the catch point.
#[derive(Debug, Default)]
pub struct Recorder {
    /// The report of the halted assertion, if any. Shared with [`trap`]
    /// because the unwind consumes the `Recorder` itself.
    seen: Arc<Mutex<Option<Report>>>,
}

impl Context for Recorder {
    fn fail_now(&mut self, report: Report) -> ! {
        *self
            .seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(report);
        panic::resume_unwind(Box::new(Halt));
    }
}

/// Run `body` against a fresh [`Recorder`] and return the report of the
/// assertion that halted it, or `None` if every assertion passed.
///
/// # Panics
///
/// Panics that do not come from the recorder (a plain `panic!` inside
/// `body`, an `assert!`, an out-of-bounds index) are resumed untouched.
pub fn trap<F>(body: F) -> Option<Report>
where
    F: FnOnce(&mut Recorder),
{
    let mut ctx = Recorder::default();
    let seen = Arc::clone(&ctx.seen);
    match panic::catch_unwind(AssertUnwindSafe(move || body(&mut ctx))) {
        Ok(()) => None,
        Err(payload) if payload.is::<Halt>() => {
            seen.lock().unwrap_or_else(PoisonError::into_inner).take()
        }
        Err(payload) => panic::resume_unwind(payload),
    }
}
