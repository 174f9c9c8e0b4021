//! Fatal test assertions with nil-aware equality.
//!
//! The standard library's test harness is enough, but the same two failure
//! patterns keep getting written by hand: "stop if this produced an error"
//! and "stop if these two values differ". This crate names them once:
//!
//! ```
//! fn parse(s: &str) -> Result<i64, std::num::ParseIntError> {
//!     s.parse()
//! }
//!
//! # fn main() {
//! must_assert::no_error!(parse("17"));
//! must_assert::equal!(parse("17").unwrap(), 17);
//! # }
//! ```
//!
//! Both assertions are fatal to the current test only: on failure they hand
//! a [`Report`] to the [`Context`] and the context halts the test body. On
//! success they are no-ops. There is no failure collection, no retry, and no
//! soft mode.
//!
//! Equality is nil-aware: when both sides are absent references (see the
//! `must-nil` crate), [`equal`] passes without consulting `PartialEq` at
//! all. Two absent references are equal, whatever their type would normally
//! say about comparing its empty states.

#![warn(
    missing_docs,
    unused_crate_dependencies,
    unused_macro_rules,
    variant_size_differences,
    clippy::missing_docs_in_private_items,
    clippy::multiple_inherent_impl,
    clippy::panic,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unreachable,
    clippy::unwrap_used
)]

pub mod context;
pub mod report;

use std::fmt;

use must_nil::Nilness;

pub use crate::context::{trap, Context, Harness, Recorder};
pub use crate::report::Report;


/// Things that may carry a failure: the "error value or absence-of-error
/// sentinel" input of [`no_error`].
///
/// Rust spells the sentinel two ways, so both are accepted:
/// - `Option<E>`: `Some` is the error, `None` the sentinel;
/// - `Result<T, E>`: `Err` is the error, `Ok` the sentinel.
pub trait Fallible {
    /// The failure carried by this value, if any.
    fn failure(&self) -> Option<&dyn fmt::Display>;
}

impl<E: fmt::Display> Fallible for Option<E> {
    fn failure(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().map(|err| err as &dyn fmt::Display)
    }
}

impl<T, E: fmt::Display> Fallible for Result<T, E> {
    fn failure(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().err().map(|err| err as &dyn fmt::Display)
    }
}

/// Halt the current test if `outcome` carries an error.
///
/// No-op otherwise. The failure message contains the error's `Display`
/// text. This operation itself cannot fail: it either reports or does
/// nothing.
#[track_caller]
pub fn no_error<C, F>(ctx: &mut C, outcome: &F)
where
    C: Context + ?Sized,
    F: Fallible + ?Sized,
{
    if let Some(failure) = outcome.failure() {
        ctx.fail_now(Report::UnexpectedError(failure.to_string()));
    }
}

/// Halt the current test if `want` and `got` differ.
///
/// When both sides are nil (absent references, see `must-nil`) the
/// assertion passes without comparing them. Otherwise the type's own
/// `PartialEq` decides. Note that for raw pointers this compares
/// *addresses*, not pointees: two distinct pointers to equal contents
/// differ. Dereference at the call site to compare contents.
#[track_caller]
pub fn equal<C, T>(ctx: &mut C, want: T, got: T)
where
    C: Context + ?Sized,
    T: PartialEq + Nilness + fmt::Debug,
{
    if want.is_nil() && got.is_nil() {
        return;
    }
    if want != got {
        ctx.fail_now(Report::ValuesDiffer {
            want: format!("{want:?}"),
            got: format!("{got:?}"),
        });
    }
}

/// [`no_error`] with the context defaulted to [`Harness`].
///
/// `no_error!(outcome)` fails the current test if `outcome` is `Some(_)` or
/// `Err(_)`; `no_error!(ctx, outcome)` targets an explicit context.
#[macro_export]
macro_rules! no_error {
    ( $outcome:expr ) => {
        $crate::no_error(&mut $crate::Harness, &$outcome)
    };
    ( $ctx:expr, $outcome:expr ) => {
        $crate::no_error($ctx, &$outcome)
    };
}

/// [`equal`] with the context defaulted to [`Harness`].
///
/// `equal!(want, got)` fails the current test if the two sides differ;
/// `equal!(ctx, want, got)` targets an explicit context.
#[macro_export]
macro_rules! equal {
    ( $want:expr, $got:expr ) => {
        $crate::equal(&mut $crate::Harness, $want, $got)
    };
    ( $ctx:expr, $want:expr, $got:expr ) => {
        $crate::equal($ctx, $want, $got)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::fmt;

    /// A unit error with a fixed message, for exercising `no_error`.
    #[derive(Debug)]
    struct DiskFull;

    impl fmt::Display for DiskFull {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "disk full")
        }
    }

    #[test]
    fn no_error_passes_on_absence() {
        assert_eq!(trap(|ctx| no_error(ctx, &None::<DiskFull>)), None);
        assert_eq!(trap(|ctx| no_error(ctx, &Ok::<u8, DiskFull>(3))), None);
    }

    #[test]
    fn no_error_reports_the_error_text() {
        let report = trap(|ctx| no_error(ctx, &Some(DiskFull)));
        assert_eq!(
            report,
            Some(Report::UnexpectedError("disk full".to_owned()))
        );
        let report = trap(|ctx| no_error(ctx, &Err::<u8, DiskFull>(DiskFull)));
        assert!(report.is_some());
    }

    #[test]
    fn equal_passes_on_equal_values() {
        assert_eq!(trap(|ctx| equal(ctx, 5, 5)), None);
        assert_eq!(trap(|ctx| equal(ctx, "five", "five")), None);
    }

    #[test]
    fn equal_reports_both_sides() {
        let report = trap(|ctx| equal(ctx, 5, 6));
        assert_eq!(
            report,
            Some(Report::ValuesDiffer {
                want: "5".to_owned(),
                got: "6".to_owned(),
            })
        );
    }

    #[test]
    fn equal_halts_the_test_body() {
        let mut steps = 0;
        let report = trap(|ctx| {
            steps += 1;
            equal(ctx, 1, 2);
            steps += 1;
        });
        assert!(report.is_some());
        assert_eq!(steps, 1);
    }

    #[test]
    fn both_nil_short_circuits() {
        assert_eq!(trap(|ctx| equal(ctx, None::<i64>, None::<i64>)), None);
        let (a, b): (*const i64, *const i64) = (std::ptr::null(), std::ptr::null());
        assert_eq!(trap(|ctx| equal(ctx, a, b)), None);
    }

    #[test]
    fn one_nil_is_not_equal() {
        let report = trap(|ctx| equal(ctx, Some(5), None));
        assert_eq!(
            report,
            Some(Report::ValuesDiffer {
                want: "Some(5)".to_owned(),
                got: "None".to_owned(),
            })
        );
    }

    #[test]
    fn non_nil_pointers_compare_by_address() {
        // Equal pointees, distinct allocations: `equal` follows the native
        // pointer comparison and reports a difference.
        let px = Box::into_raw(Box::new(5_i64));
        let py = Box::into_raw(Box::new(5_i64));
        assert!(trap(|ctx| equal(ctx, px, py)).is_some());
        assert_eq!(trap(|ctx| equal(ctx, px, px)), None);
        // Dereferencing at the call site is how pointee contents are compared.
        assert_eq!(trap(|ctx| equal(ctx, unsafe { *px }, unsafe { *py })), None);
        unsafe {
            drop(Box::from_raw(px));
            drop(Box::from_raw(py));
        }
    }

    #[test]
    fn references_compare_by_pointee() {
        let (x, y) = (String::from("same"), String::from("same"));
        assert_eq!(trap(|ctx| equal(ctx, &x, &y)), None);
    }

    #[test]
    fn equal_is_reflexive_on_random_values() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let x: i64 = rng.gen();
            assert_eq!(trap(|ctx| equal(ctx, x, x)), None);
        }
    }

    #[test]
    fn macros_reach_the_default_harness() {
        // Passing assertions through the default-context macros are no-ops.
        no_error!(None::<DiskFull>);
        no_error!(Ok::<u8, DiskFull>(7));
        equal!(5, 5);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn failing_macro_panics_through_libtest() {
        equal!(5, 6);
    }

    #[test]
    #[should_panic(expected = "disk full")]
    fn failing_no_error_panics_through_libtest() {
        no_error!(Some(DiskFull));
    }

    #[test]
    fn macros_accept_an_explicit_context() {
        let report = trap(|ctx| equal!(ctx, 5, 6));
        assert!(report.is_some());
        let report = trap(|ctx| no_error!(ctx, Some(DiskFull)));
        assert!(report.is_some());
    }
}
