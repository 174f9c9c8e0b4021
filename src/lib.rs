//! Fatal, nil-aware assertion helpers for Rust tests.
//!
//! This facade re-exports the `must` suite:
//! - `must-assert`: the two operations, [`no_error`] and [`equal`], their
//!   call-site macros, and the [`Context`] capability they report through;
//! - `must-nil`: the [`Nilness`] classification that makes [`equal`]
//!   nil-aware;
//! - `must-derive`: `#[derive(NeverNil)]` for enrolling user types.
//!
//! ```
//! fn halve(x: i64) -> Result<i64, String> {
//!     if x % 2 == 0 { Ok(x / 2) } else { Err(format!("{x} is odd")) }
//! }
//!
//! # fn main() {
//! must::no_error!(halve(10));
//! must::equal!(halve(10).unwrap_or_default(), 5);
//! # }
//! ```

#![warn(
    missing_docs,
    unused_crate_dependencies,
    clippy::missing_docs_in_private_items,
    clippy::pedantic
)]

pub use must_assert::{equal, no_error, trap, Context, Fallible, Harness, Recorder, Report};
pub use must_derive::NeverNil;
pub use must_nil::{never_nil, NilKind, Nilness};
