//! Failure reports handed to the test context.

use std::fmt;

/// What went wrong, in the two shapes an assertion can fail.
///
/// A report is plain data; rendering happens in the [`Display`] impl and the
/// delivery is the context's job. Nothing here is recoverable: once a report
/// exists, the current test is over.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// An error value was present where none was expected.
    /// Carries the error's `Display` text.
    UnexpectedError(String),
    /// Two values that should have been equal were not.
    /// Both sides are pre-rendered with `Debug`.
    ValuesDiffer {
        /// The expected value.
        want: String,
        /// The value actually produced.
        got: String,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnexpectedError(err) => write!(f, "unexpected error:\n{err}"),
            Self::ValuesDiffer { want, got } => {
                write!(f, "values differ:\nwant: {want}\n got: {got}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_error_keeps_the_message() {
        let r = Report::UnexpectedError("disk full".to_owned());
        assert!(r.to_string().contains("disk full"));
    }

    #[test]
    fn values_differ_shows_both_sides() {
        let r = Report::ValuesDiffer {
            want: "5".to_owned(),
            got: "6".to_owned(),
        };
        let shown = r.to_string();
        assert!(shown.contains("want: 5"));
        assert!(shown.contains("got: 6"));
    }
}
