//! Compile-and-run battery for the public surface.

/// Generate a run of trybuild test cases.
/// Usage: `compiling!(test_name with expected_outcome in path/to/test/folder)`.
macro_rules! compiling {
    ($fun:ident with $testing:ident in $($dir:ident / )*) => {
        #[test]
        fn $fun() {
            let t = trybuild::TestCases::new();
            t.$testing(concat!("tests/", $( concat!(stringify!($dir), "/") , )* "**/*.rs"));
        }
    };
}

// Pass tests. These should compile and run.
compiling!(pass_surface with pass in pass/);
