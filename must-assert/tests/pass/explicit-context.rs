//! Driving the assertions through an explicit recording context.
use must_assert::{equal, no_error, trap};

fn main() {
    let quiet = trap(|ctx| {
        no_error(ctx, &None::<String>);
        equal(ctx, 4, 2 + 2);
    });
    assert!(quiet.is_none());

    let caught = trap(|ctx| equal(ctx, 4, 5));
    assert!(caught.is_some());
}
