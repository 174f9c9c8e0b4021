//! The default-context macros, outside of any harness function.
fn read(flag: bool) -> Result<i64, String> {
    if flag {
        Ok(17)
    } else {
        Err(String::from("unreadable"))
    }
}

fn main() {
    must_assert::no_error!(read(true));
    must_assert::equal!(17, read(true).unwrap_or_default());
    must_assert::equal!(None::<i64>, None::<i64>);
}
