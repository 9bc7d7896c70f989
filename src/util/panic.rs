/// Asserts that evaluating the given block panics, catching the unwind so the test continues.
/// An optional second argument replaces the default failure message.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "The block was expected to panic but completed.")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("(the panic above was expected)");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
