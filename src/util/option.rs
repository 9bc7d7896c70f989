use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Behaves like [`Option::unwrap`], with [`unreachable!`] in the [`None`] branch for debug
    /// builds and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Invoking this method states that [`None`] is impossible at the call site, which is why no
    /// panics annotation is carried: the debug panic only fires when that statement is wrong.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that None is impossible when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
