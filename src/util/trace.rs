/// Forwards to [`tracing::trace!`] when the `tracing` feature is enabled and expands to nothing
/// otherwise, so call sites don't need their own `cfg` attributes.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

pub(crate) use trace;
