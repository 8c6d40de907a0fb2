//! Feature-gated logging helpers.
//!
//! With the `tracing` feature enabled these forward to the matching `tracing`
//! macro. Without it they expand to an empty block and their arguments are
//! never evaluated.

macro_rules! walk_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    }};
}

macro_rules! walk_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    }};
}
