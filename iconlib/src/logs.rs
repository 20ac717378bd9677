// Thin wrappers over the `log` macros so the crate builds without the
// `log` feature. Disabled, they expand to nothing and their arguments are
// never evaluated.

#[cfg(feature = "log")]
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => (log::info!(target: $target, $($arg)+));

    ($($arg:tt)+) => (log::info!($($arg)+))
}

#[cfg(feature = "log")]
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => (log::debug!(target: $target, $($arg)+));

    ($($arg:tt)+) => (log::debug!($($arg)+))
}

#[cfg(feature = "log")]
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => (log::trace!(target: $target, $($arg)+));

    ($($arg:tt)+) => (log::trace!($($arg)+))
}

#[cfg(not(feature = "log"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {{}};
}

#[cfg(not(feature = "log"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {{}};
}

#[cfg(not(feature = "log"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {{}};
}
