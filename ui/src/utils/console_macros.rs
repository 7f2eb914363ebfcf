/// Browser console logging macros.
///
/// Every line is prefixed with a `js_sys::Date::now()` timestamp and formatted
/// on the Rust side before it reaches `gloo_console`, so arguments never cross
/// the JS boundary as raw values.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($t:tt)*) => { $crate::__console_emit!(info, $($t)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => { $crate::__console_emit!(warn, $($t)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($t:tt)*) => { $crate::__console_emit!(debug, $($t)*) };
}
