//! Browser console logging.
//!
//! On wasm32 the macros forward to `console.log` / `console.debug` /
//! `console.warn`. On native targets (unit tests) the message is formatted
//! lazily and discarded.

macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Log, format_args!($($t)*))
    };
}

macro_rules! console_debug {
    ($($t:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Debug, format_args!($($t)*))
    };
}

macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Warn, format_args!($($t)*))
    };
}

#[allow(unused_imports)]
pub(crate) use {console_debug, console_log, console_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Log,
    Debug,
    Warn,
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn emit(level: Level, args: std::fmt::Arguments<'_>) {
    let message = wasm_bindgen::JsValue::from_str(&args.to_string());
    match level {
        Level::Log => web_sys::console::log_1(&message),
        Level::Debug => web_sys::console::debug_1(&message),
        Level::Warn => web_sys::console::warn_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn emit(_level: Level, _args: std::fmt::Arguments<'_>) {}
