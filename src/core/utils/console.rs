//! Logging that works in both hosts
//!
//! In the browser messages go to the devtools console through `web_sys`.
//! Natively (tests, tools) they become `tracing` events, so whatever
//! subscriber the host installs decides where they end up.

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Lifecycle / diagnostic message
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::debug!($($arg)*);
        }
    }};
}

/// Something is off but the frame can continue
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::warn!($($arg)*);
        }
    }};
}
