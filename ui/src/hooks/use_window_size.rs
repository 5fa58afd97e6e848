//=============================================================================
// File: src/hooks/use_window_size.rs
//=============================================================================

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(feature = "dioxus-desktop")]
pub use self::desktop::*;

// Servers and anything else render at a fixed desktop width.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
pub use self::fallback::*;

use crate::styles::MOBILE_BREAKPOINT_PX;

/// Width assumed until the platform reports one.
pub const DEFAULT_WIDTH_PX: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub is_mobile: bool,
}

impl WindowSize {
    pub fn from_width(width: u32) -> Self {
        Self {
            width,
            is_mobile: width < MOBILE_BREAKPOINT_PX,
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::from_width(DEFAULT_WIDTH_PX)
    }
}

/// # Desktop Implementation
/// Asks the webview for its width through `evaluate_script_with_return`.
#[cfg(feature = "dioxus-desktop")]
mod desktop {
    use super::WindowSize;
    use dioxus::prelude::*;
    use dioxus_desktop::use_window;
    use serde_json::Value;

    pub fn use_window_size() -> Signal<WindowSize> {
        let mut size = use_signal(WindowSize::default);
        let window = use_window();

        use_effect(move || {
            let window = window.clone();
            spawn(async move {
                let js_code = "return window.innerWidth;";
                if let Ok(Ok(Value::Number(width))) =
                    window.webview.evaluate_script_with_return(js_code).await
                {
                    if let Some(width) = width.as_u64() {
                        size.set(WindowSize::from_width(width as u32));
                    }
                }
            });
        });

        size
    }
}

/// # WebAssembly (WASM) Implementation
/// Reads `window.innerWidth` through `web_sys`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::WindowSize;
    use dioxus::prelude::*;

    pub fn use_window_size() -> Signal<WindowSize> {
        let mut size = use_signal(WindowSize::default);

        use_effect(move || {
            let width = web_sys::window()
                .and_then(|window| window.inner_width().ok())
                .and_then(|width| width.as_f64());
            if let Some(width) = width {
                size.set(WindowSize::from_width(width as u32));
            }
        });

        size
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "dioxus-desktop")))]
mod fallback {
    use super::WindowSize;
    use dioxus::prelude::*;

    pub fn use_window_size() -> Signal<WindowSize> {
        use_signal(WindowSize::default)
    }
}
