//! Browser utilities shared by the shell and the screen components.
//!
//! - **User feedback**: transient toasts for non-blocking notices, and the
//!   blocking `alert` / `confirm` dialogs used for configuration errors and
//!   delete confirmation.
//! - **Session storage**: reading the bearer token saved by the login page.
//! - **Formatting**: thousands-separated weights for the tickets table.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Key under which the login page stores the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Displays a temporary notification message at the bottom of the screen.
///
/// A styled `div` is appended to `<body>` and removes itself after three
/// seconds. Used to confirm saves and deletions.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "20000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Blocking yes/no question; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Bearer token saved by the login page, if any.
pub fn stored_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// `12500.5` -> `"12,500.50 kg"`; non-numeric input is returned untouched.
pub fn format_kg(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            let cents = (value * 100.0).round() as i64;
            format!(
                "{}.{:02} kg",
                (cents / 100).to_formatted_string(&Locale::en),
                cents % 100
            )
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_get_thousands_separators() {
        assert_eq!(format_kg("12500.5"), "12,500.50 kg");
        assert_eq!(format_kg("980"), "980.00 kg");
        assert_eq!(format_kg("—"), "—");
    }
}
