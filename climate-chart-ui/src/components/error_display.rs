//! Error banner bound to `AppState::error_msg`.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the current error, if any, with a button that clears it.
#[component]
pub fn ErrorDisplay() -> Element {
    let mut state = use_context::<AppState>();
    let Some(message) = state.error_msg.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; justify-content: space-between;",
            span {
                strong { "Error: " }
                "{message}"
            }
            button {
                style: "border: none; background: none; color: #C62828; cursor: pointer;",
                onclick: move |_| state.error_msg.set(None),
                "dismiss"
            }
        }
    }
}
