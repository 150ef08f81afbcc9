//! Download action for the monthly aggregate table.

use crate::{js_bridge, state::AppState};
use dioxus::prelude::*;

/// Button that saves the monthly table as CSV. The payload was serialized
/// when the data loaded, so a click never recomputes anything.
#[component]
pub fn DownloadButton() -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_: Event<MouseData>| {
        let Some((registry, _)) = state.active() else {
            return;
        };
        let download = registry.data().download();
        log::info!("downloading {} ({} bytes)", download.filename, download.content.len());
        if let Err(e) = js_bridge::download_file(download) {
            log::error!("download failed: {:?}", e);
            state
                .error_msg
                .set(Some(format!("Could not download {}", download.filename)));
        }
    };

    rsx! {
        button {
            style: "margin: 8px 0; padding: 6px 12px; cursor: pointer;",
            onclick: on_click,
            "Download CSV"
        }
    }
}
