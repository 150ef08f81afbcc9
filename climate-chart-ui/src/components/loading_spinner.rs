use dioxus::prelude::*;

/// Placeholder shown while the datasets are parsed and aggregated.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading climate data...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{label}"
        }
    }
}
