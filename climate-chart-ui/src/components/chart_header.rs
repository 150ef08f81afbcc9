use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Short line under the title, e.g. the data source
    #[props(default = String::new())]
    pub note: String,
}

/// Section heading with an optional note.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.note.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.note}"
                }
            }
        }
    }
}
