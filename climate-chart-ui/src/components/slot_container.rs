//! Container for one output slot.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SlotContainerProps {
    /// Output slot id, also the DOM id D3 renders into
    pub slot: String,
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels; tables leave it at 0
    #[props(default = 0)]
    pub min_height: u32,
    /// Controls rendered above the slot
    pub children: Element,
}

/// A section holding the slot's controls and the div D3 draws into.
#[component]
pub fn SlotContainer(props: SlotContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin-bottom: 24px;",
        props.min_height
    );

    rsx! {
        section {
            style: "{style}",
            {props.children}
            if props.loading {
                div {
                    style: "color: #666;",
                    "Rendering {props.slot}..."
                }
            }
            div {
                id: "{props.slot}",
                style: "width: 100%;",
            }
        }
    }
}
