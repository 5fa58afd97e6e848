use dioxus::prelude::*;

/// Pico's busy indicator, sized in pixels.
#[component]
pub fn Spinner(#[props(default = 30)] size: u32, #[props(into, default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-container",
            span {
                "aria-busy": "true",
                style: "font-size: {size}px; line-height: {size}px;",
                "{label}"
            }
        }
    }
}
