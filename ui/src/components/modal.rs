//=============================================================================
// File: src/components/modal.rs
//=============================================================================
use dioxus::prelude::*;

/// Full-viewport backdrop hosting a dialog box.
///
/// A click that lands on the backdrop itself closes the dialog. Clicks inside
/// the box stop propagating before they reach the backdrop. Escape also closes.
#[component]
pub fn ModalShell(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-background",
            role: "presentation",
            tabindex: "-1",
            // focus this element as soon as it is rendered into the DOM.
            autofocus: true,
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            section {
                class: "modal-box",
                role: "dialog",
                "aria-modal": "true",
                onclick: |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Title row with a close icon.
#[component]
pub fn ModalHeader(title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-section",
            h1 { class: "modal-title", "{title}" }
            a {
                href: "#",
                class: "close modal-close",
                role: "button",
                "aria-label": "Close",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_close.call(());
                },
            }
        }
    }
}
