//=============================================================================
// File: src/components/transfer_modal.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::input_field::InputField;
use crate::components::modal::ModalHeader;
use crate::components::modal::ModalShell;
use crate::components::pico::Button;
use crate::components::spinner::Spinner;
use crate::hooks::use_window_size::use_window_size;
use crate::modal_context::use_modal_context;
use crate::styles;
use crate::transfer_flow::check_recipient;
use crate::transfer_flow::settle;
use crate::transfer_flow::ServerBackend;
use crate::transfer_flow::TransferDraft;
use crate::AppState;

/// `(asset id, label)` pairs for the asset dropdown.
///
/// Empty ids are skipped. Labels read `#<mint> - <asset id>`.
fn asset_options(asset_ids: &[String], template_mints: &[String]) -> Vec<(String, String)> {
    asset_ids
        .iter()
        .enumerate()
        .filter(|(_, id)| !id.is_empty())
        .map(|(index, id)| {
            let mint = template_mints.get(index).map(String::as_str).unwrap_or_default();
            (id.clone(), format!("#{} - {}", mint, id))
        })
        .collect()
}

/// Marks a submit as in flight. `false` when one already is.
fn claim_submit(in_flight: &mut bool) -> bool {
    !std::mem::replace(in_flight, true)
}

/// Dialog for sending one NFT to another account.
#[component]
pub fn TransferModal(
    asset_ids: Vec<String>,
    template_mints: Vec<String>,
    fetch_page_data: Callback<()>,
) -> Element {
    let app_state = use_context::<AppState>();
    let modal = use_modal_context();
    let window_size = use_window_size();

    let recipient = use_signal(String::new);
    let memo = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_valid = use_signal(|| false);
    let mut asset_id = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let check_if_is_valid = use_callback(move |input: String| {
        let check = check_recipient(&input);
        is_valid.set(check.is_valid);
        check
    });

    let transfer = move |_: MouseEvent| {
        let draft = TransferDraft {
            recipient: recipient(),
            memo: memo(),
            asset_id: asset_id(),
            is_valid: is_valid(),
        };
        if !draft.is_submittable() {
            return;
        }
        // claimed before spawning: clicks queued in the same batch run before the task.
        if !claim_submit(&mut is_submitting.write()) {
            return;
        }
        let sender = app_state.actor.clone();

        spawn(async move {
            let outcome = draft.submit(&ServerBackend, sender.as_deref()).await;
            is_submitting.set(false);

            let shown = settle(outcome, || fetch_page_data.call(()), || modal.close_modal());
            if let Some(message) = shown {
                error.set(Some(message));
            }
        });
    };

    let options = asset_options(&asset_ids, &template_mints);
    let button_class = if window_size().is_mobile {
        "half-button full-width"
    } else {
        "half-button"
    };

    rsx! {
        ModalShell {
            on_close: move |_| modal.close_modal(),
            ModalHeader {
                title: "Transfer NFT",
                on_close: move |_| modal.close_modal(),
            }
            p {
                class: "modal-description",
                style: styles::margin_bottom(None),
                "You can transfer NFTs from your account to another."
            }
            div {
                class: "modal-column",
                if asset_ids.is_empty() {
                    Spinner { size: 30, label: "Loading assets" }
                } else {
                    select {
                        class: "dropdown-menu",
                        name: "Available Assets For Transfer",
                        "aria-label": "Asset to transfer",
                        value: "{asset_id}",
                        onchange: move |evt: FormEvent| asset_id.set(evt.value()),
                        option {
                            key: "blank",
                            value: "",
                            disabled: true,
                            selected: asset_id.read().is_empty(),
                            "- - Select an Asset Number - -"
                        }
                        for (id, label) in options {
                            option {
                                key: "{id}",
                                value: "{id}",
                                "{label}"
                            }
                        }
                    }
                }
                InputField {
                    value: recipient,
                    form_error: error,
                    placeholder: "Receiver name",
                    check_if_is_valid,
                    mb: "16px".to_string(),
                    disabled: is_submitting(),
                }
                InputField {
                    value: memo,
                    form_error: error,
                    placeholder: "Memo",
                    mb: "24px".to_string(),
                    disabled: is_submitting(),
                }
                Button {
                    class: button_class,
                    disabled: !is_valid() || is_submitting(),
                    on_click: transfer,
                    if is_submitting() { "Transferring..." } else { "Transfer" }
                }
                if let Some(message) = error() {
                    span {
                        class: "modal-error",
                        role: "alert",
                        "{message}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal_context::ModalContext;
    use api::prefs::user_prefs::UserPrefs;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn options_skip_blank_ids_and_keep_mint_alignment() {
        let options = asset_options(&strings(&["100", "", "102"]), &strings(&["1", "2", "3"]));
        assert_eq!(
            options,
            vec![
                ("100".to_string(), "#1 - 100".to_string()),
                ("102".to_string(), "#3 - 102".to_string()),
            ]
        );
    }

    #[test]
    fn missing_mint_leaves_label_blank() {
        let options = asset_options(&strings(&["100", "101"]), &strings(&["9"]));
        assert_eq!(options[1].1, "# - 101");
    }

    #[test]
    fn second_claim_in_the_same_batch_is_refused() {
        let mut in_flight = false;

        assert!(claim_submit(&mut in_flight));
        assert!(!claim_submit(&mut in_flight), "second click must not spawn another submit");
        assert!(in_flight);

        // the finished task releases the flag.
        in_flight = false;
        assert!(claim_submit(&mut in_flight));
    }

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        asset_ids: Vec<String>,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        use_context_provider(|| AppState::new(UserPrefs::default(), Some("alice".to_string())));
        let active = use_signal(|| None);
        use_context_provider(|| ModalContext::new(active));
        let fetch_page_data = use_callback(|_: ()| {});
        let template_mints: Vec<String> = props
            .asset_ids
            .iter()
            .enumerate()
            .map(|(i, _)| (i + 1).to_string())
            .collect();

        rsx! {
            TransferModal {
                asset_ids: props.asset_ids.clone(),
                template_mints,
                fetch_page_data,
            }
        }
    }

    fn render(asset_ids: &[&str]) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                asset_ids: strings(asset_ids),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_form_with_transfer_disabled() {
        let html = render(&["100", "101"]);

        assert!(html.contains("Transfer NFT"), "{html}");
        assert!(html.contains("You can transfer NFTs from your account to another."), "{html}");
        assert!(html.contains("- - Select an Asset Number - -"), "{html}");
        assert!(html.contains("#1 - 100"), "{html}");
        assert!(html.contains("#2 - 101"), "{html}");
        assert!(html.contains(r#"placeholder="Receiver name""#), "{html}");
        assert!(html.contains(r#"placeholder="Memo""#), "{html}");
        assert!(html.contains(r#"class="half-button""#), "{html}");
        assert!(!html.contains("modal-error"), "{html}");

        let button = html.find(r#"class="half-button""#).unwrap();
        let button_tag = &html[button..html[button..].find('>').unwrap() + button];
        assert!(button_tag.contains("disabled"), "{button_tag}");
    }

    #[test]
    fn shows_spinner_while_assets_load() {
        let html = render(&[]);
        assert!(html.contains(r#"aria-busy="true""#), "{html}");
        assert!(html.contains("Loading assets"), "{html}");
        assert!(!html.contains("<select"), "{html}");
    }
}
