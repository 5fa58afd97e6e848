use dioxus::prelude::*;

use crate::styles;
use crate::transfer_flow::FieldCheck;

/// A text input bound to `value` with optional validation.
///
/// On every change the new text is written to `value`. When
/// `check_if_is_valid` is given it runs on the raw text and its verdict is
/// forwarded to `form_error`: the message when invalid, cleared when valid.
#[component]
pub fn InputField(
    mut value: Signal<String>,
    mut form_error: Signal<Option<String>>,
    #[props(into)] placeholder: String,
    #[props(optional)] check_if_is_valid: Option<Callback<String, FieldCheck>>,
    #[props(optional)] mb: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    // None until the first keystroke so an untouched field is not flagged.
    let mut last_check = use_signal(|| None::<bool>);

    let aria_invalid = last_check().map(|ok| if ok { "false" } else { "true" });

    rsx! {
        div {
            class: "input-field",
            style: styles::margin_bottom(mb.as_deref()),
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                "aria-label": "{placeholder}",
                "aria-invalid": aria_invalid,
                disabled,
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let text = evt.value();
                    if let Some(check) = check_if_is_valid {
                        let FieldCheck { is_valid, error_message } = check.call(text.clone());
                        last_check.set(Some(is_valid));
                        form_error.set(if is_valid { None } else { Some(error_message) });
                    }
                    value.set(text);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dom_events;
    use crate::transfer_flow::check_recipient;
    use crate::transfer_flow::INVALID_USER;

    #[test]
    fn renders_bound_value_and_spacing() {
        fn app() -> Element {
            let value = use_signal(|| "alice".to_string());
            let form_error = use_signal(|| None::<String>);
            rsx! {
                InputField {
                    value,
                    form_error,
                    placeholder: "Receiver name",
                    mb: "16px".to_string(),
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"style="margin-bottom: 16px;""#), "{html}");
        assert!(html.contains(r#"placeholder="Receiver name""#), "{html}");
        assert!(html.contains(r#"value="alice""#), "{html}");
    }

    #[test]
    fn keystrokes_run_the_check_and_forward_its_verdict() {
        fn app() -> Element {
            let value = use_signal(String::new);
            let form_error = use_signal(|| Some(INVALID_USER.to_string()));
            let mut is_valid = use_signal(|| false);
            let mut checks = use_signal(|| 0u32);

            let check_if_is_valid = use_callback(move |input: String| {
                *checks.write() += 1;
                let check = check_recipient(&input);
                is_valid.set(check.is_valid);
                check
            });
            let shown = form_error().unwrap_or_else(|| "none".to_string());

            rsx! {
                InputField {
                    value,
                    form_error,
                    placeholder: "Receiver name",
                    check_if_is_valid,
                }
                p { "valid={is_valid} checks={checks} error={shown}" }
            }
        }

        let mut dom = VirtualDom::new(app);
        let inputs = dom_events::rebuild_listening(&mut dom, "input");
        let field = inputs[0];

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Invalid user. Please try again."), "{html}");
        assert!(!html.contains("aria-invalid"), "{html}");

        // a valid keystroke clears the earlier lookup error.
        dom_events::type_text(&mut dom, field, "alice");
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("valid=true checks=1 error=none"), "{html}");
        assert!(html.contains(r#"aria-invalid="false""#), "{html}");
        assert!(html.contains(r#"value="alice""#), "{html}");

        dom_events::type_text(&mut dom, field, "bob");
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("valid=false checks=2 error=Recipient"), "{html}");
        assert!(html.contains("must be 4-12 characters"), "{html}");
        assert!(html.contains(r#"aria-invalid="true""#), "{html}");

        dom_events::type_text(&mut dom, field, "alice");
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("valid=true checks=3 error=none"), "{html}");
        assert!(html.contains(r#"aria-invalid="false""#), "{html}");
    }
}
