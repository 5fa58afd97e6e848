// File: src/components/empty_state.rs
use dioxus::prelude::*;

/// Placeholder shown where a list would be, e.g. an account with no NFTs.
#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    #[props(into)]
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                margin: 1rem 0;
            ",

            if let Some(icon) = props.icon {
                div {
                    style: "font-size: 12vmin; line-height: 1; margin-bottom: 1rem; opacity: 0.8;",
                    "{icon}"
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    style: "max-width: 400px; margin: 0 auto 1.5rem auto;",
                    "{desc}"
                }
            }

            if let Some(action) = props.primary_action {
                div { {action} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_primary_action_below_description() {
        fn app() -> Element {
            rsx! {
                EmptyState {
                    title: "No NFTs yet",
                    description: "Nothing here.".to_string(),
                    primary_action: rsx! { button { "Refresh" } },
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let description = html.find("Nothing here.").expect("description rendered");
        let action = html.find("<button>Refresh</button>").expect("action rendered");
        assert!(description < action, "{html}");
    }
}
