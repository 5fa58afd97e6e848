// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod hooks;
pub mod modal_context;
mod screens;
pub mod styles;
pub mod transfer_flow;

use app_state::AppState;
use components::pico::Container;
use components::transfer_modal::TransferModal;
use hooks::use_chain_status::use_chain_status_provider;
use modal_context::ModalContext;
use modal_context::ModalKind;
use screens::collection::CollectionScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.violet.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let frame_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100%;
        padding: 10px;
        background-color: var(--pico-background-color);
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-main-container .content {
        padding: 0 1rem;
    }
"#;
    let theme_css = styles::theme_css();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style { "{theme_css}" }
        style { "{frame_css}" }
        style { "{styles::MODAL_CSS}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        let (prefs_result, session_result) = tokio::join!(api::get_user_prefs(), api::session());

        let prefs = prefs_result?;
        let actor = session_result?;

        dioxus_logger::tracing::info!("prefs: {:#?}, actor: {:?}", prefs, actor);

        Ok::<_, api::ApiError>((prefs, actor))
    })?;

    let body = match &*initial_data_future.read() {
        Some(Ok((prefs, actor))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(prefs.clone(), actor.clone()),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Renders whichever modal is open.
#[component]
fn ModalHost() -> Element {
    let modal = use_context::<ModalContext>();

    match modal.active() {
        Some(ModalKind::TransferNft(props)) => rsx! {
            TransferModal {
                asset_ids: props.asset_ids,
                template_mints: props.template_mints,
                fetch_page_data: props.fetch_page_data,
            }
        },
        None => rsx! {},
    }
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    let actor = app_state.current_actor().map(str::to_string);
    let network: &'static str = app_state.prefs.endpoints().network.into();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let active_modal = use_signal(|| None::<ModalKind>);
    use_context_provider(|| ModalContext::new(active_modal));
    use_chain_status_provider();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "NFT Collection"
                                }
                            }
                        }
                        ul {
                            li { small { "{network}" } }
                            li {
                                match actor {
                                    Some(actor) => rsx! { code { "{actor}" } },
                                    None => rsx! { small { "not signed in" } },
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    CollectionScreen {}
                }
            }
            ModalHost {}
        }
    }
}
