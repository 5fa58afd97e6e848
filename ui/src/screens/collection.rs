//=============================================================================
// File: src/screens/collection.rs
//=============================================================================
use api::assets::group_by_template;
use api::assets::TemplateHolding;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::hooks::use_chain_status::use_chain_status;
use crate::hooks::use_chain_status::ChainConnectionStatus;
use crate::modal_context::use_modal_context;
use crate::modal_context::ModalKind;
use crate::modal_context::TransferNftModalProps;
use crate::AppState;

#[component]
fn HoldingCard(holding: TemplateHolding, on_transfer: EventHandler<TemplateHolding>) -> Element {
    let title = if holding.name.is_empty() {
        "Untitled".to_string()
    } else {
        holding.name.clone()
    };
    let template = holding.template_id.clone().unwrap_or_else(|| "-".to_string());
    let count = holding.len();

    rsx! {
        Card {
            header {
                h5 { style: "margin-bottom: 0;", "{title}" }
                small { "{holding.collection_name} · template {template}" }
            }
            p { "{count} owned" }
            footer {
                Button {
                    on_click: move |_| on_transfer.call(holding.clone()),
                    "Transfer"
                }
            }
        }
    }
}

/// The signed-in account's NFTs, one card per template.
#[component]
pub fn CollectionScreen() -> Element {
    let app_state = use_context::<AppState>();
    let modal = use_modal_context();
    let mut chain_status = use_chain_status();

    let owner = app_state.actor.clone();
    let mut assets = use_resource(move || {
        let owner = owner.clone();
        async move {
            let Some(owner) = owner else {
                return Ok(None);
            };
            let result = api::owned_assets(owner).await;
            chain_status.check_result_ref(&result);
            result.map(|list| Some(group_by_template(list)))
        }
    });

    let fetch_page_data = use_callback(move |_: ()| assets.restart());

    let open_transfer = move |holding: TemplateHolding| {
        modal.open_modal(ModalKind::TransferNft(TransferNftModalProps {
            asset_ids: holding.asset_ids,
            template_mints: holding.template_mints,
            fetch_page_data,
        }));
    };

    let offline = match &*chain_status.status().read() {
        ChainConnectionStatus::Disconnected(msg) => Some(msg.clone()),
        _ => None,
    };

    rsx! {
        if let Some(msg) = offline {
            p {
                role: "alert",
                style: "color: var(--pico-del-color);",
                "Chain API unreachable: {msg}"
            }
        }
        match &*assets.read() {
            None => rsx! {
                Card {
                    h3 { "Collection" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load assets: {e}" }
                    button { onclick: move |_| assets.restart(), "Retry" }
                }
            },
            Some(Ok(None)) => rsx! {
                EmptyState {
                    title: "No wallet session",
                    description: "Set PROTON_ACTOR to the account whose NFTs you want to manage.".to_string(),
                    icon: "🔒".to_string(),
                }
            },
            Some(Ok(Some(holdings))) if holdings.is_empty() => rsx! {
                EmptyState {
                    title: "No NFTs yet",
                    description: "Assets sent to this account will show up here.".to_string(),
                    icon: "🖼".to_string(),
                    primary_action: rsx! {
                        Button {
                            on_click: move |_| assets.restart(),
                            "Refresh"
                        }
                    },
                }
            },
            Some(Ok(Some(holdings))) => rsx! {
                Grid {
                    {
                        holdings.iter().cloned().map(|holding| {
                            let key = holding.asset_ids.first().cloned().unwrap_or_default();
                            rsx! {
                                HoldingCard {
                                    key: "{key}",
                                    holding,
                                    on_transfer: open_transfer,
                                }
                            }
                        })
                    }
                }
            },
        }
    }
}
