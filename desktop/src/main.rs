//! Desktop entry point. Server functions run in-process.
use dioxus::prelude::*;

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("logger init failed: {e}");
    }
    dioxus_logger::tracing::info!(
        network = std::env::var("PROTON_NETWORK").unwrap_or_else(|_| "mainnet".into()),
        "starting nft-transfer desktop"
    );

    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    ui::App()
}
