//! Browser entry point for the NFT collection app.
use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("logger init failed: {e}");
    }
    dioxus_logger::tracing::info!("starting nft-transfer web client");

    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    ui::App()
}
