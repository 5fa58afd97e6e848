//! Which modal is open, provided as a Dioxus context.

use dioxus::prelude::*;

/// What the caller hands the transfer dialog.
#[derive(Clone, PartialEq)]
pub struct TransferNftModalProps {
    /// Assets the caller may transfer. Empty while still loading.
    pub asset_ids: Vec<String>,
    /// Mint number labels, index-aligned with `asset_ids`.
    pub template_mints: Vec<String>,
    /// Reloads the caller's data after a completed transfer.
    pub fetch_page_data: Callback<()>,
}

#[derive(Clone, PartialEq)]
pub enum ModalKind {
    TransferNft(TransferNftModalProps),
}

/// Reactive handle to the open modal. At most one modal is open at a time.
#[derive(Clone, Copy)]
pub struct ModalContext {
    active: Signal<Option<ModalKind>>,
}

impl ModalContext {
    pub fn new(active: Signal<Option<ModalKind>>) -> Self {
        Self { active }
    }

    pub fn open_modal(&self, kind: ModalKind) {
        let mut active = self.active;
        active.set(Some(kind));
    }

    pub fn close_modal(&self) {
        let mut active = self.active;
        if active.peek().is_some() {
            active.set(None);
        }
    }

    /// Subscribes the caller to changes of the open modal.
    pub fn active(&self) -> Option<ModalKind> {
        self.active.read().clone()
    }
}

pub fn use_modal_context() -> ModalContext {
    use_context::<ModalContext>()
}
