//! Shared components: the modal shell, form controls and the transfer dialog.
pub mod empty_state;
pub mod input_field;
pub mod modal;
pub mod pico;
pub mod spinner;
pub mod transfer_modal;

#[cfg(test)]
pub(crate) mod dom_events;
