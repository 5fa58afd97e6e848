pub mod use_chain_status;
pub mod use_window_size;
