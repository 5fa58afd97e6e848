use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum ChainConnectionStatus {
    #[default]
    Connected,
    Disconnected(String),
}

/// Tracks whether the chain services are reachable, based on API results.
#[derive(Clone, Copy)]
pub struct ChainStatus {
    status: Signal<ChainConnectionStatus>,
}

impl ChainStatus {
    /// Checks a result by reference without consuming it.
    /// Returns `true` if the result is Ok.
    /// If Err and it looks like a connection problem, marks the chain unreachable.
    pub fn check_result_ref<T, E: std::fmt::Display>(&mut self, result: &Result<T, E>) -> bool {
        match result {
            Ok(_) => {
                self.mark_connected();
                true
            }
            Err(e) => {
                let error_msg = e.to_string();
                dioxus_logger::tracing::warn!("chain API error: {}", error_msg);
                if is_connection_error(&error_msg) {
                    self.status
                        .set(ChainConnectionStatus::Disconnected(error_msg));
                }
                false
            }
        }
    }

    pub fn status(&self) -> Signal<ChainConnectionStatus> {
        self.status
    }

    fn mark_connected(&mut self) {
        if self.status.peek().is_disconnected() {
            self.status.set(ChainConnectionStatus::Connected);
        }
    }
}

pub(crate) fn is_connection_error(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("connection refused")
        || msg.contains("connection reset")
        || msg.contains("network unreachable")
        || msg.contains("failed to connect")
        || msg.contains("error sending request")
        || msg.contains("timed out")
        || msg.contains("responded with 502")
        || msg.contains("responded with 503")
        || msg.contains("responded with 504")
        // Dioxus transport errors
        || msg.contains("error running server function")
        || msg.contains("channel closed")
}

/// Creates the status signal. Call once, near the root.
pub fn use_chain_status_provider() -> ChainStatus {
    let status = use_context_provider(|| Signal::new(ChainConnectionStatus::default()));
    ChainStatus { status }
}

pub fn use_chain_status() -> ChainStatus {
    let status = use_context::<Signal<ChainConnectionStatus>>();
    ChainStatus { status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_transport_failures() {
        assert!(is_connection_error(
            "request to https://proton.greymass.com/v1/chain/get_table_rows failed: error sending request"
        ));
        assert!(is_connection_error("https://x responded with 503 Service Unavailable: "));
        assert!(is_connection_error("Error running server function: Connection refused"));
    }

    #[test]
    fn ignores_application_errors() {
        assert!(!is_connection_error("assertion failure: not owner"));
        assert!(!is_connection_error("https://x responded with 400 Bad Request: bad name"));
    }
}
