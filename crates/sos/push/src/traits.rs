//! Push delivery traits.

use sos_core::{MulticastMessage, MulticastResponse};

/// Push-delivery provider that fans one message out to many tokens.
#[trait_variant::make(Send)]
pub trait MulticastSender: Send + Sync {
    /// Send one message to every token in it.
    ///
    /// Returns per-token outcomes (or aggregate counts), or fails as a whole.
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
    ) -> color_eyre::eyre::Result<MulticastResponse>;
}
