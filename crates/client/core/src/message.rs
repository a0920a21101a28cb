//! Typed view of the host-to-plugin message channel.
//!
//! The host shell broadcasts loosely-typed `{method, args}` envelopes to
//! every embedded panel. Only two methods concern this plugin; everything
//! else on the bus is traffic for someone else and decodes to `None`.
//! Delivery carries no ordering or dedup guarantee, which is fine: handlers
//! only overwrite transient fields.
use hex_core::{Address, TileCoord};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw envelope as delivered by the host shell.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageEnvelope {
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Recognized host messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostMessage {
    /// Host finished bootstrapping and announced the signed-in account.
    Ready { account: Address },
    /// Player interacted with a tile at `(q, r, s)`.
    TileInteraction { tile: TileCoord },
}

impl HostMessage {
    /// Decode an envelope. Unrecognized methods and malformed args yield
    /// `None`, never an error.
    pub fn decode(envelope: &MessageEnvelope) -> Option<Self> {
        match envelope.method.as_str() {
            "ready" => {
                let raw = envelope.args.first()?.as_str()?;
                let account = Address::parse(raw).ok()?;
                Some(Self::Ready { account })
            }
            "tileInteraction" => {
                let mut coords = envelope.args.iter().map(Value::as_i64);
                let q = coords.next()??;
                let r = coords.next()??;
                let s = coords.next()??;
                let tile = TileCoord::new(q as i32, r as i32, s as i32)?;
                Some(Self::TileInteraction { tile })
            }
            other => {
                debug!(method = other, "ignoring unrecognized host message");
                None
            }
        }
    }

    /// Decode straight from a JSON payload.
    pub fn decode_json(payload: &str) -> Option<Self> {
        let envelope: MessageEnvelope = serde_json::from_str(payload).ok()?;
        Self::decode(&envelope)
    }
}
