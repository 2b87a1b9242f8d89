//! Decode oracle adapter
//!
//! Maps a decode result onto the JSON shape the differential fuzz driver
//! compares across implementations:
//!
//! ```text
//! {"success": true,  "data": {...}}
//! {"success": false, "error": "...", "kind": "InvalidDecimals"}
//! ```
//!
//! Byte fields (ticker, name, uri, hash) are uppercase hex. Quantities are
//! decimal strings so values above 2^53 survive JSON consumers that parse
//! numbers as doubles.

pub mod server;

use crate::slp::{self, SlpBody, SlpError, SlpMessage, SlpResult};
use serde::Serialize;
use tracing::debug;

/// Failure kind reported when the request path is not valid hex
pub const INVALID_HEX_KIND: &str = "InvalidHex";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisData {
    pub token_type: u16,
    pub transaction_type: &'static str,
    pub symbol: String,
    pub name: String,
    pub document_uri: String,
    pub document_sha256: String,
    pub decimals: u8,
    /// Serialised as `null` when the genesis creates no baton
    pub baton_vout: Option<u8>,
    pub genesis_or_mint_quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintData {
    pub token_type: u16,
    pub transaction_type: &'static str,
    pub token_id_hex: String,
    pub baton_vout: Option<u8>,
    pub contains_baton: bool,
    pub genesis_or_mint_quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendData {
    pub token_type: u16,
    pub transaction_type: &'static str,
    pub token_id_hex: String,
    pub send_outputs: Vec<String>,
}

/// Flat per-variant field map of a successful decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OracleData {
    Genesis(GenesisData),
    Mint(MintData),
    Send(SendData),
}

impl From<&SlpMessage> for OracleData {
    fn from(message: &SlpMessage) -> Self {
        let token_type = message.token_type.as_u16();
        let transaction_type = message.transaction_type().as_str();

        match &message.body {
            SlpBody::Genesis(genesis) => Self::Genesis(GenesisData {
                token_type,
                transaction_type,
                symbol: hex::encode_upper(&genesis.ticker),
                name: hex::encode_upper(&genesis.name),
                document_uri: hex::encode_upper(&genesis.document_uri),
                document_sha256: hex::encode_upper(&genesis.document_hash),
                decimals: genesis.decimals,
                baton_vout: genesis.mint_baton_vout,
                genesis_or_mint_quantity: genesis.initial_quantity.to_string(),
            }),
            SlpBody::Mint(mint) => Self::Mint(MintData {
                token_type,
                transaction_type,
                token_id_hex: mint.token_id.to_hex(),
                baton_vout: mint.mint_baton_vout,
                contains_baton: mint.mint_baton_vout.is_some(),
                genesis_or_mint_quantity: mint.additional_quantity.to_string(),
            }),
            SlpBody::Send(send) => Self::Send(SendData {
                token_type,
                transaction_type,
                token_id_hex: send.token_id.to_hex(),
                send_outputs: send
                    .output_quantities
                    .iter()
                    .map(u64::to_string)
                    .collect(),
            }),
        }
    }
}

/// Response body of the decode oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OracleResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<OracleData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl OracleResponse {
    pub fn success(data: OracleData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            kind: None,
        }
    }

    pub fn failure(kind: &'static str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            kind: Some(kind),
        }
    }
}

impl From<&SlpError> for OracleResponse {
    fn from(error: &SlpError) -> Self {
        Self::failure(error.kind(), error.to_string())
    }
}

impl From<&SlpResult<SlpMessage>> for OracleResponse {
    fn from(result: &SlpResult<SlpMessage>) -> Self {
        match result {
            Ok(message) => Self::success(OracleData::from(message)),
            Err(error) => Self::from(error),
        }
    }
}

/// Decode a hex-encoded script and build the oracle response
///
/// Never fails: malformed hex and every decode error become a
/// `success: false` response.
pub fn respond_to_hex(script_hex: &str) -> OracleResponse {
    let script = match hex::decode(script_hex.trim()) {
        Ok(script) => script,
        Err(e) => {
            debug!("Rejecting non-hex oracle input: {}", e);
            return OracleResponse::failure(INVALID_HEX_KIND, format!("Invalid hex: {}", e));
        }
    };

    let result = slp::decode(&script);
    if let Err(e) = &result {
        debug!("Decode failed ({}): {}", e.kind(), e);
    }

    OracleResponse::from(&result)
}
