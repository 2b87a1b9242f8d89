//! SLP message types
//!
//! A decoded message is an envelope (token type + transaction type) and one
//! typed field record per transaction type. Optional fields such as the mint
//! baton are explicit `Option`s, never absent map entries.

/// SLP protocol constants
pub mod constants {
    /// LOKAD id pushed immediately after OP_RETURN
    pub const LOKAD_ID: &[u8] = b"SLP\0";

    /// Token id width in bytes
    pub const TOKEN_ID_LEN: usize = 32;

    /// Document hash width in bytes when present
    pub const DOCUMENT_HASH_LEN: usize = 32;

    /// Quantity field width (big-endian u64)
    pub const QUANTITY_LEN: usize = 8;

    pub const MAX_DECIMALS: u8 = 9;

    /// Lowest legal mint baton output index (vout 0 is the OP_RETURN itself)
    pub const MIN_MINT_BATON_VOUT: u8 = 2;

    /// Maximum number of token outputs a SEND may address
    pub const MAX_SEND_OUTPUTS: usize = 19;
}

/// Token type byte of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Type 1 fungible token (0x01)
    Fungible,
    /// NFT1 child token (0x41)
    Nft1Child,
    /// NFT1 group token (0x81)
    Nft1Group,
}

impl TokenType {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x01 => Some(Self::Fungible),
            0x41 => Some(Self::Nft1Child),
            0x81 => Some(Self::Nft1Group),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            Self::Fungible => 0x01,
            Self::Nft1Child => 0x41,
            Self::Nft1Group => 0x81,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fungible => "Fungible",
            Self::Nft1Child => "NFT1Child",
            Self::Nft1Group => "NFT1Group",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Transaction type string of the envelope
///
/// `Commit` is recognised on the wire but has no field schema yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TransactionType {
    Genesis,
    Mint,
    Send,
    Commit,
}

impl TransactionType {
    /// Match the exact, case-sensitive ASCII tag
    pub fn from_bytes(tag: &[u8]) -> Option<Self> {
        match tag {
            b"GENESIS" => Some(Self::Genesis),
            b"MINT" => Some(Self::Mint),
            b"SEND" => Some(Self::Send),
            b"COMMIT" => Some(Self::Commit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genesis => "GENESIS",
            Self::Mint => "MINT",
            Self::Send => "SEND",
            Self::Commit => "COMMIT",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 32-byte token id, kept in the byte order it was pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub [u8; constants::TOKEN_ID_LEN]);

impl TokenId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisFields {
    pub ticker: Vec<u8>,
    pub name: Vec<u8>,
    pub document_uri: Vec<u8>,
    /// Empty, or exactly 32 bytes
    pub document_hash: Vec<u8>,
    pub decimals: u8,
    /// `None` means no baton was created
    pub mint_baton_vout: Option<u8>,
    pub initial_quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintFields {
    pub token_id: TokenId,
    pub mint_baton_vout: Option<u8>,
    pub additional_quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFields {
    pub token_id: TokenId,
    /// One quantity per token-receiving output, starting at vout 1
    pub output_quantities: Vec<u64>,
}

/// Variant-specific payload of a decoded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlpBody {
    Genesis(GenesisFields),
    Mint(MintFields),
    Send(SendFields),
}

/// A fully decoded SLP message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlpMessage {
    pub token_type: TokenType,
    pub body: SlpBody,
}

impl SlpMessage {
    pub fn transaction_type(&self) -> TransactionType {
        match self.body {
            SlpBody::Genesis(_) => TransactionType::Genesis,
            SlpBody::Mint(_) => TransactionType::Mint,
            SlpBody::Send(_) => TransactionType::Send,
        }
    }
}
