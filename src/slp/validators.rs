//! Variant validators for GENESIS, MINT and SEND
//!
//! Each validator consumes the pushdata fields following the transaction type
//! in strict positional order and stops at the first violated constraint.

use super::error::{SlpError, SlpResult};
use super::message::constants::{
    DOCUMENT_HASH_LEN, MAX_DECIMALS, MAX_SEND_OUTPUTS, MIN_MINT_BATON_VOUT, QUANTITY_LEN,
    TOKEN_ID_LEN,
};
use super::message::{GenesisFields, MintFields, SendFields, TokenId, TokenType};
use byteorder::{BigEndian, ReadBytesExt};

/// Positional reader over the message fields after the transaction type
pub struct FieldCursor<'a> {
    fields: &'a [&'a [u8]],
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(fields: &'a [&'a [u8]]) -> Self {
        Self { fields, pos: 0 }
    }

    /// Take the next required field
    pub fn next_field(&mut self, name: &'static str) -> SlpResult<&'a [u8]> {
        let field = self
            .fields
            .get(self.pos)
            .copied()
            .ok_or(SlpError::MissingField(name))?;
        self.pos += 1;
        Ok(field)
    }

    /// Take every field not yet consumed
    pub fn rest(&mut self) -> &'a [&'a [u8]] {
        let rest = &self.fields[self.pos..];
        self.pos = self.fields.len();
        rest
    }

    pub fn remaining(&self) -> usize {
        self.fields.len() - self.pos
    }

    /// Reject anything beyond the variant's fixed arity
    pub fn finish(self, transaction_type: &'static str) -> SlpResult<()> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(SlpError::TrailingData {
                transaction_type,
                count,
            }),
        }
    }
}

fn parse_quantity(field: &'static str, bytes: &[u8]) -> SlpResult<u64> {
    if bytes.len() != QUANTITY_LEN {
        return Err(SlpError::InvalidQuantityEncoding {
            field,
            len: bytes.len(),
        });
    }

    let mut reader = bytes;
    reader
        .read_u64::<BigEndian>()
        .map_err(|_| SlpError::InvalidQuantityEncoding {
            field,
            len: bytes.len(),
        })
}

fn parse_decimals(bytes: &[u8]) -> SlpResult<u8> {
    match bytes {
        [decimals] if *decimals <= MAX_DECIMALS => Ok(*decimals),
        [decimals] => Err(SlpError::InvalidDecimals(format!(
            "{} is greater than {}",
            decimals, MAX_DECIMALS
        ))),
        _ => Err(SlpError::InvalidDecimals(format!(
            "field is {} bytes (must be 1)",
            bytes.len()
        ))),
    }
}

fn parse_mint_baton(bytes: &[u8]) -> SlpResult<Option<u8>> {
    match bytes {
        [] => Ok(None),
        [vout] if *vout >= MIN_MINT_BATON_VOUT => Ok(Some(*vout)),
        [vout] => Err(SlpError::InvalidMintBaton(format!(
            "vout {} is below {}",
            vout, MIN_MINT_BATON_VOUT
        ))),
        _ => Err(SlpError::InvalidMintBaton(format!(
            "field is {} bytes (must be 0 or 1)",
            bytes.len()
        ))),
    }
}

fn parse_token_id(bytes: &[u8]) -> SlpResult<TokenId> {
    let id: [u8; TOKEN_ID_LEN] = bytes
        .try_into()
        .map_err(|_| SlpError::InvalidTokenId(bytes.len()))?;
    Ok(TokenId(id))
}

/// GENESIS: ticker, name, document uri, document hash, decimals, mint baton
/// vout, initial quantity
pub fn validate_genesis(token_type: TokenType, fields: &mut FieldCursor<'_>) -> SlpResult<GenesisFields> {
    let ticker = fields.next_field("ticker")?.to_vec();
    let name = fields.next_field("name")?.to_vec();
    let document_uri = fields.next_field("document_uri")?.to_vec();

    let document_hash = fields.next_field("document_hash")?;
    if !(document_hash.is_empty() || document_hash.len() == DOCUMENT_HASH_LEN) {
        return Err(SlpError::InvalidHashLength(document_hash.len()));
    }

    let decimals = parse_decimals(fields.next_field("decimals")?)?;
    let mint_baton_vout = parse_mint_baton(fields.next_field("mint_baton_vout")?)?;
    let initial_quantity = parse_quantity(
        "initial_quantity",
        fields.next_field("initial_quantity")?,
    )?;

    if token_type == TokenType::Nft1Child {
        if decimals != 0 {
            return Err(SlpError::InvalidNft1Child("decimals must be 0"));
        }
        if mint_baton_vout.is_some() {
            return Err(SlpError::InvalidNft1Child("must not create a mint baton"));
        }
        if initial_quantity != 1 {
            return Err(SlpError::InvalidNft1Child("quantity must be 1"));
        }
    }

    Ok(GenesisFields {
        ticker,
        name,
        document_uri,
        document_hash: document_hash.to_vec(),
        decimals,
        mint_baton_vout,
        initial_quantity,
    })
}

/// MINT: token id, mint baton vout, additional quantity
pub fn validate_mint(token_type: TokenType, fields: &mut FieldCursor<'_>) -> SlpResult<MintFields> {
    if token_type == TokenType::Nft1Child {
        return Err(SlpError::InvalidNft1Child("MINT is not permitted"));
    }

    let token_id = parse_token_id(fields.next_field("token_id")?)?;
    let mint_baton_vout = parse_mint_baton(fields.next_field("mint_baton_vout")?)?;
    let additional_quantity = parse_quantity(
        "additional_quantity",
        fields.next_field("additional_quantity")?,
    )?;

    Ok(MintFields {
        token_id,
        mint_baton_vout,
        additional_quantity,
    })
}

/// SEND: token id followed by 1..=19 output quantities
pub fn validate_send(fields: &mut FieldCursor<'_>) -> SlpResult<SendFields> {
    let token_id = parse_token_id(fields.next_field("token_id")?)?;

    let output_quantities = fields
        .rest()
        .iter()
        .map(|field| parse_quantity("token_output_quantity", field))
        .collect::<SlpResult<Vec<u64>>>()?;

    if output_quantities.is_empty() {
        return Err(SlpError::TooFewOutputs);
    }
    if output_quantities.len() > MAX_SEND_OUTPUTS {
        return Err(SlpError::TooManyOutputs(output_quantities.len()));
    }

    Ok(SendFields {
        token_id,
        output_quantities,
    })
}
