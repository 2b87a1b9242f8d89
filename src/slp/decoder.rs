//! SLP message decoder
//!
//! Interprets a tokenized OP_RETURN script as an SLP envelope and dispatches
//! the remaining fields to the matching variant validator. Pure: no I/O, no
//! shared state.

use super::error::{SlpError, SlpResult};
use super::message::constants::LOKAD_ID;
use super::message::{SlpBody, SlpMessage, TokenType, TransactionType};
use super::script::{ScriptElement, Tokenizer};
use super::validators::{validate_genesis, validate_mint, validate_send, FieldCursor};
use bitcoin::opcodes::all::OP_RETURN;
use tracing::trace;

/// Longest transaction type tag echoed back verbatim in error messages
const MAX_ECHOED_TAG_LEN: usize = 16;

/// Envelope of an SLP message: the fields common to every transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlpEnvelope {
    pub token_type: TokenType,
    pub transaction_type: TransactionType,
}

/// Decode raw script bytes into an SLP message
pub fn decode(script: &[u8]) -> SlpResult<SlpMessage> {
    let fields = extract_fields(script)?;
    let mut cursor = FieldCursor::new(&fields);

    let envelope = parse_envelope(&mut cursor)?;
    trace!(
        "SLP envelope: token_type={}, transaction_type={}",
        envelope.token_type,
        envelope.transaction_type
    );

    let body = match envelope.transaction_type {
        TransactionType::Genesis => {
            SlpBody::Genesis(validate_genesis(envelope.token_type, &mut cursor)?)
        }
        TransactionType::Mint => SlpBody::Mint(validate_mint(envelope.token_type, &mut cursor)?),
        TransactionType::Send => SlpBody::Send(validate_send(&mut cursor)?),
        other => {
            return Err(SlpError::UnsupportedTransactionType(other.to_string()));
        }
    };
    cursor.finish(envelope.transaction_type.as_str())?;

    Ok(SlpMessage {
        token_type: envelope.token_type,
        body,
    })
}

/// Tokenize the script and return the pushdata fields following the LOKAD id
///
/// Anything that is not OP_RETURN followed by the LOKAD id is `NotSlp`, even
/// if the bytes after it are malformed.
fn extract_fields(script: &[u8]) -> SlpResult<Vec<&[u8]>> {
    let mut tokenizer = Tokenizer::new(script);

    match tokenizer.next() {
        Some(Ok(ScriptElement::Op(op))) if op == OP_RETURN.to_u8() => {}
        _ => return Err(SlpError::NotSlp("script does not begin with OP_RETURN")),
    }

    match tokenizer.next() {
        Some(Ok(ScriptElement::Push(marker))) if marker == LOKAD_ID => {}
        _ => return Err(SlpError::NotSlp("missing SLP LOKAD id")),
    }

    let mut fields = Vec::new();
    loop {
        let offset = tokenizer.position();
        match tokenizer.next() {
            None => break,
            Some(Ok(ScriptElement::Push(data))) => fields.push(data),
            Some(Ok(ScriptElement::Op(op))) => {
                return Err(SlpError::MalformedScript(format!(
                    "opcode 0x{:02x} at offset {} is not permitted in an SLP message",
                    op, offset
                )));
            }
            Some(Err(e)) => return Err(e),
        }
    }

    Ok(fields)
}

fn parse_envelope(cursor: &mut FieldCursor<'_>) -> SlpResult<SlpEnvelope> {
    let token_type = parse_token_type(cursor.next_field("token_type")?)?;

    let tag = cursor.next_field("transaction_type")?;
    let transaction_type = TransactionType::from_bytes(tag)
        .ok_or_else(|| SlpError::UnknownTransactionType(describe_tag(tag)))?;

    Ok(SlpEnvelope {
        token_type,
        transaction_type,
    })
}

fn parse_token_type(bytes: &[u8]) -> SlpResult<TokenType> {
    let value = match bytes {
        [b] => u16::from(*b),
        [hi, lo] => u16::from_be_bytes([*hi, *lo]),
        _ => {
            return Err(SlpError::UnsupportedTokenType(format!(
                "{}-byte token type field (must be 1 or 2)",
                bytes.len()
            )));
        }
    };

    TokenType::from_u16(value)
        .ok_or_else(|| SlpError::UnsupportedTokenType(format!("0x{:02x}", value)))
}

/// Render a transaction type tag for an error message without echoing
/// arbitrary payload bytes
fn describe_tag(tag: &[u8]) -> String {
    let printable = tag.iter().all(|b| b.is_ascii_graphic());
    if printable && !tag.is_empty() && tag.len() <= MAX_ECHOED_TAG_LEN {
        format!("\"{}\"", String::from_utf8_lossy(tag))
    } else {
        format!("<{} bytes>", tag.len())
    }
}
