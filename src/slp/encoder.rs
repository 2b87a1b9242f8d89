//! SLP message encoder
//!
//! Inverse of [`decode`](super::decoder::decode): renders a message as the
//! canonical OP_RETURN script a conforming wallet would produce. Used to build
//! seed inputs and to check decode/encode round trips.

use super::message::constants::LOKAD_ID;
use super::message::{SlpBody, SlpMessage, TokenType};
use bitcoin::opcodes::all::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4, OP_RETURN};

/// Append a single pushdata element using the shortest encoding
///
/// Empty fields are written as `OP_PUSHDATA1 0x00`; SLP forbids OP_0.
pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    match data.len() {
        len @ 1..=0x4b => script.push(len as u8),
        len @ (0 | 0x4c..=0xff) => {
            script.push(OP_PUSHDATA1.to_u8());
            script.push(len as u8);
        }
        len @ 0x100..=0xffff => {
            script.push(OP_PUSHDATA2.to_u8());
            script.extend_from_slice(&(len as u16).to_le_bytes());
        }
        len => {
            script.push(OP_PUSHDATA4.to_u8());
            script.extend_from_slice(&(len as u32).to_le_bytes());
        }
    }
    script.extend_from_slice(data);
}

fn push_quantity(script: &mut Vec<u8>, quantity: u64) {
    push_data(script, &quantity.to_be_bytes());
}

fn push_mint_baton(script: &mut Vec<u8>, vout: Option<u8>) {
    match vout {
        Some(vout) => push_data(script, &[vout]),
        None => push_data(script, &[]),
    }
}

fn token_type_bytes(token_type: TokenType) -> Vec<u8> {
    let value = token_type.as_u16();
    match u8::try_from(value) {
        Ok(byte) => vec![byte],
        Err(_) => value.to_be_bytes().to_vec(),
    }
}

/// Encode a message as an OP_RETURN script
pub fn encode(message: &SlpMessage) -> Vec<u8> {
    let mut script = vec![OP_RETURN.to_u8()];
    push_data(&mut script, LOKAD_ID);
    push_data(&mut script, &token_type_bytes(message.token_type));
    push_data(&mut script, message.transaction_type().as_str().as_bytes());

    match &message.body {
        SlpBody::Genesis(genesis) => {
            push_data(&mut script, &genesis.ticker);
            push_data(&mut script, &genesis.name);
            push_data(&mut script, &genesis.document_uri);
            push_data(&mut script, &genesis.document_hash);
            push_data(&mut script, &[genesis.decimals]);
            push_mint_baton(&mut script, genesis.mint_baton_vout);
            push_quantity(&mut script, genesis.initial_quantity);
        }
        SlpBody::Mint(mint) => {
            push_data(&mut script, mint.token_id.as_bytes());
            push_mint_baton(&mut script, mint.mint_baton_vout);
            push_quantity(&mut script, mint.additional_quantity);
        }
        SlpBody::Send(send) => {
            push_data(&mut script, send.token_id.as_bytes());
            for quantity in &send.output_quantities {
                push_quantity(&mut script, *quantity);
            }
        }
    }

    script
}
