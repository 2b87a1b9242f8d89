//! Script tokenizer
//!
//! Splits raw script bytes into pushdata and opcode elements. Carries no SLP
//! semantics: the decoder decides which elements are legal where.

use super::error::{SlpError, SlpResult};
use bitcoin::opcodes::all::{OP_PUSHBYTES_75, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use byteorder::{LittleEndian, ReadBytesExt};

const PUSHBYTES_MAX: u8 = OP_PUSHBYTES_75.to_u8();
const PUSHDATA1: u8 = OP_PUSHDATA1.to_u8();
const PUSHDATA2: u8 = OP_PUSHDATA2.to_u8();
const PUSHDATA4: u8 = OP_PUSHDATA4.to_u8();

/// One element of a tokenized script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptElement<'a> {
    /// Literal bytes pushed by OP_PUSHBYTES_n or OP_PUSHDATA1/2/4
    Push(&'a [u8]),
    /// Any other opcode, including OP_0 and OP_1..OP_16
    Op(u8),
}

/// Lazy tokenizer over a script
///
/// Yields elements in script order. After the first error it yields nothing
/// further.
pub struct Tokenizer<'a> {
    script: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread element
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, len: usize) -> SlpResult<&'a [u8]> {
        let remaining = self.script.len() - self.pos;
        if len > remaining {
            return Err(SlpError::MalformedScript(format!(
                "push of {} bytes at offset {} exceeds remaining {} bytes",
                len, self.pos, remaining
            )));
        }

        let data = &self.script[self.pos..self.pos + len];
        self.pos += len;
        Ok(data)
    }

    fn read_length(&mut self, width: usize) -> SlpResult<usize> {
        let offset = self.pos;
        let mut prefix = self.take(width).map_err(|_| {
            SlpError::MalformedScript(format!(
                "truncated {}-byte pushdata length at offset {}",
                width, offset
            ))
        })?;

        let len = match width {
            1 => prefix.read_u8().map(usize::from),
            2 => prefix.read_u16::<LittleEndian>().map(usize::from),
            _ => prefix.read_u32::<LittleEndian>().map(|len| len as usize),
        };

        len.map_err(|e| SlpError::MalformedScript(format!("pushdata length: {}", e)))
    }

    fn next_element(&mut self) -> SlpResult<ScriptElement<'a>> {
        let opcode = self.script[self.pos];
        self.pos += 1;

        let len = match opcode {
            0x01..=PUSHBYTES_MAX => usize::from(opcode),
            PUSHDATA1 => self.read_length(1)?,
            PUSHDATA2 => self.read_length(2)?,
            PUSHDATA4 => self.read_length(4)?,
            _ => return Ok(ScriptElement::Op(opcode)),
        };

        self.take(len).map(ScriptElement::Push)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = SlpResult<ScriptElement<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.script.len() {
            return None;
        }

        let element = self.next_element();
        self.failed = element.is_err();
        Some(element)
    }
}

/// Tokenize a whole script, failing on the first malformed push
pub fn tokenize(script: &[u8]) -> SlpResult<Vec<ScriptElement<'_>>> {
    Tokenizer::new(script).collect()
}
