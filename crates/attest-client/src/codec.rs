//! Binary codec for review instruction payloads.
//!
//! The layout is versioned by the leading `variant` byte and must match the
//! on-chain program's deserializer exactly:
//!
//! ```text
//! variant        u8
//! subject_hash   u32 LE length prefix + raw UTF-8 bytes
//! output_count   u8
//! proof_label    u32 LE length prefix + raw UTF-8 bytes
//! ```
//!
//! Encoding fills a caller-sized buffer and reports how many bytes were used;
//! the caller truncates to that length before putting the bytes on the wire.
//! The codec itself never truncates.

use crate::constants::VARIANT_SUBMIT_REVIEW;
use crate::error::{ClientError, ClientResult};

const LEN_PREFIX: usize = 4;

/// A fixed-shape review record, the single instruction the program accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInstruction {
    pub variant: u8,
    /// Identifies the logical subject under review.
    pub subject_hash: String,
    /// Declared number of outputs.
    pub output_count: u8,
    /// Free-form annotation.
    pub proof_label: String,
}

impl ReviewInstruction {
    /// A variant-0 submit-review record.
    pub fn submit(
        subject_hash: impl Into<String>,
        output_count: u8,
        proof_label: impl Into<String>,
    ) -> Self {
        Self {
            variant: VARIANT_SUBMIT_REVIEW,
            subject_hash: subject_hash.into(),
            output_count,
            proof_label: proof_label.into(),
        }
    }

    /// Exact number of bytes `encode` will use.
    pub fn encoded_len(&self) -> usize {
        1 + LEN_PREFIX + self.subject_hash.len() + 1 + LEN_PREFIX + self.proof_label.len()
    }

    /// Encode into a fresh buffer of `capacity` bytes.
    ///
    /// Returns the buffer and the number of bytes actually used. Fails with
    /// `BufferTooSmall` before writing anything if the record does not fit.
    pub fn encode(&self, capacity: usize) -> ClientResult<(Vec<u8>, usize)> {
        let mut buf = vec![0u8; capacity];
        let used = self.encode_into(&mut buf)?;
        Ok((buf, used))
    }

    /// Encode into a caller-provided buffer, returning the used length.
    pub fn encode_into(&self, buf: &mut [u8]) -> ClientResult<usize> {
        let needed = self.encoded_len();
        if needed > buf.len() {
            return Err(ClientError::BufferTooSmall {
                needed,
                capacity: buf.len(),
            });
        }

        let mut at = 0;
        buf[at] = self.variant;
        at += 1;
        at += write_str(&mut buf[at..], &self.subject_hash);
        buf[at] = self.output_count;
        at += 1;
        at += write_str(&mut buf[at..], &self.proof_label);
        debug_assert_eq!(at, needed);
        Ok(at)
    }

    /// Exact inverse of `encode`. Expects a buffer already truncated to the
    /// used length; trailing bytes are rejected.
    pub fn decode(bytes: &[u8]) -> ClientResult<Self> {
        let mut cursor = Cursor::new(bytes);
        let variant = cursor.read_u8("variant")?;
        let subject_hash = cursor.read_str("subject_hash")?;
        let output_count = cursor.read_u8("output_count")?;
        let proof_label = cursor.read_str("proof_label")?;
        cursor.finish()?;
        Ok(Self {
            variant,
            subject_hash,
            output_count,
            proof_label,
        })
    }
}

fn write_str(buf: &mut [u8], s: &str) -> usize {
    let bytes = s.as_bytes();
    buf[..LEN_PREFIX].copy_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf[LEN_PREFIX..LEN_PREFIX + bytes.len()].copy_from_slice(bytes);
    LEN_PREFIX + bytes.len()
}

struct Cursor<'a> {
    bytes: &'a [u8],
    at: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, at: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.at
    }

    fn read_u8(&mut self, field: &'static str) -> ClientResult<u8> {
        if self.remaining() < 1 {
            return Err(ClientError::TruncatedPayload {
                field,
                remaining: 0,
            });
        }
        let v = self.bytes[self.at];
        self.at += 1;
        Ok(v)
    }

    fn read_str(&mut self, field: &'static str) -> ClientResult<String> {
        if self.remaining() < LEN_PREFIX {
            return Err(ClientError::TruncatedPayload {
                field,
                remaining: self.remaining(),
            });
        }
        let mut prefix = [0u8; LEN_PREFIX];
        prefix.copy_from_slice(&self.bytes[self.at..self.at + LEN_PREFIX]);
        self.at += LEN_PREFIX;

        let len = u32::from_le_bytes(prefix) as usize;
        if self.remaining() < len {
            return Err(ClientError::TruncatedPayload {
                field,
                remaining: self.remaining(),
            });
        }
        let raw = &self.bytes[self.at..self.at + len];
        self.at += len;
        String::from_utf8(raw.to_vec()).map_err(|_| ClientError::InvalidPayloadText(field))
    }

    fn finish(&self) -> ClientResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(ClientError::TrailingBytes(n)),
        }
    }
}
