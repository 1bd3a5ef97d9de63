use bytes::{Buf, Bytes};
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;
use super::traits::*;
use super::varint::{decode_uvarint, MAX_VARINT_LEN};

/// 기본 파서 구현을 제공하는 구조체
///
/// Every read checks `remaining()` first, so a short buffer turns into
/// `DomainError::TruncatedFrame` instead of a panic inside `bytes`.
#[derive(Debug, Default, Clone)]
pub struct BaseParser;

impl ByteParser for BaseParser {}

impl PrimitiveParser for BaseParser {
    fn parse_u8(&self, buf: &mut Bytes) -> Result<u8, ApplicationError> {
        self.ensure_remaining(buf, 1)?;
        Ok(buf.get_u8())
    }

    fn parse_i16(&self, buf: &mut Bytes) -> Result<i16, ApplicationError> {
        self.ensure_remaining(buf, 2)?;
        Ok(buf.get_i16())
    }

    fn parse_i32(&self, buf: &mut Bytes) -> Result<i32, ApplicationError> {
        self.ensure_remaining(buf, 4)?;
        Ok(buf.get_i32())
    }

    fn parse_bytes(&self, buf: &mut Bytes, len: usize) -> Result<Bytes, ApplicationError> {
        self.ensure_remaining(buf, len)?;
        Ok(buf.split_to(len))
    }
}

impl VarIntParser for BaseParser {
    fn parse_uvarint(&self, buf: &mut Bytes) -> Result<u64, ApplicationError> {
        match decode_uvarint(buf.chunk()) {
            Some((value, consumed)) => {
                buf.advance(consumed);
                Ok(value)
            }
            None if buf.remaining() >= MAX_VARINT_LEN => Err(ApplicationError::Protocol(
                format!("varint longer than {} bytes", MAX_VARINT_LEN),
            )),
            None => Err(DomainError::TruncatedFrame {
                needed: buf.remaining() + 1,
                available: buf.remaining(),
            }
            .into()),
        }
    }
}

impl CompactArrayParser for BaseParser {
    fn parse_compact_array_len(&self, buf: &mut Bytes) -> Result<Option<usize>, ApplicationError> {
        let len = self.parse_uvarint(buf)?;
        if len == 0 {
            return Ok(None);
        }
        Ok(Some((len - 1) as usize))
    }

    fn parse_tagged_fields(&self, buf: &mut Bytes) -> Result<(), ApplicationError> {
        let count = self.parse_uvarint(buf)?;
        if count != 0 {
            return Err(ApplicationError::Protocol(format!(
                "unexpected {} tagged fields",
                count
            )));
        }
        Ok(())
    }
}
