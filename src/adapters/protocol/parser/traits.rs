use bytes::{Buf, Bytes};
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;

/// 바이트 스트림으로부터 데이터를 파싱하는 trait
pub trait ByteParser {
    /// 남은 바이트가 충분한지 확인
    fn ensure_remaining(&self, buf: &Bytes, required: usize) -> Result<(), ApplicationError> {
        if buf.remaining() < required {
            return Err(DomainError::TruncatedFrame {
                needed: required,
                available: buf.remaining(),
            }
            .into());
        }
        Ok(())
    }
}

/// 기본 타입들의 파싱을 위한 trait
pub trait PrimitiveParser: ByteParser {
    fn parse_u8(&self, buf: &mut Bytes) -> Result<u8, ApplicationError>;
    fn parse_i16(&self, buf: &mut Bytes) -> Result<i16, ApplicationError>;
    fn parse_i32(&self, buf: &mut Bytes) -> Result<i32, ApplicationError>;
    fn parse_bytes(&self, buf: &mut Bytes, len: usize) -> Result<Bytes, ApplicationError>;
}

/// 가변 정수 타입 파싱을 위한 trait
pub trait VarIntParser: ByteParser {
    fn parse_uvarint(&self, buf: &mut Bytes) -> Result<u64, ApplicationError>;
}

/// 컴팩트 배열 길이 파싱을 위한 trait
pub trait CompactArrayParser: VarIntParser {
    /// `None` for a null array, otherwise the element count.
    fn parse_compact_array_len(&self, buf: &mut Bytes) -> Result<Option<usize>, ApplicationError>;

    /// Consumes an empty tagged-field section.
    fn parse_tagged_fields(&self, buf: &mut Bytes) -> Result<(), ApplicationError>;
}
