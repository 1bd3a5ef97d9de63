use bytes::BufMut;

use crate::adapters::protocol::constants::TAG_BUFFER;

/// Longest unsigned varint that fits in a u64.
pub const MAX_VARINT_LEN: usize = 10;

pub trait PutVarint {
    fn put_uvarint(&mut self, num: u64);

    /// Compact arrays carry `count + 1`, leaving 0 for null.
    fn put_compact_array_len(&mut self, count: usize) {
        self.put_uvarint(count as u64 + 1);
    }

    fn put_tagged_fields(&mut self) {
        self.put_uvarint(TAG_BUFFER as u64);
    }
}

impl<B: BufMut> PutVarint for B {
    fn put_uvarint(&mut self, mut num: u64) {
        while (num & !0x7F) != 0 {
            self.put_u8(((num & 0x7F) | 0x80) as u8);
            num >>= 7;
        }
        self.put_u8(num as u8);
    }
}

/// Decodes an unsigned varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed, or `None` when the
/// slice ends mid-varint or the varint is longer than [`MAX_VARINT_LEN`].
pub fn decode_uvarint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut result: u64 = 0;
    let mut shift = 0;

    for (i, &byte) in buf.iter().enumerate().take(MAX_VARINT_LEN) {
        result |= ((byte & 0x7f) as u64) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            return Some((result, i + 1));
        }
    }

    None
}
