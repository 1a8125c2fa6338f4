//! Fixed-offset field access for the Nitro file headers.
//!
//! Multi-byte fields are stored with their bytes reversed relative to reading
//! order. Pixel bytes store their two indices with the nibbles reversed.

use crate::error::{NitroError, Result};

/// Reverse the byte order of a multi-byte field. Applying it twice returns the
/// input unchanged.
pub fn reverse_field(field: &[u8]) -> Result<Vec<u8>> {
    reverse_field_at(field, 0)
}

fn reverse_field_at(field: &[u8], offset: usize) -> Result<Vec<u8>> {
    if field.len() % 2 != 0 {
        return Err(NitroError::InvalidFieldLength {
            offset,
            len: field.len(),
        });
    }

    Ok(field.iter().rev().copied().collect())
}

/// Read a byte-reversed unsigned field of `width` bytes (at most 4) at `offset`.
pub fn read_reversed(data: &[u8], offset: usize, width: usize, field: &'static str) -> Result<u32> {
    let end = offset + width;
    if end > data.len() {
        return Err(NitroError::TruncatedInput {
            field,
            required: end,
            actual: data.len(),
        });
    }

    let corrected = reverse_field_at(&data[offset..end], offset)?;
    Ok(corrected
        .iter()
        .fold(0u32, |acc, &byte| (acc << 8) | byte as u32))
}

/// Swap the high and low nibble of a byte.
#[inline]
pub fn swap_nibbles(byte: u8) -> u8 {
    byte.rotate_left(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_field_is_an_involution() {
        let samples: [&[u8]; 4] = [&[], &[0x12, 0x34], &[0xDE, 0xAD, 0xBE, 0xEF], &[1, 2, 3, 4, 5, 6, 7, 8]];
        for sample in samples {
            let once = reverse_field(sample).unwrap();
            let twice = reverse_field(&once).unwrap();
            assert_eq!(twice, sample);
        }
    }

    #[test]
    fn reverse_field_reverses_byte_groups_not_bits() {
        assert_eq!(reverse_field(&[0x01, 0x80]).unwrap(), vec![0x80, 0x01]);
    }

    #[test]
    fn odd_length_field_is_rejected() {
        match reverse_field(&[1, 2, 3]) {
            Err(NitroError::InvalidFieldLength { len: 3, .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn read_reversed_matches_little_endian() {
        let data = [0xAA, 0x40, 0x00, 0x00, 0x00, 0x02, 0x01];
        assert_eq!(read_reversed(&data, 1, 4, "size").unwrap(), 0x40);
        assert_eq!(read_reversed(&data, 5, 2, "count").unwrap(), 0x0102);
    }

    #[test]
    fn read_reversed_reports_field_and_offset() {
        match read_reversed(&[0u8; 3], 2, 2, "tileCount") {
            Err(NitroError::TruncatedInput {
                field,
                required,
                actual,
            }) => {
                assert_eq!(field, "tileCount");
                assert_eq!(required, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        match read_reversed(&[0u8; 8], 1, 3, "odd") {
            Err(NitroError::InvalidFieldLength { offset: 1, len: 3 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn nibble_swap_is_its_own_inverse() {
        for byte in 0..=255u8 {
            assert_eq!(swap_nibbles(swap_nibbles(byte)), byte);
        }
        assert_eq!(swap_nibbles(0x3A), 0xA3);
    }
}
