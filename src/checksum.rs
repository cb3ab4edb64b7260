//! Checksum routines for every supported save layout.

use std::io::{self, Cursor};

use byteorder::{LittleEndian, ReadBytesExt};

/// Generation 1: complemented 8-bit sum of every byte in the range.
pub fn gen1_checksum(data: &[u8]) -> u8 {
    !data.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte))
}

/// Generation 2: 16-bit wrapping sum of every byte in the range.
pub fn gen2_checksum(data: &[u8]) -> u16 {
    data.iter()
        .fold(0u16, |sum, byte| sum.wrapping_add(u16::from(*byte)))
}

/// Generation 3 section checksum: 32-bit sum of little-endian words, with both
/// halves of the sum added together.
pub fn gen3_section_checksum(data: &[u8]) -> io::Result<u16> {
    if data.len() % 4 != 0 {
        return Err(io::ErrorKind::InvalidInput.into());
    }

    let mut checksum = 0u32;
    let mut cursor = Cursor::new(data);
    for _ in 0..(data.len() / 4) {
        let next_dword = cursor.read_u32::<LittleEndian>()?;
        checksum = checksum.wrapping_add(next_dword);
    }

    let checksum_lower = (checksum & 0xffff) as u16;
    let checksum_upper = (checksum >> 16) as u16;
    Ok(checksum_upper.wrapping_add(checksum_lower))
}

/// Generation 3 record checksum: 16-bit sum of the decrypted payload's
/// little-endian half-words.
pub fn pk3_checksum(payload: &[u8]) -> io::Result<u16> {
    let mut cursor = Cursor::new(payload);
    let mut checksum = 0u16;
    for _ in 0..(payload.len() / 2) {
        checksum = checksum.wrapping_add(cursor.read_u16::<LittleEndian>()?);
    }

    Ok(checksum)
}
