//! Table persistence.
//!
//! A table on disk is nothing but its entries as little-endian 32-bit
//! signed integers: no header, no checksum. The reference 7-card table the
//! verifier consumes uses the identical format.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

/// Entries converted per I/O call
const CHUNK: usize = 1 << 16;

/// Writes a table to `path`.
pub fn write_ranks(path: &Path, hand_ranks: &[i32]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut buffer = vec![0u8; CHUNK * 4];
    for chunk in hand_ranks.chunks(CHUNK) {
        let bytes = &mut buffer[..chunk.len() * 4];
        LittleEndian::write_i32_into(chunk, bytes);
        writer.write_all(bytes)?;
    }
    writer.flush()
}

/// Reads a table written by [`write_ranks`]; the entry count is the file
/// length divided by four.
pub fn read_ranks(path: &Path) -> io::Result<Vec<i32>> {
    let file = File::open(path)?;
    let byte_len = file.metadata()?.len();
    if byte_len % 4 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("table is {byte_len} bytes, not a whole number of entries"),
        ));
    }
    let mut reader = BufReader::new(file);
    let mut hand_ranks = vec![0i32; (byte_len / 4) as usize];
    let mut buffer = vec![0u8; CHUNK * 4];
    for chunk in hand_ranks.chunks_mut(CHUNK) {
        let bytes = &mut buffer[..chunk.len() * 4];
        reader.read_exact(bytes)?;
        LittleEndian::read_i32_into(bytes, chunk);
    }
    Ok(hand_ranks)
}
