//! On-disk format: a fixed binary framing, little-endian scalars, and a
//! SHA-1 content checksum.
//!
//! ```text
//! offset  length                  field
//! 0       4                       magic: b1 00 13 37
//! 4       8                       k, little-endian u64
//! 12      1                       b
//! 13      20                      SHA-1 of the buffer below
//! 33      k*b + ceil(2^b/8)       table ++ bit vector, no separator
//! ```

use crate::{
    filter::{self, Filter},
    hash::{Hash, Sha1},
    io::{IoReader, IoWriter, Reader, Writer},
    BloomError,
};

const MAGIC: [u8; 4] = [0xb1, 0x00, 0x13, 0x37];

/// Load a filter from a raw byte-callback stream, per spec.md §4.4.
///
/// Integrity is checked in order: magic header, then parameter bounds, then
/// checksum. A file with a valid header but a corrupted body returns
/// `Checksum`, never silent acceptance.
pub fn load_stream<R: Reader>(reader: &mut R) -> Result<Filter, BloomError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|()| BloomError::Io(None))?;
    if magic != MAGIC {
        return Err(BloomError::VersionMismatch);
    }

    let mut k_bytes = [0u8; 8];
    reader.read_exact(&mut k_bytes).map_err(|()| BloomError::Io(None))?;
    let k = u64::from_le_bytes(k_bytes);

    let mut b_byte = [0u8; 1];
    reader.read_exact(&mut b_byte).map_err(|()| BloomError::Io(None))?;
    let b = b_byte[0];

    filter::validate_params(k, b)?;
    let buffer_size = filter::buffer_size(k, b)?;

    let mut checksum = [0u8; 20];
    reader.read_exact(&mut checksum).map_err(|()| BloomError::Io(None))?;

    let mut buffer = vec![0u8; buffer_size];
    reader.read_exact(&mut buffer).map_err(|()| BloomError::Io(None))?;

    let actual_checksum = Sha1::default().hash(&buffer);
    if actual_checksum != checksum {
        return Err(BloomError::Checksum);
    }

    let table_len = (k as usize) * (b as usize);
    let bits = buffer.split_off(table_len);
    let table = buffer;

    Ok(Filter::from_raw_parts(k, b, table, bits))
}

/// Save a filter to a raw byte-callback stream, per spec.md §4.4.
pub fn save_stream<W: Writer>(filter: &Filter, writer: &mut W) -> Result<(), BloomError> {
    writer.write_all(&MAGIC).map_err(|()| BloomError::Io(None))?;
    writer
        .write_all(&filter.k().to_le_bytes())
        .map_err(|()| BloomError::Io(None))?;
    writer.write_byte(filter.b()).map_err(|()| BloomError::Io(None))?;

    let checksum = checksum_of(filter);
    writer.write_all(&checksum).map_err(|()| BloomError::Io(None))?;

    writer.write_all(filter.table()).map_err(|()| BloomError::Io(None))?;
    writer.write_all(filter.vector()).map_err(|()| BloomError::Io(None))?;

    Ok(())
}

/// Load a filter from any [`std::io::Read`] (a `File`, a `Cursor`, ...),
/// using block reads internally for performance. Byte-identical to
/// [`load_stream`].
pub fn load<R: std::io::Read>(reader: R) -> Result<Filter, BloomError> {
    let mut reader = IoReader::new(reader);
    load_stream(&mut reader).map_err(|e| promote_io_error(e, reader.take_error()))
}

/// Save a filter to any [`std::io::Write`]. Byte-identical to [`save_stream`].
pub fn save<W: std::io::Write>(filter: &Filter, writer: W) -> Result<(), BloomError> {
    let mut writer = IoWriter::new(writer);
    save_stream(filter, &mut writer).map_err(|e| promote_io_error(e, writer.take_error()))
}

fn promote_io_error(e: BloomError, io_error: Option<std::io::Error>) -> BloomError {
    match (e, io_error) {
        (BloomError::Io(None), Some(io_error)) => BloomError::Io(Some(io_error)),
        (e, _) => e,
    }
}

fn checksum_of(filter: &Filter) -> [u8; 20] {
    let mut buffer = Vec::with_capacity(filter.memory_bytes());
    buffer.extend_from_slice(filter.table());
    buffer.extend_from_slice(filter.vector());
    Sha1::default().hash(&buffer)
}
