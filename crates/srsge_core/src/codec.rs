//! Reads and writes the fixed-offset fields of a save header.
//!
//! Only the bytes of [`Field::ALL`] are ever touched. The codec never
//! checks a signature or the total length beyond what the field offsets
//! imply.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ReadError, WriteError};
use crate::layout::Field;
use crate::record::SaveRecord;
use crate::stream::LittleEndianStream;

/// Decodes the three fields. The stream may be positioned anywhere.
pub fn decode<R: Read + Seek>(reader: R) -> Result<SaveRecord, ReadError> {
    let mut stream = LittleEndianStream::new(reader);
    let len = stream.len().map_err(|source| ReadError::Length { source })?;

    let foreign_currency = read_at(&mut stream, Field::ForeignCurrency, len, |s| s.read_f32())?;
    let local_currency = read_at(&mut stream, Field::LocalCurrency, len, |s| s.read_f32())?;
    let year = read_at(&mut stream, Field::Year, len, |s| s.read_u16())?;

    Ok(SaveRecord {
        year,
        local_currency,
        foreign_currency,
    })
}

/// Writes the three fields in place. Nothing is written unless every field
/// fits inside the current stream length, so the stream never grows.
pub fn encode<W: Write + Seek>(writer: W, record: &SaveRecord) -> Result<(), WriteError> {
    let mut stream = LittleEndianStream::new(writer);
    let len = stream.len().map_err(|source| WriteError::Length { source })?;
    let overflow = Field::ALL
        .iter()
        .find(|field| !field.range().fits_within(len));
    if let Some(field) = overflow {
        return Err(WriteError::OutOfBounds {
            field: *field,
            offset: field.offset(),
            len,
        });
    }

    write_at(&mut stream, Field::ForeignCurrency, record.foreign_currency, |s, v| {
        s.write_f32(v)
    })?;
    write_at(&mut stream, Field::LocalCurrency, record.local_currency, |s, v| {
        s.write_f32(v)
    })?;
    write_at(&mut stream, Field::Year, record.year, |s, v| s.write_u16(v))?;

    stream.flush().map_err(|source| WriteError::Flush { source })
}

pub fn decode_path<P: AsRef<Path>>(path: P) -> Result<SaveRecord, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let record = decode(BufReader::new(file))?;
    info!(path = %path.display(), "loaded save header");
    Ok(record)
}

/// Opens an existing file without truncating, creating or appending.
pub fn encode_path<P: AsRef<Path>>(path: P, record: &SaveRecord) -> Result<(), WriteError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| WriteError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    encode(file, record)?;
    info!(path = %path.display(), "wrote save header");
    Ok(())
}

fn read_at<R, T, F>(
    stream: &mut LittleEndianStream<R>,
    field: Field,
    len: u64,
    read: F,
) -> Result<T, ReadError>
where
    R: Read + Seek,
    T: fmt::Debug,
    F: FnOnce(&mut LittleEndianStream<R>) -> io::Result<T>,
{
    let offset = field.offset();
    if !field.range().fits_within(len) {
        return Err(ReadError::OutOfBounds { field, offset, len });
    }
    stream
        .seek_to(offset)
        .map_err(|source| ReadError::Seek {
            field,
            offset,
            source,
        })?;
    let value = read(stream).map_err(|source| ReadError::ShortRead {
        field,
        offset,
        source,
    })?;
    debug!(%field, offset, ?value, "decoded field");
    Ok(value)
}

fn write_at<W, T, F>(
    stream: &mut LittleEndianStream<W>,
    field: Field,
    value: T,
    write: F,
) -> Result<(), WriteError>
where
    W: Write + Seek,
    T: fmt::Debug + Copy,
    F: FnOnce(&mut LittleEndianStream<W>, T) -> io::Result<()>,
{
    let offset = field.offset();
    stream
        .seek_to(offset)
        .map_err(|source| WriteError::Seek {
            field,
            offset,
            source,
        })?;
    write(stream, value).map_err(|source| WriteError::ShortWrite {
        field,
        offset,
        source,
    })?;
    debug!(%field, offset, ?value, "encoded field");
    Ok(())
}
