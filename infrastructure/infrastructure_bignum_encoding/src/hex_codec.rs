//! Hex Codec Module
//!
//! Converts between hexadecimal text and [`FixedBignum`] magnitudes.
//!
//! ## Text Format
//!
//! - Case-insensitive digits `[0-9A-Fa-f]`, no `0x` prefix
//! - Most significant digit first
//! - Surrounding whitespace is ignored
//! - An odd digit count implies a leading zero nibble
//!
//! Parsed magnitudes are built from the least significant end, so they are
//! always stored little-endian and padded with zero bytes up to a whole word.
//! Encoding emits two digits for every stored byte, padding included, so the
//! text length always reflects the stored length.
//!
//! ## Examples
//!
//! ```rust
//! use infrastructure_bignum_encoding::hex_codec;
//! use usecases_bignum_marshal::HeapContext;
//!
//! let mut ctx = HeapContext::new();
//! let m = hex_codec::parse(&mut ctx, " 1A2B ").unwrap();
//! assert_eq!(m.stored_bytes(), &[0x2B, 0x1A, 0x00, 0x00]);
//! assert_eq!(hex_codec::encode(&m), "00001A2B");
//! ```

use std::borrow::Cow;
use std::io::{self, Write};

use entities_wire_format::{MarshalError, MarshalResult, WireOrder, WORD_BYTES};
use usecases_bignum_marshal::{free_buffer, AllocContext};

use crate::bignum::{alloc_storage, FixedBignum, CAPACITY_BYTES};

/// Whitespace as recognised by C `isspace`
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Parse hexadecimal text into a new magnitude charged to `ctx`
///
/// # Errors
///
/// - `MarshalError::OutOfRange` if the trimmed text has more than
///   `2 * CAPACITY_BYTES` digits
/// - `MarshalError::NoMemory` if storage cannot be allocated
/// - `MarshalError::Malformed` if any character is not a hex digit
pub fn parse(ctx: &mut dyn AllocContext, text: &str) -> MarshalResult<FixedBignum> {
    let digits = text.trim_matches(is_space);
    if digits.len() > CAPACITY_BYTES * 2 {
        return Err(MarshalError::OutOfRange);
    }

    let mut storage = alloc_storage(ctx)?;

    let used = (digits.len() + 1) / 2;
    let padded: Cow<'_, str> = if digits.len() % 2 == 1 {
        Cow::Owned(format!("0{}", digits))
    } else {
        Cow::Borrowed(digits)
    };

    if hex::decode_to_slice(padded.as_bytes(), &mut storage[..used]).is_err() {
        free_buffer(ctx, storage);
        return Err(MarshalError::Malformed);
    }
    // Least significant byte first from here on
    storage[..used].reverse();

    let nbytes = (used + WORD_BYTES - 1) / WORD_BYTES * WORD_BYTES;
    log::debug!("fixed bignum parsed: {} digits into {} bytes", digits.len(), nbytes);
    Ok(FixedBignum::from_storage(
        storage,
        nbytes,
        WireOrder::LITTLE_ENDIAN,
    ))
}

/// Bytes of `magnitude`, most significant first, padding included
fn msb_first_bytes(magnitude: &FixedBignum) -> Vec<u8> {
    (0..magnitude.len())
        .rev()
        .map(|position| magnitude.byte_at(position))
        .collect()
}

/// Upper-case hex text of every stored byte, most significant digit first
pub fn encode(magnitude: &FixedBignum) -> String {
    hex::encode_upper(msb_first_bytes(magnitude))
}

/// Write the hex text of `magnitude` followed by a NUL byte into `buf`
///
/// Returns the number of digits written, excluding the NUL.
///
/// # Errors
///
/// Returns `MarshalError::BufferFull` if `buf` is shorter than
/// `2 * magnitude.len() + 1` bytes.
pub fn encode_into(buf: &mut [u8], magnitude: &FixedBignum) -> MarshalResult<usize> {
    let digits = magnitude.len() * 2;
    if buf.len() < digits + 1 {
        return Err(MarshalError::BufferFull);
    }
    buf[..digits].copy_from_slice(encode(magnitude).as_bytes());
    buf[digits] = 0;
    Ok(digits)
}

/// Print `magnitude` as `"{prefix}=\n {HEX}\n"`
pub fn print_magnitude<W: Write>(
    out: &mut W,
    prefix: &str,
    magnitude: &FixedBignum,
) -> io::Result<()> {
    write!(out, "{}=\n {}\n", prefix, encode(magnitude))
}
