//! Host Library Bignum Module
//!
//! [`HostLibraryBackend`] adapts the marshaling contract onto
//! [`malachite::Natural`].
//!
//! ## Canonical Order
//!
//! `malachite` imports and exports magnitudes as most-significant-byte-first
//! digit sequences, which is [`WireOrder::BIG_ENDIAN`]. Deserialize reorders
//! the caller's buffer into that layout before import; serialize exports into
//! that layout and reorders into whatever the caller asked for.
//!
//! ## Serialized Length
//!
//! The reported length is the minimal byte count of the value, so leading
//! zero bytes given to deserialize do not survive. That length is not always
//! a whole number of words; serializing such a value fails with
//! `MarshalError::InvalidParameter` because the reordering primitive only
//! moves whole words.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::mem;

use entities_wire_format::{byte_order, MarshalError, MarshalResult, WireOrder, WORD_BYTES};
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Natural;
use usecases_bignum_marshal::{alloc_buffer, free_buffer, AllocContext, MarshalBackend};

/// Bits per exported digit
const DIGIT_BITS: u64 = 8;

/// Bytes charged to the context for one handle
const HANDLE_BYTES: usize = mem::size_of::<HostBignum>();

/// Magnitude held as a `malachite` natural number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostBignum {
    value: Natural,
}

impl HostBignum {
    /// The underlying library value
    pub fn value(&self) -> &Natural {
        &self.value
    }

    /// Minimal number of bytes holding the value; 0 for zero
    pub fn byte_len(&self) -> usize {
        let bits = self.value.significant_bits();
        ((bits + DIGIT_BITS - 1) / DIGIT_BITS) as usize
    }

    /// Big-endian bytes of the value with no leading zeros
    fn export(&self) -> Vec<u8> {
        <Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_desc(&self.value, DIGIT_BITS)
    }
}

/// Backend storing magnitudes in the `malachite` library
#[derive(Debug, Default, Clone, Copy)]
pub struct HostLibraryBackend;

impl HostLibraryBackend {
    pub fn new() -> Self {
        Self
    }
}

impl MarshalBackend for HostLibraryBackend {
    type Magnitude = HostBignum;

    fn deserialize(
        &self,
        ctx: &mut dyn AllocContext,
        source: &[u8],
        order: WireOrder,
    ) -> MarshalResult<HostBignum> {
        let nbytes = source.len();
        if nbytes % WORD_BYTES != 0 {
            return Err(MarshalError::InvalidParameter);
        }

        ctx.claim(HANDLE_BYTES)?;
        let mut canonical = match alloc_buffer(ctx, nbytes) {
            Ok(buf) => buf,
            Err(err) => {
                ctx.reclaim(HANDLE_BYTES);
                return Err(err);
            }
        };

        let (swap_bytes, swap_words) = byte_order::swap_flags(order, WireOrder::BIG_ENDIAN);
        if let Err(err) =
            byte_order::convert(&mut canonical, source, nbytes, swap_bytes, swap_words)
        {
            free_buffer(ctx, canonical);
            ctx.reclaim(HANDLE_BYTES);
            return Err(err);
        }

        let value = <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(
            DIGIT_BITS,
            canonical.iter().copied(),
        );
        free_buffer(ctx, canonical);

        match value {
            Some(value) => {
                log::debug!("host bignum received: {} bytes, {}", nbytes, order);
                Ok(HostBignum { value })
            }
            None => {
                log::warn!("host library rejected a {} byte import", nbytes);
                ctx.reclaim(HANDLE_BYTES);
                Err(MarshalError::Failed)
            }
        }
    }

    fn serialized_len(&self, magnitude: &HostBignum) -> MarshalResult<usize> {
        Ok(magnitude.byte_len())
    }

    fn serialize(
        &self,
        ctx: &mut dyn AllocContext,
        magnitude: &HostBignum,
        dest: &mut [u8],
        order: WireOrder,
    ) -> MarshalResult<()> {
        let nbytes = magnitude.byte_len();
        if dest.len() != nbytes {
            return Err(MarshalError::InvalidParameter);
        }

        ctx.claim(nbytes)?;
        let mut canonical = magnitude.export();
        let result = if canonical.len() != nbytes {
            log::warn!(
                "host library exported {} bytes, expected {}",
                canonical.len(),
                nbytes
            );
            Err(MarshalError::Failed)
        } else {
            let (swap_bytes, swap_words) = byte_order::swap_flags(WireOrder::BIG_ENDIAN, order);
            byte_order::convert(dest, &canonical, nbytes, swap_bytes, swap_words)
        };

        canonical.fill(0);
        ctx.reclaim(nbytes);
        result
    }

    fn release(&self, ctx: &mut dyn AllocContext, handle: &mut Option<HostBignum>) {
        if let Some(magnitude) = handle.take() {
            log::debug!("host bignum released: {} bytes", magnitude.byte_len());
            drop(magnitude);
            ctx.reclaim(HANDLE_BYTES);
        }
    }

    fn native_order(&self) -> WireOrder {
        WireOrder::BIG_ENDIAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usecases_bignum_marshal::{BudgetContext, HeapContext};

    fn load(bytes: &[u8], order: WireOrder) -> HostBignum {
        HostLibraryBackend
            .deserialize(&mut HeapContext::new(), bytes, order)
            .unwrap()
    }

    #[test]
    fn test_deserialize_big_endian() {
        let m = load(&[0x00, 0x00, 0x01, 0x02], WireOrder::BIG_ENDIAN);
        assert_eq!(m.value(), &Natural::from(0x0102u32));
    }

    #[test]
    fn test_deserialize_every_order() {
        let layouts = [
            (WireOrder::new(true, true), [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]),
            (WireOrder::new(false, false), [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
            (WireOrder::new(true, false), [0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]),
            (WireOrder::new(false, true), [0x05, 0x06, 0x07, 0x08, 0x01, 0x02, 0x03, 0x04]),
        ];
        let expected = Natural::from(0x0807060504030201u64);
        for (order, bytes) in layouts {
            assert_eq!(load(&bytes, order).value(), &expected, "{}", order);
        }
    }

    #[test]
    fn test_serialized_len_is_minimal() {
        let m = load(&[0, 0, 0, 0, 0, 0, 0x12, 0x34], WireOrder::BIG_ENDIAN);
        assert_eq!(HostLibraryBackend.serialized_len(&m), Ok(2));

        let zero = load(&[0u8; 8], WireOrder::LITTLE_ENDIAN);
        assert_eq!(HostLibraryBackend.serialized_len(&zero), Ok(0));
    }

    #[test]
    fn test_serialize_unaligned_minimal_length() {
        let mut ctx = HeapContext::new();
        let m = load(&[0, 0x01, 0x02, 0x03], WireOrder::BIG_ENDIAN);
        let mut out = [0u8; 3];
        assert_eq!(
            HostLibraryBackend.serialize(&mut ctx, &m, &mut out, WireOrder::BIG_ENDIAN),
            Err(MarshalError::InvalidParameter)
        );
        assert_eq!(ctx.in_use(), 0);
    }

    #[test]
    fn test_serialize_zero() {
        let mut ctx = HeapContext::new();
        let zero = load(&[0u8; 4], WireOrder::BIG_ENDIAN);
        let mut out: [u8; 0] = [];
        assert_eq!(
            HostLibraryBackend.serialize(&mut ctx, &zero, &mut out, WireOrder::LITTLE_ENDIAN),
            Ok(())
        );
    }

    #[test]
    fn test_serialize_length_mismatch() {
        let mut ctx = HeapContext::new();
        let m = load(&[0x80, 0, 0, 1], WireOrder::BIG_ENDIAN);
        let mut out = [0u8; 8];
        assert_eq!(
            HostLibraryBackend.serialize(&mut ctx, &m, &mut out, WireOrder::BIG_ENDIAN),
            Err(MarshalError::InvalidParameter)
        );
    }

    #[test]
    fn test_deserialize_misaligned() {
        let mut ctx = HeapContext::new();
        assert_eq!(
            HostLibraryBackend
                .deserialize(&mut ctx, &[1, 2, 3], WireOrder::BIG_ENDIAN)
                .unwrap_err(),
            MarshalError::InvalidParameter
        );
        assert_eq!(ctx.in_use(), 0);
    }

    #[test]
    fn test_deserialize_rolls_back_handle_claim() {
        // Room for the handle but not for the temporary buffer
        let mut ctx = BudgetContext::new(HANDLE_BYTES + 4);
        let result = HostLibraryBackend.deserialize(&mut ctx, &[0u8; 8], WireOrder::BIG_ENDIAN);
        assert_eq!(result.unwrap_err(), MarshalError::NoMemory);
        assert_eq!(ctx.in_use(), 0);
    }

    #[test]
    fn test_temporary_buffer_is_returned() {
        let mut ctx = BudgetContext::new(HANDLE_BYTES + 8);
        let m = HostLibraryBackend
            .deserialize(&mut ctx, &[1, 2, 3, 4, 5, 6, 7, 8], WireOrder::BIG_ENDIAN)
            .unwrap();
        assert_eq!(ctx.in_use(), HANDLE_BYTES);
        assert_eq!(ctx.peak(), HANDLE_BYTES + 8);

        let mut out = [0u8; 8];
        HostLibraryBackend
            .serialize(&mut ctx, &m, &mut out, WireOrder::LITTLE_ENDIAN)
            .unwrap();
        assert_eq!(out, [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(ctx.in_use(), HANDLE_BYTES);
    }

    #[test]
    fn test_release() {
        let mut ctx = HeapContext::new();
        let mut handle = Some(
            HostLibraryBackend
                .deserialize(&mut ctx, &[1, 2, 3, 4], WireOrder::BIG_ENDIAN)
                .unwrap(),
        );
        HostLibraryBackend.release(&mut ctx, &mut handle);
        assert!(handle.is_none());
        assert_eq!(ctx.in_use(), 0);
        HostLibraryBackend.release(&mut ctx, &mut handle);
        assert_eq!(ctx.in_use(), 0);
    }

    #[test]
    fn test_serialize_library_value() {
        let mut ctx = HeapContext::new();
        let m = HostBignum {
            value: Natural::from(0xDEADBEEFu32),
        };
        let mut out = [0u8; 4];
        HostLibraryBackend
            .serialize(&mut ctx, &m, &mut out, WireOrder::LITTLE_ENDIAN)
            .unwrap();
        assert_eq!(out, [0xEF, 0xBE, 0xAD, 0xDE]);
    }

    #[test]
    fn test_serialize_no_memory() {
        // Only the handle fits; the export buffer does not
        let mut ctx = BudgetContext::new(HANDLE_BYTES);
        ctx.claim(HANDLE_BYTES).unwrap();
        let m = HostBignum {
            value: Natural::from(0x01020304u32),
        };
        let mut out = [0u8; 4];
        assert_eq!(
            HostLibraryBackend.serialize(&mut ctx, &m, &mut out, WireOrder::BIG_ENDIAN),
            Err(MarshalError::NoMemory)
        );
        assert_eq!(ctx.in_use(), HANDLE_BYTES);
        assert_eq!(out, [0u8; 4]);
    }

    #[test]
    fn test_native_order() {
        assert_eq!(HostLibraryBackend.native_order(), WireOrder::BIG_ENDIAN);
    }
}
