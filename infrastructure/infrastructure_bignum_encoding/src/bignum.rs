//! Fixed-Capacity Bignum Module
//!
//! Provides [`FixedBignum`], a magnitude held as raw bytes in a buffer of
//! [`CAPACITY_BYTES`] bytes, and [`FixedCapacityBackend`], the marshaling
//! backend that produces and consumes it.
//!
//! ## Storage
//!
//! A `FixedBignum` records three things:
//! - the first `nbytes` bytes of its buffer, copied verbatim from the caller
//! - `nbytes` itself, always a whole number of words
//! - the [`WireOrder`] those bytes were laid out in
//!
//! Leading zero bytes are never trimmed from `nbytes`. Only comparison looks
//! past them, and it does so without touching the magnitude.
//!
//! ## Indexed Access
//!
//! [`FixedBignum::byte_at`] answers "what is the byte of significance `i`"
//! for any storage order: position 0 is the least significant byte and
//! positions at or beyond `nbytes` read as zero.

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

use std::fmt;

use entities_wire_format::{byte_order, MarshalError, MarshalResult, WireOrder, WORD_BYTES};
use usecases_bignum_marshal::{alloc_buffer, free_buffer, AllocContext, MarshalBackend};

/// Maximum magnitude size in bytes
pub const CAPACITY_BYTES: usize = 2048;

/// Maximum magnitude size in bits
pub const CAPACITY_BITS: usize = CAPACITY_BYTES * 8;

/// Magnitude stored as raw bytes plus the order they were received in
pub struct FixedBignum {
    /// Always `CAPACITY_BYTES` long; only the first `nbytes` are meaningful
    bytes: Box<[u8]>,
    nbytes: usize,
    order: WireOrder,
}

impl FixedBignum {
    /// Take ownership of a zero-filled storage buffer from [`alloc_storage`]
    pub(crate) fn from_storage(bytes: Vec<u8>, nbytes: usize, order: WireOrder) -> Self {
        debug_assert_eq!(bytes.len(), CAPACITY_BYTES);
        debug_assert_eq!(nbytes % WORD_BYTES, 0);
        debug_assert!(nbytes <= CAPACITY_BYTES);
        Self {
            bytes: bytes.into_boxed_slice(),
            nbytes,
            order,
        }
    }

    /// Stored byte count, padding included
    pub fn len(&self) -> usize {
        self.nbytes
    }

    pub fn is_empty(&self) -> bool {
        self.nbytes == 0
    }

    /// Order the stored bytes are laid out in
    pub fn order(&self) -> WireOrder {
        self.order
    }

    /// The stored bytes, in storage order
    pub fn stored_bytes(&self) -> &[u8] {
        &self.bytes[..self.nbytes]
    }

    /// Byte of significance `position`, where 0 is the least significant
    ///
    /// Positions at or beyond [`len`](Self::len) read as zero.
    pub fn byte_at(&self, position: usize) -> u8 {
        if position >= self.nbytes {
            return 0;
        }

        let word = position / WORD_BYTES;
        let lane = position % WORD_BYTES;

        let stored_word = if self.order.msw_first {
            self.nbytes / WORD_BYTES - 1 - word
        } else {
            word
        };
        let stored_lane = if self.order.msb_first {
            WORD_BYTES - 1 - lane
        } else {
            lane
        };

        self.bytes[stored_word * WORD_BYTES + stored_lane]
    }

    /// Bytes needed to hold the value with no leading zero bytes
    ///
    /// Zero has a significant length of 0.
    pub fn significant_len(&self) -> usize {
        (0..self.nbytes)
            .rev()
            .find(|&position| self.byte_at(position) != 0)
            .map_or(0, |position| position + 1)
    }

    /// Wipe the stored bytes
    fn clear(&mut self) {
        self.bytes.fill(0);
        self.nbytes = 0;
    }
}

impl fmt::Debug for FixedBignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBignum")
            .field("nbytes", &self.nbytes)
            .field("order", &self.order)
            .field("value", &crate::hex_codec::encode(self))
            .finish()
    }
}

impl fmt::Display for FixedBignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::hex_codec::encode(self))
    }
}

/// Claim and allocate one zeroed storage buffer
pub(crate) fn alloc_storage(ctx: &mut dyn AllocContext) -> MarshalResult<Vec<u8>> {
    alloc_buffer(ctx, CAPACITY_BYTES)
}

/// Backend storing magnitudes verbatim in fixed-capacity buffers
///
/// Its native order is little-endian bytes in little-endian words. Some
/// receivers mishandle big-endian input, so that is what it asks for.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedCapacityBackend;

impl FixedCapacityBackend {
    pub fn new() -> Self {
        Self
    }
}

impl MarshalBackend for FixedCapacityBackend {
    type Magnitude = FixedBignum;

    fn deserialize(
        &self,
        ctx: &mut dyn AllocContext,
        source: &[u8],
        order: WireOrder,
    ) -> MarshalResult<FixedBignum> {
        let nbytes = source.len();
        if nbytes % WORD_BYTES != 0 {
            return Err(MarshalError::InvalidParameter);
        }
        if nbytes > CAPACITY_BYTES {
            return Err(MarshalError::OutOfRange);
        }

        let mut storage = alloc_storage(ctx)?;
        if let Err(err) = byte_order::convert(&mut storage, source, nbytes, false, false) {
            free_buffer(ctx, storage);
            return Err(err);
        }

        log::debug!("fixed bignum received: {} bytes, {}", nbytes, order);
        Ok(FixedBignum::from_storage(storage, nbytes, order))
    }

    fn serialized_len(&self, magnitude: &FixedBignum) -> MarshalResult<usize> {
        Ok(magnitude.nbytes)
    }

    fn serialize(
        &self,
        _ctx: &mut dyn AllocContext,
        magnitude: &FixedBignum,
        dest: &mut [u8],
        order: WireOrder,
    ) -> MarshalResult<()> {
        if dest.len() != magnitude.nbytes {
            return Err(MarshalError::InvalidParameter);
        }

        let (swap_bytes, swap_words) = byte_order::swap_flags(magnitude.order, order);
        byte_order::convert(dest, &magnitude.bytes, magnitude.nbytes, swap_bytes, swap_words)
    }

    fn release(&self, ctx: &mut dyn AllocContext, handle: &mut Option<FixedBignum>) {
        if let Some(mut magnitude) = handle.take() {
            log::debug!("fixed bignum released: {} bytes", magnitude.nbytes);
            magnitude.clear();
            ctx.reclaim(magnitude.bytes.len());
        }
    }

    fn native_order(&self) -> WireOrder {
        WireOrder::LITTLE_ENDIAN
    }
}
