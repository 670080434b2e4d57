//! Byte Order Conversion Module
//!
//! Provides the single reordering primitive used by every backend to move a
//! magnitude between two [`WireOrder`](crate::WireOrder) layouts.
//!
//! ## Overview
//!
//! A buffer is treated as `num_bytes / 4` words. Two independent flags select
//! the transformation:
//!
//! - **swap_byte_order**: the 4 bytes of each word are written as 3,2,1,0
//!   instead of 0,1,2,3
//! - **swap_word_order**: output words are written from the end of the
//!   destination backward instead of from the start forward
//!
//! The flags compose, so the four combinations are four distinct
//! transformations, each its own inverse. The primitive knows nothing about
//! numeric significance; it only moves bytes.
//!
//! ## Examples
//!
//! ```rust
//! use entities_wire_format::byte_order;
//!
//! let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
//! let mut dst = [0u8; 8];
//! byte_order::convert(&mut dst, &src, 8, true, true).unwrap();
//! assert_eq!(dst, [8, 7, 6, 5, 4, 3, 2, 1]);
//! ```

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

use crate::error::{MarshalError, MarshalResult};
use crate::wire_order::WireOrder;

/// Number of bytes in one wire word
pub const WORD_BYTES: usize = 4;

/// Copy `num_bytes` bytes from `source` into `dest`, optionally reversing the
/// bytes inside each word and/or the order of the words.
///
/// `dest` and `source` are distinct borrows, so they can never overlap.
///
/// # Arguments
/// * `dest` - Output buffer, at least `num_bytes` long
/// * `source` - Input buffer, at least `num_bytes` long
/// * `num_bytes` - Number of bytes to move; must be a whole number of words
/// * `swap_byte_order` - Reverse the 4 bytes of every word
/// * `swap_word_order` - Write words from the end of `dest` backward
///
/// # Errors
///
/// Returns `MarshalError::InvalidParameter` if `num_bytes` is not a multiple
/// of 4 or either buffer is shorter than `num_bytes`.
pub fn convert(
    dest: &mut [u8],
    source: &[u8],
    num_bytes: usize,
    swap_byte_order: bool,
    swap_word_order: bool,
) -> MarshalResult<()> {
    if num_bytes % WORD_BYTES != 0 {
        return Err(MarshalError::InvalidParameter);
    }
    if dest.len() < num_bytes || source.len() < num_bytes {
        return Err(MarshalError::InvalidParameter);
    }

    let dest = &mut dest[..num_bytes];
    let source = &source[..num_bytes];

    if !swap_byte_order && !swap_word_order {
        dest.copy_from_slice(source);
        return Ok(());
    }

    log::trace!(
        "reordering {} bytes (swap bytes: {}, swap words: {})",
        num_bytes,
        swap_byte_order,
        swap_word_order
    );

    let nwords = num_bytes / WORD_BYTES;
    for (index, word) in source.chunks_exact(WORD_BYTES).enumerate() {
        let target = if swap_word_order {
            nwords - 1 - index
        } else {
            index
        };
        let out = &mut dest[target * WORD_BYTES..(target + 1) * WORD_BYTES];
        if swap_byte_order {
            out[0] = word[3];
            out[1] = word[2];
            out[2] = word[1];
            out[3] = word[0];
        } else {
            out.copy_from_slice(word);
        }
    }

    Ok(())
}

/// Work out which swaps turn a buffer laid out as `from` into one laid out as `to`
///
/// Returns `(swap_byte_order, swap_word_order)`. Each axis swaps exactly when
/// the two orders disagree on it.
pub fn swap_flags(from: WireOrder, to: WireOrder) -> (bool, bool) {
    (from.msb_first != to.msb_first, from.msw_first != to.msw_first)
}
