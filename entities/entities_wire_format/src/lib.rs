//! Entities Layer: Wire Format
//!
//! Provides the fundamental types shared by every bignum marshaling backend:
//! - Wire order descriptors (byte order within a word, word order within a buffer)
//! - The byte/word reordering primitive used to reconcile two wire orders
//! - Error kinds and caller-facing status codes
//!
//! ## Overview
//!
//! Magnitudes travel to and from the co-processor as byte buffers made of whole
//! 32-bit words. Each side of the exchange may lay those words out differently,
//! so every buffer is accompanied by a [`WireOrder`] naming its layout. The
//! [`byte_order::convert`] primitive turns one layout into another without any
//! knowledge of what the bytes mean.
//!
//! ## See Also
//!
//! - [`usecases_bignum_marshal`](../usecases_bignum_marshal/index.html): The backend contract built on these types

pub mod byte_order;
pub mod error;
pub mod wire_order;

pub use byte_order::{convert, swap_flags, WORD_BYTES};
pub use error::{MarshalError, MarshalResult, Status};
pub use wire_order::WireOrder;
