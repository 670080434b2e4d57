//! Infrastructure Layer: Bignum Encoding
//!
//! Provides a self-contained magnitude backend that keeps the caller's bytes
//! exactly as received, together with text and comparison utilities that work
//! on those magnitudes.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate stores each magnitude in a
//! buffer of fixed capacity ([`CAPACITY_BYTES`]) alongside the
//! [`WireOrder`](entities_wire_format::WireOrder) its bytes arrived in. No
//! reordering happens on the way in; the cost is paid on the way out, and only
//! when the requested order differs from the stored one.
//!
//! ## Modules
//!
//! - **[`bignum`](bignum/index.html)**: [`FixedBignum`] and [`FixedCapacityBackend`]
//! - **[`hex_codec`](hex_codec/index.html)**: Hexadecimal text to and from magnitudes
//! - **[`compare`](compare/index.html)**: Unsigned comparison independent of storage order
//!
//! ## See Also
//!
//! - [`usecases_bignum_marshal`](../usecases_bignum_marshal/index.html): The backend contract
//! - [`infrastructure_bignum_encoding_host`](../infrastructure_bignum_encoding_host/index.html): Library-backed backend

pub mod bignum;
pub mod compare;
pub mod hex_codec;

pub use bignum::{FixedBignum, FixedCapacityBackend, CAPACITY_BITS, CAPACITY_BYTES};
pub use compare::compare;
pub use hex_codec::{encode, encode_into, parse, print_magnitude};
