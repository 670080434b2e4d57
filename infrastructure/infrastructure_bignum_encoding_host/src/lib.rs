//! Infrastructure Layer: Bignum Encoding with a Host Library
//!
//! Provides a marshaling backend whose magnitudes live in the `malachite`
//! arbitrary-precision library. The library always works big-endian, so
//! every wire buffer is reordered into that canonical layout on the way in
//! and out of it on the way out.
//! Depends on Entities and Use Cases layers.

pub mod bignum_host;

pub use bignum_host::{HostBignum, HostLibraryBackend};
