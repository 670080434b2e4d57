//! Marshal Backend Contract
//!
//! Defines the five operations a magnitude-storage backend implements. The
//! transaction layer receives a backend by reference and drives it through
//! these operations only; it never depends on a particular implementation.
//!
//! ## Operations
//!
//! | Operation | Purpose |
//! |---|---|
//! | [`deserialize`](MarshalBackend::deserialize) | wire bytes into a new handle |
//! | [`serialized_len`](MarshalBackend::serialized_len) | byte count `serialize` must be given |
//! | [`serialize`](MarshalBackend::serialize) | handle into wire bytes of a chosen order |
//! | [`release`](MarshalBackend::release) | free a handle and leave it absent |
//! | [`native_order`](MarshalBackend::native_order) | order that needs no reconciliation |
//!
//! ## Serialized length
//!
//! Backends disagree on what `serialized_len` reports. A backend built on an
//! arbitrary-precision library reports the minimal byte count of the value,
//! while a byte-storing backend reports exactly the byte count it was built
//! from, padding included. Callers must use whatever the backend reports.

use crate::context::{alloc_buffer, AllocContext};
use entities_wire_format::{MarshalResult, WireOrder};

/// Contract between the transaction layer and a magnitude-storage backend
pub trait MarshalBackend {
    /// Opaque magnitude handle owned by whoever holds it
    type Magnitude;

    /// Capture `source`, laid out as `order`, as a new magnitude
    ///
    /// # Errors
    ///
    /// - `MarshalError::InvalidParameter` if `source.len()` is not a multiple of 4
    /// - `MarshalError::NoMemory` if any allocation fails
    /// - `MarshalError::OutOfRange` if the value exceeds backend capacity
    fn deserialize(
        &self,
        ctx: &mut dyn AllocContext,
        source: &[u8],
        order: WireOrder,
    ) -> MarshalResult<Self::Magnitude>;

    /// Number of bytes `serialize` writes for `magnitude`
    ///
    /// A minimal length that is not a multiple of 4 cannot be serialized in
    /// any order, the backend's native order included: `serialize` returns
    /// `MarshalError::InvalidParameter` because bytes are reordered whole
    /// words at a time.
    fn serialized_len(&self, magnitude: &Self::Magnitude) -> MarshalResult<usize>;

    /// Write `magnitude` into `dest` laid out as `order`
    ///
    /// # Errors
    ///
    /// - `MarshalError::InvalidParameter` if `dest.len()` differs from `serialized_len`
    /// - `MarshalError::NoMemory` if a temporary buffer cannot be allocated
    /// - `MarshalError::Failed` if the backend's own export is inconsistent
    fn serialize(
        &self,
        ctx: &mut dyn AllocContext,
        magnitude: &Self::Magnitude,
        dest: &mut [u8],
        order: WireOrder,
    ) -> MarshalResult<()>;

    /// Free the magnitude held in `handle` and leave `handle` as `None`
    ///
    /// An absent handle is left untouched.
    fn release(&self, ctx: &mut dyn AllocContext, handle: &mut Option<Self::Magnitude>);

    /// Wire order this backend stores or exports without reordering
    fn native_order(&self) -> WireOrder;

    /// Serialize into a freshly allocated buffer of exactly `serialized_len` bytes
    ///
    /// The buffer is charged to `ctx`; return it with
    /// [`free_buffer`](crate::context::free_buffer) once done.
    fn serialize_to_vec(
        &self,
        ctx: &mut dyn AllocContext,
        magnitude: &Self::Magnitude,
        order: WireOrder,
    ) -> MarshalResult<Vec<u8>> {
        let len = self.serialized_len(magnitude)?;
        let mut out = alloc_buffer(ctx, len)?;
        if let Err(err) = self.serialize(ctx, magnitude, &mut out, order) {
            crate::context::free_buffer(ctx, out);
            return Err(err);
        }
        Ok(out)
    }
}

impl<B: MarshalBackend + ?Sized> MarshalBackend for &B {
    type Magnitude = B::Magnitude;

    fn deserialize(
        &self,
        ctx: &mut dyn AllocContext,
        source: &[u8],
        order: WireOrder,
    ) -> MarshalResult<Self::Magnitude> {
        (**self).deserialize(ctx, source, order)
    }

    fn serialized_len(&self, magnitude: &Self::Magnitude) -> MarshalResult<usize> {
        (**self).serialized_len(magnitude)
    }

    fn serialize(
        &self,
        ctx: &mut dyn AllocContext,
        magnitude: &Self::Magnitude,
        dest: &mut [u8],
        order: WireOrder,
    ) -> MarshalResult<()> {
        (**self).serialize(ctx, magnitude, dest, order)
    }

    fn release(&self, ctx: &mut dyn AllocContext, handle: &mut Option<Self::Magnitude>) {
        (**self).release(ctx, handle)
    }

    fn native_order(&self) -> WireOrder {
        (**self).native_order()
    }
}
