//! Backend Facades
//!
//! [`AnyBackend`] wraps exactly one of the two magnitude backends and
//! implements the marshaling contract by dispatching to it. Its handles are
//! [`AnyBignum`] values tagged with the backend that created them.
//!
//! A handle can only be serialized by the kind of backend that created it;
//! anything else is `MarshalError::InvalidParameter`. Release always succeeds
//! and frees a handle through the backend matching its tag.

use entities_wire_format::{MarshalError, MarshalResult, WireOrder};
use infrastructure_bignum_encoding::{FixedBignum, FixedCapacityBackend};
use infrastructure_bignum_encoding_host::{HostBignum, HostLibraryBackend};
use usecases_bignum_marshal::{AllocContext, MarshalBackend};

use crate::config::BackendKind;

/// One of the available marshaling backends
#[derive(Debug, Clone, Copy)]
pub enum AnyBackend {
    Host(HostLibraryBackend),
    Fixed(FixedCapacityBackend),
}

/// Magnitude handle produced by an [`AnyBackend`]
#[derive(Debug)]
pub enum AnyBignum {
    Host(HostBignum),
    Fixed(FixedBignum),
}

impl AnyBackend {
    pub fn new(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Host => AnyBackend::Host(HostLibraryBackend::new()),
            BackendKind::FixedCapacity => AnyBackend::Fixed(FixedCapacityBackend::new()),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            AnyBackend::Host(_) => BackendKind::Host,
            AnyBackend::Fixed(_) => BackendKind::FixedCapacity,
        }
    }
}

impl AnyBignum {
    /// Kind of backend that created this handle
    pub fn kind(&self) -> BackendKind {
        match self {
            AnyBignum::Host(_) => BackendKind::Host,
            AnyBignum::Fixed(_) => BackendKind::FixedCapacity,
        }
    }

    pub fn as_host(&self) -> Option<&HostBignum> {
        match self {
            AnyBignum::Host(m) => Some(m),
            AnyBignum::Fixed(_) => None,
        }
    }

    pub fn as_fixed(&self) -> Option<&FixedBignum> {
        match self {
            AnyBignum::Fixed(m) => Some(m),
            AnyBignum::Host(_) => None,
        }
    }
}

impl MarshalBackend for AnyBackend {
    type Magnitude = AnyBignum;

    fn deserialize(
        &self,
        ctx: &mut dyn AllocContext,
        source: &[u8],
        order: WireOrder,
    ) -> MarshalResult<AnyBignum> {
        match self {
            AnyBackend::Host(backend) => {
                backend.deserialize(ctx, source, order).map(AnyBignum::Host)
            }
            AnyBackend::Fixed(backend) => {
                backend.deserialize(ctx, source, order).map(AnyBignum::Fixed)
            }
        }
    }

    fn serialized_len(&self, magnitude: &AnyBignum) -> MarshalResult<usize> {
        match (self, magnitude) {
            (AnyBackend::Host(backend), AnyBignum::Host(m)) => backend.serialized_len(m),
            (AnyBackend::Fixed(backend), AnyBignum::Fixed(m)) => backend.serialized_len(m),
            _ => Err(MarshalError::InvalidParameter),
        }
    }

    fn serialize(
        &self,
        ctx: &mut dyn AllocContext,
        magnitude: &AnyBignum,
        dest: &mut [u8],
        order: WireOrder,
    ) -> MarshalResult<()> {
        match (self, magnitude) {
            (AnyBackend::Host(backend), AnyBignum::Host(m)) => {
                backend.serialize(ctx, m, dest, order)
            }
            (AnyBackend::Fixed(backend), AnyBignum::Fixed(m)) => {
                backend.serialize(ctx, m, dest, order)
            }
            _ => Err(MarshalError::InvalidParameter),
        }
    }

    fn release(&self, ctx: &mut dyn AllocContext, handle: &mut Option<AnyBignum>) {
        match handle.take() {
            Some(AnyBignum::Host(m)) => HostLibraryBackend::new().release(ctx, &mut Some(m)),
            Some(AnyBignum::Fixed(m)) => FixedCapacityBackend::new().release(ctx, &mut Some(m)),
            None => {}
        }
    }

    fn native_order(&self) -> WireOrder {
        match self {
            AnyBackend::Host(backend) => backend.native_order(),
            AnyBackend::Fixed(backend) => backend.native_order(),
        }
    }
}
