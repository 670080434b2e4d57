//! Use Cases Layer: Bignum Marshaling
//!
//! Defines the contract every magnitude-storage backend satisfies, and the
//! allocation context through which backends obtain memory.
//!
//! ## Overview
//!
//! The transaction layer never looks inside a magnitude. It asks a backend to
//! turn wire bytes into an opaque handle, later asks how long the handle's
//! serialized form is and for those bytes (possibly in another wire order), and
//! finally releases the handle. Those five operations make up
//! [`MarshalBackend`].
//!
//! - **[`backend`](backend/index.html)**: The [`MarshalBackend`] trait
//! - **[`context`](context/index.html)**: [`AllocContext`] with the unbounded
//!   [`HeapContext`] and the quota-enforcing [`BudgetContext`]
//!
//! ## See Also
//!
//! - [`entities_wire_format`](../entities_wire_format/index.html): Wire orders, reordering, error kinds
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): Fixed-capacity backend
//! - [`infrastructure_bignum_encoding_host`](../infrastructure_bignum_encoding_host/index.html): Library-backed backend

pub mod backend;
pub mod context;

pub use backend::MarshalBackend;
pub use context::{alloc_buffer, free_buffer, AllocContext, BudgetContext, HeapContext};

pub use entities_wire_format::{MarshalError, MarshalResult, Status, WireOrder};
