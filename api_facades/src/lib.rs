//! API Facades Layer
//!
//! Provides the entry point the transaction layer is handed: one backend
//! value, chosen by configuration, that implements the marshaling contract
//! for whichever storage strategy was selected.
//!
//! ## Overview
//!
//! - **[`config`](config/index.html)**: [`BackendKind`] and [`MarshalConfig`],
//!   read from the environment with a fixed-capacity default
//! - **[`backend_facades`](backend_facades/index.html)**: [`AnyBackend`] and
//!   [`AnyBignum`], a two-variant sum type dispatching every contract operation
//!
//! The chosen backend is an ordinary value passed by reference; nothing is
//! installed globally.
//!
//! ## Examples
//!
//! ```rust
//! use api_facades::{BackendKind, MarshalConfig};
//! use usecases_bignum_marshal::{HeapContext, MarshalBackend, WireOrder};
//!
//! let backend = MarshalConfig::new(BackendKind::Host).build();
//! let mut ctx = HeapContext::new();
//! let m = backend.deserialize(&mut ctx, &[1, 2, 3, 4], WireOrder::BIG_ENDIAN).unwrap();
//! assert_eq!(backend.serialized_len(&m), Ok(4));
//! ```

pub mod backend_facades;
pub mod config;

pub use backend_facades::{AnyBackend, AnyBignum};
pub use config::{BackendKind, ConfigError, MarshalConfig, BACKEND_ENV_VAR};
