//! Allocation Context Module
//!
//! Every allocation a backend makes, whether for handle storage or for a
//! temporary buffer, is claimed from a caller-supplied [`AllocContext`] first
//! and reclaimed when it is freed. The context's lifetime is scoped to the
//! enclosing transaction.
//!
//! ## Contexts
//!
//! - **HeapContext**: Never refuses a claim; only keeps count
//! - **BudgetContext**: Refuses claims that would exceed a fixed quota
//!
//! ## Examples
//!
//! ```rust
//! use usecases_bignum_marshal::{alloc_buffer, free_buffer, AllocContext, BudgetContext};
//!
//! let mut ctx = BudgetContext::new(64);
//! let buf = alloc_buffer(&mut ctx, 48).unwrap();
//! assert!(alloc_buffer(&mut ctx, 32).is_err());
//! free_buffer(&mut ctx, buf);
//! assert_eq!(ctx.in_use(), 0);
//! ```

use entities_wire_format::{MarshalError, MarshalResult};

/// Memory accounting for one transaction
pub trait AllocContext {
    /// Claim `len` bytes for a new allocation
    ///
    /// # Errors
    ///
    /// Returns `MarshalError::NoMemory` if the claim cannot be satisfied.
    fn claim(&mut self, len: usize) -> MarshalResult<()>;

    /// Return `len` previously claimed bytes
    fn reclaim(&mut self, len: usize);

    /// Bytes currently claimed and not yet reclaimed
    fn in_use(&self) -> usize;
}

/// Unbounded context backed by the global heap
#[derive(Debug, Default, Clone)]
pub struct HeapContext {
    in_use: usize,
}

impl HeapContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AllocContext for HeapContext {
    fn claim(&mut self, len: usize) -> MarshalResult<()> {
        self.in_use = self.in_use.checked_add(len).ok_or(MarshalError::NoMemory)?;
        Ok(())
    }

    fn reclaim(&mut self, len: usize) {
        debug_assert!(len <= self.in_use, "reclaiming more than was claimed");
        self.in_use = self.in_use.saturating_sub(len);
    }

    fn in_use(&self) -> usize {
        self.in_use
    }
}

/// Context enforcing a per-transaction quota
#[derive(Debug, Clone)]
pub struct BudgetContext {
    limit: usize,
    in_use: usize,
    peak: usize,
}

impl BudgetContext {
    /// Create a context allowing at most `limit` outstanding bytes
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            in_use: 0,
            peak: 0,
        }
    }

    /// Most bytes that may be outstanding at once
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Highest number of bytes outstanding at any one time
    pub fn peak(&self) -> usize {
        self.peak
    }
}

impl AllocContext for BudgetContext {
    fn claim(&mut self, len: usize) -> MarshalResult<()> {
        let wanted = self.in_use.checked_add(len).ok_or(MarshalError::NoMemory)?;
        if wanted > self.limit {
            log::debug!(
                "allocation of {} bytes refused ({} of {} in use)",
                len,
                self.in_use,
                self.limit
            );
            return Err(MarshalError::NoMemory);
        }
        self.in_use = wanted;
        self.peak = self.peak.max(wanted);
        Ok(())
    }

    fn reclaim(&mut self, len: usize) {
        debug_assert!(len <= self.in_use, "reclaiming more than was claimed");
        self.in_use = self.in_use.saturating_sub(len);
    }

    fn in_use(&self) -> usize {
        self.in_use
    }
}

/// Allocate a zeroed buffer of `len` bytes charged to `ctx`
///
/// # Errors
///
/// Returns `MarshalError::NoMemory` if the context refuses the claim or the
/// heap cannot supply the memory. A refused heap allocation leaves the
/// context as it was.
pub fn alloc_buffer(ctx: &mut dyn AllocContext, len: usize) -> MarshalResult<Vec<u8>> {
    ctx.claim(len)?;
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        ctx.reclaim(len);
        return Err(MarshalError::NoMemory);
    }
    buf.resize(len, 0);
    Ok(buf)
}

/// Free a buffer obtained from [`alloc_buffer`]
///
/// The contents are zeroed before the memory is returned.
pub fn free_buffer(ctx: &mut dyn AllocContext, mut buf: Vec<u8>) {
    let len = buf.len();
    buf.fill(0);
    drop(buf);
    ctx.reclaim(len);
}
