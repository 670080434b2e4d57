//! Wire Order Module
//!
//! Describes how a byte buffer holding a magnitude is laid out. The buffer is
//! viewed as a sequence of 4-byte words; two independent flags say whether the
//! bytes inside each word run most-significant first and whether the words
//! themselves run most-significant first.
//!
//! All four combinations are legal:
//!
//! | `msb_first` | `msw_first` | Layout |
//! |---|---|---|
//! | `true` | `true` | plain big-endian |
//! | `false` | `false` | plain little-endian |
//! | `true` | `false` | big-endian words, least-significant word first |
//! | `false` | `true` | little-endian words, most-significant word first |

use std::fmt;

/// Layout descriptor for a word-aligned magnitude buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireOrder {
    /// Bytes within each 32-bit word are most-significant first
    pub msb_first: bool,
    /// Words within the buffer are most-significant first
    pub msw_first: bool,
}

impl WireOrder {
    /// Most-significant byte first, most-significant word first
    pub const BIG_ENDIAN: WireOrder = WireOrder::new(true, true);

    /// Least-significant byte first, least-significant word first
    pub const LITTLE_ENDIAN: WireOrder = WireOrder::new(false, false);

    /// Every legal wire order, in a fixed sequence
    pub const ALL: [WireOrder; 4] = [
        WireOrder::new(true, true),
        WireOrder::new(true, false),
        WireOrder::new(false, true),
        WireOrder::new(false, false),
    ];

    /// Create a wire order from its two flags
    pub const fn new(msb_first: bool, msw_first: bool) -> Self {
        Self {
            msb_first,
            msw_first,
        }
    }
}

impl fmt::Display for WireOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = if self.msb_first { "msb" } else { "lsb" };
        let words = if self.msw_first { "msw" } else { "lsw" };
        write!(f, "{}-first/{}-first", bytes, words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_orders() {
        assert!(WireOrder::BIG_ENDIAN.msb_first);
        assert!(WireOrder::BIG_ENDIAN.msw_first);
        assert!(!WireOrder::LITTLE_ENDIAN.msb_first);
        assert!(!WireOrder::LITTLE_ENDIAN.msw_first);
    }

    #[test]
    fn test_all_orders_are_distinct() {
        for (i, a) in WireOrder::ALL.iter().enumerate() {
            for b in &WireOrder::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(WireOrder::BIG_ENDIAN.to_string(), "msb-first/msw-first");
        assert_eq!(WireOrder::new(false, true).to_string(), "lsb-first/msw-first");
    }
}
