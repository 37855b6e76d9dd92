use core::fmt;

/// A non-fatal configuration problem. The panel reports it and proceeds with a safe fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigWarning {
    /// Infinite wrap needs at least [`MIN_INFINITE_ITEMS`] items; it was disabled.
    InfiniteTooFewItems { count: usize },
    /// Infinite wrap needs auto layout; it was disabled.
    InfiniteRequiresAutoLayout,
    /// Infinite wrap is not supported on the free axis; it was disabled.
    InfiniteUnsupportedOnFreeAxis,
    /// Auto layout does not place items on the free axis; offsets were left as provided.
    AutoLayoutIgnoredOnFreeAxis,
}

/// Smallest item count for which infinite wrap is allowed.
///
/// With fewer items a wrapped item re-enters the opposite edge before it has left the viewport.
pub const MIN_INFINITE_ITEMS: usize = 4;

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfiniteTooFewItems { count } => write!(
                f,
                "infinite scrolling needs at least {MIN_INFINITE_ITEMS} items (got {count}); disabled"
            ),
            Self::InfiniteRequiresAutoLayout => {
                f.write_str("infinite scrolling needs auto layout; disabled")
            }
            Self::InfiniteUnsupportedOnFreeAxis => {
                f.write_str("infinite scrolling is not supported on the free axis; disabled")
            }
            Self::AutoLayoutIgnoredOnFreeAxis => {
                f.write_str("auto layout does not apply to the free axis; using manual offsets")
            }
        }
    }
}
