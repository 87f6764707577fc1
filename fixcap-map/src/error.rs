use thiserror::Error;

/// Errors returned when building a [`FixedCapacityHashMap`](crate::FixedCapacityHashMap).
///
/// Running out of room is not an error: `set` reports it with `false` and
/// `try_insert` hands the value back.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A map must be able to hold at least one key.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    /// The bucket array for this capacity cannot be sized to a power of two.
    #[error("capacity {requested} has no power-of-two bucket array size")]
    CapacityOverflow {
        /// The capacity that was asked for.
        requested: usize,
    },
}
