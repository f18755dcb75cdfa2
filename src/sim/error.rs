//! Simulation error types

use std::fmt;

/// Errors surfaced by the simulation core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Every pool slot is occupied. Entity counts are bounded by the game
    /// rules, so hitting this means the capacity constant is too small.
    PoolExhausted {
        /// Pool capacity at the time of the failed allocation.
        capacity: usize,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::PoolExhausted { capacity } => {
                write!(f, "failed to allocate entity: all {} slots in use", capacity)
            }
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SimError::PoolExhausted { capacity: 512 };
        assert_eq!(
            err.to_string(),
            "failed to allocate entity: all 512 slots in use"
        );
    }
}
