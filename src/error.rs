//! Error types for round operations.

use thiserror::Error;

use crate::game::RoundState;

/// Errors that can occur when driving a round out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not valid in the current round state.
    #[error("operation requires the {required:?} state, but the round is {actual:?}")]
    InvalidState {
        /// The state the operation requires.
        required: RoundState,
        /// The state the round is actually in.
        actual: RoundState,
    },
}
