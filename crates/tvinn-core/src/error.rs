//! Error types for the twirling engine.

use thiserror::Error;

use tvinn_hal::HalError;
use tvinn_ir::IrError;

use crate::group::{ElementId, GroupKind};

/// Errors that can occur in a twirl call.
///
/// IR validation failures and backend failures pass through transparently:
/// the engine adds no context of its own, because it has none to add.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TwirlError {
    /// Observable or circuit construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),

    /// A combination referenced an element id the table does not contain.
    ///
    /// Unreachable when combinations come from the table's own enumerator;
    /// reaching it indicates a programming error, not bad user input.
    #[error("Unknown group element {id} in {kind} table")]
    UnknownGroupElement {
        /// The group whose table was queried.
        kind: GroupKind,
        /// The id that failed to resolve.
        id: ElementId,
    },

    /// The engine was asked to average over zero qubits.
    #[error("Empty combination space: twirling requires at least one qubit")]
    EmptyCombinationSpace,

    /// Backend, channel, or base-circuit execution failed.
    #[error(transparent)]
    Backend(#[from] HalError),
}

/// Result type for twirling operations.
pub type TwirlResult<T> = Result<T, TwirlError>;
