//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Measurement label contains a character outside {I, X, Y, Z}.
    #[error("Invalid measurement label: character '{ch}' at position {position} (expected one of I, X, Y, Z)")]
    InvalidMeasurementLabel {
        /// The offending character.
        ch: char,
        /// Zero-based position within the label string.
        position: usize,
    },

    /// Measurement label is all-identity: there is nothing to measure.
    #[error("Empty observable: measurement label contains no non-identity factor")]
    EmptyObservable,

    /// Measurement label length does not match the qubit count.
    #[error("Measurement label length mismatch: expected {expected} characters, got {got}")]
    LabelLengthMismatch {
        /// Expected label length (number of qubits).
        expected: usize,
        /// Actual label length.
        got: usize,
    },

    /// Qubit index is outside the circuit's register.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// The out-of-range qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: usize,
    },

    /// Gate applied with the wrong number of qubit operands.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit operand in a multi-qubit operation.
    #[error("Duplicate qubit {qubit} in operation '{gate_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
