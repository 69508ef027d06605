//! Tensor-product Pauli observables.
//!
//! A measurement label like `"ZIX"` names one single-qubit Pauli operator
//! per qubit; identity positions are skipped. The parsed [`Observable`] is
//! the tensor product of the non-identity factors, in increasing qubit
//! order. Order is fixed so that every backend sees the same operator:
//! same-axis factors on distinct qubits commute, but reproducibility still
//! requires a deterministic composition order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// A single-qubit Pauli axis. Identity is not an axis: identity factors
/// never appear in an observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliAxis {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliAxis {
    /// The label character for this axis.
    pub fn label(&self) -> char {
        match self {
            PauliAxis::X => 'X',
            PauliAxis::Y => 'Y',
            PauliAxis::Z => 'Z',
        }
    }
}

/// One single-qubit Pauli factor of an observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliFactor {
    /// The qubit this factor acts on.
    pub qubit: QubitId,
    /// The Pauli axis.
    pub axis: PauliAxis,
}

/// A tensor-product Pauli observable over an n-qubit register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observable {
    num_qubits: usize,
    factors: Vec<PauliFactor>,
}

impl Observable {
    /// Parse a per-qubit measurement label into an observable.
    ///
    /// The label must have exactly `num_qubits` characters, each one of
    /// `I`, `X`, `Y`, `Z`. `I` means "not measured on this qubit".
    ///
    /// # Errors
    ///
    /// - [`IrError::LabelLengthMismatch`] if the label length differs from
    ///   `num_qubits`.
    /// - [`IrError::InvalidMeasurementLabel`] on any other character.
    /// - [`IrError::EmptyObservable`] if every position is `I`.
    pub fn parse(label: &str, num_qubits: usize) -> IrResult<Self> {
        let chars: Vec<char> = label.chars().collect();
        if chars.len() != num_qubits {
            return Err(IrError::LabelLengthMismatch {
                expected: num_qubits,
                got: chars.len(),
            });
        }

        let mut factors = Vec::new();
        for (position, ch) in chars.into_iter().enumerate() {
            let axis = match ch {
                'I' => continue,
                'X' => PauliAxis::X,
                'Y' => PauliAxis::Y,
                'Z' => PauliAxis::Z,
                _ => return Err(IrError::InvalidMeasurementLabel { ch, position }),
            };
            factors.push(PauliFactor {
                qubit: QubitId::from(position),
                axis,
            });
        }

        if factors.is_empty() {
            return Err(IrError::EmptyObservable);
        }

        Ok(Self {
            num_qubits,
            factors,
        })
    }

    /// Number of qubits in the register this observable is defined over.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The non-identity factors, in increasing qubit order.
    pub fn factors(&self) -> &[PauliFactor] {
        &self.factors
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.factors.len()
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut label = vec!['I'; self.num_qubits];
        for factor in &self.factors {
            label[factor.qubit.index()] = factor.axis.label();
        }
        for ch in label {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
