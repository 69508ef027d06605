//! Conjugation layer construction.
//!
//! Given one combination — an assignment of a group element to every qubit
//! — the builder emits two ordered operation lists: the forward layer
//! (applied before the noise channel) and the inverse layer (applied
//! after). The lists are plain values; nothing mutates a hidden circuit.

use tvinn_ir::{Circuit, IrResult, QubitId, StandardGate};

use crate::error::{TwirlError, TwirlResult};
use crate::group::{ElementId, GroupTable};

/// The pre- and post-channel gate layers for one combination.
///
/// Per-qubit sequences follow table order; qubits are emitted in increasing
/// index order. Sequences on distinct qubits are independent, so any
/// relative interleaving would be equally correct — a fixed order is kept
/// for reproducibility.
#[derive(Debug, Clone, PartialEq)]
pub struct ConjugationLayers {
    forward: Vec<(QubitId, StandardGate)>,
    inverse: Vec<(QubitId, StandardGate)>,
}

impl ConjugationLayers {
    /// Build the layers for `combination`, one element id per qubit.
    ///
    /// # Errors
    ///
    /// [`TwirlError::UnknownGroupElement`] if an id is not in the table.
    pub fn build(table: &GroupTable, combination: &[ElementId]) -> TwirlResult<Self> {
        let mut forward = Vec::new();
        let mut inverse = Vec::new();
        for (index, &id) in combination.iter().enumerate() {
            let element = table.get(id).ok_or(TwirlError::UnknownGroupElement {
                kind: table.kind(),
                id,
            })?;
            let qubit = QubitId::from(index);
            forward.extend(element.forward().iter().map(|&gate| (qubit, gate)));
            inverse.extend(element.inverse().iter().map(|&gate| (qubit, gate)));
        }
        Ok(Self { forward, inverse })
    }

    /// The pre-channel operations in application order.
    pub fn forward(&self) -> &[(QubitId, StandardGate)] {
        &self.forward
    }

    /// The post-channel operations in application order.
    pub fn inverse(&self) -> &[(QubitId, StandardGate)] {
        &self.inverse
    }

    /// Append the forward layer to a circuit.
    pub fn apply_forward(&self, circuit: &mut Circuit) -> IrResult<()> {
        for &(qubit, gate) in &self.forward {
            circuit.apply(gate, qubit)?;
        }
        Ok(())
    }

    /// Append the inverse layer to a circuit.
    pub fn apply_inverse(&self, circuit: &mut Circuit) -> IrResult<()> {
        for &(qubit, gate) in &self.inverse {
            circuit.apply(gate, qubit)?;
        }
        Ok(())
    }
}
