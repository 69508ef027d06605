//! Per-qubit twirling group element tables.
//!
//! A [`GroupTable`] holds the finite set of single-qubit unitaries a twirl
//! averages over, each as an ordered `forward` gate sequence plus the
//! matching `inverse` sequence. Two tables exist: the Pauli group (4
//! elements, all self-inverse) and the 24-element single-qubit Clifford
//! group, whose elements are short compositions of {I, X, Y, Z, H, S}.
//!
//! Inverse sequences are never written by hand. They are derived
//! mechanically as the reverse of the forward sequence with each gate
//! replaced by its adjoint, and the table constructor then verifies the
//! round-trip law numerically for every element: the product of the two
//! sequence unitaries must be the identity up to global phase. A
//! transcription error in a hand-maintained dagger table would silently
//! skew every average; the verification turns that failure mode into a
//! loud construction-time panic.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use tvinn_ir::{Matrix2, StandardGate};

use StandardGate::{H, I, S, X, Y, Z};

/// Forward gate sequences for the 24 single-qubit Clifford elements, in
/// application order.
const CLIFFORD_FORWARD: [&[StandardGate]; 24] = [
    &[I],
    &[X],
    &[Y],
    &[Z],
    &[H],
    &[S],
    &[X, H],
    &[X, S],
    &[Y, H],
    &[Y, S],
    &[Z, H],
    &[Z, S],
    &[H, S],
    &[S, H],
    &[X, H, S],
    &[X, S, H],
    &[Y, H, S],
    &[Y, S, H],
    &[Z, H, S],
    &[Z, S, H],
    &[H, S, H],
    &[X, H, S, H],
    &[Y, H, S, H],
    &[Z, H, S, H],
];

/// The choice of per-qubit twirling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// The Pauli group {I, X, Y, Z}.
    Pauli,
    /// The 24-element single-qubit Clifford group (2-design).
    Clifford,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Pauli => write!(f, "pauli"),
            GroupKind::Clifford => write!(f, "clifford"),
        }
    }
}

/// Opaque identifier of one element within a group table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u8);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// One group element: an id plus its forward and inverse gate sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupElement {
    id: ElementId,
    forward: Vec<StandardGate>,
    inverse: Vec<StandardGate>,
}

impl GroupElement {
    fn new(id: ElementId, forward: Vec<StandardGate>) -> Self {
        let inverse = inverse_sequence(&forward);
        Self {
            id,
            forward,
            inverse,
        }
    }

    /// The element's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The gate sequence implementing this element, in application order.
    pub fn forward(&self) -> &[StandardGate] {
        &self.forward
    }

    /// The gate sequence implementing the element's group inverse, in
    /// application order.
    pub fn inverse(&self) -> &[StandardGate] {
        &self.inverse
    }
}

/// A validated table of per-qubit group elements.
#[derive(Debug, Clone)]
pub struct GroupTable {
    kind: GroupKind,
    elements: Vec<GroupElement>,
    index: FxHashMap<ElementId, usize>,
}

impl GroupTable {
    /// The Pauli group table: I, X, Y, Z, each its own inverse.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the round-trip verification. This cannot
    /// happen for the shipped table; the check exists to catch table edits.
    pub fn pauli() -> Self {
        let elements = [I, X, Y, Z]
            .into_iter()
            .enumerate()
            .map(|(i, gate)| GroupElement::new(ElementId(i as u8), vec![gate]))
            .collect();
        Self::validated(GroupKind::Pauli, elements)
    }

    /// The 24-element single-qubit Clifford table.
    ///
    /// Forward sequences are fixed; inverse sequences are derived as the
    /// reversed per-gate adjoint and verified at construction.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the round-trip verification. This cannot
    /// happen for the shipped table; the check exists to catch table edits.
    pub fn clifford() -> Self {
        let elements = CLIFFORD_FORWARD
            .into_iter()
            .enumerate()
            .map(|(i, seq)| GroupElement::new(ElementId(i as u8), seq.to_vec()))
            .collect();
        Self::validated(GroupKind::Clifford, elements)
    }

    fn validated(kind: GroupKind, elements: Vec<GroupElement>) -> Self {
        let mut index = FxHashMap::default();
        for (pos, element) in elements.iter().enumerate() {
            let round_trip = mat_mul(
                &sequence_unitary(&element.inverse),
                &sequence_unitary(&element.forward),
            );
            assert!(
                is_identity_up_to_phase(&round_trip),
                "{kind} table element {} violates the inverse law: \
                 forward {:?} then inverse {:?} is not the identity",
                element.id,
                element.forward,
                element.inverse,
            );
            let previous = index.insert(element.id, pos);
            assert!(
                previous.is_none(),
                "{kind} table contains duplicate element id {}",
                element.id,
            );
        }
        Self {
            kind,
            elements,
            index,
        }
    }

    /// Which group this table represents.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Number of elements (4 for Pauli, 24 for Clifford).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// A group table is never empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements in their fixed enumeration order.
    pub fn elements(&self) -> &[GroupElement] {
        &self.elements
    }

    /// The element ids in enumeration order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(GroupElement::id)
    }

    /// Look up an element by id.
    pub fn get(&self, id: ElementId) -> Option<&GroupElement> {
        self.index.get(&id).map(|&pos| &self.elements[pos])
    }
}

/// Derive the inverse of a gate sequence: reverse order, each gate replaced
/// by its adjoint.
fn inverse_sequence(forward: &[StandardGate]) -> Vec<StandardGate> {
    forward.iter().rev().map(StandardGate::adjoint).collect()
}

fn mat_mul(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[Complex64::new(0.0, 0.0); 2]; 2];
    for r in 0..2 {
        for c in 0..2 {
            for k in 0..2 {
                out[r][c] += a[r][k] * b[k][c];
            }
        }
    }
    out
}

/// The unitary of a gate sequence in application order: for `[g1, g2, ...]`
/// the matrix is `... · U(g2) · U(g1)`.
fn sequence_unitary(sequence: &[StandardGate]) -> Matrix2 {
    let identity = [
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
    ];
    sequence.iter().fold(identity, |acc, gate| {
        let u = gate
            .matrix1q()
            .expect("group tables contain only single-qubit gates");
        mat_mul(&u, &acc)
    })
}

fn is_identity_up_to_phase(m: &Matrix2) -> bool {
    const EPS: f64 = 1e-9;
    m[0][1].norm() < EPS
        && m[1][0].norm() < EPS
        && (m[0][0] - m[1][1]).norm() < EPS
        && (m[0][0].norm() - 1.0).abs() < EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(GroupTable::pauli().len(), 4);
        assert_eq!(GroupTable::clifford().len(), 24);
        assert!(!GroupTable::pauli().is_empty());
    }

    #[test]
    fn test_pauli_elements_self_inverse() {
        let table = GroupTable::pauli();
        for element in table.elements() {
            assert_eq!(element.forward(), element.inverse(), "{}", element.id());
            assert_eq!(element.forward().len(), 1);
        }
    }

    #[test]
    fn test_clifford_round_trip_law() {
        // Redundant with the constructor check, but states the law directly:
        // forward then inverse is the identity up to global phase, for all 24.
        let table = GroupTable::clifford();
        for element in table.elements() {
            let total = mat_mul(
                &sequence_unitary(element.inverse()),
                &sequence_unitary(element.forward()),
            );
            assert!(
                is_identity_up_to_phase(&total),
                "element {} fails round trip",
                element.id()
            );
        }
    }

    #[test]
    fn test_clifford_inverse_is_reversed_adjoint() {
        let table = GroupTable::clifford();
        // Element 12 is [H, S]; its inverse must be [Sdg, H].
        let element = table.get(ElementId(12)).unwrap();
        assert_eq!(element.forward(), &[StandardGate::H, StandardGate::S]);
        assert_eq!(element.inverse(), &[StandardGate::Sdg, StandardGate::H]);
    }

    #[test]
    fn test_lookup_by_id() {
        let table = GroupTable::clifford();
        assert!(table.get(ElementId(23)).is_some());
        assert!(table.get(ElementId(24)).is_none());

        let ids: Vec<u8> = table.element_ids().map(|id| id.0).collect();
        assert_eq!(ids, (0..24).collect::<Vec<u8>>());
    }

    #[test]
    fn test_identity_up_to_phase_accepts_global_phase() {
        let phase = Complex64::from_polar(1.0, 1.234);
        let zero = Complex64::new(0.0, 0.0);
        assert!(is_identity_up_to_phase(&[[phase, zero], [zero, phase]]));
        assert!(!is_identity_up_to_phase(&[[phase, zero], [zero, -phase]]));
    }

    #[test]
    fn test_sequence_unitary_composition_order() {
        // [X, H] applied in order is the matrix product H·X.
        let xh = sequence_unitary(&[StandardGate::X, StandardGate::H]);
        let h = StandardGate::H.matrix1q().unwrap();
        let x = StandardGate::X.matrix1q().unwrap();
        let expected = mat_mul(&h, &x);
        for r in 0..2 {
            for c in 0..2 {
                assert!((xh[r][c] - expected[r][c]).norm() < 1e-12);
            }
        }
    }
}
