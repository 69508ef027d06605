//! Quantum gate types.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A 2×2 complex matrix in row-major order.
///
/// Used for single-qubit gate unitaries and Kraus operators.
pub type Matrix2 = [[Complex64; 2]; 2];

/// Standard gates with known semantics.
///
/// The set is deliberately lean: the Pauli and Clifford primitives that the
/// twirling group tables compose, plus rotations and the two-qubit
/// entanglers that user base circuits need for state preparation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX | StandardGate::CZ => 2,
            _ => 1,
        }
    }

    /// The adjoint (conjugate transpose) of this gate.
    ///
    /// Every gate here is its own adjoint except the phase gates: S and Sdg
    /// swap, and rotations negate their angle.
    pub fn adjoint(&self) -> StandardGate {
        match *self {
            StandardGate::S => StandardGate::Sdg,
            StandardGate::Sdg => StandardGate::S,
            StandardGate::Rx(theta) => StandardGate::Rx(-theta),
            StandardGate::Ry(theta) => StandardGate::Ry(-theta),
            StandardGate::Rz(theta) => StandardGate::Rz(-theta),
            g => g,
        }
    }

    /// The 2×2 unitary of a single-qubit gate, or `None` for two-qubit gates.
    pub fn matrix1q(&self) -> Option<Matrix2> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        let m = match *self {
            StandardGate::I => [[one, zero], [zero, one]],
            StandardGate::X => [[zero, one], [one, zero]],
            StandardGate::Y => [[zero, -i], [i, zero]],
            StandardGate::Z => [[one, zero], [zero, -one]],
            StandardGate::H => {
                let h = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            StandardGate::S => [[one, zero], [zero, i]],
            StandardGate::Sdg => [[one, zero], [zero, -i]],
            StandardGate::Rx(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, -(theta / 2.0).sin());
                [[c, s], [s, c]]
            }
            StandardGate::Ry(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new((theta / 2.0).sin(), 0.0);
                [[c, -s], [s, c]]
            }
            StandardGate::Rz(theta) => {
                let p0 = Complex64::from_polar(1.0, -theta / 2.0);
                let p1 = Complex64::from_polar(1.0, theta / 2.0);
                [[p0, zero], [zero, p1]]
            }
            StandardGate::CX | StandardGate::CZ => return None,
        };
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
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

    #[test]
    fn test_gate_properties() {
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert!(StandardGate::CX.matrix1q().is_none());
    }

    #[test]
    fn test_adjoint_pairs() {
        assert_eq!(StandardGate::S.adjoint(), StandardGate::Sdg);
        assert_eq!(StandardGate::Sdg.adjoint(), StandardGate::S);
        assert_eq!(StandardGate::H.adjoint(), StandardGate::H);
        assert_eq!(StandardGate::Rx(0.3).adjoint(), StandardGate::Rx(-0.3));
    }

    #[test]
    fn test_adjoint_matrix_law() {
        // For every single-qubit gate, g · g.adjoint() must be the identity.
        let gates = [
            StandardGate::I,
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::H,
            StandardGate::S,
            StandardGate::Sdg,
            StandardGate::Rx(0.7),
            StandardGate::Ry(-1.2),
            StandardGate::Rz(2.5),
        ];
        for g in gates {
            let u = g.matrix1q().unwrap();
            let udg = g.adjoint().matrix1q().unwrap();
            let prod = mat_mul(&u, &udg);
            assert!(approx_eq(prod[0][0], Complex64::new(1.0, 0.0)), "{g:?}");
            assert!(approx_eq(prod[1][1], Complex64::new(1.0, 0.0)), "{g:?}");
            assert!(approx_eq(prod[0][1], Complex64::new(0.0, 0.0)), "{g:?}");
            assert!(approx_eq(prod[1][0], Complex64::new(0.0, 0.0)), "{g:?}");
        }
    }

    #[test]
    fn test_s_squared_is_z() {
        let s = StandardGate::S.matrix1q().unwrap();
        let z = StandardGate::Z.matrix1q().unwrap();
        let ss = mat_mul(&s, &s);
        for r in 0..2 {
            for c in 0..2 {
                assert!(approx_eq(ss[r][c], z[r][c]));
            }
        }
    }
}
