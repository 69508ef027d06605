//! Density-matrix simulation engine.
//!
//! Holds the full d×d density matrix (d = 2^n) in row-major order, with
//! qubit 0 on the least significant index bit. Gates conjugate the matrix
//! (`ρ → UρU†`); channels apply their Kraus sum (`ρ → Σ KρK†`), which is
//! what lets this backend execute noise instructions exactly instead of
//! sampling trajectories.

use num_complex::Complex64;

use tvinn_ir::{
    Instruction, InstructionKind, Matrix2, Observable, PauliAxis, StandardGate,
};

/// A density matrix over `num_qubits` qubits.
pub struct DensityMatrix {
    /// Row-major d×d matrix entries.
    elems: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
    /// Matrix dimension, 2^num_qubits.
    dim: usize,
}

impl DensityMatrix {
    /// Create a new density matrix in the pure state |0...0⟩⟨0...0|.
    pub fn new(num_qubits: usize) -> Self {
        let dim = 1 << num_qubits;
        let mut elems = vec![Complex64::new(0.0, 0.0); dim * dim];
        elems[0] = Complex64::new(1.0, 0.0);
        Self {
            elems,
            num_qubits,
            dim,
        }
    }

    /// Number of qubits this matrix covers.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.elems[row * self.dim + col]
    }

    /// The trace of the matrix. Stays 1 under gates and trace-preserving
    /// channels.
    pub fn trace(&self) -> f64 {
        (0..self.dim).map(|k| self.get(k, k).re).sum()
    }

    /// Apply one circuit instruction.
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<usize> =
                    instruction.qubits.iter().map(|q| q.index()).collect();
                self.apply_gate(*gate, &qubits);
            }
            InstructionKind::Channel(model) => {
                let ops = model.kraus_operators();
                for qubit in &instruction.qubits {
                    self.apply_kraus(&ops, qubit.index());
                }
            }
        }
    }

    fn apply_gate(&mut self, gate: StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::I => {}
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            _ => {
                let u = gate
                    .matrix1q()
                    .expect("all remaining standard gates are single-qubit");
                self.apply_unitary1(&u, qubits[0]);
            }
        }
    }

    /// Conjugate by a single-qubit operator: `ρ → MρM†`. Does not require
    /// `M` to be unitary; the Kraus path reuses it per operator.
    fn apply_unitary1(&mut self, m: &Matrix2, qubit: usize) {
        let mask = 1usize << qubit;

        // Left multiplication: rows pair up on the qubit's bit.
        for col in 0..self.dim {
            for row0 in 0..self.dim {
                if row0 & mask != 0 {
                    continue;
                }
                let row1 = row0 | mask;
                let a = self.elems[row0 * self.dim + col];
                let b = self.elems[row1 * self.dim + col];
                self.elems[row0 * self.dim + col] = m[0][0] * a + m[0][1] * b;
                self.elems[row1 * self.dim + col] = m[1][0] * a + m[1][1] * b;
            }
        }

        // Right multiplication by M†: columns pair up, entries conjugated.
        for row in 0..self.dim {
            for col0 in 0..self.dim {
                if col0 & mask != 0 {
                    continue;
                }
                let col1 = col0 | mask;
                let a = self.elems[row * self.dim + col0];
                let b = self.elems[row * self.dim + col1];
                self.elems[row * self.dim + col0] = a * m[0][0].conj() + b * m[0][1].conj();
                self.elems[row * self.dim + col1] = a * m[1][0].conj() + b * m[1][1].conj();
            }
        }
    }

    /// CNOT conjugation is a basis permutation: flip the target bit of every
    /// index whose control bit is set, on both rows and columns.
    fn apply_cx(&mut self, control: usize, target: usize) {
        let cmask = 1usize << control;
        let tmask = 1usize << target;

        for col in 0..self.dim {
            for row in 0..self.dim {
                if row & cmask != 0 && row & tmask == 0 {
                    let other = row | tmask;
                    self.elems.swap(row * self.dim + col, other * self.dim + col);
                }
            }
        }
        for row in 0..self.dim {
            for col in 0..self.dim {
                if col & cmask != 0 && col & tmask == 0 {
                    let other = col | tmask;
                    self.elems.swap(row * self.dim + col, row * self.dim + other);
                }
            }
        }
    }

    /// CZ conjugation: sign flip on every row/column index with both bits
    /// set.
    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1usize << control) | (1usize << target);

        for row in 0..self.dim {
            for col in 0..self.dim {
                let mut sign = 1.0;
                if row & both == both {
                    sign = -sign;
                }
                if col & both == both {
                    sign = -sign;
                }
                if sign < 0.0 {
                    self.elems[row * self.dim + col] = -self.elems[row * self.dim + col];
                }
            }
        }
    }

    /// Apply a single-qubit channel given by its Kraus operators:
    /// `ρ → Σ_k K_k ρ K_k†`.
    pub fn apply_kraus(&mut self, ops: &[Matrix2], qubit: usize) {
        let original = self.elems.clone();
        let mut sum = vec![Complex64::new(0.0, 0.0); self.elems.len()];

        for op in ops {
            self.elems.copy_from_slice(&original);
            self.apply_unitary1(op, qubit);
            for (acc, term) in sum.iter_mut().zip(&self.elems) {
                *acc += term;
            }
        }
        self.elems = sum;
    }

    /// The expectation value `tr(Oρ)` of a Pauli-string observable.
    ///
    /// Pauli strings map each basis state to a single basis state with a
    /// phase, so the trace reduces to one matrix entry per row: with
    /// `O|k⟩ = c_k |m(k)⟩`, `tr(Oρ) = Σ_k c_k ρ[k][m(k)]`. The imaginary
    /// part cancels for Hermitian observables and valid states.
    pub fn expectation(&self, observable: &Observable) -> f64 {
        let mut total = Complex64::new(0.0, 0.0);
        for k in 0..self.dim {
            let mut target = k;
            let mut coeff = Complex64::new(1.0, 0.0);
            for factor in observable.factors() {
                let mask = 1usize << factor.qubit.index();
                match factor.axis {
                    PauliAxis::X => target ^= mask,
                    PauliAxis::Y => {
                        coeff *= if k & mask == 0 {
                            Complex64::new(0.0, 1.0)
                        } else {
                            Complex64::new(0.0, -1.0)
                        };
                        target ^= mask;
                    }
                    PauliAxis::Z => {
                        if k & mask != 0 {
                            coeff = -coeff;
                        }
                    }
                }
            }
            total += coeff * self.get(k, target);
        }
        total.re
    }
}
