//! Noise channel models and channel parameters.
//!
//! A noise channel appears in a circuit as a first-class operation, not as
//! backend metadata: the twirling engine inserts its conjugation layers
//! around the channel, so the channel's position in the instruction stream
//! carries meaning. The models here cover the common single-qubit CPTP maps
//! plus a general [`NoiseModel::Kraus`] escape hatch.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::gate::Matrix2;

/// A noise channel model applied to one or more wires.
///
/// Named variants cover the standard single-qubit channels; `Kraus` carries
/// an explicit operator-sum representation for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NoiseModel {
    /// Depolarizing channel: applies X, Y or Z each with probability `p/3`.
    ///
    /// Fully mixing at `p = 3/4`; a Z expectation scales by `1 - 4p/3`.
    Depolarizing {
        /// Total error probability (0.0 to 1.0).
        p: f64,
    },

    /// Amplitude damping: models energy relaxation (T1 decay).
    AmplitudeDamping {
        /// Damping parameter (0.0 to 1.0).
        gamma: f64,
    },

    /// Phase damping: models dephasing (T2 decay without energy loss).
    PhaseDamping {
        /// Dephasing parameter (0.0 to 1.0).
        gamma: f64,
    },

    /// Bit-flip channel: applies X with probability `p`.
    BitFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// Phase-flip channel: applies Z with probability `p`.
    PhaseFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// General single-qubit channel given by explicit Kraus operators.
    Kraus {
        /// The Kraus operators, each a 2×2 matrix. Must satisfy
        /// Σ Kᵢ†Kᵢ = I for a trace-preserving channel.
        ops: Vec<Matrix2>,
    },
}

impl NoiseModel {
    /// The identity (no-op) channel.
    pub fn identity() -> Self {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        NoiseModel::Kraus {
            ops: vec![[[one, zero], [zero, one]]],
        }
    }

    /// Get a human-readable name for this noise model.
    pub fn name(&self) -> &'static str {
        match self {
            NoiseModel::Depolarizing { .. } => "depolarizing",
            NoiseModel::AmplitudeDamping { .. } => "amplitude_damping",
            NoiseModel::PhaseDamping { .. } => "phase_damping",
            NoiseModel::BitFlip { .. } => "bit_flip",
            NoiseModel::PhaseFlip { .. } => "phase_flip",
            NoiseModel::Kraus { .. } => "kraus",
        }
    }

    /// The Kraus operator-sum representation of this channel.
    pub fn kraus_operators(&self) -> Vec<Matrix2> {
        let zero = Complex64::new(0.0, 0.0);
        match self {
            NoiseModel::Depolarizing { p } => {
                let k0 = Complex64::new((1.0 - p).sqrt(), 0.0);
                let k = Complex64::new((p / 3.0).sqrt(), 0.0);
                let ik = Complex64::new(0.0, (p / 3.0).sqrt());
                vec![
                    [[k0, zero], [zero, k0]],
                    [[zero, k], [k, zero]],
                    [[zero, -ik], [ik, zero]],
                    [[k, zero], [zero, -k]],
                ]
            }
            NoiseModel::AmplitudeDamping { gamma } => {
                let keep = Complex64::new((1.0 - gamma).sqrt(), 0.0);
                let decay = Complex64::new(gamma.sqrt(), 0.0);
                vec![
                    [[Complex64::new(1.0, 0.0), zero], [zero, keep]],
                    [[zero, decay], [zero, zero]],
                ]
            }
            NoiseModel::PhaseDamping { gamma } => {
                let keep = Complex64::new((1.0 - gamma).sqrt(), 0.0);
                let dephase = Complex64::new(gamma.sqrt(), 0.0);
                vec![
                    [[Complex64::new(1.0, 0.0), zero], [zero, keep]],
                    [[zero, zero], [zero, dephase]],
                ]
            }
            NoiseModel::BitFlip { p } => {
                let k0 = Complex64::new((1.0 - p).sqrt(), 0.0);
                let k1 = Complex64::new(p.sqrt(), 0.0);
                vec![[[k0, zero], [zero, k0]], [[zero, k1], [k1, zero]]]
            }
            NoiseModel::PhaseFlip { p } => {
                let k0 = Complex64::new((1.0 - p).sqrt(), 0.0);
                let k1 = Complex64::new(p.sqrt(), 0.0);
                vec![[[k0, zero], [zero, k0]], [[k1, zero], [zero, -k1]]]
            }
            NoiseModel::Kraus { ops } => ops.clone(),
        }
    }
}

impl std::fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseModel::Depolarizing { p } => write!(f, "depolarizing(p={p:.4})"),
            NoiseModel::AmplitudeDamping { gamma } => {
                write!(f, "amplitude_damping(γ={gamma:.4})")
            }
            NoiseModel::PhaseDamping { gamma } => write!(f, "phase_damping(γ={gamma:.4})"),
            NoiseModel::BitFlip { p } => write!(f, "bit_flip(p={p:.4})"),
            NoiseModel::PhaseFlip { p } => write!(f, "phase_flip(p={p:.4})"),
            NoiseModel::Kraus { ops } => write!(f, "kraus({} ops)", ops.len()),
        }
    }
}

/// Parameters handed to a noise-channel callable.
///
/// The twirling engine never inspects the payload; it forwards it unchanged
/// to the channel, which knows what it expects. A scalar fits channels like
/// amplitude damping; a structured payload carries explicit Kraus operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelParams {
    /// A single scalar parameter (e.g. a damping rate or error probability).
    Scalar(f64),
    /// An ordered list of Kraus operators.
    Structured(Vec<Matrix2>),
}

impl ChannelParams {
    /// Get the scalar payload, if this is a scalar parameter.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ChannelParams::Scalar(v) => Some(*v),
            ChannelParams::Structured(_) => None,
        }
    }

    /// Get the structured payload, if this carries Kraus operators.
    pub fn as_structured(&self) -> Option<&[Matrix2]> {
        match self {
            ChannelParams::Scalar(_) => None,
            ChannelParams::Structured(ops) => Some(ops),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Σ Kᵢ†Kᵢ for a Kraus set.
    fn completeness_sum(ops: &[Matrix2]) -> Matrix2 {
        let mut sum = [[Complex64::new(0.0, 0.0); 2]; 2];
        for k in ops {
            for r in 0..2 {
                for c in 0..2 {
                    for m in 0..2 {
                        // (K† K)_{rc} = Σ_m conj(K_{mr}) K_{mc}
                        sum[r][c] += k[m][r].conj() * k[m][c];
                    }
                }
            }
        }
        sum
    }

    fn assert_trace_preserving(model: &NoiseModel) {
        let sum = completeness_sum(&model.kraus_operators());
        assert!((sum[0][0] - Complex64::new(1.0, 0.0)).norm() < 1e-12, "{model}");
        assert!((sum[1][1] - Complex64::new(1.0, 0.0)).norm() < 1e-12, "{model}");
        assert!(sum[0][1].norm() < 1e-12, "{model}");
        assert!(sum[1][0].norm() < 1e-12, "{model}");
    }

    #[test]
    fn test_named_channels_trace_preserving() {
        for model in [
            NoiseModel::Depolarizing { p: 0.3 },
            NoiseModel::AmplitudeDamping { gamma: 0.25 },
            NoiseModel::PhaseDamping { gamma: 0.5 },
            NoiseModel::BitFlip { p: 0.1 },
            NoiseModel::PhaseFlip { p: 0.8 },
            NoiseModel::identity(),
        ] {
            assert_trace_preserving(&model);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", NoiseModel::Depolarizing { p: 0.03 }),
            "depolarizing(p=0.0300)"
        );
        assert_eq!(format!("{}", NoiseModel::identity()), "kraus(1 ops)");
    }

    #[test]
    fn test_channel_params_accessors() {
        let scalar = ChannelParams::Scalar(0.1);
        assert_eq!(scalar.as_scalar(), Some(0.1));
        assert!(scalar.as_structured().is_none());

        let structured = ChannelParams::Structured(NoiseModel::identity().kraus_operators());
        assert!(structured.as_scalar().is_none());
        assert_eq!(structured.as_structured().unwrap().len(), 1);
    }
}
