//! End-to-end twirling scenarios against the density-matrix backend.
//!
//! These tests check the physics, not just the plumbing: twirling over the
//! single-qubit Clifford group projects any channel onto a depolarizing
//! channel with the same entanglement fidelity, and Pauli twirling projects
//! onto a Pauli channel. Both have closed-form expectation values we can
//! assert exactly.

use tvinn_adapter_dm::DmBackend;
use tvinn_core::{NoiseChannel, TwirlEngine, TwirlError, TwirlOptions};
use tvinn_ir::{ChannelParams, Circuit, IrError, IrResult, Matrix2, NoiseModel, QubitId};

/// Channel that appends one fixed noise model, ignoring the parameters.
struct FixedChannel(NoiseModel);

impl NoiseChannel for FixedChannel {
    fn apply(
        &self,
        _params: &ChannelParams,
        wires: &[QubitId],
        circuit: &mut Circuit,
    ) -> IrResult<()> {
        circuit.channel(self.0.clone(), wires.iter().copied())?;
        Ok(())
    }
}

/// Channel built from structured parameters: the Kraus operators arrive in
/// the parameter payload.
struct KrausChannel;

impl NoiseChannel for KrausChannel {
    fn apply(
        &self,
        params: &ChannelParams,
        wires: &[QubitId],
        circuit: &mut Circuit,
    ) -> IrResult<()> {
        let ops = params.as_structured().unwrap_or(&[]);
        circuit.channel(NoiseModel::Kraus { ops: ops.to_vec() }, wires.iter().copied())?;
        Ok(())
    }
}

fn noop(_: &mut Circuit) -> IrResult<()> {
    Ok(())
}

/// Kraus set of the fully depolarizing channel, {σ/2 for σ in I, X, Y, Z}.
fn fully_depolarizing_ops() -> Vec<Matrix2> {
    use num_complex::Complex64;
    let h = Complex64::new(0.5, 0.0);
    let ih = Complex64::new(0.0, 0.5);
    let z = Complex64::new(0.0, 0.0);
    vec![
        [[h, z], [z, h]],
        [[z, h], [h, z]],
        [[z, -ih], [ih, z]],
        [[h, z], [z, -h]],
    ]
}

#[tokio::test]
async fn identity_channel_twirls_to_one() {
    let backend = DmBackend::new();
    let channel = FixedChannel(NoiseModel::identity());
    let params = ChannelParams::Scalar(0.0);

    for engine in [TwirlEngine::pauli(1), TwirlEngine::clifford(1)] {
        let mean = engine
            .twirl(&backend, "Z", &channel, &params, &[QubitId(0)], noop)
            .await
            .unwrap();
        // Forward and inverse layers cancel around a no-op channel.
        assert!((mean - 1.0).abs() < 1e-9, "group {}", engine.group());
    }
}

#[tokio::test]
async fn fully_depolarizing_channel_twirls_to_zero() {
    let backend = DmBackend::new();
    let params = ChannelParams::Structured(fully_depolarizing_ops());

    for engine in [TwirlEngine::pauli(1), TwirlEngine::clifford(1)] {
        let mean = engine
            .twirl(&backend, "Z", &KrausChannel, &params, &[QubitId(0)], noop)
            .await
            .unwrap();
        assert!(mean.abs() < 1e-9, "group {}", engine.group());
    }
}

#[tokio::test]
async fn pauli_twirl_fixes_depolarizing_channel() {
    // Depolarizing noise is already a Pauli channel, so Pauli twirling must
    // not change it: ⟨X⟩ on |+⟩ stays (1 - 4p/3) with and without the twirl.
    let p = 0.3;
    let backend = DmBackend::new();
    let base = |circuit: &mut Circuit| circuit.h(QubitId(0)).map(|_| ());

    let mut direct = Circuit::new("direct", 1);
    base(&mut direct).unwrap();
    direct
        .channel(NoiseModel::Depolarizing { p }, [QubitId(0)])
        .unwrap();
    let untwirled = {
        use tvinn_hal::Backend;
        let x = tvinn_ir::Observable::parse("X", 1).unwrap();
        backend.expectation(&direct, &x).await.unwrap()
    };

    let twirled = TwirlEngine::pauli(1)
        .twirl(
            &backend,
            "X",
            &FixedChannel(NoiseModel::Depolarizing { p }),
            &ChannelParams::Scalar(p),
            &[QubitId(0)],
            base,
        )
        .await
        .unwrap();

    assert!((untwirled - (1.0 - 4.0 * p / 3.0)).abs() < 1e-9);
    assert!((twirled - untwirled).abs() < 1e-9);
}

#[tokio::test]
async fn pauli_twirl_of_amplitude_damping() {
    // Pauli-twirled amplitude damping on |0⟩ has ⟨Z⟩ = 1 - γ: the I and Z
    // conjugations leave |0⟩ fixed (value 1), the X and Y conjugations send
    // it through the excited state (value 1 - 2γ).
    let gamma = 0.5;
    let backend = DmBackend::new();
    let mean = TwirlEngine::pauli(1)
        .twirl(
            &backend,
            "Z",
            &FixedChannel(NoiseModel::AmplitudeDamping { gamma }),
            &ChannelParams::Scalar(gamma),
            &[QubitId(0)],
            noop,
        )
        .await
        .unwrap();
    assert!((mean - (1.0 - gamma)).abs() < 1e-9);
}

#[tokio::test]
async fn clifford_twirl_projects_onto_depolarizing() {
    // The 24-element Clifford group is a unitary 2-design: twirling any
    // channel yields a depolarizing channel with the same entanglement
    // fidelity F = |tr(K₀)/2|². For amplitude damping with γ = 3/4 the
    // depolarizing parameter is (4F - 1)/3 = 5/12, which is exactly ⟨Z⟩ on
    // the twirled ground state.
    let gamma = 0.75;
    let backend = DmBackend::new();
    let mean = TwirlEngine::clifford(1)
        .twirl(
            &backend,
            "Z",
            &FixedChannel(NoiseModel::AmplitudeDamping { gamma }),
            &ChannelParams::Scalar(gamma),
            &[QubitId(0)],
            noop,
        )
        .await
        .unwrap();

    let fidelity = ((1.0 + (1.0 - gamma).sqrt()) / 2.0).powi(2);
    let expected = (4.0 * fidelity - 1.0) / 3.0;
    assert!((expected - 5.0 / 12.0).abs() < 1e-12);
    assert!((mean - expected).abs() < 1e-9);
}

#[tokio::test]
async fn parallel_twirl_matches_sequential_on_simulator() {
    let backend = DmBackend::new();
    let engine = TwirlEngine::pauli(2).with_options(TwirlOptions { concurrency: 4 });
    let channel = FixedChannel(NoiseModel::PhaseFlip { p: 0.2 });
    let params = ChannelParams::Scalar(0.2);
    let base = |circuit: &mut Circuit| {
        circuit.h(QubitId(0))?;
        circuit.cx(QubitId(0), QubitId(1))?;
        Ok(())
    };

    let sequential = engine
        .twirl(&backend, "ZZ", &channel, &params, &[QubitId(0)], base)
        .await
        .unwrap();
    let parallel = engine
        .twirl_parallel(&backend, "ZZ", &channel, &params, &[QubitId(0)], base)
        .await
        .unwrap();
    assert!((sequential - parallel).abs() < 1e-9);
}

#[tokio::test]
async fn label_errors_surface_before_execution() {
    let backend = DmBackend::new();
    let engine = TwirlEngine::clifford(2);
    let channel = FixedChannel(NoiseModel::identity());
    let params = ChannelParams::Scalar(0.0);

    let err = engine
        .twirl(&backend, "Z", &channel, &params, &[QubitId(0)], noop)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TwirlError::Ir(IrError::LabelLengthMismatch {
            expected: 2,
            got: 1
        })
    ));
}
