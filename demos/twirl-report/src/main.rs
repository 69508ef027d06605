//! Twirl Report Demo
//!
//! Twirls a named noise channel over the Pauli or single-qubit Clifford
//! group on the local density-matrix simulator and prints the
//! noise-averaged expectation value next to the untwirled one.

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use tvinn_adapter_dm::DmBackend;
use tvinn_core::{TwirlEngine, TwirlOptions};
use tvinn_ir::{ChannelParams, Circuit, IrResult, NoiseModel, Observable, QubitId};

/// Twirl Report Demo
#[derive(Parser, Debug)]
#[command(name = "twirl_report")]
#[command(about = "Group-twirl a noise channel and report the averaged expectation value")]
struct Args {
    /// Twirling group: pauli or clifford
    #[arg(short, long, default_value = "clifford")]
    group: String,

    /// Number of qubits
    #[arg(short, long, default_value = "1")]
    qubits: usize,

    /// Channel: depolarizing, amplitude-damping, phase-damping, bit-flip, phase-flip
    #[arg(short, long, default_value = "amplitude-damping")]
    channel: String,

    /// Channel parameter (error probability or damping rate)
    #[arg(short, long, default_value = "0.25")]
    parameter: f64,

    /// Measurement label, one character per qubit (default: Z on every qubit)
    #[arg(short, long)]
    measurement: Option<String>,

    /// Evaluate combinations concurrently
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn channel_model(name: &str, parameter: f64) -> Result<NoiseModel> {
    Ok(match name {
        "depolarizing" => NoiseModel::Depolarizing { p: parameter },
        "amplitude-damping" => NoiseModel::AmplitudeDamping { gamma: parameter },
        "phase-damping" => NoiseModel::PhaseDamping { gamma: parameter },
        "bit-flip" => NoiseModel::BitFlip { p: parameter },
        "phase-flip" => NoiseModel::PhaseFlip { p: parameter },
        other => bail!("unknown channel '{other}'"),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let engine = match args.group.as_str() {
        "pauli" => TwirlEngine::pauli(args.qubits),
        "clifford" => TwirlEngine::clifford(args.qubits),
        other => bail!("unknown group '{other}'"),
    }
    .with_options(TwirlOptions { concurrency: 8 });

    let model = channel_model(&args.channel, args.parameter)?;
    let label = args
        .measurement
        .unwrap_or_else(|| "Z".repeat(args.qubits));
    let wires: Vec<QubitId> = (0..args.qubits as u32).map(QubitId).collect();

    let backend = DmBackend::new();
    info!(
        group = %engine.group(),
        qubits = args.qubits,
        channel = %model,
        combinations = %engine.combination_count(),
        "twirling"
    );

    let channel = {
        let model = model.clone();
        move |_: &ChannelParams, wires: &[QubitId], circuit: &mut Circuit| -> IrResult<()> {
            circuit.channel(model.clone(), wires.iter().copied())?;
            Ok(())
        }
    };
    let params = ChannelParams::Scalar(args.parameter);

    let twirled = if args.parallel {
        engine
            .twirl_parallel(&backend, &label, &channel, &params, &wires, |_| Ok(()))
            .await?
    } else {
        engine
            .twirl(&backend, &label, &channel, &params, &wires, |_| Ok(()))
            .await?
    };

    // Untwirled baseline: the bare channel on the ground state.
    let untwirled = {
        use tvinn_hal::Backend;
        let mut circuit = Circuit::new("baseline", args.qubits);
        circuit.channel(model, wires.iter().copied())?;
        let observable = Observable::parse(&label, args.qubits)?;
        backend.expectation(&circuit, &observable).await?
    };

    info!("untwirled ⟨{label}⟩ = {untwirled:+.6}");
    info!("twirled   ⟨{label}⟩ = {twirled:+.6}");
    Ok(())
}
