//! The twirl evaluator and averaging aggregator.
//!
//! One twirl call runs the same evaluation once per group-element
//! combination:
//!
//! ```text
//!   base circuit → forward layer → noise channel → inverse layer → ⟨O⟩
//! ```
//!
//! and returns the unweighted arithmetic mean of the per-combination
//! expectation values. The engine owns ordering and parameter threading
//! only; execution belongs to the backend, and backend failures propagate
//! unchanged. All label validation happens before the first backend call,
//! so a malformed label never costs partial backend work.

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use tvinn_hal::Backend;
use tvinn_ir::{ChannelParams, Circuit, IrResult, Observable, QubitId};

use crate::combinations::Combinations;
use crate::error::{TwirlError, TwirlResult};
use crate::group::{ElementId, GroupKind, GroupTable};
use crate::layer::ConjugationLayers;

/// A noise channel collaborator.
///
/// The engine calls this once per evaluation circuit, forwarding the
/// channel parameters and wire list unchanged; the channel appends its
/// effect to the circuit. The engine never inspects the parameters.
pub trait NoiseChannel: Send + Sync {
    /// Append this channel's effect on `wires` to `circuit`.
    fn apply(
        &self,
        params: &ChannelParams,
        wires: &[QubitId],
        circuit: &mut Circuit,
    ) -> IrResult<()>;
}

impl<F> NoiseChannel for F
where
    F: Fn(&ChannelParams, &[QubitId], &mut Circuit) -> IrResult<()> + Send + Sync,
{
    fn apply(
        &self,
        params: &ChannelParams,
        wires: &[QubitId],
        circuit: &mut Circuit,
    ) -> IrResult<()> {
        self(params, wires, circuit)
    }
}

/// Tuning knobs for a twirl engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwirlOptions {
    /// Maximum number of in-flight evaluations in [`TwirlEngine::twirl_parallel`].
    pub concurrency: usize,
}

impl Default for TwirlOptions {
    fn default() -> Self {
        Self { concurrency: 8 }
    }
}

/// A group-twirling engine over a fixed qubit count.
///
/// Owns only its static group table and register size; observables,
/// combinations, and evaluation circuits are transient per call.
#[derive(Debug, Clone)]
pub struct TwirlEngine {
    table: GroupTable,
    num_qubits: usize,
    options: TwirlOptions,
}

impl TwirlEngine {
    /// A Pauli-twirling engine over `num_qubits` qubits (4^n combinations).
    pub fn pauli(num_qubits: usize) -> Self {
        Self {
            table: GroupTable::pauli(),
            num_qubits,
            options: TwirlOptions::default(),
        }
    }

    /// A Clifford-twirling engine over `num_qubits` qubits (24^n
    /// combinations — callers control n; nothing here truncates).
    pub fn clifford(num_qubits: usize) -> Self {
        Self {
            table: GroupTable::clifford(),
            num_qubits,
            options: TwirlOptions::default(),
        }
    }

    /// Replace the engine options.
    #[must_use]
    pub fn with_options(mut self, options: TwirlOptions) -> Self {
        self.options = options;
        self
    }

    /// The register size this engine twirls over.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Which group this engine averages over.
    pub fn group(&self) -> GroupKind {
        self.table.kind()
    }

    /// Number of combinations one twirl call evaluates, |G|^n.
    pub fn combination_count(&self) -> u128 {
        Combinations::new(&self.table, self.num_qubits).total()
    }

    /// Validate inputs before any backend work.
    fn validate(&self, measurement_label: &str) -> TwirlResult<Observable> {
        if self.num_qubits == 0 {
            return Err(TwirlError::EmptyCombinationSpace);
        }
        Ok(Observable::parse(measurement_label, self.num_qubits)?)
    }

    /// Evaluate one combination: assemble the circuit and ask the backend
    /// for the observable's expectation value.
    async fn evaluate<B, C, F>(
        &self,
        backend: &B,
        observable: &Observable,
        combination: &[ElementId],
        noise_channel: &C,
        channel_params: &ChannelParams,
        channel_wires: &[QubitId],
        base_circuit: &F,
    ) -> TwirlResult<f64>
    where
        B: Backend + ?Sized,
        C: NoiseChannel + ?Sized,
        F: Fn(&mut Circuit) -> IrResult<()>,
    {
        let layers = ConjugationLayers::build(&self.table, combination)?;

        let mut circuit = Circuit::new("twirl", self.num_qubits);
        base_circuit(&mut circuit)?;
        layers.apply_forward(&mut circuit)?;
        noise_channel.apply(channel_params, channel_wires, &mut circuit)?;
        layers.apply_inverse(&mut circuit)?;

        Ok(backend.expectation(&circuit, observable).await?)
    }

    /// Twirl the channel and return the noise-averaged expectation value.
    ///
    /// Evaluates every combination sequentially, one blocking backend call
    /// at a time — the reference behavior. See
    /// [`twirl_parallel`](Self::twirl_parallel) for the fan-out variant.
    ///
    /// # Errors
    ///
    /// Label validation errors surface before any backend call; backend,
    /// channel, and base-circuit failures propagate unchanged and abort
    /// the averaging pass.
    #[instrument(skip_all, fields(group = %self.group(), num_qubits = self.num_qubits, label = measurement_label))]
    pub async fn twirl<B, C, F>(
        &self,
        backend: &B,
        measurement_label: &str,
        noise_channel: &C,
        channel_params: &ChannelParams,
        channel_wires: &[QubitId],
        base_circuit: F,
    ) -> TwirlResult<f64>
    where
        B: Backend + ?Sized,
        C: NoiseChannel + ?Sized,
        F: Fn(&mut Circuit) -> IrResult<()>,
    {
        let observable = self.validate(measurement_label)?;
        debug!(
            combinations = %self.combination_count(),
            backend = backend.name(),
            "starting sequential twirl"
        );

        let mut values = Vec::new();
        for combination in Combinations::new(&self.table, self.num_qubits) {
            let value = self
                .evaluate(
                    backend,
                    &observable,
                    &combination,
                    noise_channel,
                    channel_params,
                    channel_wires,
                    &base_circuit,
                )
                .await?;
            values.push(value);
        }

        Ok(mean(&values))
    }

    /// Twirl with bounded concurrent evaluation.
    ///
    /// Combinations are independent — each builds its own circuit — so they
    /// fan out across up to [`TwirlOptions::concurrency`] in-flight backend
    /// calls. Completion order is irrelevant: values are collected first and
    /// summed once, so the mean matches the sequential path up to
    /// floating-point association.
    #[instrument(skip_all, fields(group = %self.group(), num_qubits = self.num_qubits, label = measurement_label))]
    pub async fn twirl_parallel<B, C, F>(
        &self,
        backend: &B,
        measurement_label: &str,
        noise_channel: &C,
        channel_params: &ChannelParams,
        channel_wires: &[QubitId],
        base_circuit: F,
    ) -> TwirlResult<f64>
    where
        B: Backend + ?Sized,
        C: NoiseChannel + ?Sized,
        F: Fn(&mut Circuit) -> IrResult<()> + Sync,
    {
        let observable = self.validate(measurement_label)?;
        let concurrency = self.options.concurrency.max(1);
        debug!(
            combinations = %self.combination_count(),
            backend = backend.name(),
            concurrency,
            "starting parallel twirl"
        );

        let observable = &observable;
        let base_circuit = &base_circuit;
        let values: Vec<f64> = stream::iter(Combinations::new(&self.table, self.num_qubits))
            .map(|combination| async move {
                self.evaluate(
                    backend,
                    observable,
                    &combination,
                    noise_channel,
                    channel_params,
                    channel_wires,
                    base_circuit,
                )
                .await
            })
            .buffer_unordered(concurrency)
            .try_collect()
            .await?;

        Ok(mean(&values))
    }
}

/// Unweighted arithmetic mean over the collected values.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
