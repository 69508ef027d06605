//! Density-matrix backend implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use tvinn_hal::{Backend, BackendConfig, BackendFactory, Capabilities, HalError, HalResult};
use tvinn_ir::{Circuit, Observable};

use crate::density::DensityMatrix;

/// Default register size cap. A d×d complex matrix costs 16·4^n bytes, so 12
/// qubits is already 256 MiB.
const DEFAULT_MAX_QUBITS: usize = 12;

/// A local density-matrix simulator backend.
///
/// Executes circuits exactly, including noise-channel instructions, and
/// computes expectation values from the final mixed state. Intended for
/// twirling runs and tests at small register sizes.
pub struct DmBackend {
    config: BackendConfig,
    capabilities: Capabilities,
    max_qubits: usize,
}

impl DmBackend {
    /// Create a backend with the default qubit cap.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a backend capped at `max_qubits`.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self {
            config: BackendConfig::new("dm"),
            capabilities: Capabilities::simulator("dm", max_qubits as u32)
                .with_feature("density_matrix"),
            max_qubits,
        }
    }

    /// Run one circuit to its final state and measure the observable.
    fn run(circuit: &Circuit, observable: &Observable) -> HalResult<f64> {
        if observable.num_qubits() != circuit.num_qubits() {
            return Err(HalError::InvalidCircuit(format!(
                "observable covers {} qubits but circuit has {}",
                observable.num_qubits(),
                circuit.num_qubits()
            )));
        }

        let mut dm = DensityMatrix::new(circuit.num_qubits());
        for instruction in circuit.instructions() {
            dm.apply(instruction);
        }
        Ok(dm.expectation(observable))
    }
}

impl Default for DmBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for DmBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(skip_all, fields(circuit = circuit.name(), qubits = circuit.num_qubits()))]
    async fn expectation(&self, circuit: &Circuit, observable: &Observable) -> HalResult<f64> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "{} qubits exceeds the {}-qubit cap",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        debug!(instructions = circuit.len(), "simulating density matrix");

        // The simulation is pure CPU work; keep it off the async executor.
        let circuit = circuit.clone();
        let observable = observable.clone();
        tokio::task::spawn_blocking(move || Self::run(&circuit, &observable))
            .await
            .map_err(|e| HalError::Backend(format!("simulation task failed: {e}")))?
    }
}

impl BackendFactory for DmBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = match config.extra.get("max_qubits") {
            None => DEFAULT_MAX_QUBITS,
            Some(value) => value
                .as_u64()
                .map(|v| v as usize)
                .ok_or_else(|| {
                    HalError::Configuration(format!(
                        "max_qubits must be a positive integer, got {value}"
                    ))
                })?,
        };
        Ok(Self::with_max_qubits(max_qubits))
    }
}
