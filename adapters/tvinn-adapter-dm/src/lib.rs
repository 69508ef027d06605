//! Tvinn local density-matrix simulator.
//!
//! This crate provides an exact mixed-state simulator backend for twirling
//! runs, tests, and small experiments. Unlike a statevector simulator it
//! executes noise-channel instructions natively, as Kraus sums on the full
//! density matrix, so twirled expectation values come out exact rather than
//! sampled.
//!
//! Memory grows as 16·4^n bytes for n qubits; the backend caps the register
//! size (12 qubits by default) and rejects larger circuits.
//!
//! # Example
//!
//! ```no_run
//! use tvinn_adapter_dm::DmBackend;
//! use tvinn_hal::Backend;
//! use tvinn_ir::{Circuit, NoiseModel, Observable, QubitId};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = DmBackend::new();
//!
//! let mut circuit = Circuit::new("noisy-bell", 2);
//! circuit.h(QubitId(0))?;
//! circuit.cx(QubitId(0), QubitId(1))?;
//! circuit.channel(NoiseModel::Depolarizing { p: 0.05 }, [QubitId(0)])?;
//!
//! let zz = Observable::parse("ZZ", 2)?;
//! let value = backend.expectation(&circuit, &zz).await?;
//! println!("⟨ZZ⟩ = {value}");
//! # Ok(())
//! # }
//! ```

mod backend;
mod density;

pub use backend::DmBackend;
pub use density::DensityMatrix;
