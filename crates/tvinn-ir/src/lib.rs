//! Tvinn Circuit Intermediate Representation
//!
//! Core data structures for representing the circuits that the twirling
//! engine assembles and hands to a backend: qubits, gates, noise-channel
//! operations, tensor-product Pauli observables, and the circuit builder.
//!
//! # Overview
//!
//! A circuit here is an explicit, flat, ordered instruction list. The
//! twirling engine builds one circuit per group-element combination (base
//! circuit, forward conjugation layer, noise channel, inverse conjugation
//! layer), so the representation is optimized for cheap sequential
//! construction rather than graph analysis.
//!
//! # Core components
//!
//! - **Qubits**: [`QubitId`] for addressing the register
//! - **Gates**: [`StandardGate`] with adjoints and 2×2 unitaries
//! - **Channels**: [`NoiseModel`] (named CPTP maps + Kraus escape hatch)
//!   and [`ChannelParams`] (opaque scalar/structured channel payload)
//! - **Observables**: [`Observable`] parsed from per-qubit labels
//! - **Circuit**: [`Circuit`] builder over a fixed-size register
//!
//! # Example: a noisy measurement circuit
//!
//! ```rust
//! use tvinn_ir::{Circuit, NoiseModel, Observable, QubitId};
//!
//! let mut circuit = Circuit::new("damped", 2);
//! circuit.h(QubitId(0))?;
//! circuit.cx(QubitId(0), QubitId(1))?;
//! circuit.channel(NoiseModel::AmplitudeDamping { gamma: 0.1 }, [QubitId(0)])?;
//!
//! let observable = Observable::parse("ZZ", 2)?;
//! assert_eq!(observable.weight(), 2);
//! # Ok::<(), tvinn_ir::IrError>(())
//! ```

pub mod channel;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod observable;
pub mod qubit;

pub use channel::{ChannelParams, NoiseModel};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Matrix2, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use observable::{Observable, PauliAxis, PauliFactor};
pub use qubit::QubitId;
