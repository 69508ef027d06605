//! Tvinn core: group-twirling of noise channels.
//!
//! A twirl averages a noise channel over a finite per-qubit group by
//! conjugation: for every assignment of a group element to every qubit, the
//! engine builds one evaluation circuit (base circuit, forward layer,
//! channel, inverse layer), asks a [`tvinn_hal::Backend`] for the
//! observable's expectation value, and returns the arithmetic mean over all
//! |G|^n combinations. Two groups are supported: the Pauli group (|G| = 4)
//! and the 24-element single-qubit Clifford group, whose tensor products
//! approximate a unitary 2-design.
//!
//! ```no_run
//! use tvinn_core::TwirlEngine;
//! use tvinn_ir::{ChannelParams, Circuit, IrResult, NoiseModel, QubitId};
//!
//! # async fn demo(backend: &dyn tvinn_hal::Backend) -> tvinn_core::TwirlResult<()> {
//! let engine = TwirlEngine::clifford(2);
//! let mean = engine
//!     .twirl(
//!         backend,
//!         "ZI",
//!         &|_: &ChannelParams, wires: &[QubitId], circuit: &mut Circuit| -> IrResult<()> {
//!             circuit.channel(NoiseModel::Depolarizing { p: 0.1 }, wires.iter().copied())?;
//!             Ok(())
//!         },
//!         &ChannelParams::Scalar(0.1),
//!         &[QubitId(0)],
//!         |circuit| circuit.h(QubitId(0)).map(|_| ()),
//!     )
//!     .await?;
//! println!("twirled expectation: {mean}");
//! # Ok(())
//! # }
//! ```

pub mod combinations;
pub mod engine;
pub mod error;
pub mod group;
pub mod layer;

pub use combinations::Combinations;
pub use engine::{NoiseChannel, TwirlEngine, TwirlOptions};
pub use error::{TwirlError, TwirlResult};
pub use group::{ElementId, GroupElement, GroupKind, GroupTable};
pub use layer::ConjugationLayers;
