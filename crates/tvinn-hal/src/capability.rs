//! Backend capability introspection.
//!
//! Describes what an expectation-value backend can do: register size,
//! whether it executes noise-channel instructions natively, and whether it
//! is a simulator. The twirling engine never inspects capabilities itself —
//! callers use them to pick a backend that can hold |G|^n evaluation
//! circuits of the size they need.

use serde::{Deserialize, Serialize};

/// Hardware capabilities of an expectation-value backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Whether noise-channel instructions are executed natively.
    ///
    /// A backend without channel support must reject circuits containing
    /// channel instructions rather than silently skipping them.
    pub supports_channels: bool,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags (e.g. `"density_matrix"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a channel-capable simulator.
    pub fn simulator(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            supports_channels: true,
            is_simulator: true,
            features: vec![],
        }
    }

    /// Add a feature flag.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }
}
