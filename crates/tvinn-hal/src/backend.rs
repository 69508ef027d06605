//! Backend trait and configuration.
//!
//! The [`Backend`] trait is the engine's only outward surface: a circuit
//! description goes in, one expectation value comes out.
//!
//! ```text
//!   capabilities() ──→ expectation()
//!    (sync, &ref)        (async)
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: execution may go to a remote device; the call is
//!   async even though local simulators complete immediately.
//! - **Thread-safe**: `Send + Sync` bound enables the engine's parallel
//!   fan-out over combinations.
//! - **No retry, no wrapping**: a backend failure propagates to the caller
//!   unchanged. The engine has no domain knowledge to recover with.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   cached at construction time.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tvinn_ir::{Circuit, Observable};

use crate::capability::Capabilities;
use crate::error::HalResult;

/// Configuration for a backend instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Trait for expectation-value backends.
///
/// A backend executes one circuit — gates and noise channels, in order —
/// and returns the expectation value of a Pauli observable on the final
/// state.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible; implementations
///   cache capabilities at construction time and return a reference.
/// - `expectation()` MUST NOT mutate state observable across calls:
///   repeated evaluation of the same circuit yields the same value (up to
///   device noise on real hardware).
/// - Errors MUST be returned as-is; backends do not retry internally.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Execute the circuit and return the expectation value of `observable`
    /// on the resulting state.
    async fn expectation(&self, circuit: &Circuit, observable: &Observable) -> HalResult<f64>;
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvinn_ir::QubitId;

    struct EchoBackend {
        capabilities: Capabilities,
    }

    #[async_trait]
    impl Backend for EchoBackend {
        fn name(&self) -> &str {
            "echo"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.capabilities
        }

        async fn expectation(
            &self,
            circuit: &Circuit,
            observable: &Observable,
        ) -> HalResult<f64> {
            Ok((circuit.len() + observable.weight()) as f64)
        }
    }

    #[tokio::test]
    async fn test_backend_contract_through_trait_object() {
        let backend = EchoBackend {
            capabilities: Capabilities::simulator("echo", 4),
        };
        let backend: &dyn Backend = &backend;
        assert_eq!(backend.name(), "echo");
        assert!(backend.capabilities().is_simulator);

        let mut circuit = Circuit::new("echo", 2);
        circuit.h(QubitId(0)).unwrap();
        let observable = Observable::parse("ZZ", 2).unwrap();

        let value = backend.expectation(&circuit, &observable).await.unwrap();
        assert_eq!(value, 3.0);
    }

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test").with_extra("max_qubits", serde_json::json!(10));
        assert_eq!(config.name, "test");
        assert!(config.extra.contains_key("max_qubits"));
        assert_eq!(format!("{config}"), "test");
    }

    #[test]
    fn test_backend_config_flatten() {
        let config = BackendConfig::new("dm").with_extra("max_qubits", serde_json::json!(6));
        let json = serde_json::to_value(&config).unwrap();
        // Extra keys flatten to the top level.
        assert_eq!(json["name"], "dm");
        assert_eq!(json["max_qubits"], 6);
    }
}
