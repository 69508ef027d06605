//! Tvinn Backend Abstraction Layer
//!
//! A unified interface for the devices that execute twirling evaluation
//! circuits: local simulators today, remote hardware handles tomorrow.
//!
//! # Overview
//!
//! - A common [`Backend`] trait: circuit + observable in, expectation
//!   value out
//! - [`Capabilities`] to describe register size and channel support
//! - [`BackendConfig`] for construction via [`BackendFactory`]
//! - Unified error handling via [`HalError`] / [`HalResult`]
//!
//! # Implementing a backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use tvinn_hal::{Backend, Capabilities, HalResult};
//! use tvinn_ir::{Circuit, Observable};
//!
//! struct MyBackend {
//!     capabilities: Capabilities,
//! }
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str { "my_backend" }
//!
//!     // Sync, infallible — capabilities cached at construction.
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     async fn expectation(&self, circuit: &Circuit, observable: &Observable) -> HalResult<f64> {
//!         // Execute and measure
//!         # todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
