//! Forked-chain harness for DSA connector scenarios.
//!
//! This crate provides:
//! - Configuration from `.env`, `dsa.toml` and environment variables
//! - Anvil forks pinned at a block, with impersonation and funding helpers
//! - Hardhat artifact lookup and the connector deployment helper
//! - A DSA v2 account handle that builds accounts and casts spell batches

pub mod artifact;
pub mod config;
pub mod deploy;
pub mod dsa;
pub mod error;
pub mod fork;
pub mod telemetry;

pub use artifact::{ArtifactStore, ConnectorArtifact};
pub use config::HarnessConfig;
pub use deploy::{deploy_and_enable_connector, Authority, DeployRequest, DeployedConnector};
pub use dsa::{CastReceipt, DsaWallet};
pub use error::{HarnessError, Result};
pub use fork::ForkedChain;
pub use telemetry::init_tracing;
