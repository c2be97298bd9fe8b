//! Spell toolkit for DSA v2 smart accounts.
//!
//! This crate provides:
//! - EVM network definitions with the DSA core contract addresses
//! - A per-chain registry of connector display names and artifacts
//! - Typed bindings for the Morpho Blue, Fluid, Spark, ether.fi and Basic connectors
//! - The spell encoder that turns a batch into `cast` arguments
//! - ERC-20 calldata helpers and a token address book

pub mod chains;
pub mod connectors;
pub mod erc20;
pub mod error;
pub mod registry;
pub mod spell;
pub mod tokens;
pub mod wallet;

pub use connectors::{ConnectorCall, ConnectorKind};
pub use error::SpellError;
pub use registry::{ConnectorRegistry, ConnectorRegistryBuilder, ConnectorRegistryEntry};
pub use spell::{DecodedSpell, EncodedSpellBatch, Spell, SpellCall, SpellEncoder};
