//! Per-chain map from connector display name to contract artifact.
//!
//! The display name is the identifier a DSA `cast` resolves through
//! `InstaConnectorsV2`; the artifact is the compiled contract behind it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chains::{AVALANCHE, BASE, MAINNET, POLYGON};
use crate::connectors::ConnectorKind;
use crate::error::SpellError;

/// One `(chain, display name) -> artifact` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorRegistryEntry {
    pub chain_id: u64,
    pub name: String,
    pub artifact: String,
}

impl ConnectorRegistryEntry {
    /// ABI binding for this entry's artifact, if the encoder has one.
    pub fn kind(&self) -> Option<ConnectorKind> {
        ConnectorKind::from_artifact(&self.artifact)
    }
}

const MAINNET_MAPPING: &[(&str, &str)] = &[
    ("1INCH-A", "ConnectV2OneInch"),
    ("1INCH-B", "ConnectV2OneProto"),
    ("AAVE-V1-A", "ConnectV2AaveV1"),
    ("AAVE-V2-A", "ConnectV2AaveV2"),
    ("AUTHORITY-A", "ConnectV2Auth"),
    ("BASIC-A", "ConnectV2Basic"),
    ("BASIC-D", "ConnectV2BasicERC4626"),
    ("COMP-A", "ConnectV2COMP"),
    ("COMPOUND-A", "ConnectV2Compound"),
    ("DYDX-A", "ConnectV2Dydx"),
    ("FEE-A", "ConnectV2Fee"),
    ("GELATO-A", "ConnectV2Gelato"),
    ("MAKERDAO-A", "ConnectV2Maker"),
    ("UNISWAP-A", "ConnectV2UniswapV2"),
];

const POLYGON_MAPPING: &[(&str, &str)] = &[
    ("QUICKSWAP-A", "ConnectV2Paraswap"),
    ("UniswapV3-v1", "ConnectV2UniswapV3Polygon"),
    ("Uniswap-V3-Staker-v1.1", "ConnectV2UniswapV3StakerPolygon"),
    ("Paraswap-v5", "ConnectV2ParaswapV5Polygon"),
    ("1INCH-V4", "ConnectV2OneInchV4Polygon"),
];

const AVALANCHE_MAPPING: &[(&str, &str)] = &[("ZEROEX-A", "ConnectV2ZeroExAvalanche")];

// Deployment lists registered under their artifact name.
const MAINNET_DEPLOYMENTS: &[&str] = &[
    "ConnectV2ZeroEx",
    "ConnectV2ApproveTokens",
    "ConnectV2Auth",
    "ConnectV2Basic",
    "ConnectV2BasicERC721",
    "ConnectV2BasicERC1155",
    "ConnectV2CompoundV3",
    "ConnectV2CompoundV3Rewards",
    "ConnectV2InstaDexSimulation",
    "ConnectV2DSASpell",
    "ConnectV2SwapAggregator",
    "ConnectV2UniswapV3",
    "ConnectV2UniswapV3AutoRouter",
    "ConnectV2UniswapV3Swap",
];

const BASE_DEPLOYMENTS: &[&str] = &[
    "ConnectV2ZeroExBase",
    "ConnectV2ApproveTokensBase",
    "ConnectV2AuthBase",
    "ConnectV2BasicBase",
    "ConnectV2BasicERC721Base",
    "ConnectV2BasicERC1155Base",
    "ConnectV2CompoundV3Base",
    "ConnectV2CompoundV3RewardsBase",
    "ConnectV2InstaDexSimulationBase",
    "ConnectV2DSASpellBase",
    "ConnectV2SwapAggregatorBase",
    "ConnectV2UniswapV3Base",
    "ConnectV2UniswapV3AutoRouterBase",
    "ConnectV2UniswapV3SwapBase",
];

/// Immutable connector lookup, keyed by chain then display name.
#[derive(Debug, Clone, Default)]
pub struct ConnectorRegistry {
    chains: BTreeMap<u64, BTreeMap<String, ConnectorRegistryEntry>>,
}

impl ConnectorRegistry {
    /// Registry holding the deployment tables for mainnet, polygon,
    /// avalanche and base.
    pub fn builtin() -> Self {
        let mut builder = ConnectorRegistryBuilder::default();
        for (chain_id, mapping) in [
            (MAINNET.chain_id, MAINNET_MAPPING),
            (POLYGON.chain_id, POLYGON_MAPPING),
            (AVALANCHE.chain_id, AVALANCHE_MAPPING),
        ] {
            for (name, artifact) in mapping {
                builder.insert(chain_id, name, artifact);
            }
        }
        for (chain_id, list) in [
            (MAINNET.chain_id, MAINNET_DEPLOYMENTS),
            (BASE.chain_id, BASE_DEPLOYMENTS),
        ] {
            for artifact in list {
                builder.insert(chain_id, artifact, artifact);
            }
        }
        builder.build()
    }

    pub fn builder() -> ConnectorRegistryBuilder {
        ConnectorRegistryBuilder::default()
    }

    /// Start a builder from this registry's entries.
    pub fn into_builder(self) -> ConnectorRegistryBuilder {
        ConnectorRegistryBuilder { chains: self.chains }
    }

    pub fn resolve(
        &self,
        chain_id: u64,
        name: &str,
    ) -> Result<&ConnectorRegistryEntry, SpellError> {
        self.chains
            .get(&chain_id)
            .and_then(|entries| entries.get(name))
            .ok_or_else(|| SpellError::UnknownConnector {
                chain_id,
                name: name.to_string(),
            })
    }

    /// Entries of one chain, ordered by display name.
    pub fn entries(&self, chain_id: u64) -> impl Iterator<Item = &ConnectorRegistryEntry> {
        self.chains.get(&chain_id).into_iter().flat_map(|entries| entries.values())
    }

    /// Every entry across all chains, ordered by chain id then display name.
    pub fn all_entries(&self) -> impl Iterator<Item = &ConnectorRegistryEntry> {
        self.chains.values().flat_map(|entries| entries.values())
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.chains.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.chains.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects entries before the registry is frozen.
#[derive(Debug, Default)]
pub struct ConnectorRegistryBuilder {
    chains: BTreeMap<u64, BTreeMap<String, ConnectorRegistryEntry>>,
}

impl ConnectorRegistryBuilder {
    /// Add a connector. A display name may only be registered once per chain.
    /// A rejected name leaves the builder unchanged.
    pub fn register(
        &mut self,
        chain_id: u64,
        name: impl Into<String>,
        artifact: impl Into<String>,
    ) -> Result<&mut Self, SpellError> {
        let name = name.into();
        let entries = self.chains.entry(chain_id).or_default();
        if entries.contains_key(&name) {
            return Err(SpellError::DuplicateConnector { chain_id, name });
        }
        entries.insert(
            name.clone(),
            ConnectorRegistryEntry {
                chain_id,
                name,
                artifact: artifact.into(),
            },
        );
        Ok(self)
    }

    /// Register a connector under the artifact name of a known ABI.
    pub fn register_kind(
        &mut self,
        chain_id: u64,
        name: impl Into<String>,
        kind: ConnectorKind,
    ) -> Result<&mut Self, SpellError> {
        self.register(chain_id, name, kind.artifact())
    }

    fn insert(&mut self, chain_id: u64, name: &str, artifact: &str) {
        self.chains.entry(chain_id).or_default().insert(
            name.to_string(),
            ConnectorRegistryEntry {
                chain_id,
                name: name.to_string(),
                artifact: artifact.to_string(),
            },
        );
    }

    pub fn build(self) -> ConnectorRegistry {
        ConnectorRegistry { chains: self.chains }
    }
}
