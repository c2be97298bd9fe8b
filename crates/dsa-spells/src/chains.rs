use alloy_primitives::{address, Address};
use serde::Serialize;

use crate::error::SpellError;

/// Where a network's JSON-RPC endpoint lives.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum RpcEndpoint {
    /// Alchemy host; the API key is appended as `/v2/<key>`.
    Alchemy(&'static str),
    /// Keyless public endpoint.
    Public(&'static str),
}

/// Addresses of the external DSA core contracts on a network.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DsaCore {
    /// `InstaIndex`: builds accounts and exposes the `master()` signer.
    pub index: Address,
    /// `InstaConnectorsV2`: the on-chain connector registry.
    pub connectors_v2: Address,
}

/// Definition of an EVM network that connectors are deployed to.
#[derive(Debug, Clone, Serialize)]
pub struct EvmChain {
    pub chain_id: u64,
    /// Network key as used by deployment tooling and `networkType`.
    pub network: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub rpc: RpcEndpoint,
    pub explorer_url: &'static str,
    /// Fixed gas price used when broadcasting deployments, in wei.
    pub gas_price_wei: u128,
    pub dsa: Option<DsaCore>,
}

const GWEI: u128 = 1_000_000_000;

/// Ethereum Mainnet (chain ID 1).
pub const MAINNET: EvmChain = EvmChain {
    chain_id: 1,
    network: "mainnet",
    name: "Ethereum",
    symbol: "ETH",
    decimals: 18,
    rpc: RpcEndpoint::Alchemy("eth-mainnet.alchemyapi.io"),
    explorer_url: "https://etherscan.io",
    gas_price_wei: 71 * GWEI / 10,
    dsa: Some(DsaCore {
        index: address!("2971AdFa57b20E5a416aE5a708A8655A9c74f723"),
        connectors_v2: address!("97b0B3A8bDeFE8cB9563a3c610019Ad10DB8aD11"),
    }),
};

/// Polygon PoS (chain ID 137).
pub const POLYGON: EvmChain = EvmChain {
    chain_id: 137,
    network: "polygon",
    name: "Polygon",
    symbol: "MATIC",
    decimals: 18,
    rpc: RpcEndpoint::Alchemy("polygon-mainnet.g.alchemy.com"),
    explorer_url: "https://polygonscan.com",
    gas_price_wei: 1150 * GWEI,
    dsa: Some(DsaCore {
        index: address!("A9B99766E6C676Cf1975c0D3166F96C0848fF5ad"),
        connectors_v2: address!("2A00684bFAb9717C21271E0751BCcb7d2D763c88"),
    }),
};

/// Avalanche C-Chain (chain ID 43114).
pub const AVALANCHE: EvmChain = EvmChain {
    chain_id: 43114,
    network: "avalanche",
    name: "Avalanche C-Chain",
    symbol: "AVAX",
    decimals: 18,
    rpc: RpcEndpoint::Public("https://api.avax.network/ext/bc/C/rpc"),
    explorer_url: "https://snowtrace.io",
    gas_price_wei: 2 * GWEI,
    dsa: None,
};

/// Arbitrum One (chain ID 42161).
pub const ARBITRUM: EvmChain = EvmChain {
    chain_id: 42161,
    network: "arbitrum",
    name: "Arbitrum One",
    symbol: "ETH",
    decimals: 18,
    rpc: RpcEndpoint::Alchemy("arb-mainnet.g.alchemy.com"),
    explorer_url: "https://arbiscan.io",
    gas_price_wei: GWEI,
    dsa: None,
};

/// Optimism (chain ID 10).
pub const OPTIMISM: EvmChain = EvmChain {
    chain_id: 10,
    network: "optimism",
    name: "Optimism",
    symbol: "ETH",
    decimals: 18,
    rpc: RpcEndpoint::Alchemy("opt-mainnet.g.alchemy.com"),
    explorer_url: "https://optimistic.etherscan.io",
    gas_price_wei: GWEI / 100,
    dsa: None,
};

/// Fantom Opera (chain ID 250).
pub const FANTOM: EvmChain = EvmChain {
    chain_id: 250,
    network: "fantom",
    name: "Fantom Opera",
    symbol: "FTM",
    decimals: 18,
    rpc: RpcEndpoint::Public("https://rpc.ftm.tools/"),
    explorer_url: "https://ftmscan.com",
    gas_price_wei: 210 * GWEI,
    dsa: None,
};

/// Base (chain ID 8453).
pub const BASE: EvmChain = EvmChain {
    chain_id: 8453,
    network: "base",
    name: "Base",
    symbol: "ETH",
    decimals: 18,
    rpc: RpcEndpoint::Public("https://1rpc.io/base"),
    explorer_url: "https://basescan.org",
    gas_price_wei: GWEI / 2000,
    dsa: None,
};

/// Plasma (chain ID 9745).
pub const PLASMA: EvmChain = EvmChain {
    chain_id: 9745,
    network: "plasma",
    name: "Plasma",
    symbol: "XPL",
    decimals: 18,
    rpc: RpcEndpoint::Public("https://rpc.plasma.to"),
    explorer_url: "https://plasmascan.to",
    gas_price_wei: GWEI,
    dsa: None,
};

/// Local development node (chain ID 31337).
pub const LOCAL: EvmChain = EvmChain {
    chain_id: 31337,
    network: "hardhat",
    name: "Local",
    symbol: "ETH",
    decimals: 18,
    rpc: RpcEndpoint::Public("http://127.0.0.1:8545"),
    explorer_url: "",
    gas_price_wei: GWEI,
    dsa: None,
};

/// All supported networks.
const ALL_CHAINS: &[&EvmChain] = &[
    &MAINNET, &POLYGON, &AVALANCHE, &ARBITRUM, &OPTIMISM, &FANTOM, &BASE, &PLASMA, &LOCAL,
];

/// Returns the chain definition for a given chain ID, or `None` if unsupported.
pub fn get_chain(chain_id: u64) -> Option<&'static EvmChain> {
    ALL_CHAINS
        .iter()
        .find(|c| c.chain_id == chain_id)
        .copied()
}

/// Looks a chain up by its network key (`mainnet`, `polygon`, ...).
pub fn get_network(network: &str) -> Result<&'static EvmChain, SpellError> {
    ALL_CHAINS
        .iter()
        .find(|c| c.network.eq_ignore_ascii_case(network))
        .copied()
        .ok_or_else(|| SpellError::UnknownNetwork(network.to_string()))
}

/// Returns all supported chain definitions.
pub fn supported_chains() -> Vec<&'static EvmChain> {
    ALL_CHAINS.to_vec()
}

impl EvmChain {
    /// Builds the JSON-RPC URL for this network.
    ///
    /// Alchemy-backed networks require `alchemy_key`; public endpoints ignore it.
    pub fn rpc_url(&self, alchemy_key: Option<&str>) -> Result<String, SpellError> {
        match self.rpc {
            RpcEndpoint::Public(url) => Ok(url.to_string()),
            RpcEndpoint::Alchemy(host) => {
                let key = alchemy_key
                    .filter(|k| !k.is_empty())
                    .ok_or(SpellError::MissingRpcKey("ALCHEMY_API_KEY"))?;
                Ok(format!("https://{host}/v2/{key}"))
            }
        }
    }

    /// The DSA core contracts, or an error for networks without a known deployment.
    pub fn dsa_core(&self) -> Result<DsaCore, SpellError> {
        self.dsa.ok_or(SpellError::UnsupportedChain(self.chain_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_mainnet() {
        let chain = get_chain(1).expect("mainnet should be supported");
        assert_eq!(chain.network, "mainnet");
        assert_eq!(chain.symbol, "ETH");
        assert!(chain.dsa.is_some());
    }

    #[test]
    fn get_polygon_by_network() {
        let chain = get_network("polygon").unwrap();
        assert_eq!(chain.chain_id, 137);
        assert_eq!(chain.symbol, "MATIC");
    }

    #[test]
    fn network_lookup_ignores_case() {
        assert_eq!(get_network("Mainnet").unwrap().chain_id, 1);
    }

    #[test]
    fn unknown_network_errors() {
        assert!(matches!(
            get_network("solana"),
            Err(SpellError::UnknownNetwork(n)) if n == "solana"
        ));
    }

    #[test]
    fn unsupported_chain_returns_none() {
        assert!(get_chain(999999).is_none());
    }

    #[test]
    fn supported_chains_includes_all() {
        assert_eq!(supported_chains().len(), 9);
    }

    #[test]
    fn chain_ids_are_unique() {
        let chains = supported_chains();
        for (i, a) in chains.iter().enumerate() {
            for b in &chains[i + 1..] {
                assert_ne!(a.chain_id, b.chain_id, "{} and {} share an id", a.name, b.name);
            }
        }
    }

    #[test]
    fn gas_prices_match_deployment_config() {
        assert_eq!(MAINNET.gas_price_wei, 7_100_000_000);
        assert_eq!(POLYGON.gas_price_wei, 1_150_000_000_000);
        assert_eq!(OPTIMISM.gas_price_wei, 10_000_000);
        assert_eq!(BASE.gas_price_wei, 500_000);
    }

    #[test]
    fn alchemy_url_includes_key() {
        let url = POLYGON.rpc_url(Some("abc")).unwrap();
        assert_eq!(url, "https://polygon-mainnet.g.alchemy.com/v2/abc");
    }

    #[test]
    fn alchemy_url_requires_key() {
        assert!(matches!(
            MAINNET.rpc_url(None),
            Err(SpellError::MissingRpcKey("ALCHEMY_API_KEY"))
        ));
        assert!(MAINNET.rpc_url(Some("")).is_err());
    }

    #[test]
    fn public_url_ignores_key() {
        assert_eq!(BASE.rpc_url(None).unwrap(), "https://1rpc.io/base");
    }

    #[test]
    fn dsa_core_missing_on_fantom() {
        assert!(matches!(FANTOM.dsa_core(), Err(SpellError::UnsupportedChain(250))));
    }

    #[test]
    fn remote_chains_use_https() {
        for chain in supported_chains().into_iter().filter(|c| c.chain_id != LOCAL.chain_id) {
            if let RpcEndpoint::Public(url) = chain.rpc {
                assert!(url.starts_with("https://"), "{} rpc should be https", chain.name);
            }
        }
    }
}
