#![allow(dead_code)]

use alloy_primitives::{Address, I256, U256};
use anyhow::Context;
use dsa_harness::{
    deploy_and_enable_connector, init_tracing, ArtifactStore, Authority, CastReceipt,
    DeployRequest, DeployedConnector, DsaWallet, ForkedChain, HarnessConfig,
};
use dsa_spells::chains::EvmChain;
use dsa_spells::{ConnectorKind, ConnectorRegistry, Spell, SpellEncoder};

/// One forked network with the connectors a test has enabled so far.
pub struct Scenario {
    pub config: HarnessConfig,
    pub chain: ForkedChain,
    pub artifacts: ArtifactStore,
    pub registry: ConnectorRegistry,
}

impl Scenario {
    pub async fn fork(network: &'static EvmChain, block: u64) -> anyhow::Result<Self> {
        let config = HarnessConfig::load()?.with_network(network);
        init_tracing(&config)?;
        let chain = ForkedChain::spawn(&config, block)
            .await
            .with_context(|| format!("forking {} at {block}", network.network))?;
        Ok(Self {
            artifacts: config.artifacts(),
            config,
            chain,
            registry: ConnectorRegistry::builtin(),
        })
    }

    /// Deploy `kind`'s artifact, enable it as `name` and make the encoder see it.
    pub async fn enable(
        &mut self,
        name: &str,
        kind: ConnectorKind,
    ) -> anyhow::Result<DeployedConnector> {
        let request = DeployRequest::for_kind(name, kind);
        let deployed =
            deploy_and_enable_connector(&self.chain, &self.artifacts, &request, Authority::Master)
                .await
                .with_context(|| format!("enabling {name}"))?;
        let chain_id = self.chain.network.chain_id;
        let mut builder = self.registry.clone().into_builder();
        builder.register_kind(chain_id, name, kind)?;
        self.registry = builder.build();
        Ok(deployed)
    }

    pub fn encoder(&self) -> SpellEncoder<'_> {
        SpellEncoder::new(&self.registry, self.chain.network.chain_id)
    }

    /// A fresh DSA owned by wallet0.
    pub async fn build_dsa(&self) -> anyhow::Result<DsaWallet> {
        Ok(DsaWallet::build(&self.chain, self.chain.wallet0, Address::ZERO).await?)
    }

    /// Cast from the owner with wallet1 as origin and no value attached.
    pub async fn cast(&self, dsa: &DsaWallet, spells: Vec<Spell>) -> anyhow::Result<CastReceipt> {
        let batch = self.encoder().encode(&spells)?;
        Ok(dsa.cast(&self.chain, &batch, self.chain.wallet1, U256::ZERO).await?)
    }

    pub async fn eth_balance(&self, account: Address) -> anyhow::Result<U256> {
        Ok(self.chain.eth_balance(account).await?)
    }

    pub async fn token_balance(&self, token: Address, account: Address) -> anyhow::Result<U256> {
        Ok(self.chain.erc20_balance(token, account).await?)
    }
}

pub fn uint(dec: &str) -> U256 {
    dec.parse().expect("decimal uint256")
}

pub fn int(dec: &str) -> I256 {
    I256::from_dec_str(dec).expect("decimal int256")
}

/// `n` zero ids for the `*WithIds` helpers.
pub fn zero_ids(n: usize) -> Vec<U256> {
    vec![U256::ZERO; n]
}
