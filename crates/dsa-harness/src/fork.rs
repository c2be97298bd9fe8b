//! Anvil fork pinned at a block, with the two dev accounts funded.

use std::collections::HashSet;

use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_node_bindings::{Anvil, AnvilInstance};
use alloy_primitives::{Address, U256};
use alloy_provider::{
    ext::AnvilApi, DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder,
};
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use dsa_spells::chains::{DsaCore, EvmChain};
use dsa_spells::{erc20, tokens};
use rand::Rng;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};

const MAX_SPAWN_ATTEMPTS: usize = 20;
/// Forking has to fetch remote state before the node answers.
const SPAWN_TIMEOUT_MS: u64 = 60_000;
const DEV_BALANCE_ETHER: u64 = 10_000;

/// Gas money handed to impersonated token holders.
const HOLDER_GAS_ETHER: u64 = 10;

pub struct ForkedChain {
    anvil: AnvilInstance,
    pub network: &'static EvmChain,
    fork_url: String,
    block: u64,
    provider: DynProvider,
    /// Default signer; deploys, builds and casts.
    pub wallet0: Address,
    /// Second dev account, the `origin` of casts.
    pub wallet1: Address,
}

impl std::fmt::Debug for ForkedChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForkedChain")
            .field("network", &self.network.network)
            .field("block", &self.block)
            .field("endpoint", &self.anvil.endpoint())
            .field("wallet0", &self.wallet0)
            .field("wallet1", &self.wallet1)
            .finish()
    }
}

fn spawn_anvil(fork_url: &str, block: u64) -> Result<AnvilInstance> {
    let mut rng = rand::thread_rng();
    let mut attempted_ports = HashSet::new();
    let mut last_err = String::from("no attempt made");
    while attempted_ports.len() < MAX_SPAWN_ATTEMPTS {
        let port: u16 = rng.gen_range(49152..=65535);
        if !attempted_ports.insert(port) {
            continue;
        }
        match Anvil::new()
            .fork(fork_url)
            .fork_block_number(block)
            .port(port)
            .timeout(SPAWN_TIMEOUT_MS)
            .try_spawn()
        {
            Ok(instance) => return Ok(instance),
            Err(err) => {
                debug!(port, %err, "anvil spawn failed");
                last_err = err.to_string();
            }
        }
    }
    Err(HarnessError::NodeSpawn(format!(
        "{MAX_SPAWN_ATTEMPTS} attempts, last error: {last_err}"
    )))
}

impl ForkedChain {
    /// Fork the configured network at `block`.
    #[instrument(skip(config), fields(network = config.network.network))]
    pub async fn spawn(config: &HarnessConfig, block: u64) -> Result<Self> {
        let fork_url = config.fork_url()?;
        let anvil = spawn_anvil(&fork_url, block)?;

        let signer0 = config.signer(0)?;
        let signer1 = config.signer(1)?;
        let (wallet0, wallet1) = (signer0.address(), signer1.address());
        let mut wallet = EthereumWallet::from(signer0);
        wallet.register_signer(signer1);

        let provider = DynProvider::new(
            ProviderBuilder::new()
                .wallet(wallet)
                .connect_http(anvil.endpoint_url()),
        );

        let chain = Self {
            anvil,
            network: config.network,
            fork_url,
            block,
            provider,
            wallet0,
            wallet1,
        };
        chain.fund_dev_accounts().await?;
        info!(endpoint = %chain.anvil.endpoint(), "fork ready");
        Ok(chain)
    }

    async fn fund_dev_accounts(&self) -> Result<()> {
        for account in [self.wallet0, self.wallet1] {
            self.set_balance(account, tokens::ether(DEV_BALANCE_ETHER)).await?;
        }
        Ok(())
    }

    /// Re-fork in place at another block. All local state is discarded.
    #[instrument(skip(self))]
    pub async fn reset(&mut self, block: u64) -> Result<()> {
        let params = json!({
            "forking": {
                "jsonRpcUrl": self.fork_url,
                "blockNumber": block,
            }
        });
        self.provider
            .raw_request::<_, ()>("anvil_reset".into(), (params,))
            .await?;
        self.block = block;
        self.fund_dev_accounts().await
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn block(&self) -> u64 {
        self.block
    }

    pub fn dsa_core(&self) -> Result<DsaCore> {
        Ok(self.network.dsa_core()?)
    }

    /// Send from one of the dev accounts. `from` defaults to wallet0.
    pub async fn send(&self, tx: TransactionRequest) -> Result<TransactionReceipt> {
        let receipt = self.provider.send_transaction(tx).await?.get_receipt().await?;
        ensure_success(receipt, "transaction")
    }

    /// Send as an arbitrary account through Anvil impersonation.
    #[instrument(skip(self, tx))]
    pub async fn send_as(
        &self,
        from: Address,
        tx: TransactionRequest,
    ) -> Result<TransactionReceipt> {
        self.provider.anvil_impersonate_account(from).await?;
        let sent = self
            .provider
            .anvil_send_impersonated_transaction(tx.with_from(from))
            .await;
        let stopped = self.provider.anvil_stop_impersonating_account(from).await;
        let hash = sent?;
        stopped?;
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), hash)
            .get_receipt()
            .await?;
        ensure_success(receipt, "impersonated transaction")
    }

    pub async fn set_balance(&self, account: Address, amount: U256) -> Result<()> {
        self.provider.anvil_set_balance(account, amount).await?;
        Ok(())
    }

    /// Transfer native coin from wallet0.
    #[instrument(skip(self))]
    pub async fn fund_eth(&self, to: Address, amount: U256) -> Result<TransactionReceipt> {
        let tx = TransactionRequest::default()
            .with_from(self.wallet0)
            .with_to(to)
            .with_value(amount);
        self.send(tx).await
    }

    /// Move `amount` of `token` from an impersonated `holder` to `to`.
    #[instrument(skip(self))]
    pub async fn fund_erc20(
        &self,
        token: Address,
        holder: Address,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        self.set_balance(holder, tokens::ether(HOLDER_GAS_ETHER)).await?;
        let tx = TransactionRequest::default()
            .with_to(token)
            .with_input(erc20::encode_transfer(to, amount));
        self.send_as(holder, tx).await
    }

    pub async fn eth_balance(&self, account: Address) -> Result<U256> {
        Ok(self.provider.get_balance(account).await?)
    }

    pub async fn erc20_balance(&self, token: Address, owner: Address) -> Result<U256> {
        let tx = TransactionRequest::default()
            .with_to(token)
            .with_input(erc20::encode_balance_of(owner));
        let data = self.provider.call(tx).await?;
        Ok(erc20::decode_balance_of(&data)?)
    }
}

pub(crate) fn ensure_success(
    receipt: TransactionReceipt,
    what: &str,
) -> Result<TransactionReceipt> {
    if receipt.status() {
        debug!(tx = %receipt.transaction_hash, gas = receipt.gas_used, "{what} mined");
        Ok(receipt)
    } else {
        Err(HarnessError::Reverted {
            what: what.to_string(),
            tx: receipt.transaction_hash,
        })
    }
}
