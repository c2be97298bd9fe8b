//! DSA core contracts and a handle to one DSA v2 account.

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use alloy_sol_types::{sol, SolEvent};
use dsa_spells::wallet::LogCast;
use dsa_spells::EncodedSpellBatch;
use tracing::{info, instrument};

use crate::error::{HarnessError, Result};
use crate::fork::ForkedChain;

sol! {
    #[sol(rpc)]
    interface InstaIndex {
        event LogAccountCreated(
            address sender,
            address indexed owner,
            address indexed account,
            address indexed origin
        );

        function master() external view returns (address);
        function build(address owner, uint256 accountVersion, address origin)
            external returns (address account);
    }

    #[sol(rpc)]
    interface InstaConnectorsV2 {
        function addConnectors(string[] names, address[] connectors) external;
        function isConnectors(string[] names)
            external view returns (bool isOk, address[] addresses);
    }
}

/// Account implementation version built by [`DsaWallet::build`].
pub const DSA_V2: u64 = 2;

/// Fixed so a reverting cast is mined and reported instead of failing estimation.
const CAST_GAS_LIMIT: u64 = 15_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsaWallet {
    pub address: Address,
    pub owner: Address,
}

/// Outcome of a successful `cast`.
#[derive(Debug, Clone)]
pub struct CastReceipt {
    pub receipt: TransactionReceipt,
    /// Event names the connectors returned, in spell order.
    pub event_names: Vec<String>,
    /// ABI-encoded params of each event, parallel to `event_names`.
    pub event_params: Vec<Bytes>,
}

impl DsaWallet {
    /// Build a v2 account for `owner` through `InstaIndex`. Sent from wallet0.
    #[instrument(skip(chain))]
    pub async fn build(chain: &ForkedChain, owner: Address, origin: Address) -> Result<Self> {
        let index = InstaIndex::new(chain.dsa_core()?.index, chain.provider().clone());
        let tx = index
            .build(owner, U256::from(DSA_V2), origin)
            .into_transaction_request()
            .with_from(chain.wallet0);
        let receipt = chain.send(tx).await?;

        let created = receipt
            .inner
            .logs()
            .iter()
            .find_map(|log| InstaIndex::LogAccountCreated::decode_log(&log.inner).ok())
            .ok_or(HarnessError::MissingEvent("LogAccountCreated"))?;
        info!(account = %created.data.account, "built DSA");
        Ok(Self {
            address: created.data.account,
            owner,
        })
    }

    /// Cast an encoded batch, attaching `value` wei. Sent from the owner.
    #[instrument(skip(self, chain, batch), fields(dsa = %self.address, spells = batch.len()))]
    pub async fn cast(
        &self,
        chain: &ForkedChain,
        batch: &EncodedSpellBatch,
        origin: Address,
        value: U256,
    ) -> Result<CastReceipt> {
        let tx = TransactionRequest::default()
            .with_from(self.owner)
            .with_to(self.address)
            .with_input(batch.cast_calldata(origin))
            .with_value(value)
            .with_gas_limit(CAST_GAS_LIMIT);
        let receipt = chain
            .send(tx)
            .await
            .map_err(|err| match err {
                HarnessError::Reverted { tx, .. } => HarnessError::Reverted {
                    what: format!("cast [{}]", batch.targets.join(", ")),
                    tx,
                },
                other => other,
            })?;
        let (event_names, event_params) = cast_events(&receipt, self.address);
        info!(tx = %receipt.transaction_hash, events = ?event_names, "cast");
        Ok(CastReceipt {
            receipt,
            event_names,
            event_params,
        })
    }
}

fn cast_events(receipt: &TransactionReceipt, dsa: Address) -> (Vec<String>, Vec<Bytes>) {
    let mut names = Vec::new();
    let mut params = Vec::new();
    for log in receipt.inner.logs().iter().filter(|log| log.address() == dsa) {
        if let Ok(cast) = LogCast::decode_log(&log.inner) {
            names.extend(cast.data.eventNames);
            params.extend(cast.data.eventParams);
        }
    }
    (names, params)
}
