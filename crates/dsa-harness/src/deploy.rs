//! Deploy a connector artifact and enable it in `InstaConnectorsV2`.

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types_eth::TransactionRequest;
use dsa_spells::ConnectorKind;
use tracing::{info, instrument};

use crate::artifact::ArtifactStore;
use crate::dsa::{InstaConnectorsV2, InstaIndex};
use crate::error::{HarnessError, Result};
use crate::fork::ForkedChain;

/// Who sends `addConnectors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// The `InstaIndex.master()` account, impersonated.
    Master,
    /// The fork's default signer. Only works when it already has rights.
    Signer,
}

#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Display name to register the connector under.
    pub name: String,
    pub artifact: String,
    pub constructor_args: Bytes,
}

impl DeployRequest {
    pub fn new(name: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artifact: artifact.into(),
            constructor_args: Bytes::new(),
        }
    }

    pub fn for_kind(name: impl Into<String>, kind: ConnectorKind) -> Self {
        Self::new(name, kind.artifact())
    }

    pub fn with_constructor_args(mut self, args: impl Into<Bytes>) -> Self {
        self.constructor_args = args.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedConnector {
    pub name: String,
    pub artifact: String,
    pub address: Address,
    pub deploy_tx: TxHash,
    pub register_tx: TxHash,
}

/// Deploy `request.artifact` and register it as `request.name`.
///
/// Two transactions: the deployment, then `addConnectors`. Registration is
/// not idempotent; a name that is already enabled makes the second one revert.
#[instrument(
    skip(chain, artifacts, request),
    fields(name = %request.name, artifact = %request.artifact)
)]
pub async fn deploy_and_enable_connector(
    chain: &ForkedChain,
    artifacts: &ArtifactStore,
    request: &DeployRequest,
    authority: Authority,
) -> Result<DeployedConnector> {
    let artifact = artifacts.load(&request.artifact)?;
    let core = chain.dsa_core()?;

    let deploy = TransactionRequest::default()
        .with_from(chain.wallet0)
        .with_deploy_code(artifact.deploy_code(&request.constructor_args));
    let deploy_receipt = chain.send(deploy).await?;
    let address = deploy_receipt
        .contract_address
        .ok_or(HarnessError::MissingEvent("contract address"))?;
    info!(%address, "deployed connector");

    let connectors = InstaConnectorsV2::new(core.connectors_v2, chain.provider().clone());
    let register = connectors
        .addConnectors(vec![request.name.clone()], vec![address])
        .into_transaction_request();
    let register_receipt = match authority {
        Authority::Master => {
            let index = InstaIndex::new(core.index, chain.provider().clone());
            let master = index.master().call().await?;
            chain.send_as(master, register).await?
        }
        Authority::Signer => chain.send(register.with_from(chain.wallet0)).await?,
    };

    let enabled = connectors.isConnectors(vec![request.name.clone()]).call().await?;
    if !enabled.isOk || enabled.addresses.first() != Some(&address) {
        return Err(HarnessError::NotRegistered {
            name: request.name.clone(),
            address,
        });
    }
    info!(tx = %register_receipt.transaction_hash, "connector enabled");

    Ok(DeployedConnector {
        name: request.name.clone(),
        artifact: artifact.contract_name,
        address,
        deploy_tx: deploy_receipt.transaction_hash,
        register_tx: register_receipt.transaction_hash,
    })
}
