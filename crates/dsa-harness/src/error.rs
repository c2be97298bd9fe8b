use alloy_primitives::{Address, TxHash};
use dsa_spells::SpellError;
use thiserror::Error;

/// Failures while forking, deploying or casting.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Spell(#[from] SpellError),

    #[error("config: {0}")]
    Config(String),

    #[error("config: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("signer: {0}")]
    Signer(#[from] alloy_signer_local::LocalSignerError),

    #[error("could not spawn anvil: {0}")]
    NodeSpawn(String),

    #[error("rpc: {0}")]
    Transport(#[from] alloy_transport::TransportError),

    #[error("contract call: {0}")]
    Contract(#[from] alloy_contract::Error),

    #[error("pending transaction: {0}")]
    PendingTx(#[from] alloy_provider::PendingTransactionError),

    #[error("artifact {0} not found")]
    ArtifactNotFound(String),

    #[error("artifact {name}: {reason}")]
    Artifact { name: String, reason: String },

    #[error("artifact {0} has no bytecode and cannot be deployed")]
    NotDeployable(String),

    #[error("{what} reverted in tx {tx}")]
    Reverted { what: String, tx: TxHash },

    #[error("connector {name} is not enabled at {address}")]
    NotRegistered { name: String, address: Address },

    #[error("missing {0} in receipt")]
    MissingEvent(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for HarnessError {
    fn from(err: figment::Error) -> Self {
        HarnessError::Figment(Box::new(err))
    }
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_errors_pass_through() {
        let err: HarnessError = SpellError::EmptyBatch.into();
        assert_eq!(err.to_string(), "spell batch is empty");
    }

    #[test]
    fn display_not_deployable() {
        let err = HarnessError::NotDeployable("IConnector".into());
        assert_eq!(err.to_string(), "artifact IConnector has no bytecode and cannot be deployed");
    }

    #[test]
    fn display_reverted() {
        let err = HarnessError::Reverted {
            what: "cast".into(),
            tx: TxHash::ZERO,
        };
        assert!(err.to_string().starts_with("cast reverted in tx 0x0000"));
    }
}
