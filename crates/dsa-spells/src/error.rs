use thiserror::Error;

/// Spell resolution and encoding errors.
#[derive(Debug, Error)]
pub enum SpellError {
    #[error("spell batch is empty")]
    EmptyBatch,

    #[error("unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("unknown connector {name} on chain {chain_id}")]
    UnknownConnector { chain_id: u64, name: String },

    #[error("connector {name} already registered on chain {chain_id}")]
    DuplicateConnector { chain_id: u64, name: String },

    #[error("no ABI known for connector {connector} (artifact {artifact})")]
    UnknownArtifact { connector: String, artifact: String },

    #[error("connector {connector} has no method {method}")]
    UnknownMethod { connector: String, method: String },

    #[error("encoding error in {connector}.{method}: {reason}")]
    Encoding {
        connector: String,
        method: String,
        reason: String,
    },

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("missing rpc credentials: {0}")]
    MissingRpcKey(&'static str),
}

impl SpellError {
    pub(crate) fn encoding(
        connector: impl Into<String>,
        method: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        SpellError::Encoding {
            connector: connector.into(),
            method: method.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_batch() {
        assert_eq!(SpellError::EmptyBatch.to_string(), "spell batch is empty");
    }

    #[test]
    fn display_unknown_connector() {
        let err = SpellError::UnknownConnector {
            chain_id: 1,
            name: "MORPHO-BLUE-A".into(),
        };
        assert_eq!(err.to_string(), "unknown connector MORPHO-BLUE-A on chain 1");
    }

    #[test]
    fn display_duplicate_connector() {
        let err = SpellError::DuplicateConnector {
            chain_id: 137,
            name: "FLUID".into(),
        };
        assert_eq!(err.to_string(), "connector FLUID already registered on chain 137");
    }

    #[test]
    fn display_encoding_error() {
        let err = SpellError::encoding("SPARK-A", "deposit", "expected 4 arguments, got 3");
        assert_eq!(
            err.to_string(),
            "encoding error in SPARK-A.deposit: expected 4 arguments, got 3"
        );
    }

    #[test]
    fn display_unsupported_chain() {
        let err = SpellError::UnsupportedChain(999);
        assert_eq!(err.to_string(), "unsupported chain: 999");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(SpellError::Decoding("short".into()));
        assert!(err.to_string().contains("short"));
    }
}
