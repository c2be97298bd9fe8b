//! Harness configuration, loaded once per test process.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `dsa.toml` in the working directory, if present
//! 3. the bare variables `ALCHEMY_API_KEY`, `PRIVATE_KEY`, `MNEMONIC`, `networkType`
//! 4. `DSA_`-prefixed variables, e.g. `DSA_RPC_URL`, `DSA_ARTIFACTS_DIR`
//!
//! A `.env` file in the working directory is read into the process
//! environment first.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use dsa_spells::chains::{self, EvmChain};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactStore;
use crate::error::{HarnessError, Result};

pub const CONFIG_FILE: &str = "dsa.toml";
pub const ENV_PREFIX: &str = "DSA_";

/// Mnemonic of the default Hardhat/Anvil dev accounts.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

const RAW_ENV_KEYS: [&str; 4] = ["ALCHEMY_API_KEY", "PRIVATE_KEY", "MNEMONIC", "networkType"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawConfig {
    network: String,
    alchemy_api_key: Option<String>,
    private_key: Option<String>,
    mnemonic: String,
    rpc_url: Option<String>,
    artifacts_dir: PathBuf,
    log_level: Vec<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            network: chains::MAINNET.network.to_string(),
            alchemy_api_key: None,
            private_key: None,
            mnemonic: DEFAULT_MNEMONIC.to_string(),
            rpc_url: None,
            artifacts_dir: PathBuf::from("artifacts"),
            log_level: vec!["info".to_string()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub network: &'static EvmChain,
    alchemy_api_key: Option<SecretString>,
    private_key: Option<SecretString>,
    mnemonic: SecretString,
    /// Fork source that overrides the network's own endpoint.
    pub rpc_url: Option<String>,
    pub artifacts_dir: PathBuf,
    /// Extra `tracing` directives on top of `RUST_LOG`.
    pub log_level: Vec<String>,
}

impl HarnessConfig {
    /// Read `.env`, then extract from [`HarnessConfig::figment`].
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(HarnessError::Config(format!("loading .env: {err}"))),
        }
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        Self::figment_with_file(Path::new(CONFIG_FILE))
    }

    pub fn figment_with_file(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(RawConfig::default()))
            .merge(Toml::file(path))
            .merge(
                Env::raw()
                    .only(&RAW_ENV_KEYS)
                    .map(|key| if key == "networkType" { "network".into() } else { key.into() }),
            )
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let raw: RawConfig = figment.extract()?;
        let network = chains::get_network(&raw.network)?;
        Ok(Self {
            network,
            alchemy_api_key: raw.alchemy_api_key.filter(|k| !k.is_empty()).map(SecretString::from),
            private_key: raw.private_key.filter(|k| !k.is_empty()).map(SecretString::from),
            mnemonic: SecretString::from(raw.mnemonic),
            rpc_url: raw.rpc_url.filter(|u| !u.is_empty()),
            artifacts_dir: raw.artifacts_dir,
            log_level: raw.log_level,
        })
    }

    /// Same configuration pointed at another network.
    pub fn with_network(mut self, network: &'static EvmChain) -> Self {
        self.network = network;
        self
    }

    /// URL the fork is taken from.
    pub fn fork_url(&self) -> Result<String> {
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }
        let key = self.alchemy_api_key.as_ref().map(|k| k.expose_secret());
        Ok(self.network.rpc_url(key)?)
    }

    /// Account `index` of the configured mnemonic. With `PRIVATE_KEY` set,
    /// index 0 is that key instead.
    pub fn signer(&self, index: u32) -> Result<PrivateKeySigner> {
        if let (0, Some(key)) = (index, &self.private_key) {
            return Ok(PrivateKeySigner::from_str(key.expose_secret())?);
        }
        Ok(MnemonicBuilder::<English>::default()
            .phrase(self.mnemonic.expose_secret())
            .index(index)?
            .build()?)
    }

    pub fn artifacts(&self) -> ArtifactStore {
        ArtifactStore::new(&self.artifacts_dir)
    }

    pub fn tracing_env_filter(&self) -> Result<tracing_subscriber::EnvFilter> {
        let mut filter = tracing_subscriber::EnvFilter::from_default_env();
        for directive in &self.log_level {
            match directive.parse() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => return Err(HarnessError::Config(format!("{err}: {directive}"))),
            }
        }
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CLEAR: [(&str, Option<&str>); 8] = [
        ("ALCHEMY_API_KEY", None),
        ("PRIVATE_KEY", None),
        ("MNEMONIC", None),
        ("networkType", None),
        ("DSA_NETWORK", None),
        ("DSA_RPC_URL", None),
        ("DSA_ARTIFACTS_DIR", None),
        ("DSA_ALCHEMY_API_KEY", None),
    ];

    fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
        let mut all: Vec<(&str, Option<&str>)> = CLEAR.to_vec();
        all.extend_from_slice(vars);
        temp_env::with_vars(all, f)
    }

    fn no_file() -> Figment {
        HarnessConfig::figment_with_file(Path::new("/nonexistent/dsa.toml"))
    }

    #[test]
    fn defaults_to_mainnet() {
        let config = with_env(&[], || HarnessConfig::from_figment(no_file())).unwrap();
        assert_eq!(config.network.chain_id, 1);
        assert_eq!(config.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(config.log_level, vec!["info"]);
        assert!(config.rpc_url.is_none());
    }

    #[test]
    fn network_type_selects_network() {
        let config = with_env(&[("networkType", Some("polygon"))], || {
            HarnessConfig::from_figment(no_file())
        })
        .unwrap();
        assert_eq!(config.network.chain_id, 137);
    }

    #[test]
    fn unknown_network_is_rejected() {
        let err = with_env(&[("networkType", Some("goerli"))], || {
            HarnessConfig::from_figment(no_file())
        })
        .unwrap_err();
        assert!(err.to_string().contains("goerli"));
    }

    #[test]
    fn fork_url_uses_alchemy_key() {
        let config = with_env(
            &[("networkType", Some("polygon")), ("ALCHEMY_API_KEY", Some("abc123"))],
            || HarnessConfig::from_figment(no_file()),
        )
        .unwrap();
        assert_eq!(
            config.fork_url().unwrap(),
            "https://polygon-mainnet.g.alchemy.com/v2/abc123"
        );
    }

    #[test]
    fn fork_url_without_key_fails_for_alchemy_networks() {
        let config = with_env(&[], || HarnessConfig::from_figment(no_file())).unwrap();
        assert!(config.fork_url().is_err());
    }

    #[test]
    fn rpc_url_override_wins() {
        let config = with_env(&[("DSA_RPC_URL", Some("http://localhost:8545"))], || {
            HarnessConfig::from_figment(no_file())
        })
        .unwrap();
        assert_eq!(config.fork_url().unwrap(), "http://localhost:8545");
    }

    #[test]
    fn toml_file_is_layered_under_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "network = \"base\"\nartifacts_dir = \"out/artifacts\"").unwrap();
        let path = file.path().to_path_buf();

        let config = with_env(&[], || {
            HarnessConfig::from_figment(HarnessConfig::figment_with_file(&path))
        })
        .unwrap();
        assert_eq!(config.network.chain_id, 8453);
        assert_eq!(config.artifacts_dir, PathBuf::from("out/artifacts"));

        let config = with_env(&[("networkType", Some("avalanche"))], || {
            HarnessConfig::from_figment(HarnessConfig::figment_with_file(&path))
        })
        .unwrap();
        assert_eq!(config.network.chain_id, 43114);
    }

    #[test]
    fn secrets_are_redacted_in_debug() {
        let config = with_env(&[("ALCHEMY_API_KEY", Some("very-secret-key"))], || {
            HarnessConfig::from_figment(no_file())
        })
        .unwrap();
        assert!(!format!("{config:?}").contains("very-secret-key"));
    }

    #[test]
    fn default_mnemonic_derives_dev_accounts() {
        let config = with_env(&[], || HarnessConfig::from_figment(no_file())).unwrap();
        assert_eq!(
            config.signer(0).unwrap().address().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        assert_eq!(
            config.signer(1).unwrap().address().to_string(),
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        );
    }

    #[test]
    fn private_key_replaces_first_account() {
        let key = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
        let config = with_env(&[("PRIVATE_KEY", Some(key))], || {
            HarnessConfig::from_figment(no_file())
        })
        .unwrap();
        assert_eq!(
            config.signer(0).unwrap().address().to_string(),
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        );
    }

    #[test]
    fn bad_log_directive_is_a_config_error() {
        let mut config = with_env(&[], || HarnessConfig::from_figment(no_file())).unwrap();
        config.log_level = vec!["dsa_harness=notalevel".to_string()];
        assert!(matches!(config.tracing_env_filter(), Err(HarnessError::Config(_))));
    }
}
