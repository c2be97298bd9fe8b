//! Lookup of compiled Hardhat artifacts (`artifacts/**/<Name>.json`).

use std::fs;
use std::path::{Path, PathBuf};

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use dsa_spells::ConnectorKind;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{HarnessError, Result};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    contract_name: String,
    abi: JsonAbi,
    #[serde(default)]
    bytecode: Bytes,
}

/// A deployable contract: name, ABI and creation bytecode.
#[derive(Debug, Clone)]
pub struct ConnectorArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ConnectorArtifact {
    /// Creation code followed by ABI-encoded constructor arguments.
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(constructor_args);
        code.into()
    }

    pub fn has_function(&self, signature: &str) -> bool {
        self.abi.functions().any(|f| f.signature() == signature)
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Path of the artifact file for `name`. Debug files (`*.dbg.json`) and
    /// build info are never matched.
    pub fn find(&self, name: &str) -> Result<PathBuf> {
        let file_name = format!("{name}.json");
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| entry.file_name().to_str() == Some(file_name.as_str()))
            .map(|entry| entry.into_path())
            .ok_or_else(|| HarnessError::ArtifactNotFound(name.to_string()))
    }

    /// Load a deployable artifact. Interfaces and abstract contracts (empty
    /// bytecode) are rejected.
    pub fn load(&self, name: &str) -> Result<ConnectorArtifact> {
        let path = self.find(name)?;
        let raw = fs::read_to_string(&path)?;
        let artifact: HardhatArtifact =
            serde_json::from_str(&raw).map_err(|e| HarnessError::Artifact {
                name: name.to_string(),
                reason: format!("{}: {e}", path.display()),
            })?;
        if artifact.bytecode.is_empty() {
            return Err(HarnessError::NotDeployable(name.to_string()));
        }
        tracing::debug!(
            name,
            path = %path.display(),
            bytes = artifact.bytecode.len(),
            "loaded artifact"
        );
        Ok(ConnectorArtifact {
            contract_name: artifact.contract_name,
            abi: artifact.abi,
            bytecode: artifact.bytecode,
        })
    }

    /// Load the artifact behind `kind` and check that its ABI has every
    /// method the encoder can produce for it.
    pub fn check_catalog(&self, kind: ConnectorKind) -> Result<ConnectorArtifact> {
        let artifact = self.load(kind.artifact())?;
        let missing: Vec<&str> = kind
            .signatures()
            .iter()
            .copied()
            .filter(|sig| !artifact.has_function(sig))
            .collect();
        if !missing.is_empty() {
            return Err(HarnessError::Artifact {
                name: kind.artifact().to_string(),
                reason: format!("ABI lacks {}", missing.join(", ")),
            });
        }
        Ok(artifact)
    }
}
