//! Connector ABIs the encoder knows how to build calls for.
//!
//! Every connector interface is declared with `sol!`, so each supported
//! `(connector, method)` pair is a variant of the generated `*Calls` enum and
//! [`ConnectorCall`] closes over all of them.

pub mod basic;
pub mod etherfi;
pub mod fluid;
pub mod fluid_vaults;
pub mod morpho_blue;
pub mod spark;

use alloy_sol_types::SolInterface;
use serde::{Deserialize, Serialize};

use crate::error::SpellError;

pub use basic::BasicCall;
pub use etherfi::{EEthCall, WeEthCall, WeEthsCall};
pub use fluid::{FluidCall, FluidPolygonCall};
pub use fluid_vaults::t2::FluidVaultT2Call;
pub use fluid_vaults::t3::FluidVaultT3Call;
pub use fluid_vaults::t4::FluidVaultT4Call;
pub use morpho_blue::MorphoBlueCall;
pub use spark::SparkCall;

/// A connector ABI, identified by the artifact that implements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
    MorphoBlue,
    Fluid,
    FluidPolygon,
    FluidVaultT2,
    FluidVaultT3,
    FluidVaultT4,
    Spark,
    EEth,
    WeEth,
    WeEths,
    Basic,
}

impl ConnectorKind {
    pub const ALL: [ConnectorKind; 11] = [
        ConnectorKind::MorphoBlue,
        ConnectorKind::Fluid,
        ConnectorKind::FluidPolygon,
        ConnectorKind::FluidVaultT2,
        ConnectorKind::FluidVaultT3,
        ConnectorKind::FluidVaultT4,
        ConnectorKind::Spark,
        ConnectorKind::EEth,
        ConnectorKind::WeEth,
        ConnectorKind::WeEths,
        ConnectorKind::Basic,
    ];

    /// Contract name of the artifact that implements this ABI.
    pub fn artifact(self) -> &'static str {
        match self {
            ConnectorKind::MorphoBlue => "ConnectV2MorphoBlue",
            ConnectorKind::Fluid => "ConnectV2Fluid",
            ConnectorKind::FluidPolygon => "ConnectV2FluidPolygon",
            ConnectorKind::FluidVaultT2 => "ConnectV2FluidVaultT2",
            ConnectorKind::FluidVaultT3 => "ConnectV2FluidVaultT3",
            ConnectorKind::FluidVaultT4 => "ConnectV2FluidVaultT4",
            ConnectorKind::Spark => "ConnectV2Spark",
            ConnectorKind::EEth => "ConnectV2EETH",
            ConnectorKind::WeEth => "ConnectV2WEETH",
            ConnectorKind::WeEths => "ConnectV2WEETHS",
            ConnectorKind::Basic => "ConnectV2Basic",
        }
    }

    /// Map an artifact name to its ABI. Artifacts without a binding return `None`.
    pub fn from_artifact(artifact: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.artifact() == artifact)
    }

    /// Solidity signatures of every method this ABI exposes, e.g.
    /// `"deposit(address,uint256,uint256,uint256)"`.
    pub fn signatures(self) -> &'static [&'static str] {
        match self {
            ConnectorKind::MorphoBlue => morpho_blue::SIGNATURES,
            ConnectorKind::Fluid => fluid::SIGNATURES,
            ConnectorKind::FluidPolygon => fluid::POLYGON_SIGNATURES,
            ConnectorKind::FluidVaultT2 => fluid_vaults::t2::SIGNATURES,
            ConnectorKind::FluidVaultT3 => fluid_vaults::t3::SIGNATURES,
            ConnectorKind::FluidVaultT4 => fluid_vaults::t4::SIGNATURES,
            ConnectorKind::Spark => spark::SIGNATURES,
            ConnectorKind::EEth => etherfi::EETH_SIGNATURES,
            ConnectorKind::WeEth => etherfi::WEETH_SIGNATURES,
            ConnectorKind::WeEths => etherfi::WEETHS_SIGNATURES,
            ConnectorKind::Basic => basic::SIGNATURES,
        }
    }

    /// Decode one connector payload (selector included) against this ABI.
    pub fn decode_call(self, data: &[u8]) -> Result<ConnectorCall, SpellError> {
        let call = match self {
            ConnectorKind::MorphoBlue => {
                MorphoBlueCall::abi_decode(data).map(ConnectorCall::MorphoBlue)
            }
            ConnectorKind::Fluid => FluidCall::abi_decode(data).map(ConnectorCall::Fluid),
            ConnectorKind::FluidPolygon => {
                FluidPolygonCall::abi_decode(data).map(ConnectorCall::FluidPolygon)
            }
            ConnectorKind::FluidVaultT2 => {
                FluidVaultT2Call::abi_decode(data).map(ConnectorCall::FluidVaultT2)
            }
            ConnectorKind::FluidVaultT3 => {
                FluidVaultT3Call::abi_decode(data).map(ConnectorCall::FluidVaultT3)
            }
            ConnectorKind::FluidVaultT4 => {
                FluidVaultT4Call::abi_decode(data).map(ConnectorCall::FluidVaultT4)
            }
            ConnectorKind::Spark => SparkCall::abi_decode(data).map(ConnectorCall::Spark),
            ConnectorKind::EEth => EEthCall::abi_decode(data).map(ConnectorCall::EEth),
            ConnectorKind::WeEth => WeEthCall::abi_decode(data).map(ConnectorCall::WeEth),
            ConnectorKind::WeEths => WeEthsCall::abi_decode(data).map(ConnectorCall::WeEths),
            ConnectorKind::Basic => BasicCall::abi_decode(data).map(ConnectorCall::Basic),
        };
        call.map_err(|e| SpellError::Decoding(format!("{}: {e}", self.artifact())))
    }
}

/// A strongly typed call to one connector method.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorCall {
    MorphoBlue(MorphoBlueCall),
    Fluid(FluidCall),
    FluidPolygon(FluidPolygonCall),
    FluidVaultT2(FluidVaultT2Call),
    FluidVaultT3(FluidVaultT3Call),
    FluidVaultT4(FluidVaultT4Call),
    Spark(SparkCall),
    EEth(EEthCall),
    WeEth(WeEthCall),
    WeEths(WeEthsCall),
    Basic(BasicCall),
}

macro_rules! dispatch {
    ($self:expr, $call:ident => $body:expr) => {
        match $self {
            ConnectorCall::MorphoBlue($call) => $body,
            ConnectorCall::Fluid($call) => $body,
            ConnectorCall::FluidPolygon($call) => $body,
            ConnectorCall::FluidVaultT2($call) => $body,
            ConnectorCall::FluidVaultT3($call) => $body,
            ConnectorCall::FluidVaultT4($call) => $body,
            ConnectorCall::Spark($call) => $body,
            ConnectorCall::EEth($call) => $body,
            ConnectorCall::WeEth($call) => $body,
            ConnectorCall::WeEths($call) => $body,
            ConnectorCall::Basic($call) => $body,
        }
    };
}

impl ConnectorCall {
    pub fn kind(&self) -> ConnectorKind {
        match self {
            ConnectorCall::MorphoBlue(_) => ConnectorKind::MorphoBlue,
            ConnectorCall::Fluid(_) => ConnectorKind::Fluid,
            ConnectorCall::FluidPolygon(_) => ConnectorKind::FluidPolygon,
            ConnectorCall::FluidVaultT2(_) => ConnectorKind::FluidVaultT2,
            ConnectorCall::FluidVaultT3(_) => ConnectorKind::FluidVaultT3,
            ConnectorCall::FluidVaultT4(_) => ConnectorKind::FluidVaultT4,
            ConnectorCall::Spark(_) => ConnectorKind::Spark,
            ConnectorCall::EEth(_) => ConnectorKind::EEth,
            ConnectorCall::WeEth(_) => ConnectorKind::WeEth,
            ConnectorCall::WeEths(_) => ConnectorKind::WeEths,
            ConnectorCall::Basic(_) => ConnectorKind::Basic,
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        dispatch!(self, c => c.selector())
    }

    /// Full calldata: selector followed by the ABI-encoded arguments.
    pub fn abi_encode(&self) -> Vec<u8> {
        dispatch!(self, c => c.abi_encode())
    }

    /// Solidity signature of the method this call targets.
    pub fn signature(&self) -> Option<&'static str> {
        let selector = self.selector();
        self.kind()
            .signatures()
            .iter()
            .copied()
            .find(|sig| alloy_primitives::keccak256(sig.as_bytes())[..4] == selector)
    }
}
