//! Fluid smart vault connectors.
//!
//! - T2: smart collateral (two-token DEX collateral), normal debt.
//! - T3: normal collateral, smart debt (two-token DEX debt).
//! - T4: smart collateral and smart debt.
//!
//! Each connector takes one helper struct per call. `*WithIds` moves token
//! amounts. `*PerfectWithIds` moves exact DEX shares and bounds the token
//! amounts with `*MinMax`.

use alloy_sol_types::SolCall;

use super::ConnectorCall;

pub mod t2 {
    use super::*;
    use alloy_sol_types::sol;

    sol! {
        #![sol(all_derives)]

        struct OperateWithIdsHelper {
            address vaultAddress;
            uint256 nftId;
            int256 newColToken0;
            int256 newColToken1;
            int256 colSharesMinMax;
            int256 newDebt;
            uint256 repayApproveAmt;
            uint256[] getIds;
            uint256[] setIds;
        }

        struct OperatePerfectHelper {
            address vaultAddress;
            uint256 nftId;
            int256 perfectColShares;
            int256 colToken0MinMax;
            int256 colToken1MinMax;
            int256 newDebt;
            uint256 repayApproveAmt;
            uint256 getNftId;
            uint256[] setIds;
        }

        interface IConnectV2FluidVaultT2 {
            function operateWithIds(OperateWithIdsHelper helper)
                external payable returns (string memory eventName, bytes memory eventParam);
            function operatePerfectWithIds(OperatePerfectHelper helper)
                external payable returns (string memory eventName, bytes memory eventParam);
        }
    }

    pub use IConnectV2FluidVaultT2::IConnectV2FluidVaultT2Calls as FluidVaultT2Call;

    pub const ID_SLOTS: usize = 7;

    pub(crate) const SIGNATURES: &[&str] = &[
        IConnectV2FluidVaultT2::operateWithIdsCall::SIGNATURE,
        IConnectV2FluidVaultT2::operatePerfectWithIdsCall::SIGNATURE,
    ];

    pub fn operate_with_ids(helper: OperateWithIdsHelper) -> ConnectorCall {
        ConnectorCall::FluidVaultT2(FluidVaultT2Call::operateWithIds(
            IConnectV2FluidVaultT2::operateWithIdsCall { helper },
        ))
    }

    pub fn operate_perfect_with_ids(helper: OperatePerfectHelper) -> ConnectorCall {
        ConnectorCall::FluidVaultT2(FluidVaultT2Call::operatePerfectWithIds(
            IConnectV2FluidVaultT2::operatePerfectWithIdsCall { helper },
        ))
    }
}

pub mod t3 {
    use super::*;
    use alloy_sol_types::sol;

    sol! {
        #![sol(all_derives)]

        struct OperateWithIdsHelper {
            address vaultAddress;
            uint256 nftId;
            int256 newCol;
            int256 newDebtToken0;
            int256 newDebtToken1;
            int256 debtSharesMinMax;
            uint256[] getIds;
            uint256[] setIds;
        }

        struct OperatePerfectHelper {
            address vaultAddress;
            uint256 nftId;
            int256 newCol;
            int256 perfectDebtShares;
            int256 debtToken0MinMax;
            int256 debtToken1MinMax;
            uint256 getNftId;
            uint256[] setIds;
        }

        interface IConnectV2FluidVaultT3 {
            function operateWithIds(OperateWithIdsHelper helper)
                external payable returns (string memory eventName, bytes memory eventParam);
            function operatePerfectWithIds(OperatePerfectHelper helper)
                external payable returns (string memory eventName, bytes memory eventParam);
        }
    }

    pub use IConnectV2FluidVaultT3::IConnectV2FluidVaultT3Calls as FluidVaultT3Call;

    pub const ID_SLOTS: usize = 7;

    pub(crate) const SIGNATURES: &[&str] = &[
        IConnectV2FluidVaultT3::operateWithIdsCall::SIGNATURE,
        IConnectV2FluidVaultT3::operatePerfectWithIdsCall::SIGNATURE,
    ];

    pub fn operate_with_ids(helper: OperateWithIdsHelper) -> ConnectorCall {
        ConnectorCall::FluidVaultT3(FluidVaultT3Call::operateWithIds(
            IConnectV2FluidVaultT3::operateWithIdsCall { helper },
        ))
    }

    pub fn operate_perfect_with_ids(helper: OperatePerfectHelper) -> ConnectorCall {
        ConnectorCall::FluidVaultT3(FluidVaultT3Call::operatePerfectWithIds(
            IConnectV2FluidVaultT3::operatePerfectWithIdsCall { helper },
        ))
    }
}

pub mod t4 {
    use super::*;
    use alloy_sol_types::sol;

    sol! {
        #![sol(all_derives)]

        struct OperateWithIdsHelper {
            address vaultAddress;
            uint256 nftId;
            int256 newColToken0;
            int256 newColToken1;
            int256 colSharesMinMax;
            int256 newDebtToken0;
            int256 newDebtToken1;
            int256 debtSharesMinMax;
            uint256[] getIds;
            uint256[] setIds;
        }

        struct OperatePerfectHelper {
            address vaultAddress;
            uint256 nftId;
            int256 perfectColShares;
            int256 colToken0MinMax;
            int256 colToken1MinMax;
            int256 perfectDebtShares;
            int256 debtToken0MinMax;
            int256 debtToken1MinMax;
            uint256 getNftId;
            uint256[] setIds;
        }

        interface IConnectV2FluidVaultT4 {
            function operateWithIds(OperateWithIdsHelper helper)
                external payable returns (string memory eventName, bytes memory eventParam);
            function operatePerfectWithIds(OperatePerfectHelper helper)
                external payable returns (string memory eventName, bytes memory eventParam);
        }
    }

    pub use IConnectV2FluidVaultT4::IConnectV2FluidVaultT4Calls as FluidVaultT4Call;

    pub const ID_SLOTS: usize = 9;

    pub(crate) const SIGNATURES: &[&str] = &[
        IConnectV2FluidVaultT4::operateWithIdsCall::SIGNATURE,
        IConnectV2FluidVaultT4::operatePerfectWithIdsCall::SIGNATURE,
    ];

    pub fn operate_with_ids(helper: OperateWithIdsHelper) -> ConnectorCall {
        ConnectorCall::FluidVaultT4(FluidVaultT4Call::operateWithIds(
            IConnectV2FluidVaultT4::operateWithIdsCall { helper },
        ))
    }

    pub fn operate_perfect_with_ids(helper: OperatePerfectHelper) -> ConnectorCall {
        ConnectorCall::FluidVaultT4(FluidVaultT4Call::operatePerfectWithIds(
            IConnectV2FluidVaultT4::operatePerfectWithIdsCall { helper },
        ))
    }
}
