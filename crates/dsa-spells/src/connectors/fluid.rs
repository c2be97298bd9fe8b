//! Fluid vault connectors (`ConnectV2Fluid`, `ConnectV2FluidPolygon`).
//!
//! `operate` moves collateral and debt of one vault position in a single call.
//! `newCol`/`newDebt` are signed deltas: positive deposits or borrows,
//! negative withdraws or repays. `nftId == 0` opens a new position.

use alloy_primitives::{Address, I256, U256};
use alloy_sol_types::{sol, sol_data, SolCall, SolType};

use super::ConnectorCall;
use crate::error::SpellError;

sol! {
    #![sol(all_derives)]

    interface IConnectV2Fluid {
        event LogOperate(address vaultAddress, uint256 nftId, int256 newCol, int256 newDebt);

        function operate(
            address vaultAddress,
            uint256 nftId,
            int256 newCol,
            int256 newDebt,
            uint256 repayApproveAmt
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function operateWithIds(
            address vaultAddress,
            uint256 nftId,
            int256 newCol,
            int256 newDebt,
            uint256 repayApproveAmt,
            uint256[] getIds,
            uint256[] setIds
        ) external payable returns (string memory eventName, bytes memory eventParam);
    }

    interface IConnectV2FluidPolygon {
        function operate(
            address vaultAddress,
            uint256 nftId,
            int256 newCol,
            int256 newDebt,
            uint256 repayApproveAmt,
            uint256[] getIds,
            uint256[] setIds
        ) external payable returns (string memory eventName, bytes memory eventParam);
    }
}

pub use IConnectV2Fluid::{IConnectV2FluidCalls as FluidCall, LogOperate};
pub use IConnectV2FluidPolygon::IConnectV2FluidPolygonCalls as FluidPolygonCall;

/// Length of the get/set id arrays on the polygon `operate`.
pub const POLYGON_ID_SLOTS: usize = 5;

pub(crate) const SIGNATURES: &[&str] = &[
    IConnectV2Fluid::operateCall::SIGNATURE,
    IConnectV2Fluid::operateWithIdsCall::SIGNATURE,
];

pub(crate) const POLYGON_SIGNATURES: &[&str] =
    &[IConnectV2FluidPolygon::operateCall::SIGNATURE];

type LogOperateHead = (
    sol_data::Address,
    sol_data::Uint<256>,
    sol_data::Int<256>,
    sol_data::Int<256>,
);

/// Decodes the `eventParam` an `operate` spell returns through `LogCast`.
///
/// Only the leading vault, position and delta words are read, so the longer
/// payload of the id variants decodes too.
pub fn decode_log_operate(params: &[u8]) -> Result<LogOperate, SpellError> {
    let (vault, nft_id, new_col, new_debt) = LogOperateHead::abi_decode_params(params)
        .map_err(|e| SpellError::Decoding(format!("LogOperate: {e}")))?;
    Ok(LogOperate {
        vaultAddress: vault,
        nftId: nft_id,
        newCol: new_col,
        newDebt: new_debt,
    })
}

pub fn operate(
    vault: Address,
    nft_id: U256,
    new_col: I256,
    new_debt: I256,
    repay_approve_amt: U256,
) -> ConnectorCall {
    ConnectorCall::Fluid(FluidCall::operate(IConnectV2Fluid::operateCall {
        vaultAddress: vault,
        nftId: nft_id,
        newCol: new_col,
        newDebt: new_debt,
        repayApproveAmt: repay_approve_amt,
    }))
}

pub fn operate_with_ids(
    vault: Address,
    nft_id: U256,
    new_col: I256,
    new_debt: I256,
    repay_approve_amt: U256,
    get_ids: Vec<U256>,
    set_ids: Vec<U256>,
) -> ConnectorCall {
    ConnectorCall::Fluid(FluidCall::operateWithIds(IConnectV2Fluid::operateWithIdsCall {
        vaultAddress: vault,
        nftId: nft_id,
        newCol: new_col,
        newDebt: new_debt,
        repayApproveAmt: repay_approve_amt,
        getIds: get_ids,
        setIds: set_ids,
    }))
}

/// Polygon `operate`. Id arrays shorter than [`POLYGON_ID_SLOTS`] are zero-padded.
pub fn operate_polygon(
    vault: Address,
    nft_id: U256,
    new_col: I256,
    new_debt: I256,
    repay_approve_amt: U256,
    mut get_ids: Vec<U256>,
    mut set_ids: Vec<U256>,
) -> ConnectorCall {
    get_ids.resize(get_ids.len().max(POLYGON_ID_SLOTS), U256::ZERO);
    set_ids.resize(set_ids.len().max(POLYGON_ID_SLOTS), U256::ZERO);
    ConnectorCall::FluidPolygon(FluidPolygonCall::operate(IConnectV2FluidPolygon::operateCall {
        vaultAddress: vault,
        nftId: nft_id,
        newCol: new_col,
        newDebt: new_debt,
        repayApproveAmt: repay_approve_amt,
        getIds: get_ids,
        setIds: set_ids,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolEvent;

    #[test]
    fn polygon_operate_carries_id_arrays() {
        assert_eq!(
            IConnectV2FluidPolygon::operateCall::SIGNATURE,
            "operate(address,uint256,int256,int256,uint256,uint256[],uint256[])"
        );
    }

    #[test]
    fn mainnet_and_polygon_operate_selectors_differ() {
        assert_ne!(
            IConnectV2Fluid::operateCall::SELECTOR,
            IConnectV2FluidPolygon::operateCall::SELECTOR
        );
    }

    #[test]
    fn log_operate_signature() {
        assert_eq!(LogOperate::SIGNATURE, "LogOperate(address,uint256,int256,int256)");
    }

    #[test]
    fn log_operate_params_decode() {
        let event = LogOperate {
            vaultAddress: Address::repeat_byte(0x22),
            nftId: U256::from(6u64),
            newCol: I256::try_from(10i64).unwrap(),
            newDebt: I256::ZERO,
        };
        assert_eq!(decode_log_operate(&event.encode_data()).unwrap(), event);
    }

    #[test]
    fn log_operate_params_with_id_arrays_decode() {
        type WithIds = (
            sol_data::Address,
            sol_data::Uint<256>,
            sol_data::Int<256>,
            sol_data::Int<256>,
            sol_data::Uint<256>,
            sol_data::Array<sol_data::Uint<256>>,
            sol_data::Array<sol_data::Uint<256>>,
        );
        let vault = Address::repeat_byte(0x22);
        let col = I256::try_from(1000i64).unwrap();
        let payload = WithIds::abi_encode_params(&(
            vault,
            U256::from(41u64),
            col,
            I256::ZERO,
            U256::ZERO,
            vec![U256::ZERO; POLYGON_ID_SLOTS],
            vec![U256::from(7u64); POLYGON_ID_SLOTS],
        ));
        let event = decode_log_operate(&payload).unwrap();
        assert_eq!(event.vaultAddress, vault);
        assert_eq!(event.nftId, U256::from(41u64));
        assert_eq!(event.newCol, col);
    }

    #[test]
    fn log_operate_short_payload_is_rejected() {
        let err = decode_log_operate(&[0u8; 64]).unwrap_err();
        assert!(matches!(err, SpellError::Decoding(_)));
    }

    #[test]
    fn polygon_ids_are_padded() {
        let call = operate_polygon(
            Address::ZERO,
            U256::ZERO,
            I256::ONE,
            I256::ZERO,
            U256::ZERO,
            vec![],
            vec![U256::ZERO, U256::from(7u64)],
        );
        let ConnectorCall::FluidPolygon(FluidPolygonCall::operate(inner)) = call else {
            panic!("expected polygon operate");
        };
        assert_eq!(inner.getIds.len(), POLYGON_ID_SLOTS);
        assert_eq!(inner.setIds.len(), POLYGON_ID_SLOTS);
        assert_eq!(inner.setIds[1], U256::from(7u64));
    }
}
