//! ether.fi liquid staking connectors: eETH, weETH and the weETHs vault.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use super::ConnectorCall;

sol! {
    #![sol(all_derives)]

    interface IConnectV2EETH {
        function deposit(uint256 amount, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function depositWeth(uint256 amount, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
    }

    interface IConnectV2WEETH {
        function deposit(uint256 eETHAmount, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function withdraw(uint256 weETHAmount, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
    }

    interface IConnectV2WEETHS {
        function deposit(
            address token,
            uint256 amount,
            uint256 minReceiveAmount,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
    }
}

pub use IConnectV2EETH::IConnectV2EETHCalls as EEthCall;
pub use IConnectV2WEETH::IConnectV2WEETHCalls as WeEthCall;
pub use IConnectV2WEETHS::IConnectV2WEETHSCalls as WeEthsCall;

pub(crate) const EETH_SIGNATURES: &[&str] = &[
    IConnectV2EETH::depositCall::SIGNATURE,
    IConnectV2EETH::depositWethCall::SIGNATURE,
];

pub(crate) const WEETH_SIGNATURES: &[&str] = &[
    IConnectV2WEETH::depositCall::SIGNATURE,
    IConnectV2WEETH::withdrawCall::SIGNATURE,
];

pub(crate) const WEETHS_SIGNATURES: &[&str] = &[IConnectV2WEETHS::depositCall::SIGNATURE];

/// Stake native ETH for eETH.
pub fn eeth_deposit(amount: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    ConnectorCall::EEth(EEthCall::deposit(IConnectV2EETH::depositCall {
        amount,
        getId: get_id,
        setId: set_id,
    }))
}

/// Unwrap WETH, then stake it for eETH.
pub fn eeth_deposit_weth(amount: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    ConnectorCall::EEth(EEthCall::depositWeth(IConnectV2EETH::depositWethCall {
        amount,
        getId: get_id,
        setId: set_id,
    }))
}

/// Wrap eETH into weETH.
pub fn weeth_deposit(eeth_amount: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    ConnectorCall::WeEth(WeEthCall::deposit(IConnectV2WEETH::depositCall {
        eETHAmount: eeth_amount,
        getId: get_id,
        setId: set_id,
    }))
}

/// Unwrap weETH back into eETH.
pub fn weeth_withdraw(weeth_amount: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    ConnectorCall::WeEth(WeEthCall::withdraw(IConnectV2WEETH::withdrawCall {
        weETHAmount: weeth_amount,
        getId: get_id,
        setId: set_id,
    }))
}

/// Deposit ETH or an accepted LST into the weETHs vault.
pub fn weeths_deposit(
    token: Address,
    amount: U256,
    min_receive_amount: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    ConnectorCall::WeEths(WeEthsCall::deposit(IConnectV2WEETHS::depositCall {
        token,
        amount,
        minReceiveAmount: min_receive_amount,
        getId: get_id,
        setId: set_id,
    }))
}
