//! Basic connector (`ConnectV2Basic`): move ERC-20s or ETH into and out of a DSA.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use super::ConnectorCall;

sol! {
    #![sol(all_derives)]

    interface IConnectV2Basic {
        function deposit(address token, uint256 amt, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function withdraw(address token, uint256 amt, address to, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
    }
}

pub use IConnectV2Basic::IConnectV2BasicCalls as BasicCall;

pub(crate) const SIGNATURES: &[&str] = &[
    IConnectV2Basic::depositCall::SIGNATURE,
    IConnectV2Basic::withdrawCall::SIGNATURE,
];

pub fn deposit(token: Address, amt: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    ConnectorCall::Basic(BasicCall::deposit(IConnectV2Basic::depositCall {
        token,
        amt,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn withdraw(
    token: Address,
    amt: U256,
    to: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    ConnectorCall::Basic(BasicCall::withdraw(IConnectV2Basic::withdrawCall {
        token,
        amt,
        to,
        getId: get_id,
        setId: set_id,
    }))
}
