//! SparkLend connector (`ConnectV2Spark`), an Aave v3 fork.
//!
//! `rateMode` follows Aave: 1 = stable, 2 = variable.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use super::ConnectorCall;

sol! {
    #![sol(all_derives)]

    interface IConnectV2Spark {
        function deposit(address token, uint256 amt, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function depositWithoutCollateral(address token, uint256 amt, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function withdraw(address token, uint256 amt, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function borrow(address token, uint256 amt, uint256 rateMode, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function payback(address token, uint256 amt, uint256 rateMode, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function paybackWithATokens(
            address token,
            uint256 amt,
            uint256 rateMode,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function enableCollateral(address[] tokens)
            external payable returns (string memory eventName, bytes memory eventParam);
        function disableCollateral(address[] tokens)
            external payable returns (string memory eventName, bytes memory eventParam);
    }
}

pub use IConnectV2Spark::IConnectV2SparkCalls as SparkCall;
use IConnectV2Spark::*;

pub const RATE_MODE_VARIABLE: u64 = 2;

pub(crate) const SIGNATURES: &[&str] = &[
    depositCall::SIGNATURE,
    depositWithoutCollateralCall::SIGNATURE,
    withdrawCall::SIGNATURE,
    borrowCall::SIGNATURE,
    paybackCall::SIGNATURE,
    paybackWithATokensCall::SIGNATURE,
    enableCollateralCall::SIGNATURE,
    disableCollateralCall::SIGNATURE,
];

fn call(c: SparkCall) -> ConnectorCall {
    ConnectorCall::Spark(c)
}

pub fn deposit(token: Address, amt: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    call(SparkCall::deposit(depositCall {
        token,
        amt,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn deposit_without_collateral(
    token: Address,
    amt: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(SparkCall::depositWithoutCollateral(depositWithoutCollateralCall {
        token,
        amt,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn withdraw(token: Address, amt: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    call(SparkCall::withdraw(withdrawCall {
        token,
        amt,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn borrow(
    token: Address,
    amt: U256,
    rate_mode: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(SparkCall::borrow(borrowCall {
        token,
        amt,
        rateMode: rate_mode,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn payback(
    token: Address,
    amt: U256,
    rate_mode: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(SparkCall::payback(paybackCall {
        token,
        amt,
        rateMode: rate_mode,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn payback_with_a_tokens(
    token: Address,
    amt: U256,
    rate_mode: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(SparkCall::paybackWithATokens(paybackWithATokensCall {
        token,
        amt,
        rateMode: rate_mode,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn enable_collateral(tokens: Vec<Address>) -> ConnectorCall {
    call(SparkCall::enableCollateral(enableCollateralCall { tokens }))
}

pub fn disable_collateral(tokens: Vec<Address>) -> ConnectorCall {
    call(SparkCall::disableCollateral(disableCollateralCall { tokens }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrow_and_payback_share_layout() {
        assert_eq!(borrowCall::SIGNATURE, "borrow(address,uint256,uint256,uint256,uint256)");
        assert_eq!(paybackCall::SIGNATURE, "payback(address,uint256,uint256,uint256,uint256)");
    }

    #[test]
    fn enable_collateral_is_dynamic() {
        let data = enable_collateral(vec![Address::ZERO, Address::ZERO]).abi_encode();
        // selector + offset + length + two addresses
        assert_eq!(data.len(), 4 + 4 * 32);
    }
}
