use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use crate::error::SpellError;

sol! {
    #![sol(all_derives)]

    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
        function balanceOf(address owner) external view returns (uint256);
    }
}

pub use IERC20::{balanceOfCall, transferCall};

/// Encodes an ERC-20 `transfer(address,uint256)` call.
///
/// Returns the complete calldata: 4-byte selector followed by 64 bytes of
/// ABI-encoded params.
pub fn encode_transfer(to: Address, amount: U256) -> Vec<u8> {
    transferCall { to, amount }.abi_encode()
}

/// Encodes an ERC-20 `balanceOf(address)` call.
pub fn encode_balance_of(owner: Address) -> Vec<u8> {
    balanceOfCall { owner }.abi_encode()
}

/// Decodes the return data of a `balanceOf` call.
pub fn decode_balance_of(data: &[u8]) -> Result<U256, SpellError> {
    balanceOfCall::abi_decode_returns(data)
        .map_err(|e| SpellError::Decoding(format!("balanceOf: {e}")))
}
