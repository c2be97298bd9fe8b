//! Token addresses the forked scenarios move around.

use alloy_primitives::{address, Address, U256};

/// Placeholder the DSA connectors use for the native coin.
pub const ETH: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// `uint256(-1)`: connectors read it as "the whole balance".
pub const DSA_MAX_VALUE: U256 = U256::MAX;

pub mod mainnet {
    use super::*;

    pub const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    pub const WSTETH: Address = address!("7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0");
    pub const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    pub const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    pub const WBTC: Address = address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");
    pub const CBBTC: Address = address!("cbB7C0000aB88B473b1f5aFd9ef808440eed33Bf");
    pub const EETH: Address = address!("35fA164735182de50811E8e2E824cFb9B6118ac2");
    pub const WEETH: Address = address!("Cd5fE23C85820F7B72D0926FC9b05b43E359b7ee");
}

pub mod polygon {
    use super::*;

    pub const WETH: Address = address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619");
    pub const USDC: Address = address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174");
}

/// `amount * 10^decimals`.
pub fn units(amount: u64, decimals: u8) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(decimals))
}

/// Whole ether expressed in wei.
pub fn ether(amount: u64) -> U256 {
    units(amount, 18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ether_scales_by_eighteen_decimals() {
        assert_eq!(ether(1), U256::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn units_for_usdc() {
        assert_eq!(units(5, 6), U256::from(5_000_000u64));
    }

    #[test]
    fn max_value_is_all_ones() {
        assert_eq!(DSA_MAX_VALUE.to_be_bytes::<32>(), [0xff; 32]);
    }
}
