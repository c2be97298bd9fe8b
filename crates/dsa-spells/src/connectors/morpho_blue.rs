//! Morpho Blue lending connector (`ConnectV2MorphoBlue`).
//!
//! Every method takes the market it acts on as a [`MarketParams`] tuple. The
//! market id is derived on-chain from that tuple, so a wrong `lltv` or oracle
//! addresses a different (usually empty) market rather than failing to encode.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use super::ConnectorCall;

sol! {
    #![sol(all_derives)]

    struct MarketParams {
        address loanToken;
        address collateralToken;
        address oracle;
        address irm;
        uint256 lltv;
    }

    interface IConnectV2MorphoBlue {
        function deposit(MarketParams marketParams, uint256 assets, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function depositOnBehalf(
            MarketParams marketParams,
            uint256 assets,
            address onBehalf,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function withdraw(MarketParams marketParams, uint256 assets, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function withdrawOnBehalf(
            MarketParams marketParams,
            uint256 assets,
            address onBehalf,
            address receiver,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function supplyCollateral(
            MarketParams marketParams,
            uint256 assets,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function supplyCollateralOnBehalf(
            MarketParams marketParams,
            uint256 assets,
            address onBehalf,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function withdrawCollateral(
            MarketParams marketParams,
            uint256 assets,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function withdrawCollateralOnBehalf(
            MarketParams marketParams,
            uint256 assets,
            address onBehalf,
            address receiver,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function borrow(MarketParams marketParams, uint256 assets, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function borrowOnBehalf(
            MarketParams marketParams,
            uint256 assets,
            address onBehalf,
            address receiver,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function borrowOnBehalfShares(
            MarketParams marketParams,
            uint256 shares,
            address onBehalf,
            address receiver,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function repay(MarketParams marketParams, uint256 assets, uint256 getId, uint256 setId)
            external payable returns (string memory eventName, bytes memory eventParam);
        function repayOnBehalf(
            MarketParams marketParams,
            uint256 assets,
            address onBehalf,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
        function repayOnBehalfShares(
            MarketParams marketParams,
            uint256 shares,
            address onBehalf,
            uint256 getId,
            uint256 setId
        ) external payable returns (string memory eventName, bytes memory eventParam);
    }
}

pub use IConnectV2MorphoBlue::IConnectV2MorphoBlueCalls as MorphoBlueCall;
use IConnectV2MorphoBlue::*;

pub(crate) const SIGNATURES: &[&str] = &[
    depositCall::SIGNATURE,
    depositOnBehalfCall::SIGNATURE,
    withdrawCall::SIGNATURE,
    withdrawOnBehalfCall::SIGNATURE,
    supplyCollateralCall::SIGNATURE,
    supplyCollateralOnBehalfCall::SIGNATURE,
    withdrawCollateralCall::SIGNATURE,
    withdrawCollateralOnBehalfCall::SIGNATURE,
    borrowCall::SIGNATURE,
    borrowOnBehalfCall::SIGNATURE,
    borrowOnBehalfSharesCall::SIGNATURE,
    repayCall::SIGNATURE,
    repayOnBehalfCall::SIGNATURE,
    repayOnBehalfSharesCall::SIGNATURE,
];

impl MarketParams {
    pub fn new(
        loan_token: Address,
        collateral_token: Address,
        oracle: Address,
        irm: Address,
        lltv: U256,
    ) -> Self {
        Self {
            loanToken: loan_token,
            collateralToken: collateral_token,
            oracle,
            irm,
            lltv,
        }
    }
}

fn call(c: MorphoBlueCall) -> ConnectorCall {
    ConnectorCall::MorphoBlue(c)
}

pub fn supply_collateral(
    market: MarketParams,
    assets: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::supplyCollateral(supplyCollateralCall {
        marketParams: market,
        assets,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn supply_collateral_on_behalf(
    market: MarketParams,
    assets: U256,
    on_behalf: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::supplyCollateralOnBehalf(supplyCollateralOnBehalfCall {
        marketParams: market,
        assets,
        onBehalf: on_behalf,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn withdraw_collateral(
    market: MarketParams,
    assets: U256,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::withdrawCollateral(withdrawCollateralCall {
        marketParams: market,
        assets,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn withdraw_collateral_on_behalf(
    market: MarketParams,
    assets: U256,
    on_behalf: Address,
    receiver: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::withdrawCollateralOnBehalf(withdrawCollateralOnBehalfCall {
        marketParams: market,
        assets,
        onBehalf: on_behalf,
        receiver,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn borrow(market: MarketParams, assets: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    call(MorphoBlueCall::borrow(borrowCall {
        marketParams: market,
        assets,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn borrow_on_behalf(
    market: MarketParams,
    assets: U256,
    on_behalf: Address,
    receiver: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::borrowOnBehalf(borrowOnBehalfCall {
        marketParams: market,
        assets,
        onBehalf: on_behalf,
        receiver,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn borrow_on_behalf_shares(
    market: MarketParams,
    shares: U256,
    on_behalf: Address,
    receiver: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::borrowOnBehalfShares(borrowOnBehalfSharesCall {
        marketParams: market,
        shares,
        onBehalf: on_behalf,
        receiver,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn repay(market: MarketParams, assets: U256, get_id: U256, set_id: U256) -> ConnectorCall {
    call(MorphoBlueCall::repay(repayCall {
        marketParams: market,
        assets,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn repay_on_behalf(
    market: MarketParams,
    assets: U256,
    on_behalf: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::repayOnBehalf(repayOnBehalfCall {
        marketParams: market,
        assets,
        onBehalf: on_behalf,
        getId: get_id,
        setId: set_id,
    }))
}

pub fn repay_on_behalf_shares(
    market: MarketParams,
    shares: U256,
    on_behalf: Address,
    get_id: U256,
    set_id: U256,
) -> ConnectorCall {
    call(MorphoBlueCall::repayOnBehalfShares(repayOnBehalfSharesCall {
        marketParams: market,
        shares,
        onBehalf: on_behalf,
        getId: get_id,
        setId: set_id,
    }))
}
