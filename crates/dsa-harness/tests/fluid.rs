mod common;

use alloy_primitives::{address, Address, I256, U256};
use common::{zero_ids, Scenario};
use dsa_spells::chains::{MAINNET, POLYGON};
use dsa_spells::connectors::fluid;
use dsa_spells::tokens::{ether, mainnet::WSTETH, polygon, units};
use dsa_spells::{ConnectorKind, Spell};

const CONNECTOR: &str = "FLUID";

const VAULT_WSTETH_ETH: Address = address!("28680f14C4Bb86B71119BC6e90E4e6D87E6D1f51");
const WSTETH_HOLDER: Address = address!("17170904077C84F26c190eC05fF414B7045F4652");

const VAULT_MATIC_USDC: Address = address!("2226FFAE044B9fd4ED991aDf20CAACF8E8302510");
const POLYGON_WETH_HOLDER: Address = address!("deD8C5159CA3673f543D0F72043E4c655b35b96A");
const POLYGON_USDC_HOLDER: Address = address!("A67EFB69A4f58F568aAB1b9d51110102985835b0");
const SET_ID_MATIC_USDC: u64 = 83_478_237;

fn operate(nft_id: u64, new_col: I256, new_debt: I256, repay_approve: U256) -> Vec<Spell> {
    vec![Spell::typed(
        CONNECTOR,
        fluid::operate(VAULT_WSTETH_ETH, U256::from(nft_id), new_col, new_debt, repay_approve),
    )]
}

#[tokio::test]
#[ignore = "needs ALCHEMY_API_KEY, anvil and compiled artifacts"]
async fn mainnet_wsteth_eth_vault() -> anyhow::Result<()> {
    let mut s = Scenario::fork(&MAINNET, 19_261_868).await?;
    s.enable(CONNECTOR, ConnectorKind::Fluid).await?;
    let dsa = s.build_dsa().await?;

    s.chain.fund_erc20(WSTETH, WSTETH_HOLDER, dsa.address, ether(20)).await?;
    assert!(s.token_balance(WSTETH, dsa.address).await? >= ether(20));

    let ten = I256::try_from(ether(10))?;
    let cast = s.cast(&dsa, operate(0, ten, I256::ZERO, U256::ZERO)).await?;
    assert_eq!(cast.event_names.len(), 1);
    assert!(cast.event_names[0].starts_with("LogOperate"), "{:?}", cast.event_names);

    // Position 6 is the one minted above at this block.
    let nft_id: u64 = 6;
    let vault = VAULT_WSTETH_ETH.to_string();
    let nft = nft_id.to_string();
    let all = I256::MAX.to_string();
    let args = [vault.as_str(), nft.as_str(), all.as_str(), "0", "0"];
    let max = s.encoder().parse_spell(CONNECTOR, "operate", &args)?;
    s.cast(&dsa, vec![max]).await?;
    assert_eq!(s.token_balance(WSTETH, dsa.address).await?, U256::ZERO);

    s.cast(&dsa, operate(nft_id, I256::ZERO, I256::try_from(ether(1))?, U256::ZERO))
        .await?;
    assert!(s.eth_balance(dsa.address).await? >= ether(1));

    s.chain.set_balance(dsa.address, ether(2)).await?;
    s.cast(&dsa, operate(nft_id, I256::ZERO, I256::MIN, ether(1))).await?;
    assert!(s.eth_balance(dsa.address).await? < ether(2));

    let minus_two = -I256::try_from(ether(2))?;
    s.cast(&dsa, operate(nft_id, minus_two, I256::ZERO, U256::ZERO)).await?;
    assert!(s.token_balance(WSTETH, dsa.address).await? >= ether(2));

    s.cast(&dsa, operate(nft_id, I256::MIN, I256::ZERO, U256::ZERO)).await?;
    assert!(s.token_balance(WSTETH, dsa.address).await? > ether(19));
    Ok(())
}

#[tokio::test]
#[ignore = "needs ALCHEMY_API_KEY, anvil and compiled artifacts"]
async fn polygon_matic_deposit_stores_nft_id() -> anyhow::Result<()> {
    let mut s = Scenario::fork(&POLYGON, 53_327_050).await?;
    s.enable(CONNECTOR, ConnectorKind::FluidPolygon).await?;
    let dsa = s.build_dsa().await?;

    s.chain.fund_eth(dsa.address, ether(2000)).await?;
    s.chain
        .fund_erc20(polygon::WETH, POLYGON_WETH_HOLDER, dsa.address, ether(20))
        .await?;
    s.chain
        .fund_erc20(polygon::USDC, POLYGON_USDC_HOLDER, dsa.address, units(20, 6))
        .await?;
    assert!(s.eth_balance(dsa.address).await? >= ether(2000));

    let before = s.eth_balance(dsa.address).await?;
    let mut set_ids = zero_ids(fluid::POLYGON_ID_SLOTS);
    set_ids[1] = U256::from(SET_ID_MATIC_USDC);
    let deposit = fluid::operate_polygon(
        VAULT_MATIC_USDC,
        U256::ZERO,
        I256::try_from(ether(1000))?,
        I256::ZERO,
        U256::ZERO,
        zero_ids(fluid::POLYGON_ID_SLOTS),
        set_ids,
    );
    let cast = s.cast(&dsa, vec![Spell::typed(CONNECTOR, deposit)]).await?;

    let after = s.eth_balance(dsa.address).await?;
    assert_eq!(before - after, ether(1000));

    assert_eq!(cast.event_params.len(), 1);
    let operated = fluid::decode_log_operate(&cast.event_params[0])?;
    assert_eq!(operated.vaultAddress, VAULT_MATIC_USDC);
    assert_eq!(operated.newCol, I256::try_from(ether(1000))?);
    assert_ne!(operated.nftId, U256::ZERO, "a new position was minted");
    Ok(())
}
