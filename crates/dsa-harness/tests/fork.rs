mod common;

use alloy_primitives::{address, Address};
use common::Scenario;
use dsa_spells::chains::MAINNET;
use dsa_spells::tokens::ether;

const BLOCK: u64 = 19_001_037;
const NEXT_BLOCK: u64 = BLOCK + 100;
const STRANGER: Address = address!("00000000000000000000000000000000000b0b0b");

#[tokio::test]
#[ignore = "needs ALCHEMY_API_KEY and anvil"]
async fn reset_discards_local_state_and_refunds_dev_accounts() -> anyhow::Result<()> {
    let mut s = Scenario::fork(&MAINNET, BLOCK).await?;
    let wallet0 = s.chain.wallet0;
    let dev_balance = s.eth_balance(wallet0).await?;
    let forked = s.eth_balance(STRANGER).await?;

    s.chain.set_balance(STRANGER, ether(42)).await?;
    s.chain.fund_eth(s.chain.wallet1, ether(1)).await?;
    assert_eq!(s.eth_balance(STRANGER).await?, ether(42));
    assert!(s.eth_balance(wallet0).await? < dev_balance);

    s.chain.reset(NEXT_BLOCK).await?;
    assert_eq!(s.chain.block(), NEXT_BLOCK);
    assert_eq!(s.eth_balance(STRANGER).await?, forked);
    assert_eq!(s.eth_balance(wallet0).await?, dev_balance);
    Ok(())
}
