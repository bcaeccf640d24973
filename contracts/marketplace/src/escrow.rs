//! Custody moves between sellers, bidders and the marketplace.
//!
//! Every external call goes through the generated `try_*` client methods so a
//! rejected transfer surfaces as [`Error::TransferFailed`] instead of a trap.
//! Callers return that error straight out of the contract function, which
//! makes the host discard every write of the invocation.

use soroban_sdk::{contractclient, log, symbol_short, token, Address, Env, String, Symbol};

use crate::errors::Error;

/// Capabilities the marketplace consumes from the item collection.
#[allow(dead_code)]
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
    fn mint(env: Env, to: Address, uri: String) -> u64;
}

fn settled<T, C, I>(e: &Env, what: Symbol, result: Result<Result<T, C>, I>) -> Result<T, Error> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => {
            log!(e, "transfer rejected: {}", what);
            Err(Error::TransferFailed)
        }
    }
}

/// Fails with `NotItemOwner` unless the collection reports `owner` as the
/// holder of `item_id`. Unknown ids count as not owned.
pub fn ensure_owner(e: &Env, nft: &Address, owner: &Address, item_id: u64) -> Result<(), Error> {
    match AssetRegistryClient::new(e, nft).try_owner_of(&item_id) {
        Ok(Ok(current)) if current == *owner => Ok(()),
        _ => Err(Error::NotItemOwner),
    }
}

/// Move an item with the marketplace acting as spender. Pulling into custody
/// requires the holder to have approved the marketplace beforehand.
pub fn move_item(
    e: &Env,
    nft: &Address,
    from: &Address,
    to: &Address,
    item_id: u64,
) -> Result<(), Error> {
    let client = AssetRegistryClient::new(e, nft);
    let result = client.try_transfer_from(&e.current_contract_address(), from, to, &item_id);
    settled(e, symbol_short!("item"), result)
}

/// Mint through the collection. Fails with `MintFailed` when the collection
/// rejects the call, e.g. because the marketplace is not its minter.
pub fn mint_item(e: &Env, nft: &Address, to: &Address, uri: &String) -> Result<u64, Error> {
    match AssetRegistryClient::new(e, nft).try_mint(to, uri) {
        Ok(Ok(item_id)) => Ok(item_id),
        _ => {
            log!(e, "mint rejected by collection");
            Err(Error::MintFailed)
        }
    }
}

/// Spend `from`'s allowance to the marketplace. `to` is either the
/// marketplace itself (escrow) or a seller (direct payment).
pub fn pull_funds(
    e: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::TokenClient::new(e, token);
    let result = client.try_transfer_from(&e.current_contract_address(), from, to, &amount);
    settled(e, symbol_short!("funds"), result)
}

/// Pay escrowed funds out of the marketplace balance.
pub fn pay_out(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::TokenClient::new(e, token);
    let result = client.try_transfer(&e.current_contract_address(), to, &amount);
    settled(e, symbol_short!("payout"), result)
}
