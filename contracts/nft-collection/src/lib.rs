#![no_std]

//! # MarketX NFT Collection
//!
//! Minimal non-fungible token contract used as the asset registry of the
//! MarketX NFT marketplace. Every token has one owner, an optional approved
//! spender and a metadata URI. Minting is restricted to a single minter
//! address, normally the marketplace contract itself.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod storage;

pub use errors::NftError;
use events::{ApprovedEventData, MintedEventData, TransferredEventData};

#[contract]
pub struct NftCollection;

#[contractimpl]
impl NftCollection {
    // ========== DEPLOYMENT ==========

    /// Fix the address allowed to mint. Runs once, as part of deployment.
    pub fn __constructor(env: Env, minter: Address) {
        storage::set_minter(&env, &minter);
        storage::extend_instance_ttl(&env);
    }

    pub fn minter(env: Env) -> Result<Address, NftError> {
        storage::get_minter(&env).ok_or(NftError::NotInitialized)
    }

    // ========== MINTING ==========

    /// Mint a new token to `to` and return its id. Ids start at 0.
    ///
    /// # Errors
    /// * `NftError::NotInitialized` - If the minter entry is missing
    pub fn mint(env: Env, to: Address, uri: String) -> Result<u64, NftError> {
        let minter = storage::get_minter(&env).ok_or(NftError::NotInitialized)?;
        minter.require_auth();

        let token_id = storage::next_token_id(&env);
        storage::set_owner(&env, token_id, &to);
        storage::set_uri(&env, token_id, &uri);
        storage::set_balance(&env, &to, storage::get_balance(&env, &to) + 1);

        MintedEventData {
            to: to.clone(),
            token_id,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(token_id)
    }

    // ========== QUERIES ==========

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, NftError> {
        storage::get_owner(&env, token_id).ok_or(NftError::TokenNotFound)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, NftError> {
        storage::get_uri(&env, token_id).ok_or(NftError::TokenNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        storage::get_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u64 {
        storage::total_supply(&env)
    }

    pub fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        storage::get_approved(&env, token_id)
    }

    // ========== TRANSFERS ==========

    /// Set (or clear with `None`) the single address allowed to transfer
    /// `token_id` on behalf of its owner.
    ///
    /// # Errors
    /// * `NftError::TokenNotFound` - Unknown token
    /// * `NftError::NotOwner` - `owner` does not hold the token
    pub fn approve(
        env: Env,
        owner: Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), NftError> {
        owner.require_auth();

        let current = storage::get_owner(&env, token_id).ok_or(NftError::TokenNotFound)?;
        if current != owner {
            return Err(NftError::NotOwner);
        }

        storage::set_approved(&env, token_id, &approved);

        ApprovedEventData { owner, token_id }.publish(&env);
        Ok(())
    }

    /// Move `token_id` from `from` to `to`. `spender` must be the owner or the
    /// approved address. Any approval is cleared by the move.
    ///
    /// # Errors
    /// * `NftError::TokenNotFound` - Unknown token
    /// * `NftError::NotOwner` - `from` does not hold the token
    /// * `NftError::NotApproved` - `spender` may not move the token
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        spender.require_auth();

        let owner = storage::get_owner(&env, token_id).ok_or(NftError::TokenNotFound)?;
        if owner != from {
            return Err(NftError::NotOwner);
        }

        if spender != owner && storage::get_approved(&env, token_id) != Some(spender) {
            return Err(NftError::NotApproved);
        }

        storage::set_approved(&env, token_id, &None);
        storage::set_owner(&env, token_id, &to);
        if from != to {
            storage::set_balance(&env, &from, storage::get_balance(&env, &from) - 1);
            storage::set_balance(&env, &to, storage::get_balance(&env, &to) + 1);
        }

        TransferredEventData { from, to, token_id }.publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }
}

#[cfg(test)]
mod test;
