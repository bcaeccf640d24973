#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Env, String,
};

use crate::{NftCollection, NftCollectionClient, NftError};

fn setup_test() -> (Env, Address, NftCollectionClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    let minter = Address::generate(&env);
    let contract_id = env.register(NftCollection, (minter.clone(),));
    let client = NftCollectionClient::new(&env, &contract_id);

    (env, minter, client)
}

fn uri(env: &Env) -> String {
    String::from_str(env, "ipfs//")
}

#[test]
fn test_minter_set_at_deployment() {
    let (_env, minter, client) = setup_test();

    assert_eq!(client.minter(), minter);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_mint_requires_minter_auth() {
    let (env, minter, client) = setup_test();
    let alice = Address::generate(&env);

    client.mint(&alice, &uri(&env));

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, minter);
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&alice, &uri(&env)), 0);
    assert_eq!(client.mint(&bob, &uri(&env)), 1);
    assert_eq!(client.mint(&alice, &uri(&env)), 2);

    assert_eq!(client.owner_of(&0), alice);
    assert_eq!(client.owner_of(&1), bob);
    assert_eq!(client.balance_of(&alice), 2);
    assert_eq!(client.balance_of(&bob), 1);
    assert_eq!(client.total_supply(), 3);
    assert_eq!(client.token_uri(&1), uri(&env));
}

#[test]
fn test_unknown_token() {
    let (_env, _, client) = setup_test();

    assert_eq!(client.try_owner_of(&7), Err(Ok(NftError::TokenNotFound)));
    assert_eq!(client.try_token_uri(&7), Err(Ok(NftError::TokenNotFound)));
}

#[test]
fn test_owner_transfers_directly() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let id = client.mint(&alice, &uri(&env));

    client.transfer_from(&alice, &alice, &bob, &id);

    assert_eq!(client.owner_of(&id), bob);
    assert_eq!(client.balance_of(&alice), 0);
    assert_eq!(client.balance_of(&bob), 1);
}

#[test]
fn test_approved_spender_transfers_and_approval_is_cleared() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let market = Address::generate(&env);
    let id = client.mint(&alice, &uri(&env));

    client.approve(&alice, &Some(market.clone()), &id);
    assert_eq!(client.get_approved(&id), Some(market.clone()));

    client.transfer_from(&market, &alice, &market, &id);

    assert_eq!(client.owner_of(&id), market);
    assert_eq!(client.get_approved(&id), None);
}

#[test]
fn test_unapproved_spender_rejected() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);
    let id = client.mint(&alice, &uri(&env));

    let result = client.try_transfer_from(&mallory, &alice, &mallory, &id);

    assert_eq!(result, Err(Ok(NftError::NotApproved)));
    assert_eq!(client.owner_of(&id), alice);
}

#[test]
fn test_transfer_from_wrong_owner_rejected() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let id = client.mint(&alice, &uri(&env));

    let result = client.try_transfer_from(&bob, &bob, &alice, &id);

    assert_eq!(result, Err(Ok(NftError::NotOwner)));
}

#[test]
fn test_only_owner_can_approve() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let id = client.mint(&alice, &uri(&env));

    let result = client.try_approve(&bob, &Some(bob.clone()), &id);

    assert_eq!(result, Err(Ok(NftError::NotOwner)));
    assert_eq!(client.get_approved(&id), None);
}

#[test]
fn test_clear_approval() {
    let (env, _, client) = setup_test();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let id = client.mint(&alice, &uri(&env));

    client.approve(&alice, &Some(bob.clone()), &id);
    client.approve(&alice, &None, &id);

    assert_eq!(client.get_approved(&id), None);
    assert_eq!(
        client.try_transfer_from(&bob, &alice, &bob, &id),
        Err(Ok(NftError::NotApproved))
    );
}
