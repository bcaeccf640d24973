use soroban_sdk::{contracttype, Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Minter,
    TokenCounter,
    Owner(u64),
    Uri(u64),
    Approved(u64),
    Balance(Address),
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Minter ==========

pub fn get_minter(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Minter)
}

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&DataKey::Minter, minter);
}

// ========== Token Counter ==========

/// Returns the id the next mint will receive and advances the counter.
pub fn next_token_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::TokenCounter)
        .unwrap_or(0);
    env.storage().instance().set(&DataKey::TokenCounter, &(id + 1));
    id
}

pub fn total_supply(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TokenCounter)
        .unwrap_or(0)
}

// ========== Ownership ==========

pub fn get_owner(env: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        bump(env, &key);
    }
    owner
}

pub fn set_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    bump(env, &key);
}

pub fn get_uri(env: &Env, token_id: u64) -> Option<String> {
    env.storage().persistent().get(&DataKey::Uri(token_id))
}

pub fn set_uri(env: &Env, token_id: u64, uri: &String) {
    let key = DataKey::Uri(token_id);
    env.storage().persistent().set(&key, uri);
    bump(env, &key);
}

// ========== Approvals ==========

pub fn get_approved(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn set_approved(env: &Env, token_id: u64, approved: &Option<Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(address) => {
            env.storage().persistent().set(&key, address);
            bump(env, &key);
        }
        None => env.storage().persistent().remove(&key),
    }
}

// ========== Balances ==========

pub fn get_balance(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, balance: u64) {
    let key = DataKey::Balance(owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        bump(env, &key);
    }
}
