use soroban_sdk::Env;

use crate::types::{
    AuctionRecord, MarketplaceConfig, SaleRecord, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Config)
}

/// Get marketplace configuration
pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    e.storage().instance().get(&StorageKey::Config)
}

/// Set marketplace configuration
pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
    extend_instance_ttl(e);
}

/// Extend the TTL of instance storage.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// SALE STORAGE
// ============================================================================

/// Get the sale listing for an item
pub fn get_sale(e: &Env, item_id: u64) -> Option<SaleRecord> {
    let key = StorageKey::Sale(item_id);
    let sale = e.storage().persistent().get::<_, SaleRecord>(&key);
    if sale.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    sale
}

/// Set the sale listing for an item
pub fn set_sale(e: &Env, item_id: u64, sale: &SaleRecord) {
    let key = StorageKey::Sale(item_id);
    e.storage().persistent().set(&key, sale);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove the sale listing for an item
pub fn remove_sale(e: &Env, item_id: u64) {
    e.storage().persistent().remove(&StorageKey::Sale(item_id));
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get the auction for an item
pub fn get_auction(e: &Env, item_id: u64) -> Option<AuctionRecord> {
    let key = StorageKey::Auction(item_id);
    let auction = e.storage().persistent().get::<_, AuctionRecord>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Set the auction for an item
pub fn set_auction(e: &Env, item_id: u64, auction: &AuctionRecord) {
    let key = StorageKey::Auction(item_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove the auction for an item
pub fn remove_auction(e: &Env, item_id: u64) {
    e.storage().persistent().remove(&StorageKey::Auction(item_id));
}
