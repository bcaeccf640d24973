use soroban_sdk::{contracttype, Address};

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Marketplace configuration
    Config,
    /// Direct sale listing by item id
    Sale(u64),
    /// Auction by item id
    Auction(u64),
}

/// Marketplace-wide configuration, mutable only by `owner`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    /// Address allowed to change auction parameters
    pub owner: Address,
    /// Collection contract whose items are traded
    pub nft: Address,
    /// Token used to settle sales and bids
    pub token: Address,
    /// Auction duration in seconds, applied to auctions started afterwards
    pub period: u64,
    /// Bids required for an auction to settle to its highest bidder
    pub min_bids: u32,
}

/// Fixed-price listing. Exists only while the item is held for sale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleRecord {
    pub seller: Address,
    pub price: i128,
}

/// English auction state for one item.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionRecord {
    /// Address that put the item up for auction
    pub seller: Address,
    /// Current highest bidder, whose funds are held in escrow
    pub bidder: Option<Address>,
    /// Current highest bid (0 before the first bid)
    pub bid: i128,
    /// Number of accepted bids
    pub total_bids: u32,
    /// Ledger timestamp the auction started at
    pub start_time: u64,
    /// `start_time + period`, fixed at creation
    pub deadline: u64,
}

/// Default auction duration: 3 days
pub const DEFAULT_AUCTION_PERIOD: u64 = 3 * 24 * 60 * 60;

/// Default minimum number of bids for an auction to settle
pub const DEFAULT_MIN_BIDS: u32 = 2;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
