use soroban_sdk::{contractevent, Address};

/// Event emitted when an item is minted through the marketplace
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCreatedEventData {
    #[topic]
    pub creator: Address,
    pub item_id: u64,
}

/// Event emitted when an item is listed for direct sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListedForSaleEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub item_id: u64,
    pub price: i128,
}

/// Event emitted when a sale listing is withdrawn
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelledEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub item_id: u64,
}

/// Event emitted when a listed item is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoldEventData {
    #[topic]
    pub item_id: u64,
    pub seller: Address,
    pub buyer: Address,
    pub price: i128,
}

/// Event emitted when an auction starts
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub item_id: u64,
    pub deadline: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub item_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction settles to its highest bidder
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub item_id: u64,
    pub seller: Address,
    pub bidder: Address,
    pub bid: i128,
}

/// Event emitted when an auction ends without a sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub item_id: u64,
    pub seller: Address,
    pub total_bids: u32,
}

/// Event emitted when the owner role changes hands
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEventData {
    #[topic]
    pub previous_owner: Address,
    #[topic]
    pub new_owner: Address,
}
