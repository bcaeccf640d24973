use soroban_sdk::contracterror;

/// Error codes for the MarketX NFT marketplace contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the marketplace owner
    NotAuthorized = 3,
    /// Listing price must be strictly positive
    InvalidPrice = 4,
    /// Auction period must be strictly positive
    InvalidPeriod = 5,
    /// Item has no active sale listing
    NotListed = 6,
    /// Caller is not the seller of the listing
    NotSeller = 7,
    /// Item has no active auction
    AuctionMissing = 8,
    /// Auction deadline has passed
    AuctionEnded = 9,
    /// Auction deadline has not been reached yet
    AuctionActive = 10,
    /// Bid does not exceed the current bid
    BidTooLow = 11,
    /// Asset or settlement transfer was rejected
    TransferFailed = 12,
    /// Caller does not own the item
    NotItemOwner = 13,
    /// Collection refused to mint the item
    MintFailed = 14,
}
