#![no_std]

//! # MarketX NFT Marketplace
//!
//! Soroban contract trading items of a single NFT collection for a single
//! settlement token, either at a fixed price or through an English auction.
//!
//! ## Custody
//!
//! Listing an item moves it from the seller into the marketplace, so the
//! collection reports the marketplace as owner for as long as a sale or
//! auction record exists. The highest bid of an auction is likewise held by
//! the marketplace; an outbid bidder is refunded within the same invocation
//! that accepts the new bid.
//!
//! ## Atomicity
//!
//! Each entry point validates first, then moves items and funds, and writes
//! its own record last. A rejected transfer is returned as
//! [`Error::TransferFailed`], and the runtime rolls back every change made by
//! the invocation, including a refund that already went through.
//!
//! ## Modules
//!
//! - [`errors`]: [`Error`] codes returned by fallible entry points.
//! - [`types`]: records, configuration and storage keys.
//! - `escrow`: collection/token clients and custody moves.

mod errors;
mod escrow;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
pub use crate::types::{AuctionRecord, MarketplaceConfig, SaleRecord};
use crate::types::{DEFAULT_AUCTION_PERIOD, DEFAULT_MIN_BIDS};

#[contract]
pub struct NftMarketplace;

#[contractimpl]
impl NftMarketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace.
    ///
    /// # Arguments
    /// * `owner` - Address allowed to change auction parameters
    /// * `nft` - Collection contract; the marketplace should be its minter
    /// * `token` - Settlement token contract
    ///
    /// The auction period defaults to 3 days and the minimum bid count to 2.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, owner: Address, nft: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = MarketplaceConfig {
            owner,
            nft,
            token,
            period: DEFAULT_AUCTION_PERIOD,
            min_bids: DEFAULT_MIN_BIDS,
        };
        set_config(e, &config);

        Ok(())
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Set the duration of auctions started from now on (owner only).
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - If caller is not the owner
    /// * `Error::InvalidPeriod` - If `period` is zero
    pub fn set_auction_period(e: &Env, owner: Address, period: u64) -> Result<(), Error> {
        let mut config = Self::require_owner(e, &owner)?;

        if period == 0 {
            return Err(Error::InvalidPeriod);
        }

        config.period = period;
        set_config(e, &config);
        Ok(())
    }

    /// Set the number of bids an auction needs to settle (owner only).
    /// Zero is allowed.
    pub fn set_min_bids(e: &Env, owner: Address, min_bids: u32) -> Result<(), Error> {
        let mut config = Self::require_owner(e, &owner)?;

        config.min_bids = min_bids;
        set_config(e, &config);
        Ok(())
    }

    /// Hand the owner role to `new_owner` (owner only).
    pub fn transfer_ownership(e: &Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        let mut config = Self::require_owner(e, &owner)?;

        config.owner = new_owner.clone();
        set_config(e, &config);

        OwnershipTransferredEventData {
            previous_owner: owner,
            new_owner,
        }
        .publish(e);

        Ok(())
    }

    pub fn owner(e: &Env) -> Result<Address, Error> {
        Ok(Self::config(e)?.owner)
    }

    pub fn nft(e: &Env) -> Result<Address, Error> {
        Ok(Self::config(e)?.nft)
    }

    pub fn token(e: &Env) -> Result<Address, Error> {
        Ok(Self::config(e)?.token)
    }

    pub fn period(e: &Env) -> Result<u64, Error> {
        Ok(Self::config(e)?.period)
    }

    pub fn min_bids(e: &Env) -> Result<u32, Error> {
        Ok(Self::config(e)?.min_bids)
    }

    // ========================================================================
    // ITEMS
    // ========================================================================

    /// Mint a new item of the collection to `creator`.
    ///
    /// # Returns
    /// * Id of the new item
    ///
    /// # Errors
    /// * `Error::MintFailed` - If the collection rejects the mint
    pub fn create_item(e: &Env, creator: Address, uri: String) -> Result<u64, Error> {
        creator.require_auth();

        let config = Self::config(e)?;
        let item_id = escrow::mint_item(e, &config.nft, &creator, &uri)?;

        ItemCreatedEventData { creator, item_id }.publish(e);

        extend_instance_ttl(e);
        Ok(item_id)
    }

    // ========================================================================
    // DIRECT SALE
    // ========================================================================

    /// List an item for sale at a fixed price.
    ///
    /// The seller must own the item and have approved the marketplace for it.
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - If `price` is not positive
    /// * `Error::NotItemOwner` - If `seller` does not own the item
    /// * `Error::TransferFailed` - If the marketplace is not approved
    pub fn list_item(e: &Env, seller: Address, item_id: u64, price: i128) -> Result<(), Error> {
        seller.require_auth();

        let config = Self::config(e)?;

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        Self::take_custody(e, &config, &seller, item_id)?;

        set_sale(
            e,
            item_id,
            &SaleRecord {
                seller: seller.clone(),
                price,
            },
        );

        ListedForSaleEventData {
            seller,
            item_id,
            price,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Withdraw a sale listing and return the item (seller only).
    ///
    /// # Errors
    /// * `Error::NotListed` - If the item is not listed for sale
    /// * `Error::NotSeller` - If caller is not the seller
    pub fn cancel(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let config = Self::config(e)?;
        let sale = get_sale(e, item_id).ok_or(Error::NotListed)?;

        if sale.seller != seller {
            return Err(Error::NotSeller);
        }

        escrow::move_item(e, &config.nft, &e.current_contract_address(), &seller, item_id)?;
        remove_sale(e, item_id);

        CancelledEventData { seller, item_id }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Buy a listed item. The buyer must have approved the marketplace to
    /// spend at least the listing price.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the item is not listed for sale
    /// * `Error::TransferFailed` - If the buyer's balance or allowance is short
    pub fn buy_item(e: &Env, buyer: Address, item_id: u64) -> Result<(), Error> {
        buyer.require_auth();

        let config = Self::config(e)?;
        let sale = get_sale(e, item_id).ok_or(Error::NotListed)?;

        escrow::pull_funds(e, &config.token, &buyer, &sale.seller, sale.price)?;
        escrow::move_item(e, &config.nft, &e.current_contract_address(), &buyer, item_id)?;
        remove_sale(e, item_id);

        log!(e, "item {} sold for {}", item_id, sale.price);

        SoldEventData {
            item_id,
            seller: sale.seller,
            buyer,
            price: sale.price,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Get the sale listing of an item
    pub fn sale_info(e: &Env, item_id: u64) -> Result<SaleRecord, Error> {
        get_sale(e, item_id).ok_or(Error::NotListed)
    }

    // ========================================================================
    // AUCTION
    // ========================================================================

    /// Put an item up for auction. The deadline is fixed at
    /// `now + period` using the period configured at this moment.
    ///
    /// # Errors
    /// * `Error::NotItemOwner` - If `seller` does not own the item
    /// * `Error::TransferFailed` - If the marketplace is not approved
    pub fn list_item_on_auction(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let config = Self::config(e)?;

        Self::take_custody(e, &config, &seller, item_id)?;

        let start_time = e.ledger().timestamp();
        let deadline = start_time.saturating_add(config.period);

        set_auction(
            e,
            item_id,
            &AuctionRecord {
                seller: seller.clone(),
                bidder: None,
                bid: 0,
                total_bids: 0,
                start_time,
                deadline,
            },
        );

        AuctionStartedEventData {
            seller,
            item_id,
            deadline,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Place a bid. `amount` is taken into escrow and the previous highest
    /// bidder gets their bid back.
    ///
    /// # Errors
    /// * `Error::AuctionMissing` - If the item is not on auction
    /// * `Error::AuctionEnded` - If the deadline has been reached
    /// * `Error::BidTooLow` - If `amount` does not exceed the current bid
    /// * `Error::TransferFailed` - If the refund or the escrow pull fails
    pub fn make_bid(e: &Env, bidder: Address, item_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = Self::config(e)?;
        let mut auction = get_auction(e, item_id).ok_or(Error::AuctionMissing)?;

        if e.ledger().timestamp() >= auction.deadline {
            return Err(Error::AuctionEnded);
        }

        if amount <= auction.bid {
            return Err(Error::BidTooLow);
        }

        if let Some(previous) = &auction.bidder {
            escrow::pay_out(e, &config.token, previous, auction.bid)?;
        }
        escrow::pull_funds(e, &config.token, &bidder, &e.current_contract_address(), amount)?;

        auction.bidder = Some(bidder.clone());
        auction.bid = amount;
        auction.total_bids = auction.total_bids.saturating_add(1);
        set_auction(e, item_id, &auction);

        log!(e, "bid {} accepted on item {}", amount, item_id);

        BidPlacedEventData {
            item_id,
            bidder,
            amount,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Resolve an auction after its deadline. Anyone may call this.
    ///
    /// With at least `min_bids` bids and a bidder the item goes to the bidder
    /// and the bid to the seller. Otherwise the item returns to the seller and
    /// any escrowed bid to its bidder.
    ///
    /// # Errors
    /// * `Error::AuctionMissing` - If the item is not on auction
    /// * `Error::AuctionActive` - If the deadline has not been reached
    pub fn finish_auction(e: &Env, item_id: u64) -> Result<(), Error> {
        let config = Self::config(e)?;
        let auction = get_auction(e, item_id).ok_or(Error::AuctionMissing)?;

        if e.ledger().timestamp() < auction.deadline {
            return Err(Error::AuctionActive);
        }

        let marketplace = e.current_contract_address();

        match auction.bidder {
            Some(bidder) if auction.total_bids >= config.min_bids => {
                escrow::move_item(e, &config.nft, &marketplace, &bidder, item_id)?;
                escrow::pay_out(e, &config.token, &auction.seller, auction.bid)?;
                remove_auction(e, item_id);

                log!(e, "auction on item {} settled", item_id);

                AuctionSettledEventData {
                    item_id,
                    seller: auction.seller,
                    bidder,
                    bid: auction.bid,
                }
                .publish(e);
            }
            bidder => {
                escrow::move_item(e, &config.nft, &marketplace, &auction.seller, item_id)?;
                if let Some(bidder) = bidder {
                    escrow::pay_out(e, &config.token, &bidder, auction.bid)?;
                }
                remove_auction(e, item_id);

                log!(e, "auction on item {} closed without sale", item_id);

                AuctionCancelledEventData {
                    item_id,
                    seller: auction.seller,
                    total_bids: auction.total_bids,
                }
                .publish(e);
            }
        }

        extend_instance_ttl(e);
        Ok(())
    }

    /// Get the auction of an item
    pub fn auction_info(e: &Env, item_id: u64) -> Result<AuctionRecord, Error> {
        get_auction(e, item_id).ok_or(Error::AuctionMissing)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn config(e: &Env) -> Result<MarketplaceConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    fn require_owner(e: &Env, owner: &Address) -> Result<MarketplaceConfig, Error> {
        owner.require_auth();

        let config = Self::config(e)?;
        if *owner != config.owner {
            return Err(Error::NotAuthorized);
        }
        Ok(config)
    }

    /// Verify `seller` holds the item, then pull it into marketplace custody.
    fn take_custody(
        e: &Env,
        config: &MarketplaceConfig,
        seller: &Address,
        item_id: u64,
    ) -> Result<(), Error> {
        escrow::ensure_owner(e, &config.nft, seller, item_id)?;
        escrow::move_item(e, &config.nft, seller, &e.current_contract_address(), item_id)
    }
}
