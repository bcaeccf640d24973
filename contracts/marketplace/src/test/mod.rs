
use crate::{NftMarketplace, NftMarketplaceClient};
use marketx_nft_collection::{NftCollection, NftCollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, IssuerFlags, Ledger, LedgerInfo},
    token, vec, Address, Env, Event, String,
};

pub const START_TIME: u64 = 1000;

pub struct TestContext {
    pub env: Env,
    pub client: NftMarketplaceClient<'static>,
    pub nft: NftCollectionClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub owner: Address,
    pub seller: Address,
    pub buyer: Address,
    pub buyer2: Address,
}

fn ledger_info(timestamp: u64) -> LedgerInfo {
    LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    }
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set(ledger_info(START_TIME));

    let marketplace_id = env.register(NftMarketplace, ());
    let client = NftMarketplaceClient::new(&env, &marketplace_id);

    let nft_id = env.register(NftCollection, (marketplace_id.clone(),));
    let nft = NftCollectionClient::new(&env, &nft_id);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    token_contract.issuer().set_flag(IssuerFlags::RevocableFlag);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    let owner = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);
    let buyer2 = Address::generate(&env);

    client.initialize(&owner, &nft_id, &token_contract.address());

    TestContext {
        env,
        client,
        nft,
        token,
        token_admin,
        owner,
        seller,
        buyer,
        buyer2,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(ledger_info(env.ledger().timestamp() + seconds));
}

impl TestContext {
    pub fn marketplace(&self) -> Address {
        self.client.address.clone()
    }

    /// Assert that the most recent event published by the marketplace
    /// matches `expected`, topics and data alike.
    pub fn assert_last_event(&self, expected: impl Event) {
        let marketplace = self.marketplace();
        let last = self
            .env
            .events()
            .all()
            .iter()
            .filter(|(contract, _, _)| *contract == marketplace)
            .last()
            .expect("marketplace published no event");

        assert_eq!(
            vec![&self.env, last],
            vec![
                &self.env,
                (
                    marketplace,
                    expected.topics(&self.env),
                    expected.data(&self.env)
                )
            ]
        );
    }

    /// Mint an item to `holder` through the marketplace.
    pub fn mint(&self, holder: &Address) -> u64 {
        self.client
            .create_item(holder, &String::from_str(&self.env, "ipfs//"))
    }

    /// Let the marketplace move `item_id` on behalf of `holder`.
    pub fn approve_item(&self, holder: &Address, item_id: u64) {
        self.nft
            .approve(holder, &Some(self.marketplace()), &item_id);
    }

    /// Mint settlement tokens to `user` and approve the marketplace for the
    /// user's whole balance.
    pub fn fund(&self, user: &Address, amount: i128) {
        self.token_admin.mint(user, &amount);
        self.approve_funds(user, self.token.balance(user));
    }

    pub fn approve_funds(&self, user: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 1000;
        self.token
            .approve(user, &self.marketplace(), &amount, &expiration);
    }

    /// Mint an item to the seller and list it for direct sale.
    pub fn place_sale_order(&self, price: i128) -> u64 {
        let item_id = self.mint(&self.seller);
        self.approve_item(&self.seller, item_id);
        self.client.list_item(&self.seller, &item_id, &price);
        item_id
    }

    /// Mint an item to the seller and put it up for auction.
    pub fn start_auction(&self) -> u64 {
        let item_id = self.mint(&self.seller);
        self.approve_item(&self.seller, item_id);
        self.client.list_item_on_auction(&self.seller, &item_id);
        item_id
    }
}
