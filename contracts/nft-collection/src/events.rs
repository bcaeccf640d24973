use soroban_sdk::{contractevent, Address};

/// Event emitted when a token is minted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEventData {
    #[topic]
    pub to: Address,
    pub token_id: u64,
}

/// Event emitted when an approval is set or cleared
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovedEventData {
    #[topic]
    pub owner: Address,
    pub token_id: u64,
}

/// Event emitted when a token changes hands
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEventData {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub token_id: u64,
}
