use soroban_sdk::contracterror;

/// Error codes for the collection contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    /// Minter entry is missing from instance storage
    NotInitialized = 1,
    /// No token exists with the given id
    TokenNotFound = 2,
    /// `from` does not own the token
    NotOwner = 3,
    /// Spender is neither the owner nor the approved address
    NotApproved = 4,
}
