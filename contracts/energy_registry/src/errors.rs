use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AssetError {
    Unauthorized = 300,
    AssetExists = 301,
    AssetNotFound = 302,
    InvalidCapacity = 303,
    InvalidLocation = 304,
    NotOwner = 305,
    AssetLocked = 306,
    InvalidMetadata = 307,
}
