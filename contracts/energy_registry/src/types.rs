use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    AssetCount,
    Asset(u64),
    AssetsByOwner(Address),
    AssetsByLocation(String),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetType {
    Solar,
    Wind,
    Hydro,
    Battery,
    Generator,
}

impl AssetType {
    const ALL: [AssetType; 5] = [
        AssetType::Solar,
        AssetType::Wind,
        AssetType::Hydro,
        AssetType::Battery,
        AssetType::Generator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Solar => "solar",
            AssetType::Wind => "wind",
            AssetType::Hydro => "hydro",
            AssetType::Battery => "battery",
            AssetType::Generator => "generator",
        }
    }

    pub fn from_string(env: &Env, value: &String) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| *value == String::from_str(env, kind.as_str()))
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnergyAsset {
    pub id: u64,
    pub owner: Address,
    pub asset_type: AssetType,
    pub capacity_kw: u64,
    pub location: String,
    /// Fixed-width digest of the off-chain metadata document. Not checked for hex.
    pub metadata_hash: String,
    /// Ledger sequence at registration.
    pub registered_at: u32,
    pub active: bool,
    /// One-way. Freezes metadata and ownership, not deactivation.
    pub locked: bool,
}
