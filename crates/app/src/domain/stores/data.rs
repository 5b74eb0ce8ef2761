//! Store Data

/// New Store Data
///
/// There is deliberately no owner field: the owner is the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    pub name: String,
    pub description: String,
    pub phone_number: String,
    pub address: String,
    pub since: String,
}

/// Store Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreUpdate {
    pub name: String,
    pub description: String,
    pub phone_number: String,
    pub address: String,
    pub since: String,
}
