use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Active = 0,
    Ended = 1,
    Cancelled = 2,
}

/// How winning funds are settled: the wrapped native asset configured at
/// initialization, or an arbitrary fungible token contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement {
    Native,
    Token(Address),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BidKind {
    Native = 0,
    Fungible = 1,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    pub collection: Address,
    pub item: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub settlement: Settlement,
    pub status: AuctionStatus,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub kind: BidKind,
    pub timestamp: u64,
}

#[contracttype]
pub enum DataKey {
    Initialized,
    Factory,
    Beacon,
    NativeToken,
    Auction(u64),
    BidHistory(u64),
    EscrowedFunds(u64, Address),
}
