use soroban_sdk::{contractevent, Address};

use crate::types::BidKind;

/// Event emitted when the factory opens a new auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionOpened {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub kind: BidKind,
}

/// Event emitted when an auction is finalized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub winning_amount: i128,
}
