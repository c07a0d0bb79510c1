use soroban_sdk::{contracttype, vec, Address, Env, Symbol, Val, Vec};

use crate::Error;

/// Mirror of the beacon's logic descriptor. Wire-compatible with the
/// beacon contract by construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionLogic {
    V1,
    V2(i128),
}

/// Resolve the current descriptor from the beacon. Resolved fresh on every
/// call, never cached, so a beacon upgrade applies to in-flight auctions
/// immediately.
pub fn resolve(env: &Env, beacon: &Address) -> AuctionLogic {
    let args: Vec<Val> = vec![env];
    env.invoke_contract(beacon, &Symbol::new(env, "current_implementation"), args)
}

/// Bidding rules per logic version. Ties are rejected under every version,
/// and the first bid must exceed zero since the cache starts at zero.
pub fn validate_raise(logic: &AuctionLogic, highest_bid: i128, amount: i128) -> Result<(), Error> {
    if amount <= highest_bid {
        return Err(Error::BidTooLow);
    }
    if let AuctionLogic::V2(step) = logic {
        if amount < highest_bid.saturating_add(*step) {
            return Err(Error::BidTooLow);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_accepts_any_strict_raise() {
        assert!(validate_raise(&AuctionLogic::V1, 100, 101).is_ok());
        assert_eq!(
            validate_raise(&AuctionLogic::V1, 100, 100),
            Err(Error::BidTooLow)
        );
        assert_eq!(
            validate_raise(&AuctionLogic::V1, 0, 0),
            Err(Error::BidTooLow)
        );
    }

    #[test]
    fn v2_requires_minimum_step() {
        let logic = AuctionLogic::V2(50);
        assert_eq!(validate_raise(&logic, 100, 101), Err(Error::BidTooLow));
        assert_eq!(validate_raise(&logic, 100, 149), Err(Error::BidTooLow));
        assert!(validate_raise(&logic, 100, 150).is_ok());
    }

    #[test]
    fn v2_still_rejects_ties() {
        let logic = AuctionLogic::V2(0);
        assert_eq!(validate_raise(&logic, 100, 100), Err(Error::BidTooLow));
        assert!(validate_raise(&logic, 100, 101).is_ok());
    }
}
