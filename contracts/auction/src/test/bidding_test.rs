use crate::test::{
    advance_ledger, create_default_auction, setup_test, MockNftClient, END_TIME, START_TIME,
};
use crate::types::{AuctionStatus, BidKind, Settlement};
use crate::Error;
use soroban_sdk::{testutils::Address as _, token, Address};

#[test]
fn test_place_valid_bid() {
    let (env, client, _, factory, seller, bidder1, _, nft, token_address) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token_address);
    advance_ledger(&env, 10);

    let token_client = token::TokenClient::new(&env, &token_address);
    let balance_before = token_client.balance(&bidder1);

    client.place_bid(&auction_id, &bidder1, &1000);

    let (highest_bidder, highest_bid) = client.get_highest_bid(&auction_id);
    assert_eq!(highest_bidder, Some(bidder1.clone()));
    assert_eq!(highest_bid, 1000);
    assert_eq!(token_client.balance(&bidder1), balance_before - 1000);
    assert_eq!(token_client.balance(&client.address), 1000);

    assert_eq!(client.get_bid_count(&auction_id), 1);
    let bid = client.get_bid(&auction_id, &0);
    assert_eq!(bid.bidder, bidder1);
    assert_eq!(bid.amount, 1000);
    assert_eq!(bid.kind, BidKind::Fungible);
    assert_eq!(bid.timestamp, env.ledger().timestamp());
}

#[test]
fn test_first_bid_must_exceed_zero() {
    let (env, client, _, factory, seller, bidder1, _, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);
    advance_ledger(&env, 10);

    let result = client.try_place_bid(&auction_id, &bidder1, &0);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_reject_tie_bid() {
    let (env, client, _, factory, seller, bidder1, bidder2, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);
    advance_ledger(&env, 10);

    client.place_bid(&auction_id, &bidder1, &1000);

    // Ties lose regardless of who bids them.
    let result = client.try_place_bid(&auction_id, &bidder2, &1000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
    let result = client.try_place_bid(&auction_id, &bidder1, &1000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));

    let (highest_bidder, highest_bid) = client.get_highest_bid(&auction_id);
    assert_eq!(highest_bidder, Some(bidder1));
    assert_eq!(highest_bid, 1000);
    assert_eq!(client.get_bid_count(&auction_id), 1);
}

#[test]
fn test_reject_lower_bid() {
    let (env, client, _, factory, seller, bidder1, bidder2, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);
    advance_ledger(&env, 10);

    client.place_bid(&auction_id, &bidder1, &1500);

    let result = client.try_place_bid(&auction_id, &bidder2, &1000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_refund_previous_bidder() {
    let (env, client, _, factory, seller, bidder1, bidder2, nft, token_address) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token_address);
    advance_ledger(&env, 10);

    let token_client = token::TokenClient::new(&env, &token_address);
    let bidder1_before = token_client.balance(&bidder1);

    client.place_bid(&auction_id, &bidder1, &1000);
    client.place_bid(&auction_id, &bidder2, &1500);

    // The outbid deposit came back the moment it was superseded.
    assert_eq!(token_client.balance(&bidder1), bidder1_before);
    assert_eq!(token_client.balance(&client.address), 1500);

    let (highest_bidder, highest_bid) = client.get_highest_bid(&auction_id);
    assert_eq!(highest_bidder, Some(bidder2));
    assert_eq!(highest_bid, 1500);
}

#[test]
fn test_bid_before_start() {
    let (_env, client, _, factory, seller, bidder1, _, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);

    // Ledger time is still before START_TIME.
    let result = client.try_place_bid(&auction_id, &bidder1, &1000);
    assert_eq!(result, Err(Ok(Error::NotYetStarted)));
}

#[test]
fn test_bid_at_end_time_rejected() {
    let (env, client, _, factory, seller, bidder1, _, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);

    // Exactly end_time: the window is half-open.
    advance_ledger(&env, END_TIME - env.ledger().timestamp());
    let result = client.try_place_bid(&auction_id, &bidder1, &1000);
    assert_eq!(result, Err(Ok(Error::AlreadyExpired)));
}

#[test]
fn test_bid_after_end_rejected() {
    let (env, client, _, factory, seller, bidder1, _, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);

    advance_ledger(&env, END_TIME - env.ledger().timestamp() + 500);
    let result = client.try_place_bid(&auction_id, &bidder1, &1000);
    assert_eq!(result, Err(Ok(Error::AlreadyExpired)));
}

#[test]
fn test_bid_unknown_auction() {
    let (_env, client, _, _, _, bidder1, _, _, _) = setup_test();

    let result = client.try_place_bid(&42, &bidder1, &1000);
    assert_eq!(result, Err(Ok(Error::AuctionNotFound)));
}

#[test]
fn test_bid_without_funds_is_payment_mismatch() {
    let (env, client, _, factory, seller, _, _, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);
    advance_ledger(&env, 10);

    let broke_bidder = Address::generate(&env);
    let result = client.try_place_bid(&auction_id, &broke_bidder, &1000);
    assert_eq!(result, Err(Ok(Error::PaymentMismatch)));

    // Rejected bids leave no trace.
    assert_eq!(client.get_bid_count(&auction_id), 0);
    let (highest_bidder, highest_bid) = client.get_highest_bid(&auction_id);
    assert_eq!(highest_bidder, None);
    assert_eq!(highest_bid, 0);
}

#[test]
fn test_bid_on_ended_auction() {
    let (env, client, _, factory, seller, bidder1, _, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);
    advance_ledger(&env, 10);

    client.place_bid(&auction_id, &bidder1, &1000);
    client.end_auction(&seller, &auction_id);

    let result = client.try_place_bid(&auction_id, &bidder1, &2000);
    assert_eq!(result, Err(Ok(Error::NotActive)));
}

#[test]
fn test_highest_bid_tracks_last_accepted() {
    let (env, client, _, factory, seller, bidder1, bidder2, nft, token) = setup_test();
    let auction_id = create_default_auction(&client, &factory, &seller, &nft, &token);
    advance_ledger(&env, 10);

    client.place_bid(&auction_id, &bidder1, &100);
    client.place_bid(&auction_id, &bidder2, &250);
    client.place_bid(&auction_id, &bidder1, &800);

    let bids = client.get_bids(&auction_id);
    assert_eq!(bids.len(), 3);
    assert_eq!(bids.get(0).unwrap().amount, 100);
    assert_eq!(bids.get(1).unwrap().amount, 250);
    assert_eq!(bids.get(2).unwrap().amount, 800);

    let (highest_bidder, highest_bid) = client.get_highest_bid(&auction_id);
    assert_eq!(highest_bidder, Some(bidder1));
    assert_eq!(highest_bid, bids.get(2).unwrap().amount);

    assert_eq!(client.try_get_bid(&auction_id, &3), Err(Ok(Error::BidNotFound)));
}

#[test]
fn test_native_settlement_bid() {
    let (env, client, _, factory, seller, bidder1, _, nft, token_address) = setup_test();

    MockNftClient::new(&env, &nft).mint(&seller, &2);
    let auction_id = client.create_auction(
        &factory,
        &2,
        &seller,
        &nft,
        &2,
        &START_TIME,
        &END_TIME,
        &Settlement::Native,
    );
    advance_ledger(&env, 10);

    let token_client = token::TokenClient::new(&env, &token_address);
    let balance_before = token_client.balance(&bidder1);

    client.place_bid(&auction_id, &bidder1, &1000);

    assert_eq!(client.get_bid(&auction_id, &0).kind, BidKind::Native);
    assert_eq!(token_client.balance(&bidder1), balance_before - 1000);
    assert_eq!(client.get_status(&auction_id), AuctionStatus::Active);
}
