//! Offers sub-client against a recording transport.

mod common;

use common::{client_on, client_with, MockFetcher};
use opensea_sdk::domain::offer::client::BuildOfferRequest;
use opensea_sdk::domain::offer::{GetTraitOffersArgs, NumericTrait, Trait, TraitFilterArgs};
use opensea_sdk::domain::order::{OrderBy, OrderDirection, OrdersQueryOptions, ProtocolData};
use opensea_sdk::error::SdkError;
use opensea_sdk::network::SEAPORT_V1_6_ADDRESS;
use opensea_sdk::shared::Chain;
use serde_json::{json, Value};

const OFFERER: &str = "0x1111111111111111111111111111111111111111";

fn offer_json(order_hash: &str) -> Value {
    json!({
        "order_hash": order_hash,
        "chain": "ethereum",
        "protocol_address": SEAPORT_V1_6_ADDRESS,
        "protocol_data": protocol_data_json(),
        "criteria": {
            "collection": { "slug": "boredapeyachtclub" },
            "contract": { "address": "0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D" }
        },
        "price": {
            "currency": "WETH",
            "decimals": 18,
            "value": "12500000000000000000"
        },
        "status": "ACTIVE"
    })
}

fn protocol_data_json() -> Value {
    json!({
        "parameters": {
            "offerer": OFFERER,
            "zone": "0x000056f7000000ece9003ca63978907a00ffd100",
            "offer": [{
                "itemType": 1,
                "token": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                "identifierOrCriteria": "0",
                "startAmount": "12500000000000000000",
                "endAmount": "12500000000000000000"
            }],
            "consideration": [],
            "orderType": 2,
            "startTime": "1700000000",
            "endTime": "1702592000",
            "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "salt": "0x3d958fe2",
            "conduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
            "totalOriginalConsiderationItems": 0,
            "counter": "0"
        },
        "signature": "0xsigned"
    })
}

fn build_response_json() -> Value {
    json!({
        "partialParameters": {
            "consideration": [{
                "itemType": 4,
                "token": "0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D",
                "identifierOrCriteria": "0",
                "startAmount": "1",
                "endAmount": "1",
                "recipient": OFFERER
            }],
            "zone": "0x000056f7000000ece9003ca63978907a00ffd100",
            "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000"
        },
        "criteria": { "collection": { "slug": "boredapeyachtclub" } }
    })
}

fn assert_invalid(result: Result<impl std::fmt::Debug, SdkError>, needle: &str) {
    match result {
        Err(SdkError::InvalidArgument(msg)) => {
            assert!(msg.contains(needle), "message {msg:?} should contain {needle:?}")
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

// =============================================================================
// Listing endpoints
// =============================================================================

#[tokio::test]
async fn get_all_offers_passes_pagination() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [offer_json("0xaaa")], "next": "cursor-2" }));
    let client = client_with(&fetcher);

    let resp = client
        .offers()
        .get_all_offers("boredapeyachtclub", Some(50), Some("cursor-1"))
        .await
        .unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.method, "GET");
    assert_eq!(call.path, "/api/v2/offers/collection/boredapeyachtclub/all");
    assert_eq!(call.query, Some(json!({ "limit": 50, "next": "cursor-1" })));
    assert_eq!(resp.offers.len(), 1);
    assert_eq!(resp.offers[0].price.value, "12500000000000000000");
    assert_eq!(resp.next.as_deref(), Some("cursor-2"));
}

#[tokio::test]
async fn get_all_offers_without_pagination_sends_empty_query() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [] }));
    let client = client_with(&fetcher);

    let resp = client.offers().get_all_offers("doodles-official", None, None).await.unwrap();

    assert_eq!(fetcher.only_call().query, Some(json!({})));
    assert!(resp.offers.is_empty());
    assert!(resp.next.is_none());
}

#[tokio::test]
async fn get_trait_offers_forwards_numeric_encodings() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [] }));
    let client = client_with(&fetcher);

    let args = GetTraitOffersArgs::new("Level", "7")
        .limit(10)
        .next("abc")
        .float_value(7.0)
        .int_value(7);
    client
        .offers()
        .get_trait_offers("boredapeyachtclub", &args)
        .await
        .unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.path, "/api/v2/offers/collection/boredapeyachtclub");
    assert_eq!(
        call.query,
        Some(json!({
            "type": "Level",
            "value": "7",
            "limit": 10,
            "next": "abc",
            "float_value": 7.0,
            "int_value": 7
        }))
    );
}

#[tokio::test]
async fn get_best_offer_accepts_numeric_token_id() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(offer_json("0xbest"));
    let client = client_with(&fetcher);

    let offer = client
        .offers()
        .get_best_offer("boredapeyachtclub", 1234)
        .await
        .unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.path, "/api/v2/offers/collection/boredapeyachtclub/nfts/1234/best");
    assert!(call.query.is_none());
    assert_eq!(offer.order_hash, "0xbest");
    assert_eq!(offer.protocol_data.signature.as_deref(), Some("0xsigned"));
}

#[tokio::test]
async fn get_collection_offers_uses_collection_path() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [offer_json("0x1"), offer_json("0x2")] }));
    let client = client_with(&fetcher);

    let resp = client
        .offers()
        .get_collection_offers("boredapeyachtclub", Some(2), None)
        .await
        .unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.path, "/api/v2/offers/collection/boredapeyachtclub");
    assert_eq!(call.query, Some(json!({ "limit": 2 })));
    assert_eq!(resp.offers.len(), 2);
}

// =============================================================================
// NFT offers
// =============================================================================

#[tokio::test]
async fn get_nft_offers_defaults_to_client_chain() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [] }));
    let client = client_on(&fetcher, Chain::Base);

    client
        .offers()
        .get_nft_offers("0xabc", "42", Some(5), Some("n1"), None)
        .await
        .unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.path, "/api/v2/orders/base/seaport/offers");
    assert_eq!(
        call.query,
        Some(json!({
            "asset_contract_address": "0xabc",
            "token_ids": ["42"],
            "limit": 5,
            "next": "n1"
        }))
    );
}

#[tokio::test]
async fn get_nft_offers_chain_override() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [] }));
    let client = client_on(&fetcher, Chain::Base);

    client
        .offers()
        .get_nft_offers("0xabc", "42", None, None, Some(Chain::Polygon))
        .await
        .unwrap();

    assert_eq!(fetcher.only_call().path, "/api/v2/orders/matic/seaport/offers");
}

#[tokio::test]
async fn query_offers_serializes_full_filter() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(json!({ "offers": [] }));
    let client = client_with(&fetcher);

    let options = OrdersQueryOptions {
        maker: Some(OFFERER.to_string()),
        order_by: Some(OrderBy::CreatedDate),
        order_direction: Some(OrderDirection::Asc),
        listed_after: Some(1_700_000_000),
        ..Default::default()
    };
    client.offers().query_offers(&options, None).await.unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.path, "/api/v2/orders/ethereum/seaport/offers");
    assert_eq!(
        call.query,
        Some(json!({
            "maker": OFFERER,
            "order_by": "created_date",
            "order_direction": "asc",
            "listed_after": 1_700_000_000u64
        }))
    );
}

// =============================================================================
// Build offer
// =============================================================================

#[tokio::test]
async fn build_offer_posts_collection_payload() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(build_response_json());
    let client = client_on(&fetcher, Chain::Mainnet);

    let request = BuildOfferRequest::new(OFFERER, 2, "boredapeyachtclub");
    let resp = client.offers().build_offer(&request).await.unwrap();

    let call = fetcher.only_call();
    assert_eq!(call.method, "POST");
    assert_eq!(call.path, "/api/v2/offers/build");
    assert_eq!(
        call.body,
        Some(json!({
            "offerer": OFFERER,
            "quantity": 2,
            "criteria": { "collection": { "slug": "boredapeyachtclub" } },
            "protocol_address": SEAPORT_V1_6_ADDRESS,
            "offer_protection_enabled": true,
            "chain": "ethereum"
        }))
    );
    assert_eq!(resp.partial_parameters.consideration.len(), 1);
    assert_eq!(resp.criteria.collection.slug, "boredapeyachtclub");
}

#[tokio::test]
async fn build_offer_with_single_trait() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(build_response_json());
    let client = client_on(&fetcher, Chain::Base);

    let request = BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub")
        .offer_protection(false)
        .trait_type("Background")
        .trait_value("Blue");
    client.offers().build_offer(&request).await.unwrap();

    let body = fetcher.only_call().body.unwrap();
    assert_eq!(body["criteria"]["trait"], json!({ "type": "Background", "value": "Blue" }));
    assert_eq!(body["offer_protection_enabled"], false);
    assert_eq!(body["chain"], "base");
}

#[tokio::test]
async fn build_offer_with_numeric_traits() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(build_response_json());
    let client = client_with(&fetcher);

    let request = BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub").numeric_traits(vec![
        NumericTrait::new("Level", Some(1.0), Some(10.0)),
        NumericTrait::new("Power", None, Some(99.5)),
    ]);
    client.offers().build_offer(&request).await.unwrap();

    let body = fetcher.only_call().body.unwrap();
    assert_eq!(
        body["criteria"]["numericTraits"],
        json!([
            { "type": "Level", "min": 1.0, "max": 10.0 },
            { "type": "Power", "max": 99.5 }
        ])
    );
}

#[tokio::test]
async fn build_offer_with_trait_and_numeric_range() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(build_response_json());
    let client = client_with(&fetcher);

    let request = BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub")
        .trait_type("Background")
        .trait_value("Blue")
        .numeric_traits(vec![NumericTrait::new("Level", Some(1.0), Some(5.0))]);
    client.offers().build_offer(&request).await.unwrap();

    let body = fetcher.only_call().body.unwrap();
    assert_eq!(body["criteria"]["trait"], json!({ "type": "Background", "value": "Blue" }));
    assert_eq!(
        body["criteria"]["numericTraits"],
        json!([{ "type": "Level", "min": 1.0, "max": 5.0 }])
    );
}

#[tokio::test]
async fn build_offer_rejects_mixed_trait_styles_before_sending() {
    let fetcher = MockFetcher::new();
    let client = client_with(&fetcher);

    let request = BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub")
        .traits(vec![Trait::new("Eyes", "Laser")])
        .trait_type("Background");
    assert_invalid(
        client.offers().build_offer(&request).await,
        "Cannot use both 'traits' array",
    );

    let request = BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub")
        .traits(vec![Trait::new("Eyes", "Laser")])
        .trait_value("Blue");
    assert_invalid(
        client.offers().build_offer(&request).await,
        "Cannot use both 'traits' array",
    );

    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn build_offer_rejects_half_pair() {
    let fetcher = MockFetcher::new();
    let client = client_with(&fetcher);

    let request = BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub").trait_type("Background");
    assert_invalid(
        client.offers().build_offer(&request).await,
        "Both trait_type and trait_value",
    );
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn build_offer_rejects_bad_numeric_ranges() {
    let fetcher = MockFetcher::new();
    let client = client_with(&fetcher);

    let cases = [
        (NumericTrait::new("", Some(1.0), None), "must have a 'type' property"),
        (NumericTrait::new("Level", None, None), "Numeric trait 'Level' must have at least one"),
        (NumericTrait::new("Level", Some(9.0), Some(3.0)), "Numeric trait 'Level': 'min' (9)"),
    ];
    for (numeric, needle) in cases {
        let request =
            BuildOfferRequest::new(OFFERER, 1, "boredapeyachtclub").numeric_traits(vec![numeric]);
        assert_invalid(client.offers().build_offer(&request).await, needle);
    }
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn build_offer_propagates_transport_error() {
    let fetcher = MockFetcher::new();
    fetcher.rejects_bad_request("Collection not found");
    let client = client_with(&fetcher);

    let err = client
        .offers()
        .build_offer(&BuildOfferRequest::new(OFFERER, 1, "nope"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Collection not found"));
}

// =============================================================================
// Post collection offer
// =============================================================================

#[tokio::test]
async fn post_collection_offer_returns_created_offer() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(offer_json("0xcreated"));
    let client = client_with(&fetcher);
    let order: ProtocolData = serde_json::from_value(protocol_data_json()).unwrap();

    let created = client
        .offers()
        .post_collection_offer(&order, "boredapeyachtclub", &TraitFilterArgs::single("Fur", "Gold"))
        .await
        .unwrap()
        .expect("offer should be created");

    let call = fetcher.only_call();
    assert_eq!(call.method, "POST");
    assert_eq!(call.path, "/api/v2/offers");
    let body = call.body.unwrap();
    assert_eq!(body["protocol_data"], protocol_data_json());
    assert_eq!(body["criteria"]["trait"], json!({ "type": "Fur", "value": "Gold" }));
    assert_eq!(body["protocol_address"], SEAPORT_V1_6_ADDRESS);
    assert_eq!(created.order_hash, "0xcreated");
    assert_eq!(created.criteria.collection.slug, "boredapeyachtclub");
}

#[tokio::test]
async fn post_collection_offer_null_response_is_none() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(Value::Null);
    let client = client_with(&fetcher);
    let order: ProtocolData = serde_json::from_value(protocol_data_json()).unwrap();

    let created = client
        .offers()
        .post_collection_offer(&order, "boredapeyachtclub", &TraitFilterArgs::default())
        .await
        .unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn post_collection_offer_does_not_validate_filter() {
    let fetcher = MockFetcher::new();
    fetcher.resolves(Value::Null);
    let client = client_with(&fetcher);
    let order: ProtocolData = serde_json::from_value(protocol_data_json()).unwrap();

    let filter = TraitFilterArgs {
        trait_type: Some("Background".into()),
        traits: vec![Trait::new("Eyes", "Laser")],
        numeric_traits: vec![NumericTrait::new("Level", None, None)],
        ..Default::default()
    };
    client
        .offers()
        .post_collection_offer(&order, "boredapeyachtclub", &filter)
        .await
        .unwrap();

    let body = fetcher.only_call().body.unwrap();
    assert_eq!(body["criteria"]["traits"], json!([{ "type": "Eyes", "value": "Laser" }]));
    assert_eq!(body["criteria"]["numericTraits"], json!([{ "type": "Level" }]));
}

#[tokio::test]
async fn transport_failure_keeps_message() {
    let fetcher = MockFetcher::new();
    fetcher.rejects("API Error");
    let client = client_with(&fetcher);

    let err = client
        .offers()
        .get_collection_offers("boredapeyachtclub", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Other(ref m) if m == "API Error"));
}
