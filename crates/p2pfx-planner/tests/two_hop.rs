//! Planner tests driving the full three-query chain against a
//! scripted marketplace.

use p2pfx_book::BookError;
use p2pfx_core::{Amount, Currency, TradeType};
use p2pfx_market::{MarketError, ScriptedSource};
use p2pfx_planner::{ConversionPlanner, ConversionRequest, FilledSide, PlanError};
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;

fn response(fiat: &str, prices: &[&str]) -> String {
    let records: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            json!({
                "adv": {
                    "fiatUnit": fiat,
                    "price": price,
                    "minSingleTransAmount": "100",
                    "surplusAmount": "900.5",
                    "advNo": format!("{fiat}-{i}"),
                    "tradeType": "SELL",
                    "tradeMethods": [],
                },
                "advertiser": {
                    "nickName": format!("seller-{i}"),
                    "userType": "user",
                    "monthFinishRate": 0.97,
                    "monthOrderCount": 60,
                    "userNo": format!("user-{fiat}-{i}"),
                },
            })
        })
        .collect();
    json!({ "success": true, "message": null, "data": records }).to_string()
}

fn declined() -> String {
    json!({ "success": false, "message": "method unsupported", "data": null }).to_string()
}

fn rub() -> Currency {
    Currency::new(1, "RUB", "Russian Ruble")
}

fn try_() -> Currency {
    Currency::new(2, "TRY", "Turkish Lira")
}

fn request(filled: FilledSide) -> ConversionRequest {
    ConversionRequest::new(
        rub(),
        try_(),
        Some("Advcash".to_string()),
        Some("Ziraat".to_string()),
        false,
        filled,
    )
    .unwrap()
}

#[tokio::test]
async fn three_query_chain_with_probe_sizing() {
    let source = Arc::new(ScriptedSource::new());
    source.push_response(response("RUB", &["60.20", "59.79"]));
    source.push_response(response("TRY", &["18.35"]));
    source.push_response(response("TRY", &["18.10", "18.20"]));

    let planner = ConversionPlanner::new(source.clone());
    let req = request(FilledSide::Source(Amount::new(dec!(2000))));
    let quote = planner.quote(&req).await.unwrap();

    let queries = source.queries();
    assert_eq!(queries.len(), 3);

    // Query 1: full request for the filled side at the filled amount.
    assert_eq!(queries[0].fiat, "RUB");
    assert_eq!(queries[0].amount, Some(Amount::new(dec!(2000))));
    assert_eq!(queries[0].trade_type, TradeType::Buy);
    assert_eq!(queries[0].rows, 10);
    assert_eq!(queries[0].payment_method.as_deref(), Some("Advcash"));

    // Query 2: one-row probe with the amount left unspecified.
    assert_eq!(queries[1].fiat, "TRY");
    assert_eq!(queries[1].amount, None);
    assert_eq!(queries[1].trade_type, TradeType::Sell);
    assert_eq!(queries[1].rows, 1);
    assert_eq!(queries[1].payment_method.as_deref(), Some("Ziraat"));

    // Query 3: full request sized by the probe:
    // 18.35 * (2000 / 59.79) = 613.8...
    let expected = dec!(18.35) * (dec!(2000) / dec!(59.79));
    assert_eq!(queries[2].fiat, "TRY");
    assert_eq!(queries[2].amount, Some(Amount::new(expected)));
    assert_eq!(queries[2].trade_type, TradeType::Sell);
    assert_eq!(queries[2].rows, 10);
    assert!(expected > dec!(613.8) && expected < dec!(613.9));

    // Rate comes from the two full requests, never the probe. The
    // sell book ranks the highest payout first, so P3 is 18.20.
    assert_eq!(quote.rate, dec!(59.79) / dec!(18.20));
    assert_ne!(quote.rate, dec!(59.79) / dec!(18.35));
    assert_eq!(
        quote.converted_amount.inner(),
        dec!(2000) / (dec!(59.79) / dec!(18.20))
    );
}

#[tokio::test]
async fn tuple_order_is_other_then_filled() {
    let source = Arc::new(ScriptedSource::new());
    source.push_response(response("RUB", &["59.79"]));
    source.push_response(response("TRY", &["18.35"]));
    source.push_response(response("TRY", &["18.20"]));

    let planner = ConversionPlanner::new(source);
    let req = request(FilledSide::Source(Amount::new(dec!(2000))));
    let (other_offers, filled_offers) = planner.plan_offers(&req).await.unwrap();

    assert!(other_offers.iter().all(|o| o.fiat == "TRY"));
    assert!(filled_offers.iter().all(|o| o.fiat == "RUB"));
}

#[tokio::test]
async fn destination_filled_inverts_directions_only() {
    let source = Arc::new(ScriptedSource::new());
    source.push_response(response("RUB", &["59.79"]));
    source.push_response(response("TRY", &["18.35"]));
    source.push_response(response("TRY", &["18.20"]));

    let planner = ConversionPlanner::new(source.clone());
    let req = request(FilledSide::Destination(Amount::new(dec!(2000))));
    let (other_offers, filled_offers) = planner.plan_offers(&req).await.unwrap();

    let queries = source.queries();
    assert_eq!(queries[0].trade_type, TradeType::Sell);
    assert_eq!(queries[1].trade_type, TradeType::Buy);
    assert_eq!(queries[2].trade_type, TradeType::Buy);

    // The positional contract does not move with the direction swap.
    assert!(other_offers.iter().all(|o| o.fiat == "TRY"));
    assert!(filled_offers.iter().all(|o| o.fiat == "RUB"));
}

#[tokio::test]
async fn decline_mid_chain_aborts_without_third_query() {
    let source = Arc::new(ScriptedSource::new());
    source.push_response(response("RUB", &["59.79"]));
    source.push_response(declined());
    source.push_response(response("TRY", &["18.20"]));

    let planner = ConversionPlanner::new(source.clone());
    let req = request(FilledSide::Source(Amount::new(dec!(2000))));
    let err = planner.quote(&req).await.unwrap_err();

    match err {
        PlanError::Book(BookError::Rejected { message }) => {
            assert_eq!(message, "method unsupported");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(source.queries().len(), 2);
}

#[tokio::test]
async fn no_offers_propagates() {
    let source = Arc::new(ScriptedSource::new());
    source.push_response(json!({ "success": true, "data": [] }).to_string());

    let planner = ConversionPlanner::new(source);
    let req = request(FilledSide::Source(Amount::new(dec!(2000))));
    let err = planner.quote(&req).await.unwrap_err();

    assert!(matches!(err, PlanError::Book(BookError::NoOffers)));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let source = Arc::new(ScriptedSource::new());
    source.push_response(response("RUB", &["59.79"]));
    // Nothing queued for the probe: the scripted source reports the
    // marketplace as unreachable.

    let planner = ConversionPlanner::new(source);
    let req = request(FilledSide::Source(Amount::new(dec!(2000))));
    let err = planner.quote(&req).await.unwrap_err();

    assert!(matches!(
        err,
        PlanError::Market(MarketError::TransportUnavailable(_))
    ));
}
