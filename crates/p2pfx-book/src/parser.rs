//! Parsing of raw marketplace search responses.
//!
//! The response envelope is `{ success, message, data }` where `data`
//! holds advertisement records. The envelope's success flag is checked
//! before any record is deserialized, so a decline is reported with the
//! upstream message no matter what `data` contains.

use p2pfx_core::{Advertiser, Amount, Offer, Price, TradeType};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{BookError, BookResult};

/// Response envelope. `data` stays untyped until the success flag has
/// been inspected.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// One advertisement record.
#[derive(Debug, Deserialize)]
struct RawRecord {
    adv: RawAdv,
    advertiser: RawAdvertiser,
}

/// Advertisement side of a record. Monetary fields arrive as strings.
#[derive(Debug, Deserialize)]
struct RawAdv {
    #[serde(rename = "fiatUnit")]
    fiat_unit: String,
    price: String,
    #[serde(rename = "minSingleTransAmount")]
    min_single_trans_amount: String,
    #[serde(rename = "surplusAmount")]
    surplus_amount: String,
    #[serde(rename = "advNo")]
    adv_no: String,
    #[serde(rename = "tradeType")]
    trade_type: TradeType,
    #[serde(rename = "tradeMethods", default)]
    trade_methods: Vec<RawTradeMethod>,
}

#[derive(Debug, Deserialize)]
struct RawTradeMethod {
    identifier: String,
    #[serde(rename = "tradeMethodName", default)]
    trade_method_name: Option<String>,
}

/// Advertiser side of a record. `monthFinishRate` is a 0-1 fraction.
#[derive(Debug, Deserialize)]
struct RawAdvertiser {
    #[serde(rename = "nickName")]
    nick_name: String,
    #[serde(rename = "userType")]
    user_type: String,
    #[serde(rename = "monthFinishRate")]
    month_finish_rate: f64,
    #[serde(rename = "monthOrderCount")]
    month_order_count: u32,
    #[serde(rename = "userNo")]
    user_no: String,
}

/// One payment method seen on an advertisement, scoped to its fiat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodListing {
    pub fiat: String,
    pub short_name: String,
    pub display_name: Option<String>,
}

/// Parse a search response into a sorted offer list.
///
/// The result is sorted by unit price: ascending for [`TradeType::Buy`]
/// (cheapest acquisition first), descending for [`TradeType::Sell`]
/// (highest payout first), so index 0 is always the best price for the
/// requested direction.
pub fn parse_offers(raw: &str, direction: TradeType) -> BookResult<Vec<Offer>> {
    let records = unwrap_envelope(raw)?;

    let mut offers = records
        .into_iter()
        .map(offer_from_record)
        .collect::<BookResult<Vec<_>>>()?;

    match direction {
        TradeType::Buy => offers.sort_by(|a, b| a.price.cmp(&b.price)),
        TradeType::Sell => offers.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    debug!(
        count = offers.len(),
        fiat = %offers[0].fiat,
        best = %offers[0].price,
        direction = %direction,
        "Parsed advertisement book"
    );

    Ok(offers)
}

/// Extract the payment methods listed on each advertisement.
///
/// Listings are returned in encounter order, duplicates included;
/// deduplication is the registry upsert's concern. Failure conditions
/// are identical to [`parse_offers`].
pub fn parse_payment_methods(raw: &str) -> BookResult<Vec<MethodListing>> {
    let records = unwrap_envelope(raw)?;

    let mut listings = Vec::new();
    for record in records {
        for method in record.adv.trade_methods {
            listings.push(MethodListing {
                fiat: record.adv.fiat_unit.clone(),
                short_name: method.identifier,
                display_name: method.trade_method_name,
            });
        }
    }
    Ok(listings)
}

/// Check the envelope and return its advertisement records.
fn unwrap_envelope(raw: &str) -> BookResult<Vec<RawRecord>> {
    let envelope: RawEnvelope = serde_json::from_str(raw)?;

    if !envelope.success {
        let message = envelope.message.unwrap_or_default();
        error!(%message, "Marketplace declined the request");
        return Err(BookError::Rejected { message });
    }

    let data = match envelope.data {
        Some(value) if !value.is_null() => value,
        _ => {
            error!("Response data is empty");
            return Err(BookError::NoOffers);
        }
    };

    let records: Vec<RawRecord> = serde_json::from_value(data)?;
    if records.is_empty() {
        error!("Response data is empty");
        return Err(BookError::NoOffers);
    }

    Ok(records)
}

fn offer_from_record(record: RawRecord) -> BookResult<Offer> {
    let price = parse_price(&record.adv.price)?;

    Ok(Offer {
        fiat: record.adv.fiat_unit,
        advertiser: Advertiser {
            name: record.advertiser.nick_name,
            is_merchant: record.advertiser.user_type == "merchant",
            month_finish_rate: record.advertiser.month_finish_rate * 100.0,
            month_orders_count: record.advertiser.month_order_count,
            user_id: record.advertiser.user_no,
        },
        trade_type: record.adv.trade_type,
        price,
        min_amount: parse_amount(&record.adv.min_single_trans_amount)?,
        tradable_funds: parse_amount(&record.adv.surplus_amount)?,
        offer_id: record.adv.adv_no,
    })
}

fn parse_price(s: &str) -> BookResult<Price> {
    let d: Decimal = s
        .parse()
        .map_err(|_| BookError::InvalidRecord(format!("Invalid price: {s}")))?;
    let price = Price::new(d);
    if !price.is_positive() {
        return Err(BookError::InvalidRecord(format!(
            "Price must be positive: {s}"
        )));
    }
    Ok(price)
}

fn parse_amount(s: &str) -> BookResult<Amount> {
    let d: Decimal = s
        .parse()
        .map_err(|_| BookError::InvalidRecord(format!("Invalid amount: {s}")))?;
    Ok(Amount::new(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record(price: &str, methods: &[(&str, Option<&str>)]) -> serde_json::Value {
        json!({
            "adv": {
                "fiatUnit": "RUB",
                "price": price,
                "minSingleTransAmount": "500",
                "surplusAmount": "1200.50",
                "advNo": format!("adv-{price}"),
                "tradeType": "SELL",
                "tradeMethods": methods.iter().map(|(id, name)| json!({
                    "identifier": id,
                    "tradeMethodName": name,
                })).collect::<Vec<_>>(),
            },
            "advertiser": {
                "nickName": "tester",
                "userType": "user",
                "monthFinishRate": 0.87,
                "monthOrderCount": 120,
                "userNo": "u-1",
            },
        })
    }

    fn response(records: Vec<serde_json::Value>) -> String {
        json!({ "code": "000000", "message": null, "data": records, "success": true })
            .to_string()
    }

    #[test]
    fn test_sort_ascending_for_buy() {
        let raw = response(vec![
            record("60.20", &[]),
            record("59.79", &[]),
            record("60.00", &[]),
        ]);
        let offers = parse_offers(&raw, TradeType::Buy).unwrap();
        let prices: Vec<_> = offers.iter().map(|o| o.price.inner()).collect();
        assert_eq!(prices, vec![dec!(59.79), dec!(60.00), dec!(60.20)]);
    }

    #[test]
    fn test_sort_descending_for_sell() {
        let raw = response(vec![
            record("59.79", &[]),
            record("60.20", &[]),
            record("60.00", &[]),
        ]);
        let offers = parse_offers(&raw, TradeType::Sell).unwrap();
        let prices: Vec<_> = offers.iter().map(|o| o.price.inner()).collect();
        assert_eq!(prices, vec![dec!(60.20), dec!(60.00), dec!(59.79)]);
    }

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let raw = response(vec![record("100.0", &[]), record("60.20", &[])]);
        let offers = parse_offers(&raw, TradeType::Buy).unwrap();
        assert_eq!(offers[0].price.inner(), dec!(60.20));
    }

    #[test]
    fn test_finish_rate_becomes_percentage() {
        let raw = response(vec![record("60.00", &[])]);
        let offers = parse_offers(&raw, TradeType::Buy).unwrap();
        assert_eq!(offers[0].advertiser.month_finish_rate, 87.0);
    }

    #[test]
    fn test_rejected_response_carries_upstream_message() {
        let raw = json!({
            "success": false,
            "message": "Dear User, this payment method is unsupported.",
            "data": "whatever shape",
        })
        .to_string();

        let err = parse_offers(&raw, TradeType::Buy).unwrap_err();
        match err {
            BookError::Rejected { message } => {
                assert_eq!(message, "Dear User, this payment method is unsupported.");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_data_is_no_offers() {
        for data in [json!([]), json!(null)] {
            let raw = json!({ "success": true, "message": null, "data": data }).to_string();
            let err = parse_offers(&raw, TradeType::Sell).unwrap_err();
            assert!(matches!(err, BookError::NoOffers), "data = {data}");
        }

        let raw = json!({ "success": true }).to_string();
        let err = parse_payment_methods(&raw).unwrap_err();
        assert!(matches!(err, BookError::NoOffers));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let raw = response(vec![record("0", &[])]);
        let err = parse_offers(&raw, TradeType::Buy).unwrap_err();
        assert!(matches!(err, BookError::InvalidRecord(_)));
    }

    #[test]
    fn test_malformed_document_is_json_error() {
        let err = parse_offers("not json at all", TradeType::Buy).unwrap_err();
        assert!(matches!(err, BookError::Json(_)));
    }

    #[test]
    fn test_payment_methods_in_encounter_order() {
        let raw = response(vec![
            record("60.00", &[("Advcash", Some("Advcash")), ("QIWI", None)]),
            record("60.10", &[("Advcash", Some("Advcash"))]),
        ]);
        let listings = parse_payment_methods(&raw).unwrap();

        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].short_name, "Advcash");
        assert_eq!(listings[1].short_name, "QIWI");
        assert_eq!(listings[1].display_name, None);
        assert!(listings.iter().all(|l| l.fiat == "RUB"));
    }
}
