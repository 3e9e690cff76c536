//! Plain-text rendering of a conversion quote.

use p2pfx_core::Offer;
use p2pfx_planner::ConversionQuote;
use std::fmt::Write;

/// Offers shown per side.
const TOP_OFFERS: usize = 5;

/// Decimal places for displayed amounts and rates.
const DISPLAY_DP: u32 = 3;

/// Render a quote for the terminal.
///
/// Amounts and the rate are rounded to three decimal places for
/// display only; the quote itself keeps full precision.
pub fn render_quote(quote: &ConversionQuote) -> String {
    let mut out = String::new();

    let (send_amount, send_currency, receive_amount, receive_currency) =
        if quote.filled.is_destination() {
            (
                quote.converted_amount,
                &quote.other_currency,
                quote.filled_amount,
                &quote.filled_currency,
            )
        } else {
            (
                quote.filled_amount,
                &quote.filled_currency,
                quote.converted_amount,
                &quote.other_currency,
            )
        };

    let _ = writeln!(
        out,
        "1 {} = {} {}",
        quote.other_currency.code,
        quote.rate.round_dp(DISPLAY_DP),
        quote.filled_currency.code,
    );
    let _ = writeln!(
        out,
        "Send:    {} {}",
        send_amount.round_dp(DISPLAY_DP),
        send_currency.code
    );
    let _ = writeln!(
        out,
        "Receive: {} {}",
        receive_amount.round_dp(DISPLAY_DP),
        receive_currency.code
    );

    let _ = writeln!(out, "\nBest offers, {}:", quote.filled_currency.code);
    render_offers(&mut out, &quote.filled_offers);
    let _ = writeln!(out, "\nBest offers, {}:", quote.other_currency.code);
    render_offers(&mut out, &quote.other_offers);

    out
}

fn render_offers(out: &mut String, offers: &[Offer]) {
    for offer in offers.iter().take(TOP_OFFERS) {
        let _ = writeln!(
            out,
            "  {:<20} {:>12}  {:>6.1}%  min {}",
            offer.advertiser.name,
            offer.price.to_string(),
            offer.advertiser.month_finish_rate,
            offer.min_amount,
        );
    }
}
