//! Smart-money heuristics: strong-gainer filtering and the token-by-buyer
//! cross.
//!
//! "Smart money" here is a heuristic label, not on-chain analysis: tokens
//! up at least 20% in 24h are crossed with whatever the buyer lookup
//! reports for them.

use rust_decimal::Decimal;

use super::market::CoinMarket;

/// A wallet that bought into a token, with the reported amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Buyer {
    pub wallet: String,
    pub amount: Decimal,
}

/// One flat result row: a buyer attributed to a strong-gainer token.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartMoneyRow {
    pub wallet: String,
    pub amount: Decimal,
    pub token: String,
    pub symbol: String,
    pub change_24h: Decimal,
    pub price: Decimal,
}

/// Minimum 24h gain for a token to count as a smart-money candidate.
#[must_use]
pub fn gain_threshold() -> Decimal {
    Decimal::from(20)
}

/// Keep only coins whose 24h change meets the gain threshold.
///
/// Coins without change data never qualify.
#[must_use]
pub fn strong_gainers(coins: Vec<CoinMarket>) -> Vec<CoinMarket> {
    coins
        .into_iter()
        .filter(|coin| coin.change_24h.is_some_and(|change| change >= gain_threshold()))
        .collect()
}

/// Cross one token with its buyers into flat result rows.
#[must_use]
pub fn cross(token: &CoinMarket, buyers: &[Buyer]) -> Vec<SmartMoneyRow> {
    buyers
        .iter()
        .map(|buyer| SmartMoneyRow {
            wallet: buyer.wallet.clone(),
            amount: buyer.amount,
            token: token.name.clone(),
            symbol: token.symbol.clone(),
            change_24h: token.change_or_zero(),
            price: token.price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn coin(name: &str, change: Option<Decimal>) -> CoinMarket {
        CoinMarket {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: name.to_lowercase(),
            price: dec!(2.5),
            change_24h: change,
        }
    }

    #[test]
    fn filters_below_threshold() {
        let coins = vec![
            coin("A", Some(dec!(19.99))),
            coin("B", Some(dec!(20))),
            coin("C", Some(dec!(45.2))),
            coin("D", None),
        ];

        let kept = strong_gainers(coins);

        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn cross_produces_one_row_per_buyer() {
        let token = coin("Pepe", Some(dec!(30)));
        let buyers = vec![
            Buyer {
                wallet: "0xaaa".into(),
                amount: dec!(1000),
            },
            Buyer {
                wallet: "0xbbb".into(),
                amount: dec!(800),
            },
        ];

        let rows = cross(&token, &buyers);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].wallet, "0xaaa");
        assert_eq!(rows[0].token, "Pepe");
        assert_eq!(rows[1].amount, dec!(800));
        assert_eq!(rows[1].change_24h, dec!(30));
    }

    #[test]
    fn cross_with_no_buyers_is_empty() {
        let token = coin("Pepe", Some(dec!(30)));
        assert!(cross(&token, &[]).is_empty());
    }
}
