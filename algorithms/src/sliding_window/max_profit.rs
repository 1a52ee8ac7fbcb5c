//! Best single buy/sell over a price series.
//!
//! Variables:
//!   p    : &[i32]  — price on day i, length N
//!   low  : i32     — running minimum of p[0..=i]
//!   best : i32     — running maximum of p[j] - low over j <= i
//!
//! Equations:
//!   low_0  = p[0],  best_0 = 0
//!   best'  = max(best, p[i] - low)
//!   low'   = min(low, p[i])
//!
//!   Selling on the buy day yields 0, so folding p[i] into `low` before or
//!   after computing its own profit gives the same answer.
//!   O(N) time, O(1) space.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub buy: usize,
    pub sell: usize,
    pub profit: i32,
}

/// Maximum profit from one buy followed by one sell; 0 when no trade pays.
pub fn max_profit(prices: &[i32]) -> i32 {
    let Some(&first) = prices.first() else {
        return 0;
    };
    let mut low = first;
    let mut best = 0;
    for &price in prices {
        best = best.max(price - low);
        low = low.min(price);
    }
    best
}

/// Day indices of the most profitable trade, `None` when nothing beats
/// holding cash. Ties keep the earliest sell day.
pub fn best_trade(prices: &[i32]) -> Option<Trade> {
    let (&first, rest) = prices.split_first()?;
    let mut low = (0, first);
    let mut best: Option<Trade> = None;

    for (offset, &price) in rest.iter().enumerate() {
        let day = offset + 1;
        let profit = price - low.1;
        if profit > best.map_or(0, |t| t.profit) {
            best = Some(Trade {
                buy: low.0,
                sell: day,
                profit,
            });
        }
        if price < low.1 {
            low = (day, price);
        }
    }
    best
}
