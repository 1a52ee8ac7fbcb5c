pub mod max_profit;

pub use max_profit::{best_trade, max_profit, Trade};
