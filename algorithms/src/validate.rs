//! Checked entry points. The plain functions assume their preconditions;
//! these verify them first and report the offending position.

use thiserror::Error;

use crate::invariant::{Invariant, NonNegative, StrictlyAscending};
use crate::searching::binary_search;
use crate::sliding_window::{best_trade, max_profit, Trade};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input must be strictly ascending: nums[{index}] >= nums[{}]", .index + 1)]
    NotSorted { index: usize },
    #[error("price series is empty; at least one day is required")]
    EmptyPrices,
    #[error("price on day {day} is negative ({price})")]
    NegativePrice { day: usize, price: i32 },
}

pub fn checked_search(nums: &[i32], target: i32) -> Result<Option<usize>, InputError> {
    if let Some(index) = StrictlyAscending.first_violation(nums) {
        tracing::debug!(index, len = nums.len(), "rejecting unsorted search input");
        return Err(InputError::NotSorted { index });
    }
    Ok(binary_search(nums, &target))
}

fn check_prices(prices: &[i32]) -> Result<(), InputError> {
    if prices.is_empty() {
        tracing::debug!("rejecting empty price series");
        return Err(InputError::EmptyPrices);
    }
    if let Some(day) = NonNegative.first_violation(prices) {
        let price = prices[day];
        tracing::debug!(day, price, "rejecting negative price");
        return Err(InputError::NegativePrice { day, price });
    }
    Ok(())
}

pub fn checked_max_profit(prices: &[i32]) -> Result<i32, InputError> {
    check_prices(prices)?;
    Ok(max_profit(prices))
}

pub fn checked_best_trade(prices: &[i32]) -> Result<Option<Trade>, InputError> {
    check_prices(prices)?;
    Ok(best_trade(prices))
}
