use std::io::Write;

use linear_scans::arrays_hashing::DuplicateStrategy;
use linear_scans::computation_map::ALGORITHMS_COMPUTATION_MAP;
use linear_scans::data_structures::linked_list::{to_vec, ListNode};
use linear_scans::searching::NOT_FOUND;
use linear_scans::validate::{checked_best_trade, checked_max_profit, checked_search};
use linear_scans::Strategies;

use crate::cli::Command;

/// A `--strategy` flag on the command wins over the configured default.
pub fn resolve<A, S>(flag: Option<A>, configured: S) -> S
where
    A: Into<S>,
{
    flag.map_or(configured, Into::into)
}

pub fn execute_command(
    cmd: Command,
    strategies: Strategies,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::Search { target, nums } => {
            tracing::info!(needle = target, len = nums.len(), "search");
            let index = checked_search(&nums, target)?
                .map_or(Ok(NOT_FOUND), i32::try_from)?;
            writeln!(out, "{index}")?;
        }
        Command::Palindrome { text, strategy } => {
            let strategy = resolve(strategy, strategies.palindrome);
            tracing::info!(?strategy, len = text.len(), "palindrome");
            writeln!(out, "{}", strategy.check(&text))?;
        }
        Command::MaxProfit { prices, days } => {
            tracing::info!(days = prices.len(), "max-profit");
            if days {
                match checked_best_trade(&prices)? {
                    Some(trade) => writeln!(
                        out,
                        "{} (buy day {}, sell day {})",
                        trade.profit, trade.buy, trade.sell
                    )?,
                    None => writeln!(out, "0 (no trade)")?,
                }
            } else {
                writeln!(out, "{}", checked_max_profit(&prices)?)?;
            }
        }
        Command::Duplicates { nums, strategy } => {
            let strategy: DuplicateStrategy = resolve(strategy, strategies.duplicate);
            tracing::info!(?strategy, len = nums.len(), "duplicates");
            writeln!(out, "{}", strategy.detect(&nums))?;
        }
        Command::Reverse { values, strategy } => {
            let strategy = resolve(strategy, strategies.reversal);
            tracing::info!(?strategy, len = values.len(), "reverse");
            let head = strategy.reverse(ListNode::from_values(values));
            writeln!(out, "[{}]", to_vec(&head).join(", "))?;
        }
        Command::Map => {
            writeln!(out, "=== Algorithms Computation Map ===")?;
            for (path, comp_type, time, space) in ALGORITHMS_COMPUTATION_MAP.iter() {
                writeln!(out, "{:<52} | {:<28} | {:<9} | {}", path, comp_type, time, space)?;
            }
        }
    }
    Ok(())
}
