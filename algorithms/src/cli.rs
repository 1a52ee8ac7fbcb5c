use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use linear_scans::arrays_hashing::DuplicateStrategy;
use linear_scans::data_structures::linked_list::ReversalStrategy;
use linear_scans::two_pointers::PalindromeStrategy;

#[derive(Parser)]
#[command(name = "linear-scans", about = "Two-pointer and single-pass sequence scans", version)]
pub struct Cli {
    /// JSON file selecting default strategies.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Index of TARGET in a strictly ascending list, or -1.
    Search {
        #[arg(long, allow_negative_numbers = true)]
        target: i32,
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// Whether TEXT reads the same both ways, ignoring case and non-alphanumerics.
    Palindrome {
        text: String,
        #[arg(long, value_enum)]
        strategy: Option<PalindromeStrategyArg>,
    },
    /// Best profit from one buy followed by one sell.
    MaxProfit {
        #[arg(required = true, allow_negative_numbers = true)]
        prices: Vec<i32>,
        /// Also print the buy and sell days.
        #[arg(long)]
        days: bool,
    },
    /// Whether any value appears more than once.
    Duplicates {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
        #[arg(long, value_enum)]
        strategy: Option<DuplicateStrategyArg>,
    },
    /// VALUES as a linked list, reversed.
    Reverse {
        values: Vec<String>,
        #[arg(long, value_enum)]
        strategy: Option<ReversalStrategyArg>,
    },
    /// List every algorithm with its cost.
    Map,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PalindromeStrategyArg {
    TwoPointer,
    Filtered,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DuplicateStrategyArg {
    EarlyExit,
    DistinctCount,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReversalStrategyArg {
    Iterative,
    Recursive,
}

impl From<PalindromeStrategyArg> for PalindromeStrategy {
    fn from(arg: PalindromeStrategyArg) -> Self {
        match arg {
            PalindromeStrategyArg::TwoPointer => Self::TwoPointer,
            PalindromeStrategyArg::Filtered => Self::Filtered,
        }
    }
}

impl From<DuplicateStrategyArg> for DuplicateStrategy {
    fn from(arg: DuplicateStrategyArg) -> Self {
        match arg {
            DuplicateStrategyArg::EarlyExit => Self::EarlyExit,
            DuplicateStrategyArg::DistinctCount => Self::DistinctCount,
        }
    }
}

impl From<ReversalStrategyArg> for ReversalStrategy {
    fn from(arg: ReversalStrategyArg) -> Self {
        match arg {
            ReversalStrategyArg::Iterative => Self::Iterative,
            ReversalStrategyArg::Recursive => Self::Recursive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_subcommand_has_help_text() {
        let cmd = Cli::command();
        for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
            assert!(sub.get_about().is_some(), "`{}` has no about line", sub.get_name());
        }
    }
}
