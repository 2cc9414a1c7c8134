//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use clap::ValueEnum;

/// The suite contracts deployable from a compiled artifact
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuiteContract {
    /// The vault implementation contract
    Vault,
    /// The registry contract
    Registry,
    /// The price oracle contract
    PriceOracle,
    /// The swap diamond contract
    SwapDiamond,
    /// The limit orderbook contract
    LimitOrderbook,
    /// The token adapter contract
    TokenAdapter,
    /// The swap facet of the swap diamond
    SwapFacet,
    /// The quote facet of the swap diamond
    QuoteFacet,
    /// The admin facet of the swap diamond
    AdminFacet,
}

impl Display for SuiteContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteContract::Vault => write!(f, "vault"),
            SuiteContract::Registry => write!(f, "registry"),
            SuiteContract::PriceOracle => write!(f, "price-oracle"),
            SuiteContract::SwapDiamond => write!(f, "swap-diamond"),
            SuiteContract::LimitOrderbook => write!(f, "limit-orderbook"),
            SuiteContract::TokenAdapter => write!(f, "token-adapter"),
            SuiteContract::SwapFacet => write!(f, "swap-facet"),
            SuiteContract::QuoteFacet => write!(f, "quote-facet"),
            SuiteContract::AdminFacet => write!(f, "admin-facet"),
        }
    }
}
