use crate::graph::PoolId;

/// Apply-side errors. Any of these rejects the entire ledger batch before a
/// single edge is mutated, preserving batch atomicity.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("offer {0} has an invalid price")]
    InvalidOfferPrice(i64),
    #[error("pool {0} asset pair is not in canonical order")]
    PoolAssetOrder(PoolId),
    #[error("pool {0} has an invalid fee rate")]
    InvalidPoolFee(PoolId),
}

/// Query-side errors surfaced by the path finder.
///
/// `EmptyOrderBook` is deliberately distinct from an empty result set: an
/// empty graph means "no ledger data yet", not "no paths exist".
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty orderbook")]
    EmptyOrderBook,
    #[error("invalid value of max path length: {0}")]
    InvalidMaxPathLength(usize),
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("no source assets provided")]
    NoSourceAssets,
    #[error("no destination assets provided")]
    NoDestinationAssets,
    #[error("source asset balances do not match source assets")]
    MismatchedBalances,
    #[error("search cancelled")]
    Cancelled,
}
