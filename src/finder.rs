use crate::cancel::Cancellation;
use crate::error::PathError;
use crate::graph::OrderBookGraph;
use crate::search::engine::{ReceiveQuery, SendQuery};
use crate::search::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Hard ceiling on the hop count of any discovered path; also the default
/// when a query passes zero.
pub const MAX_PATH_LENGTH: usize = 5;

/// Fan-out bound: at each node only this many next-hop assets, best rate
/// first, are explored further.
pub const MAX_ASSETS_PER_PATH: usize = 5;

/// Query facade over an [OrderBookGraph].
///
/// Validates query shape up front, then runs the search against one
/// consistent graph snapshot. Each result carries the ledger sequence the
/// paths were computed against, so callers can tell how stale they are.
#[derive(Clone, Debug)]
pub struct PathFinder {
    graph: Arc<OrderBookGraph>,
    include_pools: bool,
}

impl PathFinder {
    pub fn new(graph: Arc<OrderBookGraph>, include_pools: bool) -> Self {
        Self { graph, include_pools }
    }

    pub fn graph(&self) -> &Arc<OrderBookGraph> {
        &self.graph
    }

    /// Strict-receive search: which source assets can deliver a fixed
    /// destination amount, and at what cost.
    pub fn find_paths(
        &self,
        cancel: &Cancellation,
        query: &ReceiveQuery,
        max_path_length: usize,
    ) -> Result<(Vec<Path>, u32), PathError> {
        let max_path_length = self.effective_length(max_path_length)?;
        if query.destination_amount <= 0 {
            return Err(PathError::NonPositiveAmount);
        }
        if query.source_assets.is_empty() {
            return Err(PathError::NoSourceAssets);
        }
        if query.validate_source_balance
            && query.source_assets.len() != query.source_asset_balances.len()
        {
            return Err(PathError::MismatchedBalances);
        }
        if self.graph.is_empty() {
            return Err(PathError::EmptyOrderBook);
        }

        debug!(
            destination = %query.destination_asset,
            amount = query.destination_amount,
            sources = query.source_assets.len(),
            max_path_length,
            "strict-receive search"
        );
        self.graph.find_paths(
            cancel,
            query,
            max_path_length,
            MAX_ASSETS_PER_PATH,
            self.include_pools,
        )
    }

    /// Strict-send search: what each destination asset would receive for a
    /// fixed source amount.
    pub fn find_fixed_paths(
        &self,
        cancel: &Cancellation,
        query: &SendQuery,
        max_path_length: usize,
    ) -> Result<(Vec<Path>, u32), PathError> {
        let max_path_length = self.effective_length(max_path_length)?;
        if query.amount_to_spend <= 0 {
            return Err(PathError::NonPositiveAmount);
        }
        if query.destination_assets.is_empty() {
            return Err(PathError::NoDestinationAssets);
        }
        if self.graph.is_empty() {
            return Err(PathError::EmptyOrderBook);
        }

        debug!(
            source = %query.source_asset,
            amount = query.amount_to_spend,
            destinations = query.destination_assets.len(),
            max_path_length,
            "strict-send search"
        );
        self.graph.find_fixed_paths(
            cancel,
            query,
            max_path_length,
            MAX_ASSETS_PER_PATH,
            self.include_pools,
        )
    }

    fn effective_length(&self, requested: usize) -> Result<usize, PathError> {
        match requested {
            0 => Ok(MAX_PATH_LENGTH),
            n if n <= MAX_PATH_LENGTH => Ok(n),
            n => Err(PathError::InvalidMaxPathLength(n)),
        }
    }
}
