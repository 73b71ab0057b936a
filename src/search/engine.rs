use crate::asset::{AccountId, Asset};
use crate::cancel::Cancellation;
use crate::error::PathError;
use crate::graph::edge::Venue;
use crate::graph::order_book::{FastHashMap, FastHashSet, GraphState};
use crate::search::path::{Path, PathAccumulator};
use std::cmp::Ordering;
use tracing::debug;

/// Strict-receive query: the destination amount is fixed and the search
/// runs backward from the destination asset.
#[derive(Clone, Debug)]
pub struct ReceiveQuery {
    pub destination_asset: Asset,
    pub destination_amount: i64,
    /// Offers owned by this account are excluded from the search, so a
    /// payment never crosses the sender's own offers.
    pub source_account: Option<AccountId>,
    /// Assets the caller can pay with.
    pub source_assets: Vec<Asset>,
    /// Parallel to `source_assets`; consulted when `validate_source_balance`
    /// is set.
    pub source_asset_balances: Vec<i64>,
    pub validate_source_balance: bool,
}

/// Strict-send query: the source amount is fixed and the search runs
/// forward from the source asset.
#[derive(Clone, Debug)]
pub struct SendQuery {
    pub source_asset: Asset,
    pub amount_to_spend: i64,
    pub destination_assets: Vec<Asset>,
}

/// Direction-specific half of the traversal. The walk itself (cycle
/// avoidance, depth bound, fan-out truncation, dedup, cancellation) is
/// shared so the tie-break rules are identical in both directions.
trait SearchStrategy {
    /// The path recorded if the walk may terminate at the last visited
    /// asset, carrying `amount` of it.
    fn terminal(&self, visited: &[Asset], amount: i64) -> Option<Path>;

    /// Candidate next hops with their propagated amounts, unsorted.
    /// Venues that fail arithmetic or capacity checks are already dropped.
    fn candidates(
        &self,
        graph: &GraphState,
        asset: &Asset,
        amount: i64,
        include_pools: bool,
    ) -> Vec<(Asset, i64)>;

    /// Orders propagated amounts best-first (less required money, or more
    /// obtainable money, depending on direction).
    fn prefer(&self, a: i64, b: i64) -> Ordering;

    /// The amount the preference applies to on a finished path.
    fn path_amount(&self, path: &Path) -> i64;
}

struct Search<'a, S> {
    graph: &'a GraphState,
    strategy: S,
    cancel: &'a Cancellation,
    max_path_length: usize,
    max_assets_per_path: usize,
    include_pools: bool,
    visited: Vec<Asset>,
    results: PathAccumulator,
}

impl<S: SearchStrategy> Search<'_, S> {
    fn run(mut self, root: Asset, amount: i64) -> Result<Vec<Path>, PathError> {
        self.visited.push(root);
        self.explore(amount, 0)?;

        let mut paths = std::mem::take(&mut self.results).into_vec();
        paths.sort_by(|a, b| {
            self.strategy
                .prefer(self.strategy.path_amount(a), self.strategy.path_amount(b))
                .then_with(|| a.interior_nodes.len().cmp(&b.interior_nodes.len()))
                .then_with(|| a.source_asset.cmp(&b.source_asset))
                .then_with(|| a.destination_asset.cmp(&b.destination_asset))
        });
        debug!(paths = paths.len(), "path search finished");
        Ok(paths)
    }

    fn explore(&mut self, amount: i64, depth: usize) -> Result<(), PathError> {
        if self.cancel.is_cancelled() {
            return Err(PathError::Cancelled);
        }

        if depth > 0 {
            if let Some(path) = self.strategy.terminal(&self.visited, amount) {
                let strategy = &self.strategy;
                self.results.insert(path, |a, b| {
                    strategy.prefer(strategy.path_amount(a), strategy.path_amount(b))
                        == Ordering::Less
                });
            }
            // a terminal asset may still be an intermediary of a longer
            // path, so the walk continues
        }

        if depth >= self.max_path_length {
            return Ok(());
        }

        let asset = match self.visited.last() {
            Some(asset) => asset.clone(),
            None => return Ok(()),
        };
        let mut candidates =
            self.strategy.candidates(self.graph, &asset, amount, self.include_pools);
        // never revisit an asset already on the partial walk
        candidates.retain(|(next, _)| !self.visited.contains(next));
        candidates
            .sort_by(|a, b| self.strategy.prefer(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
        // best-priced fan-out only: a deliberate completeness trade-off that
        // keeps dense graphs searchable
        candidates.truncate(self.max_assets_per_path);

        for (next_asset, next_amount) in candidates {
            self.visited.push(next_asset);
            self.explore(next_amount, depth + 1)?;
            self.visited.pop();
        }
        Ok(())
    }
}

fn merge_candidate(
    best: &mut FastHashMap<Asset, i64>,
    asset: &Asset,
    amount: i64,
    prefer: impl Fn(i64, i64) -> Ordering,
) {
    match best.get_mut(asset) {
        Some(existing) => {
            if prefer(amount, *existing) == Ordering::Less {
                *existing = amount;
            }
        }
        None => {
            best.insert(asset.clone(), amount);
        }
    }
}

/// Backward strategy: terminal when the current asset is one the caller can
/// pay with; candidates are the venues that can emit the current asset.
struct ReceiveStrategy {
    destination_amount: i64,
    source_account: Option<AccountId>,
    /// source asset -> balance cap (meaningful when validating balances)
    targets: FastHashMap<Asset, i64>,
    validate_source_balance: bool,
}

impl SearchStrategy for ReceiveStrategy {
    fn terminal(&self, visited: &[Asset], amount: i64) -> Option<Path> {
        let current = visited.last()?;
        let cap = *self.targets.get(current)?;
        if self.validate_source_balance && amount > cap {
            return None;
        }
        Some(Path {
            source_asset: current.clone(),
            source_amount: amount,
            destination_asset: visited[0].clone(),
            destination_amount: self.destination_amount,
            interior_nodes: visited[1..visited.len() - 1].iter().rev().cloned().collect(),
        })
    }

    fn candidates(
        &self,
        graph: &GraphState,
        asset: &Asset,
        need: i64,
        include_pools: bool,
    ) -> Vec<(Asset, i64)> {
        let mut best: FastHashMap<Asset, i64> = FastHashMap::default();

        if let Some(pairs) = graph.buying.get(asset) {
            for (source_asset, ids) in pairs {
                let book = graph.sorted_book(ids, self.source_account.as_ref());
                if let Some(required) = Venue::Book(&book).source_amount(asset, need) {
                    merge_candidate(&mut best, source_asset, required, |a, b| self.prefer(a, b));
                }
            }
        }
        if include_pools {
            if let Some(pairs) = graph.pool_pairs.get(asset) {
                for (source_asset, pool_ids) in pairs {
                    for pool_id in pool_ids {
                        let Some(pool) = graph.pools.get(pool_id) else {
                            continue;
                        };
                        if let Some(required) = Venue::Pool(pool).source_amount(asset, need) {
                            merge_candidate(&mut best, source_asset, required, |a, b| {
                                self.prefer(a, b)
                            });
                        }
                    }
                }
            }
        }
        best.into_iter().collect()
    }

    fn prefer(&self, a: i64, b: i64) -> Ordering {
        // the less the caller has to pay, the better
        a.cmp(&b)
    }

    fn path_amount(&self, path: &Path) -> i64 {
        path.source_amount
    }
}

/// Forward strategy: terminal when the current asset is a requested
/// destination; candidates are the venues that can absorb the current asset.
struct SendStrategy {
    source_amount: i64,
    targets: FastHashSet<Asset>,
}

impl SearchStrategy for SendStrategy {
    fn terminal(&self, visited: &[Asset], amount: i64) -> Option<Path> {
        let current = visited.last()?;
        if !self.targets.contains(current) {
            return None;
        }
        Some(Path {
            source_asset: visited[0].clone(),
            source_amount: self.source_amount,
            destination_asset: current.clone(),
            destination_amount: amount,
            interior_nodes: visited[1..visited.len() - 1].to_vec(),
        })
    }

    fn candidates(
        &self,
        graph: &GraphState,
        asset: &Asset,
        available: i64,
        include_pools: bool,
    ) -> Vec<(Asset, i64)> {
        let mut best: FastHashMap<Asset, i64> = FastHashMap::default();

        if let Some(pairs) = graph.selling.get(asset) {
            for (destination_asset, ids) in pairs {
                let book = graph.sorted_book(ids, None);
                if let Some(proceeds) = Venue::Book(&book).destination_amount(asset, available) {
                    merge_candidate(&mut best, destination_asset, proceeds, |a, b| {
                        self.prefer(a, b)
                    });
                }
            }
        }
        if include_pools {
            if let Some(pairs) = graph.pool_pairs.get(asset) {
                for (destination_asset, pool_ids) in pairs {
                    for pool_id in pool_ids {
                        let Some(pool) = graph.pools.get(pool_id) else {
                            continue;
                        };
                        if let Some(proceeds) =
                            Venue::Pool(pool).destination_amount(asset, available)
                        {
                            merge_candidate(&mut best, destination_asset, proceeds, |a, b| {
                                self.prefer(a, b)
                            });
                        }
                    }
                }
            }
        }
        best.into_iter().collect()
    }

    fn prefer(&self, a: i64, b: i64) -> Ordering {
        // the more the destination receives, the better
        b.cmp(&a)
    }

    fn path_amount(&self, path: &Path) -> i64 {
        path.destination_amount
    }
}

pub(crate) fn find_paths(
    graph: &GraphState,
    cancel: &Cancellation,
    query: &ReceiveQuery,
    max_path_length: usize,
    max_assets_per_path: usize,
    include_pools: bool,
) -> Result<Vec<Path>, PathError> {
    let mut targets = FastHashMap::default();
    for (i, asset) in query.source_assets.iter().enumerate() {
        let cap = query.source_asset_balances.get(i).copied().unwrap_or(0);
        targets.insert(asset.clone(), cap);
    }
    let strategy = ReceiveStrategy {
        destination_amount: query.destination_amount,
        source_account: query.source_account.clone(),
        targets,
        validate_source_balance: query.validate_source_balance,
    };
    Search {
        graph,
        strategy,
        cancel,
        max_path_length,
        max_assets_per_path,
        include_pools,
        visited: Vec::with_capacity(max_path_length + 1),
        results: PathAccumulator::new(),
    }
    .run(query.destination_asset.clone(), query.destination_amount)
}

pub(crate) fn find_fixed_paths(
    graph: &GraphState,
    cancel: &Cancellation,
    query: &SendQuery,
    max_path_length: usize,
    max_assets_per_path: usize,
    include_pools: bool,
) -> Result<Vec<Path>, PathError> {
    let strategy = SendStrategy {
        source_amount: query.amount_to_spend,
        targets: query.destination_assets.iter().cloned().collect(),
    };
    Search {
        graph,
        strategy,
        cancel,
        max_path_length,
        max_assets_per_path,
        include_pools,
        visited: Vec::with_capacity(max_path_length + 1),
        results: PathAccumulator::new(),
    }
    .run(query.source_asset.clone(), query.amount_to_spend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::{Offer, Pool, PoolId, Price};
    use crate::graph::order_book::{ChangeKind, LedgerChange, OrderBookGraph};
    use std::collections::HashSet;

    const MAX_LENGTH: usize = 5;
    const MAX_ASSETS: usize = 5;

    fn asset(code: &str) -> Asset {
        Asset::credit(code, "issuer-1")
    }

    fn offer(id: i64, selling: &str, buying: &str, price: (i32, i32), amount: i64) -> LedgerChange {
        LedgerChange::Offer {
            kind: ChangeKind::Created,
            offer: Offer {
                offer_id: id,
                seller: "seller-1".to_string(),
                selling: asset(selling),
                buying: asset(buying),
                price: Price::new(price.0, price.1),
                amount,
                last_modified_ledger: 0,
            },
        }
    }

    fn pool(id: u8, a: &str, b: &str, reserve_a: i64, reserve_b: i64) -> LedgerChange {
        assert!(asset(a) < asset(b));
        LedgerChange::Pool {
            kind: ChangeKind::Created,
            pool: Pool {
                pool_id: PoolId([id; 32]),
                asset_a: asset(a),
                asset_b: asset(b),
                reserve_a,
                reserve_b,
                fee_bps: 30,
                last_modified_ledger: 0,
            },
        }
    }

    fn receive_query(destination: &str, amount: i64, sources: &[&str]) -> ReceiveQuery {
        ReceiveQuery {
            destination_asset: asset(destination),
            destination_amount: amount,
            source_account: None,
            source_assets: sources.iter().map(|code| asset(code)).collect(),
            source_asset_balances: vec![0; sources.len()],
            validate_source_balance: false,
        }
    }

    fn send_query(source: &str, amount: i64, destinations: &[&str]) -> SendQuery {
        SendQuery {
            source_asset: asset(source),
            amount_to_spend: amount,
            destination_assets: destinations.iter().map(|code| asset(code)).collect(),
        }
    }

    fn find(graph: &OrderBookGraph, query: &ReceiveQuery) -> Vec<Path> {
        graph
            .find_paths(&Cancellation::new(), query, MAX_LENGTH, MAX_ASSETS, true)
            .unwrap()
            .0
    }

    fn find_fixed(graph: &OrderBookGraph, query: &SendQuery) -> Vec<Path> {
        graph
            .find_fixed_paths(&Cancellation::new(), query, MAX_LENGTH, MAX_ASSETS, true)
            .unwrap()
            .0
    }

    #[test]
    fn test_strict_receive_single_offer() {
        let graph = OrderBookGraph::new();
        graph.apply(1, &[offer(1, "AAA", "BBB", (1, 1), 100)]).unwrap();

        let paths = find(&graph, &receive_query("BBB", 50, &["AAA"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].source_asset, asset("AAA"));
        assert_eq!(paths[0].source_amount, 50);
        assert_eq!(paths[0].destination_asset, asset("BBB"));
        assert_eq!(paths[0].destination_amount, 50);
        assert!(paths[0].interior_nodes.is_empty());
    }

    #[test]
    fn test_strict_send_single_offer() {
        let graph = OrderBookGraph::new();
        graph.apply(1, &[offer(1, "AAA", "BBB", (1, 1), 100)]).unwrap();

        let paths = find_fixed(&graph, &send_query("AAA", 50, &["BBB"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].source_amount, 50);
        assert_eq!(paths[0].destination_amount, 50);
        assert!(paths[0].interior_nodes.is_empty());
    }

    #[test]
    fn test_two_hop_paths_in_both_directions() -> eyre::Result<()> {
        let graph = OrderBookGraph::new();
        graph.apply(
            1,
            &[
                offer(1, "AAA", "BBB", (1, 1), 1000),
                offer(2, "BBB", "CCC", (1, 2), 1000),
            ],
        )?;

        // backward: 10 CCC costs 20 BBB costs 20 AAA
        let paths = find(&graph, &receive_query("CCC", 10, &["AAA"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].source_amount, 20);
        assert_eq!(paths[0].interior_nodes, vec![asset("BBB")]);

        // forward: 20 AAA becomes 20 BBB becomes 10 CCC
        let paths = find_fixed(&graph, &send_query("AAA", 20, &["CCC"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].destination_amount, 10);
        assert_eq!(paths[0].interior_nodes, vec![asset("BBB")]);
        Ok(())
    }

    #[test]
    fn test_offer_capacity_bounds_the_edge() {
        let graph = OrderBookGraph::new();
        graph.apply(1, &[offer(1, "AAA", "BBB", (1, 1), 40)]).unwrap();

        // the single offer cannot emit 50 BBB
        assert!(find(&graph, &receive_query("BBB", 50, &["AAA"])).is_empty());
        // nor absorb 50 AAA
        assert!(find_fixed(&graph, &send_query("AAA", 50, &["BBB"])).is_empty());
    }

    #[test]
    fn test_book_spans_multiple_offers() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 30),
                    offer(2, "AAA", "BBB", (1, 2), 100),
                ],
            )
            .unwrap();

        // 50 BBB: 30 from the 1:1 offer, 20 from the 1:2 offer at cost 40
        let paths = find(&graph, &receive_query("BBB", 50, &["AAA"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].source_amount, 70);
    }

    #[test]
    fn test_no_asset_repeats_on_any_path() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 1000),
                    offer(2, "BBB", "CCC", (1, 1), 1000),
                    offer(3, "CCC", "AAA", (1, 1), 1000),
                    offer(4, "CCC", "BBB", (1, 1), 1000),
                    offer(5, "BBB", "AAA", (1, 1), 1000),
                ],
            )
            .unwrap();

        let paths = find(&graph, &receive_query("AAA", 10, &["AAA", "BBB", "CCC"]));
        assert!(!paths.is_empty());
        for path in &paths {
            let mut seen = HashSet::new();
            seen.insert(path.source_asset.clone());
            for node in &path.interior_nodes {
                assert!(seen.insert(node.clone()), "asset repeated on {path:?}");
            }
            assert!(
                seen.insert(path.destination_asset.clone()),
                "asset repeated on {path:?}"
            );
        }
    }

    #[test]
    fn test_source_asset_can_be_an_intermediary() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 1000),
                    offer(2, "BBB", "CCC", (1, 1), 1000),
                ],
            )
            .unwrap();

        let paths = find(&graph, &receive_query("CCC", 10, &["AAA", "BBB"]));
        // BBB pays directly; AAA pays through BBB
        assert_eq!(paths.len(), 2);
        let sources: HashSet<Asset> = paths.iter().map(|p| p.source_asset.clone()).collect();
        assert!(sources.contains(&asset("AAA")));
        assert!(sources.contains(&asset("BBB")));
    }

    #[test]
    fn test_best_venue_wins_between_offers_and_pool() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 1000),
                    // heavily skewed pool: much worse rate than the offer
                    pool(1, "AAA", "BBB", 1_000_000, 1_000),
                ],
            )
            .unwrap();

        let paths = find(&graph, &receive_query("BBB", 50, &["AAA"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].source_amount, 50);
    }

    #[test]
    fn test_pool_only_route_respects_include_pools() {
        let graph = OrderBookGraph::new();
        graph.apply(1, &[pool(1, "AAA", "BBB", 100_000, 100_000)]).unwrap();

        let query = receive_query("BBB", 50, &["AAA"]);
        let with_pools = graph
            .find_paths(&Cancellation::new(), &query, MAX_LENGTH, MAX_ASSETS, true)
            .unwrap()
            .0;
        assert_eq!(with_pools.len(), 1);
        assert!(with_pools[0].source_amount > 50); // fee and slippage

        let without_pools = graph
            .find_paths(&Cancellation::new(), &query, MAX_LENGTH, MAX_ASSETS, false)
            .unwrap()
            .0;
        assert!(without_pools.is_empty());
    }

    #[test]
    fn test_source_balance_validation() {
        let graph = OrderBookGraph::new();
        graph.apply(1, &[offer(1, "AAA", "BBB", (1, 1), 100)]).unwrap();

        let mut query = receive_query("BBB", 50, &["AAA"]);
        query.source_asset_balances = vec![30];
        query.validate_source_balance = true;
        assert!(find(&graph, &query).is_empty());

        query.source_asset_balances = vec![60];
        assert_eq!(find(&graph, &query).len(), 1);
    }

    #[test]
    fn test_source_account_offers_are_excluded() {
        let graph = OrderBookGraph::new();
        let mut own = match offer(1, "AAA", "BBB", (1, 1), 100) {
            LedgerChange::Offer { offer, .. } => offer,
            _ => unreachable!(),
        };
        own.seller = "account-x".to_string();
        graph
            .apply(1, &[LedgerChange::Offer { kind: ChangeKind::Created, offer: own }])
            .unwrap();

        let mut query = receive_query("BBB", 50, &["AAA"]);
        query.source_account = Some("account-x".to_string());
        assert!(find(&graph, &query).is_empty());

        query.source_account = Some("someone-else".to_string());
        assert_eq!(find(&graph, &query).len(), 1);
    }

    #[test]
    fn test_max_path_length_bounds_the_walk() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 1000),
                    offer(2, "BBB", "CCC", (1, 1), 1000),
                    offer(3, "CCC", "DDD", (1, 1), 1000),
                ],
            )
            .unwrap();

        let query = receive_query("DDD", 10, &["AAA"]);
        let short = graph
            .find_paths(&Cancellation::new(), &query, 2, MAX_ASSETS, true)
            .unwrap()
            .0;
        assert!(short.is_empty());

        let long = graph
            .find_paths(&Cancellation::new(), &query, 3, MAX_ASSETS, true)
            .unwrap()
            .0;
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].interior_nodes, vec![asset("BBB"), asset("CCC")]);
    }

    #[test]
    fn test_fan_out_truncation_is_a_known_incompleteness() {
        // two disjoint two-hop routes exist; with a fan-out of one, only the
        // best-priced first hop is explored and the other route is lost
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 1000),
                    offer(2, "BBB", "DDD", (1, 1), 1000),
                    offer(3, "AAA", "CCC", (1, 2), 1000),
                    offer(4, "CCC", "DDD", (1, 1), 1000),
                ],
            )
            .unwrap();

        let query = receive_query("DDD", 10, &["AAA"]);
        let all = graph
            .find_paths(&Cancellation::new(), &query, MAX_LENGTH, MAX_ASSETS, true)
            .unwrap()
            .0;
        assert_eq!(all.len(), 2);

        let truncated = graph
            .find_paths(&Cancellation::new(), &query, MAX_LENGTH, 1, true)
            .unwrap()
            .0;
        assert_eq!(truncated.len(), 1);
        assert_eq!(truncated[0].interior_nodes, vec![asset("BBB")]);
    }

    #[test]
    fn test_results_are_sorted_best_first() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "DDD", (1, 2), 1000), // direct but expensive
                    offer(2, "AAA", "BBB", (1, 1), 1000),
                    offer(3, "BBB", "DDD", (1, 1), 1000),
                ],
            )
            .unwrap();

        let paths = find(&graph, &receive_query("DDD", 10, &["AAA"]));
        assert_eq!(paths.len(), 2);
        assert!(paths[0].source_amount <= paths[1].source_amount);
        assert_eq!(paths[0].source_amount, 10);
        assert_eq!(paths[1].source_amount, 20);
    }

    #[test]
    fn test_cancellation_aborts_the_search() {
        let graph = OrderBookGraph::new();
        graph.apply(1, &[offer(1, "AAA", "BBB", (1, 1), 100)]).unwrap();

        let cancel = Cancellation::new();
        cancel.cancel();
        let err = graph
            .find_paths(&cancel, &receive_query("BBB", 50, &["AAA"]), MAX_LENGTH, MAX_ASSETS, true)
            .unwrap_err();
        assert_eq!(err, PathError::Cancelled);
    }

    #[test]
    fn test_send_to_multiple_destinations() {
        let graph = OrderBookGraph::new();
        graph
            .apply(
                1,
                &[
                    offer(1, "AAA", "BBB", (1, 1), 1000),
                    offer(2, "AAA", "CCC", (2, 1), 1000),
                ],
            )
            .unwrap();

        let paths = find_fixed(&graph, &send_query("AAA", 100, &["BBB", "CCC"]));
        assert_eq!(paths.len(), 2);
        // sorted by destination amount, best first
        assert_eq!(paths[0].destination_asset, asset("CCC"));
        assert_eq!(paths[0].destination_amount, 200);
        assert_eq!(paths[1].destination_asset, asset("BBB"));
        assert_eq!(paths[1].destination_amount, 100);
    }
}
