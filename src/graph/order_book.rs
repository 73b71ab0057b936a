use crate::asset::{AccountId, Asset};
use crate::cancel::Cancellation;
use crate::error::{GraphError, PathError};
use crate::graph::edge::{MAX_BPS, Offer, Pool, PoolId};
use crate::search::engine::{self, ReceiveQuery, SendQuery};
use crate::search::path::Path;
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use strum_macros::{Display, EnumString};
use tracing::{debug, warn};

pub type FastHasher = RandomState;
/// FastHashMap using ahash
pub type FastHashMap<K, V> = HashMap<K, V, FastHasher>;
/// FastHashSet using ahash
pub type FastHashSet<T> = HashSet<T, FastHasher>;

/// What happened to an entity in one ledger.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    Created,
    Updated,
    Removed,
}

/// One entity change inside a ledger batch. For `Removed` only the entity
/// key is meaningful; the rest of the payload is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LedgerChange {
    Offer { kind: ChangeKind, offer: Offer },
    Pool { kind: ChangeKind, pool: Pool },
}

impl LedgerChange {
    fn validate(&self) -> Result<(), GraphError> {
        match self {
            LedgerChange::Offer { kind: ChangeKind::Removed, .. } => Ok(()),
            LedgerChange::Offer { offer, .. } => {
                if !offer.price.is_valid() {
                    return Err(GraphError::InvalidOfferPrice(offer.offer_id));
                }
                Ok(())
            }
            LedgerChange::Pool { kind: ChangeKind::Removed, .. } => Ok(()),
            LedgerChange::Pool { pool, .. } => {
                if pool.asset_a >= pool.asset_b {
                    return Err(GraphError::PoolAssetOrder(pool.pool_id));
                }
                if pool.fee_bps < 0 || pool.fee_bps as i64 >= MAX_BPS {
                    return Err(GraphError::InvalidPoolFee(pool.pool_id));
                }
                Ok(())
            }
        }
    }
}

/// Adjacency state owned by the graph. Offer books are kept unsorted here;
/// ordering by rate happens at query time.
#[derive(Debug, Default)]
pub(crate) struct GraphState {
    /// offer_id -> offer
    pub(crate) offers: FastHashMap<i64, Offer>,
    /// selling asset -> buying asset -> offer ids (outgoing edges)
    pub(crate) selling: FastHashMap<Asset, FastHashMap<Asset, Vec<i64>>>,
    /// buying asset -> selling asset -> offer ids (incoming edges)
    pub(crate) buying: FastHashMap<Asset, FastHashMap<Asset, Vec<i64>>>,
    /// pool_id -> pool
    pub(crate) pools: FastHashMap<PoolId, Pool>,
    /// asset -> counter asset -> pool ids, indexed under both assets
    pub(crate) pool_pairs: FastHashMap<Asset, FastHashMap<Asset, Vec<PoolId>>>,
    /// sequence of the last fully applied ledger batch
    pub(crate) last_ledger: u32,
}

fn attach_id<T: Copy>(
    index: &mut FastHashMap<Asset, FastHashMap<Asset, Vec<T>>>,
    from: &Asset,
    to: &Asset,
    id: T,
) {
    index.entry(from.clone()).or_default().entry(to.clone()).or_default().push(id);
}

fn detach_id<T: Copy + PartialEq>(
    index: &mut FastHashMap<Asset, FastHashMap<Asset, Vec<T>>>,
    from: &Asset,
    to: &Asset,
    id: T,
) {
    if let Some(pairs) = index.get_mut(from) {
        if let Some(ids) = pairs.get_mut(to) {
            ids.retain(|existing| *existing != id);
            if ids.is_empty() {
                pairs.remove(to);
            }
        }
        if pairs.is_empty() {
            index.remove(from);
        }
    }
}

impl GraphState {
    fn apply_change(&mut self, ledger_seq: u32, change: &LedgerChange) {
        match change {
            LedgerChange::Offer { kind, offer } => match kind {
                ChangeKind::Created | ChangeKind::Updated => {
                    if offer.amount <= 0 {
                        // depleted on the ledger; same as a removal
                        self.remove_offer(offer.offer_id, ledger_seq);
                    } else {
                        self.upsert_offer(offer.clone(), ledger_seq);
                    }
                }
                ChangeKind::Removed => self.remove_offer(offer.offer_id, ledger_seq),
            },
            LedgerChange::Pool { kind, pool } => match kind {
                ChangeKind::Created | ChangeKind::Updated => {
                    self.upsert_pool(pool.clone(), ledger_seq)
                }
                ChangeKind::Removed => self.remove_pool(pool.pool_id, ledger_seq),
            },
        }
    }

    fn upsert_offer(&mut self, mut offer: Offer, ledger_seq: u32) {
        if let Some(existing) = self.offers.get(&offer.offer_id) {
            // last writer by sequence wins at the entity level
            if existing.last_modified_ledger > ledger_seq {
                return;
            }
            let (selling, buying, id) =
                (existing.selling.clone(), existing.buying.clone(), existing.offer_id);
            detach_id(&mut self.selling, &selling, &buying, id);
            detach_id(&mut self.buying, &buying, &selling, id);
        }
        offer.last_modified_ledger = ledger_seq;
        attach_id(&mut self.selling, &offer.selling, &offer.buying, offer.offer_id);
        attach_id(&mut self.buying, &offer.buying, &offer.selling, offer.offer_id);
        self.offers.insert(offer.offer_id, offer);
    }

    fn remove_offer(&mut self, offer_id: i64, ledger_seq: u32) {
        if let Some(existing) = self.offers.get(&offer_id) {
            if existing.last_modified_ledger > ledger_seq {
                return;
            }
        }
        if let Some(removed) = self.offers.remove(&offer_id) {
            detach_id(&mut self.selling, &removed.selling, &removed.buying, offer_id);
            detach_id(&mut self.buying, &removed.buying, &removed.selling, offer_id);
        }
    }

    fn upsert_pool(&mut self, mut pool: Pool, ledger_seq: u32) {
        if let Some(existing) = self.pools.get(&pool.pool_id) {
            if existing.last_modified_ledger > ledger_seq {
                return;
            }
            let (a, b, id) = (existing.asset_a.clone(), existing.asset_b.clone(), existing.pool_id);
            detach_id(&mut self.pool_pairs, &a, &b, id);
            detach_id(&mut self.pool_pairs, &b, &a, id);
        }
        pool.last_modified_ledger = ledger_seq;
        attach_id(&mut self.pool_pairs, &pool.asset_a, &pool.asset_b, pool.pool_id);
        attach_id(&mut self.pool_pairs, &pool.asset_b, &pool.asset_a, pool.pool_id);
        self.pools.insert(pool.pool_id, pool);
    }

    fn remove_pool(&mut self, pool_id: PoolId, ledger_seq: u32) {
        if let Some(existing) = self.pools.get(&pool_id) {
            if existing.last_modified_ledger > ledger_seq {
                return;
            }
        }
        if let Some(removed) = self.pools.remove(&pool_id) {
            detach_id(&mut self.pool_pairs, &removed.asset_a, &removed.asset_b, pool_id);
            detach_id(&mut self.pool_pairs, &removed.asset_b, &removed.asset_a, pool_id);
        }
    }

    fn is_empty(&self) -> bool {
        self.offers.is_empty() && !self.pools.values().any(Pool::is_usable)
    }

    /// The offers behind one pair's ids, best rate first, excluding a seller
    /// when a self-trade guard is in effect.
    pub(crate) fn sorted_book(&self, ids: &[i64], exclude_seller: Option<&AccountId>) -> Vec<&Offer> {
        let mut book: Vec<&Offer> = ids
            .iter()
            .filter_map(|id| self.offers.get(id))
            .filter(|offer| exclude_seller.is_none_or(|seller| offer.seller != *seller))
            .collect();
        book.sort_by(|a, b| a.price.cmp_rate(&b.price).then(a.offer_id.cmp(&b.offer_id)));
        book
    }
}

/// In-memory graph of all tradable-asset relationships, kept synchronized
/// with the ledger-change stream.
///
/// One writer (the ledger applier, one batch at a time) and any number of
/// concurrent readers (path searches). A search observes one fully applied
/// ledger state; a batch is applied atomically together with the advance of
/// the last-applied sequence.
///
/// The graph is an explicitly owned component: construct it once, hand out
/// `Arc<OrderBookGraph>` handles to the applier and the query layer.
#[derive(Debug, Default)]
pub struct OrderBookGraph {
    state: RwLock<GraphState>,
}

impl OrderBookGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, GraphState> {
        // a poisoned lock only means a panic mid-read elsewhere; the state
        // itself is repaired by the next batch or discard
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, GraphState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one ledger's batch of entity changes.
    ///
    /// The whole batch is validated up front; a malformed change rejects the
    /// batch with nothing applied. A batch for a ledger at or before the
    /// last applied sequence is a no-op, so replayed deliveries are
    /// idempotent. Within a batch, stale per-entity writes lose to whatever
    /// newer state is already present.
    pub fn apply(&self, ledger_seq: u32, changes: &[LedgerChange]) -> Result<(), GraphError> {
        for change in changes {
            change.validate()?;
        }

        let mut state = self.write_state();
        if ledger_seq <= state.last_ledger {
            warn!(ledger_seq, last_ledger = state.last_ledger, "skipping stale ledger batch");
            return Ok(());
        }
        for change in changes {
            state.apply_change(ledger_seq, change);
        }
        state.last_ledger = ledger_seq;
        debug!(
            ledger_seq,
            offers = state.offers.len(),
            pools = state.pools.len(),
            "applied ledger batch"
        );
        Ok(())
    }

    /// Drops all edges and resets the last applied sequence to zero. Used
    /// when the ledger collaborator is about to replay from a checkpoint.
    pub fn discard(&self) {
        let mut state = self.write_state();
        *state = GraphState::default();
        debug!("discarded order book graph");
    }

    /// True iff the graph holds no offers and no usable pools. An empty
    /// graph is ambiguous between "no ledger data yet" and "market empty",
    /// so queries reject it instead of returning zero paths.
    pub fn is_empty(&self) -> bool {
        self.read_state().is_empty()
    }

    /// Sequence of the last fully applied ledger batch.
    pub fn last_applied_ledger(&self) -> u32 {
        self.read_state().last_ledger
    }

    pub fn offer_count(&self) -> usize {
        self.read_state().offers.len()
    }

    pub fn pool_count(&self) -> usize {
        self.read_state().pools.len()
    }

    /// Snapshot of all offers, ordered by id.
    pub fn offers(&self) -> Vec<Offer> {
        let state = self.read_state();
        let mut offers: Vec<Offer> = state.offers.values().cloned().collect();
        offers.sort_by_key(|offer| offer.offer_id);
        offers
    }

    /// Snapshot of all tracked pools (usable or not), ordered by id.
    pub fn pools(&self) -> Vec<Pool> {
        let state = self.read_state();
        let mut pools: Vec<Pool> = state.pools.values().cloned().collect();
        pools.sort_by_key(|pool| pool.pool_id);
        pools
    }

    /// Strict-receive search: fixed destination amount, solved backward.
    /// Returns the discovered paths and the ledger sequence they are
    /// consistent with.
    pub fn find_paths(
        &self,
        cancel: &Cancellation,
        query: &ReceiveQuery,
        max_path_length: usize,
        max_assets_per_path: usize,
        include_pools: bool,
    ) -> Result<(Vec<Path>, u32), PathError> {
        let state = self.read_state();
        let paths = engine::find_paths(
            &state,
            cancel,
            query,
            max_path_length,
            max_assets_per_path,
            include_pools,
        )?;
        Ok((paths, state.last_ledger))
    }

    /// Strict-send search: fixed source amount, solved forward. Same
    /// staleness-reporting contract as [OrderBookGraph::find_paths].
    pub fn find_fixed_paths(
        &self,
        cancel: &Cancellation,
        query: &SendQuery,
        max_path_length: usize,
        max_assets_per_path: usize,
        include_pools: bool,
    ) -> Result<(Vec<Path>, u32), PathError> {
        let state = self.read_state();
        let paths = engine::find_fixed_paths(
            &state,
            cancel,
            query,
            max_path_length,
            max_assets_per_path,
            include_pools,
        )?;
        Ok((paths, state.last_ledger))
    }
}
