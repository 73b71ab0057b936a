use crate::amount::{mul_div_ceil, mul_div_floor, positive_min};
use crate::asset::{AccountId, Asset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Fee rates are expressed in basis points of this denominator.
pub const MAX_BPS: i64 = 10_000;

/// Rational price of an offer: one unit of the selling asset converts into
/// `n / d` units of the buying asset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl Price {
    pub fn new(n: i32, d: i32) -> Price {
        Price { n, d }
    }

    pub fn is_valid(&self) -> bool {
        self.n > 0 && self.d > 0
    }

    /// Orders offers best-rate-first in both traversal directions: a smaller
    /// `d / n` both costs less per destination unit (backward) and yields
    /// more per source unit (forward).
    pub(crate) fn cmp_rate(&self, other: &Price) -> Ordering {
        (self.d as i64 * other.n as i64).cmp(&(other.d as i64 * self.n as i64))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}

/// A standing limit order: an edge from `selling` to `buying`.
///
/// `amount` is the remaining selling-side capacity and is strictly positive
/// for every offer that is a member of the graph; the graph applies a
/// depleted offer as a removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub offer_id: i64,
    pub seller: AccountId,
    pub selling: Asset,
    pub buying: Asset,
    pub price: Price,
    pub amount: i64,
    pub last_modified_ledger: u32,
}

impl Offer {
    /// Buying-asset proceeds from placing `spend` units of the selling asset
    /// into this offer. Not bounded by the offer capacity.
    fn proceeds_of(&self, spend: i64) -> Option<i64> {
        mul_div_floor(spend, self.price.n as i64, self.price.d as i64)
    }

    /// Selling-asset payment required to realize `out` units of the buying
    /// asset, rounded against the taker.
    fn cost_of(&self, out: i64) -> Option<i64> {
        mul_div_ceil(out, self.price.d as i64, self.price.n as i64)
    }

    /// Most buying-asset units this offer can emit at its remaining capacity.
    fn capacity_out(&self) -> Option<i64> {
        self.proceeds_of(self.amount)
    }
}

/// Unique identifier of a liquidity pool.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(pub [u8; 32]);

impl Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PoolId({self})")
    }
}

impl From<[u8; 32]> for PoolId {
    fn from(id: [u8; 32]) -> Self {
        PoolId(id)
    }
}

impl Serialize for PoolId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PoolId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut id = [0u8; 32];
        hex::decode_to_slice(&s, &mut id).map_err(serde::de::Error::custom)?;
        Ok(PoolId(id))
    }
}

/// A two-asset constant-product liquidity pool, usable in both directions.
///
/// Stored in one canonical direction (`asset_a < asset_b`). A pool whose
/// reserves are non-positive stays tracked but is invisible to traversal
/// until a later reserve change reactivates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub pool_id: PoolId,
    pub asset_a: Asset,
    pub asset_b: Asset,
    pub reserve_a: i64,
    pub reserve_b: i64,
    pub fee_bps: i32,
    pub last_modified_ledger: u32,
}

impl Pool {
    pub fn is_usable(&self) -> bool {
        self.reserve_a > 0 && self.reserve_b > 0
    }

    pub fn other_asset(&self, asset: &Asset) -> Option<&Asset> {
        if *asset == self.asset_a {
            Some(&self.asset_b)
        } else if *asset == self.asset_b {
            Some(&self.asset_a)
        } else {
            None
        }
    }

    /// Reserves oriented so the first element backs `in_asset`.
    fn oriented_reserves(&self, in_asset: &Asset) -> Option<(i64, i64)> {
        if *in_asset == self.asset_a {
            Some((self.reserve_a, self.reserve_b))
        } else if *in_asset == self.asset_b {
            Some((self.reserve_b, self.reserve_a))
        } else {
            None
        }
    }

    /// Constant-product forward quote: proceeds of depositing `amount_in` of
    /// `in_asset`, after the fee.
    ///
    /// `out = reserve_out * in' / (reserve_in + in')` with
    /// `in' = amount_in * (MAX_BPS - fee) / MAX_BPS`, evaluated in integers
    /// without the intermediate division.
    pub(crate) fn amount_out(&self, in_asset: &Asset, amount_in: i64) -> Option<i64> {
        if !self.is_usable() || amount_in <= 0 {
            return None;
        }
        let (reserve_in, reserve_out) = self.oriented_reserves(in_asset)?;
        let keep = MAX_BPS.checked_sub(self.fee_bps as i64).filter(|k| *k > 0)?;

        let in_after_fee = (amount_in as i128).checked_mul(keep as i128)?;
        let numer = (reserve_out as i128).checked_mul(in_after_fee)?;
        let denom = (reserve_in as i128).checked_mul(MAX_BPS as i128)?.checked_add(in_after_fee)?;
        let out = i64::try_from(numer / denom).ok()?;
        (out > 0).then_some(out)
    }

    /// Constant-product inverse quote: deposit required to withdraw
    /// `amount_out` of `out_asset`, rounded against the taker. Rejects
    /// withdrawals that would meet or drain the reserve.
    pub(crate) fn amount_in(&self, out_asset: &Asset, amount_out: i64) -> Option<i64> {
        if !self.is_usable() || amount_out <= 0 {
            return None;
        }
        let (reserve_out, reserve_in) = self.oriented_reserves(out_asset)?;
        if amount_out >= reserve_out {
            return None;
        }
        let keep = MAX_BPS.checked_sub(self.fee_bps as i64).filter(|k| *k > 0)?;

        let numer = (reserve_in as i128)
            .checked_mul(amount_out as i128)?
            .checked_mul(MAX_BPS as i128)?;
        let denom = ((reserve_out - amount_out) as i128).checked_mul(keep as i128)?;
        let required = i64::try_from((numer + denom - 1) / denom).ok()?;
        (required > 0).then_some(required)
    }
}

/// One tradable connection between a pair of assets, in the direction of
/// travel: either the full offer book crossing the pair (best rate first),
/// or a single liquidity pool. The edge kinds are fixed and exhaustively
/// known, so this is a closed variant rather than open polymorphism.
pub(crate) enum Venue<'a> {
    Book(&'a [&'a Offer]),
    Pool(&'a Pool),
}

impl Venue<'_> {
    /// Source-side amount required to realize `need` units of `out_asset`
    /// on the destination side, or `None` if this venue cannot provide it.
    pub(crate) fn source_amount(&self, out_asset: &Asset, need: i64) -> Option<i64> {
        match self {
            Venue::Book(offers) => consume_offers_for_exact_out(offers, need),
            Venue::Pool(pool) => pool.amount_in(out_asset, need),
        }
    }

    /// Destination-side amount obtained by spending `available` units of
    /// `in_asset`, or `None` if this venue cannot absorb the full amount.
    pub(crate) fn destination_amount(&self, in_asset: &Asset, available: i64) -> Option<i64> {
        match self {
            Venue::Book(offers) => consume_offers_for_exact_in(offers, available),
            Venue::Pool(pool) => pool.amount_out(in_asset, available),
        }
    }
}

/// Walks a book sorted best-rate-first and accumulates the selling-side
/// payment required to take exactly `need` units of the buying asset.
/// `None` if the book is too thin or the arithmetic degenerates.
fn consume_offers_for_exact_out(offers: &[&Offer], need: i64) -> Option<i64> {
    if need <= 0 {
        return None;
    }
    let mut total_cost: i64 = 0;
    let mut remaining = need;
    for offer in offers {
        let Some(available_out) = offer.capacity_out() else {
            return None;
        };
        if available_out <= 0 {
            // price rounds this offer's capacity to dust
            continue;
        }
        let take = positive_min(remaining, available_out);
        let cost = offer.cost_of(take)?;
        if cost <= 0 {
            return None;
        }
        total_cost = total_cost.checked_add(cost)?;
        remaining -= take;
        if remaining == 0 {
            return Some(total_cost);
        }
    }
    None
}

/// Walks a book sorted best-rate-first and accumulates the buying-side
/// proceeds of spending exactly `pay` units of the selling asset. The full
/// amount must be absorbed; a remainder that buys nothing fails the venue.
fn consume_offers_for_exact_in(offers: &[&Offer], pay: i64) -> Option<i64> {
    if pay <= 0 {
        return None;
    }
    let mut total_out: i64 = 0;
    let mut remaining = pay;
    for offer in offers {
        let spend = positive_min(remaining, offer.amount);
        let out = offer.proceeds_of(spend)?;
        if out <= 0 {
            if spend == offer.amount {
                // price rounds this offer's capacity to dust
                continue;
            }
            // the remainder buys nothing even at the best remaining rate,
            // and every following offer is worse
            return None;
        }
        total_out = total_out.checked_add(out)?;
        remaining -= spend;
        if remaining == 0 {
            return Some(total_out);
        }
    }
    None
}
