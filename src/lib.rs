//! In-memory order book graph and payment path finding.
//!
//! The graph holds every tradable-asset relationship known to the ledger:
//! limit offers and constant-product liquidity pools, kept synchronized by
//! applying one batch of entity changes per ledger. On top of it sit two
//! searches: strict-receive (fix the destination amount, solve backward for
//! the cheapest sources) and strict-send (fix the source amount, solve
//! forward for the best destinations).

pub mod amount;
pub mod asset;
pub mod cancel;
pub mod error;
pub mod finder;
pub mod graph;
pub mod search;

pub use amount::positive_min;
pub use asset::{AccountId, Asset};
pub use cancel::Cancellation;
pub use error::{GraphError, PathError};
pub use finder::{MAX_ASSETS_PER_PATH, MAX_PATH_LENGTH, PathFinder};
pub use graph::{ChangeKind, LedgerChange, MAX_BPS, Offer, OrderBookGraph, Pool, PoolId, Price};
pub use search::{Path, PathKey, ReceiveQuery, SendQuery};
