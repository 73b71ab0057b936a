pub mod edge;
pub mod order_book;

pub use edge::{MAX_BPS, Offer, Pool, PoolId, Price};
pub use order_book::{ChangeKind, FastHashMap, FastHashSet, LedgerChange, OrderBookGraph};
