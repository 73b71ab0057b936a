use crate::asset::Asset;
use crate::graph::order_book::FastHashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::{Debug, Display};

/// A discovered payment path.
///
/// `interior_nodes` is the ordered walk between (and exclusive of) the
/// source and destination assets, exactly as discovered. Every consecutive
/// pair was connected by at least one usable offer or pool at the ledger
/// sequence the search ran against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub source_asset: Asset,
    pub source_amount: i64,
    pub destination_asset: Asset,
    pub destination_amount: i64,
    pub interior_nodes: Vec<Asset>,
}

impl Path {
    /// Stable identity used for duplicate collapse: two paths with the same
    /// source, interior walk and destination are the same route.
    pub(crate) fn key(&self) -> PathKey {
        let mut hasher = Sha256::new();
        hasher.update(self.source_asset.canonical().as_bytes());
        hasher.update([0]);
        for asset in &self.interior_nodes {
            hasher.update(asset.canonical().as_bytes());
            hasher.update([0]);
        }
        hasher.update(self.destination_asset.canonical().as_bytes());
        PathKey(hasher.finalize().into())
    }

    /// Total hop count of the walk.
    pub fn hop_count(&self) -> usize {
        self.interior_nodes.len() + 1
    }
}

/// Sha256 of a path's asset sequence. Stable and reproducible, so it can be
/// compared across processes.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct PathKey(pub [u8; 32]);

impl Display for PathKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for PathKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathKey({self})")
    }
}

impl Serialize for PathKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PathKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut key = [0u8; 32];
        hex::decode_to_slice(&s, &mut key).map_err(serde::de::Error::custom)?;
        Ok(PathKey(key))
    }
}

/// Collapses duplicate routes, keeping whichever path the supplied
/// preference says is better.
#[derive(Default)]
pub(crate) struct PathAccumulator {
    best: FastHashMap<PathKey, Path>,
}

impl PathAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, path: Path, better: impl Fn(&Path, &Path) -> bool) {
        match self.best.entry(path.key()) {
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(path);
            }
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                if better(&path, entry.get()) {
                    entry.insert(path);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }

    pub(crate) fn into_vec(self) -> Vec<Path> {
        self.best.into_values().collect()
    }
}
