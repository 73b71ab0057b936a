use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Account identifier of an offer owner. Opaque to the graph; only ever
/// compared for equality (self-trade exclusion).
pub type AccountId = String;

/// A tradable asset: the network's native currency, or a credit issued by
/// an account and identified by its code.
///
/// Assets are graph vertex keys. Equality, ordering and hashing all follow
/// the canonical encoding, so two assets are equal iff their canonical
/// encodings are byte-identical.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asset {
    Native,
    Credit { code: String, issuer: String },
}

impl Asset {
    pub fn native() -> Asset {
        Asset::Native
    }

    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Asset {
        Asset::Credit { code: code.into(), issuer: issuer.into() }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// Canonical encoding: `native`, or `CODE:ISSUER` for credit assets.
    pub fn canonical(&self) -> String {
        match self {
            Asset::Native => "native".to_string(),
            Asset::Credit { code, issuer } => format!("{code}:{issuer}"),
        }
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({})", self.canonical())
    }
}
