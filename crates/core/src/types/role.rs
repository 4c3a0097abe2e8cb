//! Account roles.

use serde::{Deserialize, Serialize};

/// Role attached to an account, deciding which dashboard it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator: manages stores and users.
    Admin,
    /// Regular visitor: browses and rates stores.
    #[default]
    User,
    /// Owner of a registered store: views aggregated feedback.
    StoreOwner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
            Self::StoreOwner => write!(f, "store_owner"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "store_owner" => Ok(Self::StoreOwner),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
