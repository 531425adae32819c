use thiserror::Error;

/// Prefix of the line that replaces a subtree whose rendering faulted.
pub const FAULT_PREFIX: &str = "dump_walk() error: ";

/// Failure raised while walking a value.
///
/// Faults never leave the public entry points; the renderer turns them into a
/// `dump_walk() error: <message>` line in place of the affected subtree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderFault {
    #[error("cannot read members of {type_name}: {reason}")]
    MemberAccess { type_name: String, reason: String },

    #[error("maximum depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("{0}")]
    Custom(String),
}

impl RenderFault {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    pub fn member_access(type_name: &str, reason: impl ToString) -> Self {
        Self::MemberAccess {
            type_name: type_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors building a [`Value`](crate::Value) from host data.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}
