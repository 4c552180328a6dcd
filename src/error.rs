//! Error types for graphic operations.

use crate::graphic::{ActionId, EventKind};

/// Errors raised by containers, the pagination layer and action dispatch.
#[derive(Debug, thiserror::Error)]
pub enum GraphicError {
    #[error("this graphic is already closed, it needs to be recreated")]
    Closed,

    #[error("{operation} must be called from the primary execution context")]
    ThreadAffinity { operation: &'static str },

    #[error("there's no valid row with slots amount: {0}")]
    InvalidSize(usize),

    #[error("the start ({start}) cannot be higher than the end ({end})")]
    InvalidRange { start: usize, end: usize },

    #[error("slot {slot} is outside of a grid with {size} slots")]
    SlotOutOfRange { slot: usize, size: usize },

    #[error(
        "cannot invoke action {action} on {} for {kind} event{}",
        describe_slot(.slot),
        cancelled_suffix(*.cancelled)
    )]
    ActionFailed {
        action: ActionId,
        slot: Option<usize>,
        kind: EventKind,
        cancelled: bool,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias used across the graphic modules.
pub type Result<T> = std::result::Result<T, GraphicError>;

fn describe_slot(slot: &Option<usize>) -> String {
    match slot {
        Some(slot) => format!("slot {slot}"),
        None => "the global scope".to_string(),
    }
}

fn cancelled_suffix(cancelled: bool) -> &'static str {
    if cancelled {
        ", the event was cancelled automatically to avoid issues"
    } else {
        ""
    }
}

impl GraphicError {
    /// Whether this error came out of a failing action callback.
    #[must_use]
    pub fn is_action_failure(&self) -> bool {
        matches!(self, Self::ActionFailed { .. })
    }
}
