//! Shared domain types and presentation logic for the bingo client.
//!
//! The remote service is the sole source of truth: it draws numbers, marks
//! cards, computes prizes, and detects wins. Nothing in this crate derives
//! game state; it only models the service's wire shapes and the client-side
//! contract around them — which side effects fire when a freshly fetched
//! snapshot differs from the last one, and how state is windowed and
//! formatted for display.

pub mod display;
pub mod support;
pub mod sync;
pub mod types;

pub use display::{format_brl, recent_history, HISTORY_DISPLAY_LEN};
pub use support::{can_submit, word_count, SUPPORT_WORD_LIMIT};
pub use sync::{SyncEffect, SyncTracker, POLL_INTERVAL, WINNER_BANNER_DURATION};
pub use types::{
    ActivePrize, AdSpot, Approximation, BingoCard, GameSnapshot, Player, PrizeBoard, PrizeKind,
    GRID_SIZE,
};
