//! Display windowing and formatting helpers.

/// The game view shows at most this many draw-history entries.
pub const HISTORY_DISPLAY_LEN: usize = 8;

/// Most-recent-first window of the draw history.
pub fn recent_history(history: &[u8]) -> Vec<u8> {
    history
        .iter()
        .rev()
        .take(HISTORY_DISPLAY_LEN)
        .copied()
        .collect()
}

/// Monetary rendering: always two decimal places.
pub fn format_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}
