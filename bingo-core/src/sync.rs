//! Edge-triggered side effects over successive game snapshots.
//!
//! The sync loop replaces the observed snapshot wholesale every tick, so
//! side effects must not key on a field being *present* — only on its value
//! changing since the last successful fetch. `SyncTracker` keeps one
//! last-observed guard per effect channel (narration, winner banner) and is
//! only ever fed successfully fetched snapshots; failed ticks bypass it
//! entirely.

use std::time::{Duration, Instant};

use crate::types::GameSnapshot;

/// Fixed polling period for game-state fetches.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long the winner banner stays up before automatic dismissal.
pub const WINNER_BANNER_DURATION: Duration = Duration::from_secs(8);

/// Side effect requested by a snapshot observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEffect {
    /// Start playback of a narration clip. Fires once per distinct
    /// reference value, never on repetition.
    PlayNarration(String),
    /// Show the winner banner. At most one active banner at a time.
    ShowWinner { name: String, card_id: String },
}

#[derive(Debug, Default)]
pub struct SyncTracker {
    /// Last narration reference handed to playback. Deliberately kept when
    /// a snapshot omits the field: a reference that disappears and
    /// reappears identical must not replay.
    last_narration: Option<String>,
    banner_until: Option<Instant>,
}

impl SyncTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one successfully fetched snapshot and collect the effects it
    /// triggers. `now` is injected so tests control the clock.
    pub fn observe(&mut self, snapshot: &GameSnapshot, now: Instant) -> Vec<SyncEffect> {
        let mut effects = Vec::new();

        if let Some(url) = snapshot.narration_url.as_deref() {
            if self.last_narration.as_deref() != Some(url) {
                self.last_narration = Some(url.to_owned());
                effects.push(SyncEffect::PlayNarration(url.to_owned()));
            }
        }

        if snapshot.is_winner && !self.banner_active(now) {
            self.banner_until = Some(now + WINNER_BANNER_DURATION);
            effects.push(SyncEffect::ShowWinner {
                name: snapshot.winner_name.clone().unwrap_or_default(),
                card_id: snapshot
                    .winner_card_id
                    .clone()
                    .unwrap_or_else(|| "--".to_owned()),
            });
        }

        effects
    }

    /// Whether the winner banner should currently be on screen.
    pub fn banner_active(&self, now: Instant) -> bool {
        self.banner_until.map(|until| now < until).unwrap_or(false)
    }

    /// Manual dismissal from the banner's close control.
    pub fn dismiss_banner(&mut self) {
        self.banner_until = None;
    }
}
