//! Mobile-styled bingo client.
//!
//! Renders remote game state and forwards player actions to the bingo
//! service; no game logic runs locally. The egui thread owns all state,
//! a worker thread owns the tokio runtime and every network call, and a
//! playback thread owns the audio device.

pub mod api;
pub mod app;
pub mod audio;
pub mod config;
pub mod msg;
pub mod ui;
pub mod worker;
