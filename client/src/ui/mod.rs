//! Per-view egui rendering. Everything here draws verbatim from the
//! session, cards, and latest snapshot — no game state is computed.

pub mod finance;
pub mod game;
pub mod login;
pub mod shell;
pub mod support;
