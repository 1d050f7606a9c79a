//! Messages between the egui thread and the network worker.
//!
//! Error variants deliberately carry no detail: the UI shows generic
//! localized messages only, while the worker logs the specifics.

use bingo_core::types::{BingoCard, GameSnapshot, Player};

use crate::api::{LoginRequest, RegisterRequest, WithdrawRequest};

#[derive(Debug)]
pub enum UiToNet {
    Login(LoginRequest),
    Register(RegisterRequest),
    /// Begin polling game state for a session. Any previous polling task is
    /// torn down first; `generation` stamps every snapshot the new task
    /// emits.
    StartSync { user_id: String, generation: u64 },
    StopSync,
    RequestCredit { user_id: String },
    Withdraw(WithdrawRequest),
    Support { user_id: String, message: String },
}

#[derive(Debug)]
pub enum NetToUi {
    AuthOk { user: Player, cards: Vec<BingoCard> },
    AuthErr,
    /// One successfully fetched snapshot. The UI discards it unless
    /// `generation` matches its current sync generation.
    Snapshot { generation: u64, snapshot: GameSnapshot },
    CreditLink { url: String },
    WithdrawDone { status: String },
    WithdrawErr,
    SupportDone { contact_url: Option<String> },
    SupportErr,
}
