//! Root application state and event handling.
//!
//! All mutable state lives in `BingoApp` and is touched only by the egui
//! thread: network results arrive as `NetToUi` events drained once per
//! frame, so a poll tick and a user action never run at the same time.
//! Sync teardown is a generation bump — any snapshot still in flight
//! carries the old generation and is dropped on arrival.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use bingo_core::sync::{SyncEffect, SyncTracker};
use bingo_core::types::{BingoCard, GameSnapshot, Player};
use bingo_core::{can_submit, word_count, SUPPORT_WORD_LIMIT};

use crate::api::{LoginRequest, RegisterRequest, WithdrawRequest};
use crate::audio::NarrationPlayer;
use crate::msg::{NetToUi, UiToNet};
use crate::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Game,
    Finance,
    Support,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// At most one request per form in flight; submit buttons disable until
/// the response lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingRequest {
    Auth,
    Withdraw,
    Support,
}

#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub name: String,
    pub document_id: String,
    pub contact: String,
    pub password: String,
}

#[derive(Clone, Debug, Default)]
pub struct WithdrawForm {
    pub payee_name: String,
    pub document_id: String,
    pub contact: String,
    pub password: String,
    pub pix_key: String,
    pub amount: String,
}

pub struct BingoApp {
    pub view: View,
    pub auth_mode: AuthMode,
    pub session: Option<Player>,
    pub cards: Vec<BingoCard>,
    /// Latest successfully fetched snapshot; a failed tick leaves it alone.
    pub snapshot: Option<GameSnapshot>,
    pub tracker: SyncTracker,
    sync_generation: u64,
    pub pending: Option<PendingRequest>,
    pub auth_form: AuthForm,
    pub withdraw_form: WithdrawForm,
    pub support_message: String,
    /// Generic user-facing status line (never carries error detail).
    pub notice: Option<String>,
    /// Winner name and card id backing the active banner.
    pub banner_winner: Option<(String, String)>,
    open_url: Option<String>,
    tx: Sender<UiToNet>,
    rx: Receiver<NetToUi>,
    narration: NarrationPlayer,
}

impl BingoApp {
    pub fn new(tx: Sender<UiToNet>, rx: Receiver<NetToUi>, narration: NarrationPlayer) -> Self {
        Self {
            view: View::Login,
            auth_mode: AuthMode::Login,
            session: None,
            cards: Vec::new(),
            snapshot: None,
            tracker: SyncTracker::new(),
            sync_generation: 0,
            pending: None,
            auth_form: AuthForm::default(),
            withdraw_form: WithdrawForm::default(),
            support_message: String::new(),
            notice: None,
            banner_winner: None,
            open_url: None,
            tx,
            rx,
            narration,
        }
    }

    pub fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle_net_event(event, now);
        }
        // Once the banner window lapses, the winner identity goes with it.
        if self.banner_winner.is_some() && !self.tracker.banner_active(now) {
            self.banner_winner = None;
        }
    }

    pub fn handle_net_event(&mut self, event: NetToUi, now: Instant) {
        match event {
            NetToUi::AuthOk { user, cards } => {
                self.pending = None;
                self.notice = None;
                self.session = Some(user);
                // Serde enforces no grid dimensions; a card with mismatched
                // grids never reaches the renderer.
                self.cards = cards
                    .into_iter()
                    .filter(|card| {
                        let ok = card.is_well_formed();
                        if !ok {
                            tracing::warn!("dropping malformed card {}", card.id);
                        }
                        ok
                    })
                    .collect();
                self.set_view(View::Game);
            }
            NetToUi::AuthErr => {
                self.pending = None;
                self.notice = Some(match self.auth_mode {
                    AuthMode::Login => "Dados incorretos.".to_owned(),
                    AuthMode::Register => "Erro ao cadastrar. Tente outro CPF.".to_owned(),
                });
            }
            NetToUi::Snapshot {
                generation,
                snapshot,
            } => {
                if generation != self.sync_generation {
                    // In-flight result from a torn-down sync loop.
                    return;
                }
                for effect in self.tracker.observe(&snapshot, now) {
                    match effect {
                        SyncEffect::PlayNarration(url) => self.narration.play(url),
                        SyncEffect::ShowWinner { name, card_id } => {
                            self.banner_winner = Some((name, card_id));
                        }
                    }
                }
                self.snapshot = Some(snapshot);
            }
            NetToUi::CreditLink { url } => {
                self.open_url = Some(url);
            }
            NetToUi::WithdrawDone { status } => {
                self.pending = None;
                self.withdraw_form = WithdrawForm::default();
                self.notice = Some(format!("Status do Saque: {}", status));
                self.set_view(View::Game);
            }
            NetToUi::WithdrawErr => {
                // Form state stays put for resubmission.
                self.pending = None;
                self.notice = Some("Erro ao processar saque.".to_owned());
            }
            NetToUi::SupportDone { contact_url } => {
                self.pending = None;
                self.support_message.clear();
                self.open_url = contact_url;
                self.notice = Some("Pedido de ajuda enviado!".to_owned());
                self.set_view(View::Game);
            }
            NetToUi::SupportErr => {
                self.pending = None;
                self.notice = Some("Erro ao enviar mensagem.".to_owned());
            }
        }
    }

    /// Navigate between views, starting/stopping the sync loop so the
    /// timer only runs while the game view is active.
    pub fn set_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        let leaving_game = self.view == View::Game;
        self.view = view;
        if leaving_game {
            self.stop_sync();
        }
        if view == View::Game {
            self.start_sync();
        }
    }

    fn start_sync(&mut self) {
        let Some(user) = self.session.as_ref() else {
            return;
        };
        self.sync_generation += 1;
        let _ = self.tx.send(UiToNet::StartSync {
            user_id: user.id.clone(),
            generation: self.sync_generation,
        });
    }

    fn stop_sync(&mut self) {
        // Invalidate anything still in flight before the worker aborts.
        self.sync_generation += 1;
        let _ = self.tx.send(UiToNet::StopSync);
    }

    pub fn submit_auth(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = Some(PendingRequest::Auth);
        self.notice = None;
        let form = &self.auth_form;
        let cmd = match self.auth_mode {
            AuthMode::Login => UiToNet::Login(LoginRequest {
                cpf: form.document_id.clone(),
                whatsapp: form.contact.clone(),
                password: form.password.clone(),
            }),
            AuthMode::Register => UiToNet::Register(RegisterRequest {
                nome: form.name.clone(),
                cpf: form.document_id.clone(),
                whatsapp: form.contact.clone(),
                password: form.password.clone(),
            }),
        };
        let _ = self.tx.send(cmd);
    }

    pub fn submit_withdraw(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let Some(user) = self.session.as_ref() else {
            return;
        };
        let amount: f64 = match self.withdraw_form.amount.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.notice = Some("Valor inválido.".to_owned());
                return;
            }
        };
        self.pending = Some(PendingRequest::Withdraw);
        self.notice = None;
        let _ = self.tx.send(UiToNet::Withdraw(WithdrawRequest {
            nome: self.withdraw_form.payee_name.clone(),
            cpf: self.withdraw_form.document_id.clone(),
            whatsapp: self.withdraw_form.contact.clone(),
            password: self.withdraw_form.password.clone(),
            pix: self.withdraw_form.pix_key.clone(),
            amount,
            user_id: user.id.clone(),
        }));
    }

    pub fn submit_support(&mut self) {
        if self.pending.is_some() || !can_submit(&self.support_message) {
            return;
        }
        let Some(user) = self.session.as_ref() else {
            return;
        };
        self.pending = Some(PendingRequest::Support);
        self.notice = None;
        let _ = self.tx.send(UiToNet::Support {
            user_id: user.id.clone(),
            message: self.support_message.trim().to_owned(),
        });
    }

    pub fn request_credit(&mut self) {
        if let Some(user) = self.session.as_ref() {
            let _ = self.tx.send(UiToNet::RequestCredit {
                user_id: user.id.clone(),
            });
        }
    }

    pub fn support_words(&self) -> usize {
        word_count(&self.support_message)
    }

    pub fn support_over_limit(&self) -> bool {
        self.support_words() > SUPPORT_WORD_LIMIT
    }

    pub fn dismiss_banner(&mut self) {
        self.tracker.dismiss_banner();
        self.banner_winner = None;
    }

    pub fn banner(&self, now: Instant) -> Option<&(String, String)> {
        if self.tracker.banner_active(now) {
            self.banner_winner.as_ref()
        } else {
            None
        }
    }
}

impl eframe::App for BingoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drain_events(now);

        if let Some(url) = self.open_url.take() {
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }

        match self.view {
            View::Login => ui::login::show(self, ctx),
            _ => ui::shell::show(self, ctx, now),
        }

        // Keep repainting so snapshots and the banner deadline are picked
        // up without input events.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
