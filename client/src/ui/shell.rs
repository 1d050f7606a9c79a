//! Chrome around the logged-in views: prize panel, balance header,
//! bottom navigation, and the winner banner overlay.

use std::time::Instant;

use eframe::egui;

use bingo_core::format_brl;
use bingo_core::types::ActivePrize;

use crate::app::{BingoApp, View};
use crate::ui::{finance, game, support};

const GOLD: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);

pub fn show(app: &mut BingoApp, ctx: &egui::Context, now: Instant) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        prize_row(app, ui);
        ui.separator();
        balance_row(app, ui);
    });

    egui::TopBottomPanel::bottom("nav").show(ctx, |ui| {
        nav_row(app, ui);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(notice) = app.notice.clone() {
            ui.horizontal(|ui| {
                ui.label(&notice);
                if ui.small_button("x").clicked() {
                    app.notice = None;
                }
            });
            ui.separator();
        }
        egui::ScrollArea::vertical().show(ui, |ui| match app.view {
            View::Game => game::show(app, ui),
            View::Finance => finance::show(app, ui),
            View::Support => support::show(app, ui),
            View::Login => {}
        });
    });

    winner_banner(app, ctx, now);
}

fn prize_row(app: &BingoApp, ui: &mut egui::Ui) {
    let prizes = app.snapshot.as_ref().map(|s| s.prizes.clone()).unwrap_or_default();
    let chips = [
        ("QUADRA", prizes.quadra, ActivePrize::Quadra),
        ("LINHA", prizes.linha, ActivePrize::Linha),
        ("BINGO", prizes.bingo, ActivePrize::Bingo),
        ("ACUMULADO", prizes.acumulado, ActivePrize::None),
    ];
    ui.horizontal(|ui| {
        for (label, value, active_when) in chips {
            let is_active = prizes.active != ActivePrize::None && prizes.active == active_when;
            let color = if is_active {
                GOLD
            } else {
                egui::Color32::GRAY
            };
            ui.vertical(|ui| {
                ui.colored_label(color, egui::RichText::new(label).small().strong());
                ui.label(egui::RichText::new(format!("$ {:.2}", value)).strong());
            });
            ui.add_space(6.0);
        }
    });
}

fn balance_row(app: &mut BingoApp, ui: &mut egui::Ui) {
    let Some(user) = app.session.clone() else {
        return;
    };
    ui.horizontal(|ui| {
        let initial = user.name.chars().next().unwrap_or('?');
        ui.label(egui::RichText::new(initial.to_string()).strong().size(20.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("SALDO").small().weak());
            ui.label(egui::RichText::new(format_brl(user.balance)).strong());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Crédito+").clicked() {
                app.request_credit();
            }
        });
    });
}

fn nav_row(app: &mut BingoApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for (view, label) in [
            (View::Game, "Jogo"),
            (View::Finance, "Saque"),
            (View::Support, "Ajuda"),
        ] {
            let selected = app.view == view;
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.set_view(view);
            }
        }
    });
}

fn winner_banner(app: &mut BingoApp, ctx: &egui::Context, now: Instant) {
    let Some((name, card_id)) = app.banner(now).cloned() else {
        return;
    };
    egui::Window::new("winner_banner")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("BINGO!!").color(GOLD).strong());
                ui.label("Temos um ganhador(a)!");
                ui.add_space(8.0);
                ui.label(egui::RichText::new(name).strong());
                ui.label(format!("Cartela: {}", card_id));
                ui.add_space(8.0);
                if ui.button("Continuar").clicked() {
                    app.dismiss_banner();
                }
            });
        });
}
