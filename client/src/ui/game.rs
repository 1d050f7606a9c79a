//! Game view: current ball, draw history, and the player's cards.

use eframe::egui;

use bingo_core::recent_history;
use bingo_core::types::{Approximation, BingoCard};

use crate::app::BingoApp;

const GOLD: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);
const ALERT: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

pub fn show(app: &mut BingoApp, ui: &mut egui::Ui) {
    let snapshot = app.snapshot.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        let ball = snapshot
            .as_ref()
            .and_then(|s| s.current_ball)
            .map(|b| b.to_string())
            .unwrap_or_else(|| "--".to_owned());
        ui.label(egui::RichText::new(ball).size(56.0).strong().color(GOLD));

        if let Some(snapshot) = snapshot.as_ref() {
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for ball in recent_history(&snapshot.history) {
                    ui.label(egui::RichText::new(ball.to_string()).weak().monospace());
                }
            });

            if let Some(ad) = snapshot.ad.as_ref() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&ad.content).small().weak());
            }
        }
    });

    ui.add_space(12.0);
    let approximation = snapshot.as_ref().and_then(|s| s.approximation.clone());
    let cards = app.cards.clone();
    for card in &cards {
        card_grid(ui, card, approximation.as_ref());
        ui.add_space(10.0);
    }
}

fn card_grid(ui: &mut egui::Ui, card: &BingoCard, approximation: Option<&Approximation>) {
    let approaching = approximation.filter(|a| a.card_id == card.id);

    ui.group(|ui| {
        ui.horizontal(|ui| {
            let short_id = card.id.split('-').next().unwrap_or(&card.id);
            ui.label(egui::RichText::new(format!("ID: {}", short_id)).small().weak());
            if let Some(hint) = approaching {
                ui.colored_label(
                    ALERT,
                    egui::RichText::new(format!(
                        "Rumo a {}! {} BOLA(S)",
                        hint.kind.label(),
                        hint.balls_missing
                    ))
                    .small()
                    .strong(),
                );
            }
        });

        egui::Grid::new(card.id.clone()).spacing([6.0, 4.0]).show(ui, |ui| {
            for letter in ["B", "I", "N", "G", "O"] {
                ui.label(egui::RichText::new(letter).small().weak());
            }
            ui.end_row();

            for (row_idx, row) in card.numbers.iter().enumerate() {
                for (col_idx, cell) in row.iter().enumerate() {
                    // Marking is defined entirely by the server grid.
                    let marked = card.cell_marked(row_idx, col_idx);
                    let text = match cell {
                        Some(n) => n.to_string(),
                        None => "★".to_owned(),
                    };
                    let rich = if marked {
                        egui::RichText::new(text).strong().color(GOLD)
                    } else {
                        egui::RichText::new(text).weak()
                    };
                    ui.label(rich);
                }
                ui.end_row();
            }
        });
    });
}
