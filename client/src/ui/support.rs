//! Support view: free-text message capped at 30 words.

use eframe::egui;

use bingo_core::{can_submit, SUPPORT_WORD_LIMIT};

use crate::app::{BingoApp, PendingRequest};

pub fn show(app: &mut BingoApp, ui: &mut egui::Ui) {
    ui.heading("Ajuda");
    ui.label(
        egui::RichText::new(format!("Máximo de {} palavras.", SUPPORT_WORD_LIMIT))
            .small()
            .weak(),
    );
    ui.add_space(8.0);

    ui.add(
        egui::TextEdit::multiline(&mut app.support_message)
            .hint_text("Descreva seu problema...")
            .desired_rows(6),
    );

    let words = app.support_words();
    let over = app.support_over_limit();
    ui.horizontal(|ui| {
        let color = if over {
            egui::Color32::LIGHT_RED
        } else {
            egui::Color32::GRAY
        };
        ui.colored_label(color, format!("{} / {} palavras", words, SUPPORT_WORD_LIMIT));
        if over {
            ui.colored_label(egui::Color32::LIGHT_RED, "LIMITE EXCEDIDO");
        }
    });
    ui.add_space(8.0);

    let busy = app.pending == Some(PendingRequest::Support);
    let enabled = !busy && can_submit(&app.support_message);
    if ui
        .add_enabled(enabled, egui::Button::new("Enviar ao Suporte"))
        .clicked()
    {
        app.submit_support();
    }
}
