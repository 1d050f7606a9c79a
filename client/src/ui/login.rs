//! Login / registration view.

use eframe::egui;

use crate::app::{AuthMode, BingoApp, PendingRequest};

pub fn show(app: &mut BingoApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.heading(egui::RichText::new("BINGO MASTER").strong().italics());
            ui.label(egui::RichText::new("MOBILE CLIENT V1.2").small().weak());
            ui.add_space(24.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.auth_mode, AuthMode::Login, "Login");
                ui.selectable_value(&mut app.auth_mode, AuthMode::Register, "Cadastro");
            });
            ui.add_space(12.0);

            if app.auth_mode == AuthMode::Register {
                ui.add(
                    egui::TextEdit::singleline(&mut app.auth_form.name)
                        .hint_text("Nome Completo"),
                );
            }
            ui.add(egui::TextEdit::singleline(&mut app.auth_form.document_id).hint_text("CPF"));
            ui.add(egui::TextEdit::singleline(&mut app.auth_form.contact).hint_text("WhatsApp"));
            ui.add(
                egui::TextEdit::singleline(&mut app.auth_form.password)
                    .password(true)
                    .hint_text("Senha"),
            );
            ui.add_space(16.0);

            let busy = app.pending == Some(PendingRequest::Auth);
            let label = if busy {
                "Processando..."
            } else if app.auth_mode == AuthMode::Login {
                "Entrar"
            } else {
                "Criar Conta"
            };
            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                app.submit_auth();
            }

            if let Some(notice) = app.notice.clone() {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::LIGHT_RED, notice);
            }
        });
    });
}
