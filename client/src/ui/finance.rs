//! Withdrawal request form.

use eframe::egui;

use crate::app::{BingoApp, PendingRequest};

pub fn show(app: &mut BingoApp, ui: &mut egui::Ui) {
    ui.heading("Solicitar Saque");
    ui.add_space(8.0);

    ui.add(
        egui::TextEdit::singleline(&mut app.withdraw_form.payee_name).hint_text("Nome Titular"),
    );
    ui.add(egui::TextEdit::singleline(&mut app.withdraw_form.document_id).hint_text("CPF"));
    ui.add(egui::TextEdit::singleline(&mut app.withdraw_form.contact).hint_text("WhatsApp"));
    ui.add(
        egui::TextEdit::singleline(&mut app.withdraw_form.password)
            .password(true)
            .hint_text("Sua Senha"),
    );
    ui.add(egui::TextEdit::singleline(&mut app.withdraw_form.pix_key).hint_text("Chave PIX"));
    ui.add(egui::TextEdit::singleline(&mut app.withdraw_form.amount).hint_text("Valor R$"));
    ui.add_space(12.0);

    let busy = app.pending == Some(PendingRequest::Withdraw);
    let label = if busy { "Enviando..." } else { "Confirmar Saque" };
    if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
        app.submit_withdraw();
    }
}
