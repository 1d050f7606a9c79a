use crossbeam_channel::unbounded;
use eframe::egui;

use bingo_client::app::BingoApp;
use bingo_client::audio::NarrationPlayer;
use bingo_client::config::ClientConfig;
use bingo_client::worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env();
    tracing::info!("Bingo client starting against {}", config.server_url);

    let (ui_tx, ui_rx) = unbounded();
    let (net_tx, net_rx) = unbounded();
    worker::spawn(config, ui_rx, net_tx);
    let narration = NarrationPlayer::spawn();

    let app = BingoApp::new(ui_tx, net_rx, narration);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native("Bingo Master", options, Box::new(|_cc| Box::new(app)))
}
