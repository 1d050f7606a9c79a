//! Narration playback.
//!
//! Runs on its own thread: the UI pushes narration URLs, the thread fetches
//! the audio bytes and plays them. Every failure is swallowed — blocked or
//! missing audio must never disturb the game view.

use std::io::Cursor;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use rodio::{Decoder, OutputStream, Sink};

pub struct NarrationPlayer {
    tx: Sender<String>,
}

impl NarrationPlayer {
    pub fn spawn() -> Self {
        let (tx, rx) = unbounded::<String>();
        thread::Builder::new()
            .name("bingo-narration".to_owned())
            .spawn(move || playback_loop(rx))
            .expect("failed to spawn narration thread");
        Self { tx }
    }

    /// A player whose requests go nowhere. Used by tests and by hosts
    /// without audio output.
    pub fn detached() -> Self {
        let (tx, rx) = unbounded();
        drop(rx);
        Self { tx }
    }

    /// Queue a narration URL; anything currently playing is replaced.
    pub fn play(&self, url: String) {
        let _ = self.tx.send(url);
    }
}

fn playback_loop(rx: Receiver<String>) {
    let Ok((_stream, handle)) = OutputStream::try_default() else {
        // No audio device: keep draining so senders never block.
        for _ in rx {}
        return;
    };

    let mut current: Option<Sink> = None;
    for url in rx {
        // Dropping the previous sink stops its playback.
        drop(current.take());

        let Ok(resp) = reqwest::blocking::get(&url) else {
            continue;
        };
        let Ok(bytes) = resp.bytes() else {
            continue;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes.to_vec())) else {
            continue;
        };
        let Ok(sink) = Sink::try_new(&handle) else {
            continue;
        };
        sink.append(source);
        current = Some(sink);
    }
}
