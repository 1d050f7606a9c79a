//! Network worker: owns the tokio runtime and every remote-service call.
//!
//! The egui thread sends commands over a crossbeam channel; results come
//! back as `NetToUi` events drained once per frame. The polling task is
//! aborted on teardown, and each snapshot it emits is stamped with the
//! sync generation so the UI can discard a response that raced past a
//! teardown.

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::api::BingoApi;
use crate::config::ClientConfig;
use crate::msg::{NetToUi, UiToNet};

pub fn spawn(
    config: ClientConfig,
    rx: Receiver<UiToNet>,
    tx: Sender<NetToUi>,
) -> std::thread::JoinHandle<()> {
    std::thread::Builder::new()
        .name("bingo-net".to_owned())
        .spawn(move || run(config, rx, tx))
        .expect("failed to spawn network worker")
}

fn run(config: ClientConfig, rx: Receiver<UiToNet>, tx: Sender<NetToUi>) {
    let rt = Runtime::new().expect("failed to start tokio runtime");
    let api = BingoApi::new(config.server_url.clone());
    let mut sync_task: Option<JoinHandle<()>> = None;

    while let Ok(cmd) = rx.recv() {
        match cmd {
            UiToNet::Login(req) => {
                let api = api.clone();
                let tx = tx.clone();
                rt.spawn(async move {
                    match api.login(&req).await {
                        Ok(auth) => {
                            let _ = tx.send(NetToUi::AuthOk {
                                user: auth.user,
                                cards: auth.cards,
                            });
                        }
                        Err(e) => {
                            tracing::warn!("login failed: {}", e);
                            let _ = tx.send(NetToUi::AuthErr);
                        }
                    }
                });
            }
            UiToNet::Register(req) => {
                let api = api.clone();
                let tx = tx.clone();
                rt.spawn(async move {
                    match api.register(&req).await {
                        Ok(auth) => {
                            let _ = tx.send(NetToUi::AuthOk {
                                user: auth.user,
                                cards: auth.cards,
                            });
                        }
                        Err(e) => {
                            tracing::warn!("registration failed: {}", e);
                            let _ = tx.send(NetToUi::AuthErr);
                        }
                    }
                });
            }
            UiToNet::StartSync {
                user_id,
                generation,
            } => {
                if let Some(task) = sync_task.take() {
                    task.abort();
                }
                let api = api.clone();
                let tx = tx.clone();
                let period = config.poll_interval;
                sync_task = Some(rt.spawn(async move {
                    let mut ticker = tokio::time::interval(period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                    loop {
                        ticker.tick().await;
                        // A failed tick keeps the previous snapshot: log and
                        // wait for the next period, no backoff.
                        match api.game_state(&user_id).await {
                            Ok(snapshot) => {
                                if tx
                                    .send(NetToUi::Snapshot {
                                        generation,
                                        snapshot,
                                    })
                                    .is_err()
                                {
                                    break;
                                }
                            }
                            Err(e) => tracing::warn!("game state sync failed: {}", e),
                        }
                    }
                }));
            }
            UiToNet::StopSync => {
                if let Some(task) = sync_task.take() {
                    task.abort();
                }
            }
            UiToNet::RequestCredit { user_id } => {
                let api = api.clone();
                let tx = tx.clone();
                rt.spawn(async move {
                    match api.request_credit(&user_id).await {
                        Ok(credit) => {
                            let _ = tx.send(NetToUi::CreditLink { url: credit.url });
                        }
                        Err(e) => tracing::warn!("credit request failed: {}", e),
                    }
                });
            }
            UiToNet::Withdraw(req) => {
                let api = api.clone();
                let tx = tx.clone();
                rt.spawn(async move {
                    match api.request_withdraw(&req).await {
                        Ok(resp) => {
                            let _ = tx.send(NetToUi::WithdrawDone {
                                status: resp.status,
                            });
                        }
                        Err(e) => {
                            tracing::warn!("withdrawal failed: {}", e);
                            let _ = tx.send(NetToUi::WithdrawErr);
                        }
                    }
                });
            }
            UiToNet::Support { user_id, message } => {
                let api = api.clone();
                let tx = tx.clone();
                rt.spawn(async move {
                    match api.send_support(&user_id, &message).await {
                        Ok(resp) => {
                            let _ = tx.send(NetToUi::SupportDone {
                                contact_url: resp.whatsapp_url,
                            });
                        }
                        Err(e) => {
                            tracing::warn!("support message failed: {}", e);
                            let _ = tx.send(NetToUi::SupportErr);
                        }
                    }
                });
            }
        }
    }

    // UI side is gone; stop polling and let in-flight tasks finish detached.
    if let Some(task) = sync_task.take() {
        task.abort();
    }
    rt.shutdown_background();
}
