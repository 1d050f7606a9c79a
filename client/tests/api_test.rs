//! Wire-shape tests for the service client against an in-process mock.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use bingo_client::api::{BingoApi, LoginRequest, RegisterRequest, WithdrawRequest};
use bingo_core::types::{ActivePrize, PrizeKind};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn auth_body() -> Value {
    json!({
        "user": {
            "id": "u1",
            "nome": "Ana Silva",
            "cpf": "11122233344",
            "whatsapp": "+5511999990000",
            "saldo": 42.5
        },
        "cards": [{
            "id": "card-1",
            "numbers": [
                [1, 16, 31, 46, 61],
                [2, 17, 32, 47, 62],
                [3, 18, null, 48, 63],
                [4, 19, 34, 49, 64],
                [5, 20, 35, 50, 65]
            ],
            "marked": [
                [false, false, false, false, false],
                [true, false, false, false, false],
                [false, false, false, false, false],
                [false, false, false, false, false],
                [false, false, false, false, true]
            ],
            "distanceToPrize": 3,
            "prizeType": "linha"
        }]
    })
}

#[tokio::test]
async fn login_parses_session_and_cards() {
    let router = Router::new().route(
        "/api/v1/auth/login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["cpf"], "11122233344");
            assert_eq!(body["password"], "secreta");
            Json(auth_body())
        }),
    );
    let api = BingoApi::new(serve(router).await);

    let auth = api
        .login(&LoginRequest {
            cpf: "11122233344".to_owned(),
            whatsapp: "+5511999990000".to_owned(),
            password: "secreta".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(auth.user.name, "Ana Silva");
    assert_eq!(auth.user.balance, 42.5);
    let card = &auth.cards[0];
    assert!(card.is_well_formed());
    assert_eq!(card.prize_type, Some(PrizeKind::Linha));
    assert!(card.cell_marked(2, 2)); // free slot
    assert!(card.cell_marked(1, 0));
    assert!(!card.cell_marked(0, 0));
}

#[tokio::test]
async fn register_sends_all_fields() {
    let router = Router::new().route(
        "/api/v1/auth/register",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["nome"], "Ana Silva");
            assert_eq!(body["whatsapp"], "+5511999990000");
            Json(auth_body())
        }),
    );
    let api = BingoApi::new(serve(router).await);

    let auth = api
        .register(&RegisterRequest {
            nome: "Ana Silva".to_owned(),
            cpf: "11122233344".to_owned(),
            whatsapp: "+5511999990000".to_owned(),
            password: "secreta".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(auth.user.id, "u1");
}

#[tokio::test]
async fn auth_failure_is_an_error() {
    let router = Router::new().route(
        "/api/v1/auth/login",
        post(|| async { StatusCode::UNAUTHORIZED }),
    );
    let api = BingoApi::new(serve(router).await);

    let err = api
        .login(&LoginRequest {
            cpf: "0".to_owned(),
            whatsapp: String::new(),
            password: "errada".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(err.contains("login"));
    assert!(err.contains("401"));
}

#[tokio::test]
async fn game_state_parses_full_snapshot() {
    let router = Router::new().route(
        "/api/v1/game/status",
        get(|| async {
            Json(json!({
                "currentBall": 42,
                "history": [3, 17, 42],
                "isWinner": false,
                "prizes": {
                    "quadra": 50.0,
                    "linha": 150.0,
                    "bingo": 1000.0,
                    "acumulado": 320.5,
                    "totalAcumulado": 5000.0,
                    "activePrize": "linha"
                },
                "narrationUrl": "https://cdn.example/42.mp3",
                "approximation": {
                    "cardId": "card-1",
                    "type": "bingo",
                    "ballsMissing": 2
                },
                "ad": {"content": "Jogue com moderação", "duration": 10}
            }))
        }),
    );
    let api = BingoApi::new(serve(router).await);

    let snapshot = api.game_state("u1").await.unwrap();
    assert_eq!(snapshot.current_ball, Some(42));
    assert_eq!(snapshot.prizes.active, ActivePrize::Linha);
    assert_eq!(
        snapshot.narration_url.as_deref(),
        Some("https://cdn.example/42.mp3")
    );
    assert_eq!(snapshot.approximation.unwrap().balls_missing, 2);
    assert_eq!(snapshot.ad.unwrap().content, "Jogue com moderação");
}

#[tokio::test]
async fn game_state_failure_is_an_error() {
    let router = Router::new().route(
        "/api/v1/game/status",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let api = BingoApi::new(serve(router).await);
    assert!(api.game_state("u1").await.is_err());
}

#[tokio::test]
async fn withdraw_returns_status_string() {
    let router = Router::new().route(
        "/api/v1/finance/withdraw",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["pix"], "ana@banco.br");
            assert_eq!(body["amount"], 50.0);
            assert_eq!(body["userId"], "u1");
            Json(json!({"status": "Em análise"}))
        }),
    );
    let api = BingoApi::new(serve(router).await);

    let resp = api
        .request_withdraw(&WithdrawRequest {
            nome: "Ana Silva".to_owned(),
            cpf: "11122233344".to_owned(),
            whatsapp: "+5511999990000".to_owned(),
            password: "secreta".to_owned(),
            pix: "ana@banco.br".to_owned(),
            amount: 50.0,
            user_id: "u1".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(resp.status, "Em análise");
}

#[tokio::test]
async fn support_returns_optional_contact_link() {
    let router = Router::new().route(
        "/api/v1/support/send",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["userId"], "u1");
            assert_eq!(body["message"], "preciso de ajuda");
            Json(json!({"success": true, "whatsappUrl": "https://wa.me/5511999"}))
        }),
    );
    let api = BingoApi::new(serve(router).await);

    let resp = api.send_support("u1", "preciso de ajuda").await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.whatsapp_url.as_deref(), Some("https://wa.me/5511999"));
}

#[tokio::test]
async fn credit_returns_redirect_link() {
    let router = Router::new().route(
        "/api/v1/finance/deposit",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["userId"], "u1");
            Json(json!({"url": "https://pay.example/u1"}))
        }),
    );
    let api = BingoApi::new(serve(router).await);

    let resp = api.request_credit("u1").await.unwrap();
    assert_eq!(resp.url, "https://pay.example/u1");
}
