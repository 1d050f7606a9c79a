//! HTTP client for the remote bingo service.
//!
//! The service owns all game logic; this module only forwards input and
//! fetches state. Request field names follow the service JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use bingo_core::types::{BingoCard, GameSnapshot, Player};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub cpf: String,
    pub whatsapp: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub cpf: String,
    pub whatsapp: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: Player,
    pub cards: Vec<BingoCard>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub nome: String,
    pub cpf: String,
    pub whatsapp: String,
    pub password: String,
    pub pix: String,
    pub amount: f64,
    pub user_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WithdrawResponse {
    pub status: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreditResponse {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResponse {
    pub success: bool,
    #[serde(default)]
    pub whatsapp_url: Option<String>,
}

#[derive(Clone)]
pub struct BingoApi {
    base_url: String,
    client: reqwest::Client,
}

impl BingoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, String> {
        self.post_json("/api/v1/auth/login", req, "login").await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, String> {
        self.post_json("/api/v1/auth/register", req, "register").await
    }

    /// One full game-state fetch for the given session.
    pub async fn game_state(&self, user_id: &str) -> Result<GameSnapshot, String> {
        let url = format!("{}/api/v1/game/status?userId={}", self.base_url, user_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("failed to call game status: {}", e))?;
        Self::parse(resp, "game status").await
    }

    pub async fn request_credit(&self, user_id: &str) -> Result<CreditResponse, String> {
        self.post_json(
            "/api/v1/finance/deposit",
            &serde_json::json!({ "userId": user_id }),
            "deposit",
        )
        .await
    }

    pub async fn request_withdraw(&self, req: &WithdrawRequest) -> Result<WithdrawResponse, String> {
        self.post_json("/api/v1/finance/withdraw", req, "withdraw").await
    }

    pub async fn send_support(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<SupportResponse, String> {
        self.post_json(
            "/api/v1/support/send",
            &serde_json::json!({ "userId": user_id, "message": message }),
            "support",
        )
        .await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, what: &str) -> Result<T, String>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("failed to call {}: {}", what, e))?;
        Self::parse(resp, what).await
    }

    async fn parse<T: DeserializeOwned>(resp: reqwest::Response, what: &str) -> Result<T, String> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(format!("{} rejected request: HTTP {}: {}", what, status, body));
        }

        resp.json()
            .await
            .map_err(|e| format!("failed to parse {} response: {}", what, e))
    }
}
