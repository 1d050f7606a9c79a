//! Wire types of the remote bingo service.
//!
//! Serde renames track the service JSON exactly (Portuguese field names on
//! the session, camelCase elsewhere). Every field here is server-computed;
//! the client renders them verbatim.

use serde::{Deserialize, Serialize};

/// Cards are always 5x5.
pub const GRID_SIZE: usize = 5;

/// Authenticated session as returned by login/registration.
///
/// Held in memory only; a reload starts over at the login view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf")]
    pub document_id: String,
    #[serde(rename = "whatsapp")]
    pub contact: String,
    #[serde(rename = "saldo")]
    pub balance: f64,
}

/// One bingo card owned by the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoCard {
    pub id: String,
    /// 5x5 grid; `None` is the free slot.
    pub numbers: Vec<Vec<Option<u8>>>,
    /// Parallel 5x5 grid of marks, overwritten wholesale on every sync.
    pub marked: Vec<Vec<bool>>,
    /// Server-computed distance to the nearest prize.
    pub distance_to_prize: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_type: Option<PrizeKind>,
}

impl BingoCard {
    /// Both grids present with 5x5 dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.numbers.len() == GRID_SIZE
            && self.marked.len() == GRID_SIZE
            && self.numbers.iter().all(|row| row.len() == GRID_SIZE)
            && self.marked.iter().all(|row| row.len() == GRID_SIZE)
    }

    /// Free slots render as marked regardless of the server flag.
    ///
    /// Out-of-range cells read as unmarked; the grids come off the wire
    /// unvalidated, so indexing must not assume 5x5.
    pub fn cell_marked(&self, row: usize, col: usize) -> bool {
        let free = self
            .numbers
            .get(row)
            .and_then(|r| r.get(col))
            .map(Option::is_none)
            .unwrap_or(false);
        let marked = self
            .marked
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false);
        free || marked
    }
}

/// Prize categories the service pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrizeKind {
    Quadra,
    Linha,
    Bingo,
}

impl PrizeKind {
    pub fn label(&self) -> &'static str {
        match self {
            PrizeKind::Quadra => "QUADRA",
            PrizeKind::Linha => "LINHA",
            PrizeKind::Bingo => "BINGO",
        }
    }
}

/// Which category the current round is playing for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivePrize {
    Quadra,
    Linha,
    Bingo,
    #[default]
    None,
}

impl ActivePrize {
    pub fn matches(&self, kind: PrizeKind) -> bool {
        matches!(
            (self, kind),
            (ActivePrize::Quadra, PrizeKind::Quadra)
                | (ActivePrize::Linha, PrizeKind::Linha)
                | (ActivePrize::Bingo, PrizeKind::Bingo)
        )
    }
}

/// Prize amounts per category plus the active one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeBoard {
    pub quadra: f64,
    pub linha: f64,
    pub bingo: f64,
    pub acumulado: f64,
    pub total_acumulado: f64,
    #[serde(rename = "activePrize")]
    pub active: ActivePrize,
}

/// Server-computed hint that one card is close to one prize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approximation {
    pub card_id: String,
    #[serde(rename = "type")]
    pub kind: PrizeKind,
    pub balls_missing: u8,
}

/// Ad payload occasionally attached to a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdSpot {
    pub content: String,
    pub duration: u32,
}

/// Full game state as fetched on every sync tick.
///
/// Replaced wholesale on success; a failed fetch keeps the previous
/// snapshot untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(default)]
    pub current_ball: Option<u8>,
    /// Ordered draw history, append-only upstream.
    #[serde(default)]
    pub history: Vec<u8>,
    pub is_winner: bool,
    #[serde(default)]
    pub winner_name: Option<String>,
    #[serde(default)]
    pub winner_card_id: Option<String>,
    pub prizes: PrizeBoard,
    #[serde(default)]
    pub narration_url: Option<String>,
    #[serde(default)]
    pub approximation: Option<Approximation>,
    #[serde(default)]
    pub ad: Option<AdSpot>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn card(free_center: bool) -> BingoCard {
        let numbers: Vec<Vec<Option<u8>>> = (0..5)
            .map(|r| {
                (0..5)
                    .map(|c| {
                        if free_center && r == 2 && c == 2 {
                            None
                        } else {
                            Some((r * 5 + c + 1) as u8)
                        }
                    })
                    .collect()
            })
            .collect();
        BingoCard {
            id: "card-1".to_string(),
            numbers,
            marked: vec![vec![false; 5]; 5],
            distance_to_prize: 4,
            prize_type: None,
        }
    }

    #[test]
    fn test_well_formed_grid() {
        assert!(card(true).is_well_formed());

        let mut bad = card(true);
        bad.marked.pop();
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_free_slot_always_marked() {
        let card = card(true);
        assert!(card.cell_marked(2, 2));
        assert!(!card.cell_marked(0, 0));
    }

    #[test]
    fn test_marks_come_from_server_grid() {
        let mut card = card(false);
        card.marked[1][3] = true;
        assert!(card.cell_marked(1, 3));
        assert!(!card.cell_marked(1, 2));
    }

    #[test]
    fn test_truncated_marked_grid_reads_unmarked() {
        let mut card = card(true);
        card.marked.truncate(1);
        assert!(!card.is_well_formed());

        // Rows past the surviving marked row must not panic.
        assert!(!card.cell_marked(1, 0));
        assert!(!card.cell_marked(4, 4));
        // The free slot stays marked even without a marks row.
        assert!(card.cell_marked(2, 2));
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let json = r#"{
            "currentBall": 42,
            "history": [3, 17, 42],
            "isWinner": true,
            "winnerName": "Maria",
            "winnerCardId": "card-9",
            "prizes": {
                "quadra": 50.0,
                "linha": 150.0,
                "bingo": 1000.0,
                "acumulado": 320.5,
                "totalAcumulado": 5000.0,
                "activePrize": "linha"
            },
            "narrationUrl": "https://cdn.example/42.mp3",
            "approximation": {"cardId": "card-1", "type": "bingo", "ballsMissing": 2}
        }"#;
        let snapshot: GameSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.current_ball, Some(42));
        assert_eq!(snapshot.history, vec![3, 17, 42]);
        assert!(snapshot.is_winner);
        assert_eq!(snapshot.prizes.active, ActivePrize::Linha);
        assert_eq!(snapshot.prizes.total_acumulado, 5000.0);
        let approx = snapshot.approximation.unwrap();
        assert_eq!(approx.kind, PrizeKind::Bingo);
        assert_eq!(approx.balls_missing, 2);
        assert!(snapshot.ad.is_none());
    }

    #[test]
    fn test_player_wire_shape() {
        let json = r#"{"id":"u1","nome":"Ana","cpf":"11122233344","whatsapp":"+5511999","saldo":42.5}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.name, "Ana");
        assert_eq!(player.document_id, "11122233344");
        assert_eq!(player.balance, 42.5);
    }
}
