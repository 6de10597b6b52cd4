//! Serializable placement history and replay.
//!
//! A board is fully described by its starter card and the ordered list of
//! placements made on it. `BoardRecord` is that description, and
//! `PlayerBoard` keeps one in sync with a live `Board` while also tracking the
//! points earned from placements.

use crate::board::{Board, BoardError};
use crate::catalog::{self, CardId, CardKind, CardSide, CatalogError};
use crate::face::CardFace;
use crate::slot::BoardSlot;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from building or replaying a record
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RecordError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Card {0} is not a starter card")]
    NotStarter(CardId),

    #[error("Starter card {0} cannot be placed on the grid")]
    NotPlayable(CardId),

    #[error("Placement #{index} rejected: {source}")]
    Rejected { index: usize, source: BoardError },
}

/// A card id plus the side facing up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub id: CardId,
    pub side: CardSide,
}

impl CardRef {
    pub const fn new(id: CardId, side: CardSide) -> Self {
        Self { id, side }
    }

    pub const fn front(id: CardId) -> Self {
        Self::new(id, CardSide::Front)
    }

    pub const fn back(id: CardId) -> Self {
        Self::new(id, CardSide::Back)
    }

    /// Resolve against the catalog
    pub fn face(&self) -> Result<CardFace, CatalogError> {
        catalog::face(self.id, self.side)
    }
}

/// One placement in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub slot: BoardSlot,
    pub card: CardRef,
}

/// Starter plus ordered placements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub starter: CardRef,
    pub placements: Vec<PlacementRecord>,
}

impl BoardRecord {
    /// A record with no placements yet
    pub fn new(starter: CardRef) -> Self {
        Self {
            starter,
            placements: Vec::new(),
        }
    }

    /// Append a placement without checking it
    pub fn push(&mut self, slot: BoardSlot, card: CardRef) {
        self.placements.push(PlacementRecord { slot, card });
    }

    /// Rebuild the board by replaying every placement in order
    pub fn replay(&self) -> Result<PlayerBoard, RecordError> {
        let mut player = PlayerBoard::new(self.starter)?;
        for (index, placement) in self.placements.iter().enumerate() {
            player
                .place(placement.slot, placement.card)
                .map_err(|e| match e {
                    RecordError::Board(source) => RecordError::Rejected { index, source },
                    other => other,
                })?;
        }
        debug!(
            placements = self.placements.len(),
            score = player.score(),
            "Record replayed"
        );
        Ok(player)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A live board together with its record and placement score
#[derive(Debug, Clone)]
pub struct PlayerBoard {
    board: Board,
    record: BoardRecord,
    score: u32,
}

impl PlayerBoard {
    /// Start a board from a starter card
    pub fn new(starter: CardRef) -> Result<Self, RecordError> {
        let card = catalog::card(starter.id)?;
        if card.kind != CardKind::Starter {
            return Err(RecordError::NotStarter(starter.id));
        }
        Ok(Self {
            board: Board::new(*card.face(starter.side)),
            record: BoardRecord::new(starter),
            score: 0,
        })
    }

    /// Place a catalog card and add its points to the running score.
    ///
    /// The record only grows when the board accepts the placement.
    pub fn place(&mut self, slot: BoardSlot, card: CardRef) -> Result<u32, RecordError> {
        let resolved = catalog::card(card.id)?;
        if resolved.kind == CardKind::Starter {
            return Err(RecordError::NotPlayable(card.id));
        }
        let points = self.board.place_card(slot, *resolved.face(card.side))?;
        self.record.push(slot, card);
        self.score += points;
        Ok(points)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn record(&self) -> &BoardRecord {
        &self.record
    }

    /// Points earned from placements so far
    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardView, PlacementViolation};

    fn sample_record() -> BoardRecord {
        let mut record = BoardRecord::new(CardRef::front(85));
        record.push(BoardSlot::new(1, 1), CardRef::front(0));
        record.push(BoardSlot::new(2, 2), CardRef::front(1));
        record.push(BoardSlot::new(-1, 1), CardRef::back(25));
        record
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let json = record.to_json().unwrap();
        assert_eq!(BoardRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn test_replay_matches_live_board() {
        let record = sample_record();
        let replayed = record.replay().unwrap();
        assert_eq!(replayed.record(), &record);

        let mut live = Board::new(catalog::face(85, CardSide::Front).unwrap());
        for p in &record.placements {
            live.place_card(p.slot, p.card.face().unwrap()).unwrap();
        }
        assert_eq!(replayed.board().get_info(), live.get_info());
        assert_eq!(replayed.board().len(), 3);
    }

    #[test]
    fn test_rejected_placement_is_not_recorded() {
        let mut player = PlayerBoard::new(CardRef::front(85)).unwrap();
        let err = player
            .place(BoardSlot::new(5, 5), CardRef::front(0))
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::Board(BoardError::IllegalPlacement(
                PlacementViolation::SlotUnavailable(BoardSlot::new(5, 5))
            ))
        );
        assert!(player.record().placements.is_empty());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_replay_reports_failing_index() {
        let mut record = sample_record();
        record.push(BoardSlot::new(9, 9), CardRef::front(2));
        let err = record.replay().unwrap_err();
        assert!(matches!(err, RecordError::Rejected { index: 3, .. }));
    }

    #[test]
    fn test_error_serializes() {
        let mut record = sample_record();
        record.push(BoardSlot::new(9, 9), CardRef::front(2));
        let err = record.replay().unwrap_err();

        let json = serde_json::to_string(&err).unwrap();
        let parsed: RecordError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
        assert_eq!(
            parsed,
            RecordError::Rejected {
                index: 3,
                source: BoardError::IllegalPlacement(PlacementViolation::SlotUnavailable(
                    BoardSlot::new(9, 9)
                )),
            }
        );
    }

    #[test]
    fn test_kind_checks() {
        assert_eq!(
            PlayerBoard::new(CardRef::front(3)).unwrap_err(),
            RecordError::NotStarter(3)
        );
        let mut player = PlayerBoard::new(CardRef::back(80)).unwrap();
        assert_eq!(
            player
                .place(BoardSlot::new(1, 1), CardRef::front(81))
                .unwrap_err(),
            RecordError::NotPlayable(81)
        );
        assert_eq!(
            player
                .place(BoardSlot::new(1, 1), CardRef::front(120))
                .unwrap_err(),
            RecordError::Catalog(CatalogError::UnknownCard(120))
        );
    }

    #[test]
    fn test_score_accumulates() {
        let mut player = PlayerBoard::new(CardRef::back(80)).unwrap();
        // Resource card 7 is worth one point
        assert_eq!(player.place(BoardSlot::new(1, 1), CardRef::front(7)), Ok(1));
        assert_eq!(player.place(BoardSlot::new(-1, 1), CardRef::front(8)), Ok(1));
        assert_eq!(player.score(), 2);
        assert_eq!(player.board().covered_slots().len(), 2);
    }
}
