//! A player's grid of placed cards.
//!
//! This module contains:
//! - `BoardView`: read-only access shared by live boards and snapshots
//! - `Board`: the placement engine (frontier, counters, scoring)
//! - `BoardInfo`: a detached snapshot of a board
//! - `BoardError`: why a placement or lookup failed
//!
//! The starter card sits at the root slot `(0, 0)`. Every other card is
//! plugged onto one or more visible corners of cards already on the grid and
//! covers those corners for the rest of the game.

use crate::corner::CardCorner;
use crate::counter::{ItemsCounter, ResourcesCounter};
use crate::face::CardFace;
use crate::slot::{BoardSlot, CornerDirection, SlotOffset};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, trace};

/// Why a placement was refused
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementViolation {
    #[error("slot {0} is not available")]
    SlotUnavailable(BoardSlot),

    #[error("requires {required}, only {available} visible")]
    RequirementNotMet {
        required: ResourcesCounter,
        available: ResourcesCounter,
    },
}

/// Errors returned by board operations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Illegal placement: {0}")]
    IllegalPlacement(#[from] PlacementViolation),

    #[error("No card at {0}")]
    NotFound(BoardSlot),
}

/// Read-only access to a grid of cards.
///
/// Implemented by the live `Board` and by `BoardInfo` snapshots, so scoring
/// rules and objectives work against either.
pub trait BoardView {
    /// Slots holding a placed card, root excluded
    fn covered_slots(&self) -> Vec<BoardSlot>;

    /// The face at a slot, including the starter at the root
    fn face_at(&self, slot: &BoardSlot) -> Option<&CardFace>;

    /// Currently visible resources
    fn resources(&self) -> ResourcesCounter;

    /// Currently visible items
    fn items(&self) -> ItemsCounter;

    /// The face one move away from `slot`, if any
    fn neighbor<D: SlotOffset>(&self, slot: &BoardSlot, direction: D) -> Option<&CardFace>
    where
        Self: Sized,
    {
        self.face_at(&slot.slot_at(direction))
    }
}

/// A player's live grid
#[derive(Debug, Clone)]
pub struct Board {
    /// Starter face at the root slot
    root: CardFace,
    /// Every other placed face
    placed: HashMap<BoardSlot, CardFace>,
    /// Slots a new card may be placed on
    available: HashSet<BoardSlot>,
    /// Visible resources over root and placed cards
    resources: ResourcesCounter,
    /// Visible items over root and placed cards
    items: ItemsCounter,
}

impl Board {
    /// Create a board holding only the starter face
    pub fn new(starter: CardFace) -> Self {
        let mut board = Self {
            root: starter,
            placed: HashMap::new(),
            available: HashSet::new(),
            resources: starter.visible_resources(),
            items: starter.visible_items(),
        };
        board.refresh_frontier_around(BoardSlot::ROOT);
        debug!(
            resources = %board.resources,
            items = %board.items,
            available = board.available.len(),
            "Board created"
        );
        board
    }

    // ==================== Query Methods ====================

    /// The starter face
    pub fn root_face(&self) -> &CardFace {
        &self.root
    }

    /// Number of placed cards, root excluded
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether only the starter is on the board
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Slots a new card may currently be placed on
    pub fn available_slots(&self) -> &HashSet<BoardSlot> {
        &self.available
    }

    /// Whether `slot` is currently on the frontier
    pub fn is_available(&self, slot: &BoardSlot) -> bool {
        self.available.contains(slot)
    }

    /// Placed cards with their slots, root excluded
    pub fn placed_cards(&self) -> impl Iterator<Item = (&BoardSlot, &CardFace)> {
        self.placed.iter()
    }

    /// The face at a slot
    pub fn card_at(&self, slot: &BoardSlot) -> Result<&CardFace, BoardError> {
        self.face_at(slot).ok_or(BoardError::NotFound(*slot))
    }

    /// Take a snapshot that later placements will not affect
    pub fn get_info(&self) -> BoardInfo {
        BoardInfo {
            root: self.root,
            placed: self.placed.clone(),
            available: self.available.clone(),
            resources: self.resources,
            items: self.items,
        }
    }

    // ==================== Validation Methods ====================

    /// Check that `face` may be placed at `slot` without touching the board
    pub fn check_placement(&self, slot: &BoardSlot, face: &CardFace) -> Result<(), BoardError> {
        if !self.available.contains(slot) {
            return Err(PlacementViolation::SlotUnavailable(*slot).into());
        }
        if let Some(required) = face.requirement() {
            if !self.resources.covers(&required) {
                return Err(PlacementViolation::RequirementNotMet {
                    required,
                    available: self.resources,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Whether an empty slot could take a card.
    ///
    /// Every corner-neighbor must either be empty or show a present corner
    /// back towards `slot`. The root always holds the starter, so it is never
    /// treated as empty.
    fn is_linkable(&self, slot: &BoardSlot) -> bool {
        if slot.is_root() || self.placed.contains_key(slot) {
            return false;
        }
        CornerDirection::ALL.into_iter().all(|direction| {
            match self.face_at(&slot.slot_at(direction)) {
                None => true,
                Some(face) => face.corner(direction.opposite()).is_some(),
            }
        })
    }

    /// Re-evaluate the four corner-neighbors of `slot`
    fn refresh_frontier_around(&mut self, slot: BoardSlot) {
        for neighbor in slot.corner_neighbors() {
            if self.is_linkable(&neighbor) {
                if self.available.insert(neighbor) {
                    trace!(%neighbor, "Slot opened");
                }
            } else if self.available.remove(&neighbor) {
                trace!(%neighbor, "Slot closed");
            }
        }
    }

    // ==================== Mutation Methods ====================

    /// Place a face and return the points it scores.
    ///
    /// Fails without changing anything if the slot is not available or the
    /// face's requirement is not met by the currently visible resources.
    pub fn place_card(&mut self, slot: BoardSlot, face: CardFace) -> Result<u32, BoardError> {
        if let Err(e) = self.check_placement(&slot, &face) {
            debug!(%slot, error = %e, "Placement rejected");
            return Err(e);
        }

        // Corners of neighbors that this card now sits on
        let mut covered_corners = 0;
        let mut hidden_resources = ResourcesCounter::ZERO;
        let mut hidden_items = ItemsCounter::ZERO;
        for direction in CornerDirection::ALL {
            let Some(neighbor) = self.face_at(&slot.slot_at(direction)) else {
                continue;
            };
            covered_corners += 1;
            let (resources, items) = corner_contribution(neighbor.corner(direction.opposite()));
            hidden_resources += resources;
            hidden_items += items;
        }

        self.placed.insert(slot, face);
        self.available.remove(&slot);
        self.refresh_frontier_around(slot);

        self.resources = self.resources + face.visible_resources() - hidden_resources;
        self.items = self.items + face.visible_items() - hidden_items;

        let points = face.points(&*self, covered_corners);
        debug!(
            %slot,
            covered_corners,
            points,
            resources = %self.resources,
            items = %self.items,
            "Card placed"
        );
        Ok(points)
    }
}

impl BoardView for Board {
    fn covered_slots(&self) -> Vec<BoardSlot> {
        self.placed.keys().copied().collect()
    }

    fn face_at(&self, slot: &BoardSlot) -> Option<&CardFace> {
        if slot.is_root() {
            Some(&self.root)
        } else {
            self.placed.get(slot)
        }
    }

    fn resources(&self) -> ResourcesCounter {
        self.resources
    }

    fn items(&self) -> ItemsCounter {
        self.items
    }
}

/// Detached snapshot of a board, taken with `Board::get_info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardInfo {
    root: CardFace,
    placed: HashMap<BoardSlot, CardFace>,
    available: HashSet<BoardSlot>,
    resources: ResourcesCounter,
    items: ItemsCounter,
}

impl BoardInfo {
    pub fn root_face(&self) -> &CardFace {
        &self.root
    }

    pub fn available_slots(&self) -> &HashSet<BoardSlot> {
        &self.available
    }

    /// The face at a slot
    pub fn card_at(&self, slot: &BoardSlot) -> Result<&CardFace, BoardError> {
        self.face_at(slot).ok_or(BoardError::NotFound(*slot))
    }

    /// Convert to a JSON-friendly representation with arrays instead of maps.
    /// Entries are sorted by slot so equal snapshots serialize identically.
    pub fn to_json_friendly(&self) -> BoardInfoJson {
        let mut cards: Vec<PlacedFaceJson> = self
            .placed
            .iter()
            .map(|(slot, face)| PlacedFaceJson {
                slot: *slot,
                face: *face,
            })
            .collect();
        cards.sort_by_key(|c| (c.slot.h, c.slot.v));

        let mut available: Vec<BoardSlot> = self.available.iter().copied().collect();
        available.sort_by_key(|s| (s.h, s.v));

        BoardInfoJson {
            root: self.root,
            cards,
            available,
            resources: self.resources,
            items: self.items,
        }
    }
}

impl BoardView for BoardInfo {
    fn covered_slots(&self) -> Vec<BoardSlot> {
        self.placed.keys().copied().collect()
    }

    fn face_at(&self, slot: &BoardSlot) -> Option<&CardFace> {
        if slot.is_root() {
            Some(&self.root)
        } else {
            self.placed.get(slot)
        }
    }

    fn resources(&self) -> ResourcesCounter {
        self.resources
    }

    fn items(&self) -> ItemsCounter {
        self.items
    }
}

/// JSON-friendly snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfoJson {
    pub root: CardFace,
    pub cards: Vec<PlacedFaceJson>,
    pub available: Vec<BoardSlot>,
    pub resources: ResourcesCounter,
    pub items: ItemsCounter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFaceJson {
    pub slot: BoardSlot,
    pub face: CardFace,
}

/// What a corner contributes to the counters while visible
pub(crate) fn corner_contribution(corner: Option<CardCorner>) -> (ResourcesCounter, ItemsCounter) {
    match corner {
        Some(c) => (ResourcesCounter::from_corner(c), ItemsCounter::from_corner(c)),
        None => (ResourcesCounter::ZERO, ItemsCounter::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::{Item, Kingdom, Resource};
    use crate::face::ScoringRule;
    use crate::slot::RelativeDirection;

    const B: Option<CardCorner> = Some(CardCorner::Blank);
    const F: Option<CardCorner> = Some(CardCorner::Resource(Resource::Fungi));
    const P: Option<CardCorner> = Some(CardCorner::Resource(Resource::Plant));
    const INK: Option<CardCorner> = Some(CardCorner::Item(Item::Ink));

    fn open_starter() -> CardFace {
        CardFace::new([B, B, B, B])
    }

    fn blank() -> CardFace {
        CardFace::new([B, B, B, B])
    }

    #[test]
    fn test_new_board_frontier() {
        let board = Board::new(open_starter());
        let expected: HashSet<_> = BoardSlot::ROOT.corner_neighbors().into_iter().collect();
        assert_eq!(board.available_slots(), &expected);
        assert!(board.is_empty());
        assert!(board.covered_slots().is_empty());
    }

    #[test]
    fn test_absent_starter_corners_are_not_linkable() {
        // Top-right, bottom-right, bottom-left, top-left
        let board = Board::new(CardFace::new([B, None, None, P]));
        let expected: HashSet<_> = [BoardSlot::new(1, 1), BoardSlot::new(-1, 1)]
            .into_iter()
            .collect();
        assert_eq!(board.available_slots(), &expected);
        assert_eq!(board.resources(), ResourcesCounter::new(0, 1, 0, 0));
    }

    #[test]
    fn test_place_on_unavailable_slot_is_rejected() {
        let mut board = Board::new(open_starter());
        let before = board.get_info();

        let err = board.place_card(BoardSlot::new(2, 2), blank()).unwrap_err();
        assert_eq!(
            err,
            BoardError::IllegalPlacement(PlacementViolation::SlotUnavailable(BoardSlot::new(2, 2)))
        );

        // Root is never placeable
        assert!(board.place_card(BoardSlot::ROOT, blank()).is_err());
        // Off-lattice slots never open
        assert!(board.place_card(BoardSlot::new(1, 0), blank()).is_err());

        assert_eq!(board.get_info(), before);
    }

    #[test]
    fn test_requirement_rejection_leaves_board_unchanged() {
        let mut board = Board::new(CardFace::new([F, B, B, B]));
        let gold = CardFace::gold_front(
            Kingdom::Fungi,
            [B, B, B, B],
            ResourcesCounter::new(2, 0, 0, 0),
            ScoringRule::Constant(5),
        );
        let before = board.get_info();

        let err = board.place_card(BoardSlot::new(-1, 1), gold).unwrap_err();
        assert!(matches!(
            err,
            BoardError::IllegalPlacement(PlacementViolation::RequirementNotMet { .. })
        ));
        assert_eq!(board.get_info(), before);

        // One more fungi makes it legal
        board
            .place_card(BoardSlot::new(-1, -1), CardFace::new([F, B, B, B]))
            .unwrap();
        assert_eq!(board.resources().fungi, 2);
        assert_eq!(board.place_card(BoardSlot::new(-1, 1), gold), Ok(5));
    }

    #[test]
    fn test_hidden_corner_is_subtracted() {
        let mut board = Board::new(CardFace::new([F, INK, B, B]));
        assert_eq!(board.resources(), ResourcesCounter::new(1, 0, 0, 0));
        assert_eq!(board.items(), ItemsCounter::new(0, 1, 0));

        // Covers the starter's top-right fungi
        board.place_card(BoardSlot::new(1, 1), blank()).unwrap();
        assert_eq!(board.resources(), ResourcesCounter::ZERO);

        // Covers the starter's bottom-right ink
        board
            .place_card(BoardSlot::new(1, -1), CardFace::new([P, B, B, B]))
            .unwrap();
        assert_eq!(board.items(), ItemsCounter::ZERO);
        assert_eq!(board.resources(), ResourcesCounter::new(0, 1, 0, 0));
    }

    #[test]
    fn test_absent_corner_blocks_slot() {
        let mut board = Board::new(open_starter());
        // New card has no bottom-right corner, so (2, 0) can never link
        let face = CardFace::new([B, None, B, B]);
        board.place_card(BoardSlot::new(1, 1), face).unwrap();

        assert!(!board.is_available(&BoardSlot::new(2, 0)));
        assert!(board.is_available(&BoardSlot::new(2, 2)));
        assert!(board.is_available(&BoardSlot::new(0, 2)));

        // (2, 0) stays closed even though the starter-side neighbor (1, -1) is open
        board.place_card(BoardSlot::new(1, -1), blank()).unwrap();
        assert!(!board.is_available(&BoardSlot::new(2, 0)));
    }

    #[test]
    fn test_covered_corner_count_drives_scoring() {
        let mut board = Board::new(open_starter());
        board.place_card(BoardSlot::new(1, 1), blank()).unwrap();
        board.place_card(BoardSlot::new(1, -1), blank()).unwrap();

        // (2, 0) touches both placed cards
        let corner_gold = CardFace::new([B, B, B, B])
            .with_scoring(ScoringRule::PerCoveredCorner { points: 2 });
        assert_eq!(board.place_card(BoardSlot::new(2, 0), corner_gold), Ok(4));
    }

    #[test]
    fn test_item_rule_counts_own_item() {
        let mut board = Board::new(CardFace::new([INK, B, B, B]));
        let face = CardFace::new([INK, B, B, INK])
            .with_scoring(ScoringRule::PerVisibleItem { item: Item::Ink, points: 1 });
        // Covers starter ink at top-right, shows two of its own
        assert_eq!(board.place_card(BoardSlot::new(1, 1), face), Ok(2));
    }

    #[test]
    fn test_card_at_and_neighbor() {
        let mut board = Board::new(open_starter());
        let fungi = CardFace::kingdom_back(Kingdom::Fungi);
        board.place_card(BoardSlot::new(1, 1), fungi).unwrap();

        assert_eq!(board.card_at(&BoardSlot::new(1, 1)), Ok(&fungi));
        assert_eq!(board.card_at(&BoardSlot::ROOT), Ok(&open_starter()));
        assert_eq!(
            board.card_at(&BoardSlot::new(5, 5)),
            Err(BoardError::NotFound(BoardSlot::new(5, 5)))
        );

        assert_eq!(
            board.neighbor(&BoardSlot::ROOT, CornerDirection::TopRight),
            Some(&fungi)
        );
        assert_eq!(
            board.neighbor(&BoardSlot::new(1, 1), RelativeDirection::DownLeft),
            Some(&open_starter())
        );
        assert_eq!(board.neighbor(&BoardSlot::new(1, 1), RelativeDirection::Up), None);
    }

    #[test]
    fn test_frontier_never_contains_root_or_covered() {
        let mut board = Board::new(open_starter());
        for slot in [
            BoardSlot::new(1, 1),
            BoardSlot::new(-1, -1),
            BoardSlot::new(2, 2),
            BoardSlot::new(0, 2),
        ] {
            board.place_card(slot, blank()).unwrap();
            assert!(!board.is_available(&BoardSlot::ROOT));
            for covered in board.covered_slots() {
                assert!(!board.is_available(&covered));
            }
        }
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new(open_starter());
        let first = board.get_info();
        assert_eq!(first, board.get_info());

        board.place_card(BoardSlot::new(1, 1), blank()).unwrap();
        assert!(first.covered_slots().is_empty());
        assert!(first.available_slots().contains(&BoardSlot::new(1, 1)));
        assert_ne!(first, board.get_info());
    }

    #[test]
    fn test_root_and_placed_cards() {
        let starter = CardFace::new([F, B, None, P]);
        let mut board = Board::new(starter);
        assert_eq!(board.root_face(), &starter);
        assert_eq!(board.placed_cards().count(), 0);

        let fungi = CardFace::kingdom_back(Kingdom::Fungi);
        board.place_card(BoardSlot::new(1, 1), fungi).unwrap();
        board.place_card(BoardSlot::new(-1, 1), blank()).unwrap();

        let mut placed: Vec<_> = board.placed_cards().map(|(slot, face)| (*slot, *face)).collect();
        placed.sort_by_key(|(slot, _)| (slot.h, slot.v));
        assert_eq!(
            placed,
            vec![(BoardSlot::new(-1, 1), blank()), (BoardSlot::new(1, 1), fungi)]
        );

        // Root stays out of the placed cards but is kept in snapshots
        let info = board.get_info();
        assert_eq!(info.root_face(), &starter);
        assert_eq!(info.to_json_friendly().root, starter);
        assert!(board.placed_cards().all(|(slot, _)| !slot.is_root()));
    }

    #[test]
    fn test_json_friendly_is_sorted() {
        let mut board = Board::new(open_starter());
        board.place_card(BoardSlot::new(1, 1), blank()).unwrap();
        board.place_card(BoardSlot::new(-1, -1), blank()).unwrap();

        let json = board.get_info().to_json_friendly();
        let slots: Vec<_> = json.cards.iter().map(|c| c.slot).collect();
        assert_eq!(slots, vec![BoardSlot::new(-1, -1), BoardSlot::new(1, 1)]);
        assert!(json.available.windows(2).all(|w| (w[0].h, w[0].v) < (w[1].h, w[1].v)));
    }

    #[test]
    fn test_corner_contribution() {
        assert_eq!(
            corner_contribution(F),
            (ResourcesCounter::new(1, 0, 0, 0), ItemsCounter::ZERO)
        );
        assert_eq!(
            corner_contribution(INK),
            (ResourcesCounter::ZERO, ItemsCounter::new(0, 1, 0))
        );
        assert_eq!(
            corner_contribution(None),
            (ResourcesCounter::ZERO, ItemsCounter::ZERO)
        );
    }
}
