//! The fixed card catalog.
//!
//! Cards are addressed by a small integer id:
//! - `0..40`: resource cards, ten per kingdom (fungi, plant, animal, insect)
//! - `40..80`: gold cards, ten per kingdom in the same order
//! - `80..86`: starter cards
//!
//! The table is a `static` built from `const fn` constructors, so lookups are
//! plain indexing with no lazy initialization.

use crate::corner::{CardCorner, Item, Kingdom, Resource};
use crate::counter::ResourcesCounter;
use crate::face::{CardFace, ScoringRule};
use crate::objective::ObjectiveId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card identifier (index into `CARDS`)
pub type CardId = u8;

/// Number of cards in the catalog
pub const CARD_COUNT: usize = 86;

/// Errors from catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CatalogError {
    #[error("Unknown card id {0}")]
    UnknownCard(CardId),

    #[error("Unknown objective id {0}")]
    UnknownObjective(ObjectiveId),
}

/// Kind of card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Resource,
    Gold,
    Starter,
}

/// Which side of a card is face up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    pub fn flipped(self) -> Self {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}

/// A physical card: two faces under one id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub front: CardFace,
    pub back: CardFace,
}

impl Card {
    const fn resource(
        id: CardId,
        kingdom: Kingdom,
        corners: [Option<CardCorner>; 4],
        points: u32,
    ) -> Self {
        Self {
            id,
            kind: CardKind::Resource,
            front: CardFace::resource_front(kingdom, corners, points),
            back: CardFace::kingdom_back(kingdom),
        }
    }

    const fn gold(
        id: CardId,
        kingdom: Kingdom,
        corners: [Option<CardCorner>; 4],
        requirement: ResourcesCounter,
        rule: ScoringRule,
    ) -> Self {
        Self {
            id,
            kind: CardKind::Gold,
            front: CardFace::gold_front(kingdom, corners, requirement, rule),
            back: CardFace::kingdom_back(kingdom),
        }
    }

    /// Starter fronts carry resources in the middle; backs show four corners
    const fn starter(
        id: CardId,
        permanent: ResourcesCounter,
        front: [Option<CardCorner>; 4],
        back: [Option<CardCorner>; 4],
    ) -> Self {
        Self {
            id,
            kind: CardKind::Starter,
            front: CardFace::new(front).with_permanent(permanent),
            back: CardFace::new(back),
        }
    }

    /// The requested side
    pub fn face(&self, side: CardSide) -> &CardFace {
        match side {
            CardSide::Front => &self.front,
            CardSide::Back => &self.back,
        }
    }

    /// Kingdom of a resource or gold card
    pub fn kingdom(&self) -> Option<Kingdom> {
        self.back.kingdom()
    }
}

const B: Option<CardCorner> = Some(CardCorner::Blank);
const X: Option<CardCorner> = None;
const FU: Option<CardCorner> = Some(CardCorner::Resource(Resource::Fungi));
const PL: Option<CardCorner> = Some(CardCorner::Resource(Resource::Plant));
const AN: Option<CardCorner> = Some(CardCorner::Resource(Resource::Animal));
const IN: Option<CardCorner> = Some(CardCorner::Resource(Resource::Insect));
const FE: Option<CardCorner> = Some(CardCorner::Item(Item::Feather));
const IK: Option<CardCorner> = Some(CardCorner::Item(Item::Ink));
const VE: Option<CardCorner> = Some(CardCorner::Item(Item::Vellum));

/// Every card, indexed by id. Corner arrays run top-right, bottom-right,
/// bottom-left, top-left.
pub static CARDS: [Card; CARD_COUNT] = [
    // ==================== Resource Cards ====================
    // Fungi
    Card::resource(0, Kingdom::Fungi, [B, X, FU, FU], 0),
    Card::resource(1, Kingdom::Fungi, [FU, B, X, FU], 0),
    Card::resource(2, Kingdom::Fungi, [X, FU, FU, B], 0),
    Card::resource(3, Kingdom::Fungi, [FU, FU, B, X], 0),
    Card::resource(4, Kingdom::Fungi, [FE, PL, FU, X], 0),
    Card::resource(5, Kingdom::Fungi, [FU, X, AN, IK], 0),
    Card::resource(6, Kingdom::Fungi, [B, VE, IN, FU], 0),
    Card::resource(7, Kingdom::Fungi, [FU, B, X, B], 1),
    Card::resource(8, Kingdom::Fungi, [X, B, B, FU], 1),
    Card::resource(9, Kingdom::Fungi, [B, FU, B, X], 1),
    // Plant
    Card::resource(10, Kingdom::Plant, [B, X, PL, PL], 0),
    Card::resource(11, Kingdom::Plant, [PL, B, X, PL], 0),
    Card::resource(12, Kingdom::Plant, [X, PL, PL, B], 0),
    Card::resource(13, Kingdom::Plant, [PL, PL, B, X], 0),
    Card::resource(14, Kingdom::Plant, [IK, IN, PL, X], 0),
    Card::resource(15, Kingdom::Plant, [PL, X, FU, VE], 0),
    Card::resource(16, Kingdom::Plant, [B, FE, AN, PL], 0),
    Card::resource(17, Kingdom::Plant, [PL, B, X, B], 1),
    Card::resource(18, Kingdom::Plant, [X, B, B, PL], 1),
    Card::resource(19, Kingdom::Plant, [B, PL, B, X], 1),
    // Animal
    Card::resource(20, Kingdom::Animal, [B, X, AN, AN], 0),
    Card::resource(21, Kingdom::Animal, [AN, B, X, AN], 0),
    Card::resource(22, Kingdom::Animal, [X, AN, AN, B], 0),
    Card::resource(23, Kingdom::Animal, [AN, AN, B, X], 0),
    Card::resource(24, Kingdom::Animal, [VE, IN, AN, X], 0),
    Card::resource(25, Kingdom::Animal, [AN, X, PL, FE], 0),
    Card::resource(26, Kingdom::Animal, [B, IK, FU, AN], 0),
    Card::resource(27, Kingdom::Animal, [AN, B, X, B], 1),
    Card::resource(28, Kingdom::Animal, [X, B, B, AN], 1),
    Card::resource(29, Kingdom::Animal, [B, AN, B, X], 1),
    // Insect
    Card::resource(30, Kingdom::Insect, [B, X, IN, IN], 0),
    Card::resource(31, Kingdom::Insect, [IN, B, X, IN], 0),
    Card::resource(32, Kingdom::Insect, [X, IN, IN, B], 0),
    Card::resource(33, Kingdom::Insect, [IN, IN, B, X], 0),
    Card::resource(34, Kingdom::Insect, [FE, AN, IN, X], 0),
    Card::resource(35, Kingdom::Insect, [IN, X, FU, IK], 0),
    Card::resource(36, Kingdom::Insect, [B, VE, PL, IN], 0),
    Card::resource(37, Kingdom::Insect, [IN, B, X, B], 1),
    Card::resource(38, Kingdom::Insect, [X, B, B, IN], 1),
    Card::resource(39, Kingdom::Insect, [B, IN, B, X], 1),
    // ==================== Gold Cards ====================
    // Fungi
    Card::gold(
        40,
        Kingdom::Fungi,
        [B, B, FE, X],
        ResourcesCounter::new(2, 0, 1, 0),
        ScoringRule::PerVisibleItem { item: Item::Feather, points: 1 },
    ),
    Card::gold(
        41,
        Kingdom::Fungi,
        [X, IK, B, B],
        ResourcesCounter::new(2, 1, 0, 0),
        ScoringRule::PerVisibleItem { item: Item::Ink, points: 1 },
    ),
    Card::gold(
        42,
        Kingdom::Fungi,
        [VE, B, X, B],
        ResourcesCounter::new(2, 0, 0, 1),
        ScoringRule::PerVisibleItem { item: Item::Vellum, points: 1 },
    ),
    Card::gold(
        43,
        Kingdom::Fungi,
        [B, B, X, B],
        ResourcesCounter::new(3, 0, 1, 0),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        44,
        Kingdom::Fungi,
        [B, X, B, B],
        ResourcesCounter::new(3, 1, 0, 0),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        45,
        Kingdom::Fungi,
        [X, B, B, B],
        ResourcesCounter::new(3, 0, 0, 1),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        46,
        Kingdom::Fungi,
        [FE, X, X, B],
        ResourcesCounter::new(3, 0, 0, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        47,
        Kingdom::Fungi,
        [X, B, X, IK],
        ResourcesCounter::new(3, 0, 0, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        48,
        Kingdom::Fungi,
        [X, X, VE, B],
        ResourcesCounter::new(3, 0, 0, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        49,
        Kingdom::Fungi,
        [B, X, X, B],
        ResourcesCounter::new(5, 0, 0, 0),
        ScoringRule::Constant(5),
    ),
    // Plant
    Card::gold(
        50,
        Kingdom::Plant,
        [B, B, VE, X],
        ResourcesCounter::new(0, 2, 0, 1),
        ScoringRule::PerVisibleItem { item: Item::Vellum, points: 1 },
    ),
    Card::gold(
        51,
        Kingdom::Plant,
        [X, FE, B, B],
        ResourcesCounter::new(1, 2, 0, 0),
        ScoringRule::PerVisibleItem { item: Item::Feather, points: 1 },
    ),
    Card::gold(
        52,
        Kingdom::Plant,
        [IK, B, X, B],
        ResourcesCounter::new(0, 2, 1, 0),
        ScoringRule::PerVisibleItem { item: Item::Ink, points: 1 },
    ),
    Card::gold(
        53,
        Kingdom::Plant,
        [B, B, X, B],
        ResourcesCounter::new(0, 3, 0, 1),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        54,
        Kingdom::Plant,
        [B, X, B, B],
        ResourcesCounter::new(1, 3, 0, 0),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        55,
        Kingdom::Plant,
        [X, B, B, B],
        ResourcesCounter::new(0, 3, 1, 0),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        56,
        Kingdom::Plant,
        [VE, X, X, B],
        ResourcesCounter::new(0, 3, 0, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        57,
        Kingdom::Plant,
        [X, B, X, FE],
        ResourcesCounter::new(0, 3, 0, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        58,
        Kingdom::Plant,
        [X, X, IK, B],
        ResourcesCounter::new(0, 3, 0, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        59,
        Kingdom::Plant,
        [B, X, X, B],
        ResourcesCounter::new(0, 5, 0, 0),
        ScoringRule::Constant(5),
    ),
    // Animal
    Card::gold(
        60,
        Kingdom::Animal,
        [B, B, IK, X],
        ResourcesCounter::new(0, 0, 2, 1),
        ScoringRule::PerVisibleItem { item: Item::Ink, points: 1 },
    ),
    Card::gold(
        61,
        Kingdom::Animal,
        [X, VE, B, B],
        ResourcesCounter::new(0, 1, 2, 0),
        ScoringRule::PerVisibleItem { item: Item::Vellum, points: 1 },
    ),
    Card::gold(
        62,
        Kingdom::Animal,
        [FE, B, X, B],
        ResourcesCounter::new(1, 0, 2, 0),
        ScoringRule::PerVisibleItem { item: Item::Feather, points: 1 },
    ),
    Card::gold(
        63,
        Kingdom::Animal,
        [B, B, X, B],
        ResourcesCounter::new(0, 0, 3, 1),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        64,
        Kingdom::Animal,
        [B, X, B, B],
        ResourcesCounter::new(0, 1, 3, 0),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        65,
        Kingdom::Animal,
        [X, B, B, B],
        ResourcesCounter::new(1, 0, 3, 0),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        66,
        Kingdom::Animal,
        [IK, X, X, B],
        ResourcesCounter::new(0, 0, 3, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        67,
        Kingdom::Animal,
        [X, B, X, VE],
        ResourcesCounter::new(0, 0, 3, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        68,
        Kingdom::Animal,
        [X, X, FE, B],
        ResourcesCounter::new(0, 0, 3, 0),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        69,
        Kingdom::Animal,
        [B, X, X, B],
        ResourcesCounter::new(0, 0, 5, 0),
        ScoringRule::Constant(5),
    ),
    // Insect
    Card::gold(
        70,
        Kingdom::Insect,
        [B, B, FE, X],
        ResourcesCounter::new(0, 0, 1, 2),
        ScoringRule::PerVisibleItem { item: Item::Feather, points: 1 },
    ),
    Card::gold(
        71,
        Kingdom::Insect,
        [X, IK, B, B],
        ResourcesCounter::new(0, 1, 0, 2),
        ScoringRule::PerVisibleItem { item: Item::Ink, points: 1 },
    ),
    Card::gold(
        72,
        Kingdom::Insect,
        [VE, B, X, B],
        ResourcesCounter::new(1, 0, 0, 2),
        ScoringRule::PerVisibleItem { item: Item::Vellum, points: 1 },
    ),
    Card::gold(
        73,
        Kingdom::Insect,
        [B, B, X, B],
        ResourcesCounter::new(0, 0, 1, 3),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        74,
        Kingdom::Insect,
        [B, X, B, B],
        ResourcesCounter::new(0, 1, 0, 3),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        75,
        Kingdom::Insect,
        [X, B, B, B],
        ResourcesCounter::new(1, 0, 0, 3),
        ScoringRule::PerCoveredCorner { points: 2 },
    ),
    Card::gold(
        76,
        Kingdom::Insect,
        [FE, X, X, B],
        ResourcesCounter::new(0, 0, 0, 3),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        77,
        Kingdom::Insect,
        [X, B, X, IK],
        ResourcesCounter::new(0, 0, 0, 3),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        78,
        Kingdom::Insect,
        [X, X, VE, B],
        ResourcesCounter::new(0, 0, 0, 3),
        ScoringRule::Constant(3),
    ),
    Card::gold(
        79,
        Kingdom::Insect,
        [B, X, X, B],
        ResourcesCounter::new(0, 0, 0, 5),
        ScoringRule::Constant(5),
    ),
    // ==================== Starter Cards ====================
    Card::starter(
        80,
        ResourcesCounter::new(0, 0, 0, 1),
        [PL, B, IN, B],
        [PL, AN, IN, FU],
    ),
    Card::starter(
        81,
        ResourcesCounter::new(1, 0, 0, 0),
        [B, FU, B, AN],
        [AN, FU, IN, PL],
    ),
    Card::starter(
        82,
        ResourcesCounter::new(1, 1, 0, 0),
        [B, B, B, B],
        [AN, PL, FU, IN],
    ),
    Card::starter(
        83,
        ResourcesCounter::new(0, 0, 1, 1),
        [B, B, B, B],
        [IN, FU, AN, PL],
    ),
    Card::starter(
        84,
        ResourcesCounter::new(0, 1, 1, 1),
        [B, X, X, B],
        [FU, PL, AN, IN],
    ),
    Card::starter(
        85,
        ResourcesCounter::new(1, 1, 1, 0),
        [B, X, X, B],
        [AN, IN, PL, FU],
    ),
];

/// Look up a card by id
pub fn card(id: CardId) -> Result<&'static Card, CatalogError> {
    CARDS
        .get(id as usize)
        .ok_or(CatalogError::UnknownCard(id))
}

/// Look up one side of a card
pub fn face(id: CardId, side: CardSide) -> Result<CardFace, CatalogError> {
    card(id).map(|c| *c.face(side))
}

/// A draw pile of card ids. The top of the pile is the end of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// Every card of one kind, in id order
    pub fn of_kind(kind: CardKind) -> Self {
        let cards = CARDS
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.id)
            .collect();
        Self { cards }
    }

    pub fn resource() -> Self {
        Self::of_kind(CardKind::Resource)
    }

    pub fn gold() -> Self {
        Self::of_kind(CardKind::Gold)
    }

    pub fn starter() -> Self {
        Self::of_kind(CardKind::Starter)
    }

    /// Shuffle the deck
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Take the top card
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Kingdom on the back of the top card, which every player can see
    pub fn top_kingdom(&self) -> Option<Kingdom> {
        self.cards
            .last()
            .and_then(|&id| CARDS.get(id as usize))
            .and_then(Card::kingdom)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
