//! Card sides and the rules they score with.
//!
//! Every playable side of every card is a `CardFace`: four optional corners,
//! an optional kingdom, resources printed in the middle of the card, an
//! optional resource requirement, and an optional scoring rule. Resource
//! fronts, gold fronts, kingdom backs, and starter sides are all the same
//! record with different fields filled in.

use crate::board::BoardView;
use crate::corner::{CardCorner, Item, Kingdom};
use crate::counter::{ItemsCounter, ResourcesCounter};
use crate::slot::CornerDirection;
use serde::{Deserialize, Serialize};

/// Points awarded when a face is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Fixed number of points
    Constant(u32),
    /// `points` for every corner this placement covers
    PerCoveredCorner { points: u32 },
    /// `points` for every visible copy of `item`, counted after placement
    PerVisibleItem { item: Item, points: u32 },
}

impl ScoringRule {
    /// Score a placement.
    ///
    /// `board` must already include the placed face, so item-based rules see
    /// the item the face itself shows.
    pub fn points<V: BoardView + ?Sized>(&self, board: &V, covered_corners: u32) -> u32 {
        match *self {
            ScoringRule::Constant(points) => points,
            ScoringRule::PerCoveredCorner { points } => points * covered_corners,
            ScoringRule::PerVisibleItem { item, points } => points * board.items().get(item),
        }
    }
}

/// One side of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    /// Corners in `CornerDirection::ALL` order; `None` is an absent corner
    corners: [Option<CardCorner>; 4],
    /// Owning kingdom (resource and gold cards only)
    kingdom: Option<Kingdom>,
    /// Resources printed in the middle of the side
    permanent: ResourcesCounter,
    /// Minimum visible resources needed to place this side
    requirement: Option<ResourcesCounter>,
    scoring: Option<ScoringRule>,
}

impl CardFace {
    /// A bare side with the given corners, in `CornerDirection::ALL` order
    pub const fn new(corners: [Option<CardCorner>; 4]) -> Self {
        Self {
            corners,
            kingdom: None,
            permanent: ResourcesCounter::ZERO,
            requirement: None,
            scoring: None,
        }
    }

    pub const fn with_kingdom(self, kingdom: Kingdom) -> Self {
        Self {
            kingdom: Some(kingdom),
            ..self
        }
    }

    pub const fn with_permanent(self, permanent: ResourcesCounter) -> Self {
        Self { permanent, ..self }
    }

    pub const fn with_requirement(self, requirement: ResourcesCounter) -> Self {
        Self {
            requirement: Some(requirement),
            ..self
        }
    }

    pub const fn with_scoring(self, rule: ScoringRule) -> Self {
        Self {
            scoring: Some(rule),
            ..self
        }
    }

    // ==================== Catalog Shapes ====================

    /// Front of a resource card; `points` of zero means no scoring rule
    pub const fn resource_front(
        kingdom: Kingdom,
        corners: [Option<CardCorner>; 4],
        points: u32,
    ) -> Self {
        let face = Self::new(corners).with_kingdom(kingdom);
        if points > 0 {
            face.with_scoring(ScoringRule::Constant(points))
        } else {
            face
        }
    }

    /// Front of a gold card
    pub const fn gold_front(
        kingdom: Kingdom,
        corners: [Option<CardCorner>; 4],
        requirement: ResourcesCounter,
        rule: ScoringRule,
    ) -> Self {
        Self::new(corners)
            .with_kingdom(kingdom)
            .with_requirement(requirement)
            .with_scoring(rule)
    }

    /// Back of a resource or gold card: four blank corners around the
    /// kingdom's resource
    pub const fn kingdom_back(kingdom: Kingdom) -> Self {
        Self::new([Some(CardCorner::Blank); 4])
            .with_kingdom(kingdom)
            .with_permanent(ResourcesCounter::of(kingdom.resource(), 1))
    }

    // ==================== Query Methods ====================

    /// The corner in a given direction, `None` if absent
    pub fn corner(&self, direction: CornerDirection) -> Option<CardCorner> {
        self.corners[direction.index()]
    }

    /// All corners in `CornerDirection::ALL` order
    pub fn corners(&self) -> [Option<CardCorner>; 4] {
        self.corners
    }

    pub fn kingdom(&self) -> Option<Kingdom> {
        self.kingdom
    }

    pub fn permanent_resources(&self) -> ResourcesCounter {
        self.permanent
    }

    pub fn requirement(&self) -> Option<ResourcesCounter> {
        self.requirement
    }

    pub fn scoring(&self) -> Option<ScoringRule> {
        self.scoring
    }

    /// Resources shown when nothing covers this side
    pub fn visible_resources(&self) -> ResourcesCounter {
        self.corners
            .iter()
            .flatten()
            .fold(self.permanent, |acc, &corner| {
                acc + ResourcesCounter::from_corner(corner)
            })
    }

    /// Items shown when nothing covers this side
    pub fn visible_items(&self) -> ItemsCounter {
        self.corners
            .iter()
            .flatten()
            .fold(ItemsCounter::ZERO, |acc, &corner| {
                acc + ItemsCounter::from_corner(corner)
            })
    }

    /// Whether `available` satisfies this side's requirement
    pub fn requirement_met(&self, available: &ResourcesCounter) -> bool {
        self.requirement
            .map_or(true, |required| available.covers(&required))
    }

    /// Points for placing this side; zero when it has no scoring rule
    pub fn points<V: BoardView + ?Sized>(&self, board: &V, covered_corners: u32) -> u32 {
        self.scoring
            .map_or(0, |rule| rule.points(board, covered_corners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::corner::Resource;

    const F: Option<CardCorner> = Some(CardCorner::Resource(Resource::Fungi));
    const INK: Option<CardCorner> = Some(CardCorner::Item(Item::Ink));
    const B: Option<CardCorner> = Some(CardCorner::Blank);

    #[test]
    fn test_visible_resources_include_permanent() {
        let face = CardFace::new([F, B, None, F])
            .with_permanent(ResourcesCounter::new(0, 1, 0, 0));
        assert_eq!(face.visible_resources(), ResourcesCounter::new(2, 1, 0, 0));
        assert_eq!(face.visible_items(), ItemsCounter::ZERO);
    }

    #[test]
    fn test_kingdom_back() {
        let back = CardFace::kingdom_back(Kingdom::Insect);
        assert_eq!(back.kingdom(), Some(Kingdom::Insect));
        assert_eq!(back.visible_resources(), ResourcesCounter::new(0, 0, 0, 1));
        assert!(back.requirement().is_none());
        assert!(back.scoring().is_none());
        for corner in CornerDirection::ALL {
            assert_eq!(back.corner(corner), Some(CardCorner::Blank));
        }
    }

    #[test]
    fn test_requirement() {
        let gold = CardFace::gold_front(
            Kingdom::Fungi,
            [B, None, INK, None],
            ResourcesCounter::new(3, 0, 1, 0),
            ScoringRule::Constant(3),
        );
        assert!(!gold.requirement_met(&ResourcesCounter::new(3, 0, 0, 0)));
        assert!(gold.requirement_met(&ResourcesCounter::new(3, 0, 1, 0)));

        let plain = CardFace::resource_front(Kingdom::Fungi, [B, B, B, B], 0);
        assert!(plain.requirement_met(&ResourcesCounter::ZERO));
        assert!(plain.scoring().is_none());
    }

    #[test]
    fn test_scoring_rules() {
        let board = Board::new(CardFace::new([INK, INK, None, None]));

        assert_eq!(ScoringRule::Constant(5).points(&board, 3), 5);
        assert_eq!(ScoringRule::PerCoveredCorner { points: 2 }.points(&board, 3), 6);
        assert_eq!(
            ScoringRule::PerVisibleItem { item: Item::Ink, points: 1 }.points(&board, 0),
            2
        );
        assert_eq!(
            ScoringRule::PerVisibleItem { item: Item::Feather, points: 1 }.points(&board, 4),
            0
        );
    }
}
