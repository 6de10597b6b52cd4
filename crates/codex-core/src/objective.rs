//! End-of-game objectives.
//!
//! An objective is evaluated once against a finished board (usually a
//! `BoardInfo` snapshot) and turns pattern matches into bonus points.
//! Three families exist:
//! - diagonal runs of three same-kingdom cards
//! - towers: two stacked same-kingdom cards plus a base card on one corner
//! - quotas of visible resources or items
//!
//! Ids are stable and grouped by family: `0..4` diagonals, `4..8` towers,
//! `8..12` resource quotas, `12..16` item quotas.

use crate::board::BoardView;
use crate::catalog::CatalogError;
use crate::corner::{Item, Kingdom, Resource};
use crate::slot::{BoardSlot, CornerDirection, RelativeDirection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Objective identifier (index into `OBJECTIVES`)
pub type ObjectiveId = u8;

/// Number of standard objectives
pub const OBJECTIVE_COUNT: usize = 16;

/// What an objective looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectivePattern {
    /// Three cards of `kingdom`, each one `step` from the previous
    Diagonal {
        kingdom: Kingdom,
        step: CornerDirection,
    },
    /// A `kingdom` card, a second `kingdom` card one `stack` move away, and
    /// a `base` card on the second card's `base_corner`
    Tower {
        kingdom: Kingdom,
        stack: RelativeDirection,
        base: Kingdom,
        base_corner: CornerDirection,
    },
    /// Every `per` visible copies of `resource`
    ResourceQuota { resource: Resource, per: u32 },
    /// Every `per` visible copies of `item`
    ItemQuota { item: Item, per: u32 },
    /// Every complete feather/ink/vellum set
    ItemSet,
}

/// A scoring objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub id: ObjectiveId,
    /// Points per match
    pub points: u32,
    pub pattern: ObjectivePattern,
}

impl Objective {
    const fn new(id: ObjectiveId, points: u32, pattern: ObjectivePattern) -> Self {
        Self {
            id,
            points,
            pattern,
        }
    }

    /// Number of times the pattern occurs on the board
    pub fn count_matches<V: BoardView + ?Sized>(&self, board: &V) -> u32 {
        match self.pattern {
            ObjectivePattern::Diagonal { kingdom, step } => count_diagonals(board, kingdom, step),
            ObjectivePattern::Tower {
                kingdom,
                stack,
                base,
                base_corner,
            } => count_towers(board, kingdom, stack, base, base_corner),
            ObjectivePattern::ResourceQuota { resource, per } => {
                board.resources().get(resource) / per
            }
            ObjectivePattern::ItemQuota { item, per } => board.items().get(item) / per,
            ObjectivePattern::ItemSet => board.items().complete_sets(),
        }
    }

    /// Points this objective awards on the board
    pub fn calculate_points<V: BoardView + ?Sized>(&self, board: &V) -> u32 {
        self.points * self.count_matches(board)
    }
}

/// The standard objectives, indexed by id
pub static OBJECTIVES: [Objective; OBJECTIVE_COUNT] = [
    // ==================== Diagonals ====================
    Objective::new(
        0,
        2,
        ObjectivePattern::Diagonal {
            kingdom: Kingdom::Fungi,
            step: CornerDirection::TopRight,
        },
    ),
    Objective::new(
        1,
        2,
        ObjectivePattern::Diagonal {
            kingdom: Kingdom::Plant,
            step: CornerDirection::BottomRight,
        },
    ),
    Objective::new(
        2,
        2,
        ObjectivePattern::Diagonal {
            kingdom: Kingdom::Animal,
            step: CornerDirection::TopRight,
        },
    ),
    Objective::new(
        3,
        2,
        ObjectivePattern::Diagonal {
            kingdom: Kingdom::Insect,
            step: CornerDirection::BottomRight,
        },
    ),
    // ==================== Towers ====================
    Objective::new(
        4,
        3,
        ObjectivePattern::Tower {
            kingdom: Kingdom::Fungi,
            stack: RelativeDirection::Down,
            base: Kingdom::Plant,
            base_corner: CornerDirection::BottomRight,
        },
    ),
    Objective::new(
        5,
        3,
        ObjectivePattern::Tower {
            kingdom: Kingdom::Plant,
            stack: RelativeDirection::Down,
            base: Kingdom::Insect,
            base_corner: CornerDirection::BottomLeft,
        },
    ),
    Objective::new(
        6,
        3,
        ObjectivePattern::Tower {
            kingdom: Kingdom::Animal,
            stack: RelativeDirection::Up,
            base: Kingdom::Fungi,
            base_corner: CornerDirection::TopRight,
        },
    ),
    Objective::new(
        7,
        3,
        ObjectivePattern::Tower {
            kingdom: Kingdom::Insect,
            stack: RelativeDirection::Up,
            base: Kingdom::Animal,
            base_corner: CornerDirection::TopLeft,
        },
    ),
    // ==================== Resource Quotas ====================
    Objective::new(
        8,
        2,
        ObjectivePattern::ResourceQuota {
            resource: Resource::Fungi,
            per: 3,
        },
    ),
    Objective::new(
        9,
        2,
        ObjectivePattern::ResourceQuota {
            resource: Resource::Plant,
            per: 3,
        },
    ),
    Objective::new(
        10,
        2,
        ObjectivePattern::ResourceQuota {
            resource: Resource::Animal,
            per: 3,
        },
    ),
    Objective::new(
        11,
        2,
        ObjectivePattern::ResourceQuota {
            resource: Resource::Insect,
            per: 3,
        },
    ),
    // ==================== Item Quotas ====================
    Objective::new(12, 3, ObjectivePattern::ItemSet),
    Objective::new(
        13,
        2,
        ObjectivePattern::ItemQuota {
            item: Item::Vellum,
            per: 2,
        },
    ),
    Objective::new(
        14,
        2,
        ObjectivePattern::ItemQuota {
            item: Item::Ink,
            per: 2,
        },
    ),
    Objective::new(
        15,
        2,
        ObjectivePattern::ItemQuota {
            item: Item::Feather,
            per: 2,
        },
    ),
];

/// Look up an objective by id
pub fn objective(id: ObjectiveId) -> Result<&'static Objective, CatalogError> {
    OBJECTIVES
        .get(id as usize)
        .ok_or(CatalogError::UnknownObjective(id))
}

/// Total points for a list of objectives
pub fn score_all<V: BoardView + ?Sized>(
    board: &V,
    ids: &[ObjectiveId],
) -> Result<u32, CatalogError> {
    let mut total = 0;
    for &id in ids {
        let points = objective(id)?.calculate_points(board);
        debug!(id, points, "Objective scored");
        total += points;
    }
    Ok(total)
}

fn has_kingdom<V: BoardView + ?Sized>(board: &V, slot: &BoardSlot, kingdom: Kingdom) -> bool {
    board
        .face_at(slot)
        .and_then(|face| face.kingdom())
        == Some(kingdom)
}

/// Count disjoint triples along `step`.
///
/// Only run starts are scanned (slots whose predecessor does not match), and
/// each counted triple consumes its three slots, so a run of `n` cards
/// yields `n / 3` matches.
fn count_diagonals<V: BoardView + ?Sized>(
    board: &V,
    kingdom: Kingdom,
    step: CornerDirection,
) -> u32 {
    let mut count = 0;
    for start in board.covered_slots() {
        if !has_kingdom(board, &start, kingdom)
            || has_kingdom(board, &start.slot_at(step.opposite()), kingdom)
        {
            continue;
        }

        let mut cursor = start;
        while has_kingdom(board, &cursor, kingdom) {
            let second = cursor.slot_at(step);
            let third = second.slot_at(step);
            if !has_kingdom(board, &second, kingdom) || !has_kingdom(board, &third, kingdom) {
                break;
            }
            count += 1;
            cursor = third.slot_at(step);
        }
    }
    count
}

/// Count tower anchors. Cards on the three other corners of the second card
/// do not matter.
fn count_towers<V: BoardView + ?Sized>(
    board: &V,
    kingdom: Kingdom,
    stack: RelativeDirection,
    base: Kingdom,
    base_corner: CornerDirection,
) -> u32 {
    board
        .covered_slots()
        .into_iter()
        .filter(|anchor| {
            let second = anchor.slot_at(stack);
            has_kingdom(board, anchor, kingdom)
                && has_kingdom(board, &second, kingdom)
                && has_kingdom(board, &second.slot_at(base_corner), base)
        })
        .count() as u32
}
