//! Replay documents and score summaries.

use codex_core::objective::objective;
use codex_core::{
    BoardInfoJson, BoardRecord, BoardView, ItemsCounter, ObjectiveId, RecordError,
    ResourcesCounter,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the tool reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayInput {
    /// The player's board
    pub board: BoardRecord,
    /// Objectives to score at the end (common and secret)
    #[serde(default)]
    pub objectives: Vec<ObjectiveId>,
}

/// Points from one objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveScore {
    pub id: ObjectiveId,
    pub points: u32,
}

/// What the tool prints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub placement_points: u32,
    pub objectives: Vec<ObjectiveScore>,
    pub total: u32,
    pub resources: ResourcesCounter,
    pub items: ItemsCounter,
    pub board: BoardInfoJson,
}

impl ReplaySummary {
    /// Sum of objective points
    pub fn objective_total(&self) -> u32 {
        self.objectives.iter().map(|o| o.points).sum()
    }
}

/// Rebuild the board and score it
pub fn run(input: &ReplayInput) -> Result<ReplaySummary, RecordError> {
    let player = input.board.replay()?;
    let info = player.board().get_info();

    let mut objectives = Vec::with_capacity(input.objectives.len());
    for &id in &input.objectives {
        let points = objective(id)?.calculate_points(&info);
        debug!(id, points, "Objective scored");
        objectives.push(ObjectiveScore { id, points });
    }

    let objective_points: u32 = objectives.iter().map(|o| o.points).sum();
    Ok(ReplaySummary {
        placement_points: player.score(),
        total: player.score() + objective_points,
        objectives,
        resources: info.resources(),
        items: info.items(),
        board: info.to_json_friendly(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_core::{BoardSlot, CardRef, CatalogError};

    fn input(json: &str) -> ReplayInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_and_score() {
        let input = input(
            r#"{
                "board": {
                    "starter": { "id": 82, "side": "Front" },
                    "placements": [
                        { "slot": { "h": 1, "v": 1 }, "card": { "id": 7, "side": "Front" } },
                        { "slot": { "h": 2, "v": 2 }, "card": { "id": 0, "side": "Back" } },
                        { "slot": { "h": 3, "v": 3 }, "card": { "id": 1, "side": "Back" } }
                    ]
                },
                "objectives": [0, 8, 12]
            }"#,
        );
        let summary = run(&input).unwrap();

        // Card 7 front is worth one point
        assert_eq!(summary.placement_points, 1);
        assert_eq!(
            summary.objectives,
            vec![
                ObjectiveScore { id: 0, points: 2 },
                ObjectiveScore { id: 8, points: 2 },
                ObjectiveScore { id: 12, points: 0 },
            ]
        );
        assert_eq!(summary.objective_total(), 4);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.board.cards.len(), 3);
    }

    #[test]
    fn test_objectives_default_to_empty() {
        let mut record = BoardRecord::new(CardRef::front(85));
        record.push(BoardSlot::new(1, 1), CardRef::front(0));
        let json = format!(r#"{{ "board": {} }}"#, record.to_json().unwrap());

        let summary = run(&input(&json)).unwrap();
        assert!(summary.objectives.is_empty());
        assert_eq!(summary.resources, ResourcesCounter::new(3, 1, 1, 0));
    }

    #[test]
    fn test_unknown_objective() {
        let input = ReplayInput {
            board: BoardRecord::new(CardRef::front(85)),
            objectives: vec![40],
        };
        assert_eq!(
            run(&input).unwrap_err(),
            RecordError::Catalog(CatalogError::UnknownObjective(40))
        );
    }
}
