//! Codex - board-state and scoring engine for a corner-linking card game
//!
//! This crate provides the rules core for a game in which every player grows
//! a private grid of cards, plugging each new card onto visible corners of
//! the cards already placed:
//! - Corner, resource, and item primitives with additive counters
//! - Card faces with placement requirements and scoring rules
//! - The placement engine: frontier of legal slots, visible counters, points
//! - The objective engine: diagonal, tower, and quota patterns
//! - A static catalog of the 86 cards and 16 objectives
//!
//! # Architecture
//!
//! Data flows one way. `Board::place_card` mutates a board and returns the
//! points of that placement. Objectives run later against `BoardInfo`
//! snapshots, which never change once taken. Turn order, networking, and
//! persistence belong to the caller; `record` gives it a serializable
//! description of a board to carry around.
//!
//! # Modules
//!
//! - [`slot`]: Coordinates and directions
//! - [`corner`]: Resources, items, kingdoms, corners
//! - [`counter`]: Resource and item counters
//! - [`face`]: Card faces and scoring rules
//! - [`board`]: Placement engine and snapshots
//! - [`objective`]: End-of-game objectives
//! - [`catalog`]: Card table and decks
//! - [`record`]: Placement history and replay

pub mod board;
pub mod catalog;
pub mod corner;
pub mod counter;
pub mod face;
pub mod objective;
pub mod record;
pub mod slot;

// Re-export commonly used types
pub use board::{Board, BoardError, BoardInfo, BoardInfoJson, BoardView, PlacementViolation};
pub use catalog::{Card, CardId, CardKind, CardSide, CatalogError, Deck, CARDS};
pub use corner::{CardCorner, Item, Kingdom, Resource};
pub use counter::{ItemsCounter, ResourcesCounter};
pub use face::{CardFace, ScoringRule};
pub use objective::{Objective, ObjectiveId, ObjectivePattern, OBJECTIVES};
pub use record::{BoardRecord, CardRef, PlacementRecord, PlayerBoard, RecordError};
pub use slot::{BoardSlot, CornerDirection, RelativeDirection, SlotOffset};
