//! Additive tallies of resources and items.
//!
//! Both counters are small value types: adding or subtracting returns a new
//! counter, and equality is pointwise.

use crate::corner::{CardCorner, Item, Resource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Count of each resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcesCounter {
    pub fungi: u32,
    pub plant: u32,
    pub animal: u32,
    pub insect: u32,
}

impl ResourcesCounter {
    /// No resources at all
    pub const ZERO: ResourcesCounter = ResourcesCounter::new(0, 0, 0, 0);

    /// Create a counter with specific amounts
    pub const fn new(fungi: u32, plant: u32, animal: u32, insect: u32) -> Self {
        Self {
            fungi,
            plant,
            animal,
            insect,
        }
    }

    /// A counter holding `amount` of a single resource
    pub const fn of(resource: Resource, amount: u32) -> Self {
        match resource {
            Resource::Fungi => Self::new(amount, 0, 0, 0),
            Resource::Plant => Self::new(0, amount, 0, 0),
            Resource::Animal => Self::new(0, 0, amount, 0),
            Resource::Insect => Self::new(0, 0, 0, amount),
        }
    }

    /// Resources shown by a single corner
    pub const fn from_corner(corner: CardCorner) -> Self {
        match corner {
            CardCorner::Resource(r) => Self::of(r, 1),
            _ => Self::ZERO,
        }
    }

    /// Get the count of one resource
    pub const fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Fungi => self.fungi,
            Resource::Plant => self.plant,
            Resource::Animal => self.animal,
            Resource::Insect => self.insect,
        }
    }

    /// Sum of all resources
    pub fn total(&self) -> u32 {
        self.fungi + self.plant + self.animal + self.insect
    }

    /// Whether every count here is at least the matching count in `required`
    pub fn covers(&self, required: &ResourcesCounter) -> bool {
        Resource::ALL
            .iter()
            .all(|&r| self.get(r) >= required.get(r))
    }
}

impl Add for ResourcesCounter {
    type Output = ResourcesCounter;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.fungi + rhs.fungi,
            self.plant + rhs.plant,
            self.animal + rhs.animal,
            self.insect + rhs.insect,
        )
    }
}

impl Sub for ResourcesCounter {
    type Output = ResourcesCounter;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.fungi - rhs.fungi,
            self.plant - rhs.plant,
            self.animal - rhs.animal,
            self.insect - rhs.insect,
        )
    }
}

impl AddAssign for ResourcesCounter {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ResourcesCounter {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for ResourcesCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{fungi:{}, plant:{}, animal:{}, insect:{}}}",
            self.fungi, self.plant, self.animal, self.insect
        )
    }
}

/// Count of each item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemsCounter {
    pub feather: u32,
    pub ink: u32,
    pub vellum: u32,
}

impl ItemsCounter {
    /// No items at all
    pub const ZERO: ItemsCounter = ItemsCounter::new(0, 0, 0);

    /// Create a counter with specific amounts
    pub const fn new(feather: u32, ink: u32, vellum: u32) -> Self {
        Self {
            feather,
            ink,
            vellum,
        }
    }

    /// A counter holding `amount` of a single item
    pub const fn of(item: Item, amount: u32) -> Self {
        match item {
            Item::Feather => Self::new(amount, 0, 0),
            Item::Ink => Self::new(0, amount, 0),
            Item::Vellum => Self::new(0, 0, amount),
        }
    }

    /// Items shown by a single corner
    pub const fn from_corner(corner: CardCorner) -> Self {
        match corner {
            CardCorner::Item(i) => Self::of(i, 1),
            _ => Self::ZERO,
        }
    }

    /// Get the count of one item
    pub const fn get(&self, item: Item) -> u32 {
        match item {
            Item::Feather => self.feather,
            Item::Ink => self.ink,
            Item::Vellum => self.vellum,
        }
    }

    /// Sum of all items
    pub fn total(&self) -> u32 {
        self.feather + self.ink + self.vellum
    }

    /// Number of complete feather/ink/vellum sets
    pub fn complete_sets(&self) -> u32 {
        self.feather.min(self.ink).min(self.vellum)
    }
}

impl Add for ItemsCounter {
    type Output = ItemsCounter;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.feather + rhs.feather,
            self.ink + rhs.ink,
            self.vellum + rhs.vellum,
        )
    }
}

impl Sub for ItemsCounter {
    type Output = ItemsCounter;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.feather - rhs.feather,
            self.ink - rhs.ink,
            self.vellum - rhs.vellum,
        )
    }
}

impl AddAssign for ItemsCounter {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ItemsCounter {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for ItemsCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{feather:{}, ink:{}, vellum:{}}}",
            self.feather, self.ink, self.vellum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_add_sub() {
        let a = ResourcesCounter::new(1, 2, 3, 4);
        let b = ResourcesCounter::new(1, 0, 2, 0);
        assert_eq!(a + b, ResourcesCounter::new(2, 2, 5, 4));
        assert_eq!(a - b, ResourcesCounter::new(0, 2, 1, 4));

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_resources_from_corner() {
        assert_eq!(
            ResourcesCounter::from_corner(CardCorner::Resource(Resource::Animal)),
            ResourcesCounter::new(0, 0, 1, 0)
        );
        assert_eq!(
            ResourcesCounter::from_corner(CardCorner::Item(Item::Ink)),
            ResourcesCounter::ZERO
        );
        assert_eq!(
            ResourcesCounter::from_corner(CardCorner::Blank),
            ResourcesCounter::ZERO
        );
    }

    #[test]
    fn test_covers_requirement() {
        let have = ResourcesCounter::new(3, 1, 0, 0);
        assert!(have.covers(&ResourcesCounter::new(3, 0, 0, 0)));
        assert!(have.covers(&ResourcesCounter::new(2, 1, 0, 0)));
        assert!(!have.covers(&ResourcesCounter::new(3, 0, 1, 0)));
        assert!(!have.covers(&ResourcesCounter::new(4, 0, 0, 0)));
        assert!(have.covers(&ResourcesCounter::ZERO));
    }

    #[test]
    fn test_items_add_sub_and_sets() {
        let a = ItemsCounter::new(2, 3, 1);
        assert_eq!(a.complete_sets(), 1);
        assert_eq!(a.total(), 6);
        assert_eq!(a - ItemsCounter::of(Item::Vellum, 1), ItemsCounter::new(2, 3, 0));
        assert_eq!((a - ItemsCounter::of(Item::Vellum, 1)).complete_sets(), 0);
        assert_eq!(
            ItemsCounter::from_corner(CardCorner::Item(Item::Feather)) + a,
            ItemsCounter::new(3, 3, 1)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ResourcesCounter::new(1, 1, 1, 0).to_string(),
            "{fungi:1, plant:1, animal:1, insect:0}"
        );
        assert_eq!(ItemsCounter::new(0, 2, 1).to_string(), "{feather:0, ink:2, vellum:1}");
    }
}
