//! Sides, per-side data storage, and game outcomes.
//!
//! ## Side
//!
//! The two turn owners: the human player and the computer. Solo games
//! still use [`Side::Player`] as the permanent turn owner, which keeps
//! the scoring code identical across modes.
//!
//! ## SideMap
//!
//! Per-side data with O(1) access, indexable by [`Side`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Turn owner: the human player or the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Iterate over both sides, player first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Player, Side::Computer].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use concentration::core::{Side, SideMap};
///
/// let mut pairs: SideMap<u32> = SideMap::default();
/// pairs[Side::Player] += 1;
///
/// assert_eq!(pairs[Side::Player], 1);
/// assert_eq!(pairs[Side::Computer], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    computer: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit per-side values.
    #[must_use]
    pub const fn new(player: T, computer: T) -> Self {
        Self { player, computer }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            computer: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [
            (Side::Player, &self.player),
            (Side::Computer, &self.computer),
        ]
        .into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player collected more pairs.
    Player,
    /// The computer collected more pairs.
    Computer,
    /// Equal pair counts.
    Draw,
}

impl Outcome {
    /// Decide the outcome from final pair counts.
    ///
    /// Ties produce [`Outcome::Draw`].
    #[must_use]
    pub fn from_pairs(pairs: &SideMap<u32>) -> Self {
        use std::cmp::Ordering;

        match pairs[Side::Player].cmp(&pairs[Side::Computer]) {
            Ordering::Greater => Outcome::Player,
            Ordering::Less => Outcome::Computer,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        match (self, side) {
            (Outcome::Player, Side::Player) => true,
            (Outcome::Computer, Side::Computer) => true,
            _ => false,
        }
    }
}
