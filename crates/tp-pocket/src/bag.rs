//! A bag of dice that grows on demand.
//!
//! Requests name a side count and a number of dice. The bag answers with
//! drawable dice it already holds, in the order they were added, and forges
//! new ones for any shortfall. Named dice are dedicated and never drawn.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tp_core::{Die, DieId, DieSnapshot};

use crate::error::{PocketError, PocketResult};
use crate::store;

/// A collection of dice, owned exclusively by the bag.
#[derive(Debug, Clone, Default)]
pub struct DiceBag {
    nickname: String,
    dice: Vec<Die>,
    forge_rng: Option<StdRng>,
}

impl DiceBag {
    /// Create an empty bag. New dice get random identities and seeds.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            dice: Vec::new(),
            forge_rng: None,
        }
    }

    /// Create an empty bag whose newly forged dice are drawn from `seed`.
    pub fn with_seed(nickname: impl Into<String>, seed: u64) -> Self {
        let mut bag = Self::new(nickname);
        bag.set_forge_seed(seed);
        bag
    }

    /// Draw identities and seeds for future dice from `seed`.
    pub fn set_forge_seed(&mut self, seed: u64) {
        self.forge_rng = Some(StdRng::seed_from_u64(seed));
    }

    /// The bag's name.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Rename the bag.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// Number of dice in the bag.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the bag holds no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// All dice, in the order they were added.
    pub fn dice(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    /// Whether the bag holds the die with `id`.
    pub fn contains(&self, id: DieId) -> bool {
        self.die(id).is_some()
    }

    /// Look up a die by id.
    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice.iter().find(|d| d.id() == id)
    }

    /// Look up a die by id for mutation.
    pub fn die_mut(&mut self, id: DieId) -> Option<&mut Die> {
        self.dice.iter_mut().find(|d| d.id() == id)
    }

    /// Put a die in the bag. A die with the same id is replaced in place.
    pub fn add_die(&mut self, die: Die) -> DieId {
        let id = die.id();
        match self.die_mut(id) {
            Some(slot) => *slot = die,
            None => self.dice.push(die),
        }
        id
    }

    /// Take a die out of the bag.
    pub fn remove_die(&mut self, id: DieId) -> Option<Die> {
        let index = self.dice.iter().position(|d| d.id() == id)?;
        Some(self.dice.remove(index))
    }

    /// Forge a fresh die and put it in the bag. Identities already in the
    /// bag are drawn again, so a forge reseeded with an old seed never
    /// duplicates a die.
    pub fn forge(&mut self, sides: u32) -> PocketResult<DieId> {
        let die = loop {
            let die = match self.forge_rng.as_mut() {
                Some(rng) => Die::from_rng(sides, rng)?,
                None => Die::new(sides)?,
            };
            if !self.contains(die.id()) {
                break die;
            }
            debug!(bag = %self.nickname, die = %die.id(), "forged id already in the bag, drawing again");
        };
        debug!(bag = %self.nickname, die = %die.id(), sides, "added a fresh die to the bag");
        let id = die.id();
        self.dice.push(die);
        Ok(id)
    }

    /// Hand out `count` drawable dice with `sides` sides, forging any that
    /// are missing. No die appears twice in the answer.
    pub fn get_dice(&mut self, sides: u32, count: u32) -> PocketResult<Vec<DieId>> {
        self.get_dice_excluding(sides, count, &[])
    }

    /// Like [`DiceBag::get_dice`], but never hands out a die in `exclude`.
    pub fn get_dice_excluding(
        &mut self,
        sides: u32,
        count: u32,
        exclude: &[DieId],
    ) -> PocketResult<Vec<DieId>> {
        let wanted = count as usize;
        let mut picked: Vec<DieId> = self
            .dice
            .iter()
            .filter(|d| d.sides() == sides && d.is_drawable() && !exclude.contains(&d.id()))
            .map(Die::id)
            .take(wanted)
            .collect();
        while picked.len() < wanted {
            picked.push(self.forge(sides)?);
        }
        Ok(picked)
    }

    /// Roll the die with `id` on behalf of `user`.
    pub fn roll(&mut self, id: DieId, user: &str) -> PocketResult<u32> {
        let die = self
            .die_mut(id)
            .ok_or_else(|| PocketError::DieNotFound(id.to_string()))?;
        Ok(die.roll(user))
    }

    /// Find a die by nickname (case-insensitive) or by a prefix of its id.
    pub fn find(&self, query: &str) -> PocketResult<DieId> {
        Ok(self.find_die(query)?.id())
    }

    /// Like [`DiceBag::find`], returning the die itself.
    pub fn find_die(&self, query: &str) -> PocketResult<&Die> {
        let index = self.position(query)?;
        Ok(&self.dice[index])
    }

    /// Like [`DiceBag::find`], returning the die for mutation.
    pub fn find_die_mut(&mut self, query: &str) -> PocketResult<&mut Die> {
        let index = self.position(query)?;
        Ok(&mut self.dice[index])
    }

    fn position(&self, query: &str) -> PocketResult<usize> {
        let query = query.trim();
        let named: Vec<usize> = self
            .dice
            .iter()
            .enumerate()
            .filter(|(_, d)| d.nickname().is_some_and(|n| n.eq_ignore_ascii_case(query)))
            .map(|(i, _)| i)
            .collect();
        let candidates = if named.is_empty() {
            self.dice
                .iter()
                .enumerate()
                .filter(|(_, d)| d.id().matches_prefix(query))
                .map(|(i, _)| i)
                .collect()
        } else {
            named
        };
        match candidates.as_slice() {
            [] => Err(PocketError::DieNotFound(query.to_string())),
            [index] => Ok(*index),
            many => Err(PocketError::AmbiguousDie {
                query: query.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Descriptions of every die in the bag.
    pub fn descriptions(&self) -> Vec<String> {
        self.dice.iter().map(Die::describe).collect()
    }

    /// Capture the bag's dice for persistence.
    pub fn snapshot(&self) -> BagSnapshot {
        BagSnapshot {
            nickname: self.nickname.clone(),
            dice: self.dice.iter().map(Die::snapshot).collect(),
        }
    }

    /// Replace the bag's contents with the pocket file at `path`. The bag is
    /// untouched unless the whole file loads.
    pub fn reload(&mut self, path: &Path) -> PocketResult<()> {
        let mut loaded = store::load_bag(path)?;
        loaded.forge_rng = self.forge_rng.take();
        *self = loaded;
        Ok(())
    }
}

impl fmt::Display for DiceBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiceBag{{nickname='{}', dice={:?}}}",
            self.nickname,
            self.descriptions()
        )
    }
}

/// Persistable form of a [`DiceBag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagSnapshot {
    /// The bag's name.
    pub nickname: String,
    /// Every die, in bag order.
    pub dice: Vec<DieSnapshot>,
}

impl TryFrom<BagSnapshot> for DiceBag {
    type Error = PocketError;

    fn try_from(snapshot: BagSnapshot) -> PocketResult<Self> {
        let mut seen = HashSet::new();
        let mut dice = Vec::with_capacity(snapshot.dice.len());
        for die in snapshot.dice {
            if !seen.insert(die.id) {
                return Err(PocketError::DuplicateDie(die.id));
            }
            dice.push(Die::try_from(die)?);
        }
        Ok(Self {
            nickname: snapshot.nickname,
            dice,
            forge_rng: None,
        })
    }
}
