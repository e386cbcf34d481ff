//! A reusable group of dice drawn from a bag, plus a flat bonus.

use std::fmt;

use tp_core::DieId;

use crate::bag::DiceBag;
use crate::error::{PocketError, PocketResult};
use crate::notation::{Notation, Term};

/// Dice referenced by id. The bag keeps ownership of the dice themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<DieId>,
    fixed_bonus: u32,
    nickname: Option<String>,
}

impl DiceSet {
    /// An empty set with no bonus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `expression` and fill the set with dice from `bag`.
    pub fn parse(bag: &mut DiceBag, expression: &str) -> PocketResult<Self> {
        Self::from_notation(bag, &Notation::parse(expression)?)
    }

    /// Fill a set from parsed notation. Every die in the set is distinct,
    /// so `1d6+1d6` holds two different dice.
    pub fn from_notation(bag: &mut DiceBag, notation: &Notation) -> PocketResult<Self> {
        let mut set = Self::new();
        for term in notation.terms() {
            match *term {
                Term::Dice { count, sides } => {
                    let drawn = bag.get_dice_excluding(sides, count, &set.dice)?;
                    set.dice.extend(drawn);
                }
                Term::Bonus(n) => set.fixed_bonus += n,
            }
        }
        Ok(set)
    }

    /// Add a die. Returns `false` if it was already in the set.
    pub fn add_die(&mut self, id: DieId) -> bool {
        if self.dice.contains(&id) {
            return false;
        }
        self.dice.push(id);
        true
    }

    /// Remove a die. Returns `false` if it was not in the set.
    pub fn remove_die(&mut self, id: DieId) -> bool {
        let before = self.dice.len();
        self.dice.retain(|&d| d != id);
        self.dice.len() != before
    }

    /// The set's dice in draw order.
    pub fn dice(&self) -> &[DieId] {
        &self.dice
    }

    /// Flat amount added to every roll.
    pub fn fixed_bonus(&self) -> u32 {
        self.fixed_bonus
    }

    /// Set the flat bonus.
    pub fn set_fixed_bonus(&mut self, bonus: u32) {
        self.fixed_bonus = bonus;
    }

    /// The set's name, if any.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Name the set.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = Some(nickname.into());
    }

    /// Roll every die once on behalf of `user`. Nothing is rolled unless
    /// every die is still in `bag`.
    pub fn roll_all(&self, bag: &mut DiceBag, user: &str) -> PocketResult<SetRoll> {
        if let Some(missing) = self.dice.iter().find(|&&id| !bag.contains(id)) {
            return Err(PocketError::DieNotFound(missing.to_string()));
        }
        let rolls = self
            .dice
            .iter()
            .map(|&id| Ok((id, bag.roll(id, user)?)))
            .collect::<PocketResult<Vec<_>>>()?;
        Ok(SetRoll {
            rolls,
            bonus: self.fixed_bonus,
        })
    }
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.nickname {
            write!(f, "{name}: ")?;
        }
        write!(f, "{} dice", self.dice.len())?;
        if self.fixed_bonus > 0 {
            write!(f, " + {}", self.fixed_bonus)?;
        }
        Ok(())
    }
}

/// The outcome of rolling a [`DiceSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRoll {
    /// Each die and the face it landed on, in set order.
    pub rolls: Vec<(DieId, u32)>,
    /// Flat bonus added to the total.
    pub bonus: u32,
}

impl SetRoll {
    /// Faces rolled, in set order.
    pub fn faces(&self) -> Vec<u32> {
        self.rolls.iter().map(|&(_, face)| face).collect()
    }

    /// Sum of faces plus the bonus.
    pub fn total(&self) -> u64 {
        self.rolls
            .iter()
            .map(|&(_, face)| u64::from(face))
            .sum::<u64>()
            + u64::from(self.bonus)
    }
}

impl fmt::Display for SetRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces().iter().map(u32::to_string).collect();
        write!(f, "[{}]", faces.join(", "))?;
        if self.bonus > 0 {
            write!(f, " + {}", self.bonus)?;
        }
        write!(f, " = {}", self.total())
    }
}
