//! Flavor text for dice.
//!
//! A description is a basic sentence naming the die, its material, and its
//! side count, followed by a phrase about its luck or wear. The luck phrase
//! is picked by the first matching rule, in this order: very lucky, lucky,
//! very unlucky, unlucky, unused, barely used. An established neutral die
//! gets no phrase at all.

use crate::die::Die;
use crate::luck::{LUCK_WINDOW, LuckTier};

/// Phrase for a very lucky die.
pub const FORTUNE: &str =
    "It shines with an otherworldly brilliance, as if touched by fortune herself.";
/// Phrase for a lucky die.
pub const FAVOR: &str = "It feels light and ready, as if favor lingers nearby.";
/// Phrase for a very unlucky die.
pub const CURSE: &str =
    "It exudes an unsettling and malevolent aura, as if shadowed by an ancient curse.";
/// Phrase for an unlucky die.
pub const MISFORTUNE: &str = "It carries an ominous stillness, as if misfortune waits in the wings.";
/// Phrase for a die that has never been rolled.
pub const PRISTINE: &str = "It is pristine and unused.";
/// Phrase for a die with fewer rolls than the luck window.
pub const ALMOST_NEW: &str = "It looks almost new.";

/// Full description: the basic sentence plus the luck phrase, if any.
pub fn describe(die: &Die) -> String {
    let basic = basic_description(die);
    match luck_phrase(die) {
        "" => basic,
        phrase => format!("{basic} {phrase}"),
    }
}

/// "Nickname, an ancient oak 6-sided die." or "A plastic 20-sided die."
pub fn basic_description(die: &Die) -> String {
    let material = die.material();
    let n = if material.starts_with_vowel() { "n" } else { "" };
    let sides = die.sides();
    match die.nickname() {
        Some(name) => format!("{name}, a{n} {material} {sides}-sided die."),
        None => format!("A{n} {material} {sides}-sided die."),
    }
}

/// The luck or wear phrase for `die`; empty for an established neutral die.
pub fn luck_phrase(die: &Die) -> &'static str {
    let rolls = die.history().len();
    match die.luck_tier() {
        LuckTier::VeryLucky => FORTUNE,
        LuckTier::Lucky => FAVOR,
        LuckTier::VeryUnlucky => CURSE,
        LuckTier::Unlucky => MISFORTUNE,
        LuckTier::Neutral if rolls == 0 => PRISTINE,
        LuckTier::Neutral if rolls < LUCK_WINDOW => ALMOST_NEW,
        LuckTier::Neutral => "",
    }
}
