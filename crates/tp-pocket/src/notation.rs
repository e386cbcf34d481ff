//! Dice notation: `2d6+1d4+3`.
//!
//! An expression is one or more terms joined by `+`. A term is either a
//! flat bonus (`3`) or a group of dice (`2d6`, or `d6` for a single die).
//! Whitespace is ignored and the `d` is case-insensitive.

use std::fmt;
use std::str::FromStr;

use crate::error::{PocketError, PocketResult};

/// Most dice a single expression may ask for.
pub const MAX_DICE: u64 = 1_000;

/// One `+`-separated term of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// `count` dice with `sides` sides each.
    Dice {
        /// Number of dice.
        count: u32,
        /// Sides per die.
        sides: u32,
    },
    /// A flat amount added to the total.
    Bonus(u32),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { count, sides } => write!(f, "{count}d{sides}"),
            Self::Bonus(n) => write!(f, "{n}"),
        }
    }
}

/// A parsed dice-notation expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    terms: Vec<Term>,
}

impl Notation {
    /// Parse an expression such as `"2d6+1d4+3"`.
    pub fn parse(expression: &str) -> PocketResult<Self> {
        let compact: String = expression
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if compact.is_empty() {
            return Err(PocketError::notation(expression, "empty expression"));
        }

        let terms = compact
            .split('+')
            .map(|part| parse_term(expression, part))
            .collect::<PocketResult<Vec<_>>>()?;

        let bonus = terms
            .iter()
            .filter_map(|t| match t {
                Term::Bonus(n) => Some(*n),
                Term::Dice { .. } => None,
            })
            .try_fold(0u32, u32::checked_add);
        if bonus.is_none() {
            return Err(PocketError::notation(expression, "bonus is too large"));
        }

        let notation = Self { terms };
        if notation.dice_count() > MAX_DICE {
            return Err(PocketError::notation(
                expression,
                format!("at most {MAX_DICE} dice can be rolled at once"),
            ));
        }
        Ok(notation)
    }

    /// The terms in the order they were written.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Sum of all flat bonuses.
    pub fn bonus(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| match t {
                Term::Bonus(n) => *n,
                Term::Dice { .. } => 0,
            })
            .sum()
    }

    /// Total number of dice requested.
    pub fn dice_count(&self) -> u64 {
        self.terms
            .iter()
            .map(|t| match t {
                Term::Dice { count, .. } => u64::from(*count),
                Term::Bonus(_) => 0,
            })
            .sum()
    }
}

fn parse_term(expression: &str, part: &str) -> PocketResult<Term> {
    if part.is_empty() {
        return Err(PocketError::notation(expression, "empty term"));
    }
    match part.split_once('d') {
        Some((count, sides)) => {
            let count = if count.is_empty() {
                1
            } else {
                number(expression, count)?
            };
            let sides = number(expression, sides)?;
            if count == 0 {
                return Err(PocketError::notation(expression, "cannot roll zero dice"));
            }
            if sides == 0 {
                return Err(PocketError::notation(expression, "a die needs at least one side"));
            }
            Ok(Term::Dice { count, sides })
        }
        None => Ok(Term::Bonus(number(expression, part)?)),
    }
}

fn number(expression: &str, text: &str) -> PocketResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PocketError::notation(
            expression,
            format!("\"{text}\" is not a number"),
        ));
    }
    text.parse()
        .map_err(|_| PocketError::notation(expression, format!("{text} is too large")))
}

impl FromStr for Notation {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(expression: &str) -> String {
        match Notation::parse(expression) {
            Err(PocketError::Notation { reason, .. }) => reason,
            other => panic!("expected notation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_single_group() {
        let n = Notation::parse("2d6").unwrap();
        assert_eq!(n.terms(), &[Term::Dice { count: 2, sides: 6 }]);
        assert_eq!(n.bonus(), 0);
        assert_eq!(n.dice_count(), 2);
    }

    #[test]
    fn parse_implicit_count() {
        let n = Notation::parse("d20").unwrap();
        assert_eq!(n.terms(), &[Term::Dice { count: 1, sides: 20 }]);
    }

    #[test]
    fn parse_mixed_expression() {
        let n = Notation::parse("2d6+1d4+3").unwrap();
        assert_eq!(
            n.terms(),
            &[
                Term::Dice { count: 2, sides: 6 },
                Term::Dice { count: 1, sides: 4 },
                Term::Bonus(3),
            ]
        );
        assert_eq!(n.bonus(), 3);
        assert_eq!(n.dice_count(), 3);
    }

    #[test]
    fn bonuses_accumulate() {
        let n = Notation::parse("1+d8+2").unwrap();
        assert_eq!(n.bonus(), 3);
    }

    #[test]
    fn whitespace_and_case_are_ignored() {
        let n = Notation::parse("  2 D10 + 5 ").unwrap();
        assert_eq!(n.to_string(), "2d10+5");
    }

    #[test]
    fn display_normalizes() {
        assert_eq!(Notation::parse("d6+d6").unwrap().to_string(), "1d6+1d6");
    }

    #[test]
    fn from_str_parses() {
        let n: Notation = "3d8".parse().unwrap();
        assert_eq!(n.dice_count(), 3);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(reason(""), "empty expression");
        assert_eq!(reason("   "), "empty expression");
    }

    #[test]
    fn rejects_dangling_plus() {
        assert_eq!(reason("2d6+"), "empty term");
        assert_eq!(reason("+3"), "empty term");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(reason("fireball"), "\"fireball\" is not a number");
        assert_eq!(reason("2d"), "\"\" is not a number");
        assert_eq!(reason("2d6-1"), "\"6-1\" is not a number");
        assert_eq!(reason("xd6"), "\"x\" is not a number");
    }

    #[test]
    fn rejects_zero_dice_and_sides() {
        assert_eq!(reason("0d6"), "cannot roll zero dice");
        assert_eq!(reason("2d0"), "a die needs at least one side");
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(reason("99999999999d6"), "99999999999 is too large");
        assert_eq!(reason("4000000000+4000000000"), "bonus is too large");
    }

    #[test]
    fn rejects_too_many_dice() {
        assert_eq!(
            reason("4294967295d6"),
            "at most 1000 dice can be rolled at once"
        );
        assert_eq!(
            reason("600d6+600d4"),
            "at most 1000 dice can be rolled at once"
        );
        assert_eq!(Notation::parse("1000d6").unwrap().dice_count(), MAX_DICE);
    }

    #[test]
    fn error_message_names_the_expression() {
        let err = Notation::parse("2q6").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dice notation \"2q6\": \"2q6\" is not a number"
        );
    }
}
