//! Snapshot and restore of a die's full state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Die, DieId};
use crate::error::{DiceError, DiceResult};

/// Everything needed to resume a die exactly where it left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieSnapshot {
    /// Stable identity.
    pub id: DieId,
    /// Number of sides.
    pub sides: u32,
    /// Seed the stream resumes from.
    pub seed: u64,
    /// Face showing at snapshot time.
    pub face: u32,
    /// Every roll, oldest first.
    pub roll_history: Vec<u32>,
    /// Who made each roll.
    pub user_history: Vec<String>,
    /// Optional nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl DieSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> DiceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON. The result is not yet validated; convert it with
    /// [`Die::try_from`] to check it.
    pub fn from_json(json: &str) -> DiceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn validate(&self) -> DiceResult<()> {
        if self.sides == 0 {
            return Err(DiceError::InvalidSides(self.sides));
        }
        if self.roll_history.len() != self.user_history.len() {
            return Err(DiceError::HistoryMismatch {
                rolls: self.roll_history.len(),
                users: self.user_history.len(),
            });
        }
        let in_range = |face: u32| (1..=self.sides).contains(&face);
        if let Some(&face) = std::iter::once(&self.face)
            .chain(&self.roll_history)
            .find(|&&face| !in_range(face))
        {
            return Err(DiceError::FaceOutOfRange {
                face,
                sides: self.sides,
            });
        }
        Ok(())
    }
}

impl Die {
    /// Capture the die's full state.
    pub fn snapshot(&self) -> DieSnapshot {
        DieSnapshot {
            id: self.id,
            sides: self.sides,
            seed: self.seed,
            face: self.face,
            roll_history: self.roll_history.clone(),
            user_history: self.user_history.clone(),
            nickname: self.nickname.clone(),
        }
    }

    /// Replace this die with the one described by `snapshot`. On error the
    /// die is left exactly as it was.
    pub fn restore(&mut self, snapshot: DieSnapshot) -> DiceResult<()> {
        *self = Die::try_from(snapshot)?;
        Ok(())
    }
}

impl TryFrom<DieSnapshot> for Die {
    type Error = DiceError;

    fn try_from(snapshot: DieSnapshot) -> DiceResult<Self> {
        snapshot.validate()?;
        debug!(die = %snapshot.id, rolls = snapshot.roll_history.len(), "restored die");
        Ok(Self {
            id: snapshot.id,
            sides: snapshot.sides,
            seed: snapshot.seed,
            rng: StdRng::seed_from_u64(snapshot.seed),
            face: snapshot.face,
            roll_history: snapshot.roll_history,
            user_history: snapshot.user_history,
            nickname: snapshot.nickname,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled_die() -> Die {
        let mut die = Die::with_seed(20, 99).unwrap();
        die.set_nickname("Old Faithful");
        for user in ["ana", "bo", "ana", "cy", "bo"] {
            die.roll(user);
        }
        die
    }

    #[test]
    fn restored_die_continues_the_sequence() {
        let mut original = rolled_die();
        let mut restored = Die::try_from(original.snapshot()).unwrap();
        let expected: Vec<u32> = (0..30).map(|_| original.roll("next")).collect();
        let actual: Vec<u32> = (0..30).map(|_| restored.roll("next")).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn restore_after_blow_continues_the_sequence() {
        let mut original = rolled_die();
        original.blow();
        let mut restored = Die::try_from(original.snapshot()).unwrap();
        assert_eq!(original.blow(), restored.blow());
        assert_eq!(original.roll("x"), restored.roll("x"));
    }

    #[test]
    fn snapshot_keeps_public_state() {
        let die = rolled_die();
        let restored = Die::try_from(die.snapshot()).unwrap();
        assert_eq!(restored.id(), die.id());
        assert_eq!(restored.face(), die.face());
        assert_eq!(restored.history(), die.history());
        assert_eq!(restored.user_history(), die.user_history());
        assert_eq!(restored.nickname(), Some("Old Faithful"));
        assert_eq!(restored.describe(), die.describe());
    }

    #[test]
    fn json_roundtrip() {
        let die = rolled_die();
        let json = die.snapshot().to_json().unwrap();
        let snapshot = DieSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, die.snapshot());
    }

    #[test]
    fn nickname_is_optional_in_json() {
        let die = Die::with_seed(6, 1).unwrap();
        let json = die.snapshot().to_json().unwrap();
        assert!(!json.contains("nickname"));
        let snapshot = DieSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.nickname, None);
    }

    #[test]
    fn corrupt_json_is_a_snapshot_error() {
        let err = DieSnapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DiceError::Snapshot(_)));
    }

    #[test]
    fn rejects_mismatched_histories() {
        let mut snapshot = rolled_die().snapshot();
        snapshot.user_history.pop();
        let err = Die::try_from(snapshot).unwrap_err();
        assert!(matches!(
            err,
            DiceError::HistoryMismatch { rolls: 5, users: 4 }
        ));
    }

    #[test]
    fn rejects_out_of_range_face_and_rolls() {
        let mut snapshot = rolled_die().snapshot();
        snapshot.face = 21;
        assert!(matches!(
            Die::try_from(snapshot).unwrap_err(),
            DiceError::FaceOutOfRange { face: 21, sides: 20 }
        ));

        let mut snapshot = rolled_die().snapshot();
        snapshot.roll_history[2] = 0;
        assert!(matches!(
            Die::try_from(snapshot).unwrap_err(),
            DiceError::FaceOutOfRange { face: 0, sides: 20 }
        ));
    }

    #[test]
    fn rejects_zero_sides() {
        let mut snapshot = rolled_die().snapshot();
        snapshot.sides = 0;
        assert!(matches!(
            Die::try_from(snapshot).unwrap_err(),
            DiceError::InvalidSides(0)
        ));
    }

    #[test]
    fn failed_restore_leaves_die_untouched() {
        let mut die = rolled_die();
        let before = die.snapshot();
        let mut bad = Die::with_seed(6, 3).unwrap().snapshot();
        bad.face = 9;
        assert!(die.restore(bad).is_err());
        assert_eq!(die.snapshot(), before);
    }

    #[test]
    fn successful_restore_replaces_die() {
        let mut die = rolled_die();
        let other = Die::with_seed(6, 3).unwrap();
        die.restore(other.snapshot()).unwrap();
        assert_eq!(die.id(), other.id());
        assert_eq!(die.sides(), 6);
    }
}
