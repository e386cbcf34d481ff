//! The die entity: a private random stream plus a remembered past.
//!
//! Every operation that draws from the stream folds a freshly drawn seed
//! back into it, so [`Die::seed`] is always a complete token for resuming
//! the exact future sequence.

pub mod id;
pub mod snapshot;

pub use id::DieId;
pub use snapshot::DieSnapshot;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::describe;
use crate::error::{DiceError, DiceResult};
use crate::luck::{LuckModel, LuckTier};
use crate::material::{Material, material_for};

/// User label recorded for rolls supplied through [`Die::with_history`].
pub const HISTORY_USER: &str = "history";

/// A die with a private random stream and a full roll history.
#[derive(Debug, Clone)]
pub struct Die {
    id: DieId,
    sides: u32,
    seed: u64,
    rng: StdRng,
    face: u32,
    roll_history: Vec<u32>,
    user_history: Vec<String>,
    nickname: Option<String>,
}

impl Die {
    /// Forge a die with a random identity and seed.
    pub fn new(sides: u32) -> DiceResult<Self> {
        Self::from_rng(sides, &mut rand::rng())
    }

    /// Forge a die whose stream starts from `seed`.
    pub fn with_seed(sides: u32, seed: u64) -> DiceResult<Self> {
        Self::forge(DieId::new(), sides, seed)
    }

    /// Forge a die drawing both identity and seed from `rng`.
    pub fn from_rng<R: Rng>(sides: u32, rng: &mut R) -> DiceResult<Self> {
        let id = DieId::from_rng(rng);
        let seed = rng.random();
        Self::forge(id, sides, seed)
    }

    /// Forge a die that already remembers `rolls`, each credited to
    /// [`HISTORY_USER`]. The face shows the last roll.
    pub fn with_history(sides: u32, rolls: impl IntoIterator<Item = u32>) -> DiceResult<Self> {
        let mut die = Self::new(sides)?;
        for face in rolls {
            if !die.is_valid_face(face) {
                return Err(DiceError::FaceOutOfRange { face, sides });
            }
            die.roll_history.push(face);
            die.user_history.push(HISTORY_USER.to_string());
        }
        if let Some(&last) = die.roll_history.last() {
            die.face = last;
        }
        Ok(die)
    }

    fn forge(id: DieId, sides: u32, seed: u64) -> DiceResult<Self> {
        if sides == 0 {
            return Err(DiceError::InvalidSides(sides));
        }
        debug!(die = %id, sides, "forged a fresh die");
        Ok(Self {
            id,
            sides,
            seed,
            rng: StdRng::seed_from_u64(seed),
            face: sides,
            roll_history: Vec::new(),
            user_history: Vec::new(),
            nickname: None,
        })
    }

    /// The die's stable identity.
    pub fn id(&self) -> DieId {
        self.id
    }

    /// Number of sides.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The face currently showing.
    pub fn face(&self) -> u32 {
        self.face
    }

    /// The seed the stream will next draw from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The die's nickname, if it has been given one.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Name the die. A named die is dedicated and no longer drawable.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = Some(nickname.into());
    }

    /// Remove the nickname, returning the die to the drawable pool.
    pub fn clear_nickname(&mut self) {
        self.nickname = None;
    }

    /// Whether a bag may hand this die out to satisfy a request.
    pub fn is_drawable(&self) -> bool {
        self.nickname.is_none()
    }

    /// Every roll so far, oldest first.
    pub fn history(&self) -> &[u32] {
        &self.roll_history
    }

    /// Who made each roll, parallel to [`Die::history`].
    pub fn user_history(&self) -> &[String] {
        &self.user_history
    }

    /// `(user, face)` pairs, oldest first.
    pub fn rolls(&self) -> impl Iterator<Item = (&str, u32)> {
        self.user_history
            .iter()
            .map(String::as_str)
            .zip(self.roll_history.iter().copied())
    }

    /// Roll the die on behalf of `user`.
    pub fn roll(&mut self, user: impl Into<String>) -> u32 {
        let user = user.into();
        self.face = self.rng.random_range(1..=self.sides);
        debug!(die = %self.id, sides = self.sides, face = self.face, user = %user, "rolled");
        self.roll_history.push(self.face);
        self.user_history.push(user);
        self.reseed();
        self.face
    }

    /// Blow on the die for luck. Draws a coin flip from the stream and
    /// leaves the history alone.
    pub fn blow(&mut self) -> bool {
        let breath = self.rng.random::<bool>();
        debug!(die = %self.id, breath, "blew on the die");
        self.reseed();
        breath
    }

    /// Turn the die to `face`. Returns `false` and leaves the die untouched
    /// when `face` is outside `1..=sides`.
    pub fn set_face(&mut self, face: u32) -> bool {
        if !self.is_valid_face(face) {
            warn!(die = %self.id, face, sides = self.sides, "refused out-of-range face");
            return false;
        }
        self.face = face;
        true
    }

    /// Set the die down with its highest face up.
    pub fn place(&mut self) {
        self.face = self.sides;
    }

    fn is_valid_face(&self, face: u32) -> bool {
        (1..=self.sides).contains(&face)
    }

    fn reseed(&mut self) {
        self.seed = self.rng.random();
        self.rng = StdRng::seed_from_u64(self.seed);
        trace!(die = %self.id, seed = self.seed, "reseeded");
    }

    /// Luck score of the recent history under the default model.
    pub fn luck(&self) -> f64 {
        self.luck_with(&LuckModel::default())
    }

    /// Luck score of the recent history under `model`.
    pub fn luck_with(&self, model: &LuckModel) -> f64 {
        model.score(&self.roll_history, self.sides)
    }

    /// Luck tier under the default model.
    pub fn luck_tier(&self) -> LuckTier {
        LuckTier::from_score(self.luck())
    }

    /// Luck above the lucky threshold (includes very lucky).
    pub fn is_lucky(&self) -> bool {
        self.luck_tier().is_lucky()
    }

    /// Luck above the very-lucky threshold.
    pub fn is_very_lucky(&self) -> bool {
        self.luck_tier() == LuckTier::VeryLucky
    }

    /// Luck below the unlucky threshold (includes very unlucky).
    pub fn is_unlucky(&self) -> bool {
        self.luck_tier().is_unlucky()
    }

    /// Luck below the very-unlucky threshold.
    pub fn is_very_unlucky(&self) -> bool {
        self.luck_tier() == LuckTier::VeryUnlucky
    }

    /// What the die is made of. Derived from the id on every call.
    pub fn material(&self) -> Material {
        material_for(self.id)
    }

    /// Flavor text for the die.
    pub fn describe(&self) -> String {
        describe::describe(self)
    }
}

impl PartialEq for Die {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Die {}

impl std::hash::Hash for Die {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
