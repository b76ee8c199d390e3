use crate::catalog::CharacterId;
use crate::teams::result::Teams;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Random source that partitions a selection into teams
///
/// Every call draws fresh randomness from the owned generator; nothing is
/// cached between calls, so identical inputs produce independent results.
#[derive(Debug)]
pub struct TeamShuffler {
    rng: StdRng,
}

impl TeamShuffler {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic shuffler for reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Shuffle the selection and chunk it into teams
    ///
    /// The whole selection is permuted uniformly before truncating to
    /// `team_count * team_size`, so every selected character has the same
    /// chance of making the cut.
    pub fn generate(
        &mut self,
        selection: impl IntoIterator<Item = CharacterId>,
        team_count: usize,
        team_size: usize,
    ) -> Teams {
        let mut members: Vec<CharacterId> = selection.into_iter().collect();
        members.shuffle(&mut self.rng);
        Teams::new(members, team_count, team_size)
    }
}

impl Default for TeamShuffler {
    fn default() -> Self {
        Self::from_entropy()
    }
}
