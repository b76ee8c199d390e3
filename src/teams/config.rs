use crate::io::configuration::{DEFAULT_TEAMS, MAX_TEAMS, MIN_TEAMS, TEAM_SIZE, TEAM_STEP};
use crate::io::error::{Result, invalid_parameter};

/// Bounds and step size governing the team count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamLimits {
    /// Fewest teams allowed
    pub min_teams: usize,
    /// Most teams allowed
    pub max_teams: usize,
    /// Change applied by one increase or decrease
    pub step: usize,
    /// Members per team
    pub team_size: usize,
}

impl TeamLimits {
    /// Check that the limits describe a usable range
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is zero or the range is inverted
    pub fn validate(&self) -> Result<()> {
        if self.min_teams == 0 {
            return Err(invalid_parameter(
                "min_teams",
                &self.min_teams,
                &"at least one team is required",
            ));
        }
        if self.min_teams > self.max_teams {
            return Err(invalid_parameter(
                "max_teams",
                &self.max_teams,
                &format!("must not be below min_teams ({})", self.min_teams),
            ));
        }
        if self.step == 0 {
            return Err(invalid_parameter("step", &self.step, &"must be positive"));
        }
        if self.team_size == 0 {
            return Err(invalid_parameter(
                "team_size",
                &self.team_size,
                &"must be positive",
            ));
        }
        Ok(())
    }

    /// Total member slots across a number of teams
    pub const fn capacity(&self, team_count: usize) -> usize {
        team_count.saturating_mul(self.team_size)
    }
}

impl Default for TeamLimits {
    fn default() -> Self {
        Self {
            min_teams: MIN_TEAMS,
            max_teams: MAX_TEAMS,
            step: TEAM_STEP,
            team_size: TEAM_SIZE,
        }
    }
}

/// Number of teams to generate, kept within its limits
///
/// Changes only by the configured step and clamps at either bound; repeated
/// calls past a bound have no further effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamCount {
    count: usize,
    limits: TeamLimits,
}

impl TeamCount {
    /// Start at a given count
    ///
    /// # Errors
    ///
    /// Returns an error if the limits are invalid or the count lies outside them
    pub fn new(count: usize, limits: TeamLimits) -> Result<Self> {
        limits.validate()?;
        if count < limits.min_teams || count > limits.max_teams {
            return Err(invalid_parameter(
                "teams",
                &count,
                &format!(
                    "must be between {} and {}",
                    limits.min_teams, limits.max_teams
                ),
            ));
        }
        Ok(Self { count, limits })
    }

    /// Current number of teams
    pub const fn get(&self) -> usize {
        self.count
    }

    /// Limits this count is held within
    pub const fn limits(&self) -> TeamLimits {
        self.limits
    }

    /// Add one step of teams, clamped at the maximum
    pub fn increase(&mut self) -> usize {
        self.count = self
            .count
            .saturating_add(self.limits.step)
            .min(self.limits.max_teams);
        self.count
    }

    /// Remove one step of teams, clamped at the minimum
    pub fn decrease(&mut self) -> usize {
        self.count = self
            .count
            .saturating_sub(self.limits.step)
            .max(self.limits.min_teams);
        self.count
    }

    /// Test whether another increase would change the count
    pub const fn can_increase(&self) -> bool {
        self.count < self.limits.max_teams
    }

    /// Test whether another decrease would change the count
    pub const fn can_decrease(&self) -> bool {
        self.count > self.limits.min_teams
    }

    /// Total member slots at the current count
    pub const fn capacity(&self) -> usize {
        self.limits.capacity(self.count)
    }
}

impl Default for TeamCount {
    fn default() -> Self {
        Self {
            count: DEFAULT_TEAMS,
            limits: TeamLimits::default(),
        }
    }
}
