use crate::catalog::CharacterId;

/// One generated partition of the selection into teams
///
/// Members are stored as one shuffled run; team `t` owns the slots
/// `t * team_size .. (t + 1) * team_size`. Trailing teams may be short or
/// empty when fewer characters were selected than there are slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Teams {
    members: Vec<CharacterId>,
    team_count: usize,
    team_size: usize,
}

impl Teams {
    /// Wrap an already shuffled member list
    ///
    /// Members beyond the total capacity are dropped.
    pub fn new(mut members: Vec<CharacterId>, team_count: usize, team_size: usize) -> Self {
        members.truncate(team_count.saturating_mul(team_size));
        Self {
            members,
            team_count,
            team_size,
        }
    }

    /// Teams with no members
    pub const fn empty(team_count: usize, team_size: usize) -> Self {
        Self {
            members: Vec::new(),
            team_count,
            team_size,
        }
    }

    /// Every member in slot order
    pub fn members(&self) -> &[CharacterId] {
        &self.members
    }

    /// Number of teams generated
    pub const fn team_count(&self) -> usize {
        self.team_count
    }

    /// Slots per team
    pub const fn team_size(&self) -> usize {
        self.team_size
    }

    /// Number of filled slots
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Test whether no slot is filled
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members of one team, possibly fewer than `team_size`
    pub fn team(&self, index: usize) -> &[CharacterId] {
        let start = index.saturating_mul(self.team_size).min(self.members.len());
        let end = start.saturating_add(self.team_size).min(self.members.len());
        self.members.get(start..end).unwrap_or(&[])
    }

    /// Member at a slot within a team
    pub fn slot(&self, team: usize, position: usize) -> Option<CharacterId> {
        if position >= self.team_size {
            return None;
        }
        self.members
            .get(team.saturating_mul(self.team_size).saturating_add(position))
            .copied()
    }

    /// Iterate every team in order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = &[CharacterId]> + '_ {
        (0..self.team_count).map(|index| self.team(index))
    }
}
