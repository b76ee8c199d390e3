use crate::catalog::{Catalog, CharacterId};
use crate::io::configuration::NAME_SEPARATOR;

/// Join the short names of the given characters for copying
///
/// Ids missing from the catalog are skipped without a placeholder. Returns an
/// empty string when nothing resolves.
pub fn format_team_names(members: &[CharacterId], catalog: &Catalog) -> String {
    members
        .iter()
        .filter_map(|id| catalog.find(id))
        .map(|character| character.short_name)
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}
