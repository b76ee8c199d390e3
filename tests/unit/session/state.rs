//! Tests for session state transitions across every control

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;
    use std::time::{Duration, Instant};
    use teamroll::catalog::{Catalog, Character, Element, Gender, Rarity, Weapon};
    use teamroll::export::ClipboardSink;
    use teamroll::filter::FacetValue;
    use teamroll::io::error::clipboard_error;
    use teamroll::session::Session;
    use teamroll::teams::{TeamCount, TeamLimits, TeamShuffler};
    use teamroll::{Result, RollError};

    struct RecordingSink {
        available: bool,
        fail: bool,
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardSink for RecordingSink {
        fn is_available(&self) -> bool {
            self.available
        }

        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(clipboard_error(&"write rejected"));
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn sink(available: bool, fail: bool) -> (RecordingSink, Rc<RefCell<Vec<String>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        (
            RecordingSink {
                available,
                fail,
                writes: Rc::clone(&writes),
            },
            writes,
        )
    }

    const fn character(
        id: &'static str,
        short_name: &'static str,
        element: &'static [Element],
    ) -> Character {
        Character {
            id,
            name: id,
            short_name,
            elements: element,
            genders: &[Gender::Female],
            weapon: Weapon::Polearm,
            rarity: Rarity::Five,
        }
    }

    fn session(team_count: usize, team_size: usize) -> Session {
        let catalog = Catalog::new(vec![
            character("a", "Ay", &[Element::Pyro]),
            character("b", "Bo", &[Element::Hydro]),
            character("c", "Cy", &[Element::Pyro]),
            character("d", "Di", &[Element::Geo]),
        ])
        .unwrap_or_else(|_| unreachable!("test catalog ids are unique"));
        let limits = TeamLimits {
            min_teams: 1,
            max_teams: 5,
            step: 2,
            team_size,
        };
        let count = TeamCount::new(team_count, limits)
            .unwrap_or_else(|_| unreachable!("test team count is in bounds"));
        Session::new(catalog, count, TeamShuffler::seeded(9))
    }

    // Tests a fresh session has nothing selected, filtered or generated
    // Verified by starting with everything selected
    #[test]
    fn test_initial_state() {
        let session = session(1, 4);
        assert!(session.selection().is_empty());
        assert!(session.filters().is_unfiltered());
        assert!(session.teams().is_empty());
        assert_eq!(session.visible_characters().len(), 4);
        assert!(!session.is_copy_acknowledged(Instant::now()));
    }

    // Tests one team of four is a permutation of the full selection
    // Verified by dropping the last member
    #[test]
    fn test_full_selection_single_team() {
        let mut session = session(1, 4);
        session.select_all();
        let members: HashSet<&str> = session.generate().members().iter().copied().collect();
        assert_eq!(members, HashSet::from(["a", "b", "c", "d"]));
        assert_eq!(session.teams().len(), 4);
    }

    // Tests a small selection fills the first team partially
    // Verified by padding to capacity
    #[test]
    fn test_small_selection_leaves_empty_team() {
        let mut session = session(1, 4);
        session.increase_teams();
        session.toggle_character("a");
        session.toggle_character("b");
        session.decrease_teams();
        session.increase_teams();
        assert_eq!(session.team_count().get(), 3);

        let teams = session.generate();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams.team(0).len(), 2);
        assert!(teams.team(1).is_empty());
    }

    // Tests filters change visibility without touching the selection
    // Verified by deselecting hidden characters on filter
    #[test]
    fn test_filters_do_not_touch_selection() {
        let mut session = session(1, 4);
        session.toggle_character("b");
        assert!(session.toggle_filter(FacetValue::Element(Element::Pyro)));
        let visible: Vec<_> = session
            .visible_characters()
            .iter()
            .map(|character| character.id)
            .collect();
        assert_eq!(visible, vec!["a", "c"]);
        assert!(session.is_selected("b"));
        assert_eq!(session.selected_ids(), vec!["b"]);

        session.clear_filters();
        assert_eq!(session.visible_characters().len(), 4);
    }

    // Tests select visible only adds characters passing the filters
    // Verified by selecting the whole catalog
    #[test]
    fn test_select_visible() {
        let mut session = session(1, 4);
        session.toggle_filter(FacetValue::Element(Element::Pyro));
        assert_eq!(session.select_visible(), 2);
        assert_eq!(session.selected_ids(), vec!["a", "c"]);
        assert!(!session.is_all_selected());
    }

    // Tests the combined bulk control flips between all and none
    // Verified by always selecting
    #[test]
    fn test_toggle_all() {
        let mut session = session(1, 4);
        assert!(session.toggle_all());
        assert!(session.is_all_selected());
        assert!(!session.toggle_all());
        assert!(session.selection().is_empty());
        session.select_all();
        session.deselect_all();
        assert!(!session.is_all_selected());
    }

    // Tests unknown ids leave the selection unchanged
    // Verified by panicking on unknown ids
    #[test]
    fn test_toggle_unknown_character() {
        let mut session = session(1, 4);
        assert_eq!(session.toggle_character("zz"), None);
        assert!(session.selection().is_empty());
    }

    // Tests changing the team count keeps the previous result
    // Verified by regenerating on team count change
    #[test]
    fn test_team_count_change_keeps_result() {
        let mut session = session(1, 2);
        session.select_all();
        let before = session.generate().clone();
        session.increase_teams();
        assert_eq!(session.teams(), &before);
        assert_eq!(session.team_count().get(), 3);
    }

    // Tests generating replaces the previous result with a fresh draw
    // Verified by appending to the previous result
    #[test]
    fn test_generate_replaces_result() {
        let mut session = session(1, 4);
        session.select_all();
        session.generate();
        session.deselect_all();
        session.toggle_character("d");
        let teams = session.generate();
        assert_eq!(teams.members(), &["d"]);
    }

    // Tests copying writes the exported names and arms the acknowledgment
    // Verified by skipping the acknowledgment
    #[test]
    fn test_copy_writes_names() {
        let mut session = session(1, 4);
        session.toggle_character("c");
        session.generate();

        let (mut clipboard, writes) = sink(true, false);
        let now = Instant::now();
        assert!(session.copy_team_names(&mut clipboard, now));
        assert_eq!(writes.borrow().as_slice(), &["Cy".to_string()]);
        assert!(session.is_copy_acknowledged(now + Duration::from_millis(500)));
        assert!(!session.is_copy_acknowledged(now + Duration::from_secs(2)));
    }

    // Tests an unavailable clipboard makes copy a no-op
    // Verified by writing without probing
    #[test]
    fn test_copy_unavailable_is_noop() {
        let mut session = session(1, 4);
        session.select_all();
        session.generate();

        let (mut clipboard, writes) = sink(false, false);
        let now = Instant::now();
        assert!(!session.copy_team_names(&mut clipboard, now));
        assert!(writes.borrow().is_empty());
        assert!(!session.is_copy_acknowledged(now));
    }

    // Tests a rejected write leaves teams and selection intact
    // Verified by clearing teams on failure
    #[test]
    fn test_copy_failure_is_swallowed() {
        let mut session = session(1, 4);
        session.select_all();
        let before = session.generate().clone();

        let (mut clipboard, writes) = sink(true, true);
        assert!(session.copy_team_names(&mut clipboard, Instant::now()));
        assert!(writes.borrow().is_empty());
        assert_eq!(session.teams(), &before);
        assert!(session.is_all_selected());
    }

    // Tests the failing sink reports a clipboard error
    // Verified by returning Ok from the failing sink
    #[test]
    fn test_failing_sink_error_kind() {
        let (mut clipboard, _writes) = sink(true, true);
        assert!(matches!(
            clipboard.write_text("x"),
            Err(RollError::Clipboard { .. })
        ));
    }
}
