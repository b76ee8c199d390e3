//! Tests for selection toggling and bulk select/deselect

#[cfg(test)]
mod tests {
    use teamroll::catalog::{Catalog, Character, Element, Gender, Rarity, Weapon};
    use teamroll::filter::{FacetValue, FilterCriteria};
    use teamroll::selection::SelectionStore;

    const fn character(id: &'static str, element: &'static [Element]) -> Character {
        Character {
            id,
            name: id,
            short_name: id,
            elements: element,
            genders: &[Gender::Male],
            weapon: Weapon::Sword,
            rarity: Rarity::Five,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            character("a", &[Element::Pyro]),
            character("b", &[Element::Hydro]),
            character("c", &[Element::Pyro]),
            character("d", &[Element::Geo]),
        ])
        .unwrap_or_else(|_| unreachable!("test catalog ids are unique"))
    }

    // Tests toggle adds then removes a character
    // Verified by making toggle always select
    #[test]
    fn test_toggle_character() {
        let catalog = catalog();
        let mut selection = SelectionStore::new(&catalog);
        assert_eq!(selection.toggle(&catalog, "b"), Some(true));
        assert!(selection.contains(&catalog, "b"));
        assert_eq!(selection.toggle(&catalog, "b"), Some(false));
        assert!(selection.is_empty());
    }

    // Tests unknown identifiers are harmless
    // Verified by inserting unknown ids at position 0
    #[test]
    fn test_unknown_id_is_noop() {
        let catalog = catalog();
        let mut selection = SelectionStore::new(&catalog);
        assert_eq!(selection.toggle(&catalog, "zz"), None);
        assert!(selection.is_empty());
        assert!(!selection.contains(&catalog, "zz"));
    }

    // Tests select all and deselect all drive the all-selected flag
    // Verified by comparing against the visible count
    #[test]
    fn test_select_and_deselect_all() {
        let catalog = catalog();
        let mut selection = SelectionStore::new(&catalog);
        selection.select_all();
        assert!(selection.is_all_selected());
        assert_eq!(selection.len(), 4);
        selection.deselect_all();
        assert!(!selection.is_all_selected());
        assert!(selection.is_empty());
    }

    // Tests the combined control selects unless everything is selected
    // Verified by inverting the all-selected check
    #[test]
    fn test_toggle_all() {
        let catalog = catalog();
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle(&catalog, "a");
        assert!(selection.toggle_all());
        assert!(selection.is_all_selected());
        assert!(!selection.toggle_all());
        assert!(selection.is_empty());
    }

    // Tests bulk selection ignores visibility filters
    // Verified by selecting only visible characters in select_all
    #[test]
    fn test_select_all_ignores_filters() {
        let catalog = catalog();
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Element(Element::Pyro));

        let mut selection = SelectionStore::new(&catalog);
        selection.select_all();
        assert_eq!(selection.len(), catalog.len());
        assert!(selection.contains(&catalog, "d"));
    }

    // Tests select_visible adds visible characters and keeps hidden picks
    // Verified by clearing the selection first
    #[test]
    fn test_select_visible() {
        let catalog = catalog();
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Element(Element::Pyro));

        let mut selection = SelectionStore::new(&catalog);
        selection.toggle(&catalog, "d");
        selection.toggle(&catalog, "a");
        assert_eq!(selection.select_visible(&catalog, &filters), 1);
        assert_eq!(selection.ids(&catalog), vec!["a", "c", "d"]);
        assert_eq!(selection.select_visible(&catalog, &filters), 0);
    }

    // Tests selected ids come back in catalog order
    // Verified by returning ids in toggle order
    #[test]
    fn test_ids_in_catalog_order() {
        let catalog = catalog();
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle(&catalog, "d");
        selection.toggle(&catalog, "b");
        assert_eq!(selection.ids(&catalog), vec!["b", "d"]);
    }
}
