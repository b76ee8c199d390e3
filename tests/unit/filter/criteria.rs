//! Tests for the combined visibility predicate

#[cfg(test)]
mod tests {
    use teamroll::catalog::characters::CHARACTERS;
    use teamroll::catalog::{Catalog, Element, Gender, Rarity, Weapon};
    use teamroll::filter::{FacetValue, FilterCriteria};

    // Tests every character is visible with no active facet
    // Verified by treating empty facets as rejecting
    #[test]
    fn test_unfiltered_shows_everything() {
        let filters = FilterCriteria::new();
        assert!(filters.is_unfiltered());
        for character in CHARACTERS {
            assert!(filters.is_visible(character), "{} hidden", character.id);
        }
    }

    // Tests toggling a value twice restores visibility for every character
    // Verified by making toggle insert only
    #[test]
    fn test_double_toggle_restores_visibility() {
        let values = [
            FacetValue::Element(Element::Electro),
            FacetValue::Gender(Gender::Male),
            FacetValue::Weapon(Weapon::Catalyst),
            FacetValue::Rarity(Rarity::Four),
        ];
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Element(Element::Cryo));

        for value in values {
            let before: Vec<bool> = CHARACTERS
                .iter()
                .map(|character| filters.is_visible(character))
                .collect();
            filters.toggle(value);
            filters.toggle(value);
            let after: Vec<bool> = CHARACTERS
                .iter()
                .map(|character| filters.is_visible(character))
                .collect();
            assert_eq!(before, after, "toggling {value} twice changed visibility");
        }
    }

    // Tests facets combine with AND
    // Verified by combining facets with OR
    #[test]
    fn test_facets_combine_with_and() {
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Element(Element::Pyro));
        filters.toggle(FacetValue::Weapon(Weapon::Claymore));

        let expected = CHARACTERS
            .iter()
            .filter(|character| {
                character.elements.contains(&Element::Pyro) && character.weapon == Weapon::Claymore
            })
            .count();
        let catalog = Catalog::builtin();
        assert!(catalog.is_ok());
        if let Ok(catalog) = catalog {
            let visible: Vec<_> = filters.visible(&catalog).map(|c| c.id).collect();
            assert_eq!(visible.len(), expected);
            assert!(visible.contains(&"diluc"));
            assert!(!visible.contains(&"bennett"));
            assert!(!visible.contains(&"beidou"));
        }
    }

    // Tests values within one facet combine with OR
    // Verified by requiring all values of a facet
    #[test]
    fn test_values_within_facet_combine_with_or() {
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Weapon(Weapon::Bow));
        filters.toggle(FacetValue::Weapon(Weapon::Sword));

        let expected = CHARACTERS
            .iter()
            .filter(|character| matches!(character.weapon, Weapon::Bow | Weapon::Sword))
            .count();
        let visible = CHARACTERS
            .iter()
            .filter(|character| filters.is_visible(character))
            .count();
        assert_eq!(visible, expected);
    }

    // Tests multi-element characters match any of their elements
    // Verified by comparing only the first element
    #[test]
    fn test_multi_element_character_matches_any() {
        let traveler = CHARACTERS
            .iter()
            .find(|character| character.id == "traveler");
        assert!(traveler.is_some());
        if let Some(traveler) = traveler {
            let mut filters = FilterCriteria::new();
            filters.toggle(FacetValue::Element(Element::Dendro));
            assert!(filters.is_visible(traveler));
            filters.toggle(FacetValue::Element(Element::Dendro));
            filters.toggle(FacetValue::Element(Element::Pyro));
            assert!(!filters.is_visible(traveler));
        }
    }

    // Tests rarity filtering on the scalar tier
    // Verified by ignoring the rarity facet
    #[test]
    fn test_rarity_filter() {
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Rarity(Rarity::Four));
        for character in CHARACTERS {
            assert_eq!(
                filters.is_visible(character),
                character.rarity == Rarity::Four
            );
        }
    }

    // Tests active values are reported and cleared
    // Verified by leaving one facet active after clear
    #[test]
    fn test_active_values_and_clear() {
        let mut filters = FilterCriteria::new();
        filters.toggle(FacetValue::Rarity(Rarity::Five));
        filters.toggle(FacetValue::Element(Element::Geo));
        assert_eq!(
            filters.active_values(),
            vec![
                FacetValue::Element(Element::Geo),
                FacetValue::Rarity(Rarity::Five)
            ]
        );
        assert!(filters.is_active(FacetValue::Element(Element::Geo)));
        assert!(!filters.is_unfiltered());

        filters.clear();
        assert!(filters.is_unfiltered());
        assert!(filters.active_values().is_empty());
    }
}
