//! Product detail page scenarios: the selection workflow against fixture
//! products, including the zero-image and low-stock cases.

use olivo_core::PLACEHOLDER_IMAGE_URL;
use olivo_integration_tests::fixture_catalog;
use olivo_storefront::{InfoTab, SelectionDefaults, SelectionState};

fn find(name: &str) -> olivo_core::Product {
    fixture_catalog()
        .products
        .into_iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("fixture product {name} missing"))
}

#[test]
fn fresh_selection_starts_on_the_primary_image() {
    let shirt = find("Camiseta Esencial");
    let state = SelectionState::new(&shirt, &SelectionDefaults::default());

    assert_eq!(state.image_index, 0);
    assert_eq!(state.image_count(), 4);
    assert!(
        shirt
            .image_url_or_placeholder(state.image_index)
            .ends_with("-0.jpg")
    );
}

#[test]
fn duplicate_variant_labels_collapse_to_distinct_options() {
    let shirt = find("Camiseta Esencial");
    let state = SelectionState::new(&shirt, &SelectionDefaults::default());

    // Three variant rows, but only M/L and Oliva/Negro as offered options
    assert_eq!(state.sizes(), ["M".to_string(), "L".to_string()]);
    assert_eq!(state.colors(), ["Oliva".to_string(), "Negro".to_string()]);
    assert_eq!(state.size.as_deref(), Some("M"));
    assert_eq!(state.color.as_deref(), Some("Oliva"));
}

#[test]
fn three_increments_reach_stock_and_the_fourth_is_ignored() {
    let dress = find("Vestido Lino");
    assert_eq!(dress.stock, 3);

    let mut state = SelectionState::new(&dress, &SelectionDefaults::default());
    assert_eq!(state.quantity, 1);
    for _ in 0..3 {
        state = state.increment_quantity();
    }
    assert_eq!(state.quantity, 3);
    assert_eq!(state.increment_quantity().quantity, 3);
}

#[test]
fn zero_image_product_falls_back_to_the_placeholder() {
    let bag = find("Bolso Reciclado");
    assert!(bag.images.is_empty());

    let state = SelectionState::new(&bag, &SelectionDefaults::default());
    assert_eq!(state.image_index, 0);
    assert_eq!(
        bag.image_url_or_placeholder(state.image_index),
        PLACEHOLDER_IMAGE_URL
    );
}

#[test]
fn sizeless_product_still_offers_colors() {
    let bag = find("Bolso Reciclado");
    let state = SelectionState::new(&bag, &SelectionDefaults::default());
    assert_eq!(state.size, None);
    assert_eq!(state.color.as_deref(), Some("Marrón"));
}

#[test]
fn full_detail_page_interaction_flow() {
    let shirt = find("Camiseta Esencial");
    let state = SelectionState::new(&shirt, &SelectionDefaults::default())
        .select_image(2)
        .select_size("L")
        .select_color("Negro")
        .increment_quantity()
        .increment_quantity()
        .select_tab(InfoTab::Reviews);

    assert_eq!(state.image_index, 2);
    assert_eq!(state.size.as_deref(), Some("L"));
    assert_eq!(state.color.as_deref(), Some("Negro"));
    assert_eq!(state.quantity, 3);
    assert_eq!(state.info_tab, InfoTab::Reviews);

    // Invalid requests along the way never corrupt the state
    let poked = state
        .select_image(99)
        .select_size("XXL")
        .set_quantity(0)
        .set_quantity(500);
    assert_eq!(poked.image_index, 2);
    assert_eq!(poked.size.as_deref(), Some("L"));
    assert_eq!(poked.quantity, shirt.stock);
}

#[test]
fn quantity_stays_in_bounds_under_any_operation_sequence() {
    let dress = find("Vestido Lino");
    let mut state = SelectionState::new(&dress, &SelectionDefaults::default());

    let ops: [fn(&SelectionState) -> SelectionState; 6] = [
        SelectionState::increment_quantity,
        SelectionState::increment_quantity,
        SelectionState::decrement_quantity,
        |s| s.set_quantity(0),
        |s| s.set_quantity(99),
        SelectionState::decrement_quantity,
    ];
    for op in ops {
        state = op(&state);
        assert!(state.quantity >= 1);
        assert!(state.quantity <= dress.stock);
    }
}
