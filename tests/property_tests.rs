//! Property-based tests for the specification filter.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated catalogs.

use proptest::prelude::*;
use solid::core::{
    filter, AlwaysFalse, AlwaysTrue, AndSpecification, OrSpecification, Specification,
    SpecificationExt,
};
use solid::open_closed::{Color, ColorSpecification, Product, Size, SizeSpecification};

prop_compose! {
    fn arbitrary_color()(variant in 0..6u8) -> Color {
        match variant {
            0 => Color::Red,
            1 => Color::Green,
            2 => Color::Blue,
            3 => Color::Orange,
            4 => Color::White,
            _ => Color::Yellow,
        }
    }
}

prop_compose! {
    fn arbitrary_size()(variant in 0..4u8) -> Size {
        match variant {
            0 => Size::Small,
            1 => Size::Medium,
            2 => Size::Large,
            _ => Size::Huge,
        }
    }
}

prop_compose! {
    fn arbitrary_product()(
        name in "[a-z]{1,8}",
        color in arbitrary_color(),
        size in arbitrary_size()
    ) -> Product {
        Product::new(name, color, size)
    }
}

fn arbitrary_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arbitrary_product(), 0..20)
}

/// Positions of `selected` within `items`, by identity.
fn positions(items: &[Product], selected: &[&Product]) -> Vec<usize> {
    selected
        .iter()
        .map(|s| {
            items
                .iter()
                .position(|i| std::ptr::eq(i, *s))
                .expect("filtered item must come from the input")
        })
        .collect()
}

proptest! {
    #[test]
    fn filter_is_an_order_preserving_subsequence(
        items in arbitrary_catalog(),
        color in arbitrary_color()
    ) {
        let found = filter(&items, &ColorSpecification::new(color));
        let indices = positions(&items, &found);

        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filter_contains_exactly_the_satisfying_items(
        items in arbitrary_catalog(),
        size in arbitrary_size()
    ) {
        let spec = SizeSpecification::new(size);
        let found = filter(&items, &spec);
        let expected: Vec<&Product> = items.iter().filter(|p| spec.is_satisfied(p)).collect();

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn conjunction_equals_successive_filtering(
        items in arbitrary_catalog(),
        color in arbitrary_color(),
        size in arbitrary_size()
    ) {
        let by_color = ColorSpecification::new(color);
        let by_size = SizeSpecification::new(size);

        let combined = filter(&items, &AndSpecification::new(by_color.clone(), by_size.clone()));

        let first_pass: Vec<Product> = filter(&items, &by_color).into_iter().cloned().collect();
        let second_pass: Vec<Product> = filter(&first_pass, &by_size).into_iter().cloned().collect();
        let combined: Vec<Product> = combined.into_iter().cloned().collect();

        prop_assert_eq!(combined, second_pass);
    }

    #[test]
    fn conjunction_is_commutative(
        items in arbitrary_catalog(),
        color in arbitrary_color(),
        size in arbitrary_size()
    ) {
        let ab = AndSpecification::new(ColorSpecification::new(color), SizeSpecification::new(size));
        let ba = AndSpecification::new(SizeSpecification::new(size), ColorSpecification::new(color));

        prop_assert_eq!(filter(&items, &ab), filter(&items, &ba));
    }

    #[test]
    fn always_false_selects_nothing(items in arbitrary_catalog()) {
        prop_assert!(filter(&items, &AlwaysFalse).is_empty());
    }

    #[test]
    fn always_true_selects_everything(items in arbitrary_catalog()) {
        prop_assert_eq!(filter(&items, &AlwaysTrue).len(), items.len());
    }

    #[test]
    fn empty_input_selects_nothing(color in arbitrary_color(), size in arbitrary_size()) {
        let items: Vec<Product> = Vec::new();
        let spec = ColorSpecification::new(color).and(SizeSpecification::new(size));

        prop_assert!(filter(&items, &spec).is_empty());
    }

    #[test]
    fn filter_is_repeatable_and_non_mutating(
        items in arbitrary_catalog(),
        color in arbitrary_color()
    ) {
        let before = items.clone();
        let spec = ColorSpecification::new(color);

        let first = filter(&items, &spec);
        let second = filter(&items, &spec);

        prop_assert_eq!(first, second);
        prop_assert_eq!(&items, &before);
    }

    #[test]
    fn disjunction_is_union_of_filters(
        items in arbitrary_catalog(),
        color in arbitrary_color(),
        size in arbitrary_size()
    ) {
        let by_color = ColorSpecification::new(color);
        let by_size = SizeSpecification::new(size);
        let either = OrSpecification::new(by_color.clone(), by_size.clone());

        let found = filter(&items, &either);
        let expected: Vec<&Product> = items
            .iter()
            .filter(|p| by_color.is_satisfied(p) || by_size.is_satisfied(p))
            .collect();

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn check_agrees_with_is_satisfied(
        product in arbitrary_product(),
        color in arbitrary_color(),
        size in arbitrary_size()
    ) {
        let spec = ColorSpecification::new(color).and(SizeSpecification::new(size).not());

        prop_assert_eq!(spec.check(&product).is_success(), spec.is_satisfied(&product));
    }

    #[test]
    fn product_roundtrip_serialization(product in arbitrary_product()) {
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(product, deserialized);
    }
}

#[test]
fn green_and_small_scenario_selects_items_one_and_five() {
    let items = vec![
        Product::new("one", Color::Green, Size::Small),
        Product::new("two", Color::Orange, Size::Medium),
        Product::new("three", Color::White, Size::Small),
        Product::new("four", Color::Orange, Size::Large),
        Product::new("five", Color::Green, Size::Small),
        Product::new("six", Color::Yellow, Size::Large),
    ];
    let spec = AndSpecification::new(
        ColorSpecification::new(Color::Green),
        SizeSpecification::new(Size::Small),
    );

    let found = filter(&items, &spec);

    assert_eq!(positions(&items, &found), vec![0, 4]);
    assert_eq!(found[0].name(), "one");
    assert_eq!(found[1].name(), "five");
}
