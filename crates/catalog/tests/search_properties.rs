use foodtuck_catalog::filter_catalog;
use foodtuck_types::CatalogItem;

fn load_fixture() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Pizza", "Wood fired margherita", "Main Course", "pizza", "https://cdn/pizza.png"),
        CatalogItem::new("Burger", "Double smash patty", "Main Course", "burger", "https://cdn/burger.png"),
        CatalogItem::new("Fresh Lime", "Sparkling lime soda", "Drink", "fresh-lime", ""),
        CatalogItem::new("Chocolate Muffin", "Dark chocolate chunks", "Dessert", "chocolate-muffin", ""),
        CatalogItem::new("Crème Brûlée", "Vanilla custard", "Dessert", "creme-brulee", ""),
        CatalogItem::new("Caesar Salad", "Romaine, parmesan, croutons", "Starter", "caesar-salad", ""),
    ]
}

const QUERIES: &[&str] = &[
    "", "a", "PIZ", "zza", "main", "dessert", "chocolate", "-", "lime", "BRÛLÉE", "xyz", " ", "course", "smash",
];

fn matches(item: &CatalogItem, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&item.name, &item.description, &item.category, &item.slug]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[test]
fn results_are_exactly_the_matching_items_in_catalog_order() {
    let catalog = load_fixture();
    for &query in QUERIES.iter().filter(|query| !query.is_empty()) {
        let results = filter_catalog(&catalog, query);
        let expected: Vec<CatalogItem> = catalog.iter().filter(|item| matches(item, query)).cloned().collect();
        assert_eq!(results, expected, "query {query:?}");
    }
}

#[test]
fn empty_query_is_empty_for_any_catalog() {
    let catalog = load_fixture();
    for length in 0..=catalog.len() {
        assert!(filter_catalog(&catalog[..length], "").is_empty());
    }
}

#[test]
fn filtering_is_idempotent() {
    let catalog = load_fixture();
    for &query in QUERIES {
        assert_eq!(filter_catalog(&catalog, query), filter_catalog(&catalog, query), "query {query:?}");
    }
}

#[test]
fn unicode_case_folding_applies() {
    let catalog = load_fixture();
    let results = filter_catalog(&catalog, "BRÛLÉE");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].slug, "creme-brulee");
}

#[test]
fn scenario_pizza_and_burger() {
    let catalog = vec![
        CatalogItem::new("Pizza", "", "", "pizza", ""),
        CatalogItem::new("Burger", "", "", "burger", ""),
    ];
    assert_eq!(filter_catalog(&catalog, "piz"), vec![catalog[0].clone()]);
    assert_eq!(filter_catalog(&catalog, "zza"), vec![catalog[0].clone()]);
    assert!(filter_catalog(&catalog, "").is_empty());
}
