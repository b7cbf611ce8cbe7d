use std::collections::VecDeque;

use stockroom_catalog::{Catalog, CatalogError, ListingFormat, Position, Product};

fn init() {
    stockroom_observability::init();
}

fn render(catalog: &Catalog) -> String {
    let mut buf = Vec::new();
    catalog
        .write_listing(&mut buf, &ListingFormat::default())
        .expect("write to Vec cannot fail");
    String::from_utf8(buf).expect("listing is utf-8")
}

#[test]
fn build_report_query_sort_release() {
    init();

    let names = ["Keyboard", "Mouse", "Monitor", "Cable", "Headset"];
    let inventories = [15, 40, 4, 120, 15];
    let prices = [49.99, 19.99, 229.0, 4.5, 59.0];

    let mut catalog = Catalog::from_columns(&names, &inventories, &prices).unwrap();
    assert_eq!(catalog.len(), names.len());

    let listing = render(&catalog);
    let listed: Vec<&str> = listing.lines().collect();
    assert_eq!(listed.len(), names.len());
    for (line, name) in listed.iter().zip(names) {
        assert!(line.starts_with(&format!("  - name: {name}")), "{line}");
    }

    assert_eq!(catalog.find_max_price().unwrap().name(), "Monitor");
    // 4 * 229 = 916 edges out Headset at 15 * 59 = 885.
    assert_eq!(catalog.find_max_investment().unwrap().name(), "Monitor");

    let outcome = catalog.sort_by_inventory();
    assert!(!outcome.was_sorted());

    let order: Vec<&str> = catalog.iter().map(Product::name).collect();
    assert_eq!(order, ["Monitor", "Keyboard", "Headset", "Mouse", "Cable"]);

    assert_eq!(catalog.release(), names.len());
}

#[test]
fn positions_go_stale_after_sort() {
    init();

    let mut catalog = Catalog::from_columns(&["A", "B", "C"], &[3, 1, 2], &[9.0, 1.0, 1.0]).unwrap();
    let most_expensive = catalog.max_price_position().unwrap();
    assert_eq!(most_expensive, Position::new(0));

    catalog.sort_by_inventory();

    // The handle still resolves, but to whatever now sits at that index.
    assert_eq!(catalog.get(most_expensive).unwrap().name(), "B");
    let fresh = catalog.max_price_position().unwrap();
    assert_eq!(catalog.get(fresh).unwrap().name(), "A");
}

#[test]
fn mismatched_columns_build_nothing() {
    init();

    let err = Catalog::from_columns(&["A", "B", "C"], &[1, 2, 3], &[1.0]).unwrap_err();
    assert_eq!(err, CatalogError::length_mismatch("prices", 3, 1));
}

#[test]
fn removed_record_outlives_its_catalog() {
    init();

    let mut catalog = Catalog::from_columns(&["Keep", "Drop"], &[1, 2], &[1.0, 2.0]).unwrap();
    let kept = catalog.remove(Position::new(0)).unwrap();
    assert_eq!(catalog.release(), 1);

    assert_eq!(kept.name(), "Keep");
    kept.release();
}

#[test]
fn deque_backed_catalog_behaves_the_same() {
    init();

    let names = ["A", "B", "C"];
    let inventories = [5, 2, 1];
    let prices = [9.99, 19.99, 19.99];

    let vec_backed = Catalog::from_columns(&names, &inventories, &prices).unwrap();
    let mut deque_backed: Catalog<VecDeque<Product>> =
        Catalog::from_columns_in(&names, &inventories, &prices).unwrap();

    assert_eq!(vec_backed.max_price_position(), deque_backed.max_price_position());
    assert_eq!(deque_backed.find_max_price().unwrap().name(), "B");

    deque_backed.sort_by_inventory();
    let order: Vec<&str> = deque_backed.iter().map(Product::name).collect();
    assert_eq!(order, ["C", "B", "A"]);

    assert_eq!(deque_backed.release(), 3);
    assert_eq!(vec_backed.release(), 3);
}
