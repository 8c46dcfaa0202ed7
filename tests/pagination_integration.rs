//! Paging through a product catalogue

use wrapture::{assert_failure_message, assert_success, Paginate, PagedResult, Pager, Specification};

#[derive(Debug, Clone, PartialEq)]
struct Product {
    sku: String,
    price: u32,
}

fn catalogue() -> Vec<Product> {
    (1..=23)
        .map(|i| Product {
            sku: format!("SKU-{:02}", i),
            price: (i * 37) % 100,
        })
        .collect()
}

#[test]
fn walk_every_page() {
    let mut seen = Vec::new();
    let mut page_number = 1;
    loop {
        let page = catalogue().paginate(page_number, 5).into_value().unwrap();
        seen.extend(page.items.iter().map(|p| p.sku.clone()));
        if !page.pager.has_next() {
            assert_eq!(page.pager.current_page, 5);
            assert_eq!(page.items.len(), 3);
            break;
        }
        page_number += 1;
    }
    assert_eq!(seen.len(), 23);
    assert_eq!(seen.first().map(String::as_str), Some("SKU-01"));
    assert_eq!(seen.last().map(String::as_str), Some("SKU-23"));
}

#[test]
fn invalid_arguments_fail_through_guard() {
    assert_failure_message!(
        catalogue().paginate(1, 0),
        "Page size must be at least 1."
    );
    assert_failure_message!(
        catalogue().paginate(0, 0),
        "Current page must be at least 1.; Page size must be at least 1."
    );
}

#[test]
fn sorted_pagination() {
    let cheapest = catalogue()
        .paginate_by_key(1, 3, |p| p.price)
        .into_value()
        .unwrap();
    let prices: Vec<u32> = cheapest.items.iter().map(|p| p.price).collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);
    assert_eq!(cheapest.pager.total_records, 23);
}

#[test]
fn filter_then_paginate() {
    let affordable = Specification::leaf(|p: &Product| p.price < 50);
    let expected_total = catalogue().iter().filter(|p| p.price < 50).count();

    let page = affordable.filter(catalogue()).paginate(1, 4);
    assert_success!(page);
    let page = page.into_value().unwrap();
    assert_eq!(page.pager.total_records, expected_total);
    assert!(page.items.iter().all(|p| p.price < 50));
}

#[test]
fn known_total_from_separate_count() {
    // the full record set is 100 rows, only 30 were fetched
    let fetched: Vec<u32> = (1..=30).collect();
    let page = fetched.to_paged_result(100, 2, 10);
    assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
    assert_eq!(page.pager.total_pages, 10);
    assert_eq!(page.pager.end_record_index, 20);
}

#[test]
fn convert_to_view_model() {
    let page: PagedResult<Product> = catalogue().to_paged_result(23, 1, 2);
    let view = page.convert(|items| items.into_iter().map(|p| format!("{} @ {}", p.sku, p.price)));
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.pager, Pager::new(23, 1, 2));
}

#[cfg(feature = "serde")]
#[test]
fn paged_result_serializes() {
    let page = PagedResult::new(vec![1, 2], 4, 1, 2);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["items"], serde_json::json!([1, 2]));
    assert_eq!(json["pager"]["total_pages"], 2);
    assert_eq!(json["pager"]["end_record_index"], 2);

    let back: PagedResult<i32> = serde_json::from_value(json).unwrap();
    assert_eq!(back, page);
}
