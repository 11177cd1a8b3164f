//! Integration tests for the table engine's filter guarantees, exercised
//! through the real page datasets rather than synthetic records.

use repscan::cache::FilterCache;
use repscan::dataset::{filter, to_csv, Column, FieldSelector};
use repscan::pages::{blocks, delegation, transfers, validators};

fn block_selectors() -> Vec<FieldSelector<blocks::Block>> {
    vec![
        |b: &blocks::Block| b.height.to_string(),
        |b: &blocks::Block| b.hash.clone(),
        |b: &blocks::Block| b.proposer.clone(),
    ]
}

#[test]
fn test_empty_query_is_identity() -> Result<(), Box<dyn std::error::Error>> {
    let all = blocks::records();
    let matched = filter(all, "", &block_selectors());
    assert_eq!(matched, all);

    let validators = validators::table().filter("");
    assert_eq!(validators.len(), 10);
    assert_eq!(validators, validators::records());
    Ok(())
}

#[test]
fn test_matches_contain_query_in_a_selected_field() -> Result<(), Box<dyn std::error::Error>> {
    let matched = filter(blocks::records(), "validator_0", &block_selectors());
    assert!(!matched.is_empty());
    for block in &matched {
        let hit = block.height.to_string().contains("validator_0")
            || block.hash.to_lowercase().contains("validator_0")
            || block.proposer.to_lowercase().contains("validator_0");
        assert!(hit, "block {} matched without a matching field", block.height);
    }
    Ok(())
}

#[test]
fn test_result_is_an_ordered_subsequence() -> Result<(), Box<dyn std::error::Error>> {
    let all = blocks::records();
    // 'd' appears in several hashes; the survivors must keep input order
    let matched = filter(all, "d4", &block_selectors());
    let mut cursor = all.iter();
    for hit in &matched {
        assert!(
            cursor.any(|original| original == hit),
            "match out of order or not drawn from the dataset"
        );
    }
    Ok(())
}

#[test]
fn test_filter_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let once = filter(blocks::records(), "validator", &block_selectors());
    let twice = filter(&once, "validator", &block_selectors());
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_case_insensitivity_over_real_data() -> Result<(), Box<dyn std::error::Error>> {
    let query = "0xc3d4";
    let lower = filter(blocks::records(), query, &block_selectors());
    let upper = filter(blocks::records(), &query.to_uppercase(), &block_selectors());
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].height, 102_347);
    Ok(())
}

#[test]
fn test_height_query_finds_exactly_one_block() -> Result<(), Box<dyn std::error::Error>> {
    let matched = blocks::table().filter("102347");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].height, 102_347);
    Ok(())
}

#[test]
fn test_unmatched_query_yields_header_only_csv() -> Result<(), Box<dyn std::error::Error>> {
    let table = transfers::table();
    let matched = table.filter("nonexistent");
    assert!(matched.is_empty());
    assert_eq!(table.to_csv(&matched), "Extrinsic ID,From,To,Amount,Time");
    Ok(())
}

#[test]
fn test_csv_line_count_tracks_record_count() -> Result<(), Box<dyn std::error::Error>> {
    let table = delegation::table();
    let rows = table.filter("");
    let csv = table.to_csv(&rows);
    assert_eq!(csv.split('\n').count(), rows.len() + 1);
    assert_eq!(
        csv.split('\n').next(),
        Some("Delegator,Validator,Amount,Time,Transaction")
    );
    Ok(())
}

#[test]
fn test_csv_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let columns = vec![
        Column::new("Height", |b: &blocks::Block| b.height.to_string()),
        Column::new("Proposer", |b: &blocks::Block| b.proposer.clone()),
    ];
    let first = to_csv(blocks::records(), &columns);
    let second = to_csv(blocks::records(), &columns);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_cached_filter_agrees_with_uncached() -> Result<(), Box<dyn std::error::Error>> {
    let cache = FilterCache::default();
    let table = blocks::table();

    for query in ["", "102347", "VALIDATOR", "nonexistent"] {
        let cold = table.filter_cached(&cache, query);
        let warm = table.filter_cached(&cache, query);
        assert_eq!(cold, table.filter(query), "query {:?} diverged", query);
        assert_eq!(cold, warm, "cache hit changed the result for {:?}", query);
    }
    // The three distinct non-empty lowercase keys plus the empty query
    assert_eq!(cache.len(), 4);
    Ok(())
}

#[test]
fn test_cache_shares_entries_across_query_case() -> Result<(), Box<dyn std::error::Error>> {
    let cache = FilterCache::default();
    let table = blocks::table();

    table.filter_cached(&cache, "Validator_05");
    table.filter_cached(&cache, "validator_05");
    table.filter_cached(&cache, "VALIDATOR_05");
    assert_eq!(cache.len(), 1);
    Ok(())
}
