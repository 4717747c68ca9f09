// tests/library_tests.rs
//
// Aggregation and predicate functions over hand-built records.

use county_query::{
    Category, Comparison, Domain, ErrorKind, POVERTY_KEY, QueryError, Record, aggregate,
    predicate,
};

const BACHELORS: &str = "Bachelor's Degree or Higher";

fn county(name: &str, state: &str, population: u64, bachelors: f64, poverty: f64) -> Record {
    Record::new(name, state, population)
        .with_education(BACHELORS, bachelors)
        .with_poverty_rate(poverty)
}

fn sample() -> Vec<Record> {
    vec![
        county("Alpha County", "CA", 100, 40.0, 10.0),
        county("Beta County", "CA", 200, 60.0, 50.0),
        county("Gamma County", "NV", 300, 70.0, 20.0),
        Record::new("Delta County", "NV", 400).with_poverty_rate(15.0),
    ]
}

fn bachelors() -> Category {
    Category::new(Domain::Education, BACHELORS)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.region_id.clone()).collect()
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_total_population() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();
    assert_eq!(aggregate::total_population(&refs), 1000);
    assert_eq!(aggregate::total_population(&[]), 0);
}

#[test]
fn test_subpopulation_skips_records_without_key() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();
    // 40 + 120 + 210, Delta has no education figures
    let value = aggregate::subpopulation(&refs, Domain::Education, BACHELORS);
    assert_close(value, 370.0);
}

#[test]
fn test_subpopulation_unknown_key_is_zero() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();
    assert_eq!(aggregate::subpopulation(&refs, Domain::Age, "Percent Under 5 Years"), 0.0);
}

#[test]
fn test_below_poverty() {
    let records = vec![
        Record::new("A", "CA", 100).with_poverty_rate(10.0),
        Record::new("B", "CA", 200).with_poverty_rate(50.0),
    ];
    let refs: Vec<&Record> = records.iter().collect();

    assert_close(aggregate::below_poverty_subpopulation(&refs), 110.0);
    assert_close(aggregate::below_poverty_percentage(&refs).unwrap(), 36.67);
}

#[test]
fn test_percentage_counts_missing_keys_in_total() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();
    // 370 of 1000
    assert_close(aggregate::percentage(&refs, Domain::Education, BACHELORS).unwrap(), 37.0);
}

#[test]
fn test_percentage_rounds_to_two_places() {
    let records = vec![Record::new("A", "CA", 3).with_poverty_rate(100.0 / 3.0)];
    let refs: Vec<&Record> = records.iter().collect();
    assert_close(aggregate::percentage(&refs, Domain::Income, POVERTY_KEY).unwrap(), 33.33);
}

#[test]
fn test_percentage_of_empty_set_divides_by_zero() {
    let err = aggregate::percentage(&[], Domain::Education, BACHELORS).unwrap_err();
    assert!(matches!(err, QueryError::DivisionByZero));
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn test_percentage_of_unpopulated_set_divides_by_zero() {
    let records = vec![Record::new("Empty County", "AK", 0).with_poverty_rate(5.0)];
    let refs: Vec<&Record> = records.iter().collect();
    assert!(matches!(
        aggregate::below_poverty_percentage(&refs),
        Err(QueryError::DivisionByZero)
    ));
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_filter_state_exact_match() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    assert_eq!(names(&predicate::filter_state(&refs, "CA")), ["Alpha County", "Beta County"]);
    assert!(predicate::filter_state(&refs, "ca").is_empty());
}

#[test]
fn test_filter_state_codes_are_exclusive() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    let california = predicate::filter_state(&refs, "CA");
    assert!(predicate::filter_state(&california, "NV").is_empty());
}

#[test]
fn test_filter_threshold_greater_than() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    let kept = predicate::filter_threshold(&refs, &bachelors(), Comparison::GreaterThan, 50.0);
    assert_eq!(names(&kept), ["Beta County", "Gamma County"]);
}

#[test]
fn test_filter_threshold_excludes_missing_key() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    // Delta has no education figure and must not pass "less than" either
    let kept = predicate::filter_threshold(&refs, &bachelors(), Comparison::LessThan, 100.0);
    assert_eq!(names(&kept), ["Alpha County", "Beta County", "Gamma County"]);
}

#[test]
fn test_filter_threshold_is_strict() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    let gt = predicate::filter_threshold(&refs, &bachelors(), Comparison::GreaterThan, 60.0);
    let lt = predicate::filter_threshold(&refs, &bachelors(), Comparison::LessThan, 60.0);
    assert_eq!(names(&gt), ["Gamma County"]);
    assert_eq!(names(&lt), ["Alpha County"]);
}

#[test]
fn test_filter_threshold_split_excludes_only_equal_values() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();
    let poverty = Category::new(Domain::Income, POVERTY_KEY);

    for threshold in [15.0, 17.5, 20.0] {
        let gt = predicate::filter_threshold(&refs, &poverty, Comparison::GreaterThan, threshold);
        let lt = predicate::filter_threshold(&refs, &poverty, Comparison::LessThan, threshold);
        let equal = refs
            .iter()
            .filter(|r| r.poverty_rate() == Some(threshold))
            .count();
        assert_eq!(gt.len() + lt.len() + equal, refs.len(), "threshold {}", threshold);
    }
}

#[test]
fn test_filter_threshold_is_idempotent() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    let once = predicate::filter_threshold(&refs, &bachelors(), Comparison::GreaterThan, 45.0);
    let twice = predicate::filter_threshold(&once, &bachelors(), Comparison::GreaterThan, 45.0);
    assert_eq!(names(&once), names(&twice));
}

#[test]
fn test_filters_preserve_store_order() {
    let records = sample();
    let refs: Vec<&Record> = records.iter().collect();

    let kept = predicate::filter_threshold(
        &refs,
        &Category::new(Domain::Income, POVERTY_KEY),
        Comparison::GreaterThan,
        12.0,
    );
    assert_eq!(names(&kept), ["Beta County", "Gamma County", "Delta County"]);
    for r in &kept {
        assert!(records.iter().any(|s| std::ptr::eq(s, *r)));
    }
}
