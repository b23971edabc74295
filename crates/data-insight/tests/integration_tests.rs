//! Integration tests for the insight library.
//!
//! These tests load the CSV fixtures from disk and check the analyses end to end.

use data_insight::ai::{MISSING_API_KEY_MESSAGE, SummaryFacts, generate_summary};
use data_insight::{
    AnalysisConfig, CategoryRequest, InsightError, LoadOptions, ReportGenerator, Table,
    TableAnalyzer, load_csv_bytes, load_csv_path,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> Table {
    load_csv_path(fixtures_path().join(filename), &LoadOptions::default())
        .expect("Failed to load fixture")
}

fn analyzer() -> TableAnalyzer {
    TableAnalyzer::default()
}

// ============================================================================
// Column Classification
// ============================================================================

#[test]
fn test_classification_partitions_columns() {
    let table = load_fixture("sales.csv");
    let columns = analyzer().detect_column_types(&table);

    assert_eq!(
        columns.numeric,
        vec!["order_id", "units", "revenue", "discount"]
    );
    assert_eq!(columns.categorical, vec!["region", "product"]);

    let mut all: Vec<String> = columns
        .numeric
        .iter()
        .chain(columns.categorical.iter())
        .cloned()
        .collect();
    all.sort();
    let mut names = table.column_names();
    names.sort();
    assert_eq!(all, names);
}

#[test]
fn test_text_only_table_has_no_numeric_columns() {
    let table = load_fixture("text_only.csv");
    let analyzer = analyzer();
    let columns = analyzer.detect_column_types(&table);

    assert!(columns.numeric.is_empty());
    assert_eq!(columns.categorical, vec!["name", "city"]);

    let stats = analyzer
        .compute_descriptive_stats(&table, &columns.numeric)
        .unwrap();
    assert!(stats.is_empty());
}

// ============================================================================
// Descriptive Statistics
// ============================================================================

#[test]
fn test_descriptive_stats_skip_absent_values() {
    let table = load_fixture("sales.csv");
    let stats = analyzer()
        .compute_descriptive_stats(&table, &["units", "revenue"])
        .unwrap();

    let units = stats.get("units").unwrap();
    assert_eq!(units.count, 7);
    assert_eq!(units.min, Some(1.0));
    assert_eq!(units.max, Some(6.0));
    assert!((units.mean.unwrap() - 23.0 / 7.0).abs() < 1e-9);

    let revenue = stats.get("revenue").unwrap();
    assert_eq!(revenue.count, 8);
    assert_eq!(revenue.min, Some(12.0));
    assert_eq!(revenue.max, Some(500.0));
    assert!(revenue.min <= revenue.q1 && revenue.q1 <= revenue.median);
    assert!(revenue.median <= revenue.q3 && revenue.q3 <= revenue.max);
}

#[test]
fn test_descriptive_stats_rejects_categorical_column() {
    let table = load_fixture("sales.csv");
    let err = analyzer()
        .compute_descriptive_stats(&table, &["region"])
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_COLUMN");
}

#[test]
fn test_basic_stats_match_full_stats() {
    let table = load_fixture("sales.csv");
    let analyzer = analyzer();
    let full = analyzer
        .compute_descriptive_stats(&table, &["revenue"])
        .unwrap();
    let basic = analyzer.compute_basic_stats(&table, &["revenue"]).unwrap();

    assert_eq!(basic.columns.len(), 1);
    assert_eq!(basic.columns[0].mean, full.columns[0].mean);
    assert_eq!(basic.columns[0].min, full.columns[0].min);
    assert_eq!(basic.columns[0].max, full.columns[0].max);
}

// ============================================================================
// Missing Values
// ============================================================================

#[test]
fn test_missing_summary_counts_and_order() {
    let table = load_fixture("sales.csv");
    let report = analyzer().missing_value_summary(&table).unwrap();

    let rows: Vec<(&str, usize, f64)> = report
        .entries
        .iter()
        .map(|e| (e.column.as_str(), e.missing_count, e.missing_percent))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("discount", 2, 25.0),
            ("region", 1, 12.5),
            ("units", 1, 12.5),
        ]
    );
    assert_eq!(report.total_rows, 8);
    assert_eq!(report.total_missing(), 4);
}

#[test]
fn test_missing_summary_empty_for_complete_table() {
    let table = load_fixture("ties.csv");
    let report = analyzer().missing_value_summary(&table).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_missing_percent_rounding() {
    let table = load_csv_bytes(b"x,y\n1,a\nNA,b\n2,c\n", &LoadOptions::default()).unwrap();
    let report = analyzer().missing_value_summary(&table).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].missing_count, 1);
    assert_eq!(report.entries[0].missing_percent, 33.33);
}

// ============================================================================
// Category Rankings
// ============================================================================

#[test]
fn test_revenue_by_category_ranking() {
    let table = load_fixture("sales.csv");
    let ranking = analyzer()
        .revenue_by_category(&table, "region", "revenue")
        .unwrap();

    assert_eq!(ranking.categories(), vec!["West", "North", "South", "East"]);
    assert_eq!(ranking.rows[0].total, 500.0);
    assert_eq!(ranking.rows[1].total, 120.0);
    assert_eq!(ranking.rows[2].total, 115.5);
    assert_eq!(ranking.rows[3].total, 12.0);
    // The row without a region is left out of every group.
    assert_eq!(ranking.grand_total(), 747.5);
}

#[test]
fn test_top_and_bottom_categories() {
    let table = load_fixture("sales.csv");
    let analyzer = analyzer();

    let top = analyzer
        .top_categories_by_metric(&table, "region", "revenue", 2)
        .unwrap();
    assert_eq!(top.categories(), vec!["West", "North"]);

    let bottom = analyzer
        .bottom_categories_by_metric(&table, "region", "revenue", 2)
        .unwrap();
    assert_eq!(bottom.categories(), vec!["East", "South"]);

    let everything = analyzer
        .top_categories_by_metric(&table, "region", "revenue", 50)
        .unwrap();
    assert_eq!(everything.len(), 4);
}

#[test]
fn test_category_ties_keep_first_appearance() {
    let table = load_fixture("ties.csv");
    let analyzer = analyzer();

    let top = analyzer
        .top_categories_by_metric(&table, "store", "amount", 2)
        .unwrap();
    let rows: Vec<(&str, f64)> = top
        .rows
        .iter()
        .map(|r| (r.category.as_str(), r.total))
        .collect();
    assert_eq!(rows, vec![("A", 30.0), ("B", 30.0)]);

    let bottom = analyzer
        .bottom_categories_by_metric(&table, "store", "amount", 1)
        .unwrap();
    assert_eq!(bottom.categories(), vec!["C"]);
}

#[test]
fn test_category_misuse_errors() {
    let table = load_fixture("sales.csv");
    let analyzer = analyzer();

    let err = analyzer
        .top_categories_by_metric(&table, "region", "revenue", 0)
        .unwrap_err();
    assert!(matches!(err, InsightError::InvalidArgument(_)));

    let err = analyzer
        .revenue_by_category(&table, "nope", "revenue")
        .unwrap_err();
    assert!(matches!(err, InsightError::InvalidColumn { .. }));

    let err = analyzer
        .revenue_by_category(&table, "region", "product")
        .unwrap_err();
    assert!(matches!(err, InsightError::InvalidColumn { .. }));
    assert!(err.is_misuse());
}

// ============================================================================
// Outliers
// ============================================================================

#[test]
fn test_outlier_summary_on_fixture() {
    let table = load_fixture("sales.csv");
    let report = analyzer()
        .outlier_summary(&table, &["revenue", "units"])
        .unwrap();

    assert_eq!(report.entries.len(), 2);
    let revenue = report.get("revenue").unwrap();
    assert_eq!(revenue.outlier_count, 1);
    assert_eq!(revenue.q1, Some(27.5));
    assert_eq!(revenue.q3, Some(63.875));
    assert_eq!(report.get("units").unwrap().outlier_count, 0);
}

#[test]
fn test_outlier_summary_small_and_constant_columns() {
    let csv = b"x,c\n1,5\n2,5\n3,5\n4,5\n100,5\n";
    let table = load_csv_bytes(csv, &LoadOptions::default()).unwrap();
    let report = analyzer().outlier_summary(&table, &["x", "c"]).unwrap();

    assert_eq!(report.get("x").unwrap().outlier_count, 1);
    assert_eq!(report.get("c").unwrap().outlier_count, 0);
}

#[test]
fn test_outlier_multiplier_from_config() {
    let csv = b"x\n1\n2\n3\n4\n100\n";
    let table = load_csv_bytes(csv, &LoadOptions::default()).unwrap();

    let config = AnalysisConfig::builder()
        .iqr_multiplier(100.0)
        .build()
        .unwrap();
    let report = TableAnalyzer::new(config)
        .unwrap()
        .outlier_summary(&table, &["x"])
        .unwrap();
    assert_eq!(report.total_outliers(), 0);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_header_only_file_is_empty_table() {
    let table = load_csv_bytes(b"a,b\n", &LoadOptions::default()).unwrap();
    let analyzer = analyzer();

    assert_eq!(table.shape(), (0, 2));
    assert!(analyzer.missing_value_summary(&table).unwrap().is_empty());
}

#[test]
fn test_ragged_file_fails_to_load() {
    let result = load_csv_path(fixtures_path().join("ragged.csv"), &LoadOptions::default());
    let err = result.unwrap_err();
    assert_eq!(err.error_code(), "LOAD_FAILED");
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_csv_path(fixtures_path().join("absent.csv"), &LoadOptions::default());
    assert_eq!(result.unwrap_err().error_code(), "IO_ERROR");
}

#[test]
fn test_semicolon_separator() {
    let options = LoadOptions::default().with_separator(b';');
    let table = load_csv_bytes(b"k;v\nx;1\ny;2\n", &options).unwrap();
    let columns = analyzer().detect_column_types(&table);
    assert_eq!(columns.numeric, vec!["v"]);
    assert_eq!(columns.categorical, vec!["k"]);
}

// ============================================================================
// Reports and Summaries
// ============================================================================

#[test]
fn test_full_report_on_fixture() {
    let table = load_fixture("sales.csv");
    let request = CategoryRequest::new("region", "revenue", 3);
    let report =
        ReportGenerator::build_report(&analyzer(), &table, Some("sales.csv"), Some(&request))
            .unwrap();

    assert_eq!(report.shape, (8, 6));
    assert_eq!(report.descriptive_stats.columns.len(), 4);
    assert_eq!(report.outliers.entries.len(), 4);

    let insights = report.category_insights.as_ref().unwrap();
    assert_eq!(insights.top.categories(), vec!["West", "North", "South"]);
    assert_eq!(insights.bottom.categories(), vec!["East", "South", "North"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["input_file"], "sales.csv");
    assert_eq!(json["missing_values"]["entries"][0]["column"], "discount");
}

#[test]
fn test_summary_without_provider_uses_fallback() {
    let table = load_fixture("sales.csv");
    let report = ReportGenerator::build_report(&analyzer(), &table, None, None).unwrap();
    let facts = SummaryFacts::from_report(&report);

    assert_eq!(facts.shape, (8, 6));
    assert!(facts.descriptive_stats.contains("revenue"));
    assert!(facts.missing_summary.contains("discount"));

    let text = generate_summary(None, &facts).unwrap();
    assert_eq!(text, MISSING_API_KEY_MESSAGE);
}

#[test]
fn test_analysis_does_not_modify_table() {
    let table = load_fixture("sales.csv");
    let before = table.frame().clone();
    let request = CategoryRequest::new("product", "units", 2);

    ReportGenerator::build_report(&analyzer(), &table, None, Some(&request)).unwrap();

    assert!(table.frame().equals_missing(&before));
}

#[test]
fn test_zero_row_numeric_table() {
    use polars::prelude::*;

    let table = Table::new(df!["x" => Vec::<f64>::new(), "g" => Vec::<String>::new()].unwrap());
    let analyzer = analyzer();

    let stats = analyzer.compute_descriptive_stats(&table, &["x"]).unwrap();
    assert_eq!(stats.columns.len(), 1);
    assert_eq!(stats.columns[0].count, 0);
    assert_eq!(stats.columns[0].mean, None);

    assert!(analyzer.missing_value_summary(&table).unwrap().is_empty());
    assert!(analyzer.revenue_by_category(&table, "g", "x").unwrap().is_empty());
    assert_eq!(
        analyzer.outlier_summary(&table, &["x"]).unwrap().total_outliers(),
        0
    );
}

#[test]
fn test_top_and_bottom_cover_same_set_when_n_is_large() {
    let table = load_fixture("sales.csv");
    let analyzer = analyzer();

    let mut top: Vec<String> = analyzer
        .top_categories_by_metric(&table, "product", "units", 10)
        .unwrap()
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut bottom: Vec<String> = analyzer
        .bottom_categories_by_metric(&table, "product", "units", 10)
        .unwrap()
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    top.sort();
    bottom.sort();
    assert_eq!(top, bottom);
    assert_eq!(top, vec!["Gadget", "Gizmo", "Widget"]);
}
