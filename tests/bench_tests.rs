use keysort::Algorithm;
use keysort::bench::{
    self, Outcome, Record, Workload, YEAR_SCALE, normalize_person, normalize_title,
};

const SAMPLE: &str = "\
# year\ttitle\tauthors
2021\tGenerative AI in the Classroom\tAna Garcia; Smith, John
2019\tA {Survey} of   Tutoring Systems\tJohn Smith
2021\tBayesian tutors\tWei Chen; Ana Garcia; John Smith

\tUntitled Preprint
2020\tgenerative ai in the classroom\t
";

fn records() -> Vec<Record> {
    Record::parse_all(SAMPLE).unwrap()
}

#[test]
fn test_parse_records() {
    let records = records();
    assert_eq!(records.len(), 5);

    assert_eq!(records[0].year, 2021);
    assert_eq!(records[0].authors, vec!["Ana Garcia", "Smith, John"]);
    assert_eq!(records[3].year, 0, "missing year sorts first");
    assert_eq!(records[3].title, "Untitled Preprint");
    assert!(records[4].authors.is_empty());
}

#[test]
fn test_parse_rejects_line_without_title() {
    let err = Record::parse_all("2020\n").unwrap_err();
    assert_eq!(err.to_string(), "line 1: missing title column");
}

#[test]
fn test_normalization() {
    assert_eq!(
        normalize_title("A {Survey} of   Tutoring Systems"),
        "a survey of tutoring systems"
    );
    assert_eq!(
        normalize_person("John  Ronald Smith"),
        ("Smith, John Ronald".to_string(), "smith, john ronald".to_string())
    );
    assert_eq!(
        normalize_person("Smith,John"),
        ("Smith, John".to_string(), "smith, john".to_string())
    );
    assert_eq!(
        normalize_person("Plato"),
        ("Plato".to_string(), "plato".to_string())
    );
}

#[test]
fn test_title_length_workload() {
    let workload = Workload::title_lengths(&records(), 3);
    let lengths: Vec<u64> = workload.entries.iter().map(|e| e.integer).collect();
    assert_eq!(lengths, vec![30, 32, 15]);
}

#[test]
fn test_year_title_integer_key_preserves_order() {
    let workload = Workload::year_title(&records());
    let gold = workload.gold(false);

    let years: Vec<i64> = gold.iter().map(|e| e.ordered.0).collect();
    assert_eq!(years, vec![0, 2019, 2020, 2021, 2021]);
    assert_eq!(gold[3].ordered.1, "bayesian tutors");

    for pair in gold.windows(2) {
        assert!(pair[0].integer <= pair[1].integer);
    }
    // Same normalized title in different years shares a rank.
    assert_eq!(gold[2].integer % YEAR_SCALE, gold[4].integer % YEAR_SCALE);
}

#[test]
fn test_author_count_workload() {
    let workload = Workload::author_counts(&records());
    let counts: Vec<(&str, u64)> = workload
        .entries
        .iter()
        .map(|e| (e.label.as_str(), e.integer))
        .collect();

    assert_eq!(
        counts,
        vec![("Chen, Wei", 1), ("Garcia, Ana", 2), ("Smith, John", 3)]
    );
}

#[test]
fn test_run_matches_gold_for_every_algorithm() {
    let records = bench::synthetic_records(300, 42);

    for workload in [
        Workload::title_lengths(&records, 200),
        Workload::year_title(&records),
    ] {
        for reverse in [false, true] {
            let measurements = bench::run(&workload, &Algorithm::ALL, reverse);
            assert_eq!(measurements.len(), Algorithm::ALL.len());

            for m in &measurements {
                assert!(m.outcome.is_sorted(), "{}: {}", m.algorithm, m.outcome);
                if m.algorithm.is_stable() && !reverse {
                    assert_eq!(m.outcome, Outcome::Matched, "{}", m.algorithm);
                }
            }
        }
    }
}

#[test]
fn test_title_lengths_always_match_element_for_element() {
    // Elements are the lengths themselves, so ties are indistinguishable.
    let records = bench::synthetic_records(150, 3);
    let workload = Workload::title_lengths(&records, 150);

    for m in bench::run(&workload, &Algorithm::ALL, false) {
        assert_eq!(m.outcome, Outcome::Matched, "{}", m.algorithm);
    }
}

#[test]
fn test_author_counts_report_tie_reordering() {
    let records = bench::synthetic_records(500, 11);
    let workload = Workload::author_counts(&records);
    assert!(!workload.is_empty());

    for m in bench::run(&workload, &Algorithm::ALL, false) {
        assert!(m.outcome.is_sorted(), "{}: {}", m.algorithm, m.outcome);
    }
}

#[test]
fn test_rank_orders_fastest_first() {
    let records = bench::synthetic_records(64, 5);
    let workload = Workload::year_title(&records);

    let ranking = bench::rank(bench::run(&workload, &Algorithm::ALL, false));
    assert_eq!(ranking.len(), 12);
    assert!(ranking.windows(2).all(|w| w[0].elapsed <= w[1].elapsed));
}

#[test]
fn test_synthetic_records_are_reproducible() {
    assert_eq!(
        bench::synthetic_records(50, 9),
        bench::synthetic_records(50, 9)
    );
    assert!(
        bench::synthetic_records(50, 9)
            .iter()
            .all(|r| (1990..=2025).contains(&r.year) && !r.title.is_empty())
    );
}
