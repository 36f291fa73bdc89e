//! Benchmark harness support.
//!
//! Turns bibliographic records into workloads, sorts each workload with every
//! algorithm while timing it, and checks the output against a gold ordering
//! produced by the standard library's stable sort.

use crate::catalog::Algorithm;
use crate::error::SortError;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Multiplier that keeps the year above any title rank in the composite integer key.
pub const YEAR_SCALE: u64 = 1_000_000;

/// Default number of title lengths measured by the title-length workload.
pub const DEFAULT_SAMPLE: usize = 500;

/// Failure while loading harness input.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One bibliographic record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Publication year; 0 when missing or unparsable, which sorts it first.
    pub year: u32,
    pub title: String,
    pub authors: Vec<String>,
}

impl Record {
    /// Parses `year<TAB>title<TAB>author; author; ...`.
    ///
    /// The author column is optional. `line` is only used in error messages.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, BenchError> {
        let mut columns = text.split('\t');
        let year = columns
            .next()
            .map(|y| y.trim().parse().unwrap_or(0))
            .unwrap_or(0);
        let title = columns
            .next()
            .map(|t| t.trim().to_string())
            .ok_or(BenchError::MalformedLine {
                line,
                reason: "missing title column",
            })?;
        let authors = columns
            .next()
            .map(|a| {
                a.split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Record {
            year,
            title,
            authors,
        })
    }

    /// Parses every non-blank line of `text`. Lines starting with `#` are comments.
    pub fn parse_all(text: &str) -> Result<Vec<Self>, BenchError> {
        text.lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty() && !l.starts_with('#'))
            .map(|(i, l)| Record::parse_line(l, i + 1))
            .collect()
    }
}

/// Lower-cases a title, drops braces and collapses whitespace.
pub fn normalize_title(title: &str) -> String {
    title
        .replace(['{', '}'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalises an author name to `(display, key)`.
///
/// `"Last, First"` is kept as is; `"First Middle Last"` becomes
/// `"Last, First Middle"`. The key is the lower-cased display form and is what
/// appearances are counted by.
pub fn normalize_person(name: &str) -> (String, String) {
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    let display = match name.split_once(',') {
        Some((last, first)) => {
            let (last, first) = (last.trim(), first.trim());
            if first.is_empty() {
                last.to_string()
            } else {
                format!("{last}, {first}")
            }
        }
        None => match name.rsplit_once(' ') {
            Some((first, last)) => format!("{last}, {first}"),
            None => name.clone(),
        },
    };

    let key = display.to_lowercase();
    (display, key)
}

/// An element of a workload, carrying both of its keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    /// Key used by the comparison sorts and the gold ordering.
    pub ordered: (i64, String),
    /// Order-preserving integer encoding of `ordered`, used by the distribution sorts.
    pub integer: u64,
}

/// A named sequence of entries to benchmark.
#[derive(Clone, Debug)]
pub struct Workload {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Workload {
    /// The lengths (in characters) of the first `sample` non-empty titles.
    pub fn title_lengths(records: &[Record], sample: usize) -> Self {
        let entries = records
            .iter()
            .map(|r| r.title.chars().count())
            .filter(|&len| len > 0)
            .take(sample)
            .map(|len| Entry {
                label: len.to_string(),
                ordered: (len as i64, String::new()),
                integer: len as u64,
            })
            .collect();

        Workload {
            name: "title-length".to_string(),
            entries,
        }
    }

    /// Records ordered by `(year, normalized title)`.
    ///
    /// The integer key is `year * YEAR_SCALE + rank`, where `rank` is the title's
    /// position among the distinct normalized titles in lexicographic order.
    pub fn year_title(records: &[Record]) -> Self {
        let normalized: Vec<String> = records.iter().map(|r| normalize_title(&r.title)).collect();
        let ranks: HashMap<&str, u64> = normalized
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(rank, title)| (title, rank as u64))
            .collect();

        let entries = records
            .iter()
            .zip(&normalized)
            .map(|(r, title)| Entry {
                label: format!("{} {}", r.year, r.title),
                ordered: (i64::from(r.year), title.clone()),
                integer: u64::from(r.year) * YEAR_SCALE + ranks[title.as_str()],
            })
            .collect();

        Workload {
            name: "year-title".to_string(),
            entries,
        }
    }

    /// One entry per distinct author, keyed by how many records list them.
    ///
    /// Entries start in alphabetical order of the author key.
    pub fn author_counts(records: &[Record]) -> Self {
        let mut counts: BTreeMap<String, (String, u64)> = BTreeMap::new();
        for author in records.iter().flat_map(|r| &r.authors) {
            let (display, key) = normalize_person(author);
            if key.is_empty() {
                continue;
            }
            counts.entry(key).or_insert((display, 0)).1 += 1;
        }

        let entries = counts
            .into_values()
            .map(|(display, count)| Entry {
                label: display,
                ordered: (count as i64, String::new()),
                integer: count,
            })
            .collect();

        Workload {
            name: "author-count".to_string(),
            entries,
        }
    }

    /// The reference ordering: a stable std sort on the ordered key.
    pub fn gold(&self, reverse: bool) -> Vec<Entry> {
        let mut gold = self.entries.clone();
        gold.sort_by(|a, b| a.ordered.cmp(&b.ordered));
        if reverse {
            gold.reverse();
        }
        gold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How an algorithm's output compared with the gold ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Element-for-element equal to gold.
    Matched,
    /// Same key sequence as gold, but tied elements arranged differently.
    KeysMatched,
    /// Wrong key order.
    Mismatched,
    /// The algorithm rejected the input.
    Failed(SortError),
}

impl Outcome {
    /// `true` when the output is correctly ordered.
    pub fn is_sorted(&self) -> bool {
        matches!(self, Outcome::Matched | Outcome::KeysMatched)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Matched => f.write_str("ok"),
            Outcome::KeysMatched => f.write_str("ok (ties reordered)"),
            Outcome::Mismatched => f.write_str("WRONG ORDER"),
            Outcome::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// The result of timing one algorithm on one workload.
#[derive(Clone, Debug)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub outcome: Outcome,
}

/// Sorts `workload` with each of `algorithms`, timing every call.
pub fn run(workload: &Workload, algorithms: &[Algorithm], reverse: bool) -> Vec<Measurement> {
    let gold = workload.gold(reverse);
    debug!("{}: gold ordering built for {} entries", workload.name, gold.len());

    algorithms
        .iter()
        .map(|&algorithm| {
            let start = Instant::now();
            let result = algorithm.sort_with_keys(
                &workload.entries,
                |e| e.ordered.clone(),
                |e| e.integer,
                reverse,
            );
            let elapsed = start.elapsed();

            let outcome = match result {
                Ok(sorted) => compare(&sorted, &gold),
                Err(e) => Outcome::Failed(e),
            };
            info!(
                "{}: {:<22} {:>12.6}s  {}",
                workload.name,
                algorithm.name(),
                elapsed.as_secs_f64(),
                outcome
            );

            Measurement {
                algorithm,
                elapsed,
                outcome,
            }
        })
        .collect()
}

fn compare(sorted: &[Entry], gold: &[Entry]) -> Outcome {
    if sorted == gold {
        Outcome::Matched
    } else if sorted.len() == gold.len()
        && sorted.iter().zip(gold).all(|(a, b)| a.ordered == b.ordered)
    {
        Outcome::KeysMatched
    } else {
        Outcome::Mismatched
    }
}

/// Orders measurements fastest first.
pub fn rank(mut measurements: Vec<Measurement>) -> Vec<Measurement> {
    measurements.sort_by_key(|m| m.elapsed);
    measurements
}

const TITLE_WORDS: &[&str] = &[
    "generative", "artificial", "intelligence", "learning", "models", "education", "neural",
    "language", "large", "survey", "analysis", "systems", "ethics", "computing", "transformer",
    "assessment", "students", "creative", "design", "evaluation",
];

const GIVEN_NAMES: &[&str] = &[
    "Ana", "Luis", "Maria", "John", "Wei", "Fatima", "Carlos", "Elena", "Kenji", "Sofia",
];

const FAMILY_NAMES: &[&str] = &[
    "Garcia", "Smith", "Chen", "Okafor", "Rossi", "Tanaka", "Silva", "Novak", "Haddad", "Lopez",
    "Kim", "Muller",
];

/// Reproducible synthetic records for running the harness without input data.
pub fn synthetic_records(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let words = rng.random_range(3..12);
            let title = (0..words)
                .filter_map(|_| TITLE_WORDS.choose(&mut rng).copied())
                .collect::<Vec<_>>()
                .join(" ");
            let authors = (0..rng.random_range(1..5))
                .filter_map(|_| {
                    let given = GIVEN_NAMES.choose(&mut rng)?;
                    let family = FAMILY_NAMES.choose(&mut rng)?;
                    Some(format!("{given} {family}"))
                })
                .collect();

            Record {
                year: rng.random_range(1990..=2025),
                title,
                authors,
            }
        })
        .collect()
}
