//! Sort configuration and the ordering used by every management table.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Active sort key and direction. Both fields move together:
/// `key == None` means the input order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: Option<SortDirection>,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction: Some(direction),
        }
    }

    /// Header click semantics: same key flips the direction, a new key
    /// starts ascending, `None` clears sorting.
    pub fn sort_by(&mut self, key: Option<&str>) {
        match key {
            None => {
                self.key = None;
                self.direction = None;
            }
            Some(key) if self.key.as_deref() == Some(key) => {
                self.direction = Some(
                    self.direction
                        .map(SortDirection::toggled)
                        .unwrap_or(SortDirection::Asc),
                );
            }
            Some(key) => {
                self.key = Some(key.to_string());
                self.direction = Some(SortDirection::Asc);
            }
        }
    }

    /// Direction applied to `key`, or `None` when the table is sorted by
    /// something else.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        if self.key.as_deref() == Some(key) {
            Some(self.direction.unwrap_or(SortDirection::Asc))
        } else {
            None
        }
    }

    pub fn active(&self) -> Option<(&str, SortDirection)> {
        self.key
            .as_deref()
            .map(|key| (key, self.direction.unwrap_or(SortDirection::Asc)))
    }
}

/// A single cell value as seen by the comparator.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl SortValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }
}

/// Record types rendered in a sortable table expose their columns by key.
/// Unknown keys return [`SortValue::Missing`].
pub trait Sortable {
    fn sort_value(&self, key: &str) -> SortValue;
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<i32> for SortValue {
    fn from(value: i32) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u8> for SortValue {
    fn from(value: u8) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<&String> for SortValue {
    fn from(value: &String) -> Self {
        SortValue::Text(value.clone())
    }
}

impl From<NaiveDateTime> for SortValue {
    fn from(value: NaiveDateTime) -> Self {
        SortValue::Date(value)
    }
}

impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> Self {
        SortValue::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Missing)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// RFC 3339 instants are normalized to UTC; naive forms are taken as-is.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
}

/// Comparable form of a present value. Each value is classified once, so
/// numbers sort before dates, dates before text and text before booleans,
/// whatever the other side of a comparison looks like.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
    Bool(bool),
}

impl SortKey {
    fn of(value: &SortValue) -> Option<Self> {
        match value {
            SortValue::Missing => None,
            SortValue::Bool(b) => Some(SortKey::Bool(*b)),
            SortValue::Number(n) => Some(SortKey::Number(*n)),
            SortValue::Date(d) => Some(SortKey::Date(*d)),
            SortValue::Text(s) => Some(if let Some(n) = parse_number(s) {
                SortKey::Number(n)
            } else if let Some(d) = parse_date(s) {
                SortKey::Date(d)
            } else {
                SortKey::Text(s.to_lowercase())
            }),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Bool(_) => 3,
        }
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
            (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = a.natural_cmp(b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

/// Missing values go last in both directions; everything else follows
/// the natural order, reversed for `Desc`.
pub fn compare_values(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    compare_keys(SortKey::of(a).as_ref(), SortKey::of(b).as_ref(), direction)
}

pub fn compare<T: Sortable>(a: &T, b: &T, key: &str, direction: SortDirection) -> Ordering {
    compare_values(&a.sort_value(key), &b.sort_value(key), direction)
}

/// Returns a sorted copy of `items`. The sort is stable, so rows with equal
/// keys keep their input order. Without an active key the copy is unchanged.
pub fn sort_items<T: Sortable + Clone>(items: &[T], config: &SortConfig) -> Vec<T> {
    let Some((key, direction)) = config.active() else {
        return items.to_vec();
    };

    let mut keyed: Vec<(Option<SortKey>, &T)> = items
        .iter()
        .map(|item| (SortKey::of(&item.sort_value(key)), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), direction));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: Option<&'static str>,
        group: i64,
        created_at: &'static str,
    }

    impl Sortable for Row {
        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "name" => self.name.into(),
                "price" => self.price.into(),
                "group" => self.group.into(),
                "created_at" => self.created_at.into(),
                _ => SortValue::Missing,
            }
        }
    }

    fn row(name: &'static str, price: Option<&'static str>, group: i64) -> Row {
        Row {
            name,
            price,
            group,
            created_at: "2024-01-01",
        }
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_sort_by_cycles_direction() {
        let mut config = SortConfig::default();
        config.sort_by(Some("price"));
        assert_eq!(config.direction_for("price"), Some(SortDirection::Asc));
        config.sort_by(Some("price"));
        assert_eq!(config.direction_for("price"), Some(SortDirection::Desc));
        config.sort_by(Some("price"));
        assert_eq!(config.direction_for("price"), Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_by_new_key_resets_to_ascending() {
        let mut config = SortConfig::new("price", SortDirection::Desc);
        config.sort_by(Some("name"));
        assert_eq!(config.key.as_deref(), Some("name"));
        assert_eq!(config.direction, Some(SortDirection::Asc));
        assert_eq!(config.direction_for("price"), None);
    }

    #[test]
    fn test_sort_by_none_clears() {
        let mut config = SortConfig::new("price", SortDirection::Asc);
        config.sort_by(None);
        assert_eq!(config, SortConfig::default());
        assert!(config.active().is_none());
    }

    #[test]
    fn test_numeric_strings_with_missing_last() {
        let rows = vec![
            row("a", Some("10.50"), 0),
            row("b", Some("2.00"), 0),
            row("c", None, 0),
            row("d", Some("7"), 0),
        ];
        let asc = sort_items(&rows, &SortConfig::new("price", SortDirection::Asc));
        let prices: Vec<_> = asc.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![Some("2.00"), Some("7"), Some("10.50"), None]);

        let desc = sort_items(&rows, &SortConfig::new("price", SortDirection::Desc));
        let prices: Vec<_> = desc.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![Some("10.50"), Some("7"), Some("2.00"), None]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let rows = vec![row("banana", None, 0), row("Apple", None, 0), row("cherry", None, 0)];
        let sorted = sort_items(&rows, &SortConfig::new("name", SortDirection::Asc));
        assert_eq!(names(&sorted), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_numbers_sort_before_text() {
        let rows = vec![row("x", Some("abc"), 0), row("y", Some("10"), 0), row("z", Some("9"), 0)];
        let sorted = sort_items(&rows, &SortConfig::new("price", SortDirection::Asc));
        // numbers first, then text
        assert_eq!(names(&sorted), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let mut a = row("a", None, 0);
        a.created_at = "2024-03-01T10:00:00+03:00";
        let mut b = row("b", None, 0);
        b.created_at = "2024-03-01T08:30:00Z";
        let mut c = row("c", None, 0);
        c.created_at = "2024-02-28";
        let sorted = sort_items(&[a, b, c], &SortConfig::new("created_at", SortDirection::Asc));
        // a is 07:00 UTC, before b at 08:30 UTC
        assert_eq!(names(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            row("first", None, 2),
            row("second", None, 1),
            row("third", None, 2),
            row("fourth", None, 1),
        ];
        let asc = sort_items(&rows, &SortConfig::new("group", SortDirection::Asc));
        assert_eq!(names(&asc), vec!["second", "fourth", "first", "third"]);
        let desc = sort_items(&rows, &SortConfig::new("group", SortDirection::Desc));
        assert_eq!(names(&desc), vec!["first", "third", "second", "fourth"]);
    }

    #[test]
    fn test_unknown_key_preserves_order() {
        let rows = vec![row("b", None, 0), row("a", None, 0), row("c", None, 0)];
        let sorted = sort_items(&rows, &SortConfig::new("no_such_column", SortDirection::Desc));
        assert_eq!(names(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let rows = vec![row("b", None, 0), row("a", None, 0)];
        let before = rows.clone();
        let _ = sort_items(&rows, &SortConfig::new("name", SortDirection::Asc));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_mixed_strings_order_is_transitive() {
        let ten = SortValue::from("10");
        let one_a = SortValue::from("1a");
        let nine = SortValue::from("9");
        assert_eq!(compare_values(&nine, &ten, SortDirection::Asc), Ordering::Less);
        assert_eq!(compare_values(&ten, &one_a, SortDirection::Asc), Ordering::Less);
        assert_eq!(compare_values(&nine, &one_a, SortDirection::Asc), Ordering::Less);

        let year = SortValue::from("2024");
        let day = SortValue::from("2024-01-01");
        let word = SortValue::from("alpha");
        assert_eq!(compare_values(&year, &day, SortDirection::Asc), Ordering::Less);
        assert_eq!(compare_values(&day, &word, SortDirection::Asc), Ordering::Less);
        assert_eq!(compare_values(&year, &word, SortDirection::Asc), Ordering::Less);
    }

    #[derive(Debug, Clone)]
    struct Cell {
        position: usize,
        value: String,
    }

    impl Sortable for Cell {
        fn sort_value(&self, _key: &str) -> SortValue {
            (&self.value).into()
        }
    }

    fn mixed_cells(count: usize) -> Vec<Cell> {
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        (0..count)
            .map(|position| {
                seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let n = (seed >> 33) % 40;
                let value = match (seed >> 20) % 6 {
                    0 => n.to_string(),
                    1 => format!("{n}x"),
                    2 => format!("{n}/10"),
                    3 => format!("2024-01-{:02}", n % 28 + 1),
                    4 => format!("SKU-{n}"),
                    _ => format!("{}.5", n),
                };
                Cell { position, value }
            })
            .collect()
    }

    #[test]
    fn test_large_mixed_column_sorts_consistently() {
        let cells = mixed_cells(400);
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_items(&cells, &SortConfig::new("value", direction));
            assert_eq!(sorted.len(), cells.len());
            for pair in sorted.windows(2) {
                let ord = compare(&pair[0], &pair[1], "value", direction);
                assert_ne!(ord, Ordering::Greater, "{:?} before {:?}", pair[0], pair[1]);
                if ord == Ordering::Equal {
                    assert!(pair[0].position < pair[1].position);
                }
            }
        }
    }

    #[test]
    fn test_nan_and_infinity_text_is_not_numeric() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
    }
}
