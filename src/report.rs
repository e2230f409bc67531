use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

use crate::error::Result;
use crate::ratings::Ratings;
use crate::record::Record;

/// One ranked line of a report.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReportRow {
    pub(crate) rank: usize,
    pub(crate) brand: String,
    pub(crate) rating: f64,
}

pub(crate) type Generate = fn(&[Record]) -> Result<Vec<ReportRow>>;

/// A named report that can be selected from the command line.
pub(crate) struct ReportKind {
    pub(crate) name: &'static str,
    pub(crate) generate: Generate,
}

pub(crate) static REPORTS: &[ReportKind] = &[ReportKind {
    name: "average-rating",
    generate: average_rating,
}];

pub(crate) fn find(name: &str) -> Option<&'static ReportKind> {
    REPORTS.iter().find(|kind| kind.name == name)
}

pub(crate) fn names() -> impl Iterator<Item = &'static str> {
    REPORTS.iter().map(|kind| kind.name)
}

/// Average rating per brand, best first. Equal averages are ordered by brand.
pub(crate) fn average_rating(records: &[Record]) -> Result<Vec<ReportRow>> {
    let ratings = Ratings::from_records(records);
    let mut averages: Vec<(String, f64)> = ratings.averages().into_iter().collect();
    averages.sort_by(|(a_brand, a), (b_brand, b)| {
        descending(*a, *b).then_with(|| a_brand.cmp(b_brand))
    });
    debug!(
        "averaged {} records over {} brands",
        ratings.total(),
        averages.len()
    );

    Ok(averages
        .into_iter()
        .enumerate()
        .map(|(i, (brand, average))| ReportRow {
            rank: i + 1,
            brand,
            rating: round(average),
        })
        .collect())
}

// Highest first, NaN after everything else.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}

/// Rounds to two decimals, half away from zero, starting from the exact binary
/// value so that e.g. 2.675 (stored as 2.67499...) becomes 2.67.
fn round(value: f64) -> f64 {
    // Beyond the Decimal range, and for inf/NaN, an f64 has no hundredths left.
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::Reader;

    // Creates Records from "brand,rating" lines.
    macro_rules! records {
        ($($str:tt), *) => {{
            let mut data = String::from("brand,rating\n");
            $(
                data.push_str($str);
                data.push_str("\n");
            )*
            let mut records = Vec::new();
            let mut rdr = Reader::from_reader(data.as_bytes());
            for result in rdr.deserialize() {
                let (brand, rating): (String, f64) = result.unwrap();
                records.push(Record::new(brand, rating));
            }
            records
        }}
    }

    fn summary(rows: &[ReportRow]) -> Vec<(usize, &str, f64)> {
        rows.iter()
            .map(|row| (row.rank, row.brand.as_str(), row.rating))
            .collect()
    }

    #[test]
    fn report_sorting() {
        let rows = average_rating(&records!("Brand C,3.0", "Brand A,5.0", "Brand B,4.0")).unwrap();
        assert_eq!(
            summary(&rows),
            vec![
                (1, "Brand A", 5.0),
                (2, "Brand B", 4.0),
                (3, "Brand C", 3.0),
            ]
        );
    }

    #[test]
    fn report_indexing() {
        let rows = average_rating(&records!("Brand A,5.0", "Brand B,4.0")).unwrap();
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn rating_rounding() {
        let rows = average_rating(&records!("Brand A,4.567", "Brand B,3.333")).unwrap();
        assert_eq!(rows[0].rating, 4.57);
        assert_eq!(rows[1].rating, 3.33);
    }

    #[test]
    fn empty_report() {
        assert!(average_rating(&[]).unwrap().is_empty());
    }

    #[test]
    fn equal_averages_ordered_by_brand() {
        let rows = average_rating(&records!(
            "zeta,4.0",
            "alpha,3.0",
            "mid,4.0",
            "alpha,5.0",
            "low,1.0"
        ))
        .unwrap();
        assert_eq!(
            summary(&rows)
                .iter()
                .map(|(_, brand, _)| *brand)
                .collect::<Vec<_>>(),
            vec!["alpha", "mid", "zeta", "low"]
        );
    }

    #[test]
    fn ranks_are_contiguous_and_ratings_non_increasing() {
        let rows = average_rating(&records!(
            "a,1.5", "b,4.25", "c,3.0", "a,2.5", "d,4.9", "e,0.1", "b,4.75", "f,3.0"
        ))
        .unwrap();
        assert_eq!(rows.len(), 6);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, i + 1);
        }
        for pair in rows.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn sample_products() {
        let records = records!(
            "apple,4.9",
            "samsung,4.8",
            "xiaomi,4.6",
            "apple,4.7",
            "samsung,4.2",
            "xiaomi,4.4",
            "apple,4.1",
            "samsung,4.6",
            "xiaomi,4.1",
            "apple,4.5"
        );
        let rows = average_rating(&records).unwrap();
        assert_eq!(
            summary(&rows),
            vec![
                (1, "apple", 4.55),
                (2, "samsung", 4.53),
                (3, "xiaomi", 4.37),
            ]
        );
    }

    #[test]
    fn rounding_uses_the_stored_value() {
        let rows = average_rating(&records!("a,4.565", "b,2.675", "c,0.125")).unwrap();
        assert_eq!(summary(&rows), vec![(1, "a", 4.56), (2, "b", 2.67), (3, "c", 0.13)]);
    }

    #[test]
    fn huge_average_is_reported() {
        let rows = average_rating(&[Record::new("big", 1e29), Record::new("small", 1.0)]).unwrap();
        assert_eq!(summary(&rows), vec![(1, "big", 1e29), (2, "small", 1.0)]);
    }

    #[test]
    fn non_finite_averages() {
        let rows = average_rating(&records!(
            "nan,NaN",
            "up,inf",
            "mixed,inf",
            "mixed,-inf",
            "ok,4.0",
            "down,-inf"
        ))
        .unwrap();
        let brands: Vec<&str> = rows.iter().map(|row| row.brand.as_str()).collect();
        assert_eq!(brands, vec!["up", "ok", "down", "mixed", "nan"]);
        assert_eq!(rows[0].rating, f64::INFINITY);
        assert!(rows[4].rating.is_nan());
        assert_eq!(rows[4].rank, 5);
    }

    #[test]
    fn registry_lookup() {
        let kind = find("average-rating").unwrap();
        let rows = (kind.generate)(&records!("a,2.0")).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(find("total-sales").is_none());
        assert_eq!(names().collect::<Vec<_>>(), vec!["average-rating"]);
    }
}
