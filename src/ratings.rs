use std::collections::HashMap;

use crate::record::Record;

/// Running total for one brand.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct BrandRating {
    count: usize,
    sum: f64,
}

impl BrandRating {
    pub(crate) fn add(&mut self, rating: f64) {
        self.count += 1;
        self.sum += rating;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Ratings grouped by the exact `brand` value.
#[derive(Debug, Default)]
pub(crate) struct Ratings {
    inner: HashMap<String, BrandRating>,
}

impl Ratings {
    pub(crate) fn from_records(records: &[Record]) -> Self {
        let mut ratings = Self::default();
        for record in records {
            ratings
                .inner
                .entry(record.brand.clone())
                .or_default()
                .add(record.rating);
        }
        ratings
    }

    #[cfg(test)]
    pub(crate) fn get(&self, brand: &str) -> Option<&BrandRating> {
        self.inner.get(brand)
    }

    /// Number of records across all brands.
    pub(crate) fn total(&self) -> usize {
        self.inner.values().map(BrandRating::count).sum()
    }

    /// Mean rating per brand, at full precision.
    pub(crate) fn averages(&self) -> HashMap<String, f64> {
        self.inner
            .iter()
            .map(|(brand, rating)| (brand.clone(), rating.average()))
            .collect()
    }
}
