use std::collections::HashMap;

pub(crate) const BRAND: &str = "brand";
pub(crate) const RATING: &str = "rating";

/// A single product row. `rating` is the only numeric column; every other
/// column except `brand` is kept as text in `fields`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    pub(crate) brand: String,
    pub(crate) rating: f64,
    pub(crate) fields: HashMap<String, String>,
}

impl Record {
    pub(crate) fn new(brand: impl Into<String>, rating: f64) -> Self {
        Self {
            brand: brand.into(),
            rating,
            fields: HashMap::new(),
        }
    }

    pub(crate) fn with_fields(mut self, fields: HashMap<String, String>) -> Self {
        self.fields = fields;
        self
    }
}
