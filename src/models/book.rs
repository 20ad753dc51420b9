use serde::{Deserialize, Serialize};

/// One catalog entry as served by the books API.
///
/// `price` is expressed in the smallest currency unit. `Book::default()` is the
/// zero-valued record returned by metrics that have no element to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub author: String,
    pub units_sold: u64,
    pub price: u64,
}

impl Book {
    pub fn new(id: u64, name: &str, author: &str, units_sold: u64, price: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            author: author.to_string(),
            units_sold,
            price,
        }
    }

    /// A record missing its identifier or name. Such records are still served.
    pub fn is_incomplete(&self) -> bool {
        self.id == 0 || self.name.is_empty()
    }
}
