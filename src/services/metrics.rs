use crate::models::book::Book;

/// Floor of the average `units_sold`; 0 for an empty collection.
pub fn mean_units_sold(books: &[Book]) -> u64 {
    if books.is_empty() {
        return 0;
    }

    let total: u128 = books.iter().map(|book| u128::from(book.units_sold)).sum();
    (total / books.len() as u128) as u64
}

/// First book with the lowest price, or the zero-valued book when there is none.
pub fn cheapest_book(books: &[Book]) -> Book {
    let mut cheapest: Option<&Book> = None;

    for book in books {
        match cheapest {
            Some(current) if current.price <= book.price => {}
            _ => cheapest = Some(book),
        }
    }

    cheapest.cloned().unwrap_or_default()
}

/// Exact, case-sensitive author matches. An empty author matches nothing.
pub fn books_written_by_author(books: &[Book], author: &str) -> u64 {
    if author.is_empty() {
        return 0;
    }

    books.iter().filter(|book| book.author == author).count() as u64
}
