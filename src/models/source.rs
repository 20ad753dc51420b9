use crate::models::book::Book;
use crate::models::context::FetchContext;
use async_trait::async_trait;
use std::sync::Arc;

/// Origin of the book catalog.
///
/// Implementations never report failure: anything that goes wrong while
/// fetching is logged and yields an empty collection, so callers cannot tell
/// an empty catalog apart from a failed fetch.
#[async_trait]
pub trait BooksSource {
    async fn fetch(&self, ctx: &FetchContext) -> Vec<Book>;
}

pub type SharedBooksSource = Arc<dyn BooksSource + Send + Sync>;

/// Fixed three-book catalog used for demo wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleBooksSource;

impl SampleBooksSource {
    pub fn new() -> Self {
        Self
    }

    pub fn books() -> Vec<Book> {
        vec![
            Book::new(1, "The Go Programming Language", "Alan Donovan", 5000, 40),
            Book::new(2, "Clean Code", "Robert C. Martin", 15000, 50),
            Book::new(3, "The Pragmatic Programmer", "Andrew Hunt", 13000, 45),
        ]
    }
}

#[async_trait]
impl BooksSource for SampleBooksSource {
    async fn fetch(&self, _ctx: &FetchContext) -> Vec<Book> {
        Self::books()
    }
}

/// Serves whatever collection it was built with, in order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBooksSource {
    books: Vec<Book>,
}

impl InMemoryBooksSource {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BooksSource for InMemoryBooksSource {
    async fn fetch(&self, _ctx: &FetchContext) -> Vec<Book> {
        self.books.clone()
    }
}
