use crate::error::FetchError;
use crate::models::book::Book;
use crate::models::context::FetchContext;
use crate::models::source::BooksSource;
use crate::utils::body::{read_limited, MAX_BODY_SIZE};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{error, info, warn};

pub const DEFAULT_BOOKS_API_URL: &str = "https://6781684b85151f714b0aa5db.mockapi.io/api/v1/books";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the catalog from a JSON books API.
#[derive(Debug, Clone)]
pub struct HttpBooksSource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpBooksSource {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(DEFAULT_BOOKS_API_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_config(api_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    pub fn with_client(client: reqwest::Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn request_books(&self) -> Result<Vec<Book>, FetchError> {
        let mut response = self
            .client
            .get(&self.api_url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Request)?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(response.status()));
        }

        let body = read_limited(&mut response, MAX_BODY_SIZE)
            .await
            .map_err(FetchError::Body)?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl BooksSource for HttpBooksSource {
    async fn fetch(&self, ctx: &FetchContext) -> Vec<Book> {
        if ctx.is_done() {
            warn!("Context already done, skipping request to {}", self.api_url);
            return Vec::new();
        }

        let result = tokio::select! {
            _ = ctx.done() => Err(FetchError::Cancelled),
            result = self.request_books() => result,
        };

        match result {
            Ok(books) => {
                for (index, book) in books.iter().enumerate() {
                    if book.is_incomplete() {
                        warn!("Book at index {} has missing required fields", index);
                    }
                }
                info!("Fetched {} books from {}", books.len(), self.api_url);
                books
            }
            Err(e) => {
                error!("Failed to fetch books from {}: {}", self.api_url, e);
                Vec::new()
            }
        }
    }
}
