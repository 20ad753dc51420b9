use crate::error::ApiError;
use crate::models::context::FetchContext;
use crate::models::responses::MetricsResponse;
use crate::models::source::SharedBooksSource;
use crate::services::metrics::{books_written_by_author, cheapest_book, mean_units_sold};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct MetricsParams {
    #[serde(default)]
    pub author: String,
}

pub async fn get_metrics(
    State(source): State<SharedBooksSource>,
    params: Result<Query<MetricsParams>, QueryRejection>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        debug!("Rejected metrics query: {}", rejection);
        ApiError::InvalidQuery
    })?;

    // The in-flight fetch is cancelled if this request future is dropped.
    let ctx = FetchContext::new();
    let _cancel_on_drop = ctx.drop_guard();
    let books = source.fetch(&ctx).await;

    if books.is_empty() {
        info!("No books available, reporting upstream as unavailable");
        return Err(ApiError::BooksUnavailable);
    }

    Ok(Json(MetricsResponse {
        mean_units_sold: mean_units_sold(&books),
        cheapest_book: cheapest_book(&books).name,
        books_written_by_author: books_written_by_author(&books, &params.author),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;
    use crate::models::source::{BooksSource, InMemoryBooksSource, SampleBooksSource};
    use crate::routes::app;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;

    async fn call(source: SharedBooksSource, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(source)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Keeps a handle on the context it was given and never finishes.
    struct PendingSource {
        seen: Arc<Mutex<Option<FetchContext>>>,
    }

    #[async_trait]
    impl BooksSource for PendingSource {
        async fn fetch(&self, ctx: &FetchContext) -> Vec<Book> {
            *self.seen.lock().unwrap() = Some(ctx.clone());
            std::future::pending::<()>().await;
            Vec::new()
        }
    }

    #[tokio::test]
    async fn sample_metrics_for_author() {
        let (status, body) = call(Arc::new(SampleBooksSource), "/?author=Alan+Donovan").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mean_units_sold"], 11000);
        assert_eq!(body["cheapest_book"], "The Go Programming Language");
        assert_eq!(body["books_written_by_author"], 1);
    }

    #[tokio::test]
    async fn percent_encoded_author_is_decoded() {
        let (status, body) =
            call(Arc::new(SampleBooksSource), "/?author=Robert%20C.%20Martin").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["books_written_by_author"], 1);
    }

    #[tokio::test]
    async fn missing_author_counts_nothing() {
        let (status, body) = call(Arc::new(SampleBooksSource), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["books_written_by_author"], 0);
    }

    #[tokio::test]
    async fn repeated_author_is_rejected() {
        let (status, body) = call(Arc::new(SampleBooksSource), "/?author=a&author=b").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Invalid query parameters"}));
    }

    #[tokio::test]
    async fn empty_source_is_unavailable() {
        let (status, body) = call(Arc::new(InMemoryBooksSource::empty()), "/?author=Anyone").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, serde_json::json!({"error": "Could not retrieve books data"}));
    }

    #[tokio::test]
    async fn response_uses_cheapest_name_only() {
        let source = InMemoryBooksSource::new(vec![
            Book::new(1, "First Cheap", "X", 10, 10),
            Book::new(2, "Pricey", "X", 20, 20),
            Book::new(3, "Second Cheap", "Y", 30, 10),
        ]);

        let (status, body) = call(Arc::new(source), "/?author=X").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "mean_units_sold": 20,
                "cheapest_book": "First Cheap",
                "books_written_by_author": 2
            })
        );
    }

    #[tokio::test]
    async fn dropped_request_cancels_fetch() {
        let seen = Arc::new(Mutex::new(None));
        let source: SharedBooksSource = Arc::new(PendingSource { seen: seen.clone() });

        let request = tokio::spawn(get_metrics(
            State(source),
            Ok(Query(MetricsParams {
                author: String::new(),
            })),
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;
        request.abort();
        assert!(request.await.unwrap_err().is_cancelled());

        let ctx = seen.lock().unwrap().take().expect("fetch should have started");
        assert!(ctx.is_cancelled());
    }
}
