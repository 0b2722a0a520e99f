use crate::models::book::Book;
use crate::models::responses::{BookCard, CategoriesResponse, GridResponse};
use crate::services::catalog::category_options;
use crate::services::filter::{filter_books, FilterCriteria};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

type Catalog = Arc<Vec<Book>>;

#[derive(Debug, Deserialize)]
pub struct GridParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// The filter/render cycle behind the books grid. Each change to the
/// search box or the category dropdown arrives here as a fresh query.
pub async fn book_grid(
    Query(params): Query<GridParams>,
    State(catalog): State<Catalog>,
) -> Json<GridResponse> {
    info!("Grid query: {:?}", params);

    let criteria = FilterCriteria::new(params.search, params.category);
    let cards: Vec<BookCard> = filter_books(&catalog, &criteria)
        .into_iter()
        .map(BookCard::from)
        .collect();

    Json(GridResponse {
        search: criteria.search().map(str::to_string),
        category: criteria.category().map(str::to_string),
        count: cards.len(),
        cards,
    })
}

pub async fn get_book(
    Path(book_id): Path<u32>,
    State(catalog): State<Catalog>,
) -> Result<Json<BookCard>, StatusCode> {
    match catalog.iter().find(|book| book.book_id == book_id) {
        Some(book) => Ok(Json(BookCard::from(book))),
        None => {
            error!("No book found with id {}", book_id);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

pub async fn list_categories(State(catalog): State<Catalog>) -> Json<CategoriesResponse> {
    let categories = category_options(&catalog);

    Json(CategoriesResponse {
        count: categories.len(),
        categories,
    })
}
