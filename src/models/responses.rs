use crate::models::book::Book;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// One render-ready card for the books grid. Display-only fields are
/// carried through from the record verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookCard {
    pub book_id: u32,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub icon: String,
    pub rating: Option<f32>,
    pub pages: Option<u32>,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        BookCard {
            book_id: book.book_id,
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            description: book.description.clone(),
            tags: book.tags.clone(),
            icon: book.icon.clone(),
            rating: book.rating,
            pages: book.pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GridResponse {
    pub search: Option<String>,
    pub category: Option<String>,
    pub count: usize,
    pub cards: Vec<BookCard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub count: usize,
    pub categories: Vec<String>,
}
