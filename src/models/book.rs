use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
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
