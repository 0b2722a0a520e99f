use crate::models::book::Book;
use crate::services::filter::CATEGORY_ALL;

/// Builds the fixed book collection. Called once at startup; the result is
/// shared read-only for the life of the process and never mutated.
pub fn load_catalog() -> Vec<Book> {
    vec![
        Book {
            book_id: 1,
            title: "The Noble Quran".to_string(),
            author: "Divine Revelation".to_string(),
            category: "Holy Book".to_string(),
            description: "The ultimate source of divine guidance, providing comprehensive wisdom for humanity.".to_string(),
            tags: vec![
                "Guidance".to_string(),
                "Wisdom".to_string(),
                "Spiritual Growth".to_string(),
            ],
            icon: "book-quran".to_string(),
            rating: Some(5.0),
            pages: Some(604),
        },
        Book {
            book_id: 2,
            title: "Sahih Al-Bukhari".to_string(),
            author: "Imam Al-Bukhari".to_string(),
            category: "Hadith".to_string(),
            description: "A comprehensive collection of authenticated sayings and practices of Prophet Muhammad.".to_string(),
            tags: vec![
                "Prophetic Traditions".to_string(),
                "Historical Context".to_string(),
                "Authentic Practices".to_string(),
            ],
            icon: "scroll".to_string(),
            rating: Some(4.9),
            pages: Some(432),
        },
        Book {
            book_id: 3,
            title: "Riyad us-Saliheen".to_string(),
            author: "Imam An-Nawawi".to_string(),
            category: "Islamic Teachings".to_string(),
            description: "A profound compilation of ethical principles and moral teachings in Islam.".to_string(),
            tags: vec![
                "Ethical Living".to_string(),
                "Moral Development".to_string(),
                "Practical Guidance".to_string(),
            ],
            icon: "mosque".to_string(),
            rating: Some(4.7),
            pages: Some(512),
        },
        Book {
            book_id: 4,
            title: "Tafsir Ibn Kathir".to_string(),
            author: "Ibn Kathir".to_string(),
            category: "Quranic Interpretation".to_string(),
            description: "Comprehensive Quranic exegesis providing deep insights into Quranic verses.".to_string(),
            tags: vec![
                "Interpretation".to_string(),
                "Scholarly Analysis".to_string(),
                "Detailed Explanation".to_string(),
            ],
            icon: "book-open".to_string(),
            rating: None,
            pages: None,
        },
        Book {
            book_id: 5,
            title: "Muwatta Malik".to_string(),
            author: "Imam Malik".to_string(),
            category: "Hadith".to_string(),
            description: "A foundational text of Islamic jurisprudence and prophetic traditions.".to_string(),
            tags: vec![
                "Jurisprudence".to_string(),
                "Legal Principles".to_string(),
                "Prophetic Guidance".to_string(),
            ],
            icon: "scroll".to_string(),
            rating: None,
            pages: None,
        },
    ]
}

/// Dropdown contents: the "All" sentinel followed by the distinct
/// categories in catalog order.
pub fn category_options(books: &[Book]) -> Vec<String> {
    let mut options = vec![CATEGORY_ALL.to_string()];

    for book in books {
        if !options.contains(&book.category) {
            options.push(book.category.clone());
        }
    }

    options
}
