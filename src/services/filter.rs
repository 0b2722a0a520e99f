use crate::models::book::Book;

/// Category selector value meaning "do not filter by category".
pub const CATEGORY_ALL: &str = "All";

/// Normalized filter criteria for one grid update.
///
/// Construction collapses the "no filter" spellings: empty or
/// whitespace-only search text becomes `None`, and the "All" category
/// sentinel becomes `None`.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    search: Option<String>,
    category: Option<String>,
}

impl FilterCriteria {
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let category = category.filter(|c| c != CATEGORY_ALL);

        FilterCriteria { search, category }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Applies the criteria to the catalog and returns the matching books in
/// their original order.
///
/// Search text matches as a literal case-insensitive substring of the
/// title or the author. The category selector matches by exact equality;
/// a selector that names no known category yields an empty result, not an
/// error. With no criteria the whole catalog comes back unchanged.
pub fn filter_books<'a>(books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
    let needle = criteria.search().map(|s| s.to_lowercase());

    books
        .iter()
        .filter(|book| {
            if let Some(ref needle) = needle {
                let matches = book.title.to_lowercase().contains(needle)
                    || book.author.to_lowercase().contains(needle);
                if !matches {
                    return false;
                }
            }

            if let Some(category) = criteria.category() {
                if book.category != category {
                    return false;
                }
            }

            true
        })
        .collect()
}
