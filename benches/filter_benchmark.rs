use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Debug, Clone)]
struct Book {
    book_id: u32,
    title: String,
    author: String,
    category: String,
}

fn matches_search(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle) || book.author.to_lowercase().contains(needle)
}

fn filter_books<'a>(books: &'a [Book], search: Option<&str>, category: Option<&str>) -> Vec<&'a Book> {
    let needle = search.map(|s| s.to_lowercase());

    books
        .iter()
        .filter(|book| {
            if let Some(ref needle) = needle {
                if !matches_search(book, needle) {
                    return false;
                }
            }
            if let Some(category) = category {
                if book.category != category {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn create_catalog() -> Vec<Book> {
    vec![
        Book {
            book_id: 1,
            title: "The Noble Quran".to_string(),
            author: "Divine Revelation".to_string(),
            category: "Holy Book".to_string(),
        },
        Book {
            book_id: 2,
            title: "Sahih Al-Bukhari".to_string(),
            author: "Imam Al-Bukhari".to_string(),
            category: "Hadith".to_string(),
        },
        Book {
            book_id: 3,
            title: "Riyad us-Saliheen".to_string(),
            author: "Imam An-Nawawi".to_string(),
            category: "Islamic Teachings".to_string(),
        },
        Book {
            book_id: 4,
            title: "Tafsir Ibn Kathir".to_string(),
            author: "Ibn Kathir".to_string(),
            category: "Quranic Interpretation".to_string(),
        },
        Book {
            book_id: 5,
            title: "Muwatta Malik".to_string(),
            author: "Imam Malik".to_string(),
            category: "Hadith".to_string(),
        },
    ]
}

fn create_large_catalog() -> Vec<Book> {
    let mut books = create_catalog();

    // Synthetic records for scaling headroom well past the real catalog
    for i in 100..1100 {
        books.push(Book {
            book_id: i,
            title: format!("Test Book {}", i),
            author: format!("Test Author {}", i % 50),
            category: "Hadith".to_string(),
        });
    }

    books
}

fn benchmark_filter_no_criteria(c: &mut Criterion) {
    let books = create_catalog();

    c.bench_function("filter_no_criteria", |b| {
        b.iter(|| filter_books(black_box(&books), None, None))
    });
}

fn benchmark_filter_search(c: &mut Criterion) {
    let books = create_catalog();

    c.bench_function("filter_search", |b| {
        b.iter(|| filter_books(black_box(&books), black_box(Some("imam")), None))
    });
}

fn benchmark_filter_search_and_category(c: &mut Criterion) {
    let books = create_catalog();

    c.bench_function("filter_search_and_category", |b| {
        b.iter(|| {
            filter_books(
                black_box(&books),
                black_box(Some("imam")),
                black_box(Some("Hadith")),
            )
        })
    });
}

fn benchmark_filter_large_catalog(c: &mut Criterion) {
    let books = create_large_catalog();

    c.bench_function("filter_large_catalog", |b| {
        b.iter(|| filter_books(black_box(&books), black_box(Some("test")), None))
    });
}

criterion_group!(
    benches,
    benchmark_filter_no_criteria,
    benchmark_filter_search,
    benchmark_filter_search_and_category,
    benchmark_filter_large_catalog
);
criterion_main!(benches);
