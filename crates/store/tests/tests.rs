mod common;

use std::collections::HashSet;

use bookshelf_store::models::Author;
use bookshelf_store::Store;
use tracing_test::traced_test;

use crate::common::{new_author, new_book};

#[tokio::test]
async fn empty_store_has_no_records() {
    let store = Store::new();

    assert!(store.books().await.is_empty());
    assert!(store.authors().await.is_empty());
    assert_eq!(store.book("1").await, None);
}

#[tokio::test]
async fn sample_data_is_seeded_in_order() {
    let store = Store::with_sample_data();

    let names: Vec<String> = store.books().await.into_iter().map(|b| b.name).collect();
    assert_eq!(
        names,
        vec![
            "Harry Potter and the Chamber of Secrets",
            "Harry Potter and the Prisoner of Azkaban",
            "Harry Potter and the Goblet of Fire",
            "The Way of Shadows",
            "Beyond the Shadows",
        ]
    );

    let authors = store.authors().await;
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].name, "J. K. Rowling");
    assert_eq!(authors[0].age, 56);
    assert_eq!(authors[1].name, "Brent Weeks");
    assert_eq!(authors[1].age, 45);
}

#[tokio::test]
async fn lookups_by_id() {
    let store = Store::with_sample_data();

    let book = store.book("4").await.unwrap();
    assert_eq!(book.name, "The Way of Shadows");
    assert_eq!(book.author_id, "2");

    assert_eq!(store.author("1").await.unwrap().name, "J. K. Rowling");
    assert_eq!(store.author("42").await, None);
    assert_eq!(store.book("not-an-id").await, None);
}

#[tokio::test]
async fn books_by_author_matches_exactly() {
    let store = Store::with_sample_data();

    for author in store.authors().await {
        let by_author = store.books_by_author(&author.id).await;
        let expected: Vec<_> = store
            .books()
            .await
            .into_iter()
            .filter(|b| b.author_id == author.id)
            .collect();
        assert_eq!(by_author, expected);
    }

    assert!(store.books_by_author("999").await.is_empty());
}

#[tokio::test]
async fn add_book_appends_one_record() {
    let store = Store::with_sample_data();

    let book = store.add_book(new_book("Mort", "Comic fantasy", "3")).await;
    assert_eq!(book.id, "6");
    assert_eq!(book.name, "Mort");
    assert_eq!(book.genre, "Comic fantasy");
    assert_eq!(book.author_id, "3");

    let books = store.books().await;
    assert_eq!(books.len(), 6);
    assert_eq!(books.last(), Some(&book));
    assert_eq!(store.book("6").await, Some(book));
}

#[tokio::test]
async fn add_author_allocates_fresh_ids() {
    let store = Store::with_sample_data();

    let first = store.add_author(new_author("Terry Pratchett", 66)).await;
    let second = store.add_author(new_author("Robin Hobb", 72)).await;

    assert_eq!(first.id, "3");
    assert_eq!(second.id, "4");
    assert_eq!(store.authors().await.len(), 4);
}

#[tokio::test]
async fn clones_share_collections() {
    let store = Store::new();
    let clone = store.clone();

    clone.add_author(new_author("Ursula K. Le Guin", 88)).await;

    assert_eq!(store.authors().await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_not_lost() {
    let store = Store::with_sample_data();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .add_book(new_book(&format!("Book {i}"), "Anthology", "1"))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id);
    }

    assert_eq!(ids.len(), 64);
    assert_eq!(store.books().await.len(), 5 + 64);
}

#[tokio::test]
#[traced_test]
async fn appends_are_logged() {
    let store = Store::new();
    store.add_author(new_author("Terry Pratchett", 66)).await;

    assert!(logs_contain("Added author"));
}

#[tokio::test]
async fn seeded_max_id_does_not_exhaust_allocation() {
    let seeded = Author {
        id: u64::MAX.to_string(),
        name: "Anonymous".to_string(),
        age: 99,
    };
    let store = Store::from_records(vec![], vec![seeded.clone()]);

    let first = store.add_author(new_author("Terry Pratchett", 66)).await;
    let second = store.add_author(new_author("Robin Hobb", 72)).await;

    assert_eq!(first.id, "1");
    assert_eq!(second.id, "2");
    assert_eq!(store.author(&seeded.id).await, Some(seeded));
    assert_eq!(store.authors().await.len(), 3);
}
