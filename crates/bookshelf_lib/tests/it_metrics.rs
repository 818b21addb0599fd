//! Kept in its own test binary: the counters are process-wide, so no other
//! mutation may run concurrently with these assertions.

use bookshelf_lib::metrics;
use bookshelf_lib::test_utils::{execute_ok, sample_schema};

#[tokio::test]
async fn successful_mutations_increment_counters() {
    let schema = sample_schema();
    let books_before = metrics().books_added.get();
    let authors_before = metrics().authors_added.get();

    execute_ok(
        &schema,
        r#"mutation { addBook(name: "Mort", genre: "Comic fantasy", authorId: "3") { id } }"#,
    )
    .await;
    assert_eq!(metrics().books_added.get(), books_before + 1);
    assert_eq!(metrics().authors_added.get(), authors_before);

    execute_ok(
        &schema,
        r#"mutation { addAuthor(name: "Terry Pratchett", age: 66) { id } }"#,
    )
    .await;
    assert_eq!(metrics().books_added.get(), books_before + 1);
    assert_eq!(metrics().authors_added.get(), authors_before + 1);

    // Rejected during validation, so neither resolver runs.
    let response = schema
        .execute(r#"mutation { addBook(name: "X", genre: "Y") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    let response = schema
        .execute(r#"mutation { addAuthor(name: "Nobody") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());

    assert_eq!(metrics().books_added.get(), books_before + 1);
    assert_eq!(metrics().authors_added.get(), authors_before + 1);
}
