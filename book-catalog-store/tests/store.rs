use book_catalog::*;
use book_catalog_store::*;
use uuid::Uuid;

fn dune(owner: Uuid) -> Book {
    Book::new(
        NewBook::new(owner, "Dune", "Frank Herbert")
            .with_genre("Science Fiction")
            .with_year(1965)
            .with_rating(4.6)
            .with_cover_url("https://example.com/dune.jpg"),
    )
}

fn sorted_ids(store: &InMemoryStore) -> Vec<Uuid> {
    let mut ids: Vec<_> = store.get_all().iter().map(|b| b.id).collect();
    ids.sort();
    ids
}

#[test]
fn insert_then_get_round_trips() {
    let mut store = InMemoryStore::new();
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    assert_eq!(store.get(book.id), Some(&book));
    assert_eq!(store.len(), 1);
    assert!(store.contains(book.id));
}

#[test]
fn insert_overwrites_same_id() {
    let mut store = InMemoryStore::new();
    let mut book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    book.title = "Dune Messiah".to_string();
    store.insert(book.clone()).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(book.id).unwrap().title, "Dune Messiah");
}

#[test]
fn get_missing_is_none() {
    let store = InMemoryStore::seeded();
    assert!(store.get(Uuid::new_v4()).is_none());
}

#[test]
fn get_all_returns_every_record() {
    let store = InMemoryStore::seeded();
    assert_eq!(store.get_all().len(), 3);
    assert!(!store.is_empty());
    assert!(InMemoryStore::new().get_all().is_empty());
}

#[test]
fn replace_missing_reports_not_found_and_changes_nothing() {
    let mut store = InMemoryStore::seeded();
    let before = sorted_ids(&store);
    let stranger = dune(Uuid::new_v4());

    let err = store.replace(stranger.clone()).unwrap_err();
    assert_eq!(err, CatalogError::NotFound { id: stranger.id });
    assert_eq!(sorted_ids(&store), before);
    assert!(store.get(stranger.id).is_none());
}

#[test]
fn replace_keeps_identity_and_refreshes_updated_at() {
    let owner = Uuid::new_v4();
    let mut store = InMemoryStore::new();
    let original = dune(owner);
    store.insert(original.clone()).unwrap();

    let mut edited = original.clone();
    edited.title = "Dune (50th Anniversary)".to_string();
    edited.owner_id = Uuid::new_v4();
    edited.created_at = original.created_at - chrono::Duration::days(30);
    store.replace(edited).unwrap();

    let stored = store.get(original.id).unwrap();
    assert_eq!(stored.title, "Dune (50th Anniversary)");
    assert_eq!(stored.owner_id, owner);
    assert_eq!(stored.created_at, original.created_at);
    assert!(stored.updated_at >= original.updated_at);
    assert!(stored.created_at <= stored.updated_at);
}

#[test]
fn replace_with_blank_title_is_rejected() {
    let mut store = InMemoryStore::new();
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    let mut edited = book.clone();
    edited.title = "   ".to_string();
    let err = store.replace(edited).unwrap_err();

    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert_eq!(store.get(book.id), Some(&book));
}

#[test]
fn replace_with_nan_rating_is_rejected() {
    let mut store = InMemoryStore::seeded();
    let before: Vec<Book> = store.get_all().into_iter().cloned().collect();
    let target = search(&store, "harry")[0].clone();

    let mut edited = target.clone();
    edited.rating = Some(f64::NAN);
    let err = store.replace(edited).unwrap_err();

    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    for book in &before {
        assert_eq!(store.get(book.id), Some(book));
    }
    assert!((average_rating(&store) - 4.8).abs() < 1e-9);
    assert_eq!(top_rated(&store, 1)[0].title, "The Lord of the Rings");
}

#[test]
fn update_cover_sets_url_and_refreshes_updated_at() {
    let mut store = InMemoryStore::new();
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    let url = "https://example.com/dune-2021.jpg".to_string();
    store.update_cover(book.id, Some(url.clone())).unwrap();

    let stored = store.get(book.id).unwrap();
    assert_eq!(stored.cover_url, Some(url));
    assert!(stored.updated_at >= book.updated_at);

    store.update_cover(book.id, None).unwrap();
    assert_eq!(store.get(book.id).unwrap().cover_url, None);
}

#[test]
fn update_cover_missing_is_not_found() {
    let mut store = InMemoryStore::seeded();
    let id = Uuid::new_v4();
    let err = store
        .update_cover(id, Some("https://example.com/x.jpg".to_string()))
        .unwrap_err();
    assert_eq!(err, CatalogError::not_found(id));
    assert_eq!(store.len(), 3);
}

#[test]
fn partial_update_preserves_other_fields() {
    let mut store = InMemoryStore::new();
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    store
        .update(
            book.id,
            BookUpdate {
                rating: Some(Some(4.9)),
                ..Default::default()
            },
        )
        .unwrap();

    let stored = store.get(book.id).unwrap();
    assert_eq!(stored.rating, Some(4.9));
    assert_eq!(stored.title, book.title);
    assert_eq!(stored.owner_id, book.owner_id);
    assert_eq!(stored.created_at, book.created_at);
    assert_eq!(stored.cover_url, book.cover_url);
}

#[test]
fn invalid_update_leaves_record_untouched() {
    let mut store = InMemoryStore::new();
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    let err = store
        .update(
            book.id,
            BookUpdate {
                title: Some("  ".to_string()),
                rating: Some(Some(1.0)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert_eq!(store.get(book.id), Some(&book));
}

#[test]
fn update_missing_is_not_found() {
    let mut store = InMemoryStore::new();
    let id = Uuid::new_v4();
    let err = store.update(id, BookUpdate::default()).unwrap_err();
    assert_eq!(err, CatalogError::not_found(id));
}

#[test]
fn delete_removes_once() {
    let mut store = InMemoryStore::new();
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();

    assert!(store.delete(book.id));
    assert!(store.get(book.id).is_none());
    assert!(!store.delete(book.id));
    assert!(store.is_empty());
}

#[test]
fn seeded_store_shares_one_owner() {
    let owner = Uuid::new_v4();
    let store = InMemoryStore::seeded_with_owner(owner);
    assert_eq!(store.len(), 3);
    assert!(store.get_all().iter().all(|b| b.owner_id == owner));
}

#[test]
fn store_is_usable_as_trait_object() {
    let mut store: Box<dyn BookStore> = Box::new(InMemoryStore::new());
    let book = dune(Uuid::new_v4());
    store.insert(book.clone()).unwrap();
    assert_eq!(search(store.as_ref(), "herbert").len(), 1);
    assert!(store.delete(book.id));
}
