use book_catalog::*;
use book_catalog_store::*;
use uuid::Uuid;

fn emma(owner: Uuid) -> NewBook {
    NewBook::new(owner, "Emma", "Jane Austen")
        .with_genre("Romance")
        .with_year(1815)
        .with_rating(4.1)
}

#[test]
fn seeded_service_has_samples() {
    let service = CatalogService::seeded();
    assert_eq!(service.len(), 3);
    assert_eq!(service.top_rated(1)[0].title, "The Lord of the Rings");
}

#[test]
fn create_assigns_id_and_stores() {
    let mut service = CatalogService::new(InMemoryStore::new());
    let owner = Uuid::new_v4();
    let book = service.create(emma(owner)).unwrap();

    assert_eq!(service.get(book.id), Some(&book));
    assert_eq!(service.list_by_owner(owner).len(), 1);
    assert_eq!(book.created_at, book.updated_at);
}

#[test]
fn create_rejects_blank_title_without_storing() {
    let mut service = CatalogService::seeded();
    let err = service
        .create(NewBook::new(Uuid::new_v4(), "", "Nobody"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert_eq!(service.len(), 3);
}

#[test]
fn seed_stops_at_first_invalid_entry() {
    let owner = Uuid::new_v4();
    let mut service = CatalogService::new(InMemoryStore::new());
    let ids = service
        .seed(vec![emma(owner), emma(owner).with_genre("Classic")])
        .unwrap();
    assert_eq!(ids.len(), 2);

    let result = service.seed(vec![emma(owner), NewBook::new(owner, "Untitled", " ")]);
    assert!(result.is_err());
    assert_eq!(service.len(), 3);
}

#[test]
fn mutations_forward_to_store() {
    let mut service = CatalogService::seeded();
    let book = service.create(emma(Uuid::new_v4())).unwrap();

    service
        .update_cover(book.id, Some("https://example.com/emma.jpg".to_string()))
        .unwrap();
    service
        .update(
            book.id,
            BookUpdate {
                genre: Some("Classic".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let mut edited = service.get(book.id).unwrap().clone();
    edited.description = Some("Matchmaking in Highbury".to_string());
    service.replace(edited).unwrap();

    let stored = service.get(book.id).unwrap();
    assert_eq!(stored.genre, "Classic");
    assert_eq!(stored.cover_url.as_deref(), Some("https://example.com/emma.jpg"));
    assert_eq!(stored.description.as_deref(), Some("Matchmaking in Highbury"));
    assert!(stored.updated_at >= book.updated_at);

    assert!(service.delete(book.id));
    assert!(!service.delete(book.id));
    assert_eq!(
        service.update_cover(book.id, None),
        Err(CatalogError::not_found(book.id))
    );
}

#[test]
fn reads_forward_to_queries() {
    let service = CatalogService::seeded();
    assert_eq!(service.search("mocking").len(), 1);
    assert_eq!(service.list_by_genre("Fantasy").len(), 2);
    assert_eq!(service.list_min_rating(4.9).len(), 1);
    assert_eq!(service.list_genres().len(), 2);
    assert!((service.average_rating() - 4.8).abs() < 1e-9);
    assert_eq!(service.stats().books, 3);
    assert_eq!(service.get_all().len(), 3);
    assert!(!service.is_empty());
}

#[test]
fn service_wraps_any_store() {
    let service: CatalogService<InMemoryStore> =
        CatalogService::new(InMemoryStore::seeded());
    let store = service.into_store();
    assert_eq!(store.len(), 3);
}
