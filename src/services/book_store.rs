// src/services/book_store.rs
//
// Book Store - canonical collection plus its persisted mirror
//
// RULES:
// - The in-memory collection is the only source of truth while running
// - Every mutation rewrites the whole persisted slot before it is committed
// - Missing targets are silent no-ops

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Book, DomainError};
use crate::error::{AppError, AppResult};
use crate::events::{CollectionLoaded, EventBus};
use crate::repositories::KeyValueRepository;

/// Key under which the serialized collection lives
pub const DEFAULT_STORAGE_KEY: &str = "livros";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

pub struct BookStore {
    repo: Arc<dyn KeyValueRepository>,
    event_bus: Arc<EventBus>,
    config: StoreConfig,
    books: Vec<Book>,
}

impl BookStore {
    /// Create an empty store. Call [`BookStore::load`] to hydrate it.
    pub fn new(
        repo: Arc<dyn KeyValueRepository>,
        event_bus: Arc<EventBus>,
        config: StoreConfig,
    ) -> Self {
        Self {
            repo,
            event_bus,
            config,
            books: Vec::new(),
        }
    }

    /// Hydrate from the persisted slot.
    ///
    /// An absent slot yields an empty collection. An unreadable or
    /// unparsable slot also yields an empty collection; the failure is
    /// logged and never propagated.
    pub fn load(&mut self) {
        let (books, recovered) = match self.read_slot() {
            Ok(books) => (books, false),
            Err(e) => {
                log::warn!(
                    "Discarding unreadable slot {:?}, starting empty: {}",
                    self.config.storage_key,
                    e
                );
                (Vec::new(), true)
            }
        };

        self.books = dedupe_by_id(books);
        log::info!("Loaded {} books", self.books.len());

        self.event_bus
            .emit(CollectionLoaded::new(self.books.len(), recovered));
    }

    fn read_slot(&self) -> AppResult<Vec<Book>> {
        match self.repo.get(&self.config.storage_key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// All books in insertion order, oldest first
    pub fn get_all(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Insert at the end. The id must not already be present.
    pub fn append(&mut self, book: Book) -> AppResult<()> {
        if self.contains(&book.id) {
            return Err(AppError::Domain(DomainError::InvariantViolation(format!(
                "Book id {} already exists",
                book.id
            ))));
        }

        let mut next = self.books.clone();
        next.push(book);
        self.commit(next)
    }

    /// Replace the book matching `id` in place.
    /// Returns whether a book matched; the slot is rewritten either way.
    pub fn replace(&mut self, id: &str, book: Book) -> AppResult<bool> {
        if book.id != id && self.contains(&book.id) {
            return Err(AppError::Domain(DomainError::InvariantViolation(format!(
                "Book id {} already exists",
                book.id
            ))));
        }

        let mut next = self.books.clone();
        let found = match next.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        };

        self.commit(next)?;
        Ok(found)
    }

    /// Remove the book matching `id`.
    /// Returns whether a book matched; the slot is rewritten either way.
    pub fn remove(&mut self, id: &str) -> AppResult<bool> {
        let mut next = self.books.clone();
        let before = next.len();
        next.retain(|book| book.id != id);
        let found = next.len() != before;

        self.commit(next)?;
        Ok(found)
    }

    /// Write first, then swap in memory, so a failed write leaves both
    /// representations at the previous state.
    fn commit(&mut self, next: Vec<Book>) -> AppResult<()> {
        let raw = serde_json::to_string(&next)?;

        if let Err(e) = self.repo.set(&self.config.storage_key, &raw) {
            log::error!("Failed to persist {} books: {}", next.len(), e);
            return Err(e);
        }

        self.books = next;
        Ok(())
    }
}

fn dedupe_by_id(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::new();
    books
        .into_iter()
        .filter(|book| {
            let fresh = seen.insert(book.id.clone());
            if !fresh {
                log::warn!("Dropping duplicate book id {} from persisted slot", book.id);
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryKeyValueRepository, MockKeyValueRepository};

    fn book(id: &str, titulo: &str) -> Book {
        Book {
            id: id.to_string(),
            titulo: titulo.to_string(),
            autor: "Author".to_string(),
            ano_publicacao: 2000,
            data_cadastro: "01/01/2026".to_string(),
            genero: String::new(),
            descricao: String::new(),
        }
    }

    fn store_over(repo: Arc<dyn KeyValueRepository>) -> BookStore {
        let mut store = BookStore::new(repo, Arc::new(EventBus::new()), StoreConfig::default());
        store.load();
        store
    }

    fn titles(store: &BookStore) -> Vec<&str> {
        store.get_all().iter().map(|b| b.titulo.as_str()).collect()
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_unparsable_slot_is_empty() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        repo.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();

        let bus = Arc::new(EventBus::new());
        let mut store = BookStore::new(repo, Arc::clone(&bus), StoreConfig::default());
        store.load();

        assert!(store.is_empty());
        assert_eq!(bus.get_event_log()[0].event_type, "CollectionLoaded");
    }

    #[test]
    fn test_load_read_failure_is_empty() {
        let mut repo = MockKeyValueRepository::new();
        repo.expect_get()
            .returning(|_| Err(AppError::Other("storage unavailable".to_string())));

        let store = store_over(Arc::new(repo));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let raw = serde_json::to_string(&vec![
            book("1", "First"),
            book("1", "Again"),
            book("2", "Second"),
        ])
        .unwrap();
        repo.set(DEFAULT_STORAGE_KEY, &raw).unwrap();

        let store = store_over(repo);
        assert_eq!(titles(&store), vec!["First", "Second"]);
    }

    #[test]
    fn test_load_keeps_records_with_loose_years() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let raw = r#"[
            {"id":"1","titulo":"Emma","autor":"Austen","anoPublicacao":"1815.5"},
            {"id":"2","titulo":"Dune","autor":"Herbert","anoPublicacao":1965.0},
            {"id":"3","titulo":"Beloved","autor":"Morrison","anoPublicacao":"soon"}
        ]"#;
        repo.set(DEFAULT_STORAGE_KEY, raw).unwrap();

        let store = store_over(repo);
        assert_eq!(titles(&store), vec!["Emma", "Dune", "Beloved"]);
        let years: Vec<i32> = store.get_all().iter().map(|b| b.ano_publicacao).collect();
        assert_eq!(years, vec![1815, 1965, 0]);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        store.append(book("a", "Dune")).unwrap();
        store.append(book("b", "Emma")).unwrap();
        store.append(book("c", "Beloved")).unwrap();

        assert_eq!(titles(&store), vec!["Dune", "Emma", "Beloved"]);
    }

    #[test]
    fn test_append_rejects_existing_id() {
        let mut store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        store.append(book("a", "Dune")).unwrap();

        assert!(store.append(book("a", "Clone")).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        store.append(book("a", "Dune")).unwrap();
        store.append(book("b", "Emma")).unwrap();
        store.append(book("c", "Beloved")).unwrap();

        assert!(store.replace("b", book("b", "Persuasion")).unwrap());
        assert_eq!(titles(&store), vec!["Dune", "Persuasion", "Beloved"]);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        store.append(book("a", "Dune")).unwrap();

        assert!(!store.replace("zzz", book("zzz", "Ghost")).unwrap());
        assert_eq!(titles(&store), vec!["Dune"]);
    }

    #[test]
    fn test_replace_cannot_steal_another_id() {
        let mut store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        store.append(book("a", "Dune")).unwrap();
        store.append(book("b", "Emma")).unwrap();

        assert!(store.replace("a", book("b", "Impostor")).is_err());
        assert_eq!(titles(&store), vec!["Dune", "Emma"]);
    }

    #[test]
    fn test_remove_only_matching() {
        let mut store = store_over(Arc::new(InMemoryKeyValueRepository::new()));
        store.append(book("a", "Dune")).unwrap();
        store.append(book("b", "Emma")).unwrap();

        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert_eq!(titles(&store), vec!["Emma"]);
    }

    #[test]
    fn test_every_mutation_round_trips() {
        let repo: Arc<dyn KeyValueRepository> = Arc::new(InMemoryKeyValueRepository::new());
        let mut store = store_over(Arc::clone(&repo));

        store.append(book("a", "Dune")).unwrap();
        assert_eq!(store_over(Arc::clone(&repo)).get_all(), store.get_all());

        store.append(book("b", "Emma")).unwrap();
        store.replace("a", book("a", "Dune Messiah")).unwrap();
        assert_eq!(store_over(Arc::clone(&repo)).get_all(), store.get_all());

        store.remove("b").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store_over(Arc::clone(&repo)).get_all(), store.get_all());
    }

    #[test]
    fn test_persisted_json_uses_wire_keys() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let mut store = store_over(Arc::clone(&repo) as Arc<dyn KeyValueRepository>);
        store.append(book("a", "Dune")).unwrap();

        let raw = repo.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["titulo"], "Dune");
        assert_eq!(json[0]["anoPublicacao"], 2000);
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let mut repo = MockKeyValueRepository::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_set()
            .times(1)
            .returning(|_, _| Err(AppError::Other("quota exceeded".to_string())));

        let mut store = store_over(Arc::new(repo));

        assert!(store.append(book("a", "Dune")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_custom_storage_key() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let config = StoreConfig {
            storage_key: "estante".to_string(),
        };
        let mut store = BookStore::new(
            Arc::clone(&repo) as Arc<dyn KeyValueRepository>,
            Arc::new(EventBus::new()),
            config,
        );
        store.load();
        store.append(book("a", "Dune")).unwrap();

        assert!(repo.get("estante").unwrap().is_some());
        assert!(repo.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
