use jot_core::storage::{KeyValueStore, SqliteKeyValueStore, NOTES_KEY};
use jot_core::{Note, NoteId, NotesStore, Persister};
use std::collections::HashSet;
use uuid::Uuid;

fn mem_persister() -> Persister {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();
    Persister::spawn(Box::new(store)).unwrap()
}

fn note_with_fixed_id(id: &str, title: &str, description: &str) -> Note {
    Note::with_id(Uuid::parse_str(id).unwrap(), title, description)
}

fn id_set(ids: &[NoteId]) -> HashSet<NoteId> {
    ids.iter().copied().collect()
}

#[test]
fn load_starts_empty_when_nothing_was_persisted() {
    let kv = SqliteKeyValueStore::open_in_memory().unwrap();
    let persister = mem_persister();

    let store = NotesStore::load(&kv, persister.handle());
    assert!(store.is_empty());
}

#[test]
fn load_tolerates_a_corrupt_blob() {
    let kv = SqliteKeyValueStore::open_in_memory().unwrap();
    kv.set(NOTES_KEY, "definitely not json").unwrap();
    let persister = mem_persister();

    let store = NotesStore::load(&kv, persister.handle());
    assert!(store.is_empty());
}

#[test]
fn add_appends_at_the_end() {
    let kv = SqliteKeyValueStore::open_in_memory().unwrap();
    let persister = mem_persister();
    let mut store = NotesStore::load(&kv, persister.handle());

    let a = Note::new("first", "a");
    let b = Note::new("second", "b");
    store.add(a.clone());
    store.add(b.clone());

    let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
    assert_eq!(store.notes()[0].id, a.id);
    assert_eq!(store.notes()[1].id, b.id);
}

#[test]
fn delete_many_removes_exactly_the_matching_notes() {
    let kv = SqliteKeyValueStore::open_in_memory().unwrap();
    let persister = mem_persister();
    let mut store = NotesStore::load(&kv, persister.handle());

    let a = note_with_fixed_id("00000000-0000-4000-8000-000000000001", "a", "keep");
    let b = note_with_fixed_id("00000000-0000-4000-8000-000000000002", "b", "drop");
    let c = note_with_fixed_id("00000000-0000-4000-8000-000000000003", "c", "drop");
    store.add(a.clone());
    store.add(b.clone());
    store.add(c.clone());

    let removed = store.delete_many(&id_set(&[b.id, c.id]));
    assert_eq!(removed, 2);
    assert_eq!(store.notes(), &[a.clone()]);
    assert_eq!(store.notes()[0].description, "keep");
}

#[test]
fn delete_many_with_unknown_ids_is_a_noop() {
    let kv = SqliteKeyValueStore::open_in_memory().unwrap();
    let persister = mem_persister();
    let mut store = NotesStore::load(&kv, persister.handle());

    let kept = Note::new("kept", "body");
    store.add(kept.clone());

    let stranger = Uuid::new_v4();
    let removed = store.delete_many(&id_set(&[stranger]));
    assert_eq!(removed, 0);
    assert_eq!(store.notes(), &[kept]);
}

#[test]
fn persisted_collection_round_trips_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jot.sqlite3");

    let reader = SqliteKeyValueStore::open(&path).unwrap();
    let writer = SqliteKeyValueStore::open(&path).unwrap();
    let persister = Persister::spawn(Box::new(writer)).unwrap();

    let mut store = NotesStore::load(&reader, persister.handle());
    store.add(Note::new("Groceries", "milk, eggs"));
    store.add(Note::new("Meeting notes", "agenda"));
    store.add(Note::new("grocery list", "bread"));
    persister.flush();

    let reloaded = NotesStore::load(&reader, persister.handle());
    assert_eq!(reloaded.notes(), store.notes());
}

#[test]
fn deletions_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jot.sqlite3");

    let reader = SqliteKeyValueStore::open(&path).unwrap();
    let writer = SqliteKeyValueStore::open(&path).unwrap();
    let persister = Persister::spawn(Box::new(writer)).unwrap();

    let mut store = NotesStore::load(&reader, persister.handle());
    let doomed = Note::new("doomed", "x");
    let kept = Note::new("kept", "y");
    store.add(doomed.clone());
    store.add(kept.clone());
    store.delete_many(&id_set(&[doomed.id]));
    persister.flush();

    let reloaded = NotesStore::load(&reader, persister.handle());
    assert_eq!(reloaded.notes(), &[kept]);
}
