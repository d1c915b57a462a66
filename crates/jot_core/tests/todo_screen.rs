use jot_core::storage::SqliteKeyValueStore;
use jot_core::view::todo::{placeholder, rows, TodoState, EMPTY_PLACEHOLDER};
use jot_core::{Persister, TaskError, TasksStore};

fn empty_store() -> (TasksStore, Persister) {
    let kv = SqliteKeyValueStore::open_in_memory().unwrap();
    let persister =
        Persister::spawn(Box::new(SqliteKeyValueStore::open_in_memory().unwrap())).unwrap();
    let store = TasksStore::load(&kv, persister.handle());
    (store, persister)
}

#[test]
fn empty_list_renders_the_placeholder_and_no_rows() {
    let (store, _persister) = empty_store();

    assert!(rows(&store).is_empty());
    assert_eq!(placeholder(&store), Some(EMPTY_PLACEHOLDER));
}

#[test]
fn adding_one_task_replaces_the_placeholder_with_that_row() {
    let (mut store, _persister) = empty_store();

    let mut state = TodoState::new();
    state.show_input();
    state.set_draft("Buy milk");
    state.submit(&mut store).unwrap();

    let listed = rows(&store);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].text, "Buy milk");
    assert!(!listed[0].completed);
    assert_eq!(placeholder(&store), None);
}

#[test]
fn successful_submit_hides_the_input_row_and_clears_the_draft() {
    let (mut store, _persister) = empty_store();

    let mut state = TodoState::new();
    state.show_input();
    state.set_draft("  laundry  ");
    state.submit(&mut store).unwrap();

    assert!(!state.input_visible());
    assert_eq!(state.draft(), "");
    assert_eq!(rows(&store)[0].text, "laundry");
}

#[test]
fn rejected_submit_keeps_the_input_row_open_for_a_retry() {
    let (mut store, _persister) = empty_store();

    let mut state = TodoState::new();
    state.show_input();
    state.set_draft("   ");

    assert_eq!(state.submit(&mut store), Err(TaskError::EmptyText));
    assert!(state.input_visible());
    assert_eq!(state.draft(), "   ");
    assert!(store.is_empty());

    state.set_draft("try again");
    state.submit(&mut store).unwrap();
    assert!(!state.input_visible());
}

#[test]
fn rows_carry_the_completion_flag_for_strikethrough_styling() {
    let (mut store, _persister) = empty_store();

    let done = store.add_task("done").unwrap();
    store.add_task("open").unwrap();
    store.toggle_completion(done);

    let listed = rows(&store);
    let done_row = listed.iter().find(|row| row.id == done).unwrap();
    assert!(done_row.completed);
    assert!(listed.iter().any(|row| !row.completed));
}
