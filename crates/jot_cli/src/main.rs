//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jot_core` linkage outside
//!   the Flutter runtime.
//! - Keep output deterministic for quick local sanity checks.

use jot_core::storage::SqliteKeyValueStore;
use jot_core::{Note, NotesStore, Persister, TasksStore};

fn main() {
    println!("jot_core ping={}", jot_core::ping());
    println!("jot_core version={}", jot_core::core_version());

    // Exercise the full in-memory path once: storage open, both store
    // loads, one mutation each, and a drained persistence queue.
    match smoke_run() {
        Ok((notes, tasks)) => println!("jot_core smoke notes={notes} tasks={tasks}"),
        Err(err) => eprintln!("jot_core smoke failed: {err}"),
    }
}

fn smoke_run() -> Result<(usize, usize), String> {
    let kv = SqliteKeyValueStore::open_in_memory().map_err(|err| err.to_string())?;
    let writer = SqliteKeyValueStore::open_in_memory().map_err(|err| err.to_string())?;
    let persister = Persister::spawn(Box::new(writer)).map_err(|err| err.to_string())?;

    let mut notes = NotesStore::load(&kv, persister.handle());
    notes.add(Note::new("smoke", "probe"));

    let mut tasks = TasksStore::load(&kv, persister.handle());
    tasks.add_task("smoke probe").map_err(|err| err.to_string())?;

    persister.flush();
    Ok((notes.len(), tasks.tasks().len()))
}
