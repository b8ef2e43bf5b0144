//! Fan-out helpers.
//!
//! [`fan_out`] runs a fixed set of closures in parallel and waits for all of
//! them. Tasks run on scoped threads, so they may borrow from the caller.

use std::sync::mpsc;
use std::thread;

/// A zero-argument unit of work for [`fan_out`].
pub type Task<'a> = Box<dyn FnOnce() + Send + 'a>;

/// Run every task on its own thread and return once all of them finished.
///
/// # Panics
///
/// Panics if `tasks` is empty. If a task panics, the panic is propagated
/// after every other task has been joined.
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use stdkit::sync::fan_out_range;
///
/// let counter = AtomicUsize::new(0);
/// let counter = &counter;
/// fan_out_range(3, |i| Box::new(move || {
///     counter.fetch_add(i, Ordering::Relaxed);
/// }));
/// assert_eq!(counter.load(Ordering::Relaxed), 3);
/// ```
pub fn fan_out(tasks: Vec<Task<'_>>) {
    assert!(!tasks.is_empty(), "`tasks` must have at least one function");

    tracing::trace!(tasks = tasks.len(), "fanning out");

    thread::scope(|scope| {
        for task in tasks {
            scope.spawn(task);
        }
    });
}

/// Build `n` tasks with `provide(i)` for `i` in `0..n`, then [`fan_out`]
/// them.
///
/// # Panics
///
/// Panics if `n` is zero, or if any task panics.
pub fn fan_out_range<'a, F>(n: usize, provide: F)
where
    F: FnMut(usize) -> Task<'a>,
{
    assert!(n > 0, "`n` must be greater than zero");

    fan_out((0..n).map(provide).collect());
}

/// Collect every value sent on `rx` until all senders are dropped.
pub fn drain<T>(rx: mpsc::Receiver<T>) -> Vec<T> {
    rx.into_iter().collect()
}

/// Asynchronous counterpart of [`drain`] for tokio channels.
pub async fn drain_async<T>(mut rx: tokio::sync::mpsc::Receiver<T>) -> Vec<T> {
    let mut values = Vec::new();
    while let Some(value) = rx.recv().await {
        values.push(value);
    }

    values
}
