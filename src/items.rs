use std::sync::Arc;

use parking_lot::Mutex;

/// A candidate tab: a caller supplied payload (tab id, URL, ...)
/// plus the display title the matcher runs on. The engine never
/// inspects `data`; it only reads `title`.
#[derive(Debug)]
pub struct Item<T> {
    pub data: T,
    pub title: Box<str>,
}

/// Handle for feeding candidates into a
/// [`Switchboard`](crate::Switchboard), typically right after the
/// asynchronous tab enumeration resolved. Handles are cheap to clone
/// and independent of the engine's own borrows, so the enumeration
/// callback can own one.
pub struct Injector<T> {
    items: Arc<Mutex<Vec<Item<T>>>>,
    notify: Arc<dyn Fn() + Sync + Send>,
}

impl<T> Clone for Injector<T> {
    fn clone(&self) -> Self {
        Injector {
            items: self.items.clone(),
            notify: self.notify.clone(),
        }
    }
}

impl<T> Injector<T> {
    pub(crate) fn new(
        items: Arc<Mutex<Vec<Item<T>>>>,
        notify: Arc<dyn Fn() + Sync + Send>,
    ) -> Self {
        Injector { items, notify }
    }

    /// Appends a single candidate and fires the notify callback so
    /// the UI knows a refilter is due.
    pub fn push(&self, data: T, title: impl Into<Box<str>>) {
        self.items.lock().push(Item {
            data,
            title: title.into(),
        });
        (self.notify)();
    }

    /// Appends a whole snapshot, holding the lock once and
    /// notifying once.
    pub fn extend<S: Into<Box<str>>>(&self, items: impl IntoIterator<Item = (T, S)>) {
        let mut guard = self.items.lock();
        guard.extend(items.into_iter().map(|(data, title)| Item {
            data,
            title: title.into(),
        }));
        drop(guard);
        (self.notify)();
    }

    /// Drops all candidates, e.g. before re-enumerating tabs after
    /// one was closed.
    pub fn clear(&self) {
        self.items.lock().clear();
        (self.notify)();
    }

    /// Number of injected candidates.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}
