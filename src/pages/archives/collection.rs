//! Shared list/editor plumbing for archive pages.
//!
//! DESIGN
//! ======
//! Every archive page follows one flow: list the collection on mount, open
//! an editor for a new or existing record, save, reload. `Collection` and
//! `Editing` capture that flow once, generic over `ArchiveRecord`.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use leptos::prelude::*;

use crate::net::ApiClient;
use crate::net::archives::ArchiveRecord;
use crate::pages::report;
use crate::util::{dialog, task};

/// Editor panel state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Editing {
    #[default]
    Closed,
    New,
    Existing(i64),
}

impl Editing {
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn id(self) -> Option<i64> {
        match self {
            Self::Existing(id) => Some(id),
            Self::Closed | Self::New => None,
        }
    }

    /// Panel heading, e.g. "Nuevo Sector" / "Editar Sector".
    pub fn heading(self, noun: &str) -> String {
        self.titled("Nuevo", noun)
    }

    /// `heading` for feminine nouns: "Nueva Herramienta".
    pub fn heading_feminine(self, noun: &str) -> String {
        self.titled("Nueva", noun)
    }

    fn titled(self, new: &str, noun: &str) -> String {
        match self {
            Self::Existing(_) => format!("Editar {noun}"),
            Self::Closed | Self::New => format!("{new} {noun}"),
        }
    }
}

/// Loaded records of one collection, plus the client used to change them.
pub struct Collection<R: Send + Sync + 'static> {
    pub items: RwSignal<Vec<R>>,
    pub loading: RwSignal<bool>,
    api: StoredValue<ApiClient>,
}

impl<R: Send + Sync + 'static> Clone for Collection<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for Collection<R> {}

impl<R> Collection<R>
where
    R: ArchiveRecord + Clone + Send + Sync,
{
    /// Empty collection, flagged as loading until the first `load`.
    pub fn new(api: ApiClient) -> Self {
        Self { items: RwSignal::new(Vec::new()), loading: RwSignal::new(true), api: StoredValue::new(api) }
    }

    pub fn api(self) -> ApiClient {
        self.api.get_value()
    }

    /// Fetch (or refetch) every record.
    pub fn load(self) {
        let api = self.api();
        self.loading.set(true);
        task::spawn(async move {
            match api.list::<R>().await {
                Ok(items) => self.items.set(items),
                Err(err) => report(&format!("Error al cargar {}", R::COLLECTION), &err),
            }
            self.loading.set(false);
        });
    }

    /// Create or update according to `editing`, reload, then run `on_saved`.
    pub fn save<F>(self, editing: Editing, input: R::Input, on_saved: F)
    where
        R::Input: 'static,
        F: FnOnce() + 'static,
    {
        let api = self.api();
        task::spawn(async move {
            let result = match editing.id() {
                Some(id) => api.update::<R>(id, &input).await,
                None => api.create::<R>(&input).await,
            };
            match result {
                Ok(_) => {
                    on_saved();
                    self.load();
                }
                Err(err) => report("Error al guardar", &err),
            }
        });
    }

    /// Delete after confirmation, then reload.
    pub fn remove(self, id: i64, prompt: &str) {
        if !dialog::confirm(prompt) {
            return;
        }
        let api = self.api();
        task::spawn(async move {
            match api.remove::<R>(id).await {
                Ok(()) => self.load(),
                Err(err) => report("Error al eliminar", &err),
            }
        });
    }
}

/// `(value, label)` choices for a record `<select>`.
pub fn options<R>(records: &[R], id_of: fn(&R) -> i64, label_of: fn(&R) -> String) -> Vec<(String, String)> {
    records.iter().map(|r| (id_of(r).to_string(), label_of(r))).collect()
}

/// Display name for an optional foreign key, `-` when unset or unknown.
pub fn label_for<R>(records: &[R], id: Option<i64>, id_of: fn(&R) -> i64, label_of: fn(&R) -> String) -> String {
    id.and_then(|id| records.iter().find(|r| id_of(r) == id))
        .map_or_else(|| "-".to_owned(), label_of)
}
