//! Book list screen.

use crate::catalog::book::gateway::BookGateway;
use crate::catalog::book::reducer::BookSlice;
use crate::catalog::book::{effects, screens};
use crate::catalog::FEATURE_AREA;
use crate::i18n::Translator;
use crate::nav::Location;
use crate::store::{Store, StoreError};

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub view_href: String,
    pub edit_href: String,
    pub delete_href: String,
}

/// View model for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProps {
    pub title: String,
    pub loading: bool,
    pub rows: Vec<BookRow>,
    pub create_href: String,
    pub refresh_label: String,
    /// Present when the list is empty and no fetch is in flight.
    pub empty_message: Option<String>,
}

/// List screen controller. Holds no local state; everything it shows
/// comes from the slice.
#[derive(Debug, Default)]
pub struct ListScreen;

impl ListScreen {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch the initial fetch-all.
    pub async fn mount(&self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        effects::fetch_all(store, FEATURE_AREA, gateway).await
    }

    /// Re-dispatch fetch-all on user request.
    pub async fn refresh(&self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        effects::fetch_all(store, FEATURE_AREA, gateway).await
    }

    pub fn props(
        &self,
        store: &Store,
        i18n: &Translator,
        location: &Location,
    ) -> Result<ListProps, StoreError> {
        let state = store.state::<BookSlice>(FEATURE_AREA)?;
        let search = &location.search;

        let rows = state
            .entities
            .iter()
            .map(|book| {
                let id = screens::display_id(book.id);
                BookRow {
                    view_href: format!("/book/{id}{search}"),
                    edit_href: format!("/book/{id}/edit{search}"),
                    delete_href: format!("/book/{id}/delete{search}"),
                    id,
                    name: screens::display_text(book.name.as_deref()),
                    description: screens::display_text(book.description.as_deref()),
                    price: screens::display_number(book.price),
                }
            })
            .collect::<Vec<_>>();

        let empty_message = (rows.is_empty() && !state.loading)
            .then(|| i18n.translate("storefrontApp.book.home.notFound", "No Books found"));

        Ok(ListProps {
            title: i18n.translate("storefrontApp.book.home.title", "Books"),
            loading: state.loading,
            rows,
            create_href: format!("/book/new{search}"),
            refresh_label: i18n.translate("storefrontApp.book.home.refreshListLabel", "Refresh list"),
            empty_message,
        })
    }
}
