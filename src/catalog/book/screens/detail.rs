//! Book detail screen.

use crate::catalog::book::gateway::BookGateway;
use crate::catalog::book::reducer::BookSlice;
use crate::catalog::book::{effects, screens};
use crate::catalog::FEATURE_AREA;
use crate::i18n::Translator;
use crate::nav::Location;
use crate::store::{Store, StoreError};

/// View model for the detail screen. Absent entity fields render as
/// empty strings; a failed fetch shows blank fields, not an error
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailProps {
    pub heading: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub back_href: String,
    pub edit_href: String,
}

/// Detail screen controller for one entity id.
#[derive(Debug)]
pub struct DetailScreen {
    id: i64,
}

impl DetailScreen {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    /// Dispatch the fetch for the routed id.
    pub async fn mount(&self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        effects::fetch(store, FEATURE_AREA, gateway, self.id).await
    }

    pub fn props(
        &self,
        store: &Store,
        i18n: &Translator,
        location: &Location,
    ) -> Result<DetailProps, StoreError> {
        let entity = store.select::<BookSlice, _, _>(FEATURE_AREA, |state| state.entity.clone())?;
        let search = &location.search;

        Ok(DetailProps {
            heading: i18n.translate("storefrontApp.book.detail.title", "Book"),
            id: screens::display_id(entity.id),
            name: screens::display_text(entity.name.as_deref()),
            description: screens::display_text(entity.description.as_deref()),
            price: screens::display_number(entity.price),
            back_href: format!("/book{search}"),
            edit_href: format!("/book/{}/edit{search}", self.id),
        })
    }
}
