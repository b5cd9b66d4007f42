//! Book update screen — create and edit modes of the same form.

use crate::catalog::book::gateway::BookGateway;
use crate::catalog::book::model::Book;
use crate::catalog::book::reducer::BookSlice;
use crate::catalog::book::{effects, screens};
use crate::catalog::FEATURE_AREA;
use crate::i18n::Translator;
use crate::nav::Location;
use crate::store::{Store, StoreError};

/// Editable fields of the book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
}

/// View model for the update screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProps {
    pub heading: String,
    /// Create mode: no id, all fields start empty.
    pub is_new: bool,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    /// Field-level error blocking submit, if any.
    pub price_error: Option<String>,
    pub saving: bool,
    pub back_href: String,
}

/// Update screen controller.
///
/// Form fields are component-local strings. In edit mode, fields the
/// user has not touched refresh from the slice entity when the fetch
/// completes; touched fields keep the user's input.
#[derive(Debug)]
pub struct UpdateScreen {
    id: Option<i64>,
    name: String,
    description: String,
    price: String,
    touched_name: bool,
    touched_description: bool,
    touched_price: bool,
    price_error: Option<String>,
    navigated: bool,
}

impl UpdateScreen {
    /// Create-mode form (route `new`).
    pub fn create() -> Self {
        Self::with_id(None)
    }

    /// Edit-mode form for an existing id.
    pub fn edit(id: i64) -> Self {
        Self::with_id(Some(id))
    }

    fn with_id(id: Option<i64>) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            touched_name: false,
            touched_description: false,
            touched_price: false,
            price_error: None,
            navigated: false,
        }
    }

    /// Create mode resets the slice so no stale entity shows; edit
    /// mode fetches the routed record.
    pub async fn mount(&self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        match self.id {
            None => effects::reset(store, FEATURE_AREA),
            Some(id) => effects::fetch(store, FEATURE_AREA, gateway, id).await,
        }
    }

    /// Record user input into a form field.
    pub fn field_input(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => {
                self.name = value;
                self.touched_name = true;
            }
            FormField::Description => {
                self.description = value;
                self.touched_description = true;
            }
            FormField::Price => {
                self.price = value;
                self.touched_price = true;
                self.price_error = None;
            }
        }
    }

    /// Parse the form and dispatch a save.
    ///
    /// An unparseable price is a field error that blocks the dispatch
    /// entirely; nothing reaches the gateway.
    pub async fn submit(&mut self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(message) => {
                self.price_error = Some(message);
                return Ok(());
            }
        };

        let book = Book {
            id: self.id,
            name: none_if_empty(&self.name),
            description: none_if_empty(&self.description),
            price,
        };
        effects::save(store, FEATURE_AREA, gateway, book).await
    }

    /// Fold slice state back into the form and decide navigation.
    ///
    /// Returns the href to navigate to when a save has succeeded while
    /// this form was mounted; the navigation fires at most once.
    pub fn sync(&mut self, store: &Store, location: &Location) -> Result<Option<String>, StoreError> {
        let state = store.state::<BookSlice>(FEATURE_AREA)?;

        if state.update_success && !self.navigated {
            self.navigated = true;
            return Ok(Some(format!("/book{}", location.search)));
        }

        // Edit mode: the fetched entity fills fields the user has not
        // typed into yet.
        if self.id.is_some() && state.entity.id == self.id {
            if !self.touched_name {
                self.name = screens::display_text(state.entity.name.as_deref());
            }
            if !self.touched_description {
                self.description = screens::display_text(state.entity.description.as_deref());
            }
            if !self.touched_price {
                self.price = screens::display_number(state.entity.price);
            }
        }

        Ok(None)
    }

    pub fn props(
        &self,
        store: &Store,
        i18n: &Translator,
        location: &Location,
    ) -> Result<UpdateProps, StoreError> {
        let saving = store.select::<BookSlice, _, _>(FEATURE_AREA, |state| state.updating)?;
        let heading = if self.id.is_none() {
            i18n.translate("storefrontApp.book.home.createLabel", "Create a new Book")
        } else {
            i18n.translate("storefrontApp.book.home.createOrEditLabel", "Create or edit a Book")
        };

        Ok(UpdateProps {
            heading,
            is_new: self.id.is_none(),
            id: screens::display_id(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            price_error: self.price_error.clone(),
            saving,
            back_href: format!("/book{}", location.search),
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Empty input means no price; anything else must parse as a number.
fn parse_price(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("'{trimmed}' is not a valid price"))
}

#[cfg(test)]
mod tests {
    use super::parse_price;

    #[test]
    fn empty_price_is_absent() {
        assert_eq!(parse_price("  "), Ok(None));
    }

    #[test]
    fn numeric_price_parses() {
        assert_eq!(parse_price("12.5"), Ok(Some(12.5)));
    }

    #[test]
    fn word_price_is_an_error() {
        assert!(parse_price("twelve").is_err());
    }
}
