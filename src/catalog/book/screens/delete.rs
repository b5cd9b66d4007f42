//! Book delete-confirmation dialog.

use crate::catalog::book::gateway::BookGateway;
use crate::catalog::book::reducer::BookSlice;
use crate::catalog::book::{effects, screens};
use crate::catalog::FEATURE_AREA;
use crate::i18n::Translator;
use crate::nav::Location;
use crate::store::{Store, StoreError};

/// Explicit dialog state.
///
/// The original boolean-flag formulation made "delete succeeded" and
/// "no delete attempted yet" look alike; the tag removes the
/// ambiguity. A dialog in `Closed` never navigates again no matter
/// what the slice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDialogState {
    /// Dialog preparing; fetch dispatched, entity not yet shown.
    Loading,
    /// Entity loaded, awaiting the user's decision. A delete in
    /// flight stays here until the slice reports success.
    Confirming,
    /// Navigated away.
    Closed,
}

/// View model for the delete dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProps {
    pub heading: String,
    pub question: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub state: DeleteDialogState,
}

/// Delete-confirmation controller for one entity id.
#[derive(Debug)]
pub struct DeleteScreen {
    id: i64,
    state: DeleteDialogState,
}

impl DeleteScreen {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: DeleteDialogState::Loading,
        }
    }

    pub fn state(&self) -> DeleteDialogState {
        self.state
    }

    /// Dispatch the fetch for the record to confirm. The started
    /// action also lowers `update_success`, so a success flag left by
    /// an earlier operation can never close this dialog.
    pub async fn mount(&self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        effects::fetch(store, FEATURE_AREA, gateway, self.id).await
    }

    /// Dispatch the delete. Only meaningful while confirming.
    pub async fn confirm(&self, store: &Store, gateway: &dyn BookGateway) -> Result<(), StoreError> {
        if self.state != DeleteDialogState::Confirming {
            return Ok(());
        }
        effects::delete(store, FEATURE_AREA, gateway, self.id).await
    }

    /// User dismissed the dialog; navigate back to the list.
    pub fn close(&mut self, location: &Location) -> Option<String> {
        if self.state == DeleteDialogState::Closed {
            return None;
        }
        self.state = DeleteDialogState::Closed;
        Some(format!("/book{}", location.search))
    }

    /// Advance the dialog from observed slice state.
    ///
    /// Loading becomes Confirming once the fetched entity is in the
    /// slice. A delete success observed while Confirming closes the
    /// dialog and yields the back-to-list href exactly once.
    pub fn sync(&mut self, store: &Store, location: &Location) -> Result<Option<String>, StoreError> {
        let state = store.state::<BookSlice>(FEATURE_AREA)?;
        match self.state {
            DeleteDialogState::Loading => {
                if state.entity.id == Some(self.id) {
                    self.state = DeleteDialogState::Confirming;
                }
                Ok(None)
            }
            DeleteDialogState::Confirming => {
                if state.update_success {
                    self.state = DeleteDialogState::Closed;
                    Ok(Some(format!("/book{}", location.search)))
                } else {
                    Ok(None)
                }
            }
            DeleteDialogState::Closed => Ok(None),
        }
    }

    pub fn props(&self, store: &Store, i18n: &Translator) -> Result<DeleteProps, StoreError> {
        let entity = store.select::<BookSlice, _, _>(FEATURE_AREA, |state| state.entity.clone())?;
        Ok(DeleteProps {
            heading: i18n.translate("entity.delete.title", "Confirm delete operation"),
            question: i18n.translate_with(
                "storefrontApp.book.delete.question",
                &[("id", screens::display_id(entity.id))],
                "Are you sure you want to delete Book {{ id }}?",
            ),
            confirm_label: i18n.translate("entity.action.delete", "Delete"),
            cancel_label: i18n.translate("entity.action.cancel", "Cancel"),
            state: self.state,
        })
    }
}
