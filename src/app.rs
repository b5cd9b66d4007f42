//! Screen host: composes router, store, navigation, and screens.
//!
//! The host is the single-threaded event loop of the screen set. User
//! events come in through its methods, each of which dispatches into
//! the store, re-syncs the active screen against slice state, and
//! follows any navigation the screen decides on. Because effects are
//! awaited before syncing, a delete's completion is always observed
//! after its initiating dispatch and before the resulting navigation.

use crate::catalog;
use crate::catalog::book::gateway::BookGateway;
use crate::catalog::book::screens::{
    DeleteProps, DeleteScreen, DetailProps, DetailScreen, FormField, ListProps, ListScreen,
    UpdateProps, UpdateScreen,
};
use crate::i18n::Translator;
use crate::nav::{History, Location};
use crate::router::{self, Route};
use crate::store::{Store, StoreError};

/// The screen currently mounted at the host's location.
enum ActiveScreen {
    List(ListScreen),
    Detail(DetailScreen),
    Update(UpdateScreen),
    Delete(DeleteScreen),
    NotFound,
}

/// Rendered view model of whichever screen is active.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenProps {
    List(ListProps),
    Detail(DetailProps),
    Update(UpdateProps),
    Delete(DeleteProps),
    NotFound,
}

/// Hosts the book screen set over a store and a gateway.
pub struct ScreenHost<G: BookGateway> {
    store: Store,
    history: History,
    i18n: Translator,
    gateway: G,
    location: Location,
    screen: ActiveScreen,
}

impl<G: BookGateway> ScreenHost<G> {
    /// Build a host with a fresh store and register the catalog
    /// slices into it.
    pub fn new(gateway: G, i18n: Translator) -> Self {
        let store = Store::new();
        catalog::register(&store);
        Self {
            store,
            history: History::new(),
            i18n,
            gateway,
            location: Location::parse("/book"),
            screen: ActiveScreen::NotFound,
        }
    }

    /// Build a host over an existing (possibly shared) store.
    pub fn with_store(store: Store, gateway: G, i18n: Translator) -> Self {
        catalog::register(&store);
        Self {
            store,
            history: History::new(),
            i18n,
            gateway,
            location: Location::parse("/book"),
            screen: ActiveScreen::NotFound,
        }
    }

    /// Navigate to an href: resolve the route, mount its screen, and
    /// follow any navigation the mounted screen immediately decides
    /// on.
    pub async fn open(&mut self, href: &str) -> Result<(), StoreError> {
        let mut next = Some(href.to_string());
        while let Some(href) = next.take() {
            let location = Location::parse(&href);
            self.history.navigate(location.clone());
            self.location = location;

            self.screen = match router::resolve(&self.location.path) {
                Some(Route::List) => {
                    let screen = ListScreen::new();
                    screen.mount(&self.store, &self.gateway).await?;
                    ActiveScreen::List(screen)
                }
                Some(Route::Create) => {
                    let screen = UpdateScreen::create();
                    screen.mount(&self.store, &self.gateway).await?;
                    ActiveScreen::Update(screen)
                }
                Some(Route::Detail { id }) => {
                    let screen = DetailScreen::new(id);
                    screen.mount(&self.store, &self.gateway).await?;
                    ActiveScreen::Detail(screen)
                }
                Some(Route::Edit { id }) => {
                    let screen = UpdateScreen::edit(id);
                    screen.mount(&self.store, &self.gateway).await?;
                    ActiveScreen::Update(screen)
                }
                Some(Route::Delete { id }) => {
                    let screen = DeleteScreen::new(id);
                    screen.mount(&self.store, &self.gateway).await?;
                    ActiveScreen::Delete(screen)
                }
                None => ActiveScreen::NotFound,
            };

            next = self.sync_screen()?;
        }
        Ok(())
    }

    /// Re-dispatch the list fetch. Ignored on other screens.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        if let ActiveScreen::List(screen) = &self.screen {
            screen.refresh(&self.store, &self.gateway).await?;
        }
        Ok(())
    }

    /// Type into a form field of the update screen.
    pub fn field_input(&mut self, field: FormField, value: impl Into<String>) {
        if let ActiveScreen::Update(screen) = &mut self.screen {
            screen.field_input(field, value.into());
        }
    }

    /// Submit the update form; on save success the form navigates
    /// back to the list.
    pub async fn submit(&mut self) -> Result<(), StoreError> {
        if let ActiveScreen::Update(screen) = &mut self.screen {
            screen.submit(&self.store, &self.gateway).await?;
        }
        self.follow_navigation().await
    }

    /// Confirm the delete dialog; on success the dialog closes and
    /// navigates back to the list.
    pub async fn confirm_delete(&mut self) -> Result<(), StoreError> {
        if let ActiveScreen::Delete(screen) = &mut self.screen {
            screen.confirm(&self.store, &self.gateway).await?;
        }
        self.follow_navigation().await
    }

    /// Dismiss the delete dialog without deleting.
    pub async fn close_dialog(&mut self) -> Result<(), StoreError> {
        let target = match &mut self.screen {
            ActiveScreen::Delete(screen) => screen.close(&self.location),
            _ => None,
        };
        if let Some(href) = target {
            self.open(&href).await?;
        }
        Ok(())
    }

    /// Render the active screen into its view model.
    pub fn render(&self) -> Result<ScreenProps, StoreError> {
        match &self.screen {
            ActiveScreen::List(screen) => Ok(ScreenProps::List(screen.props(
                &self.store,
                &self.i18n,
                &self.location,
            )?)),
            ActiveScreen::Detail(screen) => Ok(ScreenProps::Detail(screen.props(
                &self.store,
                &self.i18n,
                &self.location,
            )?)),
            ActiveScreen::Update(screen) => Ok(ScreenProps::Update(screen.props(
                &self.store,
                &self.i18n,
                &self.location,
            )?)),
            ActiveScreen::Delete(screen) => {
                Ok(ScreenProps::Delete(screen.props(&self.store, &self.i18n)?))
            }
            ActiveScreen::NotFound => Ok(ScreenProps::NotFound),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Sync the active screen against slice state and perform the
    /// navigation it asks for, if any.
    async fn follow_navigation(&mut self) -> Result<(), StoreError> {
        if let Some(href) = self.sync_screen()? {
            self.open(&href).await?;
        }
        Ok(())
    }

    fn sync_screen(&mut self) -> Result<Option<String>, StoreError> {
        match &mut self.screen {
            ActiveScreen::Update(screen) => screen.sync(&self.store, &self.location),
            ActiveScreen::Delete(screen) => screen.sync(&self.store, &self.location),
            _ => Ok(None),
        }
    }
}
