//! Dropdown lifecycle controller.
//!
//! The controller owns the only mutable state in the system: whether the
//! popup exists, which view it shows, and the current search term. Every
//! transition is a method here; the host forwards user interactions and
//! renders whatever [`DropdownController::content`] holds afterwards. Repeated
//! invocations of guarded transitions (open-when-open, close-when-closed,
//! same-view reselect) are true no-ops: no duplicate listener attachment, no
//! duplicate recomputes.

use rand::seq::SliceRandom;
use tracing::{debug, error, info, warn};

use crate::core::config::SwitchConfig;
use crate::core::entity::{EntityKey, EntityKind};
use crate::core::seek::SeekBucket;
use crate::core::views::{self, EntityView};
use crate::host::listeners::DISMISS_NAMESPACE;
use crate::host::{
    CommandInjector, DismissListeners, EntityListing, EntitySource, NavigationSink,
    PlacementHints, PositionHandle, Positioning, SwitchError,
};
use crate::ui::list::{empty_message, EntityListItem, ListContent};

/// Per-open dropdown state. Created on `open()`, discarded entirely on
/// `close()`; nothing survives across opens.
#[derive(Debug, Clone)]
struct ViewState {
    selected_view: EntityView,
    search_term: String,
    /// Active-entity snapshot captured when the dropdown opened. Held
    /// immutable for the dropdown's lifetime; closing and reopening refreshes
    /// it.
    active: Option<EntityKey>,
}

pub struct DropdownController {
    config: SwitchConfig,
    listing: EntityListing,
    navigation: Box<dyn NavigationSink>,
    injector: Box<dyn CommandInjector>,
    positioning: Box<dyn Positioning>,
    listeners: Box<dyn DismissListeners>,
    /// Element id of the trigger button the popup anchors to.
    anchor: String,
    state: Option<ViewState>,
    position_handle: Option<PositionHandle>,
    content: ListContent,
}

impl DropdownController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: SwitchConfig,
        source: Box<dyn EntitySource>,
        navigation: Box<dyn NavigationSink>,
        injector: Box<dyn CommandInjector>,
        positioning: Box<dyn Positioning>,
        listeners: Box<dyn DismissListeners>,
        anchor: impl Into<String>,
    ) -> Self {
        Self {
            config,
            listing: EntityListing::select(source),
            navigation,
            injector,
            positioning,
            listeners,
            anchor: anchor.into(),
            state: None,
            position_handle: None,
            content: ListContent::Items(Vec::new()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn selected_view(&self) -> Option<EntityView> {
        self.state.as_ref().map(|state| state.selected_view)
    }

    pub fn search_term(&self) -> Option<&str> {
        self.state.as_ref().map(|state| state.search_term.as_str())
    }

    pub fn active_snapshot(&self) -> Option<&EntityKey> {
        self.state.as_ref().and_then(|state| state.active.as_ref())
    }

    /// What the list area currently shows.
    pub fn content(&self) -> &ListContent {
        &self.content
    }

    /// The seek bar only appears on the name-sorted views, and a live search
    /// term hides it.
    pub fn seek_bar_visible(&self) -> bool {
        match &self.state {
            Some(state) => {
                matches!(
                    state.selected_view,
                    EntityView::Favorites | EntityView::All
                ) && state.search_term.is_empty()
            }
            None => false,
        }
    }

    /// Row index a seek click on `bucket` scrolls to, over the currently
    /// rendered list. `None` for unoccupied buckets (they are inert).
    pub fn seek_row(&self, bucket: SeekBucket) -> Option<usize> {
        self.content.items().iter().position(|item| item.bucket == bucket)
    }

    /// Opens the dropdown: captures a fresh active-entity snapshot, resets to
    /// the Recents view with no search, computes the initial list, then
    /// attaches positioning and the dismissal listeners. No-op when already
    /// open. A missing anchor or a failed listing aborts back to closed.
    pub async fn open(&mut self) -> Result<(), SwitchError> {
        if self.state.is_some() {
            return Ok(());
        }

        self.state = Some(ViewState {
            selected_view: EntityView::Recents,
            search_term: String::new(),
            active: self.listing.active_key(),
        });

        if let Err(err) = self.recompute().await {
            error!("initial listing failed, aborting open: {err}");
            self.state = None;
            self.content = ListContent::Items(Vec::new());
            return Err(err);
        }

        match self.positioning.attach(&self.anchor, PlacementHints::default()) {
            Ok(handle) => self.position_handle = Some(handle),
            Err(err) => {
                error!("cannot open dropdown: {err}");
                self.state = None;
                self.content = ListContent::Items(Vec::new());
                return Err(err);
            }
        }

        self.listeners.attach(DISMISS_NAMESPACE);
        Ok(())
    }

    /// Tears the dropdown down: detaches positioning, removes every dismissal
    /// listener, and discards the view state. Idempotent.
    pub fn close(&mut self) {
        if self.state.is_none() {
            return;
        }
        if let Some(handle) = self.position_handle.take() {
            self.positioning.detach(handle);
        }
        self.listeners.detach(DISMISS_NAMESPACE);
        self.state = None;
        self.content = ListContent::Items(Vec::new());
    }

    /// Switches the view, clearing any search term. Reselecting the current
    /// view is a no-op to avoid a redundant recompute and render.
    pub async fn select_view(&mut self, view: EntityView) {
        {
            let Some(state) = self.state.as_mut() else {
                return;
            };
            if state.selected_view == view {
                return;
            }
            state.selected_view = view;
            state.search_term.clear();
        }
        if let Err(err) = self.recompute().await {
            error!("view switch kept previous list: {err}");
        }
    }

    /// Applies a search term (lowercased, trimmed) and recomputes from the
    /// current view's base set.
    pub async fn set_search(&mut self, term: &str) {
        {
            let Some(state) = self.state.as_mut() else {
                return;
            };
            state.search_term = term.trim().to_lowercase();
        }
        if let Err(err) = self.recompute().await {
            error!("search kept previous list: {err}");
        }
    }

    /// Recomputes the rendered list with the current view and search term.
    /// Used when the host reports entity edits while the dropdown is open;
    /// no-op when closed.
    pub async fn refresh(&mut self) {
        if self.state.is_none() {
            return;
        }
        if let Err(err) = self.recompute().await {
            error!("refresh kept previous list: {err}");
        }
    }

    /// Switches the application to `key` via the navigation sink, persists
    /// the selection, and closes. A sink failure is caught and logged and the
    /// dropdown stays open so the user can retry.
    pub async fn select_entity(&mut self, key: &EntityKey) {
        if self.state.is_none() {
            return;
        }
        match self.dispatch_navigation(key).await {
            Ok(()) => {
                self.navigation.persist_settings();
                self.close();
            }
            Err(reason) => {
                error!("{}", SwitchError::Navigation(reason));
            }
        }
    }

    /// Picks a uniformly random entry from the currently rendered list and
    /// switches to it. Does nothing (beyond a diagnostic) when the list is
    /// empty.
    pub async fn local_random(&mut self) {
        if self.state.is_none() {
            return;
        }
        let chosen = {
            let items = self.content.items();
            items.choose(&mut rand::thread_rng()).cloned()
        };
        let Some(item) = chosen else {
            info!("no entries in the rendered list to randomize");
            return;
        };
        debug!("randomly selected {:?}", item.name);
        self.select_entity(&item.key).await;
    }

    /// Hands `command` to the command injector and closes unconditionally,
    /// whatever the injector reports.
    pub async fn fire_auxiliary_command(&mut self, command: &str) {
        if self.state.is_none() {
            return;
        }
        if let Err(reason) = self.injector.run_command(command).await {
            warn!("auxiliary command {command} failed: {reason}");
        }
        self.close();
    }

    /// Fires the configured story command (`/reminisce` by default).
    pub async fn fire_story_command(&mut self) {
        let command = self.config.auxiliary_command.clone();
        self.fire_auxiliary_command(&command).await;
    }

    /// Activation order matters: the opposite active slot is cleared only
    /// after the fallible sink calls succeed, so a failed switch leaves the
    /// host's previous selection intact for retry.
    async fn dispatch_navigation(&mut self, key: &EntityKey) -> Result<(), String> {
        match key.kind {
            EntityKind::Character => {
                self.navigation.activate_character(&key.id).await?;
                self.navigation.open_character_chat(&key.id).await?;
                self.navigation.clear_active_group();
            }
            EntityKind::Group => {
                self.navigation.activate_group(&key.id).await?;
                self.navigation.open_group_chat(&key.id).await?;
                self.navigation.clear_active_character();
            }
        }
        Ok(())
    }

    /// Rebuilds the rendered list from the entity source. Shows the loading
    /// placeholder while the (possibly asynchronous) listing resolves and
    /// replaces it atomically with the final list or an empty-state message.
    /// On a listing failure the previous content is restored.
    async fn recompute(&mut self) -> Result<(), SwitchError> {
        let (view, term, active) = match &self.state {
            Some(state) => (
                state.selected_view,
                state.search_term.clone(),
                state.active.clone(),
            ),
            None => return Ok(()),
        };

        let previous = std::mem::replace(&mut self.content, ListContent::Loading);
        let entities = match self.listing.entities().await {
            Ok(entities) => entities,
            Err(err) => {
                self.content = previous;
                return Err(err);
            }
        };

        let base = views::base_entities(view, &entities, active.as_ref(), self.config.recents_limit);
        let filtered = views::filter_by_term(&base, &term);

        self.content = if filtered.is_empty() {
            ListContent::Empty(empty_message(view, !term.is_empty()))
        } else {
            ListContent::Items(filtered.iter().map(EntityListItem::from_entity).collect())
        };
        Ok(())
    }
}
