//! Shared item detail surface.
//!
//! Several views (home search results, search page, a box's item list) show
//! item detail in the same dialog, which lives at the application root. The
//! views do not know about each other or about the dialog; they go through a
//! [`DetailMediator`] built once at start-up and handed to them.
//!
//! ```text
//! Idle --present--> Presenting --close/edit--> Idle
//!                   Presenting --present--> Presenting (new session)
//! ```
//!
//! Each presentation is a session with a single-use edit handler. Replacing
//! or closing a session drops its handler without calling it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::DetailError;
use crate::models::Item;

/// The component that actually renders item detail.
pub trait DetailSurface {
    fn show(&self, session: SessionId, item: &Item);
    fn hide(&self);
}

/// Identifies one presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Names the view that asked for a presentation (for logs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewToken(pub &'static str);

impl fmt::Display for ViewToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

type EditHandler = Box<dyn FnOnce(Item)>;

struct DetailSession {
    id: SessionId,
    item: Item,
    origin: ViewToken,
    on_edit: EditHandler,
}

#[derive(Default)]
struct MediatorState {
    surface: Option<Rc<dyn DetailSurface>>,
    session: Option<DetailSession>,
    next_id: u64,
}

/// Broker between views and the detail surface.
///
/// Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct DetailMediator {
    inner: Rc<RefCell<MediatorState>>,
}

impl DetailMediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the mounted surface. Replaces any previous one.
    pub fn attach(&self, surface: Rc<dyn DetailSurface>) {
        self.inner.borrow_mut().surface = Some(surface);
        debug!("detail surface attached");
    }

    /// Unregister the surface; an open session ends without firing.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.surface = None;
        if let Some(session) = inner.session.take() {
            debug!(origin = %session.origin, "detail session dropped on detach");
        }
    }

    /// Show `item` on the shared surface.
    ///
    /// `on_edit` runs at most once, and only if the user asks to edit this
    /// item before the session is closed or replaced.
    pub fn present<F>(
        &self,
        item: Item,
        origin: ViewToken,
        on_edit: F,
    ) -> Result<SessionId, DetailError>
    where
        F: FnOnce(Item) + 'static,
    {
        let (surface, id, replaced) = {
            let mut inner = self.inner.borrow_mut();
            let Some(surface) = inner.surface.clone() else {
                warn!(%origin, item_id = item.id, "detail surface not mounted");
                return Err(DetailError::SurfaceUnavailable);
            };

            inner.next_id += 1;
            let id = SessionId(inner.next_id);
            let replaced = inner.session.replace(DetailSession {
                id,
                item: item.clone(),
                origin,
                on_edit: Box::new(on_edit),
            });
            (surface, id, replaced)
        };

        if let Some(old) = replaced {
            debug!(old_origin = %old.origin, %origin, "detail session replaced");
        }
        debug!(%origin, item_id = item.id, "presenting item detail");

        // Borrow released: the surface may call back into the mediator.
        surface.show(id, &item);
        Ok(id)
    }

    /// The surface's edit button for session `id`.
    ///
    /// Ends the session, hides the surface and hands the item to the
    /// session's handler. Returns `false` if `id` is no longer current.
    pub fn request_edit(&self, id: SessionId) -> bool {
        let Some((session, surface)) = self.take_session(id) else {
            debug!(?id, "edit request for inactive session ignored");
            return false;
        };

        if let Some(surface) = surface {
            surface.hide();
        }
        debug!(origin = %session.origin, item_id = session.item.id, "edit requested");
        (session.on_edit)(session.item);
        true
    }

    /// Close session `id` (explicit close or dismissal). Its handler
    /// becomes inert. Returns `false` if `id` is no longer current.
    pub fn close(&self, id: SessionId) -> bool {
        let Some((session, surface)) = self.take_session(id) else {
            return false;
        };

        if let Some(surface) = surface {
            surface.hide();
        }
        debug!(origin = %session.origin, "detail session closed");
        true
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.inner.borrow().session.as_ref().map(|s| s.id)
    }

    fn take_session(
        &self,
        id: SessionId,
    ) -> Option<(DetailSession, Option<Rc<dyn DetailSurface>>)> {
        let mut inner = self.inner.borrow_mut();
        if inner.session.as_ref().map(|s| s.id) != Some(id) {
            return None;
        }
        let session = inner.session.take()?;
        Some((session, inner.surface.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        shown: RefCell<Option<(SessionId, Item)>>,
        hides: Cell<usize>,
    }

    impl DetailSurface for FakeSurface {
        fn show(&self, session: SessionId, item: &Item) {
            *self.shown.borrow_mut() = Some((session, item.clone()));
        }

        fn hide(&self) {
            self.hides.set(self.hides.get() + 1);
            *self.shown.borrow_mut() = None;
        }
    }

    fn item(id: u64, name: &str) -> Item {
        Item {
            id,
            box_id: 40 + id,
            name: name.to_string(),
            description: None,
            quantity: 1,
            category: None,
            photo_path: None,
            storage_box: None,
        }
    }

    fn mediator_with_surface() -> (DetailMediator, Rc<FakeSurface>) {
        let mediator = DetailMediator::new();
        let surface = Rc::new(FakeSurface::default());
        mediator.attach(surface.clone());
        (mediator, surface)
    }

    fn recorder() -> (Rc<RefCell<Vec<Item>>>, impl Fn() -> Box<dyn FnOnce(Item)>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        let make = move || {
            let sink = Rc::clone(&sink);
            Box::new(move |item: Item| sink.borrow_mut().push(item)) as Box<dyn FnOnce(Item)>
        };
        (fired, make)
    }

    const HOME: ViewToken = ViewToken("home");
    const BOX: ViewToken = ViewToken("box");

    #[test]
    fn test_present_shows_item() {
        let (mediator, surface) = mediator_with_surface();

        let id = mediator.present(item(1, "Tape"), HOME, |_| {}).unwrap();

        let shown = surface.shown.borrow().clone().unwrap();
        assert_eq!(shown.0, id);
        assert_eq!(shown.1.name, "Tape");
        assert_eq!(mediator.active_session(), Some(id));
    }

    #[test]
    fn test_edit_fires_once() {
        let (mediator, surface) = mediator_with_surface();
        let (fired, handler) = recorder();

        let id = mediator.present(item(1, "Tape"), HOME, handler()).unwrap();

        assert!(mediator.request_edit(id));
        assert!(!mediator.request_edit(id));
        assert_eq!(fired.borrow().len(), 1);
        assert_eq!(fired.borrow()[0].box_id, 41);
        assert_eq!(surface.hides.get(), 1);
        assert_eq!(mediator.active_session(), None);
    }

    #[test]
    fn test_replaced_session_handler_never_fires() {
        let (mediator, _surface) = mediator_with_surface();
        let (fired_a, handler_a) = recorder();
        let (fired_b, handler_b) = recorder();

        let a = mediator.present(item(1, "Tape"), HOME, handler_a()).unwrap();
        let b = mediator.present(item(2, "Glue"), BOX, handler_b()).unwrap();
        assert_ne!(a, b);

        // A stale edit for A is ignored; B's edit reaches only B.
        assert!(!mediator.request_edit(a));
        assert!(mediator.request_edit(b));

        assert!(fired_a.borrow().is_empty());
        assert_eq!(fired_b.borrow()[0].name, "Glue");
    }

    #[test]
    fn test_close_makes_handler_inert() {
        let (mediator, surface) = mediator_with_surface();
        let (fired, handler) = recorder();

        let id = mediator.present(item(1, "Tape"), HOME, handler()).unwrap();
        assert!(mediator.close(id));

        assert!(!mediator.request_edit(id));
        assert!(fired.borrow().is_empty());
        assert!(surface.shown.borrow().is_none());
    }

    #[test]
    fn test_stale_close_keeps_newer_session() {
        let (mediator, surface) = mediator_with_surface();

        let a = mediator.present(item(1, "Tape"), HOME, |_| {}).unwrap();
        let b = mediator.present(item(2, "Glue"), HOME, |_| {}).unwrap();

        assert!(!mediator.close(a));
        assert_eq!(mediator.active_session(), Some(b));
        assert_eq!(surface.hides.get(), 0);
    }

    #[test]
    fn test_present_without_surface_is_reported() {
        let mediator = DetailMediator::new();
        let (fired, handler) = recorder();

        let result = mediator.present(item(1, "Tape"), HOME, handler());

        assert_eq!(result, Err(DetailError::SurfaceUnavailable));
        assert_eq!(mediator.active_session(), None);
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_detach_drops_session() {
        let (mediator, _surface) = mediator_with_surface();
        let (fired, handler) = recorder();
        let id = mediator.present(item(1, "Tape"), HOME, handler()).unwrap();

        mediator.detach();

        assert!(!mediator.request_edit(id));
        assert_eq!(
            mediator.present(item(2, "Glue"), HOME, |_| {}),
            Err(DetailError::SurfaceUnavailable)
        );
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_handler_may_present_again() {
        let (mediator, surface) = mediator_with_surface();
        let again = mediator.clone();

        let id = mediator
            .present(item(1, "Tape"), HOME, move |edited| {
                let _ = again.present(edited, BOX, |_| {});
            })
            .unwrap();
        assert!(mediator.request_edit(id));

        assert!(mediator.active_session().is_some());
        assert_eq!(surface.shown.borrow().as_ref().map(|s| s.1.id), Some(1));
    }
}
