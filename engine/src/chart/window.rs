// Window-level resize broadcast. Single-threaded: listeners run on the UI loop.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

pub type ListenerId = u64;

type Listener = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Cloning yields another handle onto the same listener set.
#[derive(Clone, Default)]
pub struct WindowSignal {
    registry: Rc<RefCell<Registry>>,
}

impl WindowSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        id
    }

    /// Returns false when `id` was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(lid, _)| *lid != id);
        registry.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Notifies every listener registered when the call starts. Listeners may
    /// subscribe or unsubscribe while being notified.
    pub fn emit_resize(&self) {
        let snapshot: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        trace!(listeners = snapshot.len(), "Window resize");
        for listener in snapshot {
            if let Ok(mut f) = listener.try_borrow_mut() {
                (*f)();
            }
        }
    }
}

impl fmt::Debug for WindowSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowSignal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscribe_emit_unsubscribe() {
        let window = WindowSignal::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = window.subscribe(move || h.set(h.get() + 1));
        window.emit_resize();
        window.emit_resize();
        assert_eq!(hits.get(), 2);
        assert!(window.unsubscribe(id));
        assert!(!window.unsubscribe(id));
        window.emit_resize();
        assert_eq!(hits.get(), 2);
        assert_eq!(window.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let window = WindowSignal::new();
        let handle = window.clone();
        let own_id = Rc::new(Cell::new(None));
        let slot = Rc::clone(&own_id);
        let id = window.subscribe(move || {
            if let Some(id) = slot.get() {
                handle.unsubscribe(id);
            }
        });
        own_id.set(Some(id));
        window.emit_resize();
        assert_eq!(window.listener_count(), 0);
    }
}
