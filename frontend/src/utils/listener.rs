use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget};

/// A DOM event subscription that is removed when dropped.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let target: EventTarget = window()?.into();
        Self::attach(target, event, handler)
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let target: EventTarget = window()?.document()?.into();
        Self::attach(target, event, handler)
    }

    fn attach<F>(target: EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(e) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach {} listener: {:?}", event, e);
            return None;
        }
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Keydown listener on the window that hands the handler the pressed key and
/// calls `preventDefault` whenever the handler claims it.
pub fn on_window_key<F>(mut handler: F) -> Option<ListenerHandle>
where
    F: FnMut(&str) -> bool + 'static,
{
    ListenerHandle::on_window("keydown", move |event: Event| {
        if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            if handler(&key_event.key()) {
                key_event.prevent_default();
            }
        }
    })
}
