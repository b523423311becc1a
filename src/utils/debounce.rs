use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once they stop for
/// `delay_ms`.
///
/// Returns `None` outside a browser window. Dropping the listener removes
/// it, and any pending timeout is cancelled with it.
///
/// ```rust,ignore
/// use_effect_with(deps, move |_| {
///     let listener = on_resize_settled(Config::RESIZE_DEBOUNCE_MS, move || redraw());
///     move || drop(listener)
/// });
/// ```
pub fn on_resize_settled<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Overwriting drops, and so cancels, the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
