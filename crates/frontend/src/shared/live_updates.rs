//! Change notifications for a server collection.
//!
//! Two interchangeable backends deliver the same `on_changed` callback:
//! push frames over a WebSocket, or a timer that fires every poll interval.
//! [`Subscription::with_fallback`] prefers push and drops to polling for the
//! rest of its life once the socket errors or closes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use contracts::shared::live_update::CollectionEvent;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::api_utils::ws_url;
use super::config::use_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateSource {
    Push,
    Poll,
}

impl UpdateSource {
    pub fn label(self) -> &'static str {
        match self {
            UpdateSource::Push => "Live",
            UpdateSource::Poll => "Polling",
        }
    }
}

/// What triggered a change notification.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    Pushed(CollectionEvent),
    PollTick,
}

#[derive(Clone, Debug)]
pub struct SubscriptionOptions {
    pub ws_url: String,
    pub collection: &'static str,
    pub poll_interval_ms: u32,
}

type OnChanged = Rc<dyn Fn(Change)>;
type OnSource = Rc<dyn Fn(UpdateSource)>;

struct Socket {
    ws: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl Socket {
    fn shutdown(self) {
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}

struct Inner {
    options: SubscriptionOptions,
    on_changed: OnChanged,
    on_source: OnSource,
    socket: Option<Socket>,
    poll: Option<Interval>,
    closed: bool,
}

impl Inner {
    fn start_polling(&mut self) {
        let on_changed = self.on_changed.clone();
        self.poll = Some(Interval::new(self.options.poll_interval_ms, move || {
            on_changed(Change::PollTick)
        }));
        (self.on_source)(UpdateSource::Poll);
    }
}

/// Live subscription handle. Dropping it unsubscribes.
pub struct Subscription {
    inner: Rc<RefCell<Inner>>,
}

impl Subscription {
    fn new(options: SubscriptionOptions, on_changed: OnChanged, on_source: OnSource) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                options,
                on_changed,
                on_source,
                socket: None,
                poll: None,
                closed: false,
            })),
        }
    }

    /// Timer backend only.
    pub fn poll(options: SubscriptionOptions, on_changed: OnChanged, on_source: OnSource) -> Self {
        let subscription = Self::new(options, on_changed, on_source);
        subscription.inner.borrow_mut().start_polling();
        subscription
    }

    /// WebSocket backend, falling back to the timer on error or close.
    pub fn with_fallback(options: SubscriptionOptions, on_changed: OnChanged, on_source: OnSource) -> Self {
        let subscription = Self::new(options, on_changed, on_source);
        let weak = Rc::downgrade(&subscription.inner);
        let url = subscription.inner.borrow().options.ws_url.clone();
        match open_socket(&url, weak) {
            Ok(socket) => {
                let mut inner = subscription.inner.borrow_mut();
                inner.socket = Some(socket);
                (inner.on_source)(UpdateSource::Push);
            }
            Err(e) => {
                log::warn!("cannot open {url}: {e}; polling instead");
                subscription.inner.borrow_mut().start_polling();
            }
        }
        subscription
    }

    pub fn source(&self) -> Option<UpdateSource> {
        let inner = self.inner.borrow();
        if inner.closed {
            None
        } else if inner.poll.is_some() {
            Some(UpdateSource::Poll)
        } else if inner.socket.is_some() {
            Some(UpdateSource::Push)
        } else {
            None
        }
    }

    /// Stops both backends. Safe to call more than once.
    pub fn unsubscribe(&self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        if inner.closed {
            return;
        }
        inner.closed = true;
        if let Some(socket) = inner.socket.take() {
            socket.shutdown();
        }
        inner.poll = None;
        log::debug!("unsubscribed from {}", inner.options.collection);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

fn open_socket(url: &str, weak: Weak<RefCell<Inner>>) -> Result<Socket, String> {
    let ws = WebSocket::new(url).map_err(|e| format!("{e:?}"))?;

    let on_message = {
        let weak = weak.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Some(frame) = ev.data().as_string() else {
                log::warn!("dropping non-text live update frame");
                return;
            };
            let (collection, on_changed) = {
                let inner = inner.borrow();
                (inner.options.collection, inner.on_changed.clone())
            };
            match CollectionEvent::parse(&frame) {
                Some(event) if event.concerns(collection) => on_changed(Change::Pushed(event)),
                Some(_) => {}
                None => log::warn!("dropping malformed live update frame: {frame}"),
            }
        })
    };

    let on_error = {
        let weak = weak.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| fall_back(&weak, "socket error"))
    };

    let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
        fall_back(&weak, &format!("socket closed ({})", ev.code()))
    });

    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    Ok(Socket {
        ws,
        _on_message: on_message,
        _on_error: on_error,
        _on_close: on_close,
    })
}

/// Runs from inside a socket callback, so the socket (and the closure being
/// executed) is released on the next tick.
fn fall_back(weak: &Weak<RefCell<Inner>>, reason: &str) {
    let weak = weak.clone();
    let reason = reason.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let Ok(mut inner) = inner.try_borrow_mut() else {
            return;
        };
        if inner.closed || inner.poll.is_some() {
            return;
        }
        log::warn!(
            "live updates for {}: {}; polling every {} ms",
            inner.options.collection,
            reason,
            inner.options.poll_interval_ms
        );
        if let Some(socket) = inner.socket.take() {
            socket.shutdown();
        }
        inner.start_polling();
    });
}

/// Subscribes for the lifetime of the current component and reports which
/// backend is delivering updates.
pub fn use_live_collection<F>(collection: &'static str, on_changed: F) -> ReadSignal<Option<UpdateSource>>
where
    F: Fn(Change) + 'static,
{
    let config = use_config().with_untracked(|c| c.live_updates.clone());
    let (source, set_source) = signal(None::<UpdateSource>);
    let options = SubscriptionOptions {
        ws_url: ws_url(&config.ws_path),
        collection,
        poll_interval_ms: config.poll_interval_ms.max(1_000),
    };

    let subscription = Subscription::with_fallback(
        options,
        Rc::new(on_changed),
        Rc::new(move |s: UpdateSource| set_source.set(Some(s))),
    );
    let stored = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        // drop now rather than whenever the arena gets to it
        let _ = stored.try_update_value(|s| s.take());
    });

    source
}
