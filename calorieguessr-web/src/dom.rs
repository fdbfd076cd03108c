use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, Response, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Millisecond timestamp from the performance clock, the same time base
/// the animation frame callbacks receive.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.performance())
            .map_or(0.0, |perf| perf.now())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Read the raw cookie string for the current document.
///
/// # Errors
/// Returns an error if the document is unavailable or does not expose cookies.
pub fn read_cookies() -> Result<String, JsValue> {
    html_document()?.cookie()
}

/// Append one cookie declaration to the document.
///
/// # Errors
/// Returns an error if the document is unavailable or rejects the write.
pub fn write_cookie(cookie: &str) -> Result<(), JsValue> {
    html_document()?.set_cookie(cookie)
}

fn html_document() -> Result<HtmlDocument, JsValue> {
    window()
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| JsValue::from_str("document is not an HtmlDocument"))
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a `Response` body as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text_value = JsFuture::from(response.text()?).await?;
    text_value
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Handle of a running display-refresh callback loop. Dropping the
/// handle cancels the loop; the owner holds at most one live handle, so
/// starting a new loop always tears down the previous one first.
pub struct FrameLoopHandle {
    alive: Rc<Cell<bool>>,
    frame_id: Rc<Cell<i32>>,
    _closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoopHandle {
    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(win) = web_sys::window() {
            let _ = win.cancel_animation_frame(self.frame_id.get());
        }
    }
}

impl Drop for FrameLoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `tick` on every animation frame until it returns `false` or the
/// returned handle is dropped. The callback receives the frame timestamp
/// in milliseconds.
///
/// # Errors
/// Returns an error if the browser refuses to schedule the first frame.
pub fn start_frame_loop<F>(mut tick: F) -> Result<FrameLoopHandle, JsValue>
where
    F: FnMut(f64) -> bool + 'static,
{
    let alive = Rc::new(Cell::new(true));
    let frame_id = Rc::new(Cell::new(0));
    let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    {
        let alive = alive.clone();
        let frame_id = frame_id.clone();
        let closure_slot = closure.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if !alive.get() {
                return;
            }
            if tick(now) {
                if let Some(cb) = closure_slot.borrow().as_ref() {
                    match window().request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => frame_id.set(id),
                        Err(err) => console_error(&js_error_message(&err)),
                    }
                }
            } else {
                alive.set(false);
            }
        }) as Box<dyn FnMut(f64)>));
    }

    let first_id = {
        let slot = closure.borrow();
        let cb = slot
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame closure should be set"))?;
        window().request_animation_frame(cb.as_ref().unchecked_ref())?
    };
    frame_id.set(first_id);

    Ok(FrameLoopHandle {
        alive,
        frame_id,
        _closure: closure,
    })
}
