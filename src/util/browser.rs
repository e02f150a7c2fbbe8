//! Browser side effects: focus and navigation.
//!
//! TRADE-OFFS
//! ==========
//! Both are best-effort. A missing element or a refused navigation is
//! logged and otherwise ignored; SSR paths no-op.

/// Move keyboard focus to the element with DOM id `id`.
///
/// Deferred by one task so a section revealed by the same event is
/// rendered before it is focused.
pub fn focus_element(id: &'static str) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(0, move || focus_now(id)).forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[cfg(feature = "hydrate")]
fn focus_now(id: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match doc.get_element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(el) => {
            if el.focus().is_err() {
                log::debug!("focus refused for #{id}");
            }
        }
        None => log::debug!("focus target #{id} not found"),
    }
}

/// Navigate the current tab to `url`.
pub fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
