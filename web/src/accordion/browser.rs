use leptos::logging::log;
use shared_types::markup::{COLLAPSE_TOGGLE_SELECTOR, INDICATOR_SELECTOR};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget};

use super::{discover, handle_click, AccordionError, ToggleDom};

/// [`ToggleDom`] over the live browser document.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Result<Self, AccordionError> {
        let window = web_sys::window().ok_or(AccordionError::NoWindow)?;
        let document = window.document().ok_or(AccordionError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl ToggleDom for BrowserDom {
    type Element = Element;

    fn controls(&self) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(COLLAPSE_TOGGLE_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn closest_control(&self, origin: &Element) -> Option<Element> {
        origin.closest(COLLAPSE_TOGGLE_SELECTOR).ok().flatten()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        element.set_attribute(name, value).ok();
    }

    fn toggle_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().toggle(class).unwrap_or(false)
    }

    fn indicator(&self, control: &Element) -> Option<Element> {
        control.query_selector(INDICATOR_SELECTOR).ok().flatten()
    }
}

/// Installs one delegated click listener on the document.
///
/// Call once when the page's markup is in place. A second call installs a
/// second listener and every click then toggles twice.
pub fn init() -> Result<(), AccordionError> {
    let dom = BrowserDom::current()?;
    discover(&dom);
    delegate(&dom.document, dom.document.clone())?;

    log!("Accordion controller initialized");
    Ok(())
}

/// Handles clicks on any control below `root`, resolving targets in `document`.
pub fn delegate(root: &EventTarget, document: Document) -> Result<(), AccordionError> {
    let listener_dom = BrowserDom::new(document);
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(origin) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };

        if let Some(outcome) = handle_click(&listener_dom, &origin) {
            event.prevent_default();
            log!(
                "Accordion `{}` expanded={} target={:?}",
                outcome.target_id,
                outcome.expanded,
                outcome.target
            );
        }
    }) as Box<dyn FnMut(Event)>);

    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| AccordionError::Listener(format!("{:?}", e)))?;
    // Lives for the rest of the page.
    on_click.forget();
    Ok(())
}
