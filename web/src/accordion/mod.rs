//! Expand/collapse behaviour for server-rendered accordions.
//!
//! A control is any element carrying `data-collapse-toggle="<id>"`. Clicking
//! it flips the `hidden` class on the element with that id, negates the
//! control's `aria-expanded` and rotates a nested `svg` chevron if present.
//! All state lives in the DOM; nothing is cached between clicks.

#[cfg(feature = "hydrate")]
mod browser;
#[cfg(test)]
mod memory;

#[cfg(feature = "hydrate")]
pub use browser::{delegate, init, BrowserDom};

use leptos::logging::{log, warn};
use shared_types::markup::{
    aria_bool, ARIA_EXPANDED_ATTR, COLLAPSE_TOGGLE_ATTR, HIDDEN_CLASS, ROTATED_CLASS,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccordionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to register click listener: {0}")]
    Listener(String),
}

/// The handful of DOM operations the toggle contract needs.
pub trait ToggleDom {
    type Element;

    /// Every element currently carrying the marker attribute, in document order.
    fn controls(&self) -> Vec<Self::Element>;

    /// Nearest ancestor-or-self of `origin` carrying the marker attribute.
    fn closest_control(&self, origin: &Self::Element) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Flips `class` on `element`; returns whether it is present afterwards.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> bool;

    /// First `svg` descendant of a control.
    fn indicator(&self, control: &Self::Element) -> Option<Self::Element>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Shown,
    Hidden,
    /// The referenced id matched no element; only the control changed.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub target_id: String,
    pub expanded: bool,
    pub target: TargetState,
    /// `Some(rotated)` when the control has an indicator.
    pub indicator_rotated: Option<bool>,
}

pub fn is_expanded<D: ToggleDom>(dom: &D, control: &D::Element) -> bool {
    dom.attribute(control, ARIA_EXPANDED_ATTR).as_deref() == Some("true")
}

/// Controls present right now. Delegation means later ones still work.
pub fn discover<D: ToggleDom>(dom: &D) -> Vec<D::Element> {
    let controls = dom.controls();
    log!("Found {} accordion controls", controls.len());
    controls
}

/// Applies one click to `control`.
///
/// A target id that resolves to nothing still flips `aria-expanded` and the
/// indicator, leaving the pair out of sync.
pub fn toggle<D: ToggleDom>(dom: &D, control: &D::Element) -> ToggleOutcome {
    let target_id = dom
        .attribute(control, COLLAPSE_TOGGLE_ATTR)
        .unwrap_or_default();
    let was_expanded = is_expanded(dom, control);

    let target = match dom.element_by_id(&target_id) {
        Some(element) => {
            if dom.toggle_class(&element, HIDDEN_CLASS) {
                TargetState::Hidden
            } else {
                TargetState::Shown
            }
        }
        None => {
            warn!("Accordion target `{}` not found", target_id);
            TargetState::Missing
        }
    };

    let expanded = !was_expanded;
    dom.set_attribute(control, ARIA_EXPANDED_ATTR, aria_bool(expanded));

    let indicator_rotated = dom
        .indicator(control)
        .map(|svg| dom.toggle_class(&svg, ROTATED_CLASS));

    ToggleOutcome {
        target_id,
        expanded,
        target,
        indicator_rotated,
    }
}

/// Delegated click entry point. `None` means the click landed outside any
/// control and the event must be left alone.
pub fn handle_click<D: ToggleDom>(dom: &D, origin: &D::Element) -> Option<ToggleOutcome> {
    let control = dom.closest_control(origin)?;
    Some(toggle(dom, &control))
}
