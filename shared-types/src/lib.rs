pub mod theme;

pub use theme::{Palette, ThemeConfig, ThemeError};

/// Attribute and class names shared by the server-rendered markup and the
/// accordion controller.
pub mod markup {
    /// Marker attribute on a toggle control; its value is the target element id.
    pub const COLLAPSE_TOGGLE_ATTR: &str = "data-collapse-toggle";
    /// CSS selector matching every element carrying [`COLLAPSE_TOGGLE_ATTR`].
    pub const COLLAPSE_TOGGLE_SELECTOR: &str = "[data-collapse-toggle]";
    pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";
    /// Present on a toggle target while it is collapsed.
    pub const HIDDEN_CLASS: &str = "hidden";
    pub const INDICATOR_SELECTOR: &str = "svg";
    pub const ROTATED_CLASS: &str = "rotate-180";

    pub fn aria_bool(value: bool) -> &'static str {
        if value {
            "true"
        } else {
            "false"
        }
    }
}
