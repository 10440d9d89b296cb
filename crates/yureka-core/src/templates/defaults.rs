//! Components synthesized when no template exists for a name
//!
//! The bodies are complete, usable components: a button-like element with
//! variant, size, loading, full-width and icon props.

use super::variant::VariantKey;

const NAME: &str = "__NAME__";
const NAME_LOWER: &str = "__NAME_LOWER__";

const TAILWIND_TS: &str = include_str!("../../templates/_default/tailwind-ts.tsx");
const TAILWIND: &str = include_str!("../../templates/_default/tailwind.js");
const NON_TAILWIND_TS: &str = include_str!("../../templates/_default/non-tailwind-ts.tsx");
const NON_TAILWIND: &str = include_str!("../../templates/_default/non-tailwind.js");
const STYLESHEET: &str = include_str!("../../templates/_default/stylesheet.module.css");

fn render(body: &str, display_name: &str) -> String {
    body.replace(NAME_LOWER, &display_name.to_lowercase())
        .replace(NAME, display_name)
}

/// Default component body for the given axes
pub fn default_component(display_name: &str, styled: bool, typed: bool) -> String {
    let body = match VariantKey::new(styled, typed) {
        VariantKey::TailwindTs => TAILWIND_TS,
        VariantKey::Tailwind => TAILWIND,
        VariantKey::NonTailwindTs => NON_TAILWIND_TS,
        VariantKey::NonTailwind => NON_TAILWIND,
    };
    render(body, display_name)
}

/// Stylesheet covering every class the unstyled default components use
pub fn default_stylesheet(display_name: &str) -> String {
    render(STYLESHEET, display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_is_complete() {
        for styled in [true, false] {
            for typed in [true, false] {
                let body = default_component("Card", styled, typed);
                assert!(!body.contains("__NAME"), "placeholder left in {styled}/{typed}");
                assert!(body.contains("const Card = ("));
                assert!(body.trim_end().ends_with("export default Card;"));
                assert!(body.contains("variant = 'primary'"));
                assert!(body.contains("size = 'medium'"));
                assert!(body.contains("disabled={disabled || loading}"));
                assert_eq!(body.contains("interface CardProps"), typed);
                assert_eq!(body.contains("import styles from './Card.module.css'"), !styled);
            }
        }
    }

    #[test]
    fn test_unstyled_default_uses_lowercase_root_class() {
        let body = default_component("Toast", false, true);
        assert!(body.contains("styles.toast,"));
    }

    #[test]
    fn test_default_stylesheet_is_scoped() {
        let css = default_stylesheet("Modal");
        assert!(css.starts_with("/* Modal component styles */"));
        assert!(css.contains(".modal {"));
        assert!(css.contains(".variantPrimary {"));
    }
}
