//! The fixed set of components Yureka UI can scaffold
//!
//! Both the add and remove flows resolve identifiers through this one table,
//! so an identifier always maps to the same directory and export name.

/// A component that can be added to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    /// Lowercase identifier accepted on the command line (e.g. `button`)
    pub id: &'static str,

    /// PascalCase name used for the directory, file names and exports
    pub display_name: &'static str,

    /// One-line description shown in selection prompts
    pub description: &'static str,
}

const CATALOG: &[ComponentInfo] = &[
    ComponentInfo {
        id: "button",
        display_name: "Button",
        description: "A customizable button component with various styles and states",
    },
    ComponentInfo {
        id: "card",
        display_name: "Card",
        description: "A container component for organizing related content",
    },
    ComponentInfo {
        id: "input",
        display_name: "Input",
        description: "Text input field with validation support",
    },
    ComponentInfo {
        id: "select",
        display_name: "Select",
        description: "Dropdown select component with various options",
    },
    ComponentInfo {
        id: "checkbox",
        display_name: "Checkbox",
        description: "Checkbox input component with customizable styles",
    },
    ComponentInfo {
        id: "toggle",
        display_name: "Toggle",
        description: "Switch/toggle component for boolean inputs",
    },
    ComponentInfo {
        id: "modal",
        display_name: "Modal",
        description: "Popup modal dialog component",
    },
    ComponentInfo {
        id: "toast",
        display_name: "Toast",
        description: "Notification toast component for alerts and messages",
    },
];

/// All catalog entries in display order
pub fn all() -> &'static [ComponentInfo] {
    CATALOG
}

/// Look up a component by its identifier (case-insensitive)
pub fn lookup(id: &str) -> Option<&'static ComponentInfo> {
    let id = id.trim();
    CATALOG.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// Look up a component by its exact PascalCase display name
pub fn by_display_name(name: &str) -> Option<&'static ComponentInfo> {
    CATALOG.iter().find(|c| c.display_name == name)
}
