//! Keyboard shortcut registry and key dispatch.

use egui::{Key, Modifiers};
use scrawl_core::tools::Tool;

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Clear,
    SelectTool(Tool),
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, description: &'static str) -> Self {
        Self {
            key,
            ctrl,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        if self.ctrl {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Letter key for each tool. Digits 1-9 follow palette order.
const TOOL_KEYS: [(Key, Tool); 9] = [
    (Key::V, Tool::Move),
    (Key::P, Tool::Draw),
    (Key::E, Tool::Erase),
    (Key::C, Tool::Circle),
    (Key::T, Tool::Triangle),
    (Key::R, Tool::Rectangle),
    (Key::U, Tool::RoundedRectangle),
    (Key::D, Tool::Diamond),
    (Key::A, Tool::Arrow),
];

const DIGIT_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Map a key press to an action.
pub fn action_for(key: Key, modifiers: Modifiers) -> Option<ShortcutAction> {
    if modifiers.command {
        return (key == Key::Z && !modifiers.shift).then_some(ShortcutAction::Undo);
    }
    if modifiers.alt {
        return None;
    }

    match key {
        Key::Delete => Some(ShortcutAction::Clear),
        _ => {
            if let Some(index) = DIGIT_KEYS.iter().position(|&k| k == key) {
                return Some(ShortcutAction::SelectTool(Tool::ALL[index]));
            }
            TOOL_KEYS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|&(_, tool)| ShortcutAction::SelectTool(tool))
        }
    }
}

/// Shortcut hint for a tool button tooltip, e.g. "R / 6".
pub fn tool_hint(tool: Tool) -> String {
    let letter = TOOL_KEYS
        .iter()
        .find(|(_, t)| *t == tool)
        .map(|(k, _)| k.name())
        .unwrap_or("");
    let digit = Tool::ALL.iter().position(|&t| t == tool).map_or(0, |i| i + 1);
    format!("{letter} / {digit}")
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, "Undo"),
            Shortcut::new("Delete", false, "Clear the board"),
            Shortcut::new("V / 1", false, "Move"),
            Shortcut::new("P / 2", false, "Pencil"),
            Shortcut::new("E / 3", false, "Eraser"),
            Shortcut::new("C / 4", false, "Circle"),
            Shortcut::new("T / 5", false, "Triangle"),
            Shortcut::new("R / 6", false, "Rectangle"),
            Shortcut::new("U / 7", false, "Rounded rectangle"),
            Shortcut::new("D / 8", false, "Diamond"),
            Shortcut::new("A / 9", false, "Arrow"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo() {
        assert_eq!(
            action_for(Key::Z, Modifiers::COMMAND),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(action_for(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT), None);
        // Plain Z is not bound.
        assert_eq!(action_for(Key::Z, Modifiers::NONE), None);
    }

    #[test]
    fn test_clear() {
        assert_eq!(
            action_for(Key::Delete, Modifiers::NONE),
            Some(ShortcutAction::Clear)
        );
        // Backspace is not bound.
        assert_eq!(action_for(Key::Backspace, Modifiers::NONE), None);
    }

    #[test]
    fn test_tool_keys() {
        assert_eq!(
            action_for(Key::R, Modifiers::NONE),
            Some(ShortcutAction::SelectTool(Tool::Rectangle))
        );
        assert_eq!(
            action_for(Key::Num1, Modifiers::NONE),
            Some(ShortcutAction::SelectTool(Tool::Move))
        );
        assert_eq!(
            action_for(Key::Num9, Modifiers::NONE),
            Some(ShortcutAction::SelectTool(Tool::Arrow))
        );
        assert_eq!(action_for(Key::R, Modifiers::ALT), None);
    }

    #[test]
    fn test_registry_matches_dispatch() {
        for tool in Tool::ALL {
            let hint = tool_hint(tool);
            assert!(
                ShortcutRegistry::all().iter().any(|s| s.key == hint),
                "{tool} hint {hint} missing from registry"
            );
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(Shortcut::new("Z", true, "Undo").format(), "Ctrl+Z");
        assert_eq!(Shortcut::new("Delete", false, "Clear").format(), "Delete");
    }
}
