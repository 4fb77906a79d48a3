//! Keybinding definitions
//!
//! Every shortcut the wizard understands, grouped by where it applies. The
//! help dialog is generated from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active while the amount dial is open
    AmountEditor,
    /// Active while the plan or account list is open
    ListEditor,
    /// Reopening committed steps
    Cards,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::AmountEditor => "Amount Dial",
            Self::ListEditor => "Plan and Account Lists",
            Self::Cards => "Committed Steps",
        }
    }
}

const fn binding(key: KeyCode, description: &'static str, context: KeyContext) -> Keybinding {
    Keybinding {
        key,
        modifiers: KeyModifiers::NONE,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    binding(KeyCode::Char('q'), "Quit", KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    binding(KeyCode::Char('?'), "Show/hide help", KeyContext::Global),
    binding(KeyCode::Enter, "Confirm the open step", KeyContext::Global),
    binding(KeyCode::Esc, "Back one step", KeyContext::Global),
    // Amount
    binding(KeyCode::Left, "Turn dial down", KeyContext::AmountEditor),
    binding(KeyCode::Right, "Turn dial up", KeyContext::AmountEditor),
    binding(KeyCode::Char('h'), "Turn dial down", KeyContext::AmountEditor),
    binding(KeyCode::Char('l'), "Turn dial up", KeyContext::AmountEditor),
    binding(KeyCode::PageDown, "Turn dial down a lot", KeyContext::AmountEditor),
    binding(KeyCode::PageUp, "Turn dial up a lot", KeyContext::AmountEditor),
    binding(KeyCode::Home, "Minimum amount", KeyContext::AmountEditor),
    binding(KeyCode::End, "Maximum amount", KeyContext::AmountEditor),
    // Lists
    binding(KeyCode::Up, "Move up", KeyContext::ListEditor),
    binding(KeyCode::Down, "Move down", KeyContext::ListEditor),
    binding(KeyCode::Char('k'), "Move up", KeyContext::ListEditor),
    binding(KeyCode::Char('j'), "Move down", KeyContext::ListEditor),
    binding(KeyCode::Char('1'), "Pick option by number (1-9)", KeyContext::ListEditor),
    binding(KeyCode::Char('f'), "Footer action", KeyContext::ListEditor),
    // Cards
    binding(KeyCode::Char('a'), "Keep amount, revise plan", KeyContext::Cards),
    binding(KeyCode::Char('p'), "Keep plan, revise account", KeyContext::Cards),
    binding(KeyCode::Char('r'), "Start over from the amount", KeyContext::Cards),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
