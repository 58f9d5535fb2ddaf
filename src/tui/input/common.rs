use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// True when no Ctrl/Alt modifier is held (Shift is allowed, it only selects the character)
pub(super) fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Ctrl+C
pub(super) fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_counts_as_plain() {
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(is_plain(&key));
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert!(!is_plain(&key));
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        assert!(is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
