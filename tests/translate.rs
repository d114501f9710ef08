use padbind::{translate, Key, MotionDir, MouseButton, Symbol};

#[test]
fn named_keys_resolve_case_insensitively() {
    assert_eq!(translate("escape"), Symbol::Key(Key::Escape));
    assert_eq!(translate("Escape"), Symbol::Key(Key::Escape));
    assert_eq!(translate("RETURN"), Symbol::Key(Key::Enter));
    assert_eq!(translate("f5"), Symbol::Key(Key::F5));
}

#[test]
fn aliases_cover_capture_source_mismatches() {
    assert_eq!(translate("esc"), Symbol::Key(Key::Escape));
    assert_eq!(translate("ctrl"), Symbol::Key(Key::Control));
    assert_eq!(translate("Control_L"), Symbol::Key(Key::Control));
    assert_eq!(translate("Prior"), Symbol::Key(Key::PageUp));
}

#[test]
fn mouse_buttons_use_the_m_prefix() {
    assert_eq!(translate("m_left"), Symbol::Mouse(MouseButton::Left));
    assert_eq!(translate("M_RIGHT"), Symbol::Mouse(MouseButton::Right));
    assert_eq!(translate("m_middle"), Symbol::Mouse(MouseButton::Middle));
}

#[test]
fn motion_and_scroll_resolve_to_pseudo_actions() {
    assert_eq!(translate("m_move_up"), Symbol::Move(MotionDir::Up));
    assert_eq!(translate("m_scroll_down"), Symbol::Scroll(MotionDir::Down));
    assert!(translate("m_move_left").is_pseudo());
    assert!(!translate("m_left").is_pseudo());
}

#[test]
fn unresolved_captures_degrade_to_literal_keys() {
    assert_eq!(translate("Q"), Symbol::Key(Key::Char('Q')));
    assert_eq!(translate("q"), Symbol::Key(Key::Char('q')));
    // Multi-character captures survive to dispatch, where a concrete
    // injector may reject them.
    assert_eq!(
        translate("definitely_not_a_key"),
        Symbol::Key(Key::Other("definitely_not_a_key".into()))
    );
}

#[test]
fn translation_never_fails_on_odd_input() {
    assert_eq!(translate("  space "), Symbol::Key(Key::Space));
    assert_eq!(translate("ß"), Symbol::Key(Key::Char('ß')));
}
