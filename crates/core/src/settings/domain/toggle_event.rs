use super::configuration::{Configuration, Flag};

/// Keys the input collaborator reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    B,
    F,
    E,
    M,
    K,
    R,
    F12,
    Escape,
}

impl Key {
    /// Parses a key name as typed on a terminal (`"b"`, `"F12"`, `"esc"`).
    pub fn from_name(name: &str) -> Option<Key> {
        match name.trim().to_ascii_lowercase().as_str() {
            "b" => Some(Key::B),
            "f" => Some(Key::F),
            "e" => Some(Key::E),
            "m" => Some(Key::M),
            "k" => Some(Key::K),
            "r" => Some(Key::R),
            "f12" => Some(Key::F12),
            "esc" | "escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// A discrete change to the configuration, produced by user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleEvent {
    Toggle(Flag),
    Set(Flag, bool),
}

impl ToggleEvent {
    /// Key bindings:
    ///
    /// | key    | effect                      |
    /// |--------|-----------------------------|
    /// | B      | magnify primary eye         |
    /// | F      | outline faces               |
    /// | E      | outline eyes                |
    /// | M      | outline mouths              |
    /// | K      | stylized mask               |
    /// | R      | freeze display              |
    /// | F12    | toggle fullscreen           |
    /// | Escape | leave fullscreen            |
    pub fn from_key(key: Key) -> ToggleEvent {
        match key {
            Key::B => ToggleEvent::Toggle(Flag::MagnifyPrimaryEye),
            Key::F => ToggleEvent::Toggle(Flag::OutlineFaces),
            Key::E => ToggleEvent::Toggle(Flag::OutlineEyes),
            Key::M => ToggleEvent::Toggle(Flag::OutlineMouths),
            Key::K => ToggleEvent::Toggle(Flag::StylizedMask),
            Key::R => ToggleEvent::Toggle(Flag::FreezeDisplay),
            Key::F12 => ToggleEvent::Toggle(Flag::Fullscreen),
            Key::Escape => ToggleEvent::Set(Flag::Fullscreen, false),
        }
    }

    pub fn flag(&self) -> Flag {
        match *self {
            ToggleEvent::Toggle(flag) | ToggleEvent::Set(flag, _) => flag,
        }
    }

    pub fn apply_to(&self, config: &mut Configuration) {
        match *self {
            ToggleEvent::Toggle(flag) => config.set_flag(flag, !config.flag(flag)),
            ToggleEvent::Set(flag, value) => config.set_flag(flag, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("b", Key::B)]
    #[case("B", Key::B)]
    #[case(" k\n", Key::K)]
    #[case("F12", Key::F12)]
    #[case("esc", Key::Escape)]
    #[case("Escape", Key::Escape)]
    fn test_key_names(#[case] name: &str, #[case] expected: Key) {
        assert_eq!(Key::from_name(name), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("f1")]
    fn test_unknown_key_names(#[case] name: &str) {
        assert_eq!(Key::from_name(name), None);
    }

    #[rstest]
    #[case(Key::B, Flag::MagnifyPrimaryEye)]
    #[case(Key::F, Flag::OutlineFaces)]
    #[case(Key::E, Flag::OutlineEyes)]
    #[case(Key::M, Flag::OutlineMouths)]
    #[case(Key::K, Flag::StylizedMask)]
    #[case(Key::R, Flag::FreezeDisplay)]
    #[case(Key::F12, Flag::Fullscreen)]
    fn test_letter_keys_toggle(#[case] key: Key, #[case] flag: Flag) {
        assert_eq!(ToggleEvent::from_key(key), ToggleEvent::Toggle(flag));
    }

    #[test]
    fn test_toggle_flips_and_flips_back() {
        let mut config = Configuration::default();
        let event = ToggleEvent::from_key(Key::K);
        event.apply_to(&mut config);
        assert!(config.draw_stylized_mask);
        event.apply_to(&mut config);
        assert!(!config.draw_stylized_mask);
    }

    #[test]
    fn test_escape_leaves_fullscreen_and_is_idempotent() {
        let mut config = Configuration::default();
        let event = ToggleEvent::from_key(Key::Escape);
        event.apply_to(&mut config);
        assert!(!config.fullscreen);
        event.apply_to(&mut config);
        assert!(!config.fullscreen);
    }
}
