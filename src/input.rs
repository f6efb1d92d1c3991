//! Input-device token table for input-mask settings.

/// Input device types a session can watch for activity.
///
/// Each variant owns a distinct power-of-two bit so a selection of types can
/// be OR-ed into a single mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Keyboard,
    Mouse,
    Touchpad,
    Touchscreen,
    Tablet,
    Switch,
}

/// Every known input type, in bit order.
pub const INPUT_TYPES: &[InputType] = &[
    InputType::Keyboard,
    InputType::Mouse,
    InputType::Touchpad,
    InputType::Touchscreen,
    InputType::Tablet,
    InputType::Switch,
];

impl InputType {
    /// Bit flag for this device type.
    pub const fn mask(self) -> u32 {
        1 << self as u32
    }

    /// Canonical config token, as written in a settings file.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Keyboard => "keyboard",
            Self::Mouse => "mouse",
            Self::Touchpad => "touchpad",
            Self::Touchscreen => "touchscreen",
            Self::Tablet => "tablet",
            Self::Switch => "switch",
        }
    }

    /// Look a config token up in the table. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        INPUT_TYPES.iter().copied().find(|t| t.token() == token)
    }
}
