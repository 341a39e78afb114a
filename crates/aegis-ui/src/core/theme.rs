//! Theme mode applied through the `data-theme` body attribute.

/// Color scheme preference persisted across reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light surfaces, the first-run default.
    #[default]
    Light,
    /// Dark surfaces.
    Dark,
}

impl ThemeMode {
    /// Attribute/storage value for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "aegis-light",
            Self::Dark => "aegis-dark",
        }
    }

    /// Parse a stored value, tolerating the bare scheme names.
    #[must_use]
    pub fn from_storage(value: &str) -> Self {
        match value {
            "aegis-dark" | "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The opposite mode, for the header toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_values_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_storage(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::from_storage("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_storage("garbage"), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
