//! Boolean UI preferences persisted in browser storage.

/// A named on/off preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceFlag {
    /// Storage key.
    pub key: &'static str,
    /// Value when nothing (or garbage) is stored.
    pub default: bool,
}

/// Dense table rows.
pub const COMPACT_ROWS: PreferenceFlag = PreferenceFlag {
    key: "proxy_console_compact_rows",
    default: false,
};

/// Dark theme.
pub const DARK_THEME: PreferenceFlag = PreferenceFlag {
    key: "proxy_console_dark_theme",
    default: false,
};

impl PreferenceFlag {
    /// Decode a stored value; anything but `"true"`/`"false"` is the default.
    pub fn parse(&self, stored: Option<&str>) -> bool {
        match stored.map(str::trim) {
            Some("true") => true,
            Some("false") => false,
            _ => self.default,
        }
    }

    /// Stored form of `value`.
    pub fn encode(value: bool) -> &'static str {
        if value {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_falls_back_to_default() {
        assert!(!COMPACT_ROWS.parse(None));
        assert!(!COMPACT_ROWS.parse(Some("yes")));
        assert!(COMPACT_ROWS.parse(Some(" true ")));
        let on_by_default = PreferenceFlag {
            key: "k",
            default: true,
        };
        assert!(on_by_default.parse(Some("")));
        assert!(!on_by_default.parse(Some(PreferenceFlag::encode(false))));
    }
}
