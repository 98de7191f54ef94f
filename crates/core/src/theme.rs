//! Site colour presets.
//!
//! A preset is a full set of CSS custom-property values (space-separated RGB
//! triples) for the primary scale, an accent colour and the dark scale. The
//! active preset name is stored in the site settings.

use crate::error::CoreError;

/// Shade steps shared by the primary and dark scales.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Preset used when nothing (or something unknown) is configured.
pub const DEFAULT_PRESET: &str = "emerald";

/// A named colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub label: &'static str,
    pub primary: [&'static str; 11],
    pub accent: &'static str,
    pub dark: [&'static str; 11],
}

/* --------------------------------------------------------------------------
Shared scales
-------------------------------------------------------------------------- */

const EMERALD: [&str; 11] = [
    "236 253 245", "209 250 229", "167 243 208", "110 231 183", "52 211 153", "16 185 129",
    "5 150 105", "4 120 87", "6 95 70", "6 78 59", "2 44 34",
];

const AMBER: [&str; 11] = [
    "255 251 235", "254 243 199", "253 230 138", "252 211 77", "251 191 36", "245 158 11",
    "217 119 6", "180 83 9", "146 64 14", "120 53 15", "69 26 3",
];

const VIOLET: [&str; 11] = [
    "245 243 255", "237 233 254", "221 214 254", "196 181 253", "167 139 250", "139 92 246",
    "124 58 237", "109 40 217", "91 33 182", "76 29 149", "46 16 101",
];

const CYAN: [&str; 11] = [
    "236 254 255", "207 250 254", "165 243 252", "103 232 249", "34 211 238", "6 182 212",
    "8 145 178", "14 116 144", "21 94 117", "22 78 99", "8 51 68",
];

const NEUTRAL: [&str; 11] = [
    "250 250 250", "245 245 245", "229 229 229", "212 212 212", "163 163 163", "115 115 115",
    "82 82 82", "64 64 64", "38 38 38", "23 23 23", "10 10 10",
];

const STONE: [&str; 11] = [
    "250 250 249", "245 245 244", "231 229 228", "214 211 209", "168 162 158", "120 113 108",
    "87 83 78", "68 64 60", "41 37 36", "28 25 23", "12 10 9",
];

const SLATE: [&str; 11] = [
    "248 250 252", "241 245 249", "226 232 240", "203 213 225", "148 163 184", "100 116 139",
    "71 85 105", "51 65 85", "30 41 59", "15 23 42", "2 6 23",
];

const ZINC: [&str; 11] = [
    "250 250 250", "244 244 245", "228 228 231", "212 212 216", "161 161 170", "113 113 122",
    "82 82 91", "63 63 70", "39 39 42", "24 24 27", "9 9 11",
];

const PURPLE_BLACK: [&str; 11] = [
    "245 243 248", "235 232 240", "208 202 219", "176 165 192", "139 127 163", "102 90 133",
    "76 64 107", "56 45 82", "39 29 61", "26 16 41", "15 10 26",
];

/// All presets, in the order the admin theme switcher cycles through them.
pub const PRESETS: &[ThemePreset] = &[
    ThemePreset {
        name: "emerald",
        label: "Emerald & Lime",
        primary: EMERALD,
        accent: "132 204 22",
        dark: NEUTRAL,
    },
    ThemePreset {
        name: "coffee",
        label: "Coffee & Code",
        primary: AMBER,
        accent: "254 243 199",
        dark: STONE,
    },
    ThemePreset {
        name: "mountain",
        label: "Mountain Dusk",
        primary: EMERALD,
        accent: "217 119 6",
        dark: SLATE,
    },
    ThemePreset {
        name: "terminal",
        label: "Terminal Classic",
        primary: EMERALD,
        accent: "74 222 128",
        dark: ZINC,
    },
    ThemePreset {
        name: "neon",
        label: "Neon Quest",
        primary: VIOLET,
        accent: "245 158 11",
        dark: PURPLE_BLACK,
    },
    ThemePreset {
        name: "violet",
        label: "Violet & Amber",
        primary: VIOLET,
        accent: "245 158 11",
        dark: ZINC,
    },
    ThemePreset {
        name: "cyber",
        label: "Cyan & Rose",
        primary: CYAN,
        accent: "244 63 94",
        dark: SLATE,
    },
];

/* --------------------------------------------------------------------------
Lookup
-------------------------------------------------------------------------- */

pub fn find(name: &str) -> Option<&'static ThemePreset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Like [`find`], but unknown names fall back to the first preset.
pub fn resolve(name: &str) -> &'static ThemePreset {
    find(name).unwrap_or(&PRESETS[0])
}

/// The preset after `name`, wrapping around at the end of the list.
pub fn next(name: &str) -> &'static ThemePreset {
    let idx = PRESETS.iter().position(|p| p.name == name).unwrap_or(0);
    &PRESETS[(idx + 1) % PRESETS.len()]
}

pub fn validate_preset_name(name: &str) -> Result<(), CoreError> {
    if find(name).is_some() {
        return Ok(());
    }
    let valid: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
    Err(CoreError::Validation(format!(
        "Unknown theme preset: '{name}'. Valid presets: {}",
        valid.join(", ")
    )))
}

impl ThemePreset {
    /// Colour tokens keyed the way the frontend names them (`primary500`, `accent`, `dark900`).
    pub fn tokens(&self) -> Vec<(String, &'static str)> {
        let mut tokens = Vec::with_capacity(SHADES.len() * 2 + 1);
        for (shade, value) in SHADES.iter().zip(self.primary) {
            tokens.push((format!("primary{shade}"), value));
        }
        tokens.push(("accent".to_string(), self.accent));
        for (shade, value) in SHADES.iter().zip(self.dark) {
            tokens.push((format!("dark{shade}"), value));
        }
        tokens
    }

    /// CSS custom-property declarations for a `:root` block.
    pub fn css_variables(&self) -> String {
        let mut css = String::new();
        for (shade, value) in SHADES.iter().zip(self.primary) {
            css.push_str(&format!("--color-primary-{shade}: {value};\n"));
        }
        css.push_str(&format!("--color-accent: {};\n", self.accent));
        for (shade, value) in SHADES.iter().zip(self.dark) {
            css.push_str(&format!("--color-dark-{shade}: {value};\n"));
        }
        css
    }
}
