// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Closed font and color enumerations for poster elements.
//!
//! Both sets are pure configuration lookups: a name maps to rendering
//! attributes, and unrecognized names fall back to a default.

/// The fixed set of Arabic font families the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Amiri,
    Cairo,
    Tajawal,
    ReemKufi,
    NotoNaskh,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Amiri,
        FontFamily::Cairo,
        FontFamily::Tajawal,
        FontFamily::ReemKufi,
        FontFamily::NotoNaskh,
    ];

    /// Family name as registered with the font database.
    pub fn family_name(&self) -> &'static str {
        match self {
            FontFamily::Amiri => "Amiri",
            FontFamily::Cairo => "Cairo",
            FontFamily::Tajawal => "Tajawal",
            FontFamily::ReemKufi => "Reem Kufi",
            FontFamily::NotoNaskh => "Noto Naskh Arabic",
        }
    }

    /// Font file looked up under `assets/fonts/` at startup.
    pub fn asset_file(&self) -> &'static str {
        match self {
            FontFamily::Amiri => "Amiri-Regular.ttf",
            FontFamily::Cairo => "Cairo-Regular.ttf",
            FontFamily::Tajawal => "Tajawal-Regular.ttf",
            FontFamily::ReemKufi => "ReemKufi-Regular.ttf",
            FontFamily::NotoNaskh => "NotoNaskhArabic-Regular.ttf",
        }
    }

    /// Look a family up by name, falling back to Amiri.
    pub fn from_name(name: &str) -> Self {
        FontFamily::ALL
            .into_iter()
            .find(|family| family.family_name() == name)
            .unwrap_or(FontFamily::Amiri)
    }
}

/// The fixed color palette offered for poster text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchColor {
    Ivory,
    Night,
    Gold,
    Teal,
    Crimson,
    Sky,
    Sand,
    Olive,
}

impl SwatchColor {
    pub const ALL: [SwatchColor; 8] = [
        SwatchColor::Ivory,
        SwatchColor::Night,
        SwatchColor::Gold,
        SwatchColor::Teal,
        SwatchColor::Crimson,
        SwatchColor::Sky,
        SwatchColor::Sand,
        SwatchColor::Olive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SwatchColor::Ivory => "Ivory",
            SwatchColor::Night => "Night",
            SwatchColor::Gold => "Gold",
            SwatchColor::Teal => "Teal",
            SwatchColor::Crimson => "Crimson",
            SwatchColor::Sky => "Sky",
            SwatchColor::Sand => "Sand",
            SwatchColor::Olive => "Olive",
        }
    }

    /// Opaque RGBA rendering attributes.
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            SwatchColor::Ivory => [246, 241, 230, 255],
            SwatchColor::Night => [24, 28, 38, 255],
            SwatchColor::Gold => [212, 175, 55, 255],
            SwatchColor::Teal => [42, 157, 143, 255],
            SwatchColor::Crimson => [164, 42, 54, 255],
            SwatchColor::Sky => [142, 202, 230, 255],
            SwatchColor::Sand => [222, 184, 135, 255],
            SwatchColor::Olive => [128, 128, 64, 255],
        }
    }

    /// Look a color up by name, falling back to Ivory.
    pub fn from_name(name: &str) -> Self {
        SwatchColor::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .unwrap_or(SwatchColor::Ivory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_lookup_roundtrip() {
        for family in FontFamily::ALL {
            assert_eq!(FontFamily::from_name(family.family_name()), family);
        }
    }

    #[test]
    fn unknown_font_falls_back() {
        assert_eq!(FontFamily::from_name("Comic Sans MS"), FontFamily::Amiri);
        assert_eq!(FontFamily::from_name(""), FontFamily::Amiri);
    }

    #[test]
    fn color_lookup_roundtrip() {
        for color in SwatchColor::ALL {
            assert_eq!(SwatchColor::from_name(color.name()), color);
        }
    }

    #[test]
    fn unknown_color_falls_back() {
        assert_eq!(SwatchColor::from_name("Fuchsia"), SwatchColor::Ivory);
    }

    #[test]
    fn palette_colors_are_opaque() {
        for color in SwatchColor::ALL {
            assert_eq!(color.rgba()[3], 255);
        }
    }
}
