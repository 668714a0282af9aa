// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Poster state and text element data structures.
//!
//! All element positions live in a fixed 1280x720 logical coordinate
//! space, independent of the size the canvas is rendered at on screen.

use std::collections::BTreeMap;

use crate::models::style::{FontFamily, SwatchColor};

/// Logical canvas width in logical units.
pub const LOGICAL_WIDTH: f32 = 1280.0;
/// Logical canvas height in logical units.
pub const LOGICAL_HEIGHT: f32 = 720.0;

/// Identifier for one of the fixed poster elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Title,
    Lecturer,
    Schedule,
    Venue,
}

impl ElementId {
    /// All elements, in draw order.
    pub const ALL: [ElementId; 4] = [
        ElementId::Title,
        ElementId::Lecturer,
        ElementId::Schedule,
        ElementId::Venue,
    ];

    /// Display name shown in the properties panel.
    pub fn label(&self) -> &'static str {
        match self {
            ElementId::Title => "Title",
            ElementId::Lecturer => "Lecturer",
            ElementId::Schedule => "Date & time",
            ElementId::Venue => "Venue",
        }
    }
}

/// A single positioned, styled text item on the poster.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub id: ElementId,
    pub label: String,
    pub text: String,
    /// Top-left anchor, logical units.
    pub x: f32,
    pub y: f32,
    /// Font size in logical units.
    pub font_size: f32,
    pub font: FontFamily,
    pub color: SwatchColor,
    /// Optional wrap constraint in logical units. `None` means no wrapping.
    pub width: Option<f32>,
}

/// Decoded background image pixels (RGBA8), kept for display and export.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Complete in-memory poster state.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterState {
    pub background: Option<BackgroundImage>,
    pub elements: BTreeMap<ElementId, TextElement>,
}

impl Default for PosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl PosterState {
    /// Create a poster with the fixed initial set of four elements.
    pub fn new() -> Self {
        let defaults = [
            TextElement {
                id: ElementId::Title,
                label: ElementId::Title.label().to_string(),
                text: "محاضرة بعنوان: فقه المعاملات المالية".to_string(),
                x: 140.0,
                y: 110.0,
                font_size: 64.0,
                font: FontFamily::Amiri,
                color: SwatchColor::Ivory,
                width: Some(1000.0),
            },
            TextElement {
                id: ElementId::Lecturer,
                label: ElementId::Lecturer.label().to_string(),
                text: "يلقيها فضيلة الشيخ الدكتور عبد الرحمن العمري".to_string(),
                x: 220.0,
                y: 320.0,
                font_size: 40.0,
                font: FontFamily::Cairo,
                color: SwatchColor::Gold,
                width: Some(840.0),
            },
            TextElement {
                id: ElementId::Schedule,
                label: ElementId::Schedule.label().to_string(),
                text: "الخميس ١٤ محرم ١٤٤٧هـ — بعد صلاة المغرب".to_string(),
                x: 300.0,
                y: 480.0,
                font_size: 32.0,
                font: FontFamily::Tajawal,
                color: SwatchColor::Sky,
                width: None,
            },
            TextElement {
                id: ElementId::Venue,
                label: ElementId::Venue.label().to_string(),
                text: "جامع النور — القاعة الكبرى".to_string(),
                x: 360.0,
                y: 570.0,
                font_size: 32.0,
                font: FontFamily::Tajawal,
                color: SwatchColor::Sand,
                width: None,
            },
        ];

        let mut elements = BTreeMap::new();
        for element in defaults {
            elements.insert(element.id, element);
        }

        Self {
            background: None,
            elements,
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&TextElement> {
        self.elements.get(&id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut TextElement> {
        self.elements.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_poster_has_all_four_elements() {
        let poster = PosterState::new();
        assert_eq!(poster.elements.len(), 4);
        for id in ElementId::ALL {
            let element = poster.element(id).expect("element missing");
            assert_eq!(element.id, id);
            assert!(!element.text.is_empty());
        }
        assert!(poster.background.is_none());
    }

    #[test]
    fn positions_start_inside_logical_canvas() {
        let poster = PosterState::new();
        for element in poster.elements.values() {
            assert!(element.x >= 0.0 && element.x < LOGICAL_WIDTH);
            assert!(element.y >= 0.0 && element.y < LOGICAL_HEIGHT);
        }
    }
}
