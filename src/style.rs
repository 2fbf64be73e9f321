// src/style.rs
use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for the three indicator segments and the surrounding chrome.
/// A segment not yet reached by the current rating renders in `unused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub unused: Rgb,
    pub weak: Rgb,
    pub medium: Rgb,
    pub strong: Rgb,
    pub label: Rgb,
    pub border: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unused: Rgb::new(208, 214, 219),
            weak: Rgb::new(230, 92, 92),
            medium: Rgb::new(230, 181, 92),
            strong: Rgb::new(77, 191, 99),
            label: Rgb::new(90, 88, 105),
            border: Rgb::new(48, 150, 240),
            background: Rgb::new(247, 247, 247),
        }
    }
}

impl Palette {
    /// Fill color of one segment given the currently displayed category.
    /// Segments light up cumulatively: the weak segment is always lit, the
    /// medium segment for Medium and above, the strong segment only for
    /// Strong.
    pub fn segment_color(&self, segment: Category, current: Category) -> Rgb {
        if segment > current {
            return self.unused;
        }
        match segment {
            Category::Weak => self.weak,
            Category::Medium => self.medium,
            Category::Strong => self.strong,
        }
    }
}

/// Choreography of the entry transition that runs when the rating moves
/// into a new category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub flare_duration: Duration,
    pub flare_scale: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            flare_duration: Duration::from_millis(400),
            flare_scale: 1.8,
        }
    }
}

/// Presentation configuration owned by the host view. The classifier never
/// reads any of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub title: String,
    pub placeholder: String,
    pub palette: Palette,
    pub animation: AnimationConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: "Enter Password".to_string(),
            placeholder: "Choose a password:".to_string(),
            palette: Palette::default(),
            animation: AnimationConfig::default(),
        }
    }
}
