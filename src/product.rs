use serde::{Deserialize, Serialize};

use crate::render::Shade;

/// Product category; each maps to a family of draw recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Lips,
    Eyes,
    Face,
    Blush,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lips => "lips",
            Category::Eyes => "eyes",
            Category::Face => "face",
            Category::Blush => "blush",
        }
    }

    /// Parse a catalog category string; unknown categories are preserved as
    /// `None` so the apply stays a no-op rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lips" => Some(Category::Lips),
            "eyes" => Some(Category::Eyes),
            "face" => Some(Category::Face),
            "blush" => Some(Category::Blush),
            _ => None,
        }
    }
}

/// Visual technique the catalog assigns a product; selects the recipe
/// within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMethod {
    Overlay,
    Highlight,
    Line,
    Enhance,
    Base,
    Blend,
}

impl ApplicationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationMethod::Overlay => "overlay",
            ApplicationMethod::Highlight => "highlight",
            ApplicationMethod::Line => "line",
            ApplicationMethod::Enhance => "enhance",
            ApplicationMethod::Base => "base",
            ApplicationMethod::Blend => "blend",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "overlay" => Some(ApplicationMethod::Overlay),
            "highlight" => Some(ApplicationMethod::Highlight),
            "line" => Some(ApplicationMethod::Line),
            "enhance" => Some(ApplicationMethod::Enhance),
            "base" => Some(ApplicationMethod::Base),
            "blend" => Some(ApplicationMethod::Blend),
            _ => None,
        }
    }
}

/// A catalog product selected for try-on.
///
/// The shade list keeps catalog order; the first entry is the active shade
/// until the user picks another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeupProduct {
    pub name: String,
    pub category: Category,
    pub application_method: ApplicationMethod,
    pub shades: Vec<Shade>,
}

impl MakeupProduct {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        application_method: ApplicationMethod,
        shades: Vec<Shade>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            application_method,
            shades,
        }
    }

    /// The active shade: the first entry in catalog order.
    pub fn active_shade(&self) -> Option<Shade> {
        self.shades.first().copied()
    }

    /// Move the shade at `index` to the front, making it active.
    pub fn select_shade(&mut self, index: usize) {
        if index > 0 && index < self.shades.len() {
            let shade = self.shades.remove(index);
            self.shades.insert(0, shade);
        }
    }
}
