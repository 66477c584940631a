use std::collections::HashMap;

use crate::product::{ApplicationMethod, Category};
use crate::recipes::{
    BlushRecipe, EyelinerRecipe, EyeshadowRecipe, FoundationRecipe, LipTintRecipe, Recipe,
};

/// Registry for the built-in draw recipes.
///
/// Recipes are registered by name; product selections are resolved to a
/// recipe through the category/application-method dispatch table. Exactly
/// one recipe matches a supported pair, and unsupported pairs match none.
pub struct RecipeRegistry {
    recipes: HashMap<String, Box<dyn Fn() -> Box<dyn Recipe>>>,
}

impl RecipeRegistry {
    /// Create a new registry with all built-in recipes
    pub fn new() -> Self {
        let mut registry = Self {
            recipes: HashMap::new(),
        };
        registry.register_builtin_recipes();
        registry
    }

    fn register_builtin_recipes(&mut self) {
        self.recipes.insert(
            "lip_tint".to_string(),
            Box::new(|| Box::new(LipTintRecipe::new())),
        );
        self.recipes.insert(
            "eyeliner".to_string(),
            Box::new(|| Box::new(EyelinerRecipe::new())),
        );
        self.recipes.insert(
            "eyeshadow".to_string(),
            Box::new(|| Box::new(EyeshadowRecipe::new())),
        );
        self.recipes.insert(
            "foundation".to_string(),
            Box::new(|| Box::new(FoundationRecipe::new())),
        );
        self.recipes.insert(
            "blush".to_string(),
            Box::new(|| Box::new(BlushRecipe::new())),
        );
    }

    /// Register a custom recipe factory under a unique name.
    pub fn register<F>(&mut self, name: String, factory: F)
    where
        F: Fn() -> Box<dyn Recipe> + 'static,
    {
        self.recipes.insert(name, Box::new(factory));
    }

    /// Get a recipe by name, or None if it is not registered.
    pub fn get_recipe(&self, name: &str) -> Option<Box<dyn Recipe>> {
        self.recipes.get(name).map(|factory| factory())
    }

    /// Recipe name for a product selection, per the dispatch table:
    ///
    /// | category | method            | recipe     |
    /// |----------|-------------------|------------|
    /// | lips     | overlay/highlight | lip_tint   |
    /// | eyes     | line              | eyeliner   |
    /// | eyes     | anything else     | eyeshadow  |
    /// | face     | base              | foundation |
    /// | blush    | any               | blush      |
    ///
    /// Anything else selects no recipe and the apply is a no-op.
    pub fn recipe_name_for(category: Category, method: ApplicationMethod) -> Option<&'static str> {
        match (category, method) {
            (Category::Lips, ApplicationMethod::Overlay)
            | (Category::Lips, ApplicationMethod::Highlight) => Some("lip_tint"),
            (Category::Lips, _) => None,
            (Category::Eyes, ApplicationMethod::Line) => Some("eyeliner"),
            (Category::Eyes, _) => Some("eyeshadow"),
            (Category::Face, ApplicationMethod::Base) => Some("foundation"),
            (Category::Face, _) => None,
            (Category::Blush, _) => Some("blush"),
        }
    }

    /// Resolve a product selection to a recipe instance.
    pub fn select(&self, category: Category, method: ApplicationMethod) -> Option<Box<dyn Recipe>> {
        Self::recipe_name_for(category, method).and_then(|name| self.get_recipe(name))
    }

    /// Get all available recipe names
    pub fn available_recipes(&self) -> Vec<String> {
        self.recipes.keys().cloned().collect()
    }

    /// Check if a recipe is available
    pub fn has_recipe(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Get the number of registered recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
