use tracing::{debug, info};

use crate::{
    config::Config,
    error::Result,
    face::FaceLandmarks,
    product::{ApplicationMethod, Category, MakeupProduct},
    recipes::{lips, RecipeConfig, RecipeRegistry},
    render::Surface,
};

/// The try-on engine: repaints one product overlay onto a base image.
///
/// Every apply follows the same protocol:
/// 1. Validate the landmark point groups
/// 2. Start from a fresh copy of the untouched base image (full repaint)
/// 3. Resolve exactly one recipe from the dispatch table
/// 4. Paint the overlay with the product's active shade and the configured
///    intensity
///
/// Applies are stateless with respect to prior overlays: switching product,
/// shade, or intensity never stacks effects. Multi-product composition is a
/// deliberate non-feature; callers wanting it must feed a painted surface
/// back in as a new base themselves.
pub struct TryOnEngine {
    config: Config,
    registry: RecipeRegistry,
    base: Surface,
}

impl TryOnEngine {
    /// Create an engine over the given base image.
    pub fn new(config: Config, base: Surface) -> Self {
        Self {
            config,
            registry: RecipeRegistry::new(),
            base,
        }
    }

    /// The untouched base image.
    pub fn base(&self) -> &Surface {
        &self.base
    }

    /// Replace the base image (a new upload or captured frame).
    pub fn set_base(&mut self, base: Surface) {
        self.base = base;
    }

    /// Apply one product overlay, returning the repainted surface.
    pub fn apply(&self, product: &MakeupProduct, landmarks: &FaceLandmarks) -> Result<Surface> {
        landmarks.validate()?;

        // Full repaint: always start from the untouched base.
        let mut surface = self.base.clone();

        let recipe = match self
            .registry
            .select(product.category, product.application_method)
        {
            Some(recipe) => recipe,
            None => {
                debug!(
                    category = product.category.as_str(),
                    method = product.application_method.as_str(),
                    "no recipe for selection; surface left as base image"
                );
                return Ok(surface);
            }
        };

        let recipe_config = self.recipe_config(product);
        recipe.validate_config(&recipe_config)?;

        info!(
            recipe = recipe.name(),
            product = %product.name,
            shade = %recipe_config.shade.to_hex(),
            intensity = recipe_config.intensity,
            "applying overlay"
        );
        recipe.apply(&mut surface, landmarks, &recipe_config)?;
        Ok(surface)
    }

    /// Build the per-apply recipe config: the product's active shade, the
    /// configured intensity, and any defaults carried in the config file.
    fn recipe_config(&self, product: &MakeupProduct) -> RecipeConfig {
        let shade = product
            .active_shade()
            .unwrap_or(self.config.recipe.shade);

        let mut recipe_config = RecipeConfig::new(shade, self.config.render.intensity);
        recipe_config.parameters = self.config.recipe.parameters.clone();

        // Highlight-finish lip products get the gloss stroke on top.
        if product.category == Category::Lips
            && product.application_method == ApplicationMethod::Highlight
        {
            recipe_config = recipe_config.set(lips::GLOSS_HIGHLIGHT, true);
        }

        recipe_config
    }
}
