use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_scale() -> f32 {
    1.0
}

/// A named visual asset to instantiate for a matching tracked image.
///
/// The asset string is opaque to this crate; the scene backend decides what
/// it refers to (a model path, an addressable key, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefabTemplate {
    pub name: String,
    pub asset: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl PrefabTemplate {
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Immutable collection of templates with a name index built once.
///
/// Duplicate names keep their first definition; later ones are unreachable
/// through [`TemplateLibrary::resolve`] and reported at `warn` level.
pub struct TemplateLibrary {
    templates: Vec<PrefabTemplate>,
    by_name: HashMap<String, usize>,
}

impl TemplateLibrary {
    pub fn new(templates: Vec<PrefabTemplate>) -> Self {
        let mut by_name = HashMap::with_capacity(templates.len());
        for (index, template) in templates.iter().enumerate() {
            if by_name.contains_key(&template.name) {
                warn!(
                    "duplicate template name '{}', keeping the first definition",
                    template.name
                );
                continue;
            }
            by_name.insert(template.name.clone(), index);
        }
        Self { templates, by_name }
    }

    /// Look up a template by exact name match.
    pub fn resolve(&self, name: &str) -> Option<&PrefabTemplate> {
        self.by_name.get(name).map(|&index| &self.templates[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of configured templates, counting shadowed duplicates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefabTemplate> {
        self.templates.iter()
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
