use serde::Serialize;
use tracing::warn;

/// Extraction family a model type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Classification,
    Regression,
}

/// Raw model type tags published by the model registry.
const MODEL_TYPE_TABLE: &[(&str, ModelKind)] = &[
    ("binary", ModelKind::Classification),
    ("multi_class", ModelKind::Classification),
    ("regression", ModelKind::Regression),
];

/// Kind used for any tag missing from `MODEL_TYPE_TABLE`.
pub const DEFAULT_MODEL_KIND: ModelKind = ModelKind::Regression;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelKindResolution {
    pub kind: ModelKind,
    /// True when the tag was not in the table and `DEFAULT_MODEL_KIND` was used.
    pub fallback: bool,
}

impl ModelKind {
    /// Looks a tag up in the mapping table. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        MODEL_TYPE_TABLE
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, kind)| *kind)
    }

    /// Resolves a tag, falling back to regression for unknown tags.
    ///
    /// The fallback is logged and reported so a typo in the registry does not
    /// silently switch a classifier onto the regression metrics.
    pub fn resolve(tag: &str) -> ModelKindResolution {
        match Self::from_tag(tag) {
            Some(kind) => ModelKindResolution {
                kind,
                fallback: false,
            },
            None => {
                warn!(
                    model_type = tag,
                    fallback = ?DEFAULT_MODEL_KIND,
                    "Unrecognized model type, using default extraction"
                );
                ModelKindResolution {
                    kind: DEFAULT_MODEL_KIND,
                    fallback: true,
                }
            }
        }
    }

    /// Fields pulled from a raw performance report, in display order.
    pub fn metric_fields(&self) -> &'static [&'static str] {
        match self {
            ModelKind::Classification => &["accuracy", "precision", "recall", "f1"],
            ModelKind::Regression => &["r_square", "mean_squared_error", "mean_absolute_error"],
        }
    }
}
