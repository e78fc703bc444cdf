//! Refinement stage vocabulary for story elements.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Position of a story element in the editorial pipeline.
///
/// The stages form a fixed ordered list and are stored as snake_case labels.
/// Nothing in the service advances a stage on its own: labels are written by
/// editors and external tooling, and any stage may replace any other.
///
/// # Examples
///
/// ```
/// use loresmith_core::RefinementStage;
///
/// let stage: RefinementStage = "animation_notes_added".parse().unwrap();
/// assert_eq!(stage.position(), 1);
/// assert_eq!(stage.next(), Some(RefinementStage::VisualPromptsAdded));
/// assert_eq!(RefinementStage::IpaReady.next(), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefinementStage {
    /// Freshly generated, untouched
    #[default]
    Unrefined,
    /// Animation direction has been added
    AnimationNotesAdded,
    /// Image generation prompts have been added
    VisualPromptsAdded,
    /// Checked against established lore
    LoreReviewed,
    /// Ready for IP asset registration
    IpaReady,
}

impl RefinementStage {
    /// All stages in pipeline order.
    pub fn ordered() -> Vec<RefinementStage> {
        RefinementStage::iter().collect()
    }

    /// Zero-based position in the pipeline.
    pub fn position(&self) -> usize {
        RefinementStage::iter()
            .position(|stage| stage == *self)
            .unwrap_or_default()
    }

    /// The stage after this one, if any.
    pub fn next(&self) -> Option<RefinementStage> {
        RefinementStage::iter().nth(self.position() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_order_is_fixed() {
        let labels: Vec<String> = RefinementStage::ordered()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            labels,
            vec![
                "unrefined",
                "animation_notes_added",
                "visual_prompts_added",
                "lore_reviewed",
                "ipa_ready"
            ]
        );
    }

    #[test]
    fn ordering_follows_position() {
        let stages = RefinementStage::ordered();
        for pair in stages.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("polished".parse::<RefinementStage>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_labels() {
        let json = serde_json::to_string(&RefinementStage::IpaReady).unwrap();
        assert_eq!(json, "\"ipa_ready\"");
    }
}
