use serde::Deserialize;

/// Timing/geometry for the staggered fade-up reveal.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealPlan {
    /// Intersection ratio that counts as "seen"
    pub threshold: f64,
    /// Hidden elements start this far below their resting position (px)
    pub offset_px: f32,
    /// Transition duration (seconds)
    pub duration_s: f32,
    /// Extra transition delay per DOM-order index (seconds)
    pub stagger_s: f32,
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            offset_px: 20.0,
            duration_s: 0.6,
            stagger_s: 0.05,
        }
    }
}

impl RevealPlan {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid reveal json: {e}"))
    }

    pub fn delay_for(&self, index: usize) -> f32 {
        index as f32 * self.stagger_s
    }

    /// Inline style applied before observation begins.
    pub fn hidden_style(&self, index: usize) -> (String, String, String) {
        (
            "0".to_string(),
            format!("translateY({}px)", self.offset_px),
            format!(
                "opacity {}s ease {delay}s, transform {}s cubic-bezier(0.2, 0.8, 0.2, 1) {delay}s",
                self.duration_s,
                self.duration_s,
                delay = self.delay_for(index),
            ),
        )
    }
}

/// One-shot visibility bookkeeping for a set of observed elements.
///
/// `mark_visible` reports `true` exactly once per element; the observer side
/// unsubscribes on that first hit, so re-scrolling past a revealed element
/// never restyles it.
pub struct RevealSet {
    plan: RevealPlan,
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(plan: RevealPlan, count: usize) -> Self {
        Self {
            plan,
            revealed: vec![false; count],
        }
    }

    pub fn plan(&self) -> &RevealPlan {
        &self.plan
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// First intersection for this index? Out-of-range indices are a no-op.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen @ false) => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot_per_element() {
        let mut set = RevealSet::new(RevealPlan::default(), 3);
        assert!(set.mark_visible(1));
        assert!(!set.mark_visible(1));
        assert!(!set.all_revealed());
        assert!(set.mark_visible(0));
        assert!(set.mark_visible(2));
        assert!(set.all_revealed());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut set = RevealSet::new(RevealPlan::default(), 1);
        assert!(!set.mark_visible(7));
    }

    #[test]
    fn stagger_grows_with_dom_order() {
        let plan = RevealPlan::default();
        assert_eq!(plan.delay_for(0), 0.0);
        assert!((plan.delay_for(4) - 0.2).abs() < 1e-6);
        let (opacity, transform, transition) = plan.hidden_style(2);
        assert_eq!(opacity, "0");
        assert_eq!(transform, "translateY(20px)");
        assert!(transition.contains("0.1s"));
    }
}
