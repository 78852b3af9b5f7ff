use serde::Deserialize;

/// Tuning constants for the floating-element simulation.
///
/// Defaults match the deployed page; individual values can be overridden at
/// runtime from a JSON object passed through the facade.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimParams {
    /// Per-frame velocity decay multiplier (< 1)
    pub friction: f32,
    /// Fraction of velocity retained (sign-flipped) after a boundary bounce
    pub restitution: f32,
    /// Added to vy every frame; the page ships with weightless elements
    pub gravity: f32,
    /// Pointer distance within which bodies are pushed away
    pub repel_radius: f32,
    /// Scale on the repulsion falloff
    pub repel_strength: f32,
    /// Extra separation distance added to the sum of radii
    pub collide_pad: f32,
    /// Scale on the overlap-proportional separating nudge
    pub separation: f32,
    /// Component-wise cap on throw velocity seeded from pointer deltas
    pub max_throw: f32,
    /// Degrees of cosmetic tilt per pixel/frame of velocity
    pub tilt_scale: f32,
    /// Tilt clamp (degrees)
    pub tilt_max: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            friction: 0.95,
            restitution: 0.8,
            gravity: 0.0,
            repel_radius: 150.0,
            repel_strength: 2.0,
            collide_pad: 10.0,
            separation: 0.05,
            max_throw: 50.0,
            tilt_scale: 2.0,
            tilt_max: 15.0,
        }
    }
}

impl SimParams {
    /// Parse a JSON override object on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid params json: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_overrides_merge_over_defaults() {
        let p = SimParams::from_json(r#"{"friction": 0.9, "max_throw": 30.0}"#).unwrap();
        assert_eq!(p.friction, 0.9);
        assert_eq!(p.max_throw, 30.0);
        // Untouched fields keep their defaults
        assert_eq!(p.restitution, 0.8);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SimParams::from_json(r#"{"bounciness": 2.0}"#).is_err());
    }
}
