//! Layout configuration.

/// Spacing and sizing knobs for the layout passes. Fixed at initialization
/// time; the pipeline never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between siblings placed in the same house group.
    pub sibling_spacing: f64,
    /// Vertical distance between generations.
    pub generation_spacing: f64,
    /// y of generation 0.
    pub base_offset: f64,
    /// Extra horizontal gap between house groups within a generation.
    pub house_padding: f64,
    /// Horizontal distance between the two members of a partnership after
    /// centering. Keep >= `min_spacing` or the overlap pass will undo the
    /// centering.
    pub partner_gap: f64,
    /// Minimum horizontal distance enforced between any two characters of
    /// the same generation.
    pub min_spacing: f64,
    /// Names longer than this many chars are shortened to "First L." on the
    /// node.
    pub display_name_limit: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sibling_spacing: 140.0,
            generation_spacing: 180.0,
            base_offset: 80.0,
            house_padding: 160.0,
            partner_gap: 100.0,
            min_spacing: 80.0,
            display_name_limit: 16,
        }
    }
}
