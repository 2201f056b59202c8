//! Size-hint to pixel radius mapping.

/// Pixels of radius per unit of `sqrt(size_hint)`.
pub const NODE_REL_SIZE: f64 = 4.0;

/// Radius used when a node carries no size.
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Radius for a node of the given size hint. Area, not radius, grows linearly
/// with the hint, so a node of size 4 is twice as wide as one of size 1.
pub fn radius_for(size_hint: f64) -> f64 {
	if size_hint.is_finite() && size_hint > 0.0 {
		size_hint.sqrt() * NODE_REL_SIZE
	} else {
		DEFAULT_RADIUS
	}
}
