use serde::{Deserialize, Serialize};

/// Horizontal multiplier applied when a single scalar is expanded.
///
/// Terminal cells are roughly three times taller than they are wide, so a
/// scalar of `1` becomes one blank row above/below and three columns left/right.
pub const HORIZONTAL_ASPECT: usize = 3;

/// Four-sided spacing used for both padding (inside the border) and margin
/// (outside the border).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Expand a scalar: `top = bottom = n`, `left = right = 3n`.
    pub fn uniform(n: usize) -> Self {
        let side = n.saturating_mul(HORIZONTAL_ASPECT);
        Self {
            top: n,
            right: side,
            bottom: n,
            left: side,
        }
    }

    /// Combined left + right spacing
    pub fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Combined top + bottom spacing
    pub fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

/// Sides given explicitly by the caller; absent sides fall back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialSpacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<usize>,
}

/// Spacing as the caller wrote it: a scalar shorthand or a partial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpacingSpec {
    Uniform(usize),
    Sides(PartialSpacing),
}

impl SpacingSpec {
    pub fn resolve(&self) -> Spacing {
        match self {
            SpacingSpec::Uniform(n) => Spacing::uniform(*n),
            SpacingSpec::Sides(sides) => Spacing {
                top: sides.top.unwrap_or(0),
                right: sides.right.unwrap_or(0),
                bottom: sides.bottom.unwrap_or(0),
                left: sides.left.unwrap_or(0),
            },
        }
    }
}

impl Default for SpacingSpec {
    fn default() -> Self {
        SpacingSpec::Uniform(0)
    }
}

impl From<usize> for SpacingSpec {
    fn from(n: usize) -> Self {
        SpacingSpec::Uniform(n)
    }
}

impl From<PartialSpacing> for SpacingSpec {
    fn from(sides: PartialSpacing) -> Self {
        SpacingSpec::Sides(sides)
    }
}

impl From<Spacing> for SpacingSpec {
    fn from(spacing: Spacing) -> Self {
        SpacingSpec::Sides(PartialSpacing {
            top: Some(spacing.top),
            right: Some(spacing.right),
            bottom: Some(spacing.bottom),
            left: Some(spacing.left),
        })
    }
}
