//! A single feature column, discrete or numeric.

/// A feature column.
///
/// `Numeric` carries a transient `sort_index` used only between the
/// indexing and discretization stages: once discretization has produced the
/// final threshold list the index is dropped (see the crate's discretizer).
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Discrete {
        name: String,
        categories: Vec<String>,
    },
    Numeric {
        name: String,
        thresholds: Vec<i64>,
        sort_index: Option<Vec<usize>>,
    },
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Discrete { name, .. } => name,
            Attribute::Numeric { name, .. } => name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Attribute::Numeric { .. })
    }

    /// Domain size: number of categories for a discrete attribute, or
    /// `thresholds.len() + 1` (number of bins) for a numeric one.
    pub fn domain_size(&self) -> usize {
        match self {
            Attribute::Discrete { categories, .. } => categories.len(),
            Attribute::Numeric { thresholds, .. } => thresholds.len() + 1,
        }
    }

    pub fn categories(&self) -> &[String] {
        match self {
            Attribute::Discrete { categories, .. } => categories,
            Attribute::Numeric { .. } => &[],
        }
    }

    pub fn thresholds(&self) -> &[i64] {
        match self {
            Attribute::Numeric { thresholds, .. } => thresholds,
            Attribute::Discrete { .. } => &[],
        }
    }

    /// Which bin (0-indexed) a numeric value falls into, given the
    /// attribute's threshold list. Bin `i` is `[thresholds[i-1], thresholds[i])`
    /// for interior bins; the last bin is `>= thresholds[last]`.
    pub fn bin_of(&self, value: i64) -> usize {
        match self {
            Attribute::Numeric { thresholds, .. } => {
                thresholds.iter().take_while(|&&t| value >= t).count()
            }
            Attribute::Discrete { .. } => value as usize,
        }
    }
}
