//! One-time registration of chart components.
//!
//! A line chart can only be drawn once its elements, scales and plugins are
//! registered. Registration happens once per process through `init()`; the
//! returned registry is immutable afterwards and is passed explicitly to
//! whatever builds a chart.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

/// Chart building blocks that must be registered before first use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartComponent {
    LineElement,
    PointElement,
    LinearScale,
    CategoryScale,
    Title,
    Tooltip,
    Legend,
}

impl ChartComponent {
    pub const ALL: [ChartComponent; 7] = [
        ChartComponent::LineElement,
        ChartComponent::PointElement,
        ChartComponent::LinearScale,
        ChartComponent::CategoryScale,
        ChartComponent::Title,
        ChartComponent::Tooltip,
        ChartComponent::Legend,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartComponent::LineElement => "LineElement",
            ChartComponent::PointElement => "PointElement",
            ChartComponent::LinearScale => "LinearScale",
            ChartComponent::CategoryScale => "CategoryScale",
            ChartComponent::Title => "Title",
            ChartComponent::Tooltip => "Tooltip",
            ChartComponent::Legend => "Legend",
        }
    }
}

impl fmt::Display for ChartComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors surfaced while building a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartError {
    /// A component the chart needs was never registered.
    Unregistered(ChartComponent),
    /// Chart data could not be encoded as JSON.
    Encode(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Unregistered(c) => {
                write!(f, "chart component {c} is not registered")
            }
            ChartError::Encode(msg) => write!(f, "chart data could not be encoded: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {}

/// Set of registered components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    components: BTreeSet<ChartComponent>,
}

impl Registry {
    pub fn with<I: IntoIterator<Item = ChartComponent>>(components: I) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    #[inline]
    pub fn is_registered(&self, c: ChartComponent) -> bool {
        self.components.contains(&c)
    }

    /// First missing component of `needed`, if any.
    pub fn require(&self, needed: &[ChartComponent]) -> Result<(), ChartError> {
        match needed.iter().find(|c| !self.is_registered(**c)) {
            Some(&missing) => Err(ChartError::Unregistered(missing)),
            None => Ok(()),
        }
    }

    pub fn components(&self) -> impl Iterator<Item = ChartComponent> + '_ {
        self.components.iter().copied()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Register every component exactly once and return the shared registry.
pub fn init() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry::with(ChartComponent::ALL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_complete() {
        let a = init();
        let b = init();
        assert!(std::ptr::eq(a, b));
        assert!(ChartComponent::ALL.iter().all(|c| a.is_registered(*c)));
        assert_eq!(a.components().count(), 7);
    }

    #[test]
    fn require_reports_first_missing() {
        let partial = Registry::with([ChartComponent::LineElement, ChartComponent::Legend]);
        assert_eq!(
            partial.require(&[ChartComponent::LineElement, ChartComponent::PointElement]),
            Err(ChartError::Unregistered(ChartComponent::PointElement))
        );
        assert!(partial.require(&[ChartComponent::Legend]).is_ok());
        assert!(Registry::default().require(&[]).is_ok());
    }
}
