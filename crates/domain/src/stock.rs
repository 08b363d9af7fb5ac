//! Stock status: inventory level classified against the reorder threshold.

use serde::{Deserialize, Serialize};

/// Inventory level of a product relative to its minimum stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Available,
    Low,
    Out,
}

impl StockStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Low, Self::Out];

    /// Classify `current` stock against the `minimum` threshold.
    ///
    /// Nothing on hand (zero or less) is [`Out`](Self::Out); at or below the
    /// threshold is [`Low`](Self::Low); anything above is
    /// [`Available`](Self::Available).
    #[must_use]
    pub fn classify(current: i64, minimum: i64) -> Self {
        if current <= 0 {
            Self::Out
        } else if current <= minimum {
            Self::Low
        } else {
            Self::Available
        }
    }

    /// Customer-facing label shown in the stock badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Low => "Stock bajo",
            Self::Out => "Agotado",
        }
    }

    /// Style class of the stock badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Available => "badge-stock-available",
            Self::Low => "badge-stock-low",
            Self::Out => "badge-stock-out",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Low => f.write_str("low"),
            Self::Out => f.write_str("out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_classify_out_when_nothing_on_hand() {
        assert_eq!(StockStatus::classify(0, 5), StockStatus::Out);
        assert_eq!(StockStatus::classify(-2, 5), StockStatus::Out);
    }

    #[test]
    fn should_classify_low_when_at_or_below_minimum() {
        assert_eq!(StockStatus::classify(5, 5), StockStatus::Low);
        assert_eq!(StockStatus::classify(1, 5), StockStatus::Low);
    }

    #[test]
    fn should_classify_available_when_above_minimum() {
        assert_eq!(StockStatus::classify(6, 5), StockStatus::Available);
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Available);
    }

    #[test]
    fn should_map_each_status_to_a_distinct_badge_class() {
        let classes: HashSet<_> = StockStatus::ALL.iter().map(|s| s.badge_class()).collect();
        assert_eq!(classes.len(), StockStatus::ALL.len());
    }

    #[test]
    fn should_map_each_status_to_a_distinct_label() {
        let labels: HashSet<_> = StockStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), StockStatus::ALL.len());
        assert_eq!(StockStatus::Low.label(), "Stock bajo");
    }

    #[test]
    fn should_serialize_lowercase() {
        let json = serde_json::to_string(&StockStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
        assert_eq!(StockStatus::Out.to_string(), "out");
    }
}
