use super::dto::Penalty;

/// Sum of all penalty amounts; 0 for an empty list
pub fn total_penalties(penalties: &[Penalty]) -> f64 {
    penalties.iter().map(|p| p.amount).sum()
}

/// What the penalties section renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenaltySummary {
    /// Distinct "no penalties" state
    Clear,
    Charged { count: usize, total: f64 },
}

impl PenaltySummary {
    pub fn from_penalties(penalties: &[Penalty]) -> Self {
        if penalties.is_empty() {
            PenaltySummary::Clear
        } else {
            PenaltySummary::Charged {
                count: penalties.len(),
                total: total_penalties(penalties),
            }
        }
    }

    /// Total to show next to the penalty badges; `None` when nothing was charged
    pub fn charged_total(&self) -> Option<f64> {
        match self {
            PenaltySummary::Clear => None,
            PenaltySummary::Charged { total, .. } => Some(*total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalty(id: i64, amount: f64) -> Penalty {
        Penalty {
            id,
            reason: format!("reason {id}"),
            amount,
            date: "May 10, 2025".to_string(),
        }
    }

    #[test]
    fn test_total_penalties() {
        assert_eq!(total_penalties(&[]), 0.0);
        assert_eq!(total_penalties(&[penalty(1, 350.0), penalty(2, 200.0)]), 550.0);
    }

    #[test]
    fn test_summary_states() {
        assert_eq!(PenaltySummary::from_penalties(&[]), PenaltySummary::Clear);
        assert_eq!(
            PenaltySummary::from_penalties(&[penalty(1, 350.0), penalty(2, 200.0), penalty(3, 450.0)]),
            PenaltySummary::Charged { count: 3, total: 1000.0 }
        );
    }

    #[test]
    fn test_no_badge_total_without_penalties() {
        assert_eq!(PenaltySummary::from_penalties(&[]).charged_total(), None);
        assert_eq!(
            PenaltySummary::from_penalties(&[penalty(1, 350.0), penalty(2, 200.0)]).charged_total(),
            Some(550.0)
        );
    }
}
