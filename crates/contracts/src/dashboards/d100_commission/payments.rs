use super::dto::PaymentCollectionData;
use super::progress::ratio;

/// Commission paid on the amount collected (0.5%)
pub const COLLECTION_COMMISSION_RATE: f64 = 0.005;
/// Scale the "upcoming invoices" bar is drawn against
pub const UPCOMING_SEGMENT_SCALE: u32 = 21;

pub fn collection_commission(total_collected: f64) -> f64 {
    total_collected * COLLECTION_COMMISSION_RATE
}

/// Share of payments collected, in whole percent (0 when there are no payments)
pub fn collection_rate(data: &PaymentCollectionData) -> i64 {
    ratio(data.payments_collected as f64, data.total_payments as f64)
        .map(|r| (r * 100.0).round() as i64)
        .unwrap_or(0)
}

/// One segment of a segmented counter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub index: u32,
    pub filled: bool,
}

/// `total` segments, the first `filled` of which are marked
pub fn segments(filled: u32, total: u32) -> Vec<Segment> {
    let filled = filled.min(total);
    (0..total)
        .map(|index| Segment {
            index,
            filled: index < filled,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(total: u32, collected: u32, total_collected: f64) -> PaymentCollectionData {
        PaymentCollectionData {
            total_payments: total,
            payments_collected: collected,
            overdue_payments: 2,
            upcoming_payments: 1,
            total_collected,
            commission_earned: collection_commission(total_collected),
        }
    }

    #[test]
    fn test_collection_commission() {
        assert_eq!(collection_commission(40000.0), 200.0);
        assert_eq!(collection_commission(130000.0), 650.0);
        assert_eq!(collection_commission(0.0), 0.0);
    }

    #[test]
    fn test_collection_rate() {
        assert_eq!(collection_rate(&data(10, 8, 40000.0)), 80);
        assert_eq!(collection_rate(&data(0, 0, 0.0)), 0);
    }

    #[test]
    fn test_segments() {
        let bar = segments(2, 5);
        assert_eq!(bar.len(), 5);
        assert_eq!(bar.iter().filter(|s| s.filled).count(), 2);
        assert!(bar[0].filled && bar[1].filled && !bar[2].filled);

        let overflow = segments(9, 3);
        assert!(overflow.iter().all(|s| s.filled));
        assert!(segments(1, 0).is_empty());
    }
}
