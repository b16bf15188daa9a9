/// Flat commission rate applied by the simulator
pub const SIMULATED_COMMISSION_RATE: f64 = 0.07;

/// Additional commission for `sales_count` more sales at `avg_sale_value` each.
///
/// No tiering and no bounds checking: negative inputs produce negative earnings.
pub fn simulate_earnings(sales_count: f64, avg_sale_value: f64) -> f64 {
    (sales_count * avg_sale_value * SIMULATED_COMMISSION_RATE).round()
}

/// Result shown under the simulator form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub sales_count: f64,
    pub avg_sale_value: f64,
    pub additional_earnings: f64,
    pub total_potential: f64,
}

impl SimulationResult {
    pub fn compute(current_commission: f64, sales_count: f64, avg_sale_value: f64) -> Self {
        let additional_earnings = simulate_earnings(sales_count, avg_sale_value);
        Self {
            sales_count,
            avg_sale_value,
            additional_earnings,
            total_potential: current_commission + additional_earnings,
        }
    }
}

/// Parses a numeric form field the way the simulator inputs do: invalid → 0
pub fn parse_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(f64::trunc)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_earnings() {
        assert_eq!(simulate_earnings(10.0, 5000.0), 3500.0);
        assert_eq!(simulate_earnings(1.0, 5000.0), 350.0);
        assert_eq!(simulate_earnings(3.0, 1234.0), 259.0);
        assert_eq!(simulate_earnings(0.0, 5000.0), 0.0);
    }

    #[test]
    fn test_negative_inputs_are_not_bounded() {
        assert_eq!(simulate_earnings(-2.0, 1000.0), -140.0);
    }

    #[test]
    fn test_simulation_result_total() {
        let result = SimulationResult::compute(42500.0, 10.0, 5000.0);
        assert_eq!(result.additional_earnings, 3500.0);
        assert_eq!(result.total_potential, 46000.0);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("12"), 12.0);
        assert_eq!(parse_input(" 7.9 "), 7.0);
        assert_eq!(parse_input(""), 0.0);
        assert_eq!(parse_input("abc"), 0.0);
    }
}
