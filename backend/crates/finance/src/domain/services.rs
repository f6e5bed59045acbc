//! Domain Services
//!
//! Pure insight computation over a stored analysis baseline.

use crate::domain::entities::Analysis;
use crate::error::{FinanceError, FinanceResult};

/// Result of comparing current figures against a baseline
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    /// Percent change of spending against the baseline
    pub spending_change: f64,
    /// Percent change of saving against the baseline
    pub saving_change: f64,
    pub feedback: String,
}

/// Parse a numeric figure, rejecting text, NaN and infinities
pub fn parse_figure(field: &'static str, raw: &str) -> FinanceResult<f64> {
    let parse_error = || FinanceError::ParseError {
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }
    Ok(value)
}

/// `(current - baseline) / baseline * 100`
pub fn percent_change(field: &'static str, current: f64, baseline: f64) -> FinanceResult<f64> {
    if baseline == 0.0 {
        return Err(FinanceError::DivisionByZero { field });
    }
    Ok((current - baseline) / baseline * 100.0)
}

/// Human-readable feedback for a saving change
///
/// No change counts as a drop.
pub fn saving_feedback(saving_change: f64) -> String {
    let magnitude = two_decimals_half_up(saving_change.abs());
    if saving_change > 0.0 {
        format!("Your savings have increased by {magnitude}%")
    } else {
        format!("Your savings have dropped by {magnitude}%")
    }
}

/// Two fraction digits of a non-negative value, rounding half up on its
/// shortest decimal form (`2.675` gives `2.68`)
fn two_decimals_half_up(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }

    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(2))
        .collect();

    if frac_part.chars().nth(2).is_some_and(|d| d >= '5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
        }
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().collect();
    let fraction: String = digits[split..].iter().collect();
    format!("{whole}.{fraction}")
}

/// Compare current spending and saving against the stored baseline
pub fn compute_insight(
    baseline: &Analysis,
    current_spending: f64,
    current_saving: f64,
) -> FinanceResult<Insight> {
    let average_spending =
        parse_figure("averageMonthlySpending", &baseline.average_monthly_spending)?;
    let average_saving = parse_figure("averageMonthlySaving", &baseline.average_monthly_saving)?;

    let spending_change =
        percent_change("averageMonthlySpending", current_spending, average_spending)?;
    let saving_change = percent_change("averageMonthlySaving", current_saving, average_saving)?;

    Ok(Insight {
        spending_change,
        saving_change,
        feedback: saving_feedback(saving_change),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(spending: &str, saving: &str) -> Analysis {
        Analysis::new(
            spending.to_string(),
            saving.to_string(),
            "3000".to_string(),
            "5000".to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_parse_figure() {
        assert_eq!(parse_figure("x", "200").unwrap(), 200.0);
        assert_eq!(parse_figure("x", " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_figure("x", "-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_figure_rejects_non_numbers() {
        for raw in ["", "abc", "12,5", "NaN", "inf"] {
            let err = parse_figure("averageMonthlySaving", raw).unwrap_err();
            assert!(
                matches!(err, FinanceError::ParseError { field: "averageMonthlySaving", .. }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change("x", 150.0, 200.0).unwrap(), -25.0);
        assert_eq!(percent_change("x", 200.0, 200.0).unwrap(), 0.0);
        assert!(matches!(
            percent_change("x", 1.0, 0.0),
            Err(FinanceError::DivisionByZero { field: "x" })
        ));
    }

    #[test]
    fn test_feedback_text() {
        assert_eq!(saving_feedback(10.0), "Your savings have increased by 10.00%");
        assert_eq!(saving_feedback(-25.0), "Your savings have dropped by 25.00%");
        assert_eq!(saving_feedback(0.0), "Your savings have dropped by 0.00%");
        assert_eq!(saving_feedback(33.3333), "Your savings have increased by 33.33%");
    }

    #[test]
    fn test_feedback_rounds_half_up() {
        assert_eq!(
            saving_feedback((801.0 - 800.0) / 800.0 * 100.0),
            "Your savings have increased by 0.13%"
        );
        assert_eq!(saving_feedback(2.675), "Your savings have increased by 2.68%");
        assert_eq!(saving_feedback(-2.675), "Your savings have dropped by 2.68%");
        assert_eq!(saving_feedback(99.995), "Your savings have increased by 100.00%");
        assert_eq!(saving_feedback(0.004), "Your savings have increased by 0.00%");
        assert_eq!(saving_feedback(-100.0), "Your savings have dropped by 100.00%");
    }

    #[test]
    fn test_compute_insight_increase() {
        let insight = compute_insight(&baseline("1000", "200"), 1000.0, 220.0).unwrap();
        assert_eq!(insight.feedback, "Your savings have increased by 10.00%");
        assert_eq!(insight.spending_change, 0.0);
    }

    #[test]
    fn test_compute_insight_drop() {
        let insight = compute_insight(&baseline("1000", "200"), 1100.0, 150.0).unwrap();
        assert_eq!(insight.feedback, "Your savings have dropped by 25.00%");
        assert!((insight.spending_change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_insight_bad_baselines() {
        assert!(matches!(
            compute_insight(&baseline("1000", "lots"), 1.0, 1.0),
            Err(FinanceError::ParseError { .. })
        ));
        assert!(matches!(
            compute_insight(&baseline("1000", "0"), 1.0, 1.0),
            Err(FinanceError::DivisionByZero { field: "averageMonthlySaving" })
        ));
        assert!(matches!(
            compute_insight(&baseline("0", "200"), 1.0, 1.0),
            Err(FinanceError::DivisionByZero { field: "averageMonthlySpending" })
        ));
    }
}
