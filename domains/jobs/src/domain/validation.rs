//! Validation helpers for job input

use rust_decimal::Decimal;
use validator::ValidationError;

/// Equity is a fraction of the company: 0 through 1 inclusive
pub fn validate_equity(equity: &Decimal) -> Result<(), ValidationError> {
    if *equity < Decimal::ZERO || *equity > Decimal::ONE {
        let mut err = ValidationError::new("equity_range");
        err.message = Some("equity must be between 0 and 1".into());
        return Err(err);
    }
    Ok(())
}

/// Salary floors are non-negative; fractional floors are allowed
pub fn validate_min_salary(min_salary: &Decimal) -> Result<(), ValidationError> {
    if *min_salary < Decimal::ZERO {
        let mut err = ValidationError::new("min_salary_range");
        err.message = Some("minSalary must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Build an `ILIKE` pattern matching `needle` anywhere, with wildcards in the
/// input matched literally
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
