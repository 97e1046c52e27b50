/// Computes `total / count` rounded to one decimal place.
///
/// Ties round half away from zero. The rounding is done on the exact integer
/// ratio, so a mean of 0.25 becomes 0.3 rather than depending on how 0.25
/// happens to be represented in binary. Returns 0.0 when `count` is zero.
pub fn mean_to_one_decimal(total: i128, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }

    let numerator = total * 10;
    let denominator = i128::from(count);

    // integer division truncates toward zero; the remainder keeps the sign of the numerator
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    let tenths = if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    };

    tenths as f64 / 10.0
}
