//! Price formatting in Chilean pesos.

/// Marker appended to the price when it already includes VAT.
pub const TAX_INCLUDED_MARKER: &str = "IVA incl.";

/// Format an amount of Chilean pesos for display.
///
/// Follows the `es-CL` currency convention: `$` prefix, `.` as the thousands
/// separator and no decimals (CLP has no minor unit).
///
/// ```
/// use tienda_domain::price::format_clp;
///
/// assert_eq!(format_clp(12_990), "$12.990");
/// assert_eq!(format_clp(-1_500), "-$1.500");
/// ```
#[must_use]
pub fn format_clp(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    if amount < 0 {
        grouped.push('-');
    }
    grouped.push('$');
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
