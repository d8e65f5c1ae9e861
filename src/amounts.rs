/// Amount codec - converts human decimal amounts into integer base units
/// and back.
///
/// Fractional digits are truncated toward zero at min(8, decimals) digits
/// before scaling. The receiving program's on-chain arithmetic assumes this
/// client-side truncation already happened, so it is kept exactly as is;
/// the precision loss is deliberate, not a rounding bug.

use crate::errors::SwapError;

/// Maximum fractional digits retained before scaling
const MAX_FRACTION_DIGITS: usize = 8;

/// Scale a decimal amount string to integer base units
///
/// Fails with `InvalidAmount` when the amount is negative, malformed, or the
/// scaled value does not fit in a u64.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<u64, SwapError> {
    let trimmed = amount.trim();
    if trimmed.starts_with('-') {
        return Err(SwapError::InvalidAmount(format!(
            "negative amount not allowed: {}",
            amount
        )));
    }
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(SwapError::InvalidAmount(format!(
            "empty amount: {:?}",
            amount
        )));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(SwapError::InvalidAmount(format!(
            "malformed decimal amount: {:?}",
            amount
        )));
    }

    // Truncate toward zero, never keeping more than 8 fractional digits and
    // never more than the asset's own decimal count.
    let keep = MAX_FRACTION_DIGITS.min(decimals as usize);
    let frac_kept = &frac_part[..frac_part.len().min(keep)];

    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or_else(|| SwapError::InvalidAmount(format!("unsupported decimals: {}", decimals)))?;
    let int_value: u64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| {
            SwapError::InvalidAmount(format!("integer part out of range: {}", int_part))
        })?
    };
    let frac_value: u64 = if frac_kept.is_empty() {
        0
    } else {
        frac_kept.parse().map_err(|_| {
            SwapError::InvalidAmount(format!("fraction out of range: {}", frac_kept))
        })?
    };
    let frac_scale = 10u64.pow((decimals as usize - frac_kept.len()) as u32);

    int_value
        .checked_mul(scale)
        .and_then(|v| frac_value.checked_mul(frac_scale).and_then(|f| v.checked_add(f)))
        .ok_or_else(|| {
            SwapError::InvalidAmount(format!(
                "amount {} does not fit in u64 at {} decimals",
                amount, decimals
            ))
        })
}

/// Inverse scaling for display only - lossy beyond the 8-digit truncation
/// applied on the way in
pub fn to_display_units(raw: u64, decimals: u8) -> f64 {
    (raw as f64) / 10f64.powi(decimals as i32)
}
