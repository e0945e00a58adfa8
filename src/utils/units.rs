use alloy::primitives::U256;

/// Fractional digits shown for every balance.
const DISPLAY_DECIMALS: u8 = 4;

/// Parse a raw token balance. Hex (`0x…`) is what the balance API returns;
/// plain decimal strings are accepted as well.
pub fn parse_raw_balance(raw: &str) -> Result<U256, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("empty balance".to_string());
    }

    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        // Some nodes encode zero as a bare "0x"
        Some("") => Ok(U256::ZERO),
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(raw, 10),
    };

    parsed.map_err(|e| format!("'{}' is not an integer balance: {}", raw, e))
}

/// Convert `amount` (in the token's smallest unit) to a human readable value
/// with exactly four fractional digits, rounding half up.
///
/// The division happens on 256-bit integers so balances far beyond the f64
/// safe-integer range stay exact up to the last displayed digit.
pub fn format_balance(amount: U256, decimals: u8) -> Result<String, String> {
    let ten = U256::from(10u64);

    let scaled = if decimals >= DISPLAY_DECIMALS {
        let shift = U256::from(decimals - DISPLAY_DECIMALS);
        match ten.checked_pow(shift) {
            Some(divisor) => {
                let quotient = amount / divisor;
                let remainder = amount % divisor;
                if remainder >= divisor - remainder {
                    quotient + U256::from(1u64)
                } else {
                    quotient
                }
            }
            // 10^shift exceeds any representable balance
            None => U256::ZERO,
        }
    } else {
        let shift = U256::from(DISPLAY_DECIMALS - decimals);
        let multiplier = ten
            .checked_pow(shift)
            .ok_or_else(|| "display scale overflow".to_string())?;
        amount
            .checked_mul(multiplier)
            .ok_or_else(|| format!("balance {} too large to scale", amount))?
    };

    let unit = ten.pow(U256::from(DISPLAY_DECIMALS));
    let whole = scaled / unit;
    let fraction = (scaled % unit).to::<u64>();

    Ok(format!(
        "{}.{:0width$}",
        whole,
        fraction,
        width = DISPLAY_DECIMALS as usize
    ))
}
