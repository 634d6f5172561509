// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

/// Formats a linear tick so that neighbouring ticks `step` apart stay distinguishable.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 && step.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "steps below 1 have a small positive decimal count"
        )]
        {
            (-step.log10().floor()).clamp(0.0, 12.0) as usize
        }
    } else {
        0
    };
    let s = format!("{v:.decimals$}");
    // Avoid "-0" and "-0.00".
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_owned()
    } else {
        s
    }
}

/// Formats a log-scale tick that is a power of `base`.
///
/// Base 2 ticks read as plain integers up to a million and as `2^k` beyond that. Other bases
/// read as plain numbers between `1e-4` and `1e6` and as `1e{k}` (for base 10) or `{base}^k`
/// outside that window.
pub fn format_log_tick(v: f64, base: f64) -> String {
    if v <= 0.0 || !v.is_finite() {
        return format_tick_with_step(v, 1.0);
    }
    let exp = (v.ln() / base.ln()).round();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "exponents of finite positive f64 values fit in i32"
    )]
    let k = exp as i32;

    if base == 2.0 {
        if (1.0..1e6).contains(&v) {
            return format!("{v:.0}");
        }
        return format!("2^{k}");
    }

    if (1e-4..1e6).contains(&v) {
        if v >= 1.0 {
            return format!("{v:.0}");
        }
        // v < 1: enough decimals for the leading digit.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "v lies in [1e-4, 1), so the count is between 1 and 4"
        )]
        let decimals = (-v.log10()).ceil().max(1.0) as usize;
        return format!("{v:.decimals$}");
    }
    if base == 10.0 {
        format!("1e{k}")
    } else {
        format!("{base}^{k}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_carry_as_many_decimals_as_the_step() {
        assert_eq!(format_tick_with_step(0.5, 0.1), "0.5");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
        assert_eq!(format_tick_with_step(20.0, 5.0), "20");
        assert_eq!(format_tick_with_step(-0.0001, 0.1), "0.0");
    }

    #[test]
    fn base_two_ticks_switch_to_exponents_above_a_million() {
        assert_eq!(format_log_tick(1024.0, 2.0), "1024");
        assert_eq!(format_log_tick(2_f64.powi(24), 2.0), "2^24");
        assert_eq!(format_log_tick(0.5, 2.0), "2^-1");
    }

    #[test]
    fn base_ten_ticks_use_exponents_outside_the_plain_window() {
        assert_eq!(format_log_tick(100.0, 10.0), "100");
        assert_eq!(format_log_tick(0.001, 10.0), "0.001");
        assert_eq!(format_log_tick(1e7, 10.0), "1e7");
        assert_eq!(format_log_tick(1e-6, 10.0), "1e-6");
    }
}
