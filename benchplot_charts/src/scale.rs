// Copyright 2025 the Benchplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: mappings from data space to figure space.
//!
//! A `*Spec` carries the domain and options; `instantiate` binds it to an output range once
//! the layout is known.

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous log scale.
    Log(ScaleLogSpec),
    /// Discrete band scale.
    Band(ScaleBandSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLogSpec> for ScaleSpec {
    fn from(value: ScaleLogSpec) -> Self {
        Self::Log(value)
    }
}

impl From<ScaleBandSpec> for ScaleSpec {
    fn from(value: ScaleBandSpec) -> Self {
        Self::Band(value)
    }
}

impl ScaleSpec {
    /// Instantiates a continuous scale, or `None` for a band scale.
    pub fn continuous(&self, range: (f64, f64), tick_count: usize) -> Option<ScaleContinuous> {
        match self {
            Self::Linear(s) => Some(ScaleContinuous::Linear(
                s.instantiate_resolved(range, tick_count),
            )),
            Self::Log(s) => Some(ScaleContinuous::Log(s.instantiate(range))),
            Self::Band(_) => None,
        }
    }

    /// Instantiates a band scale, or `None` for a continuous scale.
    pub fn band(&self, range: (f64, f64)) -> Option<ScaleBand> {
        match self {
            Self::Band(s) => Some(s.instantiate(range)),
            _ => None,
        }
    }
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(count),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Specification for a linear scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to extend the domain outward to round tick values.
    pub nice: bool,
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        match nice_ticks(self.domain.0, self.domain.1, tick_count).as_slice() {
            [first, .., last] => (*first, *last),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale using the resolved domain.
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

/// Returns evenly spaced round values covering `[min, max]`.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f.min(10_000.0) as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Rounds a raw tick step to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(step.log10().floor());
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A logarithmic mapping from a positive domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base. Invalid bases fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = valid_base(base);
        self
    }

    /// Returns the log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    fn log_base(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }

    /// Maps a value from domain space into range space.
    ///
    /// Non-positive inputs map to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let denom = self.log_base(d1) - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the powers of the base inside the domain.
    ///
    /// When there are more than `count` powers, every n-th exponent is kept so that at most
    /// `count` remain. A domain holding no power yields its two endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        if count == 0 || min <= 0.0 || !max.is_finite() {
            return Vec::new();
        }

        let lo = (self.log_base(min) - 1e-9).ceil();
        let hi = (self.log_base(max) + 1e-9).floor();
        if lo > hi {
            return vec![min, max];
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "exponents of finite positive f64 values fit in i32"
        )]
        let (lo, hi) = (lo as i32, hi as i32);
        let powers = usize::try_from(hi - lo + 1).unwrap_or(0);
        let stride = powers.div_ceil(count).max(1);
        (lo..=hi)
            .step_by(stride)
            .map(|k| self.base.powi(k))
            .collect()
    }
}

/// Specification for a log scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLogSpec {
    /// Domain in data units (must be positive).
    pub domain: (f64, f64),
    /// Log base.
    pub base: f64,
}

impl ScaleLogSpec {
    /// Creates a new base-10 log scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            base: 10.0,
        }
    }

    /// Sets the log base. Invalid bases fall back to 10.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = valid_base(base);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLog {
        ScaleLog::new(self.domain, range).with_base(self.base)
    }
}

fn valid_base(base: f64) -> f64 {
    if base.is_finite() && base > 0.0 && base != 1.0 {
        base
    } else {
        10.0
    }
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 {
            0.0
        } else {
            (r1 - r0).abs() / denom
        }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the start position of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        r0.min(r1) + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center position of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

/// Specification for a band scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with default padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.count).with_padding(self.padding_inner, self.padding_outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_and_inverts_ranges() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        assert!((s.map(0.0) - 100.0).abs() < 1e-9);
        assert!((s.map(10.0) - 0.0).abs() < 1e-9);
        assert!((s.map(2.5) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn nice_domain_extends_to_round_ticks() {
        let spec = ScaleLinearSpec::new((0.13, 0.87)).with_nice(true);
        let (lo, hi) = spec.resolved_domain(5);
        assert!((lo - 0.1).abs() < 1e-9, "{lo}");
        assert!((hi - 0.9).abs() < 1e-9, "{hi}");
    }

    #[test]
    fn nice_step_rounds_to_1_2_5() {
        assert!((nice_step(0.13) - 0.1).abs() < 1e-12);
        assert!((nice_step(0.3) - 0.2).abs() < 1e-12);
        assert!((nice_step(4.0) - 5.0).abs() < 1e-12);
        assert!((nice_step(8.0) - 10.0).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 0.0);
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 5.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
        assert_eq!(s.map(-1.0), 0.0);
    }

    #[test]
    fn base_two_ticks_are_powers_of_two() {
        let s = ScaleLog::new((3.0, 70.0), (0.0, 1.0)).with_base(2.0);
        assert_eq!(s.ticks(10), [4.0, 8.0, 16.0, 32.0, 64.0]);
    }

    #[test]
    fn log_ticks_are_thinned_to_the_requested_count() {
        let s = ScaleLog::new((1.0, 2_f64.powi(20)), (0.0, 1.0)).with_base(2.0);
        let ticks = s.ticks(6);
        assert!(ticks.len() <= 6, "{ticks:?}");
        assert_eq!(ticks.first(), Some(&1.0));
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn invalid_log_base_falls_back_to_ten() {
        assert_eq!(ScaleLogSpec::new((1.0, 10.0)).with_base(1.0).base, 10.0);
        assert_eq!(ScaleLog::new((1.0, 10.0), (0.0, 1.0)).with_base(-2.0).base(), 10.0);
    }

    #[test]
    fn band_centers_are_evenly_spaced() {
        let s = ScaleBandSpec::new(3).with_padding(0.5, 0.25).instantiate((0.0, 100.0));
        let step = s.center(1) - s.center(0);
        assert!((s.center(2) - s.center(1) - step).abs() < 1e-9);
        assert!(s.x(0) > 0.0);
        assert!(s.x(2) + s.band_width() < 100.0);
    }
}
