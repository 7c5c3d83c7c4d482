//! Band and linear scales.
//!
//! The band scale places ordinal categories along an axis span with
//! configurable inner and outer padding; the linear scale maps a numeric
//! domain to a pixel range with "nice" rounding and 1-2-5 ticks.

/// Ordinal band scale over a pixel span.
///
/// Given `n` categories, inner padding `pi` and outer padding `po` (both as
/// fractions of the bandwidth), the span is divided as
/// `bandwidth = span / (n + pi*(n-1) + 2*po)`, with `step = bandwidth*(1+pi)`.
#[derive(Clone, Debug)]
pub struct BandScale {
    start: f64,
    bandwidth: f64,
    step: f64,
    padding_outer: f64,
    len: usize,
}

impl BandScale {
    pub fn new(len: usize, start: f64, end: f64, padding_inner: f64, padding_outer: f64) -> Self {
        let span = end - start;
        let divisor = len as f64 + padding_inner * (len.saturating_sub(1)) as f64 + 2.0 * padding_outer;
        let bandwidth = if len == 0 || divisor <= 0.0 {
            0.0
        } else {
            span / divisor
        };
        Self {
            start,
            bandwidth,
            step: bandwidth * (1.0 + padding_inner),
            padding_outer,
            len,
        }
    }

    /// Left edge of band `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.padding_outer * self.bandwidth + index as f64 * self.step
    }

    /// Horizontal (or vertical) center of band `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.bandwidth / 2.0
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Continuous linear scale mapping `[d0, d1]` onto `[r0, r1]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        Self { d0, d1, r0, r1 }
    }

    /// Map a domain value to the range. A degenerate domain maps everything
    /// to the range start.
    pub fn scale(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            return self.r0;
        }
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn domain_max(&self) -> f64 {
        self.d1
    }

    /// Extend the domain outward to tick-aligned bounds for roughly `count`
    /// ticks.
    pub fn nice(mut self, count: usize) -> Self {
        if self.d1 == self.d0 {
            return self;
        }
        let step = tick_step(self.d0, self.d1, count);
        if step > 0.0 {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    /// Tick values at a 1-2-5 step, inclusive of both domain ends when they
    /// land on the step grid.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.d1 == self.d0 || count == 0 {
            return vec![self.d0];
        }
        let step = tick_step(self.d0, self.d1, count);
        if step <= 0.0 {
            return vec![self.d0];
        }
        let first = (self.d0 / step).ceil();
        let last = (self.d1 / step).floor();
        let mut ticks = Vec::new();
        let mut i = first;
        while i <= last {
            ticks.push(i * step);
            i += 1.0;
        }
        ticks
    }
}

/// Tick spacing snapped to 1, 2 or 5 times a power of ten.
fn tick_step(d0: f64, d1: f64, count: usize) -> f64 {
    let raw = (d1 - d0).abs() / count.max(1) as f64;
    if raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_scale_divides_span() {
        // 5 bands, padding_inner 0.18, no outer padding:
        // bandwidth = 400 / (5 + 0.18 * 4)
        let scale = BandScale::new(5, 0.0, 400.0, 0.18, 0.0);
        let expected = 400.0 / (5.0 + 0.18 * 4.0);
        assert!((scale.bandwidth() - expected).abs() < 1e-9);
        assert!((scale.position(0) - 0.0).abs() < 1e-9);
        assert!((scale.position(1) - expected * 1.18).abs() < 1e-9);
        // Last band's right edge lands on the span end.
        assert!((scale.position(4) + scale.bandwidth() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_scale_outer_padding_insets_first_band() {
        let scale = BandScale::new(2, 0.0, 100.0, 0.0, 0.5);
        // bandwidth = 100 / (2 + 0 + 1) and first band starts half a band in.
        assert!((scale.bandwidth() - 100.0 / 3.0).abs() < 1e-9);
        assert!((scale.position(0) - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_scale_empty() {
        let scale = BandScale::new(0, 0.0, 100.0, 0.18, 0.0);
        assert_eq!(scale.bandwidth(), 0.0);
        assert!(scale.is_empty());
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // Value axes run top-down in screen space.
        let scale = LinearScale::new(0.0, 10.0, 500.0, 0.0);
        assert_eq!(scale.scale(0.0), 500.0);
        assert_eq!(scale.scale(10.0), 0.0);
        assert_eq!(scale.scale(5.0), 250.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new(3.0, 3.0, 0.0, 100.0);
        assert_eq!(scale.scale(3.0), 0.0);
        assert_eq!(scale.ticks(6), vec![3.0]);
    }

    #[test]
    fn test_nice_rounds_domain_outward() {
        let scale = LinearScale::new(0.0, 87.0, 0.0, 1.0).nice(6);
        assert_eq!(scale.domain_max(), 90.0);
    }

    #[test]
    fn test_ticks_use_one_two_five_steps() {
        let ticks = LinearScale::new(0.0, 100.0, 0.0, 1.0).ticks(6);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let ticks = LinearScale::new(0.0, 7.0, 0.0, 1.0).ticks(6);
        assert_eq!(ticks, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
