use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear data -> logical canvas scale.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    range: (f64, f64),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let inner = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0, range.1);
        Self { inner, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let res = self.inner.scale(value);
        if res.is_finite() {
            res
        } else {
            self.range.0
        }
    }
}
