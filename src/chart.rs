//! One render pass: read the stored series, then present it.

use eyre::Result;

use crate::data_types::ChartConfig;
use crate::presentation::{DisplayModel, Presenter};
use crate::store::{load_series, SampleStore};

/// Stateless chart pipeline. Every call to [`IntradayChart::render`] recomputes
/// the display model from the store.
#[derive(Clone, Debug)]
pub struct IntradayChart {
    config: ChartConfig,
    presenter: Presenter,
}

impl Default for IntradayChart {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            presenter: Presenter::default(),
        }
    }
}

impl IntradayChart {
    pub fn new(config: ChartConfig) -> Result<Self> {
        let presenter = Presenter::from_config(&config)?;
        Ok(Self { config, presenter })
    }

    pub fn render(
        &self,
        store: &dyn SampleStore,
        code: &str,
        fallback_time: Option<&str>,
        fallback_pct: Option<f64>,
    ) -> DisplayModel {
        let series = load_series(store, code, self.config.max_points);
        self.presenter.present(&series, fallback_time, fallback_pct)
    }
}
