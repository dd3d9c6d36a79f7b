//! One evaluation pass over the current inputs, and its rendering

use tracing::debug;

use crate::calculator;
use crate::models::{ActualStaffing, ForecastInputs, ScenarioFactor, Variance};

/// Everything shown to the planner after an input change
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub inputs: ForecastInputs,
    pub forecast: f64,
    pub actual_staffing: f64,
    pub variance: Variance,
    pub scenario_factor: ScenarioFactor,
    pub scenario_forecast: f64,
}

impl Dashboard {
    /// Recompute every derived value from scratch.
    ///
    /// When no actual staffing is supplied, the forecast truncated to whole
    /// employees stands in for it.
    pub fn evaluate(
        inputs: ForecastInputs,
        actual: Option<ActualStaffing>,
        scenario_factor: ScenarioFactor,
    ) -> Self {
        let forecast = calculator::forecast(&inputs);
        let actual_staffing = actual.map_or_else(|| forecast.trunc(), ActualStaffing::value);
        let variance = calculator::compute_variance(actual_staffing, forecast);
        let scenario_forecast = calculator::scenario_forecast(&inputs, scenario_factor);

        debug!(
            forecast,
            actual_staffing,
            variance = variance.value,
            status = %variance.status,
            scenario_forecast,
            "evaluated staffing forecast"
        );

        Self {
            inputs,
            forecast,
            actual_staffing,
            variance,
            scenario_factor,
            scenario_forecast,
        }
    }

    /// The six metrics of the summary report, in display order
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Passenger Volume", format!("{}", self.inputs.passenger_volume)),
            ("Flight Schedule", format!("{}", self.inputs.flight_schedule)),
            ("Labor Efficiency", format!("{}%", self.inputs.labor_efficiency)),
            ("Recommended Staffing", format!("{:.2}", self.forecast)),
            ("Actual Staffing", format!("{}", self.actual_staffing)),
            ("Variance", format!("{:.2}", self.variance.value)),
        ]
    }
}

impl std::fmt::Display for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Forecasted Staffing Levels ===")?;
        writeln!(f, "Recommended staffing level: {:.2} employees", self.forecast)?;
        writeln!(f)?;

        writeln!(f, "=== Variance Analysis ===")?;
        writeln!(f, "Actual staffing: {}", self.actual_staffing)?;
        writeln!(f, "Variance: {:.2} employees", self.variance.value)?;
        writeln!(f, "{}", self.variance.status.message())?;
        writeln!(f)?;

        writeln!(f, "=== Scenario Analysis ===")?;
        writeln!(f, "Scenario factor: {}%", self.scenario_factor.percent())?;
        writeln!(
            f,
            "Adjusted staffing recommendation under scenario: {:.2} employees",
            self.scenario_forecast
        )?;
        writeln!(f)?;

        writeln!(f, "=== Summary Report ===")?;
        writeln!(f, "{:<22} {:>14}", "Metric", "Value")?;
        writeln!(f, "{}", "-".repeat(37))?;
        for (metric, value) in self.summary_rows() {
            writeln!(f, "{:<22} {:>14}", metric, value)?;
        }

        Ok(())
    }
}
