//! Data models for staffing forecast inputs and results

/// Passengers assumed when no volume is given
pub const DEFAULT_PASSENGER_VOLUME: f64 = 50_000.0;
/// Flights assumed when no schedule is given
pub const DEFAULT_FLIGHT_SCHEDULE: f64 = 500.0;
/// Labor efficiency improvement (%) assumed by default
pub const DEFAULT_LABOR_EFFICIENCY: f64 = 10.0;

/// Validated base inputs to the forecast calculator.
///
/// Build through [`crate::validation::validate_inputs`] so the documented
/// ranges hold; the calculator itself accepts anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastInputs {
    pub passenger_volume: f64,
    pub flight_schedule: f64,
    pub labor_efficiency: f64, // percent, 0..=50
}

impl Default for ForecastInputs {
    fn default() -> Self {
        Self {
            passenger_volume: DEFAULT_PASSENGER_VOLUME,
            flight_schedule: DEFAULT_FLIGHT_SCHEDULE,
            labor_efficiency: DEFAULT_LABOR_EFFICIENCY,
        }
    }
}

/// Percentage perturbation of passenger volume, -20..=20
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenarioFactor(pub(crate) f64);

impl ScenarioFactor {
    pub fn percent(self) -> f64 {
        self.0
    }
}

/// Staff actually on the roster, never negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActualStaffing(pub(crate) f64);

impl ActualStaffing {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Outcome of comparing actual staffing against the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffingStatus {
    Overstaffed,
    Understaffed,
    Optimal,
}

impl StaffingStatus {
    /// Message shown under the variance figure
    pub fn message(self) -> &'static str {
        match self {
            StaffingStatus::Overstaffed => "Overstaffed.",
            StaffingStatus::Understaffed => "Understaffed.",
            StaffingStatus::Optimal => "Optimal staffing level achieved.",
        }
    }
}

impl std::fmt::Display for StaffingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StaffingStatus::Overstaffed => "overstaffed",
            StaffingStatus::Understaffed => "understaffed",
            StaffingStatus::Optimal => "optimal",
        };
        f.write_str(label)
    }
}

/// Actual minus forecasted staffing, with its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variance {
    pub value: f64, // positive = more staff than forecast
    pub status: StaffingStatus,
}
