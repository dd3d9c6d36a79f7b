//! Staffing forecast calculator logic
//!
//! Everything here is pure and total: no validation, no errors. Inputs are
//! expected to be range-checked by the caller beforehand.

use crate::models::{ForecastInputs, ScenarioFactor, StaffingStatus, Variance};

/// Share of passengers that translates into staff demand
pub const STAFF_PER_PASSENGER: f64 = 0.05;
/// Fixed crew requirement per scheduled flight
pub const STAFF_PER_FLIGHT: f64 = 2.0;
/// Decimal places kept in every forecast
pub const FORECAST_DECIMALS: i32 = 2;

/// Raw staffing demand before any efficiency adjustment
pub fn base_staffing(passenger_volume: f64, flight_schedule: f64) -> f64 {
    passenger_volume * STAFF_PER_PASSENGER + flight_schedule * STAFF_PER_FLIGHT
}

/// Reduce raw demand by an efficiency improvement given in percent
pub fn apply_efficiency(base: f64, labor_efficiency: f64) -> f64 {
    base * (1.0 - labor_efficiency / 100.0)
}

/// Round to `decimals` places, ties away from zero
///
/// Values too large to scale without overflowing carry no fractional part and
/// come back unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Forecast the staffing level for a planning period
///
/// Never fails: negative or out-of-range arguments produce a number, just not
/// a meaningful one.
pub fn generate_forecast(
    passenger_volume: f64,
    flight_schedule: f64,
    labor_efficiency: f64,
) -> f64 {
    let base = base_staffing(passenger_volume, flight_schedule);
    let adjusted = apply_efficiency(base, labor_efficiency);
    round_to(adjusted, FORECAST_DECIMALS)
}

/// Forecast for a full set of validated inputs
pub fn forecast(inputs: &ForecastInputs) -> f64 {
    generate_forecast(
        inputs.passenger_volume,
        inputs.flight_schedule,
        inputs.labor_efficiency,
    )
}

/// Passenger volume after applying a scenario percentage
pub fn scaled_volume(passenger_volume: f64, scenario_factor: f64) -> f64 {
    passenger_volume * (1.0 + scenario_factor / 100.0)
}

/// Re-run the forecast with passenger volume perturbed by the scenario factor
pub fn scenario_forecast(inputs: &ForecastInputs, scenario: ScenarioFactor) -> f64 {
    generate_forecast(
        scaled_volume(inputs.passenger_volume, scenario.percent()),
        inputs.flight_schedule,
        inputs.labor_efficiency,
    )
}

pub fn classify_variance(variance: f64) -> StaffingStatus {
    if variance > 0.0 {
        StaffingStatus::Overstaffed
    } else if variance < 0.0 {
        StaffingStatus::Understaffed
    } else {
        StaffingStatus::Optimal
    }
}

/// Compare actual staffing with a forecast
pub fn compute_variance(actual: f64, forecast: f64) -> Variance {
    let value = actual - forecast;
    Variance {
        value,
        status: classify_variance(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn defaults() -> ForecastInputs {
        ForecastInputs::default()
    }

    #[test]
    fn default_inputs_forecast() {
        // (50000 * 0.05 + 500 * 2) * 0.9 = 3150
        assert_eq!(generate_forecast(50_000.0, 500.0, 10.0), 3150.0);
        assert_eq!(forecast(&defaults()), 3150.0);
    }

    #[test]
    fn zero_efficiency_keeps_base() {
        let base = base_staffing(12_345.0, 77.0);
        assert_eq!(apply_efficiency(base, 0.0), base);
    }

    #[test]
    fn half_efficiency_halves_base() {
        let base = base_staffing(40_000.0, 300.0);
        assert_eq!(apply_efficiency(base, 50.0), base * 0.5);
        assert_eq!(generate_forecast(40_000.0, 300.0, 50.0), 1300.0);
    }

    #[test]
    fn forecast_is_rounded_to_cents() {
        // 1234 * 0.05 + 3 * 2 = 67.7, * 0.97 = 65.669
        assert_eq!(generate_forecast(1234.0, 3.0, 3.0), 65.67);
    }

    #[test]
    fn rounding_ties_go_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(3150.0, 2), 3150.0);
    }

    #[test]
    fn rounding_huge_values_stays_finite() {
        assert_eq!(round_to(5e306, 2), 5e306);
        assert_eq!(round_to(-f64::MAX, 2), -f64::MAX);
        assert_eq!(generate_forecast(1e308, 0.0, 0.0), 1e308 * STAFF_PER_PASSENGER);
        assert!(generate_forecast(1e308, 0.0, 0.0).is_finite());
    }

    #[test]
    fn zero_scenario_is_noop() {
        let inputs = defaults();
        assert_eq!(
            scenario_forecast(&inputs, ScenarioFactor(0.0)),
            forecast(&inputs)
        );
    }

    #[test]
    fn negative_scenario_shrinks_volume() {
        assert_eq!(scaled_volume(50_000.0, -10.0), 45_000.0);
        // (2250 + 1000) * 0.9 = 2925
        assert_eq!(scenario_forecast(&defaults(), ScenarioFactor(-10.0)), 2925.0);
    }

    #[test]
    fn positive_scenario_grows_volume() {
        // (2750 + 1000) * 0.9 = 3375
        assert_eq!(scenario_forecast(&defaults(), ScenarioFactor(10.0)), 3375.0);
    }

    #[test]
    fn variance_classification() {
        let f = forecast(&defaults());
        assert_eq!(compute_variance(f, f).status, StaffingStatus::Optimal);
        assert_eq!(compute_variance(f + 1.0, f).status, StaffingStatus::Overstaffed);
        assert_eq!(compute_variance(f - 1.0, f).status, StaffingStatus::Understaffed);
        assert_eq!(compute_variance(f - 1.0, f).value, -1.0);
    }

    #[test]
    fn negative_inputs_still_produce_a_number() {
        let f = generate_forecast(-1000.0, 0.0, 0.0);
        assert_eq!(f, -50.0);
        assert_eq!(generate_forecast(1000.0, 0.0, 200.0), -50.0);
    }

    proptest! {
        #[test]
        fn non_decreasing_in_passengers(
            v in 0.0f64..1_000_000.0,
            dv in 0.0f64..100_000.0,
            f in 0.0f64..10_000.0,
            e in 0.0f64..=50.0,
        ) {
            prop_assert!(generate_forecast(v + dv, f, e) >= generate_forecast(v, f, e));
        }

        #[test]
        fn non_decreasing_in_flights(
            v in 0.0f64..1_000_000.0,
            f in 0.0f64..10_000.0,
            df in 0.0f64..1_000.0,
            e in 0.0f64..=50.0,
        ) {
            prop_assert!(generate_forecast(v, f + df, e) >= generate_forecast(v, f, e));
        }

        #[test]
        fn non_increasing_in_efficiency(
            v in 0.0f64..1_000_000.0,
            f in 0.0f64..10_000.0,
            e in 0.0f64..=50.0,
            de in 0.0f64..=50.0,
        ) {
            let higher = (e + de).min(50.0);
            prop_assert!(generate_forecast(v, f, higher) <= generate_forecast(v, f, e));
        }
    }
}
