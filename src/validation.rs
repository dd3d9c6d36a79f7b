//! Range checks applied to user input before it reaches the calculator

use thiserror::Error;

use crate::models::{ActualStaffing, ForecastInputs, ScenarioFactor};

pub const MAX_LABOR_EFFICIENCY: f64 = 50.0;
pub const MIN_SCENARIO_FACTOR: f64 = -20.0;
pub const MAX_SCENARIO_FACTOR: f64 = 20.0;

/// An input the presentation layer refuses to pass on
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, InputError>;

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    // fold -0.0 into +0.0
    Ok(value + 0.0)
}

fn bounded(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

pub fn passenger_volume(value: f64) -> Result<f64> {
    non_negative("Passenger Volume", value)
}

pub fn flight_schedule(value: f64) -> Result<f64> {
    non_negative("Flight Schedule", value)
}

pub fn labor_efficiency(value: f64) -> Result<f64> {
    bounded("Labor Efficiency", value, 0.0, MAX_LABOR_EFFICIENCY)
}

pub fn actual_staffing(value: f64) -> Result<ActualStaffing> {
    non_negative("Actual Staffing", value).map(ActualStaffing)
}

pub fn scenario_factor(value: f64) -> Result<ScenarioFactor> {
    bounded(
        "Scenario Factor",
        value,
        MIN_SCENARIO_FACTOR,
        MAX_SCENARIO_FACTOR,
    )
    .map(ScenarioFactor)
}

/// Validate the three base inputs together
pub fn validate_inputs(
    passengers: f64,
    flights: f64,
    efficiency: f64,
) -> Result<ForecastInputs> {
    Ok(ForecastInputs {
        passenger_volume: passenger_volume(passengers)?,
        flight_schedule: flight_schedule(flights)?,
        labor_efficiency: labor_efficiency(efficiency)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_defaults() {
        let inputs = validate_inputs(50_000.0, 500.0, 10.0).unwrap();
        assert_eq!(inputs, ForecastInputs::default());
    }

    #[test]
    fn accepts_boundaries() {
        assert!(validate_inputs(0.0, 0.0, 0.0).is_ok());
        assert!(validate_inputs(0.0, 0.0, 50.0).is_ok());
        assert_eq!(scenario_factor(-20.0).unwrap().percent(), -20.0);
        assert_eq!(scenario_factor(20.0).unwrap().percent(), 20.0);
        assert_eq!(actual_staffing(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn rejects_negative_volume() {
        assert_eq!(
            passenger_volume(-1.0),
            Err(InputError::Negative {
                field: "Passenger Volume",
                value: -1.0
            })
        );
        assert!(matches!(
            validate_inputs(100.0, -5.0, 10.0),
            Err(InputError::Negative { field: "Flight Schedule", .. })
        ));
        assert!(actual_staffing(-0.5).is_err());
    }

    #[test]
    fn negative_zero_is_normalised() {
        assert!(actual_staffing(-0.0).unwrap().value().is_sign_positive());
        assert!(passenger_volume(-0.0).unwrap().is_sign_positive());
        assert!(flight_schedule(-0.0).unwrap().is_sign_positive());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            labor_efficiency(50.5),
            Err(InputError::OutOfRange { max, .. }) if max == 50.0
        ));
        assert!(labor_efficiency(-1.0).is_err());
        assert!(scenario_factor(-20.01).is_err());
        assert!(scenario_factor(21.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            passenger_volume(f64::NAN),
            Err(InputError::NotFinite {
                field: "Passenger Volume"
            })
        );
        assert!(flight_schedule(f64::INFINITY).is_err());
        assert!(scenario_factor(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = labor_efficiency(75.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Labor Efficiency must be between 0 and 50 (got 75)"
        );
    }
}
