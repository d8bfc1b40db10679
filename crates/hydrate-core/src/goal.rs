//! Personalized daily-goal calculator used by the onboarding flow.
//!
//! Pure function from body weight and activity level to a recommended
//! daily intake in milliliters; the result feeds
//! [`HydrationLedger::set_daily_goal`](crate::ledger::HydrationLedger::set_daily_goal).

use std::fmt;
use std::str::FromStr;

use crate::error::{HydrateError, Result};

const LBS_PER_KG: f64 = 2.20462;
const ML_PER_FL_OZ: f64 = 29.5735;

/// Base recommendation: two thirds of body weight in pounds, as fluid ounces.
const BASE_FL_OZ_PER_LB: f64 = 2.0 / 3.0;

/// How active the user is day to day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 times/week
    Light,
    /// Exercise 3-5 times/week
    Moderate,
    /// Exercise 6-7 times/week
    Active,
    /// Heavy exercise or a physically demanding job
    VeryActive,
}

impl ActivityLevel {
    /// All levels, in ascending order of activity.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Additional fluid ounces recommended per day for this level.
    pub fn bonus_fl_oz(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 0.0,
            ActivityLevel::Light => 12.0,
            ActivityLevel::Moderate => 24.0,
            ActivityLevel::Active => 36.0,
            ActivityLevel::VeryActive => 48.0,
        }
    }

    /// Short human-readable description, for prompts and help text.
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little or no exercise",
            ActivityLevel::Light => "exercise 1-3 times/week",
            ActivityLevel::Moderate => "exercise 3-5 times/week",
            ActivityLevel::Active => "exercise 6-7 times/week",
            ActivityLevel::VeryActive => "heavy exercise or physical job",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ActivityLevel {
    type Err = HydrateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" | "very_active" | "veryactive" => Ok(ActivityLevel::VeryActive),
            other => Err(HydrateError::InvalidInput(format!(
                "Unknown activity level: {} (use sedentary/light/moderate/active/very-active)",
                other
            ))),
        }
    }
}

/// Unit the user entered their body weight in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lbs => write!(f, "lbs"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = HydrateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kg),
            "lb" | "lbs" => Ok(WeightUnit::Lbs),
            other => Err(HydrateError::InvalidInput(format!(
                "Unknown weight unit: {} (use kg or lbs)",
                other
            ))),
        }
    }
}

/// Recommended daily intake in milliliters for the given weight and
/// activity level.
///
/// # Errors
///
/// Returns `HydrateError::InvalidInput` when `weight` is non-positive or
/// not finite.
pub fn recommended_goal_ml(weight: f64, unit: WeightUnit, activity: ActivityLevel) -> Result<u32> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(HydrateError::InvalidInput(format!(
            "Weight must be a positive number, got {}",
            weight
        )));
    }

    let weight_lbs = match unit {
        WeightUnit::Kg => weight * LBS_PER_KG,
        WeightUnit::Lbs => weight,
    };

    let fl_oz = weight_lbs * BASE_FL_OZ_PER_LB + activity.bonus_fl_oz();
    Ok((fl_oz * ML_PER_FL_OZ).round() as u32)
}
