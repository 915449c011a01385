use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Meter,
}

impl LengthUnit {
    pub const fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AngleUnit {
    Radian,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub length: LengthUnit,
    pub angle: AngleUnit,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            length: LengthUnit::Millimeter,
            angle: AngleUnit::Radian,
        }
    }
}

impl Units {
    pub const fn metric_mm() -> Self {
        Self {
            length: LengthUnit::Millimeter,
            angle: AngleUnit::Radian,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tolerance {
    pub linear: f64,
    pub angular: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: 1.0e-6,
            angular: 1.0e-6,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
