use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Missing parameters")]
    MissingParameters,
    #[error("Invalid numbers")]
    InvalidNumbers,
    #[error("Invalid operation")]
    InvalidOperation,
    #[error("Cannot divide by zero")]
    DivideByZero,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl TryFrom<&str> for Operation {
    type Error = CalcError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            _ => Err(CalcError::InvalidOperation),
        }
    }
}

impl Operation {
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide if rhs == 0.0 => Err(CalcError::DivideByZero),
            Operation::Divide => Ok(lhs / rhs),
        }
    }
}

// Raw form fields as posted by the calculator page. Absent fields are treated like empty ones.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct CalcRequest {
    #[serde(default)]
    pub num1: String,
    #[serde(default)]
    pub num2: String,
    #[serde(default)]
    pub operation: String,
}

pub fn calculate(request: &CalcRequest) -> Result<String, CalcError> {
    let CalcRequest {
        num1,
        num2,
        operation,
    } = request;
    if num1.is_empty() || num2.is_empty() || operation.is_empty() {
        return Err(CalcError::MissingParameters);
    }
    let (lhs, rhs) = match (num1.parse::<f64>(), num2.parse::<f64>()) {
        (Ok(lhs), Ok(rhs)) => (lhs, rhs),
        _ => return Err(CalcError::InvalidNumbers),
    };
    let result = Operation::try_from(operation.as_str())?.apply(lhs, rhs)?;
    Ok(format_result(result))
}

// Two decimals; overflow reads "+Inf"/"-Inf" and an undefined result "NaN"
fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{:.2}", value)
    }
}
