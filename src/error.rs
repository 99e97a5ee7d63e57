use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropCastError {
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    InputDomain {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("No agricultural region matches location: {0}")]
    UnresolvedLocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CropCastError>;

/// Reject `value` unless it is finite and inside `[min, max]`.
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(CropCastError::InputDomain {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_accepts_bounds() {
        assert!(check_range("humidity_pct", 0.0, 0.0, 100.0).is_ok());
        assert!(check_range("humidity_pct", 100.0, 0.0, 100.0).is_ok());
    }

    #[test]
    fn check_range_rejects_out_of_range_and_nan() {
        let err = check_range("ph", 14.5, 0.0, 14.0).unwrap_err();
        assert!(matches!(err, CropCastError::InputDomain { field: "ph", .. }));
        assert!(err.to_string().contains("ph = 14.5"));

        assert!(check_range("ph", f64::NAN, 0.0, 14.0).is_err());
        assert!(check_range("ph", f64::INFINITY, 0.0, f64::MAX).is_err());
    }
}
