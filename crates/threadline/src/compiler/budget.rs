use crate::errors::ConfigurationError;

/// How many of the most recent turns a compiled request may carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Budget(usize);

impl Budget {
    pub const fn new(turns: usize) -> Self {
        Budget(turns)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Budget {
    fn from(turns: usize) -> Self {
        Budget(turns)
    }
}

impl TryFrom<i64> for Budget {
    type Error = ConfigurationError;

    fn try_from(turns: i64) -> Result<Self, Self::Error> {
        if turns < 0 {
            return Err(ConfigurationError::NegativeBudget(turns));
        }
        Ok(Budget(usize::try_from(turns).unwrap_or(usize::MAX)))
    }
}

/// Fractional budgets are truncated toward zero.
impl TryFrom<f64> for Budget {
    type Error = ConfigurationError;

    fn try_from(turns: f64) -> Result<Self, Self::Error> {
        if !turns.is_finite() {
            return Err(ConfigurationError::NonFiniteBudget);
        }
        if turns < 0.0 {
            return Err(ConfigurationError::NegativeFractionalBudget(turns));
        }
        Ok(Budget(turns.trunc() as usize))
    }
}
