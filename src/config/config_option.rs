use crate::types::err::ConfigError;

/// A configuration option, with bounds on the values it may take.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || value > self.max {
            return Err(ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "probability",
            min: 0.0,
            max: 1.0,
            value: 0.5,
        };

        assert!(option.set(0.75).is_ok());
        assert_eq!(option.value, 0.75);

        assert_eq!(
            option.set(1.5),
            Err(ConfigError::OutOfBounds("probability"))
        );
        assert_eq!(option.value, 0.75);
        assert_eq!(option.min_max(), (0.0, 1.0));
    }
}
