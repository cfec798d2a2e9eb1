//! Conversions between [`Outcome`] and [`Result`].

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Converts the outcome into a [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the error payload of a failed outcome.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Takes the success payload, discarding any error.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Succeeded(data) => Some(data),
            Self::Failed(_) => None,
        }
    }

    /// Takes the error payload, discarding any data.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Succeeded(data),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Succeeded(data) => Ok(data),
            Outcome::Failed(error) => Err(error),
        }
    }
}
