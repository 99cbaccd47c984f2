use crate::Thermodynamics::DBhandlers::thermo_api::ThermoError;
use thiserror::Error;

/// kind of a [`ReactionError`] regardless of the context it was wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingData,
    InvalidArgument,
    Numerical,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReactionError {
    /// thermodynamic, kinetic or transition state value is absent or out of its valid range
    #[error("Missing data: {0}")]
    MissingData(String),
    /// unknown selector or malformed reaction
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// quadrature did not converge
    #[error("Numerical error: {0}")]
    Numerical(String),
    #[error("Reaction {reaction} at T = {temperature} K: {source}")]
    InReaction {
        reaction: String,
        temperature: f64,
        source: Box<ReactionError>,
    },
}

impl ReactionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReactionError::MissingData(_) => ErrorKind::MissingData,
            ReactionError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ReactionError::Numerical(_) => ErrorKind::Numerical,
            ReactionError::InReaction { source, .. } => source.kind(),
        }
    }
    /// attaches the reaction and temperature; an error that already has a context keeps it
    pub fn in_reaction(self, reaction: &str, temperature: f64) -> Self {
        match self {
            ReactionError::InReaction { .. } => self,
            other => ReactionError::InReaction {
                reaction: reaction.to_string(),
                temperature,
                source: Box::new(other),
            },
        }
    }
}

impl From<ThermoError> for ReactionError {
    fn from(e: ThermoError) -> Self {
        ReactionError::MissingData(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermo_error_is_missing_data() {
        let e: ReactionError = ThermoError::MissingModel("CH4".to_string()).into();
        assert_eq!(e.kind(), ErrorKind::MissingData);
        assert!(e.to_string().contains("CH4"));
    }

    #[test]
    fn test_context_is_attached_once() {
        let e = ReactionError::Numerical("no convergence".to_string())
            .in_reaction("A => B", 300.0)
            .in_reaction("C => D", 400.0);
        assert_eq!(e.kind(), ErrorKind::Numerical);
        match &e {
            ReactionError::InReaction {
                reaction,
                temperature,
                ..
            } => {
                assert_eq!(reaction, "A => B");
                assert_eq!(*temperature, 300.0);
            }
            _ => panic!("context expected"),
        }
        assert_eq!(
            e.to_string(),
            "Reaction A => B at T = 300 K: Numerical error: no convergence"
        );
    }
}
