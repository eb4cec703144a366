use lapkit_core::ContractViolation;

/// Driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError
{
    /// Arguments rejected before calling the native library.
    Contract(ContractViolation),
    /// The routine of the name, without its precision prefix, reported a failure,
    /// e.g. a singular or non-positive-definite matrix, or no convergence.
    Failed(&'static str),
    /// Reciprocal condition number estimate fell below [`crate::DriverParam::eps_rcond`].
    IllConditioned,
    /// Matrix sizes or layouts do not fit together.
    Shape,
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            DriverError::Contract(cv)   => write!(f, "Contract: {}", cv),
            DriverError::Failed(r)      => write!(f, "Failed: {} reported a failure", r),
            DriverError::IllConditioned => write!(f, "IllConditioned: reciprocal condition number too small"),
            DriverError::Shape          => write!(f, "Shape: matrix sizes or layouts mismatch"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Contract(cv) => Some(cv),
            _ => None,
        }
    }
}

impl From<ContractViolation> for DriverError {
    fn from(cv: ContractViolation) -> Self {
        DriverError::Contract(cv)
    }
}

//

#[test]
fn test_driver_error()
{
    let e: DriverError = ContractViolation::ShortSlice.into();
    assert_eq!(e, DriverError::Contract(ContractViolation::ShortSlice));
    assert!(std::error::Error::source(&e).is_some());
    assert_eq!(format!("{}", DriverError::Failed("potrf")), "Failed: potrf reported a failure");
}
