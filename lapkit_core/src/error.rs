/// Contract violations detected while marshalling arguments.
///
/// These are programming errors of the caller, not runtime failures of the numerical routine.
/// A call that returns one of these has not touched the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation
{
    /// A raw code that is not a member of the selector family.
    BadFlag {
        /// Name of the selector family.
        family: &'static str,
        /// The rejected code.
        code: u8,
    },
    /// A selector that is valid in its family but not accepted by the routine.
    FlagNotApplicable {
        /// Name of the selector family.
        family: &'static str,
        /// Code of the selector.
        code: u8,
    },
    /// A dimension, stride or increment that does not fit the native integer.
    DimensionOverflow,
    /// Dimensions inconsistent with each other, e.g. more reflectors than rows.
    BadDimension,
    /// Leading dimension smaller than the matrix requires.
    BadStride,
    /// Slice shorter than the dimensions require.
    ShortSlice,
    /// Pivot slice too short or pivot index out of range.
    BadPivot,
    /// Zero vector increment.
    BadIncrement,
    /// Singular vectors requested to overwrite the input matrix.
    SvdOverwrite,
}

impl core::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            ContractViolation::BadFlag {family, code} =>
                write!(f, "BadFlag: illegal {} code {:?}", family, *code as char),
            ContractViolation::FlagNotApplicable {family, code} =>
                write!(f, "FlagNotApplicable: {} {:?} not accepted here", family, *code as char),
            ContractViolation::DimensionOverflow =>
                write!(f, "DimensionOverflow: dimension does not fit native integer"),
            ContractViolation::BadDimension =>
                write!(f, "BadDimension: inconsistent dimensions"),
            ContractViolation::BadStride =>
                write!(f, "BadStride: leading dimension too small"),
            ContractViolation::ShortSlice =>
                write!(f, "ShortSlice: insufficient slice length"),
            ContractViolation::BadPivot =>
                write!(f, "BadPivot: bad permutation length or index"),
            ContractViolation::BadIncrement =>
                write!(f, "BadIncrement: zero vector increment"),
            ContractViolation::SvdOverwrite =>
                write!(f, "SvdOverwrite: singular vectors cannot overwrite the input"),
        }
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for ContractViolation {}
