/// Checks a native status code.
///
/// Returns `true` exactly when `info` is zero.
pub fn succeeded(info: i32) -> bool
{
    info == 0
}

/// Decoded native status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status
{
    /// `info == 0`.
    Success,
    /// `info == -k`: the `k`-th argument had an illegal value.
    IllegalArgument(usize),
    /// `info == k > 0`: the routine ran and failed, e.g. a singular or non-definite matrix.
    Failure(usize),
}

impl Status
{
    /// Decodes a native status code.
    pub fn from_info(info: i32) -> Status
    {
        if info == 0 {
            Status::Success
        }
        else if info < 0 {
            Status::IllegalArgument(info.unsigned_abs() as usize)
        }
        else {
            Status::Failure(info as usize)
        }
    }

    /// Returns `true` for [`Status::Success`].
    pub fn is_success(&self) -> bool
    {
        *self == Status::Success
    }
}

/// Interprets the status code returned from `routine`.
///
/// Returns the same as [`succeeded`].
/// An illegal argument reported by the native side means an argument slipped past
/// the checks in this crate, and is logged as an error.
pub fn interpret(routine: &str, info: i32) -> bool
{
    match Status::from_info(info) {
        Status::Success => {},
        Status::IllegalArgument(k) => {
            log::error!("{}: argument {} rejected by native library", routine, k);
        },
        Status::Failure(k) => {
            log::debug!("{}: failed with info {}", routine, k);
        },
    }

    succeeded(info)
}

//

#[test]
fn test_succeeded()
{
    assert!(succeeded(0));
    for info in [i32::MIN, -100, -1, 1, 2, 100, i32::MAX] {
        assert!(!succeeded(info));
    }
}

#[test]
fn test_status()
{
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(Status::from_info(0), Status::Success);
    assert_eq!(Status::from_info(-4), Status::IllegalArgument(4));
    assert_eq!(Status::from_info(3), Status::Failure(3));
    assert_eq!(Status::from_info(i32::MIN), Status::IllegalArgument(1 << 31));
    assert!(Status::from_info(0).is_success());
    assert!(!Status::from_info(1).is_success());

    for info in [-7, -1, 0, 1, 5] {
        assert_eq!(interpret("dgetrf", info), succeeded(info));
    }
}
