use crate::{ContractViolation, Layout};

/// Converts a dimension to the native integer.
pub fn to_int(v: usize) -> Result<i32, ContractViolation>
{
    i32::try_from(v).map_err(|_| ContractViolation::DimensionOverflow)
}

/// Checks that a slice holds at least `need` elements.
pub fn check_len(len: usize, need: usize) -> Result<(), ContractViolation>
{
    if len < need {
        Err(ContractViolation::ShortSlice)
    }
    else {
        Ok(())
    }
}

/// Length of slice that an `m`×`n` matrix with leading dimension `ld` occupies.
///
/// Returns `None` on arithmetic overflow.
pub fn matrix_len(layout: Layout, m: usize, n: usize, ld: usize) -> Option<usize>
{
    let (major, minor) = match layout {
        Layout::RowMajor => (m, n),
        Layout::ColumnMajor => (n, m),
    };

    if major == 0 || minor == 0 {
        Some(0)
    }
    else {
        (major - 1).checked_mul(ld)?.checked_add(minor)
    }
}

/// Checks a matrix argument.
///
/// * `layout` is the storage order.
/// * `m` and `n` are numbers of rows and columns.
/// * `len` is the length of the slice holding the matrix.
/// * `ld` is the leading dimension, which shall be at least `max(1, n)` for [`Layout::RowMajor`]
///   or `max(1, m)` for [`Layout::ColumnMajor`].
pub fn check_matrix(layout: Layout, m: usize, n: usize, len: usize, ld: usize) -> Result<(), ContractViolation>
{
    to_int(m)?;
    to_int(n)?;
    to_int(ld)?;

    let minor = match layout {
        Layout::RowMajor => n,
        Layout::ColumnMajor => m,
    };
    if ld < minor.max(1) {
        return Err(ContractViolation::BadStride);
    }

    let need = matrix_len(layout, m, n, ld).ok_or(ContractViolation::DimensionOverflow)?;
    check_len(len, need)
}

/// Checks a strided vector argument of `n` elements.
///
/// `inc` may be negative but not zero.
pub fn check_vector(n: usize, len: usize, inc: isize) -> Result<(), ContractViolation>
{
    to_int(n)?;

    if inc == 0 {
        return Err(ContractViolation::BadIncrement);
    }
    i32::try_from(inc).map_err(|_| ContractViolation::DimensionOverflow)?;

    if n > 0 {
        let need = (n - 1).checked_mul(inc.unsigned_abs())
            .and_then(|l| l.checked_add(1))
            .ok_or(ContractViolation::DimensionOverflow)?;
        check_len(len, need)
    }
    else {
        Ok(())
    }
}

//

#[test]
fn test_check_matrix()
{
    // 2x3 row-major, packed and padded
    assert_eq!(check_matrix(Layout::RowMajor, 2, 3, 6, 3), Ok(()));
    assert_eq!(check_matrix(Layout::RowMajor, 2, 3, 7, 4), Ok(()));
    assert_eq!(check_matrix(Layout::RowMajor, 2, 3, 6, 4), Err(ContractViolation::ShortSlice));
    assert_eq!(check_matrix(Layout::RowMajor, 2, 3, 6, 2), Err(ContractViolation::BadStride));

    // the same shape column-major
    assert_eq!(check_matrix(Layout::ColumnMajor, 2, 3, 6, 2), Ok(()));
    assert_eq!(check_matrix(Layout::ColumnMajor, 2, 3, 5, 2), Err(ContractViolation::ShortSlice));
    assert_eq!(check_matrix(Layout::ColumnMajor, 2, 3, 6, 1), Err(ContractViolation::BadStride));

    // empty matrices still need a positive stride
    assert_eq!(check_matrix(Layout::ColumnMajor, 0, 5, 0, 1), Ok(()));
    assert_eq!(check_matrix(Layout::RowMajor, 5, 0, 0, 0), Err(ContractViolation::BadStride));

    assert_eq!(
        check_matrix(Layout::RowMajor, 1 << 31, 1, 1 << 31, 1),
        Err(ContractViolation::DimensionOverflow)
    );
}

#[test]
fn test_check_vector()
{
    assert_eq!(check_vector(3, 3, 1), Ok(()));
    assert_eq!(check_vector(3, 5, 2), Ok(()));
    assert_eq!(check_vector(3, 5, -2), Ok(()));
    assert_eq!(check_vector(3, 4, 2), Err(ContractViolation::ShortSlice));
    assert_eq!(check_vector(3, 3, 0), Err(ContractViolation::BadIncrement));
    assert_eq!(check_vector(0, 0, 1), Ok(()));
    assert_eq!(to_int(usize::MAX), Err(ContractViolation::DimensionOverflow));
}
