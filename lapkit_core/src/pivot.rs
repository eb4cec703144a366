//! Pivot index conversion.
//!
//! Pivots are zero-based `usize` on this side of the boundary:
//! `ipiv[i] == j` means row `i` was interchanged with row `j`.
//! The native library uses one-based `i32`.

use crate::ContractViolation;

/// Converts zero-based pivots to native pivots.
///
/// * `src` are zero-based pivots, each of which shall be less than `bound`.
/// * `dst` receives one-based pivots; it shall be at least as long as `src`.
pub fn to_native(src: &[usize], bound: usize, dst: &mut[i32]) -> Result<(), ContractViolation>
{
    if dst.len() < src.len() {
        return Err(ContractViolation::BadPivot);
    }

    for (d, s) in dst.iter_mut().zip(src) {
        if *s >= bound {
            return Err(ContractViolation::BadPivot);
        }
        *d = i32::try_from(*s + 1).map_err(|_| ContractViolation::BadPivot)?;
    }

    Ok(())
}

/// Converts native pivots to zero-based pivots.
///
/// * `src` are one-based pivots written by the native library.
/// * `dst` receives zero-based pivots; it shall be at least as long as `src`.
pub fn from_native(src: &[i32], dst: &mut[usize]) -> Result<(), ContractViolation>
{
    if dst.len() < src.len() {
        return Err(ContractViolation::BadPivot);
    }

    for (d, s) in dst.iter_mut().zip(src) {
        *d = (*s).max(1) as usize - 1;
    }

    Ok(())
}

//

#[test]
fn test_pivot()
{
    let ipiv = [2, 2, 3, 3];
    let native = &mut[0; 4];
    to_native(&ipiv, 4, native).unwrap();
    assert_eq!(native, &[3, 3, 4, 4]);

    let back = &mut[0; 4];
    from_native(native, back).unwrap();
    assert_eq!(back, &ipiv);

    assert_eq!(to_native(&ipiv, 3, native), Err(ContractViolation::BadPivot));
    assert_eq!(to_native(&ipiv, 4, &mut[0; 3]), Err(ContractViolation::BadPivot));
    assert_eq!(from_native(native, &mut[0; 2]), Err(ContractViolation::BadPivot));
}
