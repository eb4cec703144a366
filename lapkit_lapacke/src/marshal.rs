use lapkit_core::{ContractViolation, Layout, Uplo, Transpose, Side, Diag};

/// Logs a rejected contract before it is returned to the caller.
pub(crate) fn checked<T>(routine: &str, r: Result<T, ContractViolation>) -> Result<T, ContractViolation>
{
    if let Err(e) = &r {
        log::error!("{}: {}", routine, e);
    }
    r
}

pub(crate) fn lapacke_layout(layout: Layout) -> lapacke::Layout
{
    match layout {
        Layout::RowMajor => lapacke::Layout::RowMajor,
        Layout::ColumnMajor => lapacke::Layout::ColumnMajor,
    }
}

pub(crate) fn cblas_layout(layout: Layout) -> cblas::Layout
{
    match layout {
        Layout::RowMajor => cblas::Layout::RowMajor,
        Layout::ColumnMajor => cblas::Layout::ColumnMajor,
    }
}

pub(crate) fn cblas_trans(trans: Transpose) -> cblas::Transpose
{
    match trans {
        Transpose::NoTrans => cblas::Transpose::None,
        Transpose::Trans => cblas::Transpose::Ordinary,
        Transpose::ConjTrans => cblas::Transpose::Conjugate,
    }
}

pub(crate) fn cblas_part(uplo: Uplo) -> cblas::Part
{
    match uplo {
        Uplo::Upper => cblas::Part::Upper,
        Uplo::Lower => cblas::Part::Lower,
    }
}

pub(crate) fn cblas_side(side: Side) -> cblas::Side
{
    match side {
        Side::Left => cblas::Side::Left,
        Side::Right => cblas::Side::Right,
    }
}

pub(crate) fn cblas_diag(diag: Diag) -> cblas::Diagonal
{
    match diag {
        Diag::Unit => cblas::Diagonal::Unit,
        Diag::NonUnit => cblas::Diagonal::Generic,
    }
}

//

#[test]
fn test_marshal_cblas()
{
    // CBLAS enumeration values
    assert_eq!(cblas_layout(Layout::RowMajor) as i32, Layout::RowMajor.code());
    assert_eq!(cblas_layout(Layout::ColumnMajor) as i32, Layout::ColumnMajor.code());
    assert_eq!(cblas_trans(Transpose::NoTrans) as i32, 111);
    assert_eq!(cblas_trans(Transpose::Trans) as i32, 112);
    assert_eq!(cblas_trans(Transpose::ConjTrans) as i32, 113);
    assert_eq!(cblas_part(Uplo::Upper) as i32, 121);
    assert_eq!(cblas_part(Uplo::Lower) as i32, 122);
    assert_eq!(cblas_diag(Diag::NonUnit) as i32, 131);
    assert_eq!(cblas_diag(Diag::Unit) as i32, 132);
    assert_eq!(cblas_side(Side::Left) as i32, 141);
    assert_eq!(cblas_side(Side::Right) as i32, 142);
}

#[test]
fn test_marshal_lapacke()
{
    assert_eq!(lapacke_layout(Layout::RowMajor) as i32, Layout::RowMajor.code());
    assert_eq!(lapacke_layout(Layout::ColumnMajor) as i32, Layout::ColumnMajor.code());
}

#[test]
fn test_checked()
{
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(checked("dgetrf", Ok(3)), Ok(3));
    assert_eq!(
        checked::<()>("dgetrf", Err(ContractViolation::BadStride)),
        Err(ContractViolation::BadStride)
    );
}
