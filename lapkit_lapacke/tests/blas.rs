use float_eq::assert_float_eq;
use lapkit_core::*;
use lapkit_lapacke::F64LAPACK;

use intel_mkl_src as _;

type La = F64LAPACK;

//

#[test]
fn test_gemv()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[
        1., 2.,
        3., 4.,
    ];

    let y = &mut[1., 1.];
    La::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 2., a, 2, &[1., 1.], 1, 1., y, 1).unwrap();
    assert_float_eq!(*y, [7., 15.], abs_all <= 1e-12);

    let y = &mut[0., 0.];
    La::gemv(Layout::RowMajor, Transpose::Trans, 2, 2, 1., a, 2, &[1., 1.], 1, 0., y, 1).unwrap();
    assert_float_eq!(*y, [4., 6.], abs_all <= 1e-12);

    // strided x
    let y = &mut[0., 0.];
    La::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1., a, 2, &[1., 99., 1.], 2, 0., y, 1).unwrap();
    assert_float_eq!(*y, [3., 7.], abs_all <= 1e-12);

    // negative increment walks x backwards
    let y = &mut[0., 0.];
    La::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1., a, 2, &[1., 2.], -1, 0., y, 1).unwrap();
    assert_float_eq!(*y, [4., 10.], abs_all <= 1e-12);
}

#[test]
fn test_gemm()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[
        1., 2., 3.,
        4., 5., 6.,
    ];
    let b = &[
        1., 0.,
        0., 1.,
        1., 1.,
    ];
    let c = &mut[
        1., 1.,
        1., 1.,
    ];
    La::gemm(Layout::RowMajor, Transpose::NoTrans, Transpose::NoTrans, 2, 2, 3, 1., a, 3, b, 2, 1., c, 2).unwrap();
    assert_float_eq!(*c, [5., 6., 11., 12.], abs_all <= 1e-12);

    let at = &[
        1., 4.,
        2., 5.,
        3., 6.,
    ];
    let c = &mut[0.; 4];
    La::gemm(Layout::RowMajor, Transpose::Trans, Transpose::NoTrans, 2, 2, 3, 1., at, 2, b, 2, 0., c, 2).unwrap();
    assert_float_eq!(*c, [4., 5., 10., 11.], abs_all <= 1e-12);

    // same product in column-major storage
    let a_cm = &[1., 4., 2., 5., 3., 6.];
    let b_cm = &[1., 0., 1., 0., 1., 1.];
    let c = &mut[0.; 4];
    La::gemm(Layout::ColumnMajor, Transpose::NoTrans, Transpose::NoTrans, 2, 2, 3, 1., a_cm, 2, b_cm, 3, 0., c, 2).unwrap();
    assert_float_eq!(*c, [4., 10., 5., 11.], abs_all <= 1e-12);
}

#[test]
fn test_symm_syrk()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // lower triangle is not referenced
    let a = &[
        2., 1.,
        99., 3.,
    ];
    let b = &[
        1., 0.,
        0., 1.,
    ];
    let c = &mut[0.; 4];
    La::symm(Layout::RowMajor, Side::Left, Uplo::Upper, 2, 2, 1., a, 2, b, 2, 0., c, 2).unwrap();
    assert_float_eq!(*c, [2., 1., 1., 3.], abs_all <= 1e-12);

    let c = &mut[0.; 4];
    La::symm(Layout::RowMajor, Side::Right, Uplo::Upper, 2, 2, 1., a, 2, b, 2, 0., c, 2).unwrap();
    assert_float_eq!(*c, [2., 1., 1., 3.], abs_all <= 1e-12);

    let v = &[1., 2.];
    let c = &mut[0.; 4];
    La::syrk(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, 2, 1, 1., v, 1, 0., c, 2).unwrap();
    assert_float_eq!(*c, [1., 2., 0., 4.], abs_all <= 1e-12);

    let c = &mut[0.; 4];
    La::syrk(Layout::RowMajor, Uplo::Lower, Transpose::Trans, 2, 1, 1., v, 2, 0., c, 2).unwrap();
    assert_float_eq!(*c, [1., 0., 2., 4.], abs_all <= 1e-12);
}

#[test]
fn test_trmm_trsm()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[
        2., 1.,
        0., 4.,
    ];

    let b = &mut[1., 1.];
    La::trmm(Layout::RowMajor, Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, 1, 1., a, 2, b, 1).unwrap();
    assert_float_eq!(*b, [3., 4.], abs_all <= 1e-12);

    La::trsm(Layout::RowMajor, Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, 1, 1., a, 2, b, 1).unwrap();
    assert_float_eq!(*b, [1., 1.], abs_all <= 1e-12);

    // row vector times A from the right
    let b = &mut[1., 1.];
    La::trmm(Layout::RowMajor, Side::Right, Uplo::Upper, Transpose::NoTrans, Diag::Unit, 1, 2, 1., a, 2, b, 2).unwrap();
    assert_float_eq!(*b, [1., 2.], abs_all <= 1e-12);
}

#[test]
fn test_blas_contract_violation()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[1., 2., 3., 4.];
    let y = &mut[0., 0.];
    assert_eq!(
        La::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1., a, 2, &[1., 1.], 0, 0., y, 1),
        Err(ContractViolation::BadIncrement)
    );
    assert_eq!(
        La::gemv(Layout::RowMajor, Transpose::NoTrans, 2, 2, 1., a, 2, &[1., 1.], 2, 0., y, 1),
        Err(ContractViolation::ShortSlice)
    );
    assert_eq!(*y, [0., 0.]);

    let c = &mut[0.; 3];
    assert_eq!(
        La::gemm(Layout::RowMajor, Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2, 1., a, 2, a, 2, 0., c, 2),
        Err(ContractViolation::ShortSlice)
    );
}

#[test]
fn test_level1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let x = &[1., 2., 3.];
    let y = &[4., 5., 6.];
    assert_float_eq!(La::dot(3, x, 1, y, 1).unwrap(), 32., abs <= 1e-12);
    // negative increment walks y backwards
    assert_float_eq!(La::dot(3, x, 1, y, -1).unwrap(), 28., abs <= 1e-12);

    assert_float_eq!(La::nrm2(2, &[3., 4.], 1).unwrap(), 5., abs <= 1e-12);
    assert_float_eq!(La::asum(3, &[1., -2., 3.], 1).unwrap(), 6., abs <= 1e-12);
    assert_eq!(La::iamax(3, &[1., -5., 3.], 1).unwrap(), 1);
    assert_eq!(La::iamax(2, &[1., 99., -5.], 2).unwrap(), 1);
    assert_eq!(La::iamax(0, &[], 1).unwrap(), 0);

    let y = &mut[1., 1.];
    La::axpy(2, 2., &[1., 2.], 1, y, 1).unwrap();
    assert_float_eq!(*y, [3., 5.], abs_all <= 1e-12);

    La::scal(2, 3., y, 1).unwrap();
    assert_float_eq!(*y, [9., 15.], abs_all <= 1e-12);

    La::copy(2, &[7., 8.], 1, y, -1).unwrap();
    assert_eq!(*y, [8., 7.]);

    let x = &mut[1., 2.];
    let y = &mut[3., 4.];
    La::swap(2, x, 1, y, 1).unwrap();
    assert_eq!((*x, *y), ([3., 4.], [1., 2.]));

    // quarter turn
    La::rot(2, x, 1, y, 1, 0., 1.).unwrap();
    assert_float_eq!(*x, [1., 2.], abs_all <= 1e-12);
    assert_float_eq!(*y, [-3., -4.], abs_all <= 1e-12);
}

#[test]
fn test_level2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let l = Layout::RowMajor;
    let a = &[
        2., 1.,
        99., 4.,
    ];

    let x = &mut[1., 1.];
    La::trmv(l, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, a, 2, x, 1).unwrap();
    assert_float_eq!(*x, [3., 4.], abs_all <= 1e-12);
    La::trsv(l, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, a, 2, x, 1).unwrap();
    assert_float_eq!(*x, [1., 1.], abs_all <= 1e-12);
    La::trmv(l, Uplo::Upper, Transpose::Trans, Diag::NonUnit, 2, a, 2, x, 1).unwrap();
    assert_float_eq!(*x, [2., 5.], abs_all <= 1e-12);

    let y = &mut[0., 0.];
    La::symv(l, Uplo::Upper, 2, 1., a, 2, &[1., 1.], 1, 0., y, 1).unwrap();
    assert_float_eq!(*y, [3., 5.], abs_all <= 1e-12);

    let g = &mut[0.; 4];
    La::ger(Layout::ColumnMajor, 2, 2, 1., &[1., 2.], 1, &[3., 4.], 1, g, 2).unwrap();
    assert_float_eq!(*g, [3., 6., 4., 8.], abs_all <= 1e-12);

    let s = &mut[0.; 4];
    La::syr(l, Uplo::Upper, 2, 1., &[1., 2.], 1, s, 2).unwrap();
    assert_float_eq!(*s, [1., 2., 0., 4.], abs_all <= 1e-12);

    let s = &mut[0.; 4];
    La::syr2(l, Uplo::Lower, 2, 1., &[1., 0.], 1, &[0., 1.], 1, s, 2).unwrap();
    assert_float_eq!(*s, [0., 0., 1., 0.], abs_all <= 1e-12);
}

#[test]
fn test_syr2k()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[1., 0.];
    let b = &[0., 1.];

    // the lower element is not referenced
    let c = &mut[1.; 4];
    La::syr2k(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, 2, 1, 1., a, 1, b, 1, 2., c, 2).unwrap();
    assert_float_eq!(*c, [2., 3., 1., 2.], abs_all <= 1e-12);

    let c = &mut[0.; 4];
    La::syr2k(Layout::RowMajor, Uplo::Lower, Transpose::Trans, 2, 1, 1., a, 2, b, 2, 0., c, 2).unwrap();
    assert_float_eq!(*c, [0., 0., 1., 0.], abs_all <= 1e-12);
}

#[test]
fn test_blas_ex_contract_violation()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let x = &mut[1., 2.];
    assert_eq!(La::nrm2(2, x, -1), Err(ContractViolation::BadIncrement));
    assert_eq!(La::scal(2, 0., x, 0), Err(ContractViolation::BadIncrement));
    assert_eq!(La::axpy(2, 1., &[1.], 1, x, 1), Err(ContractViolation::ShortSlice));
    assert_eq!(*x, [1., 2.]);

    let a = &mut[0.; 3];
    assert_eq!(La::ger(Layout::RowMajor, 2, 2, 1., &[1., 1.], 1, &[1., 1.], 1, a, 2), Err(ContractViolation::ShortSlice));
    assert_eq!(*a, [0.; 3]);
}
