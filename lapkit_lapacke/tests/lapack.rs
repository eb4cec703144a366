use float_eq::assert_float_eq;
use lapkit_core::*;
use lapkit_lapacke::F64LAPACK;

use intel_mkl_src as _;

type La = F64LAPACK;

//

#[test]
fn test_gesv()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        4., 1.,
        2., 3.,
    ];
    let b = &mut[1., 2.];
    let ipiv = &mut[0; 2];

    assert!(La::gesv(Layout::RowMajor, 2, 1, a, 2, ipiv, b, 1).unwrap());
    assert_float_eq!(*b, [0.1, 0.6], abs_all <= 1e-12);
    assert_eq!(ipiv, &[0, 1]);
}

#[test]
fn test_getrf_getrs()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[ // column-major
        4., 2.,
        1., 3.,
    ];
    let ipiv = &mut[0; 2];
    assert!(La::getrf(Layout::ColumnMajor, 2, 2, a, 2, ipiv).unwrap());

    let b = &mut[1., 2.];
    assert!(La::getrs(Layout::ColumnMajor, Transpose::NoTrans, 2, 1, a, 2, ipiv, b, 2).unwrap());
    assert_float_eq!(*b, [0.1, 0.6], abs_all <= 1e-12);

    let b = &mut[1., 2.];
    assert!(La::getrs(Layout::ColumnMajor, Transpose::Trans, 2, 1, a, 2, ipiv, b, 2).unwrap());
    assert_float_eq!(*b, [-0.1, 0.7], abs_all <= 1e-12);

    // the same as Trans for real matrices
    let b = &mut[1., 2.];
    assert!(La::getrs(Layout::ColumnMajor, Transpose::ConjTrans, 2, 1, a, 2, ipiv, b, 2).unwrap());
    assert_float_eq!(*b, [-0.1, 0.7], abs_all <= 1e-12);
}

#[test]
fn test_getrf_singular()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        1., 2.,
        2., 4.,
    ];
    let ipiv = &mut[0; 2];
    assert_eq!(La::getrf(Layout::RowMajor, 2, 2, a, 2, ipiv), Ok(false));
}

#[test]
fn test_getri()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        4., 1.,
        2., 3.,
    ];
    let ipiv = &mut[0; 2];
    assert!(La::getrf(Layout::RowMajor, 2, 2, a, 2, ipiv).unwrap());
    assert!(La::getri(Layout::RowMajor, 2, a, 2, ipiv).unwrap());
    assert_float_eq!(*a, [0.3, -0.1, -0.2, 0.4], abs_all <= 1e-12);
}

#[test]
fn test_potrf()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        4., 2.,
        2., 3.,
    ];
    assert!(La::potrf(Layout::RowMajor, Uplo::Upper, 2, a, 2).unwrap());
    // lower triangle is not referenced
    assert_float_eq!(*a, [2., 1., 2., 2_f64.sqrt()], abs_all <= 1e-12);

    let a = &mut[
        1., 2.,
        2., 1.,
    ];
    assert_eq!(La::potrf(Layout::RowMajor, Uplo::Lower, 2, a, 2), Ok(false));

    // empty matrix returns without a native call
    assert_eq!(La::potrf(Layout::RowMajor, Uplo::Lower, 0, &mut[], 1), Ok(true));
}

#[test]
fn test_posv_potrs_potri()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        4., 2.,
        2., 3.,
    ];
    let b = &mut[6., 5.];
    assert!(La::posv(Layout::RowMajor, Uplo::Lower, 2, 1, a, 2, b, 1).unwrap());
    assert_float_eq!(*b, [1., 1.], abs_all <= 1e-12);

    // a holds the factor now
    let b = &mut[
        6., 4.,
        5., 2.,
    ];
    assert!(La::potrs(Layout::RowMajor, Uplo::Lower, 2, 2, a, 2, b, 2).unwrap());
    assert_float_eq!(*b, [1., 1., 1., 0.], abs_all <= 1e-12);

    assert!(La::potri(Layout::RowMajor, Uplo::Lower, 2, a, 2).unwrap());
    // inverse is [0.375, -0.25; -0.25, 0.5], lower triangle written
    assert_float_eq!(a[0], 0.375, abs <= 1e-12);
    assert_float_eq!(a[2], -0.25, abs <= 1e-12);
    assert_float_eq!(a[3], 0.5, abs <= 1e-12);
}

#[test]
fn test_trtrs_trtri()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[
        2., 1.,
        0., 4.,
    ];

    let b = &mut[4., 8.];
    assert!(La::trtrs(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, 1, a, 2, b, 1).unwrap());
    assert_float_eq!(*b, [1., 2.], abs_all <= 1e-12);

    let b = &mut[4., 8.];
    assert!(La::trtrs(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, Diag::Unit, 2, 1, a, 2, b, 1).unwrap());
    assert_float_eq!(*b, [-4., 8.], abs_all <= 1e-12);

    let b = &mut[4., 8.];
    assert!(La::trtrs(Layout::RowMajor, Uplo::Upper, Transpose::Trans, Diag::NonUnit, 2, 1, a, 2, b, 1).unwrap());
    assert_float_eq!(*b, [2., 1.5], abs_all <= 1e-12);

    let singular = &[
        0., 1.,
        0., 4.,
    ];
    let b = &mut[4., 8.];
    assert_eq!(La::trtrs(Layout::RowMajor, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, 1, singular, 2, b, 1), Ok(false));

    let a = &mut[
        2., 1.,
        0., 4.,
    ];
    assert!(La::trtri(Layout::RowMajor, Uplo::Upper, Diag::NonUnit, 2, a, 2).unwrap());
    assert_float_eq!(*a, [0.5, -0.125, 0., 0.25], abs_all <= 1e-12);
}

#[test]
fn test_gels()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // y = 1 + x through (0, 1), (1, 2), (2, 3)
    let a = &mut[
        1., 0.,
        1., 1.,
        1., 2.,
    ];
    let b = &mut[1., 2., 3.];
    assert!(La::gels(Layout::RowMajor, Transpose::NoTrans, 3, 2, 1, a, 2, b, 1).unwrap());
    assert_float_eq!(b[.. 2], [1., 1.].as_ref(), abs_all <= 1e-12);

    let a = &mut[
        1., 0.,
        1., 0.,
        1., 0.,
    ];
    let b = &mut[1., 2., 3.];
    assert_eq!(La::gels(Layout::RowMajor, Transpose::NoTrans, 3, 2, 1, a, 2, b, 1), Ok(false));
}

#[test]
fn test_geqrf_ormqr()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let orig = [ // column-major 3x2
        1., 1., 1.,
        0., 1., 2.,
    ];
    let a = &mut orig.clone();
    let tau = &mut[0.; 2];
    assert!(La::geqrf(Layout::ColumnMajor, 3, 2, a, 3, tau).unwrap());

    // Q^T A = R
    let c = &mut orig.clone();
    assert!(La::ormqr(Layout::ColumnMajor, Side::Left, Transpose::Trans, 3, 2, 2, a, 3, tau, c, 3).unwrap());
    assert_float_eq!(c[0], a[0], abs <= 1e-12);
    assert_float_eq!(c[3], a[3], abs <= 1e-12);
    assert_float_eq!(c[4], a[4], abs <= 1e-12);
    assert_float_eq!(c[1], 0., abs <= 1e-12);
    assert_float_eq!(c[2], 0., abs <= 1e-12);
    assert_float_eq!(c[5], 0., abs <= 1e-12);
    assert_float_eq!(a[0].abs(), 3_f64.sqrt(), abs <= 1e-12);

    // LQ of the transpose has the same diagonal magnitude
    let at = &mut[ // column-major 2x3
        1., 0.,
        1., 1.,
        1., 2.,
    ];
    assert!(La::gelqf(Layout::ColumnMajor, 2, 3, at, 2, tau).unwrap());
    assert_float_eq!(at[0].abs(), 3_f64.sqrt(), abs <= 1e-12);
}

#[test]
fn test_lange_lantr()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &[
        1., -2.,
        3., 4.,
    ];
    let l = Layout::RowMajor;
    assert_float_eq!(La::lange(l, Norm::MaxAbs, 2, 2, a, 2).unwrap(), 4., abs <= 1e-12);
    assert_float_eq!(La::lange(l, Norm::MaxColumnSum, 2, 2, a, 2).unwrap(), 6., abs <= 1e-12);
    assert_float_eq!(La::lange(l, Norm::MaxRowSum, 2, 2, a, 2).unwrap(), 7., abs <= 1e-12);
    assert_float_eq!(La::lange(l, Norm::Frobenius, 2, 2, a, 2).unwrap(), 30_f64.sqrt(), abs <= 1e-12);

    assert_float_eq!(La::lantr(l, Norm::MaxColumnSum, Uplo::Upper, Diag::NonUnit, 2, 2, a, 2).unwrap(), 6., abs <= 1e-12);
    assert_float_eq!(La::lantr(l, Norm::MaxColumnSum, Uplo::Upper, Diag::Unit, 2, 2, a, 2).unwrap(), 3., abs <= 1e-12);
    assert_float_eq!(La::lantr(l, Norm::MaxRowSum, Uplo::Lower, Diag::NonUnit, 2, 2, a, 2).unwrap(), 7., abs <= 1e-12);
}

#[test]
fn test_gecon_trcon()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        1., 0.,
        0., 1.,
    ];
    let anorm = La::lange(Layout::RowMajor, Norm::MaxColumnSum, 2, 2, a, 2).unwrap();
    let ipiv = &mut[0; 2];
    assert!(La::getrf(Layout::RowMajor, 2, 2, a, 2, ipiv).unwrap());

    let mut rcond = 0.;
    assert!(La::gecon(Layout::RowMajor, Norm::MaxColumnSum, 2, a, 2, anorm, &mut rcond).unwrap());
    assert_float_eq!(rcond, 1., abs <= 1e-12);

    assert_eq!(
        La::gecon(Layout::RowMajor, Norm::Frobenius, 2, a, 2, anorm, &mut rcond),
        Err(ContractViolation::FlagNotApplicable {family: "norm", code: b'F'})
    );

    let t = &[
        2., 0.,
        0., 4.,
    ];
    assert!(La::trcon(Layout::RowMajor, Norm::MaxColumnSum, Uplo::Upper, Diag::NonUnit, 2, t, 2, &mut rcond).unwrap());
    assert_float_eq!(rcond, 0.5, abs <= 1e-12);
}

#[test]
fn test_syev()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        2., 1.,
        1., 2.,
    ];
    let w = &mut[0.; 2];
    assert!(La::syev(Layout::RowMajor, EvJob::Compute, Uplo::Upper, 2, a, 2, w).unwrap());
    assert_float_eq!(*w, [1., 3.], abs_all <= 1e-12);

    // eigenvector of 3 is (1, 1) / sqrt(2), stored in the second column
    let r = 0.5_f64.sqrt();
    assert_float_eq!(a[1].abs(), r, abs <= 1e-12);
    assert_float_eq!(a[3].abs(), r, abs <= 1e-12);
    assert_float_eq!(a[1] * a[3], 0.5, abs <= 1e-12);

    let a = &mut[
        2., 1.,
        1., 2.,
    ];
    assert!(La::syev(Layout::RowMajor, EvJob::None, Uplo::Lower, 2, a, 2, w).unwrap());
    assert_float_eq!(*w, [1., 3.], abs_all <= 1e-12);
}

#[test]
fn test_gesvd()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[
        3.,  0.,
        0., -2.,
        0.,  0.,
    ];
    let s = &mut[0.; 2];
    let u = &mut[0.; 9];
    let vt = &mut[0.; 4];
    let superb = &mut[0.; 1];
    assert!(La::gesvd(Layout::RowMajor, SvdJob::All, SvdJob::All, 3, 2, a, 2, s, u, 3, vt, 2, superb).unwrap());
    assert_float_eq!(*s, [3., 2.], abs_all <= 1e-12);
    assert_float_eq!((u[0] * vt[0]), 1., abs <= 1e-12);
    assert_float_eq!((u[4] * vt[3]), -1., abs <= 1e-12);

    let a = &mut[
        3.,  0.,
        0., -2.,
        0.,  0.,
    ];
    assert!(La::gesvd(Layout::RowMajor, SvdJob::None, SvdJob::None, 3, 2, a, 2, s, &mut[], 1, &mut[], 2, superb).unwrap());
    assert_float_eq!(*s, [3., 2.], abs_all <= 1e-12);

    assert_eq!(
        La::gesvd(Layout::RowMajor, SvdJob::Overwrite, SvdJob::None, 3, 2, a, 2, s, &mut[], 1, &mut[], 1, superb),
        Err(ContractViolation::SvdOverwrite)
    );
}

#[test]
fn test_steqr_sterf_lasrt()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let d = &mut[2., 2.];
    let e = &mut[1.];
    assert!(La::sterf(2, d, e).unwrap());
    assert_float_eq!(*d, [1., 3.], abs_all <= 1e-12);

    let d = &mut[2., 2.];
    let e = &mut[1.];
    let z = &mut[0.; 4];
    assert!(La::steqr(Layout::ColumnMajor, EvComp::Tridiag, 2, d, e, z, 2).unwrap());
    assert_float_eq!(*d, [1., 3.], abs_all <= 1e-12);
    assert_float_eq!(z[2] * z[3], 0.5, abs <= 1e-12);

    let d = &mut[2., 2.];
    let e = &mut[1.];
    assert!(La::steqr(Layout::ColumnMajor, EvComp::None, 2, d, e, &mut[], 2).unwrap());
    assert_float_eq!(*d, [1., 3.], abs_all <= 1e-12);

    // unreferenced z with the minimum stride
    let d = &mut[2., 2.];
    let e = &mut[1.];
    assert!(La::steqr(Layout::ColumnMajor, EvComp::None, 2, d, e, &mut[], 1).unwrap());
    assert_float_eq!(*d, [1., 3.], abs_all <= 1e-12);

    let d = &mut[3., 1., 2.];
    assert!(La::lasrt(Sort::Decreasing, d).unwrap());
    assert_eq!(d, &[3., 2., 1.]);
    assert!(La::lasrt(Sort::Increasing, d).unwrap());
    assert_eq!(d, &[1., 2., 3.]);
}

#[test]
fn test_lacpy_laset()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[9.; 6];
    assert!(La::laset(Layout::RowMajor, Part::All, 2, 3, 0., 1., a, 3).unwrap());
    assert_eq!(a, &[1., 0., 0., 0., 1., 0.]);

    let src = &[
        1., 2., 3.,
        4., 5., 6.,
    ];
    let b = &mut[0.; 6];
    assert!(La::lacpy(Layout::RowMajor, Part::Upper, 2, 3, src, 3, b, 3).unwrap());
    assert_eq!(b, &[1., 2., 3., 0., 5., 6.]);

    let b = &mut[0.; 6];
    assert!(La::lacpy(Layout::RowMajor, Part::from(Uplo::Lower), 2, 3, src, 3, b, 3).unwrap());
    assert_eq!(b, &[1., 0., 0., 4., 5., 0.]);
}

#[test]
fn test_contract_violation()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[1., 2., 3.];
    let ipiv = &mut[0; 2];
    assert_eq!(La::getrf(Layout::RowMajor, 2, 2, a, 2, ipiv), Err(ContractViolation::ShortSlice));
    assert_eq!(a, &[1., 2., 3.]);

    let a = &[
        4., 1.,
        2., 3.,
    ];
    let b = &mut[1., 2.];
    assert_eq!(
        La::getrs(Layout::RowMajor, Transpose::NoTrans, 2, 1, a, 2, &[0, 2], b, 1),
        Err(ContractViolation::BadPivot)
    );
    assert_eq!(b, &[1., 2.]);

    assert_eq!(
        La::potrf(Layout::RowMajor, Uplo::Upper, 2, &mut[4., 2., 2., 3.], 1),
        Err(ContractViolation::BadStride)
    );
}

#[test]
fn test_laswp()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let orig = [
        1., 2.,
        3., 4.,
        5., 6.,
    ];
    let ipiv = &[2, 2];

    let a = &mut orig.clone();
    assert!(La::laswp(Layout::RowMajor, 2, a, 2, 0, 1, ipiv, 1).unwrap());
    assert_eq!(a, &[5., 6., 1., 2., 3., 4.]);

    // reverse order undoes the interchanges
    assert!(La::laswp(Layout::RowMajor, 2, a, 2, 0, 1, ipiv, -1).unwrap());
    assert_eq!(a, &orig);

    let a = &mut orig.clone();
    assert!(La::laswp(Layout::RowMajor, 2, a, 2, 0, 1, ipiv, -1).unwrap());
    assert_eq!(a, &[3., 4., 5., 6., 1., 2.]);

    // pivots of getrf reproduce P^T A
    let a = &mut[ // column-major
        1., 3.,
        2., 4.,
    ];
    let lu = &mut a.clone();
    let ipiv = &mut[0; 2];
    assert!(La::getrf(Layout::ColumnMajor, 2, 2, lu, 2, ipiv).unwrap());
    assert!(La::laswp(Layout::ColumnMajor, 2, a, 2, 0, 1, ipiv, 1).unwrap());
    assert_eq!(a, &[3., 1., 4., 2.]);
}

#[test]
fn test_pocon_lansy()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // the other triangle is not referenced
    let a = &[
        4., 2.,
        99., 3.,
    ];
    let l = Layout::RowMajor;
    assert_float_eq!(La::lansy(l, Norm::MaxColumnSum, Uplo::Upper, 2, a, 2).unwrap(), 6., abs <= 1e-12);
    assert_float_eq!(La::lansy(l, Norm::Frobenius, Uplo::Upper, 2, a, 2).unwrap(), 33_f64.sqrt(), abs <= 1e-12);
    assert_float_eq!(La::lansy(l, Norm::MaxAbs, Uplo::Lower, 2, a, 2).unwrap(), 99., abs <= 1e-12);

    let a = &mut[
        4., 0.,
        99., 1.,
    ];
    let anorm = La::lansy(l, Norm::MaxColumnSum, Uplo::Upper, 2, a, 2).unwrap();
    assert!(La::potrf(l, Uplo::Upper, 2, a, 2).unwrap());

    let rcond = &mut 0.;
    assert!(La::pocon(l, Uplo::Upper, 2, a, 2, anorm, rcond).unwrap());
    assert_float_eq!(*rcond, 0.25, abs <= 1e-12);
}

#[test]
fn test_geqp3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // the column of the largest norm comes first
    let a = &mut[
        1., 0., 0.,
        0., 0., 2.,
    ];
    let jpvt = &mut[0; 3];
    let tau = &mut[0.; 2];
    assert!(La::geqp3(Layout::RowMajor, 2, 3, a, 3, jpvt, tau).unwrap());
    assert_eq!(jpvt, &[2, 0, 1]);
    assert_float_eq!(a[0].abs(), 2., abs <= 1e-12);
    assert_float_eq!(a[4].abs(), 1., abs <= 1e-12);
}

#[test]
fn test_orgqr_orglq_ormlq()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let l = Layout::ColumnMajor;

    let q = &mut[ // column-major 3x2
        1., 1., 1.,
        0., 1., 2.,
    ];
    let tau = &mut[0.; 2];
    assert!(La::geqrf(l, 3, 2, q, 3, tau).unwrap());
    assert!(La::orgqr(l, 3, 2, 2, q, 3, tau).unwrap());

    let dot = |i: usize, j: usize| (0.. 3).map(|r| q[r + 3 * i] * q[r + 3 * j]).sum::<f64>();
    assert_float_eq!(dot(0, 0), 1., abs <= 1e-12);
    assert_float_eq!(dot(1, 1), 1., abs <= 1e-12);
    assert_float_eq!(dot(0, 1), 0., abs <= 1e-12);
    assert_float_eq!(q[0].abs(), 1. / 3_f64.sqrt(), abs <= 1e-12);

    let orig = [ // column-major 2x3
        1., 0.,
        1., 1.,
        1., 2.,
    ];
    let a = &mut orig.clone();
    assert!(La::gelqf(l, 2, 3, a, 2, tau).unwrap());

    // A Q^T = L
    let c = &mut orig.clone();
    assert!(La::ormlq(l, Side::Right, Transpose::Trans, 2, 3, 2, a, 2, tau, c, 2).unwrap());
    assert_float_eq!(c[0].abs(), 3_f64.sqrt(), abs <= 1e-12);
    assert_float_eq!(c[2], 0., abs <= 1e-12);
    assert_float_eq!(c[4], 0., abs <= 1e-12);
    assert_float_eq!(c[5], 0., abs <= 1e-12);

    assert!(La::orglq(l, 2, 3, 2, a, 2, tau).unwrap());
    let dot = |i: usize, j: usize| (0.. 3).map(|c| a[i + 2 * c] * a[j + 2 * c]).sum::<f64>();
    assert_float_eq!(dot(0, 0), 1., abs <= 1e-12);
    assert_float_eq!(dot(1, 1), 1., abs <= 1e-12);
    assert_float_eq!(dot(0, 1), 0., abs <= 1e-12);
}

#[test]
fn test_geev()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // rotation by a right angle
    let a = &mut[
        0., -1.,
        1., 0.,
    ];
    let wr = &mut[0.; 2];
    let wi = &mut[0.; 2];
    assert!(La::geev(Layout::RowMajor, EvJob::None, EvJob::None, 2, a, 2, wr, wi, &mut[], 1, &mut[], 1).unwrap());
    assert_float_eq!(*wr, [0., 0.], abs_all <= 1e-12);
    assert_float_eq!(*wi, [1., -1.], abs_all <= 1e-12);

    let orig = [
        2., 1.,
        0., 3.,
    ];
    let a = &mut orig.clone();
    let vr = &mut[0.; 4];
    assert!(La::geev(Layout::RowMajor, EvJob::None, EvJob::Compute, 2, a, 2, wr, wi, &mut[], 1, vr, 2).unwrap());
    assert_float_eq!(*wi, [0., 0.], abs_all <= 1e-12);

    // A v = w v for each column
    for j in 0.. 2 {
        for r in 0.. 2 {
            let av: f64 = (0.. 2).map(|c| orig[r * 2 + c] * vr[c * 2 + j]).sum();
            assert_float_eq!(av, wr[j] * vr[r * 2 + j], abs <= 1e-12);
        }
    }
    let mut w = wr.to_vec();
    w.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_float_eq!(w[0], 2., abs <= 1e-12);
    assert_float_eq!(w[1], 3., abs <= 1e-12);
}

#[test]
fn test_contract_violation_ex()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a = &mut[1., 2., 3., 4.];
    assert_eq!(
        La::geev(Layout::RowMajor, EvJob::None, EvJob::None, 2, a, 2, &mut[0.; 1], &mut[0.; 2], &mut[], 1, &mut[], 1),
        Err(ContractViolation::ShortSlice)
    );
    assert_eq!(La::orgqr(Layout::RowMajor, 2, 2, 3, a, 2, &[0.; 3]), Err(ContractViolation::BadDimension));
    assert_eq!(La::laswp(Layout::RowMajor, 2, a, 2, 0, 1, &[1, 1], 2), Err(ContractViolation::BadIncrement));
    assert_eq!(La::laswp(Layout::RowMajor, 2, a, 2, 0, 1, &[2, 2], 1), Err(ContractViolation::ShortSlice));
    assert_eq!(a, &[1., 2., 3., 4.]);
}
