//! Argument shape checks of each routine.
//!
//! Backends run the checker of a routine before marshalling its arguments,
//! so that every dimension handed to the native library fits `i32`
//! and every slice is long enough for the dimensions it comes with.
//! Lengths are passed instead of slices to keep these independent of the element type.

use crate::{ContractViolation, Layout, Flag, Transpose, Side, Norm, SvdJob, EvJob, EvComp};
use crate::{check_matrix, check_vector, check_len, to_int};

//

/// Normalizes `trans` for routines applying an orthogonal or unitary matrix,
/// and for symmetric (Hermitian) rank-k updates.
///
/// Real routines accept `N` or `T`, complex routines `N` or `C`.
/// For real matrices [`Transpose::ConjTrans`] is the same as [`Transpose::Trans`],
/// while for complex matrices [`Transpose::Trans`] is not applicable.
pub fn orthogonal_trans(trans: Transpose, complex: bool) -> Result<u8, ContractViolation>
{
    match (trans, complex) {
        (Transpose::NoTrans, _) => Ok(b'N'),
        (Transpose::Trans, false) | (Transpose::ConjTrans, false) => Ok(b'T'),
        (Transpose::ConjTrans, true) => Ok(b'C'),
        (Transpose::Trans, true) => Err(ContractViolation::FlagNotApplicable {
            family: Transpose::FAMILY, code: trans.code()
        }),
    }
}

/// Checks `norm` for condition number estimation, which accepts the 1-norm or the infinity norm only.
pub fn cond_norm(norm: Norm) -> Result<(), ContractViolation>
{
    match norm {
        Norm::MaxColumnSum | Norm::MaxRowSum => Ok(()),
        Norm::MaxAbs | Norm::Frobenius => Err(ContractViolation::FlagNotApplicable {
            family: Norm::FAMILY, code: norm.code()
        }),
    }
}

fn check_pivot(len: usize, need: usize) -> Result<(), ContractViolation>
{
    if len < need {
        Err(ContractViolation::BadPivot)
    }
    else {
        Ok(())
    }
}

// shape of singular vectors; with no elements but a minimum stride when not referenced
fn svd_vectors(job: SvdJob, full: (usize, usize), thin: (usize, usize), none: (usize, usize)) -> Result<(usize, usize), ContractViolation>
{
    match job {
        SvdJob::All => Ok(full),
        SvdJob::Thin => Ok(thin),
        SvdJob::None => Ok(none),
        SvdJob::Overwrite => Err(ContractViolation::SvdOverwrite),
    }
}

//

/// Checks `gesv`: `a` is `n`×`n`, `b` is `n`×`nrhs`.
pub fn gesv(layout: Layout, n: usize, nrhs: usize, a_len: usize, lda: usize, ipiv_len: usize, b_len: usize, ldb: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    check_matrix(layout, n, nrhs, b_len, ldb)?;
    check_pivot(ipiv_len, n)
}

/// Checks `getrf`: `a` is `m`×`n`, `ipiv` holds `min(m, n)` pivots.
pub fn getrf(layout: Layout, m: usize, n: usize, a_len: usize, lda: usize, ipiv_len: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, m, n, a_len, lda)?;
    check_pivot(ipiv_len, m.min(n))
}

/// Checks `getrs`: `a` is `n`×`n`, `b` is `n`×`nrhs`, `ipiv` holds `n` pivots.
pub fn getrs(layout: Layout, n: usize, nrhs: usize, a_len: usize, lda: usize, ipiv_len: usize, b_len: usize, ldb: usize) -> Result<(), ContractViolation>
{
    gesv(layout, n, nrhs, a_len, lda, ipiv_len, b_len, ldb)
}

/// Checks `getri`: `a` is `n`×`n`, `ipiv` holds `n` pivots.
pub fn getri(layout: Layout, n: usize, a_len: usize, lda: usize, ipiv_len: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    check_pivot(ipiv_len, n)
}

/// Checks `laswp`: pivots `ipiv[k1..= k2]` applied to `a` of `n` columns in the direction of `incx`.
///
/// Returns the number of rows of `a` referenced, which is at least `k2 + 1`.
pub fn laswp(layout: Layout, n: usize, a_len: usize, lda: usize, k1: usize, k2: usize, ipiv: &[usize], incx: isize) -> Result<usize, ContractViolation>
{
    to_int(k2)?;
    if k1 > k2 {
        return Err(ContractViolation::BadDimension);
    }
    if incx != 1 && incx != -1 {
        return Err(ContractViolation::BadIncrement);
    }
    check_pivot(ipiv.len(), k2 + 1)?;

    let rows = ipiv[k1..= k2].iter()
               .fold(k2 + 1, |rows, &p| rows.max(p.saturating_add(1)));

    check_matrix(layout, rows, n, a_len, lda)?;
    Ok(rows)
}

/// Checks a square matrix `a` of `n`×`n`, as in `potrf`, `potri`, `trtri`.
pub fn square(layout: Layout, n: usize, a_len: usize, lda: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)
}

/// Checks a square system, as in `potrs`, `posv`, `trtrs`: `a` is `n`×`n`, `b` is `n`×`nrhs`.
pub fn square_system(layout: Layout, n: usize, nrhs: usize, a_len: usize, lda: usize, b_len: usize, ldb: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    check_matrix(layout, n, nrhs, b_len, ldb)
}

/// Checks `geqrf` and `gelqf`: `a` is `m`×`n`, `tau` holds `min(m, n)` scalars.
pub fn factor_tau(layout: Layout, m: usize, n: usize, a_len: usize, lda: usize, tau_len: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, m, n, a_len, lda)?;
    check_len(tau_len, m.min(n))
}

/// Checks `geqp3`: `a` is `m`×`n`, `jpvt` holds `n` and `tau` holds `min(m, n)` elements.
pub fn geqp3(layout: Layout, m: usize, n: usize, a_len: usize, lda: usize, jpvt_len: usize, tau_len: usize) -> Result<(), ContractViolation>
{
    factor_tau(layout, m, n, a_len, lda, tau_len)?;
    check_pivot(jpvt_len, n)
}

/// Checks `orgqr`: `a` is `m`×`n` holding `k` reflectors, where `m >= n >= k`.
pub fn orgqr(layout: Layout, m: usize, n: usize, k: usize, a_len: usize, lda: usize, tau_len: usize) -> Result<(), ContractViolation>
{
    if n > m || k > n {
        return Err(ContractViolation::BadDimension);
    }

    check_matrix(layout, m, n, a_len, lda)?;
    check_len(tau_len, k)
}

/// Checks `orglq`: `a` is `m`×`n` holding `k` reflectors, where `n >= m >= k`.
pub fn orglq(layout: Layout, m: usize, n: usize, k: usize, a_len: usize, lda: usize, tau_len: usize) -> Result<(), ContractViolation>
{
    if m > n || k > m {
        return Err(ContractViolation::BadDimension);
    }

    check_matrix(layout, m, n, a_len, lda)?;
    check_len(tau_len, k)
}

/// Checks `gels`: `a` is `m`×`n`, `b` is `max(m, n)`×`nrhs`.
pub fn gels(layout: Layout, m: usize, n: usize, nrhs: usize, a_len: usize, lda: usize, b_len: usize, ldb: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, m, n, a_len, lda)?;
    check_matrix(layout, m.max(n), nrhs, b_len, ldb)
}

/// Checks `ormqr`: `c` is `m`×`n`, and `a` holds `k` reflectors of the order of `c` on `side`.
pub fn ormqr(layout: Layout, side: Side, m: usize, n: usize, k: usize, a_len: usize, lda: usize, tau_len: usize, c_len: usize, ldc: usize) -> Result<(), ContractViolation>
{
    let nq = match side {
        Side::Left => m,
        Side::Right => n,
    };
    if k > nq {
        return Err(ContractViolation::BadDimension);
    }

    check_matrix(layout, nq, k, a_len, lda)?;
    check_len(tau_len, k)?;
    check_matrix(layout, m, n, c_len, ldc)
}

/// Checks `ormlq`: `c` is `m`×`n`, and `a` holds `k` reflectors by rows of the order of `c` on `side`.
pub fn ormlq(layout: Layout, side: Side, m: usize, n: usize, k: usize, a_len: usize, lda: usize, tau_len: usize, c_len: usize, ldc: usize) -> Result<(), ContractViolation>
{
    let nq = match side {
        Side::Left => m,
        Side::Right => n,
    };
    if k > nq {
        return Err(ContractViolation::BadDimension);
    }

    check_matrix(layout, k, nq, a_len, lda)?;
    check_len(tau_len, k)?;
    check_matrix(layout, m, n, c_len, ldc)
}

/// Checks a general matrix `a` of `m`×`n`, as in `lange`, `lantr`, `laset`.
pub fn general(layout: Layout, m: usize, n: usize, a_len: usize, lda: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, m, n, a_len, lda)
}

/// Checks `lacpy`: `a` and `b` are `m`×`n`.
pub fn lacpy(layout: Layout, m: usize, n: usize, a_len: usize, lda: usize, b_len: usize, ldb: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, m, n, a_len, lda)?;
    check_matrix(layout, m, n, b_len, ldb)
}

/// Checks `gecon` and `trcon`: `norm` is one of the norms accepted, `a` is `n`×`n`.
pub fn cond(layout: Layout, norm: Norm, n: usize, a_len: usize, lda: usize) -> Result<(), ContractViolation>
{
    cond_norm(norm)?;
    check_matrix(layout, n, n, a_len, lda)
}

/// Checks `syev`: `a` is `n`×`n`, `w` holds `n` eigenvalues.
pub fn syev(layout: Layout, n: usize, a_len: usize, lda: usize, w_len: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    check_len(w_len, n)
}

// eigenvectors of `geev`; a positive stride is enough when not computed
fn ev_vectors(layout: Layout, job: EvJob, n: usize, len: usize, ld: usize) -> Result<(), ContractViolation>
{
    match job {
        EvJob::Compute => check_matrix(layout, n, n, len, ld),
        EvJob::None => {
            to_int(ld)?;
            if ld < 1 {
                Err(ContractViolation::BadStride)
            }
            else {
                Ok(())
            }
        },
    }
}

/// Checks `geev`: `a` is `n`×`n`, `wr` and `wi` hold `n` elements,
/// and `vl` and `vr` are `n`×`n` if computed.
pub fn geev(layout: Layout, jobvl: EvJob, jobvr: EvJob, n: usize, a_len: usize, lda: usize, wr_len: usize, wi_len: usize,
    vl_len: usize, ldvl: usize, vr_len: usize, ldvr: usize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    check_len(wr_len, n)?;
    check_len(wi_len, n)?;
    ev_vectors(layout, jobvl, n, vl_len, ldvl)?;
    ev_vectors(layout, jobvr, n, vr_len, ldvr)
}

/// Checks `gesvd`.
///
/// `a` is `m`×`n`, `s` holds `min(m, n)` singular values, `superb` holds `min(m, n) - 1` elements.
/// `u` is `m`×`m` for [`SvdJob::All`], `m`×`min(m, n)` for [`SvdJob::Thin`] and not referenced for [`SvdJob::None`];
/// `vt` likewise with `n`×`n` and `min(m, n)`×`n`,
/// and its leading dimension shall be at least `n` for [`Layout::RowMajor`] even if not referenced.
/// [`SvdJob::Overwrite`] is not supported.
pub fn gesvd(layout: Layout, jobu: SvdJob, jobvt: SvdJob, m: usize, n: usize,
    a_len: usize, lda: usize, s_len: usize, u_len: usize, ldu: usize, vt_len: usize, ldvt: usize, superb_len: usize) -> Result<(), ContractViolation>
{
    let mn = m.min(n);
    let (um, un) = svd_vectors(jobu, (m, m), (m, mn), (0, 0))?;
    // the row-major C interface checks `ldvt >= n` even if not referenced
    let (vm, vn) = svd_vectors(jobvt, (n, n), (mn, n), (0, n))?;

    check_matrix(layout, m, n, a_len, lda)?;
    check_len(s_len, mn)?;
    check_matrix(layout, um, un, u_len, ldu)?;
    check_matrix(layout, vm, vn, vt_len, ldvt)?;
    check_len(superb_len, mn.saturating_sub(1))
}

/// Checks a symmetric tridiagonal matrix of order `n`: `d` holds `n` and `e` holds `n - 1` elements.
pub fn tridiag(n: usize, d_len: usize, e_len: usize) -> Result<(), ContractViolation>
{
    to_int(n)?;
    check_len(d_len, n)?;
    check_len(e_len, n.saturating_sub(1))
}

/// Checks `steqr`: a tridiagonal matrix of order `n`,
/// and `z` of `n`×`n` unless `compz` is [`EvComp::None`].
///
/// `z` is not referenced for [`EvComp::None`], but `ldz` shall still be positive,
/// and at least `n` in [`Layout::RowMajor`] where LAPACKE checks it regardless of `compz`.
pub fn steqr(layout: Layout, compz: EvComp, n: usize, d_len: usize, e_len: usize, z_len: usize, ldz: usize) -> Result<(), ContractViolation>
{
    tridiag(n, d_len, e_len)?;

    if compz == EvComp::None {
        to_int(ldz)?;
        let min_ldz = match layout {
            Layout::RowMajor => n.max(1),
            Layout::ColumnMajor => 1,
        };
        if ldz < min_ldz {
            Err(ContractViolation::BadStride)
        }
        else {
            Ok(())
        }
    }
    else {
        check_matrix(layout, n, n, z_len, ldz)
    }
}

/// Checks a plain vector of `n` elements, as in `lasrt`.
pub fn vector(n: usize, len: usize) -> Result<(), ContractViolation>
{
    check_vector(n, len, 1)
}

/// Checks a single strided vector of `n` elements, as in `nrm2`, `asum`, `iamax`, `scal`.
///
/// `inc` shall be positive.
pub fn strided(n: usize, len: usize, inc: isize) -> Result<(), ContractViolation>
{
    if inc <= 0 {
        return Err(ContractViolation::BadIncrement);
    }

    check_vector(n, len, inc)
}

/// Checks a pair of strided vectors of `n` elements, as in `dot`, `axpy`, `copy`, `swap`, `rot`.
pub fn vectors(n: usize, x_len: usize, incx: isize, y_len: usize, incy: isize) -> Result<(), ContractViolation>
{
    check_vector(n, x_len, incx)?;
    check_vector(n, y_len, incy)
}

//

/// Checks `gemv`: `a` is `m`×`n`; `x` and `y` are sized by the shape of `trans(a)`.
pub fn gemv(layout: Layout, trans: Transpose, m: usize, n: usize, a_len: usize, lda: usize,
    x_len: usize, incx: isize, y_len: usize, incy: isize) -> Result<(), ContractViolation>
{
    let (nx, ny) = if trans.is_trans() {(m, n)} else {(n, m)};

    check_matrix(layout, m, n, a_len, lda)?;
    check_vector(nx, x_len, incx)?;
    check_vector(ny, y_len, incy)
}

/// Checks `trmv` and `trsv`: `a` is `n`×`n`, `x` holds `n` elements.
pub fn trmv(layout: Layout, n: usize, a_len: usize, lda: usize, x_len: usize, incx: isize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    check_vector(n, x_len, incx)
}

/// Checks `symv`: `a` is `n`×`n`, `x` and `y` hold `n` elements.
pub fn symv(layout: Layout, n: usize, a_len: usize, lda: usize, x_len: usize, incx: isize, y_len: usize, incy: isize) -> Result<(), ContractViolation>
{
    check_matrix(layout, n, n, a_len, lda)?;
    vectors(n, x_len, incx, y_len, incy)
}

/// Checks `ger`: `x` holds `m` and `y` holds `n` elements, `a` is `m`×`n`.
pub fn ger(layout: Layout, m: usize, n: usize, x_len: usize, incx: isize, y_len: usize, incy: isize, a_len: usize, lda: usize) -> Result<(), ContractViolation>
{
    check_vector(m, x_len, incx)?;
    check_vector(n, y_len, incy)?;
    check_matrix(layout, m, n, a_len, lda)
}

/// Checks `syr`: `x` holds `n` elements, `a` is `n`×`n`.
pub fn syr(layout: Layout, n: usize, x_len: usize, incx: isize, a_len: usize, lda: usize) -> Result<(), ContractViolation>
{
    check_vector(n, x_len, incx)?;
    check_matrix(layout, n, n, a_len, lda)
}

/// Checks `syr2`: `x` and `y` hold `n` elements, `a` is `n`×`n`.
pub fn syr2(layout: Layout, n: usize, x_len: usize, incx: isize, y_len: usize, incy: isize, a_len: usize, lda: usize) -> Result<(), ContractViolation>
{
    vectors(n, x_len, incx, y_len, incy)?;
    check_matrix(layout, n, n, a_len, lda)
}

/// Checks `gemm`: `trans(a)` is `m`×`k`, `trans(b)` is `k`×`n`, `c` is `m`×`n`.
pub fn gemm(layout: Layout, transa: Transpose, transb: Transpose, m: usize, n: usize, k: usize,
    a_len: usize, lda: usize, b_len: usize, ldb: usize, c_len: usize, ldc: usize) -> Result<(), ContractViolation>
{
    let (am, an) = if transa.is_trans() {(k, m)} else {(m, k)};
    let (bm, bn) = if transb.is_trans() {(n, k)} else {(k, n)};

    check_matrix(layout, am, an, a_len, lda)?;
    check_matrix(layout, bm, bn, b_len, ldb)?;
    check_matrix(layout, m, n, c_len, ldc)
}

/// Checks `symm`, `trmm` and `trsm`: `a` is square of the order of `b` on `side`, `b` is `m`×`n`.
pub fn side_square(layout: Layout, side: Side, m: usize, n: usize, a_len: usize, lda: usize, b_len: usize, ldb: usize) -> Result<(), ContractViolation>
{
    let na = match side {
        Side::Left => m,
        Side::Right => n,
    };

    check_matrix(layout, na, na, a_len, lda)?;
    check_matrix(layout, m, n, b_len, ldb)
}

/// Checks `syrk`: `trans(a)` is `n`×`k`, `c` is `n`×`n`.
pub fn syrk(layout: Layout, trans: Transpose, n: usize, k: usize, a_len: usize, lda: usize, c_len: usize, ldc: usize) -> Result<(), ContractViolation>
{
    let (am, an) = if trans.is_trans() {(k, n)} else {(n, k)};

    check_matrix(layout, am, an, a_len, lda)?;
    check_matrix(layout, n, n, c_len, ldc)
}

/// Checks `syr2k`: `trans(a)` and `trans(b)` are `n`×`k`, `c` is `n`×`n`.
pub fn syr2k(layout: Layout, trans: Transpose, n: usize, k: usize, a_len: usize, lda: usize, b_len: usize, ldb: usize, c_len: usize, ldc: usize) -> Result<(), ContractViolation>
{
    syrk(layout, trans, n, k, a_len, lda, c_len, ldc)?;
    syrk(layout, trans, n, k, b_len, ldb, c_len, ldc)
}

//

#[test]
fn test_orthogonal_trans()
{
    assert_eq!(orthogonal_trans(Transpose::NoTrans, false), Ok(b'N'));
    assert_eq!(orthogonal_trans(Transpose::ConjTrans, false), Ok(b'T'));
    assert_eq!(orthogonal_trans(Transpose::Trans, false), Ok(b'T'));
    assert_eq!(orthogonal_trans(Transpose::ConjTrans, true), Ok(b'C'));
    assert_eq!(
        orthogonal_trans(Transpose::Trans, true),
        Err(ContractViolation::FlagNotApplicable {family: "transpose", code: b'T'})
    );
}

#[test]
fn test_cond_norm()
{
    assert!(cond_norm(Norm::MaxColumnSum).is_ok());
    assert!(cond_norm(Norm::MaxRowSum).is_ok());
    assert_eq!(
        cond_norm(Norm::Frobenius),
        Err(ContractViolation::FlagNotApplicable {family: "norm", code: b'F'})
    );
}

#[test]
fn test_args_lu()
{
    let l = Layout::RowMajor;

    assert_eq!(getrf(l, 3, 2, 6, 2, 2), Ok(()));
    assert_eq!(getrf(l, 3, 2, 6, 2, 1), Err(ContractViolation::BadPivot));
    assert_eq!(getrs(l, 2, 3, 4, 2, 2, 6, 3), Ok(()));
    assert_eq!(getrs(l, 2, 3, 4, 2, 2, 6, 2), Err(ContractViolation::BadStride));
    assert_eq!(getri(l, 2, 3, 2, 2), Err(ContractViolation::ShortSlice));
}

#[test]
fn test_args_gels()
{
    // 4x2 least squares, b must have max(m, n) rows
    assert_eq!(gels(Layout::ColumnMajor, 4, 2, 1, 8, 4, 4, 4), Ok(()));
    assert_eq!(gels(Layout::ColumnMajor, 2, 4, 1, 8, 2, 2, 2), Err(ContractViolation::BadStride));
    assert_eq!(gels(Layout::ColumnMajor, 2, 4, 1, 8, 2, 4, 4), Ok(()));
}

#[test]
fn test_args_ormqr()
{
    let l = Layout::ColumnMajor;

    // Q from a 4x2 QR applied to a 4x3 matrix from the left
    assert_eq!(ormqr(l, Side::Left, 4, 3, 2, 8, 4, 2, 12, 4), Ok(()));
    // ... from the right of a 3x4 matrix
    assert_eq!(ormqr(l, Side::Right, 3, 4, 2, 8, 4, 2, 12, 3), Ok(()));
    assert_eq!(ormqr(l, Side::Right, 3, 4, 2, 8, 4, 1, 12, 3), Err(ContractViolation::ShortSlice));
    assert_eq!(ormqr(l, Side::Left, 4, 3, 5, 20, 4, 5, 12, 4), Err(ContractViolation::BadDimension));
}

#[test]
fn test_args_gesvd()
{
    let l = Layout::RowMajor;

    // 3x2, full U and V^T
    assert_eq!(gesvd(l, SvdJob::All, SvdJob::All, 3, 2, 6, 2, 2, 9, 3, 4, 2, 1), Ok(()));
    // thin U is 3x2
    assert_eq!(gesvd(l, SvdJob::Thin, SvdJob::None, 3, 2, 6, 2, 2, 6, 2, 0, 2, 1), Ok(()));
    assert_eq!(gesvd(l, SvdJob::Thin, SvdJob::None, 3, 2, 6, 2, 2, 6, 2, 0, 1, 1), Err(ContractViolation::BadStride));
    assert_eq!(gesvd(Layout::ColumnMajor, SvdJob::Thin, SvdJob::None, 3, 2, 6, 3, 2, 6, 3, 0, 1, 1), Ok(()));
    assert_eq!(gesvd(l, SvdJob::All, SvdJob::None, 3, 2, 6, 2, 2, 6, 2, 0, 1, 1), Err(ContractViolation::BadStride));
    assert_eq!(gesvd(l, SvdJob::Overwrite, SvdJob::None, 3, 2, 6, 2, 2, 0, 1, 0, 1, 1), Err(ContractViolation::SvdOverwrite));
    assert_eq!(gesvd(l, SvdJob::None, SvdJob::None, 3, 2, 6, 2, 1, 0, 1, 0, 1, 1), Err(ContractViolation::ShortSlice));
}

#[test]
fn test_args_steqr()
{
    assert_eq!(steqr(Layout::ColumnMajor, EvComp::None, 3, 3, 2, 0, 3), Ok(()));
    // z is not referenced; only row-major order needs a full stride
    assert_eq!(steqr(Layout::ColumnMajor, EvComp::None, 3, 3, 2, 0, 1), Ok(()));
    assert_eq!(steqr(Layout::ColumnMajor, EvComp::None, 3, 3, 2, 0, 0), Err(ContractViolation::BadStride));
    assert_eq!(steqr(Layout::RowMajor, EvComp::None, 3, 3, 2, 0, 3), Ok(()));
    assert_eq!(steqr(Layout::RowMajor, EvComp::None, 3, 3, 2, 0, 1), Err(ContractViolation::BadStride));
    assert_eq!(steqr(Layout::ColumnMajor, EvComp::Tridiag, 3, 3, 2, 9, 3), Ok(()));
    assert_eq!(steqr(Layout::ColumnMajor, EvComp::Tridiag, 3, 3, 1, 9, 3), Err(ContractViolation::ShortSlice));
    assert_eq!(tridiag(0, 0, 0), Ok(()));
}

#[test]
fn test_args_blas()
{
    let l = Layout::RowMajor;

    assert_eq!(gemv(l, Transpose::NoTrans, 2, 3, 6, 3, 3, 1, 2, 1), Ok(()));
    assert_eq!(gemv(l, Transpose::Trans, 2, 3, 6, 3, 3, 1, 2, 1), Err(ContractViolation::ShortSlice));
    assert_eq!(gemv(l, Transpose::Trans, 2, 3, 6, 3, 2, 1, 3, 1), Ok(()));
    assert_eq!(gemv(l, Transpose::NoTrans, 2, 3, 6, 3, 3, 0, 2, 1), Err(ContractViolation::BadIncrement));

    // (2x4)^T * (2x3)
    assert_eq!(gemm(l, Transpose::Trans, Transpose::NoTrans, 4, 3, 2, 8, 4, 6, 3, 12, 3), Ok(()));
    assert_eq!(gemm(l, Transpose::NoTrans, Transpose::NoTrans, 4, 3, 2, 8, 4, 6, 3, 12, 3), Err(ContractViolation::ShortSlice));

    assert_eq!(side_square(l, Side::Right, 2, 3, 9, 3, 6, 3), Ok(()));
    assert_eq!(side_square(l, Side::Left, 2, 3, 9, 3, 6, 3), Ok(()));
    assert_eq!(side_square(l, Side::Left, 2, 3, 9, 1, 6, 3), Err(ContractViolation::BadStride));
    assert_eq!(syrk(l, Transpose::Trans, 3, 2, 6, 3, 9, 3), Ok(()));
}

#[test]
fn test_args_laswp()
{
    let l = Layout::RowMajor;

    // rows are those of k2 and of every pivot referenced
    assert_eq!(laswp(l, 2, 6, 2, 0, 1, &[2, 2], 1), Ok(3));
    assert_eq!(laswp(l, 2, 4, 2, 0, 1, &[1, 1], -1), Ok(2));
    assert_eq!(laswp(l, 2, 4, 2, 0, 1, &[2, 2], 1), Err(ContractViolation::ShortSlice));
    assert_eq!(laswp(l, 2, 6, 2, 0, 1, &[2], 1), Err(ContractViolation::BadPivot));
    assert_eq!(laswp(l, 2, 6, 2, 1, 0, &[2, 2], 1), Err(ContractViolation::BadDimension));
    assert_eq!(laswp(l, 2, 6, 2, 0, 1, &[2, 2], 2), Err(ContractViolation::BadIncrement));
    // pivots before k1 are not referenced
    assert_eq!(laswp(Layout::ColumnMajor, 1, 2, 2, 1, 1, &[9, 1], 1), Ok(2));
}

#[test]
fn test_args_orthogonal()
{
    let l = Layout::ColumnMajor;

    assert_eq!(geqp3(l, 3, 2, 6, 3, 2, 2), Ok(()));
    assert_eq!(geqp3(l, 3, 2, 6, 3, 1, 2), Err(ContractViolation::BadPivot));

    assert_eq!(orgqr(l, 3, 2, 2, 6, 3, 2), Ok(()));
    assert_eq!(orgqr(l, 2, 3, 2, 6, 2, 2), Err(ContractViolation::BadDimension));
    assert_eq!(orgqr(l, 3, 2, 2, 6, 3, 1), Err(ContractViolation::ShortSlice));
    assert_eq!(orglq(l, 2, 3, 2, 6, 2, 2), Ok(()));
    assert_eq!(orglq(l, 3, 2, 2, 6, 3, 2), Err(ContractViolation::BadDimension));

    // Q from a 2x4 LQ applied to a 4x3 matrix from the left; a is k x m
    assert_eq!(ormlq(l, Side::Left, 4, 3, 2, 8, 2, 2, 12, 4), Ok(()));
    assert_eq!(ormlq(l, Side::Left, 4, 3, 2, 8, 4, 2, 12, 4), Err(ContractViolation::ShortSlice));
    assert_eq!(ormlq(Layout::RowMajor, Side::Right, 3, 4, 2, 8, 4, 2, 12, 4), Ok(()));
    assert_eq!(ormlq(l, Side::Right, 4, 3, 4, 12, 4, 4, 12, 4), Err(ContractViolation::BadDimension));
}

#[test]
fn test_args_geev()
{
    let l = Layout::RowMajor;

    assert_eq!(geev(l, EvJob::None, EvJob::Compute, 2, 4, 2, 2, 2, 0, 1, 4, 2), Ok(()));
    assert_eq!(geev(l, EvJob::None, EvJob::None, 2, 4, 2, 2, 1, 0, 1, 0, 1), Err(ContractViolation::ShortSlice));
    assert_eq!(geev(l, EvJob::None, EvJob::None, 2, 4, 2, 2, 2, 0, 0, 0, 1), Err(ContractViolation::BadStride));
    assert_eq!(geev(l, EvJob::Compute, EvJob::None, 2, 4, 2, 2, 2, 4, 1, 0, 1), Err(ContractViolation::BadStride));
}

#[test]
fn test_args_blas_ex()
{
    let l = Layout::RowMajor;

    assert_eq!(strided(3, 5, 2), Ok(()));
    assert_eq!(strided(3, 5, -2), Err(ContractViolation::BadIncrement));
    assert_eq!(vectors(3, 5, -2, 3, 1), Ok(()));
    assert_eq!(vectors(3, 5, 2, 2, 1), Err(ContractViolation::ShortSlice));

    assert_eq!(trmv(l, 2, 4, 2, 2, 1), Ok(()));
    assert_eq!(symv(l, 2, 4, 2, 2, 1, 3, 2), Ok(()));
    assert_eq!(symv(l, 2, 4, 2, 2, 1, 2, 2), Err(ContractViolation::ShortSlice));
    // 3x2 outer product
    assert_eq!(ger(l, 3, 2, 3, 1, 2, 1, 6, 2), Ok(()));
    assert_eq!(ger(l, 3, 2, 2, 1, 3, 1, 6, 2), Err(ContractViolation::ShortSlice));
    assert_eq!(syr(l, 2, 2, 1, 4, 1), Err(ContractViolation::BadStride));
    assert_eq!(syr2(l, 2, 2, 1, 2, 0, 4, 2), Err(ContractViolation::BadIncrement));
    assert_eq!(syr2k(l, Transpose::NoTrans, 3, 2, 6, 2, 6, 2, 9, 3), Ok(()));
    assert_eq!(syr2k(l, Transpose::NoTrans, 3, 2, 6, 2, 4, 2, 9, 3), Err(ContractViolation::ShortSlice));
}
