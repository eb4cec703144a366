use num_traits::{Float, Zero};
use crate::{ContractViolation, Layout, Uplo, Transpose, Side, Diag, Part, Norm, SvdJob, EvJob, EvComp, Sort};

/// LAPACK routines trait.
///
/// Each routine checks its selectors and argument shapes,
/// marshals them for the native library and makes exactly one native call.
/// Return values follow two tiers:
/// * `Err(`[`ContractViolation`]`)` if an argument is rejected; the native library was not called.
/// * `Ok(true)` if the native status code is zero, `Ok(false)` otherwise.
///
/// Matrices are stored in `layout` order with a leading dimension `ld*`
/// (see [`crate::check_matrix`]); pivots are zero-based (see [`crate::pivot`]).
/// Names of routines follow the real routines;
/// complex implementations call the Hermitian/unitary counterparts
/// (`heev` for `syev`, `unmqr` for `ormqr`, `lanhe` for `lansy`, `ungqr` for `orgqr` and so on).
pub trait Lapack
{
    /// Element data type.
    type F: Copy + Zero;

    /// Real data type of norms, singular values and eigenvalues.
    type R: Float;

    /// `true` if [`Lapack::F`] is a complex type.
    const IS_COMPLEX: bool;

    /// Solves \\(AX=B\\) by LU factorization with partial pivoting.
    ///
    /// * `a` is `n`×`n` \\(A\\) before entry, its factors \\(L\\) and \\(U\\) on exit.
    /// * `ipiv` receives `n` pivots.
    /// * `b` is `n`×`nrhs` \\(B\\) before entry, \\(X\\) on exit.
    ///
    /// Returns `Ok(false)` if \\(A\\) is exactly singular.
    fn gesv(layout: Layout, n: usize, nrhs: usize, a: &mut[Self::F], lda: usize, ipiv: &mut[usize], b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Computes the LU factorization \\(A=PLU\\) of an `m`×`n` matrix.
    ///
    /// * `a` is \\(A\\) before entry, \\(L\\) (unit diagonal not stored) and \\(U\\) on exit.
    /// * `ipiv` receives `min(m, n)` pivots; row `i` was interchanged with row `ipiv[i]`.
    ///
    /// Returns `Ok(false)` if \\(U\\) is exactly singular; the factorization is completed regardless.
    fn getrf(layout: Layout, m: usize, n: usize, a: &mut[Self::F], lda: usize, ipiv: &mut[usize]) -> Result<bool, ContractViolation>;

    /// Solves \\(\mathrm{trans}(A)X=B\\) using the LU factorization from [`Lapack::getrf`].
    ///
    /// * `a` and `ipiv` are the factors and the `n` pivots of the `n`×`n` \\(A\\).
    ///   Every pivot shall be less than `n`.
    /// * `b` is `n`×`nrhs` \\(B\\) before entry, \\(X\\) on exit.
    fn getrs(layout: Layout, trans: Transpose, n: usize, nrhs: usize, a: &[Self::F], lda: usize, ipiv: &[usize], b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Computes \\(A^{-1}\\) using the LU factorization from [`Lapack::getrf`].
    ///
    /// Returns `Ok(false)` if \\(A\\) is singular; `a` is not inverted then.
    fn getri(layout: Layout, n: usize, a: &mut[Self::F], lda: usize, ipiv: &[usize]) -> Result<bool, ContractViolation>;

    /// Interchanges rows of a matrix of `n` columns.
    ///
    /// * `ipiv` holds at least `k2 + 1` pivots as from [`Lapack::getrf`];
    ///   row `i` is interchanged with row `ipiv[i]` for each `i` from `k1` to `k2` inclusive.
    /// * `incx` is `1` to apply them in increasing order of `i` or `-1` in decreasing order.
    /// * `a` shall have as many rows as `k2 + 1` and every pivot referenced need.
    fn laswp(layout: Layout, n: usize, a: &mut[Self::F], lda: usize, k1: usize, k2: usize, ipiv: &[usize], incx: isize) -> Result<bool, ContractViolation>;

    /// Computes the Cholesky factorization of a symmetric (Hermitian) positive definite matrix.
    ///
    /// * `uplo` selects \\(A=U^HU\\) stored in the upper triangle or \\(A=LL^H\\) in the lower triangle.
    ///
    /// Returns `Ok(false)` if \\(A\\) is not positive definite.
    fn potrf(layout: Layout, uplo: Uplo, n: usize, a: &mut[Self::F], lda: usize) -> Result<bool, ContractViolation>;

    /// Solves \\(AX=B\\) using the Cholesky factorization from [`Lapack::potrf`].
    fn potrs(layout: Layout, uplo: Uplo, n: usize, nrhs: usize, a: &[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Computes \\(A^{-1}\\) using the Cholesky factorization from [`Lapack::potrf`].
    /// Only the `uplo` triangle of the inverse is written.
    fn potri(layout: Layout, uplo: Uplo, n: usize, a: &mut[Self::F], lda: usize) -> Result<bool, ContractViolation>;

    /// Solves \\(AX=B\\) for a symmetric (Hermitian) positive definite \\(A\\) by Cholesky factorization.
    fn posv(layout: Layout, uplo: Uplo, n: usize, nrhs: usize, a: &mut[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Estimates the reciprocal of the 1-norm condition number of a symmetric (Hermitian) positive definite matrix
    /// using the Cholesky factorization from [`Lapack::potrf`].
    ///
    /// * `anorm` is the 1-norm of the original matrix, see [`Lapack::lansy`].
    /// * `rcond` receives the estimate.
    fn pocon(layout: Layout, uplo: Uplo, n: usize, a: &[Self::F], lda: usize, anorm: Self::R, rcond: &mut Self::R) -> Result<bool, ContractViolation>;

    /// Solves \\(\mathrm{trans}(A)X=B\\) for a triangular \\(A\\).
    ///
    /// Returns `Ok(false)` if a diagonal element of \\(A\\) is zero.
    fn trtrs(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, nrhs: usize, a: &[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Computes the inverse of a triangular matrix in place.
    fn trtri(layout: Layout, uplo: Uplo, diag: Diag, n: usize, a: &mut[Self::F], lda: usize) -> Result<bool, ContractViolation>;

    /// Computes the QR factorization \\(A=QR\\) of an `m`×`n` matrix.
    ///
    /// * `a` is \\(A\\) before entry, \\(R\\) and the reflectors of \\(Q\\) on exit.
    /// * `tau` receives `min(m, n)` scalar factors of the reflectors.
    fn geqrf(layout: Layout, m: usize, n: usize, a: &mut[Self::F], lda: usize, tau: &mut[Self::F]) -> Result<bool, ContractViolation>;

    /// Computes the LQ factorization \\(A=LQ\\) of an `m`×`n` matrix.
    fn gelqf(layout: Layout, m: usize, n: usize, a: &mut[Self::F], lda: usize, tau: &mut[Self::F]) -> Result<bool, ContractViolation>;

    /// Computes the QR factorization with column pivoting \\(AP=QR\\) of an `m`×`n` matrix.
    ///
    /// * `a` is \\(A\\) before entry, \\(R\\) and the reflectors of \\(Q\\) on exit.
    /// * `jpvt` receives `n` column indices; column `j` of \\(AP\\) was column `jpvt[j]` of \\(A\\).
    ///   Every column is free to move.
    /// * `tau` receives `min(m, n)` scalar factors of the reflectors.
    fn geqp3(layout: Layout, m: usize, n: usize, a: &mut[Self::F], lda: usize, jpvt: &mut[usize], tau: &mut[Self::F]) -> Result<bool, ContractViolation>;

    /// Solves an overdetermined or underdetermined full-rank system \\(\mathrm{trans}(A)X=B\\) in the least squares sense.
    ///
    /// * `a` is `m`×`n` \\(A\\), overwritten by its QR or LQ factorization.
    /// * `b` is `max(m, n)`×`nrhs`, holding \\(B\\) before entry and \\(X\\) on exit.
    /// * `trans` is applicable as described in [`crate::args::orthogonal_trans`].
    ///
    /// Returns `Ok(false)` if \\(A\\) is not of full rank.
    fn gels(layout: Layout, trans: Transpose, m: usize, n: usize, nrhs: usize, a: &mut[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Multiplies `m`×`n` \\(C\\) by \\(\mathrm{trans}(Q)\\) from `side`,
    /// where \\(Q\\) is given by `k` reflectors from [`Lapack::geqrf`].
    ///
    /// * `trans` is applicable as described in [`crate::args::orthogonal_trans`].
    fn ormqr(layout: Layout, side: Side, trans: Transpose, m: usize, n: usize, k: usize, a: &[Self::F], lda: usize, tau: &[Self::F], c: &mut[Self::F], ldc: usize) -> Result<bool, ContractViolation>;

    /// Multiplies `m`×`n` \\(C\\) by \\(\mathrm{trans}(Q)\\) from `side`,
    /// where \\(Q\\) is given by `k` reflectors from [`Lapack::gelqf`] stored by rows.
    ///
    /// * `trans` is applicable as described in [`crate::args::orthogonal_trans`].
    fn ormlq(layout: Layout, side: Side, trans: Transpose, m: usize, n: usize, k: usize, a: &[Self::F], lda: usize, tau: &[Self::F], c: &mut[Self::F], ldc: usize) -> Result<bool, ContractViolation>;

    /// Generates `m`×`n` \\(Q\\) with orthonormal columns from `k` reflectors of [`Lapack::geqrf`],
    /// where `m >= n >= k`.
    ///
    /// * `a` holds the reflectors by columns before entry, \\(Q\\) on exit.
    fn orgqr(layout: Layout, m: usize, n: usize, k: usize, a: &mut[Self::F], lda: usize, tau: &[Self::F]) -> Result<bool, ContractViolation>;

    /// Generates `m`×`n` \\(Q\\) with orthonormal rows from `k` reflectors of [`Lapack::gelqf`],
    /// where `n >= m >= k`.
    ///
    /// * `a` holds the reflectors by rows before entry, \\(Q\\) on exit.
    fn orglq(layout: Layout, m: usize, n: usize, k: usize, a: &mut[Self::F], lda: usize, tau: &[Self::F]) -> Result<bool, ContractViolation>;

    /// Computes a norm of an `m`×`n` matrix.
    ///
    /// Returns the norm.
    fn lange(layout: Layout, norm: Norm, m: usize, n: usize, a: &[Self::F], lda: usize) -> Result<Self::R, ContractViolation>;

    /// Computes a norm of an `m`×`n` trapezoidal or triangular matrix.
    ///
    /// Returns the norm.
    fn lantr(layout: Layout, norm: Norm, uplo: Uplo, diag: Diag, m: usize, n: usize, a: &[Self::F], lda: usize) -> Result<Self::R, ContractViolation>;

    /// Computes a norm of an `n`×`n` symmetric (Hermitian) matrix stored in the `uplo` triangle.
    ///
    /// Returns the norm.
    fn lansy(layout: Layout, norm: Norm, uplo: Uplo, n: usize, a: &[Self::F], lda: usize) -> Result<Self::R, ContractViolation>;

    /// Estimates the reciprocal condition number of a general matrix
    /// using the LU factorization from [`Lapack::getrf`].
    ///
    /// * `norm` is [`Norm::MaxColumnSum`] or [`Norm::MaxRowSum`].
    /// * `anorm` is the `norm` of the original matrix.
    /// * `rcond` receives the estimate.
    fn gecon(layout: Layout, norm: Norm, n: usize, a: &[Self::F], lda: usize, anorm: Self::R, rcond: &mut Self::R) -> Result<bool, ContractViolation>;

    /// Estimates the reciprocal condition number of a triangular matrix.
    fn trcon(layout: Layout, norm: Norm, uplo: Uplo, diag: Diag, n: usize, a: &[Self::F], lda: usize, rcond: &mut Self::R) -> Result<bool, ContractViolation>;

    /// Computes eigenvalues and optionally eigenvectors of a symmetric (Hermitian) matrix.
    ///
    /// * `a` holds \\(A\\) in the `uplo` triangle before entry,
    ///   orthonormal eigenvectors by columns on exit if `jobz` is [`EvJob::Compute`].
    /// * `w` receives `n` eigenvalues in ascending order.
    ///
    /// Returns `Ok(false)` if the algorithm failed to converge.
    fn syev(layout: Layout, jobz: EvJob, uplo: Uplo, n: usize, a: &mut[Self::F], lda: usize, w: &mut[Self::R]) -> Result<bool, ContractViolation>;

    /// Computes eigenvalues and optionally left and right eigenvectors of a general `n`×`n` matrix.
    ///
    /// * `a` is destroyed on exit.
    /// * `wr` and `wi` receive real and imaginary parts of `n` eigenvalues.
    ///   On real backends complex conjugate pairs appear consecutively, the one with the positive imaginary part first.
    /// * `vl` and `vr` receive left and right eigenvectors by columns if `jobvl` and `jobvr` are [`EvJob::Compute`].
    ///   They are `n`×`n`, or not referenced but still need a positive leading dimension.
    ///   On real backends the eigenvectors of a conjugate pair \\(v_j \pm i v_{j+1}\\) are stored in columns `j` and `j + 1`.
    ///
    /// Returns `Ok(false)` if the QR algorithm failed to compute all the eigenvalues.
    fn geev(layout: Layout, jobvl: EvJob, jobvr: EvJob, n: usize, a: &mut[Self::F], lda: usize, wr: &mut[Self::R], wi: &mut[Self::R],
        vl: &mut[Self::F], ldvl: usize, vr: &mut[Self::F], ldvr: usize) -> Result<bool, ContractViolation>;

    /// Computes the singular value decomposition \\(A=U\Sigma V^H\\) of an `m`×`n` matrix.
    ///
    /// * `a` is destroyed on exit.
    /// * `s` receives `min(m, n)` singular values in descending order.
    /// * `u` and `vt` receive singular vectors as selected by `jobu` and `jobvt`,
    ///   see [`crate::args::gesvd`] for their shapes. [`SvdJob::Overwrite`] is not supported.
    /// * `superb` receives `min(m, n) - 1` unconverged superdiagonal elements on failure.
    ///
    /// Returns `Ok(false)` if the algorithm failed to converge.
    fn gesvd(layout: Layout, jobu: SvdJob, jobvt: SvdJob, m: usize, n: usize, a: &mut[Self::F], lda: usize,
        s: &mut[Self::R], u: &mut[Self::F], ldu: usize, vt: &mut[Self::F], ldvt: usize, superb: &mut[Self::R]) -> Result<bool, ContractViolation>;

    /// Computes eigenvalues and optionally eigenvectors of a symmetric tridiagonal matrix.
    ///
    /// * `d` holds `n` diagonal elements before entry, eigenvalues in ascending order on exit.
    /// * `e` holds `n - 1` off-diagonal elements, destroyed on exit.
    /// * `z` receives eigenvectors as selected by `compz`; it is not referenced for [`EvComp::None`].
    fn steqr(layout: Layout, compz: EvComp, n: usize, d: &mut[Self::R], e: &mut[Self::R], z: &mut[Self::F], ldz: usize) -> Result<bool, ContractViolation>;

    /// Computes eigenvalues of a symmetric tridiagonal matrix; see [`Lapack::steqr`] for `d` and `e`.
    fn sterf(n: usize, d: &mut[Self::R], e: &mut[Self::R]) -> Result<bool, ContractViolation>;

    /// Sorts `d` in the order of `sort`.
    fn lasrt(sort: Sort, d: &mut[Self::R]) -> Result<bool, ContractViolation>;

    /// Copies `part` of `m`×`n` \\(A\\) to \\(B\\).
    fn lacpy(layout: Layout, part: Part, m: usize, n: usize, a: &[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<bool, ContractViolation>;

    /// Sets the off-diagonal elements of `part` of `m`×`n` \\(A\\) to `alpha` and the diagonal elements to `beta`.
    fn laset(layout: Layout, part: Part, m: usize, n: usize, alpha: Self::F, beta: Self::F, a: &mut[Self::F], lda: usize) -> Result<bool, ContractViolation>;
}
