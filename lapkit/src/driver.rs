use core::marker::PhantomData;
use num_traits::{Zero, ToPrimitive};
use lapkit_core::{Lapack, Uplo, Transpose, Norm, EvJob, SvdJob};
use crate::{MatBuild, DriverError};

//

/// Driver parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverParam<R>
{
    /// Triangle of a symmetric (Hermitian) matrix
    /// read and written by [`Driver::cholesky`], [`Driver::solve_spd`] and [`Driver::eig_sym`].
    pub uplo: Uplo,
    /// Threshold of the reciprocal condition number below which [`Driver::solve`] gives up.
    /// `None` skips the estimation.
    pub eps_rcond: Option<R>,
}

impl<R> Default for DriverParam<R>
{
    fn default() -> Self
    {
        DriverParam {
            uplo: Uplo::Upper,
            eps_rcond: None,
        }
    }
}

//

/// High-level driver
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Combines [`Lapack`] routines of a backend `L` to operate on [`MatBuild`] matrices.
/// Matrices given together shall share one [`lapkit_core::Layout`];
/// a native failure comes out as [`DriverError::Failed`] rather than a boolean.
pub struct Driver<L: Lapack>
{
    ph_l: PhantomData<L>,

    /// Driver parameters.
    pub par: DriverParam<L::R>,
}

impl<L: Lapack> Driver<L>
{
    /// Creates an instance.
    ///
    /// Returns [`Driver`] instance.
    pub fn new() -> Self
    {
        Driver {
            ph_l: PhantomData,
            par: DriverParam::default(),
        }
    }

    /// Changes driver parameters.
    ///
    /// Returns [`Driver`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut DriverParam<L::R>)
    {
        f(&mut self.par);
        self
    }

    fn check(routine: &'static str, ok: bool) -> Result<(), DriverError>
    {
        if ok {
            Ok(())
        }
        else {
            log::debug!("{} reported a failure", routine);
            Err(DriverError::Failed(routine))
        }
    }

    fn square(a: &MatBuild<L::F>) -> Result<usize, DriverError>
    {
        let (m, n) = a.size();
        if m != n {
            log::error!("Size mismatch: a({}, {}) is not square", m, n);
            return Err(DriverError::Shape);
        }
        Ok(n)
    }

    fn rhs(a: &MatBuild<L::F>, b: &MatBuild<L::F>) -> Result<usize, DriverError>
    {
        let (m, _) = a.size();
        let (bm, nrhs) = b.size();
        if bm != m || b.layout() != a.layout() {
            log::error!("Size mismatch: a{:?} {:?}, b{:?} {:?}", a.size(), a.layout(), b.size(), b.layout());
            return Err(DriverError::Shape);
        }
        Ok(nrhs)
    }

    /// LU factorization with partial pivoting.
    ///
    /// Returns zero-based pivots; `a` is overwritten by its factors \\(L\\) and \\(U\\).
    /// An exactly singular \\(A\\) is [`DriverError::Failed`].
    pub fn lu(&self, a: &mut MatBuild<L::F>) -> Result<Vec<usize>, DriverError>
    {
        let (m, n) = a.size();
        let (layout, lda) = (a.layout(), a.ld());
        let mut ipiv = vec![0; m.min(n)];

        Self::check("getrf", L::getrf(layout, m, n, a.as_mut_slice(), lda, &mut ipiv)?)?;

        Ok(ipiv)
    }

    /// Solves \\(AX=B\\) for a square \\(A\\).
    ///
    /// * `a` is destroyed on exit.
    /// * `b` is \\(B\\) before entry, \\(X\\) on exit.
    ///
    /// If [`DriverParam::eps_rcond`] is set, the 1-norm reciprocal condition number is estimated
    /// between the factorization and the substitution, and [`DriverError::IllConditioned`] is returned
    /// without touching `b` if the estimate is below it.
    pub fn solve(&self, a: &mut MatBuild<L::F>, b: &mut MatBuild<L::F>) -> Result<(), DriverError>
    {
        let n = Self::square(a)?;
        let nrhs = Self::rhs(a, b)?;
        let (layout, lda, ldb) = (a.layout(), a.ld(), b.ld());
        let mut ipiv = vec![0; n];

        if let Some(eps_rcond) = self.par.eps_rcond {
            let anorm = L::lange(layout, Norm::MaxColumnSum, n, n, a.as_slice(), lda)?;

            Self::check("getrf", L::getrf(layout, n, n, a.as_mut_slice(), lda, &mut ipiv)?)?;

            let mut rcond = L::R::zero();
            Self::check("gecon", L::gecon(layout, Norm::MaxColumnSum, n, a.as_slice(), lda, anorm, &mut rcond)?)?;
            log::debug!("rcond {:.3e}", rcond.to_f64().unwrap_or(f64::NAN));

            if rcond < eps_rcond {
                return Err(DriverError::IllConditioned);
            }

            Self::check("getrs", L::getrs(layout, Transpose::NoTrans, n, nrhs, a.as_slice(), lda, &ipiv, b.as_mut_slice(), ldb)?)
        }
        else {
            Self::check("gesv", L::gesv(layout, n, nrhs, a.as_mut_slice(), lda, &mut ipiv, b.as_mut_slice(), ldb)?)
        }
    }

    /// Inverts a square \\(A\\) in place.
    pub fn inv(&self, a: &mut MatBuild<L::F>) -> Result<(), DriverError>
    {
        let n = Self::square(a)?;
        let (layout, lda) = (a.layout(), a.ld());
        let mut ipiv = vec![0; n];

        Self::check("getrf", L::getrf(layout, n, n, a.as_mut_slice(), lda, &mut ipiv)?)?;
        Self::check("getri", L::getri(layout, n, a.as_mut_slice(), lda, &ipiv)?)
    }

    /// Cholesky factorization of a positive definite \\(A\\).
    ///
    /// The [`DriverParam::uplo`] triangle of `a` is overwritten by the factor; the other is untouched.
    pub fn cholesky(&self, a: &mut MatBuild<L::F>) -> Result<(), DriverError>
    {
        let n = Self::square(a)?;
        let (layout, lda) = (a.layout(), a.ld());

        Self::check("potrf", L::potrf(layout, self.par.uplo, n, a.as_mut_slice(), lda)?)
    }

    /// Solves \\(AX=B\\) for a positive definite \\(A\\) given in the [`DriverParam::uplo`] triangle.
    ///
    /// * `a` is overwritten by its Cholesky factor.
    /// * `b` is \\(B\\) before entry, \\(X\\) on exit.
    pub fn solve_spd(&self, a: &mut MatBuild<L::F>, b: &mut MatBuild<L::F>) -> Result<(), DriverError>
    {
        let n = Self::square(a)?;
        let nrhs = Self::rhs(a, b)?;
        let (layout, lda, ldb) = (a.layout(), a.ld(), b.ld());

        Self::check("posv", L::posv(layout, self.par.uplo, n, nrhs, a.as_mut_slice(), lda, b.as_mut_slice(), ldb)?)
    }

    /// Least squares (or minimum norm) solution of \\(AX=B\\) for a full-rank \\(A\\).
    ///
    /// * `a` is `m`×`n` and destroyed on exit.
    /// * `b` is `m`×`nrhs`.
    ///
    /// Returns `n`×`nrhs` \\(X\\).
    pub fn lstsq(&self, a: &mut MatBuild<L::F>, b: &MatBuild<L::F>) -> Result<MatBuild<L::F>, DriverError>
    {
        let (m, n) = a.size();
        let nrhs = Self::rhs(a, b)?;
        let (layout, lda) = (a.layout(), a.ld());

        let mut x = MatBuild::new(layout, m.max(n), nrhs)
                    .by_fn(|r, c| if r < m {b[(r, c)]} else {L::F::zero()});
        let ldx = x.ld();

        Self::check("gels", L::gels(layout, Transpose::NoTrans, m, n, nrhs, a.as_mut_slice(), lda, x.as_mut_slice(), ldx)?)?;

        Ok(MatBuild::new(layout, n, nrhs).by_fn(|r, c| x[(r, c)]))
    }

    /// Eigenvalues of a symmetric (Hermitian) \\(A\\) given in the [`DriverParam::uplo`] triangle.
    ///
    /// Returns eigenvalues in ascending order.
    /// If `vectors` is `true`, `a` is overwritten by the corresponding orthonormal eigenvectors by columns,
    /// otherwise it is destroyed.
    pub fn eig_sym(&self, a: &mut MatBuild<L::F>, vectors: bool) -> Result<Vec<L::R>, DriverError>
    {
        let n = Self::square(a)?;
        let (layout, lda) = (a.layout(), a.ld());
        let jobz = if vectors {EvJob::Compute} else {EvJob::None};
        let mut w = vec![L::R::zero(); n];

        Self::check("syev", L::syev(layout, jobz, self.par.uplo, n, a.as_mut_slice(), lda, &mut w)?)?;

        Ok(w)
    }

    /// Thin singular value decomposition \\(A = U \mathrm{diag}(s) V^H\\).
    ///
    /// `a` is `m`×`n` and destroyed on exit.
    ///
    /// Returns a tuple of singular values in descending order, `m`×`min(m, n)` \\(U\\)
    /// and `min(m, n)`×`n` \\(V^H\\), in the layout of `a`.
    pub fn svd(&self, a: &mut MatBuild<L::F>) -> Result<(Vec<L::R>, MatBuild<L::F>, MatBuild<L::F>), DriverError>
    {
        let (m, n) = a.size();
        let mn = m.min(n);
        let (layout, lda) = (a.layout(), a.ld());

        let mut s = vec![L::R::zero(); mn];
        let mut u = MatBuild::new(layout, m, mn);
        let mut vt = MatBuild::new(layout, mn, n);
        let mut superb = vec![L::R::zero(); mn.saturating_sub(1)];
        let (ldu, ldvt) = (u.ld(), vt.ld());

        Self::check("gesvd", L::gesvd(layout, SvdJob::Thin, SvdJob::Thin, m, n, a.as_mut_slice(), lda,
            &mut s, u.as_mut_slice(), ldu, vt.as_mut_slice(), ldvt, &mut superb)?)?;

        Ok((s, u, vt))
    }

    /// Computes a `norm` of \\(A\\).
    pub fn norm(&self, norm: Norm, a: &MatBuild<L::F>) -> Result<L::R, DriverError>
    {
        let (m, n) = a.size();

        Ok(L::lange(a.layout(), norm, m, n, a.as_slice(), a.ld())?)
    }

    /// Estimates the reciprocal of the 1-norm condition number of a square \\(A\\).
    ///
    /// Returns zero if \\(A\\) is exactly singular.
    pub fn rcond(&self, a: &MatBuild<L::F>) -> Result<L::R, DriverError>
    {
        let n = Self::square(a)?;
        let (layout, lda) = (a.layout(), a.ld());

        let anorm = L::lange(layout, Norm::MaxColumnSum, n, n, a.as_slice(), lda)?;

        let mut lu = a.clone();
        let mut ipiv = vec![0; n];
        if !L::getrf(layout, n, n, lu.as_mut_slice(), lda, &mut ipiv)? {
            return Ok(L::R::zero());
        }

        let mut rcond = L::R::zero();
        Self::check("gecon", L::gecon(layout, Norm::MaxColumnSum, n, lu.as_slice(), lda, anorm, &mut rcond)?)?;

        Ok(rcond)
    }
}

impl<L: Lapack> Default for Driver<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}
