// Implementations of `Lapack`, `Blas` and `BlasEx` for one precision,
// given the names of its native routines.
//
// Every routine runs its `lapkit_core::args` checker first;
// dimensions are known to fit `i32` after that.

// `geev` of real routines returns real and imaginary parts of eigenvalues apart,
// that of complex routines returns them as complex numbers to be split.
macro_rules! geev_native {
    (
        real, $geev:ident, $f:ty,
        $layout:expr, $jobvl:expr, $jobvr:expr, $n:expr,
        $a:expr, $lda:expr, $wr:expr, $wi:expr, $vl:expr, $ldvl:expr, $vr:expr, $ldvr:expr
    ) => {
        unsafe {
            lapacke::$geev(
                $layout, $jobvl, $jobvr, $n as i32,
                $a, $lda as i32, $wr, $wi,
                $vl, $ldvl as i32,
                $vr, $ldvr as i32)
        }
    };
    (
        complex, $geev:ident, $f:ty,
        $layout:expr, $jobvl:expr, $jobvr:expr, $n:expr,
        $a:expr, $lda:expr, $wr:expr, $wi:expr, $vl:expr, $ldvl:expr, $vr:expr, $ldvr:expr
    ) => {
        {
            let mut w = vec![<$f>::default(); $n];
            let info = unsafe {
                lapacke::$geev(
                    $layout, $jobvl, $jobvr, $n as i32,
                    $a, $lda as i32, &mut w,
                    $vl, $ldvl as i32,
                    $vr, $ldvr as i32)
            };
            for ((re, im), w) in $wr.iter_mut().zip($wi.iter_mut()).zip(&w) {
                *re = w.re;
                *im = w.im;
            }
            info
        }
    };
}

pub(crate) use geev_native;

//

macro_rules! impl_lapack {
    (
        $la:ident, $f:ty, $r:ty, $complex:literal, {
            gesv: $gesv:ident, getrf: $getrf:ident, getrs: $getrs:ident, getri: $getri:ident,
            potrf: $potrf:ident, potrs: $potrs:ident, potri: $potri:ident, posv: $posv:ident,
            trtrs: $trtrs:ident, trtri: $trtri:ident,
            geqrf: $geqrf:ident, gelqf: $gelqf:ident, gels: $gels:ident, ormqr: $ormqr:ident,
            lange: $lange:ident, lantr: $lantr:ident, gecon: $gecon:ident, trcon: $trcon:ident,
            syev: $syev:ident, gesvd: $gesvd:ident, steqr: $steqr:ident, sterf: $sterf:ident, lasrt: $lasrt:ident,
            lacpy: $lacpy:ident, laset: $laset:ident,
            laswp: $laswp:ident, pocon: $pocon:ident, geqp3: $geqp3:ident,
            ormlq: $ormlq:ident, orgqr: $orgqr:ident, orglq: $orglq:ident,
            lansy: $lansy:ident, geev: $geev_kind:ident $geev:ident $(,)?
        }
    ) => {
        impl lapkit_core::Lapack for $la
        {
            type F = $f;
            type R = $r;

            const IS_COMPLEX: bool = $complex;

            fn gesv(layout: Layout, n: usize, nrhs: usize, a: &mut[$f], lda: usize, ipiv: &mut[usize], b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($gesv), args::gesv(layout, n, nrhs, a.len(), lda, ipiv.len(), b.len(), ldb))?;

                let mut ipiv_native = vec![0; n];
                let info = unsafe {
                    lapacke::$gesv(
                        lapacke_layout(layout), n as i32, nrhs as i32,
                        a, lda as i32, &mut ipiv_native,
                        b, ldb as i32)
                };
                pivot::from_native(&ipiv_native, ipiv)?;

                Ok(interpret(stringify!($gesv), info))
            }

            fn getrf(layout: Layout, m: usize, n: usize, a: &mut[$f], lda: usize, ipiv: &mut[usize]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($getrf), args::getrf(layout, m, n, a.len(), lda, ipiv.len()))?;

                let mut ipiv_native = vec![0; m.min(n)];
                let info = unsafe {
                    lapacke::$getrf(
                        lapacke_layout(layout), m as i32, n as i32,
                        a, lda as i32, &mut ipiv_native)
                };
                pivot::from_native(&ipiv_native, ipiv)?;

                Ok(interpret(stringify!($getrf), info))
            }

            fn getrs(layout: Layout, trans: Transpose, n: usize, nrhs: usize, a: &[$f], lda: usize, ipiv: &[usize], b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($getrs), args::getrs(layout, n, nrhs, a.len(), lda, ipiv.len(), b.len(), ldb))?;

                let mut ipiv_native = vec![0; n];
                checked(stringify!($getrs), pivot::to_native(&ipiv[.. n], n, &mut ipiv_native))?;
                let info = unsafe {
                    lapacke::$getrs(
                        lapacke_layout(layout), trans.code(), n as i32, nrhs as i32,
                        a, lda as i32, &ipiv_native,
                        b, ldb as i32)
                };

                Ok(interpret(stringify!($getrs), info))
            }

            fn getri(layout: Layout, n: usize, a: &mut[$f], lda: usize, ipiv: &[usize]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($getri), args::getri(layout, n, a.len(), lda, ipiv.len()))?;

                let mut ipiv_native = vec![0; n];
                checked(stringify!($getri), pivot::to_native(&ipiv[.. n], n, &mut ipiv_native))?;
                let info = unsafe {
                    lapacke::$getri(
                        lapacke_layout(layout), n as i32,
                        a, lda as i32, &ipiv_native)
                };

                Ok(interpret(stringify!($getri), info))
            }

            fn laswp(layout: Layout, n: usize, a: &mut[$f], lda: usize, k1: usize, k2: usize, ipiv: &[usize], incx: isize) -> Result<bool, ContractViolation>
            {
                let rows = checked(stringify!($laswp), args::laswp(layout, n, a.len(), lda, k1, k2, ipiv, incx))?;

                // pivots before k1 are not referenced
                let mut ipiv_native = vec![1; k2 + 1];
                checked(stringify!($laswp), pivot::to_native(&ipiv[k1..= k2], rows, &mut ipiv_native[k1..]))?;
                let info = unsafe {
                    lapacke::$laswp(
                        lapacke_layout(layout), n as i32,
                        a, lda as i32,
                        k1 as i32 + 1, k2 as i32 + 1, &ipiv_native, incx as i32)
                };

                Ok(interpret(stringify!($laswp), info))
            }

            fn potrf(layout: Layout, uplo: Uplo, n: usize, a: &mut[$f], lda: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($potrf), args::square(layout, n, a.len(), lda))?;

                if n == 0 {
                    return Ok(true);
                }

                let info = unsafe {
                    lapacke::$potrf(
                        lapacke_layout(layout), uplo.code(), n as i32,
                        a, lda as i32)
                };

                Ok(interpret(stringify!($potrf), info))
            }

            fn potrs(layout: Layout, uplo: Uplo, n: usize, nrhs: usize, a: &[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($potrs), args::square_system(layout, n, nrhs, a.len(), lda, b.len(), ldb))?;

                let info = unsafe {
                    lapacke::$potrs(
                        lapacke_layout(layout), uplo.code(), n as i32, nrhs as i32,
                        a, lda as i32,
                        b, ldb as i32)
                };

                Ok(interpret(stringify!($potrs), info))
            }

            fn potri(layout: Layout, uplo: Uplo, n: usize, a: &mut[$f], lda: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($potri), args::square(layout, n, a.len(), lda))?;

                let info = unsafe {
                    lapacke::$potri(
                        lapacke_layout(layout), uplo.code(), n as i32,
                        a, lda as i32)
                };

                Ok(interpret(stringify!($potri), info))
            }

            fn posv(layout: Layout, uplo: Uplo, n: usize, nrhs: usize, a: &mut[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($posv), args::square_system(layout, n, nrhs, a.len(), lda, b.len(), ldb))?;

                let info = unsafe {
                    lapacke::$posv(
                        lapacke_layout(layout), uplo.code(), n as i32, nrhs as i32,
                        a, lda as i32,
                        b, ldb as i32)
                };

                Ok(interpret(stringify!($posv), info))
            }

            fn pocon(layout: Layout, uplo: Uplo, n: usize, a: &[$f], lda: usize, anorm: $r, rcond: &mut $r) -> Result<bool, ContractViolation>
            {
                checked(stringify!($pocon), args::square(layout, n, a.len(), lda))?;

                let info = unsafe {
                    lapacke::$pocon(
                        lapacke_layout(layout), uplo.code(), n as i32,
                        a, lda as i32, anorm, rcond)
                };

                Ok(interpret(stringify!($pocon), info))
            }

            fn trtrs(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, nrhs: usize, a: &[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($trtrs), args::square_system(layout, n, nrhs, a.len(), lda, b.len(), ldb))?;

                let info = unsafe {
                    lapacke::$trtrs(
                        lapacke_layout(layout), uplo.code(), trans.code(), diag.code(), n as i32, nrhs as i32,
                        a, lda as i32,
                        b, ldb as i32)
                };

                Ok(interpret(stringify!($trtrs), info))
            }

            fn trtri(layout: Layout, uplo: Uplo, diag: Diag, n: usize, a: &mut[$f], lda: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($trtri), args::square(layout, n, a.len(), lda))?;

                let info = unsafe {
                    lapacke::$trtri(
                        lapacke_layout(layout), uplo.code(), diag.code(), n as i32,
                        a, lda as i32)
                };

                Ok(interpret(stringify!($trtri), info))
            }

            fn geqrf(layout: Layout, m: usize, n: usize, a: &mut[$f], lda: usize, tau: &mut[$f]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($geqrf), args::factor_tau(layout, m, n, a.len(), lda, tau.len()))?;

                let info = unsafe {
                    lapacke::$geqrf(
                        lapacke_layout(layout), m as i32, n as i32,
                        a, lda as i32, tau)
                };

                Ok(interpret(stringify!($geqrf), info))
            }

            fn gelqf(layout: Layout, m: usize, n: usize, a: &mut[$f], lda: usize, tau: &mut[$f]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($gelqf), args::factor_tau(layout, m, n, a.len(), lda, tau.len()))?;

                let info = unsafe {
                    lapacke::$gelqf(
                        lapacke_layout(layout), m as i32, n as i32,
                        a, lda as i32, tau)
                };

                Ok(interpret(stringify!($gelqf), info))
            }

            fn geqp3(layout: Layout, m: usize, n: usize, a: &mut[$f], lda: usize, jpvt: &mut[usize], tau: &mut[$f]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($geqp3), args::geqp3(layout, m, n, a.len(), lda, jpvt.len(), tau.len()))?;

                // zero marks every column free
                let mut jpvt_native = vec![0; n];
                let info = unsafe {
                    lapacke::$geqp3(
                        lapacke_layout(layout), m as i32, n as i32,
                        a, lda as i32, &mut jpvt_native, tau)
                };
                pivot::from_native(&jpvt_native, jpvt)?;

                Ok(interpret(stringify!($geqp3), info))
            }

            fn gels(layout: Layout, trans: Transpose, m: usize, n: usize, nrhs: usize, a: &mut[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                let trans = checked(stringify!($gels), args::orthogonal_trans(trans, $complex))?;
                checked(stringify!($gels), args::gels(layout, m, n, nrhs, a.len(), lda, b.len(), ldb))?;

                let info = unsafe {
                    lapacke::$gels(
                        lapacke_layout(layout), trans, m as i32, n as i32, nrhs as i32,
                        a, lda as i32,
                        b, ldb as i32)
                };

                Ok(interpret(stringify!($gels), info))
            }

            fn ormqr(layout: Layout, side: Side, trans: Transpose, m: usize, n: usize, k: usize, a: &[$f], lda: usize, tau: &[$f], c: &mut[$f], ldc: usize) -> Result<bool, ContractViolation>
            {
                let trans = checked(stringify!($ormqr), args::orthogonal_trans(trans, $complex))?;
                checked(stringify!($ormqr), args::ormqr(layout, side, m, n, k, a.len(), lda, tau.len(), c.len(), ldc))?;

                let info = unsafe {
                    lapacke::$ormqr(
                        lapacke_layout(layout), side.code(), trans, m as i32, n as i32, k as i32,
                        a, lda as i32, tau,
                        c, ldc as i32)
                };

                Ok(interpret(stringify!($ormqr), info))
            }

            fn ormlq(layout: Layout, side: Side, trans: Transpose, m: usize, n: usize, k: usize, a: &[$f], lda: usize, tau: &[$f], c: &mut[$f], ldc: usize) -> Result<bool, ContractViolation>
            {
                let trans = checked(stringify!($ormlq), args::orthogonal_trans(trans, $complex))?;
                checked(stringify!($ormlq), args::ormlq(layout, side, m, n, k, a.len(), lda, tau.len(), c.len(), ldc))?;

                let info = unsafe {
                    lapacke::$ormlq(
                        lapacke_layout(layout), side.code(), trans, m as i32, n as i32, k as i32,
                        a, lda as i32, tau,
                        c, ldc as i32)
                };

                Ok(interpret(stringify!($ormlq), info))
            }

            fn orgqr(layout: Layout, m: usize, n: usize, k: usize, a: &mut[$f], lda: usize, tau: &[$f]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($orgqr), args::orgqr(layout, m, n, k, a.len(), lda, tau.len()))?;

                let info = unsafe {
                    lapacke::$orgqr(
                        lapacke_layout(layout), m as i32, n as i32, k as i32,
                        a, lda as i32, tau)
                };

                Ok(interpret(stringify!($orgqr), info))
            }

            fn orglq(layout: Layout, m: usize, n: usize, k: usize, a: &mut[$f], lda: usize, tau: &[$f]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($orglq), args::orglq(layout, m, n, k, a.len(), lda, tau.len()))?;

                let info = unsafe {
                    lapacke::$orglq(
                        lapacke_layout(layout), m as i32, n as i32, k as i32,
                        a, lda as i32, tau)
                };

                Ok(interpret(stringify!($orglq), info))
            }

            fn lange(layout: Layout, norm: Norm, m: usize, n: usize, a: &[$f], lda: usize) -> Result<$r, ContractViolation>
            {
                checked(stringify!($lange), args::general(layout, m, n, a.len(), lda))?;

                let v = unsafe {
                    lapacke::$lange(
                        lapacke_layout(layout), norm.code(), m as i32, n as i32,
                        a, lda as i32)
                };

                Ok(v)
            }

            fn lantr(layout: Layout, norm: Norm, uplo: Uplo, diag: Diag, m: usize, n: usize, a: &[$f], lda: usize) -> Result<$r, ContractViolation>
            {
                checked(stringify!($lantr), args::general(layout, m, n, a.len(), lda))?;

                let v = unsafe {
                    lapacke::$lantr(
                        lapacke_layout(layout), norm.code(), uplo.code(), diag.code(), m as i32, n as i32,
                        a, lda as i32)
                };

                Ok(v)
            }

            fn lansy(layout: Layout, norm: Norm, uplo: Uplo, n: usize, a: &[$f], lda: usize) -> Result<$r, ContractViolation>
            {
                checked(stringify!($lansy), args::square(layout, n, a.len(), lda))?;

                let v = unsafe {
                    lapacke::$lansy(
                        lapacke_layout(layout), norm.code(), uplo.code(), n as i32,
                        a, lda as i32)
                };

                Ok(v)
            }

            fn gecon(layout: Layout, norm: Norm, n: usize, a: &[$f], lda: usize, anorm: $r, rcond: &mut $r) -> Result<bool, ContractViolation>
            {
                checked(stringify!($gecon), args::cond(layout, norm, n, a.len(), lda))?;

                let info = unsafe {
                    lapacke::$gecon(
                        lapacke_layout(layout), norm.code(), n as i32,
                        a, lda as i32, anorm, rcond)
                };

                Ok(interpret(stringify!($gecon), info))
            }

            fn trcon(layout: Layout, norm: Norm, uplo: Uplo, diag: Diag, n: usize, a: &[$f], lda: usize, rcond: &mut $r) -> Result<bool, ContractViolation>
            {
                checked(stringify!($trcon), args::cond(layout, norm, n, a.len(), lda))?;

                let info = unsafe {
                    lapacke::$trcon(
                        lapacke_layout(layout), norm.code(), uplo.code(), diag.code(), n as i32,
                        a, lda as i32, rcond)
                };

                Ok(interpret(stringify!($trcon), info))
            }

            fn syev(layout: Layout, jobz: EvJob, uplo: Uplo, n: usize, a: &mut[$f], lda: usize, w: &mut[$r]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($syev), args::syev(layout, n, a.len(), lda, w.len()))?;

                let info = unsafe {
                    lapacke::$syev(
                        lapacke_layout(layout), jobz.code(), uplo.code(), n as i32,
                        a, lda as i32, w)
                };

                Ok(interpret(stringify!($syev), info))
            }

            fn geev(layout: Layout, jobvl: EvJob, jobvr: EvJob, n: usize, a: &mut[$f], lda: usize, wr: &mut[$r], wi: &mut[$r],
                vl: &mut[$f], ldvl: usize, vr: &mut[$f], ldvr: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($geev), args::geev(
                    layout, jobvl, jobvr, n,
                    a.len(), lda, wr.len(), wi.len(), vl.len(), ldvl, vr.len(), ldvr
                ))?;

                let info = geev_native!(
                    $geev_kind, $geev, $f,
                    lapacke_layout(layout), jobvl.code(), jobvr.code(), n,
                    a, lda, wr, wi, vl, ldvl, vr, ldvr
                );

                Ok(interpret(stringify!($geev), info))
            }

            fn gesvd(layout: Layout, jobu: SvdJob, jobvt: SvdJob, m: usize, n: usize, a: &mut[$f], lda: usize,
                s: &mut[$r], u: &mut[$f], ldu: usize, vt: &mut[$f], ldvt: usize, superb: &mut[$r]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($gesvd), args::gesvd(
                    layout, jobu, jobvt, m, n,
                    a.len(), lda, s.len(), u.len(), ldu, vt.len(), ldvt, superb.len()
                ))?;

                let info = unsafe {
                    lapacke::$gesvd(
                        lapacke_layout(layout), jobu.code(), jobvt.code(), m as i32, n as i32,
                        a, lda as i32, s,
                        u, ldu as i32,
                        vt, ldvt as i32, superb)
                };

                Ok(interpret(stringify!($gesvd), info))
            }

            fn steqr(layout: Layout, compz: EvComp, n: usize, d: &mut[$r], e: &mut[$r], z: &mut[$f], ldz: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($steqr), args::steqr(layout, compz, n, d.len(), e.len(), z.len(), ldz))?;

                let info = unsafe {
                    lapacke::$steqr(
                        lapacke_layout(layout), compz.code(), n as i32,
                        d, e, z, ldz as i32)
                };

                Ok(interpret(stringify!($steqr), info))
            }

            fn sterf(n: usize, d: &mut[$r], e: &mut[$r]) -> Result<bool, ContractViolation>
            {
                checked(stringify!($sterf), args::tridiag(n, d.len(), e.len()))?;

                if n == 0 {
                    return Ok(true);
                }

                let info = unsafe {
                    lapacke::$sterf(n as i32, d, e)
                };

                Ok(interpret(stringify!($sterf), info))
            }

            fn lasrt(sort: Sort, d: &mut[$r]) -> Result<bool, ContractViolation>
            {
                let n = d.len();
                checked(stringify!($lasrt), args::vector(n, n))?;

                let info = unsafe {
                    lapacke::$lasrt(sort.code(), n as i32, d)
                };

                Ok(interpret(stringify!($lasrt), info))
            }

            fn lacpy(layout: Layout, part: Part, m: usize, n: usize, a: &[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($lacpy), args::lacpy(layout, m, n, a.len(), lda, b.len(), ldb))?;

                let info = unsafe {
                    lapacke::$lacpy(
                        lapacke_layout(layout), part.code(), m as i32, n as i32,
                        a, lda as i32,
                        b, ldb as i32)
                };

                Ok(interpret(stringify!($lacpy), info))
            }

            fn laset(layout: Layout, part: Part, m: usize, n: usize, alpha: $f, beta: $f, a: &mut[$f], lda: usize) -> Result<bool, ContractViolation>
            {
                checked(stringify!($laset), args::general(layout, m, n, a.len(), lda))?;

                let info = unsafe {
                    lapacke::$laset(
                        lapacke_layout(layout), part.code(), m as i32, n as i32,
                        alpha, beta, a, lda as i32)
                };

                Ok(interpret(stringify!($laset), info))
            }
        }
    };
}

pub(crate) use impl_lapack;

//

macro_rules! impl_blas {
    (
        $la:ident, $f:ty, $r:ty, $complex:literal, {
            gemv: $gemv:ident, gemm: $gemm:ident, symm: $symm:ident, syrk: $syrk:ident,
            trmm: $trmm:ident, trsm: $trsm:ident $(,)?
        }
    ) => {
        impl lapkit_core::Blas for $la
        {
            fn gemv(layout: Layout, trans: Transpose, m: usize, n: usize, alpha: $f, a: &[$f], lda: usize,
                x: &[$f], incx: isize, beta: $f, y: &mut[$f], incy: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($gemv), args::gemv(layout, trans, m, n, a.len(), lda, x.len(), incx, y.len(), incy))?;

                unsafe { cblas::$gemv(
                    cblas_layout(layout), cblas_trans(trans),
                    m as i32, n as i32,
                    alpha, a, lda as i32,
                    x, incx as i32,
                    beta, y, incy as i32
                ) }

                Ok(())
            }

            fn gemm(layout: Layout, transa: Transpose, transb: Transpose, m: usize, n: usize, k: usize,
                alpha: $f, a: &[$f], lda: usize, b: &[$f], ldb: usize, beta: $f, c: &mut[$f], ldc: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($gemm), args::gemm(layout, transa, transb, m, n, k, a.len(), lda, b.len(), ldb, c.len(), ldc))?;

                unsafe { cblas::$gemm(
                    cblas_layout(layout), cblas_trans(transa), cblas_trans(transb),
                    m as i32, n as i32, k as i32,
                    alpha, a, lda as i32,
                    b, ldb as i32,
                    beta, c, ldc as i32
                ) }

                Ok(())
            }

            fn symm(layout: Layout, side: Side, uplo: Uplo, m: usize, n: usize,
                alpha: $f, a: &[$f], lda: usize, b: &[$f], ldb: usize, beta: $f, c: &mut[$f], ldc: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($symm), args::side_square(layout, side, m, n, a.len(), lda, b.len(), ldb))?;
                checked(stringify!($symm), args::general(layout, m, n, c.len(), ldc))?;

                unsafe { cblas::$symm(
                    cblas_layout(layout), cblas_side(side), cblas_part(uplo),
                    m as i32, n as i32,
                    alpha, a, lda as i32,
                    b, ldb as i32,
                    beta, c, ldc as i32
                ) }

                Ok(())
            }

            fn syrk(layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize,
                alpha: $r, a: &[$f], lda: usize, beta: $r, c: &mut[$f], ldc: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($syrk), args::orthogonal_trans(trans, $complex))?;
                checked(stringify!($syrk), args::syrk(layout, trans, n, k, a.len(), lda, c.len(), ldc))?;

                unsafe { cblas::$syrk(
                    cblas_layout(layout), cblas_part(uplo), cblas_trans(trans),
                    n as i32, k as i32,
                    alpha, a, lda as i32,
                    beta, c, ldc as i32
                ) }

                Ok(())
            }

            fn trmm(layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize, n: usize,
                alpha: $f, a: &[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($trmm), args::side_square(layout, side, m, n, a.len(), lda, b.len(), ldb))?;

                unsafe { cblas::$trmm(
                    cblas_layout(layout), cblas_side(side), cblas_part(uplo), cblas_trans(trans), cblas_diag(diag),
                    m as i32, n as i32,
                    alpha, a, lda as i32,
                    b, ldb as i32
                ) }

                Ok(())
            }

            fn trsm(layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize, n: usize,
                alpha: $f, a: &[$f], lda: usize, b: &mut[$f], ldb: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($trsm), args::side_square(layout, side, m, n, a.len(), lda, b.len(), ldb))?;

                unsafe { cblas::$trsm(
                    cblas_layout(layout), cblas_side(side), cblas_part(uplo), cblas_trans(trans), cblas_diag(diag),
                    m as i32, n as i32,
                    alpha, a, lda as i32,
                    b, ldb as i32
                ) }

                Ok(())
            }
        }
    };
}

pub(crate) use impl_blas;

//

macro_rules! impl_blas_ex {
    (
        $la:ident, $f:ty, {
            dot: $dot:ident, nrm2: $nrm2:ident, asum: $asum:ident, iamax: $iamax:ident,
            axpy: $axpy:ident, scal: $scal:ident, copy: $copy:ident, swap: $swap:ident, rot: $rot:ident,
            trmv: $trmv:ident, trsv: $trsv:ident, symv: $symv:ident,
            ger: $ger:ident, syr: $syr:ident, syr2: $syr2:ident, syr2k: $syr2k:ident $(,)?
        }
    ) => {
        impl lapkit_core::BlasEx for $la
        {
            fn dot(n: usize, x: &[$f], incx: isize, y: &[$f], incy: isize) -> Result<$f, ContractViolation>
            {
                checked(stringify!($dot), args::vectors(n, x.len(), incx, y.len(), incy))?;

                Ok(unsafe { cblas::$dot(n as i32, x, incx as i32, y, incy as i32) })
            }

            fn nrm2(n: usize, x: &[$f], incx: isize) -> Result<$f, ContractViolation>
            {
                checked(stringify!($nrm2), args::strided(n, x.len(), incx))?;

                Ok(unsafe { cblas::$nrm2(n as i32, x, incx as i32) })
            }

            fn asum(n: usize, x: &[$f], incx: isize) -> Result<$f, ContractViolation>
            {
                checked(stringify!($asum), args::strided(n, x.len(), incx))?;

                Ok(unsafe { cblas::$asum(n as i32, x, incx as i32) })
            }

            fn iamax(n: usize, x: &[$f], incx: isize) -> Result<usize, ContractViolation>
            {
                checked(stringify!($iamax), args::strided(n, x.len(), incx))?;

                let i = unsafe { cblas::$iamax(n as i32, x, incx as i32) };

                Ok(i.max(0) as usize)
            }

            fn axpy(n: usize, alpha: $f, x: &[$f], incx: isize, y: &mut[$f], incy: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($axpy), args::vectors(n, x.len(), incx, y.len(), incy))?;

                unsafe { cblas::$axpy(n as i32, alpha, x, incx as i32, y, incy as i32) }

                Ok(())
            }

            fn scal(n: usize, alpha: $f, x: &mut[$f], incx: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($scal), args::strided(n, x.len(), incx))?;

                unsafe { cblas::$scal(n as i32, alpha, x, incx as i32) }

                Ok(())
            }

            fn copy(n: usize, x: &[$f], incx: isize, y: &mut[$f], incy: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($copy), args::vectors(n, x.len(), incx, y.len(), incy))?;

                unsafe { cblas::$copy(n as i32, x, incx as i32, y, incy as i32) }

                Ok(())
            }

            fn swap(n: usize, x: &mut[$f], incx: isize, y: &mut[$f], incy: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($swap), args::vectors(n, x.len(), incx, y.len(), incy))?;

                unsafe { cblas::$swap(n as i32, x, incx as i32, y, incy as i32) }

                Ok(())
            }

            fn rot(n: usize, x: &mut[$f], incx: isize, y: &mut[$f], incy: isize, c: $f, s: $f) -> Result<(), ContractViolation>
            {
                checked(stringify!($rot), args::vectors(n, x.len(), incx, y.len(), incy))?;

                unsafe { cblas::$rot(n as i32, x, incx as i32, y, incy as i32, c, s) }

                Ok(())
            }

            fn trmv(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize,
                a: &[$f], lda: usize, x: &mut[$f], incx: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($trmv), args::trmv(layout, n, a.len(), lda, x.len(), incx))?;

                unsafe { cblas::$trmv(
                    cblas_layout(layout), cblas_part(uplo), cblas_trans(trans), cblas_diag(diag),
                    n as i32,
                    a, lda as i32,
                    x, incx as i32
                ) }

                Ok(())
            }

            fn trsv(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize,
                a: &[$f], lda: usize, x: &mut[$f], incx: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($trsv), args::trmv(layout, n, a.len(), lda, x.len(), incx))?;

                unsafe { cblas::$trsv(
                    cblas_layout(layout), cblas_part(uplo), cblas_trans(trans), cblas_diag(diag),
                    n as i32,
                    a, lda as i32,
                    x, incx as i32
                ) }

                Ok(())
            }

            fn symv(layout: Layout, uplo: Uplo, n: usize, alpha: $f, a: &[$f], lda: usize,
                x: &[$f], incx: isize, beta: $f, y: &mut[$f], incy: isize) -> Result<(), ContractViolation>
            {
                checked(stringify!($symv), args::symv(layout, n, a.len(), lda, x.len(), incx, y.len(), incy))?;

                unsafe { cblas::$symv(
                    cblas_layout(layout), cblas_part(uplo),
                    n as i32,
                    alpha, a, lda as i32,
                    x, incx as i32,
                    beta, y, incy as i32
                ) }

                Ok(())
            }

            fn ger(layout: Layout, m: usize, n: usize, alpha: $f, x: &[$f], incx: isize,
                y: &[$f], incy: isize, a: &mut[$f], lda: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($ger), args::ger(layout, m, n, x.len(), incx, y.len(), incy, a.len(), lda))?;

                unsafe { cblas::$ger(
                    cblas_layout(layout),
                    m as i32, n as i32,
                    alpha, x, incx as i32,
                    y, incy as i32,
                    a, lda as i32
                ) }

                Ok(())
            }

            fn syr(layout: Layout, uplo: Uplo, n: usize, alpha: $f, x: &[$f], incx: isize,
                a: &mut[$f], lda: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($syr), args::syr(layout, n, x.len(), incx, a.len(), lda))?;

                unsafe { cblas::$syr(
                    cblas_layout(layout), cblas_part(uplo),
                    n as i32,
                    alpha, x, incx as i32,
                    a, lda as i32
                ) }

                Ok(())
            }

            fn syr2(layout: Layout, uplo: Uplo, n: usize, alpha: $f, x: &[$f], incx: isize,
                y: &[$f], incy: isize, a: &mut[$f], lda: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($syr2), args::syr2(layout, n, x.len(), incx, y.len(), incy, a.len(), lda))?;

                unsafe { cblas::$syr2(
                    cblas_layout(layout), cblas_part(uplo),
                    n as i32,
                    alpha, x, incx as i32,
                    y, incy as i32,
                    a, lda as i32
                ) }

                Ok(())
            }

            fn syr2k(layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize,
                alpha: $f, a: &[$f], lda: usize, b: &[$f], ldb: usize, beta: $f, c: &mut[$f], ldc: usize) -> Result<(), ContractViolation>
            {
                checked(stringify!($syr2k), args::syr2k(layout, trans, n, k, a.len(), lda, b.len(), ldb, c.len(), ldc))?;

                unsafe { cblas::$syr2k(
                    cblas_layout(layout), cblas_part(uplo), cblas_trans(trans),
                    n as i32, k as i32,
                    alpha, a, lda as i32,
                    b, ldb as i32,
                    beta, c, ldc as i32
                ) }

                Ok(())
            }
        }
    };
}

pub(crate) use impl_blas_ex;
