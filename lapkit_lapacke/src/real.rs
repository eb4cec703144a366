use lapkit_core::{ContractViolation, Flag, Layout, Uplo, Transpose, Side, Diag, Part, Norm, SvdJob, EvJob, EvComp, Sort};
use lapkit_core::{args, pivot, interpret};
use crate::marshal::*;
use crate::macros::{impl_lapack, impl_blas, impl_blas_ex, geev_native};

//

/// `f32` [`lapkit_core::Lapack`], [`lapkit_core::Blas`] and [`lapkit_core::BlasEx`] implementation using `lapacke` and `cblas`.
#[derive(Debug, Clone, Copy)]
pub struct F32LAPACK;

impl_lapack!(F32LAPACK, f32, f32, false, {
    gesv: sgesv, getrf: sgetrf, getrs: sgetrs, getri: sgetri,
    potrf: spotrf, potrs: spotrs, potri: spotri, posv: sposv,
    trtrs: strtrs, trtri: strtri,
    geqrf: sgeqrf, gelqf: sgelqf, gels: sgels, ormqr: sormqr,
    lange: slange, lantr: slantr, gecon: sgecon, trcon: strcon,
    syev: ssyev, gesvd: sgesvd, steqr: ssteqr, sterf: ssterf, lasrt: slasrt,
    lacpy: slacpy, laset: slaset,
    laswp: slaswp, pocon: spocon, geqp3: sgeqp3,
    ormlq: sormlq, orgqr: sorgqr, orglq: sorglq,
    lansy: slansy, geev: real sgeev,
});

impl_blas!(F32LAPACK, f32, f32, false, {
    gemv: sgemv, gemm: sgemm, symm: ssymm, syrk: ssyrk,
    trmm: strmm, trsm: strsm,
});

impl_blas_ex!(F32LAPACK, f32, {
    dot: sdot, nrm2: snrm2, asum: sasum, iamax: isamax,
    axpy: saxpy, scal: sscal, copy: scopy, swap: sswap, rot: srot,
    trmv: strmv, trsv: strsv, symv: ssymv,
    ger: sger, syr: ssyr, syr2: ssyr2, syr2k: ssyr2k,
});

//

/// `f64` [`lapkit_core::Lapack`], [`lapkit_core::Blas`] and [`lapkit_core::BlasEx`] implementation using `lapacke` and `cblas`.
#[derive(Debug, Clone, Copy)]
pub struct F64LAPACK;

impl_lapack!(F64LAPACK, f64, f64, false, {
    gesv: dgesv, getrf: dgetrf, getrs: dgetrs, getri: dgetri,
    potrf: dpotrf, potrs: dpotrs, potri: dpotri, posv: dposv,
    trtrs: dtrtrs, trtri: dtrtri,
    geqrf: dgeqrf, gelqf: dgelqf, gels: dgels, ormqr: dormqr,
    lange: dlange, lantr: dlantr, gecon: dgecon, trcon: dtrcon,
    syev: dsyev, gesvd: dgesvd, steqr: dsteqr, sterf: dsterf, lasrt: dlasrt,
    lacpy: dlacpy, laset: dlaset,
    laswp: dlaswp, pocon: dpocon, geqp3: dgeqp3,
    ormlq: dormlq, orgqr: dorgqr, orglq: dorglq,
    lansy: dlansy, geev: real dgeev,
});

impl_blas!(F64LAPACK, f64, f64, false, {
    gemv: dgemv, gemm: dgemm, symm: dsymm, syrk: dsyrk,
    trmm: dtrmm, trsm: dtrsm,
});

impl_blas_ex!(F64LAPACK, f64, {
    dot: ddot, nrm2: dnrm2, asum: dasum, iamax: idamax,
    axpy: daxpy, scal: dscal, copy: dcopy, swap: dswap, rot: drot,
    trmv: dtrmv, trsv: dtrsv, symv: dsymv,
    ger: dger, syr: dsyr, syr2: dsyr2, syr2k: dsyr2k,
});
