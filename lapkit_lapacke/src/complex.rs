use lapkit_core::{ContractViolation, Flag, Layout, Uplo, Transpose, Side, Diag, Part, Norm, SvdJob, EvJob, EvComp, Sort};
use lapkit_core::{args, pivot, interpret};
use lapacke::{c32, c64};
use crate::marshal::*;
use crate::macros::{impl_lapack, impl_blas, geev_native};

//

/// [`c32`] [`lapkit_core::Lapack`] and [`lapkit_core::Blas`] implementation using `lapacke` and `cblas`.
///
/// Symmetric and orthogonal routines call their Hermitian and unitary counterparts,
/// e.g. `syev`, `ormqr`, `lansy` and `syrk` call `cheev`, `cunmqr`, `clanhe` and `cherk`;
/// `sterf` and `lasrt` operate on real data and call `ssterf` and `slasrt`.
#[derive(Debug, Clone, Copy)]
pub struct C32LAPACK;

impl_lapack!(C32LAPACK, c32, f32, true, {
    gesv: cgesv, getrf: cgetrf, getrs: cgetrs, getri: cgetri,
    potrf: cpotrf, potrs: cpotrs, potri: cpotri, posv: cposv,
    trtrs: ctrtrs, trtri: ctrtri,
    geqrf: cgeqrf, gelqf: cgelqf, gels: cgels, ormqr: cunmqr,
    lange: clange, lantr: clantr, gecon: cgecon, trcon: ctrcon,
    syev: cheev, gesvd: cgesvd, steqr: csteqr, sterf: ssterf, lasrt: slasrt,
    lacpy: clacpy, laset: claset,
    laswp: claswp, pocon: cpocon, geqp3: cgeqp3,
    ormlq: cunmlq, orgqr: cungqr, orglq: cunglq,
    lansy: clanhe, geev: complex cgeev,
});

impl_blas!(C32LAPACK, c32, f32, true, {
    gemv: cgemv, gemm: cgemm, symm: chemm, syrk: cherk,
    trmm: ctrmm, trsm: ctrsm,
});

//

/// [`c64`] [`lapkit_core::Lapack`] and [`lapkit_core::Blas`] implementation using `lapacke` and `cblas`.
///
/// Symmetric and orthogonal routines call their Hermitian and unitary counterparts,
/// e.g. `syev`, `ormqr`, `lansy` and `syrk` call `zheev`, `zunmqr`, `zlanhe` and `zherk`;
/// `sterf` and `lasrt` operate on real data and call `dsterf` and `dlasrt`.
#[derive(Debug, Clone, Copy)]
pub struct C64LAPACK;

impl_lapack!(C64LAPACK, c64, f64, true, {
    gesv: zgesv, getrf: zgetrf, getrs: zgetrs, getri: zgetri,
    potrf: zpotrf, potrs: zpotrs, potri: zpotri, posv: zposv,
    trtrs: ztrtrs, trtri: ztrtri,
    geqrf: zgeqrf, gelqf: zgelqf, gels: zgels, ormqr: zunmqr,
    lange: zlange, lantr: zlantr, gecon: zgecon, trcon: ztrcon,
    syev: zheev, gesvd: zgesvd, steqr: zsteqr, sterf: dsterf, lasrt: dlasrt,
    lacpy: zlacpy, laset: zlaset,
    laswp: zlaswp, pocon: zpocon, geqp3: zgeqp3,
    ormlq: zunmlq, orgqr: zungqr, orglq: zunglq,
    lansy: zlanhe, geev: complex zgeev,
});

impl_blas!(C64LAPACK, c64, f64, true, {
    gemv: zgemv, gemm: zgemm, symm: zhemm, syrk: zherk,
    trmm: ztrmm, trsm: ztrsm,
});
