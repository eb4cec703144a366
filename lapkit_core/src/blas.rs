use crate::{ContractViolation, Layout, Uplo, Transpose, Side, Diag, Lapack};

/// BLAS routines trait.
///
/// Shapes follow [`crate::args`]; BLAS has no status code,
/// so a routine either returns `Ok(())` after the native call or a [`ContractViolation`] without calling it.
/// Complex implementations call the Hermitian counterparts (`hemm` for `symm`, `herk` for `syrk`).
pub trait Blas: Lapack
{
    /// Calculates \\(y \leftarrow \alpha\\,\mathrm{trans}(A)x + \beta y\\) for an `m`×`n` \\(A\\).
    ///
    /// * `incx` and `incy` are spacings between elements of `x` and `y`; they shall not be zero.
    fn gemv(layout: Layout, trans: Transpose, m: usize, n: usize, alpha: Self::F, a: &[Self::F], lda: usize,
        x: &[Self::F], incx: isize, beta: Self::F, y: &mut[Self::F], incy: isize) -> Result<(), ContractViolation>;

    /// Calculates \\(C \leftarrow \alpha\\,\mathrm{transa}(A)\\,\mathrm{transb}(B) + \beta C\\) for an `m`×`n` \\(C\\)
    /// and an inner dimension `k`.
    fn gemm(layout: Layout, transa: Transpose, transb: Transpose, m: usize, n: usize, k: usize,
        alpha: Self::F, a: &[Self::F], lda: usize, b: &[Self::F], ldb: usize, beta: Self::F, c: &mut[Self::F], ldc: usize) -> Result<(), ContractViolation>;

    /// Calculates \\(C \leftarrow \alpha AB + \beta C\\) (`side` left) or \\(C \leftarrow \alpha BA + \beta C\\) (`side` right)
    /// for a symmetric (Hermitian) \\(A\\) stored in the `uplo` triangle.
    fn symm(layout: Layout, side: Side, uplo: Uplo, m: usize, n: usize,
        alpha: Self::F, a: &[Self::F], lda: usize, b: &[Self::F], ldb: usize, beta: Self::F, c: &mut[Self::F], ldc: usize) -> Result<(), ContractViolation>;

    /// Calculates the `uplo` triangle of \\(C \leftarrow \alpha AA^H + \beta C\\)
    /// (or \\(\alpha A^HA + \beta C\\) if `trans`) for an `n`×`n` \\(C\\).
    ///
    /// * `alpha` and `beta` are real so that \\(C\\) stays Hermitian.
    /// * `trans` is applicable as described in [`crate::args::orthogonal_trans`].
    fn syrk(layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize,
        alpha: Self::R, a: &[Self::F], lda: usize, beta: Self::R, c: &mut[Self::F], ldc: usize) -> Result<(), ContractViolation>;

    /// Calculates \\(B \leftarrow \alpha\\,\mathrm{trans}(A)B\\) (`side` left) or \\(B \leftarrow \alpha B\\,\mathrm{trans}(A)\\) (`side` right)
    /// for a triangular \\(A\\).
    fn trmm(layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize, n: usize,
        alpha: Self::F, a: &[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<(), ContractViolation>;

    /// Solves \\(\mathrm{trans}(A)X = \alpha B\\) (`side` left) or \\(X\\,\mathrm{trans}(A) = \alpha B\\) (`side` right)
    /// for a triangular \\(A\\), overwriting \\(B\\) with \\(X\\).
    fn trsm(layout: Layout, side: Side, uplo: Uplo, trans: Transpose, diag: Diag, m: usize, n: usize,
        alpha: Self::F, a: &[Self::F], lda: usize, b: &mut[Self::F], ldb: usize) -> Result<(), ContractViolation>;
}

//

/// BLAS level 1 and level 2 routines and `syr2k`, implemented by the real backends.
///
/// Increments may be negative to walk a vector backwards, except in routines of a single vector
/// (`nrm2`, `asum`, `iamax`, `scal`) where they shall be positive, see [`crate::args::strided`].
pub trait BlasEx: Blas
{
    /// Calculates \\(x^Ty\\).
    fn dot(n: usize, x: &[Self::F], incx: isize, y: &[Self::F], incy: isize) -> Result<Self::F, ContractViolation>;

    /// Calculates the Euclidean norm \\(\\|x\\|_2\\).
    fn nrm2(n: usize, x: &[Self::F], incx: isize) -> Result<Self::R, ContractViolation>;

    /// Calculates \\(\\|x\\|_1\\).
    fn asum(n: usize, x: &[Self::F], incx: isize) -> Result<Self::R, ContractViolation>;

    /// Finds the first element of the largest absolute value.
    ///
    /// Returns its zero-based position among the `n` elements, or `0` if `n` is zero.
    fn iamax(n: usize, x: &[Self::F], incx: isize) -> Result<usize, ContractViolation>;

    /// Calculates \\(y \leftarrow \alpha x + y\\).
    fn axpy(n: usize, alpha: Self::F, x: &[Self::F], incx: isize, y: &mut[Self::F], incy: isize) -> Result<(), ContractViolation>;

    /// Calculates \\(x \leftarrow \alpha x\\).
    fn scal(n: usize, alpha: Self::F, x: &mut[Self::F], incx: isize) -> Result<(), ContractViolation>;

    /// Copies \\(x\\) to \\(y\\).
    fn copy(n: usize, x: &[Self::F], incx: isize, y: &mut[Self::F], incy: isize) -> Result<(), ContractViolation>;

    /// Interchanges \\(x\\) and \\(y\\).
    fn swap(n: usize, x: &mut[Self::F], incx: isize, y: &mut[Self::F], incy: isize) -> Result<(), ContractViolation>;

    /// Applies a plane rotation to every pair \\((x_i, y_i)\\):
    /// \\(x_i \leftarrow c x_i + s y_i\\), \\(y_i \leftarrow c y_i - s x_i\\).
    fn rot(n: usize, x: &mut[Self::F], incx: isize, y: &mut[Self::F], incy: isize, c: Self::R, s: Self::R) -> Result<(), ContractViolation>;

    /// Calculates \\(x \leftarrow \mathrm{trans}(A)x\\) for an `n`×`n` triangular \\(A\\).
    fn trmv(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize,
        a: &[Self::F], lda: usize, x: &mut[Self::F], incx: isize) -> Result<(), ContractViolation>;

    /// Solves \\(\mathrm{trans}(A)z = x\\) for an `n`×`n` triangular \\(A\\), overwriting \\(x\\) with \\(z\\).
    ///
    /// No singularity test is made.
    fn trsv(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize,
        a: &[Self::F], lda: usize, x: &mut[Self::F], incx: isize) -> Result<(), ContractViolation>;

    /// Calculates \\(y \leftarrow \alpha Ax + \beta y\\) for a symmetric \\(A\\) stored in the `uplo` triangle.
    fn symv(layout: Layout, uplo: Uplo, n: usize, alpha: Self::F, a: &[Self::F], lda: usize,
        x: &[Self::F], incx: isize, beta: Self::F, y: &mut[Self::F], incy: isize) -> Result<(), ContractViolation>;

    /// Calculates \\(A \leftarrow \alpha xy^T + A\\) for an `m`×`n` \\(A\\).
    fn ger(layout: Layout, m: usize, n: usize, alpha: Self::F, x: &[Self::F], incx: isize,
        y: &[Self::F], incy: isize, a: &mut[Self::F], lda: usize) -> Result<(), ContractViolation>;

    /// Calculates the `uplo` triangle of \\(A \leftarrow \alpha xx^T + A\\).
    fn syr(layout: Layout, uplo: Uplo, n: usize, alpha: Self::F, x: &[Self::F], incx: isize,
        a: &mut[Self::F], lda: usize) -> Result<(), ContractViolation>;

    /// Calculates the `uplo` triangle of \\(A \leftarrow \alpha xy^T + \alpha yx^T + A\\).
    fn syr2(layout: Layout, uplo: Uplo, n: usize, alpha: Self::F, x: &[Self::F], incx: isize,
        y: &[Self::F], incy: isize, a: &mut[Self::F], lda: usize) -> Result<(), ContractViolation>;

    /// Calculates the `uplo` triangle of \\(C \leftarrow \alpha AB^T + \alpha BA^T + \beta C\\)
    /// (or \\(\alpha A^TB + \alpha B^TA + \beta C\\) if `trans`) for an `n`×`n` \\(C\\).
    fn syr2k(layout: Layout, uplo: Uplo, trans: Transpose, n: usize, k: usize,
        alpha: Self::F, a: &[Self::F], lda: usize, b: &[Self::F], ldb: usize, beta: Self::F, c: &mut[Self::F], ldc: usize) -> Result<(), ContractViolation>;
}
