/*!
<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate provides owned matrices and a high-level driver over [`lapkit_core::Lapack`] backends.

# General usage

1. Choose a [`lapkit_core::Lapack`] implementation to use, e.g.
   [`lapkit_lapacke` crate](https://crates.io/crates/lapkit_lapacke)
   which requires an installed BLAS/LAPACK environment.
1. Construct your matrices using [`MatBuild`].
1. Create a [`Driver`] instance and optionally set its parameters.
1. Invoke an operation of the driver; it either succeeds or returns a [`DriverError`].

Routines of [`lapkit_core::Lapack`] can be called directly as well,
passing [`MatBuild::as_slice`] and [`MatBuild::ld`].

# Examples

Solving \\(Ax=b\\) with a guard against an ill-conditioned \\(A\\):

```
use float_eq::assert_float_eq;
use lapkit::prelude::*;
use lapkit::*;
use lapkit_lapacke::F64LAPACK;
use intel_mkl_src as _;

//env_logger::init(); // Use any logger crate as `lapkit` uses `log` crate.

type La = F64LAPACK;
type AMatBuild = MatBuild<f64>;
type ADriver = Driver<La>;

let mut a = AMatBuild::new(Layout::RowMajor, 2, 2).iter_rowmaj(&[
    4., 1.,
    2., 3.,
]);
let mut b = AMatBuild::new(Layout::RowMajor, 2, 1).iter_rowmaj(&[
    1.,
    2.,
]);

let d = ADriver::new().par(|p| {
    p.eps_rcond = Some(1e-12);
});
d.solve(&mut a, &mut b).unwrap();

assert_float_eq!(b.as_slice(), [0.1, 0.6].as_ref(), abs_all <= 1e-12);
```
*/

mod matbuild;

pub use matbuild::*;

//

mod driver;
mod driver_error;

pub use driver::*;
pub use driver_error::*;

//

/// Prelude
pub mod prelude
{
    pub use lapkit_core::{Lapack, Blas, BlasEx, ContractViolation, Layout, Uplo, Transpose, Side, Diag, Norm};
}
