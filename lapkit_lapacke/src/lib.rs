/*!
LAPACKE/CBLAS backends of [`lapkit_core`].

| Backend | Element | [`Lapack`] | [`Blas`] | [`BlasEx`] |
|---|---|---|---|---|
| [`F32LAPACK`] | `f32` | yes | yes | yes |
| [`F64LAPACK`] | `f64` | yes | yes | yes |
| [`C32LAPACK`] | [`c32`] | yes | yes | - |
| [`C64LAPACK`] | [`c64`] | yes | yes | - |

You need a [BLAS/LAPACK source](https://github.com/blas-lapack-rs/blas-lapack-rs.github.io/wiki#sources) to link,
for example:

```toml
[dependencies.intel-mkl-src]
version = "0.8.1"
features = ["mkl-static-lp64-seq"]
```

[`Lapack`]: lapkit_core::Lapack
[`Blas`]: lapkit_core::Blas
[`BlasEx`]: lapkit_core::BlasEx
*/

mod marshal;
mod macros;

//

mod real;
mod complex;

pub use real::*;
pub use complex::*;

pub use lapacke::{c32, c64};

//

#[cfg(test)]
use intel_mkl_src as _;
