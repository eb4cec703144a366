/*!
Typed marshalling layer for LAPACK/BLAS bindings.

This crate holds everything a binding needs before the foreign call is made:

* closed selector families ([`Uplo`], [`Transpose`], [`Side`], [`Diag`], ...)
  and their single-byte codes, see [`Flag`];
* storage order tagging with [`Layout`];
* argument shape checks ([`check_matrix`], [`check_vector`], [`args`]);
* conversion of zero-based pivots to and from the native one-based form ([`pivot`]);
* interpretation of the native status code ([`succeeded`], [`Status`]);
* the [`Lapack`], [`Blas`] and [`BlasEx`] traits that native backends implement.

Anything that is rejected here is a [`ContractViolation`] and never reaches the native library.
A native call that runs and reports a nonzero status is an ordinary failure, returned as `Ok(false)`.

No numerical algorithm lives here.
Use a backend such as the `lapkit_lapacke` crate to actually compute.
*/

#![no_std]

mod error;

pub use error::*;

//

mod flag;

pub use flag::*;

//

mod status;

pub use status::*;

//

mod check;

pub use check::*;

//

pub mod pivot;
pub mod args;

//

mod lapack;
mod blas;

pub use lapack::*;
pub use blas::*;

//

#[cfg(test)]
extern crate std;
