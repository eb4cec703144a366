use std::ops::{Index, IndexMut, Deref};
use num_traits::{Float, Zero};
use lapkit_core::Layout;

//

/// Matrix builder
///
/// Dense matrix struct which owns a `Vec` of data array in a given [`Layout`],
/// with the tightest leading dimension.
/// Its slices and [`MatBuild::ld`] can be passed to [`lapkit_core::Lapack`] routines as they are.
/// This struct relies on dynamic heap allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatBuild<F>
{
    layout: Layout,
    nrows: usize,
    ncols: usize,
    array: Vec<F>,
}

impl<F: Copy + Zero> MatBuild<F>
{
    /// Creates an instance.
    ///
    /// Returns the [`MatBuild`] instance with zero data.
    /// * `layout` is the storage order.
    /// * `nrows` and `ncols` are the number of rows and columns.
    pub fn new(layout: Layout, nrows: usize, ncols: usize) -> Self
    {
        MatBuild {
            layout,
            nrows,
            ncols,
            array: vec![F::zero(); nrows * ncols],
        }
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        (self.nrows, self.ncols)
    }

    /// Storage order of the matrix.
    pub fn layout(&self) -> Layout
    {
        self.layout
    }

    /// Leading dimension of the data array, which is at least one.
    pub fn ld(&self) -> usize
    {
        match self.layout {
            Layout::RowMajor => self.ncols.max(1),
            Layout::ColumnMajor => self.nrows.max(1),
        }
    }

    /// Data array in the storage order.
    pub fn as_slice(&self) -> &[F]
    {
        &self.array
    }

    /// Mutable data array in the storage order.
    pub fn as_mut_slice(&mut self) -> &mut[F]
    {
        &mut self.array
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> F
    {
        for c in 0.. self.ncols {
            for r in 0.. self.nrows {
                self[(r, c)] = func(r, c);
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> F
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in column-major.
    ///
    /// * `iter` iterates matrix data in column-major, regardless of the storage order.
    pub fn set_iter_colmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        let mut i = iter.into_iter();

        for c in 0.. self.ncols {
            for r in 0.. self.nrows {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    return;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_colmaj`].
    pub fn iter_colmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// Data by an iterator in row-major.
    ///
    /// * `iter` iterates matrix data in row-major, regardless of the storage order.
    pub fn set_iter_rowmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        let mut i = iter.into_iter();

        for r in 0.. self.nrows {
            for c in 0.. self.ncols {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    return;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_rowmaj`].
    pub fn iter_rowmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    fn index(&self, (r, c): (usize, usize)) -> usize
    {
        assert!(r < self.nrows);
        assert!(c < self.ncols);

        let i = self.layout.index(self.ld(), (r, c));

        assert!(i < self.array.len());
        i
    }
}

//

impl<F: Copy + Zero> Index<(usize, usize)> for MatBuild<F>
{
    type Output = F;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let i = self.index(index);

        &self.array[i]
    }
}

impl<F: Copy + Zero> IndexMut<(usize, usize)> for MatBuild<F>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.index(index);

        &mut self.array[i]
    }
}

//

impl<F> AsRef<[F]> for MatBuild<F>
{
    fn as_ref(&self) -> &[F]
    {
        &self.array
    }
}

impl<F> AsMut<[F]> for MatBuild<F>
{
    fn as_mut(&mut self) -> &mut[F]
    {
        &mut self.array
    }
}

//

impl<F> core::fmt::Display for MatBuild<F>
where F: Float + core::fmt::LowerExp
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            write!(f, "[ {:.3e}", self[(0, 0)])?;
            if nc > 2 {
                write!(f, " ...")?;
            }
            if nc > 1 {
                write!(f, " {:.3e}", self[(0, nc - 1)])?;
            }

            if nr > 2 {
                writeln!(f)?;
                write!(f, "  ...")?;
            }

            if nr > 1 {
                writeln!(f)?;
                write!(f, "  {:.3e}", self[(nr - 1, 0)])?;
                if nc > 2 {
                    write!(f, " ...")?;
                }
                if nc > 1 {
                    write!(f, " {:.3e}", self[(nr - 1, nc - 1)])?;
                }
            }
            write!(f, " ]")?;
        }

        write!(f, " ({} x {}) ", nr, nc)?;
        match self.layout {
            Layout::RowMajor => write!(f, "RowMajor")?,
            Layout::ColumnMajor => write!(f, "ColumnMajor")?,
        }

        Ok(())
    }
}

//

#[test]
fn test_matbuild_layout()
{
    let array = &[ // row-major
        1., 2., 3.,
        4., 5., 6.,
    ];

    let rm = MatBuild::<f64>::new(Layout::RowMajor, 2, 3).iter_rowmaj(array);
    let cm = MatBuild::<f64>::new(Layout::ColumnMajor, 2, 3).iter_rowmaj(array);

    assert_eq!(rm.ld(), 3);
    assert_eq!(cm.ld(), 2);
    assert_eq!(rm.as_slice(), &[1., 2., 3., 4., 5., 6.]);
    assert_eq!(cm.as_slice(), &[1., 4., 2., 5., 3., 6.]);

    for r in 0.. 2 {
        for c in 0.. 3 {
            assert_eq!(rm[(r, c)], cm[(r, c)]);
        }
    }

    let cm2 = MatBuild::<f64>::new(Layout::ColumnMajor, 2, 3).iter_colmaj(cm.as_slice());
    assert_eq!(cm2, cm);
}

#[test]
fn test_matbuild_by_fn()
{
    let m = MatBuild::<f64>::new(Layout::RowMajor, 3, 3)
            .by_fn(|r, c| if r == c {1.} else {0.});

    assert_eq!(m.as_slice(), &[1., 0., 0., 0., 1., 0., 0., 0., 1.]);

    // short iterator leaves the rest untouched
    let m = m.iter_rowmaj(&[7., 8.]);
    assert_eq!(m.as_slice(), &[7., 8., 0., 0., 1., 0., 0., 0., 1.]);

    let e = MatBuild::<f64>::new(Layout::ColumnMajor, 0, 4);
    assert_eq!(e.ld(), 1);
    assert_eq!(e.as_slice().len(), 0);
    assert_eq!(format!("{}", e), "[ ] (0 x 4) ColumnMajor");
}

#[test]
#[should_panic]
fn test_matbuild_out_of_range()
{
    let m = MatBuild::<f64>::new(Layout::RowMajor, 2, 2);
    let _ = m[(2, 0)];
}
