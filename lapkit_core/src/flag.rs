use crate::ContractViolation;

//

/// Selector family trait.
///
/// A selector family is a small closed enumeration of mutually exclusive options
/// that a native routine expects as a single-character code.
/// [`Flag::code`] is total on the enumeration;
/// [`Flag::from_code`] fails for every byte that is not one of the family's codes.
pub trait Flag: Copy + PartialEq + 'static
{
    /// Name of the family, used in error messages.
    const FAMILY: &'static str;

    /// Every member of the family.
    const ALL: &'static [Self];

    /// Character code expected by the native routine.
    fn code(self) -> u8;

    /// Decodes a raw character code.
    ///
    /// Returns the member whose code is `code`,
    /// or [`ContractViolation::BadFlag`] if there is none.
    /// Decoding is exact; lower-case codes are not members.
    fn from_code(code: u8) -> Result<Self, ContractViolation>
    {
        Self::ALL.iter().copied()
            .find(|f| f.code() == code)
            .ok_or(ContractViolation::BadFlag {family: Self::FAMILY, code})
    }
}

macro_rules! flag_family {
    (
        $(#[$meta:meta])*
        $name:ident = $family:literal {
            $( $(#[$vmeta:meta])* $var:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name
        {
            $( $(#[$vmeta])* $var, )+
        }

        impl Flag for $name
        {
            const FAMILY: &'static str = $family;
            const ALL: &'static [Self] = &[$( $name::$var, )+];

            fn code(self) -> u8
            {
                match self {
                    $( $name::$var => $code, )+
                }
            }
        }

        impl From<$name> for u8
        {
            fn from(f: $name) -> u8
            {
                f.code()
            }
        }

        impl TryFrom<u8> for $name
        {
            type Error = ContractViolation;

            fn try_from(code: u8) -> Result<Self, ContractViolation>
            {
                <$name as Flag>::from_code(code)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.code() as char)
            }
        }
    };
}

//

flag_family! {
    /// Triangle of a matrix that is referenced.
    Uplo = "triangle" {
        /// Upper triangle.
        Upper => b'U',
        /// Lower triangle.
        Lower => b'L',
    }
}

flag_family! {
    /// Operation applied to a matrix operand.
    Transpose = "transpose" {
        /// \\(A\\)
        NoTrans => b'N',
        /// \\(A^T\\)
        Trans => b'T',
        /// \\(A^H\\); the same as [`Transpose::Trans`] for real matrices.
        ConjTrans => b'C',
    }
}

flag_family! {
    /// Side from which a matrix operand is applied.
    Side = "side" {
        /// Multiply or solve from the left.
        Left => b'L',
        /// Multiply or solve from the right.
        Right => b'R',
    }
}

flag_family! {
    /// Whether a triangular matrix has an implicit unit diagonal.
    Diag = "diagonal" {
        /// Diagonal is all ones and not referenced.
        Unit => b'U',
        /// Diagonal is stored.
        NonUnit => b'N',
    }
}

flag_family! {
    /// Region of a matrix that is copied or set.
    Part = "part" {
        /// Upper triangle including the diagonal.
        Upper => b'U',
        /// Lower triangle including the diagonal.
        Lower => b'L',
        /// Whole matrix.
        All => b'A',
    }
}

flag_family! {
    /// Matrix norm.
    Norm = "norm" {
        /// Largest absolute value of an element.
        MaxAbs => b'M',
        /// 1-norm, the largest absolute column sum.
        MaxColumnSum => b'O',
        /// Infinity norm, the largest absolute row sum.
        MaxRowSum => b'I',
        /// Frobenius norm.
        Frobenius => b'F',
    }
}

flag_family! {
    /// Which singular vectors are computed.
    SvdJob = "SVD job" {
        /// All columns of \\(U\\) (or rows of \\(V^T\\)).
        All => b'A',
        /// The first `min(m, n)` columns of \\(U\\) (or rows of \\(V^T\\)).
        Thin => b'S',
        /// The first `min(m, n)` vectors overwrite the input matrix.
        Overwrite => b'O',
        /// No singular vectors.
        None => b'N',
    }
}

flag_family! {
    /// Whether eigenvectors are computed.
    EvJob = "EV job" {
        /// Eigenvalues and eigenvectors.
        Compute => b'V',
        /// Eigenvalues only.
        None => b'N',
    }
}

flag_family! {
    /// How eigenvectors of a tridiagonal matrix are accumulated.
    EvComp = "EV comp" {
        /// No eigenvectors.
        None => b'N',
        /// Eigenvectors of the original matrix; `z` holds the reducing transform on entry.
        Original => b'V',
        /// Eigenvectors of the tridiagonal matrix; `z` is initialized to the identity.
        Tridiag => b'I',
    }
}

flag_family! {
    /// Sort order.
    Sort = "sort" {
        /// Increasing order.
        Increasing => b'I',
        /// Decreasing order.
        Decreasing => b'D',
    }
}

//

impl From<Uplo> for Part
{
    fn from(uplo: Uplo) -> Part
    {
        match uplo {
            Uplo::Upper => Part::Upper,
            Uplo::Lower => Part::Lower,
        }
    }
}

impl Uplo
{
    /// The other triangle.
    pub fn flip(self) -> Uplo
    {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

impl Transpose
{
    /// Returns `true` unless [`Transpose::NoTrans`].
    pub fn is_trans(self) -> bool
    {
        self != Transpose::NoTrans
    }
}

//

/// Storage order of a dense matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout
{
    /// Elements of a row are contiguous.
    RowMajor,
    /// Elements of a column are contiguous.
    ColumnMajor,
}

impl Layout
{
    /// Integer tag of the C interface.
    pub fn code(self) -> i32
    {
        match self {
            Layout::RowMajor => 101,
            Layout::ColumnMajor => 102,
        }
    }

    /// Index of element `(r, c)` in a matrix with leading dimension `ld`.
    pub fn index(self, ld: usize, (r, c): (usize, usize)) -> usize
    {
        match self {
            Layout::RowMajor => r * ld + c,
            Layout::ColumnMajor => c * ld + r,
        }
    }
}

//

#[test]
fn test_flag_codes()
{
    assert_eq!(Uplo::Upper.code(), b'U');
    assert_eq!(Uplo::Lower.code(), b'L');
    assert_eq!(Transpose::NoTrans.code(), b'N');
    assert_eq!(Transpose::Trans.code(), b'T');
    assert_eq!(Transpose::ConjTrans.code(), b'C');
    assert_eq!(Side::Left.code(), b'L');
    assert_eq!(Side::Right.code(), b'R');
    assert_eq!(Diag::Unit.code(), b'U');
    assert_eq!(Diag::NonUnit.code(), b'N');
}

#[test]
fn test_flag_out_of_domain()
{
    assert_eq!(
        Uplo::from_code(b'X'),
        Err(ContractViolation::BadFlag {family: "triangle", code: b'X'})
    );
    assert_eq!(
        Transpose::try_from(b'n'),
        Err(ContractViolation::BadFlag {family: "transpose", code: b'n'})
    );
    assert!(Side::from_code(b'U').is_err());
    assert!(Diag::from_code(b'L').is_err());
}

#[test]
fn test_flag_total_on_bytes()
{
    fn check<F: Flag + core::fmt::Debug>()
    {
        let mut defined = 0;
        for b in 0..= u8::MAX {
            match F::from_code(b) {
                Ok(f) => {
                    assert_eq!(f.code(), b);
                    defined += 1;
                },
                Err(e) => {
                    assert_eq!(e, ContractViolation::BadFlag {family: F::FAMILY, code: b});
                },
            }
        }
        assert_eq!(defined, F::ALL.len());

        for f in F::ALL {
            assert_eq!(F::from_code(f.code()), Ok(*f));
        }
    }

    check::<Uplo>();
    check::<Transpose>();
    check::<Side>();
    check::<Diag>();
    check::<Part>();
    check::<Norm>();
    check::<SvdJob>();
    check::<EvJob>();
    check::<EvComp>();
    check::<Sort>();
}

#[test]
fn test_flag_all_static()
{
    // members outlive any generic caller
    fn members<F: Flag>() -> &'static [F]
    {
        F::ALL
    }

    assert_eq!(members::<Uplo>(), &[Uplo::Upper, Uplo::Lower]);
    assert_eq!(members::<Sort>().len(), 2);
}

#[test]
fn test_flag_display()
{
    use std::string::ToString;

    assert_eq!(Transpose::ConjTrans.to_string(), "C");
    assert_eq!(u8::from(Part::All), b'A');
    assert_eq!(Part::from(Uplo::Lower), Part::Lower);
    assert_eq!(Uplo::Upper.flip(), Uplo::Lower);
}

#[test]
fn test_layout_index()
{
    assert_eq!(Layout::RowMajor.code(), 101);
    assert_eq!(Layout::ColumnMajor.code(), 102);
    assert_eq!(Layout::RowMajor.index(4, (1, 2)), 6);
    assert_eq!(Layout::ColumnMajor.index(4, (1, 2)), 9);
}
