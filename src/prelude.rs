pub use crate::cube::*;
pub use crate::r#move::*;
pub use crate::scramble::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;
#[cfg(test)]
pub use quickcheck_macros::quickcheck;
