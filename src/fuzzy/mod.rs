pub mod membership;
pub mod variable;

pub use membership::{linspace, MembershipFunction, ShapeKind};
pub use variable::{LinguisticVariable, Term};
