//! The kernel of a dependent type theory with dependent products.
//!
//! Judgments can only be obtained from the inference rules in [`rules`], so a
//! value of a judgment type is always backed by a derivation.

use thiserror::Error;

use crate::semantics::JudgmentKind;

pub mod semantics;
pub mod syntax;


pub use crate::semantics::derivation::Derivation;
pub use crate::semantics::env::{Environment, TypeDeclaration};
pub use crate::semantics::judgment::{ContextJudgment, EqJudgment, Judgment, TypeJudgment};
pub use crate::semantics::{Rule, rules};
pub use crate::syntax::{Expr, Name};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown variable \"{0}\"")]
    UnknownVariable(Name),

    #[error("judgments are derived in different environments")]
    EnvironmentMismatch,

    #[error("type mismatch: got {got:?}, want {want:?}")]
    TypeMismatch { got: Expr, want: Expr },
    #[error("term mismatch: got {got:?}, want {want:?}")]
    TermMismatch { got: Expr, want: Expr },

    #[error("{rule} expects {want} judgment, got {got}")]
    JudgmentKind {
        rule: Rule,
        got: JudgmentKind,
        want: JudgmentKind,
    },
}

pub type Out<T> = Result<T, Error>;
