use strum::{Display, EnumDiscriminants};

use crate::semantics::env::Environment;
use crate::syntax::Expr;

/// `env` is a well-formed context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextJudgment {
    pub(crate) env: Environment,
}

impl ContextJudgment {
    pub(crate) fn new(env: Environment) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}

/// `x` has type `typ` in `env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeJudgment {
    pub(crate) env: Environment,
    pub(crate) x: Expr,
    pub(crate) typ: Expr,
}

impl TypeJudgment {
    pub(crate) fn new(env: Environment, x: Expr, typ: Expr) -> Self {
        Self { env, x, typ }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn term(&self) -> &Expr {
        &self.x
    }

    pub fn typ(&self) -> &Expr {
        &self.typ
    }
}

/// `x` and `y` are definitionally equal as members of `typ` in `env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqJudgment {
    pub(crate) env: Environment,
    pub(crate) x: Expr,
    pub(crate) y: Expr,
    pub(crate) typ: Expr,
}

impl EqJudgment {
    pub(crate) fn new(env: Environment, x: Expr, y: Expr, typ: Expr) -> Self {
        Self { env, x, y, typ }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn lhs(&self) -> &Expr {
        &self.x
    }

    pub fn rhs(&self) -> &Expr {
        &self.y
    }

    pub fn typ(&self) -> &Expr {
        &self.typ
    }
}

#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(JudgmentKind))]
#[strum_discriminants(derive(Display))]
pub enum Judgment {
    Context(ContextJudgment),
    Type(TypeJudgment),
    Eq(EqJudgment),
}

impl Judgment {
    pub fn kind(&self) -> JudgmentKind {
        self.into()
    }

    pub fn env(&self) -> &Environment {
        match self {
            Self::Context(j) => j.env(),
            Self::Type(j) => j.env(),
            Self::Eq(j) => j.env(),
        }
    }

    pub fn as_type(&self) -> Option<&TypeJudgment> {
        let Self::Type(j) = self else { return None };
        Some(j)
    }

    pub fn as_eq(&self) -> Option<&EqJudgment> {
        let Self::Eq(j) = self else { return None };
        Some(j)
    }
}

impl From<ContextJudgment> for Judgment {
    fn from(j: ContextJudgment) -> Self {
        Self::Context(j)
    }
}

impl From<TypeJudgment> for Judgment {
    fn from(j: TypeJudgment) -> Self {
        Self::Type(j)
    }
}

impl From<EqJudgment> for Judgment {
    fn from(j: EqJudgment) -> Self {
        Self::Eq(j)
    }
}
