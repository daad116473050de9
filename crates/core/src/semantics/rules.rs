//! The primitive inference rules.
//!
//! Every rule is a pure function from premises to a conclusion. Rules that
//! combine two judgments first check that both were derived in the same
//! environment and agree on the shared type or term, comparing structurally.

use log::{debug, trace};

use crate::semantics::Rule;
use crate::semantics::env::Environment;
use crate::semantics::judgment::{ContextJudgment, EqJudgment, TypeJudgment};
use crate::syntax::{Expr, Name};
use crate::{Error, Out};

fn derived<T>(rule: Rule, out: Out<T>) -> Out<T> {
    match &out {
        Ok(..) => trace!("{rule}: derived"),
        Err(e) => debug!("{rule}: {e}"),
    }
    out
}

fn same_env(a: &Environment, b: &Environment) -> Out<()> {
    if a != b {
        return Err(Error::EnvironmentMismatch);
    }
    Ok(())
}

fn same_type(got: &Expr, want: &Expr) -> Out<()> {
    if got != want {
        return Err(Error::TypeMismatch {
            got: got.clone(),
            want: want.clone(),
        });
    }
    Ok(())
}

fn same_term(got: &Expr, want: &Expr) -> Out<()> {
    if got != want {
        return Err(Error::TermMismatch {
            got: got.clone(),
            want: want.clone(),
        });
    }
    Ok(())
}

/// The empty environment is well-formed.
pub fn context_empty() -> ContextJudgment {
    trace!("{}: derived", Rule::ContextEmpty);
    ContextJudgment::new(Environment::empty())
}

/// If `env` postulates `x : A`, then `x : A` in `env`.
pub fn context_variable(env: &Environment, name: impl Into<Name>) -> Out<TypeJudgment> {
    let name = name.into();
    derived(
        Rule::ContextVariable,
        env.get_declaration(name)
            .map(|d| TypeJudgment::new(env.clone(), Expr::var(d.name()), d.typ().clone()))
            .ok_or(Error::UnknownVariable(name)),
    )
}

/// `x : A` gives `x ~ x : A`.
pub fn eq_reflexive(judg: &TypeJudgment) -> EqJudgment {
    trace!("{}: derived", Rule::EqReflexive);
    EqJudgment::new(
        judg.env.clone(),
        judg.x.clone(),
        judg.x.clone(),
        judg.typ.clone(),
    )
}

/// `x ~ y : A` gives `y ~ x : A`.
pub fn eq_symmetric(judg: &EqJudgment) -> EqJudgment {
    trace!("{}: derived", Rule::EqSymmetric);
    EqJudgment::new(
        judg.env.clone(),
        judg.y.clone(),
        judg.x.clone(),
        judg.typ.clone(),
    )
}

/// `x ~ y : A` and `y ~ z : A` give `x ~ z : A`.
pub fn eq_transitive(judg1: &EqJudgment, judg2: &EqJudgment) -> Out<EqJudgment> {
    let out = same_env(&judg1.env, &judg2.env)
        .and_then(|_| same_type(&judg2.typ, &judg1.typ))
        .and_then(|_| same_term(&judg2.x, &judg1.y))
        .map(|_| {
            EqJudgment::new(
                judg1.env.clone(),
                judg1.x.clone(),
                judg2.y.clone(),
                judg1.typ.clone(),
            )
        });
    derived(Rule::EqTransitive, out)
}

/// `x : A` and `A ~ A'` give `x : A'`.
pub fn type_transport(j1: &TypeJudgment, j2: &EqJudgment) -> Out<TypeJudgment> {
    let out = same_env(&j1.env, &j2.env)
        .and_then(|_| same_type(&j2.x, &j1.typ))
        .map(|_| TypeJudgment::new(j1.env.clone(), j1.x.clone(), j2.y.clone()));
    derived(Rule::TypeTransport, out)
}

/// `x ~ y : A` and `A ~ A'` give `x ~ y : A'`.
pub fn eq_transport(j1: &EqJudgment, j2: &EqJudgment) -> Out<EqJudgment> {
    let out = same_env(&j1.env, &j2.env)
        .and_then(|_| same_type(&j2.x, &j1.typ))
        .map(|_| EqJudgment::new(j1.env.clone(), j1.x.clone(), j1.y.clone(), j2.y.clone()));
    derived(Rule::EqTransport, out)
}
