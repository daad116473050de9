use std::collections::{HashMap, HashSet};
use std::mem::take;
use std::sync::Arc;

use crate::semantics::env::Environment;
use crate::semantics::judgment::{EqJudgment, Judgment, JudgmentKind, TypeJudgment};
use crate::semantics::{Rule, rules};
use crate::syntax::Name;
use crate::{Error, Out};

#[derive(Debug)]
struct Step {
    rule: Rule,
    premises: Box<[Derivation]>,
    conclusion: Judgment,
}

impl Drop for Step {
    fn drop(&mut self) {
        let mut todo = take(&mut self.premises).into_vec();
        while let Some(d) = todo.pop() {
            if let Some(mut step) = Arc::into_inner(d.0) {
                todo.extend(take(&mut step.premises).into_vec());
            }
        }
    }
}

/// A proof tree: the rule applied last, the derivations of its premises, and
/// the judgment it concludes.
///
/// Methods mirror [`rules`], taking the premises as derivations and
/// recording the step. Clones share the tree.
#[derive(Debug, Clone)]
pub struct Derivation(Arc<Step>);

impl Derivation {
    fn step(rule: Rule, premises: &[&Self], conclusion: impl Into<Judgment>) -> Self {
        Self(Arc::new(Step {
            rule,
            premises: premises.iter().map(|&d| d.clone()).collect(),
            conclusion: conclusion.into(),
        }))
    }

    fn id(&self) -> *const Step {
        Arc::as_ptr(&self.0)
    }

    fn as_type(&self, rule: Rule) -> Out<&TypeJudgment> {
        self.conclusion()
            .as_type()
            .ok_or_else(|| self.wrong_kind(rule, JudgmentKind::Type))
    }

    fn as_eq(&self, rule: Rule) -> Out<&EqJudgment> {
        self.conclusion()
            .as_eq()
            .ok_or_else(|| self.wrong_kind(rule, JudgmentKind::Eq))
    }

    fn wrong_kind(&self, rule: Rule, want: JudgmentKind) -> Error {
        Error::JudgmentKind {
            rule,
            got: self.conclusion().kind(),
            want,
        }
    }

    pub fn context_empty() -> Self {
        Self::step(Rule::ContextEmpty, &[], rules::context_empty())
    }

    pub fn context_variable(env: &Environment, name: impl Into<Name>) -> Out<Self> {
        let j = rules::context_variable(env, name)?;
        Ok(Self::step(Rule::ContextVariable, &[], j))
    }

    pub fn eq_reflexive(&self) -> Out<Self> {
        const RULE: Rule = Rule::EqReflexive;
        let j = rules::eq_reflexive(self.as_type(RULE)?);
        Ok(Self::step(RULE, &[self], j))
    }

    pub fn eq_symmetric(&self) -> Out<Self> {
        const RULE: Rule = Rule::EqSymmetric;
        let j = rules::eq_symmetric(self.as_eq(RULE)?);
        Ok(Self::step(RULE, &[self], j))
    }

    /// Chains `self`, concluding `x ~ y`, with `other`, concluding `y ~ z`.
    pub fn eq_transitive(&self, other: &Self) -> Out<Self> {
        const RULE: Rule = Rule::EqTransitive;
        let j = rules::eq_transitive(self.as_eq(RULE)?, other.as_eq(RULE)?)?;
        Ok(Self::step(RULE, &[self, other], j))
    }

    /// Retypes the typing concluded by `self` along the equality `eq`.
    pub fn type_transport(&self, eq: &Self) -> Out<Self> {
        const RULE: Rule = Rule::TypeTransport;
        let j = rules::type_transport(self.as_type(RULE)?, eq.as_eq(RULE)?)?;
        Ok(Self::step(RULE, &[self, eq], j))
    }

    /// Retypes the equality concluded by `self` along the equality `eq`.
    pub fn eq_transport(&self, eq: &Self) -> Out<Self> {
        const RULE: Rule = Rule::EqTransport;
        let j = rules::eq_transport(self.as_eq(RULE)?, eq.as_eq(RULE)?)?;
        Ok(Self::step(RULE, &[self, eq], j))
    }

    pub fn rule(&self) -> Rule {
        self.0.rule
    }

    pub fn premises(&self) -> &[Self] {
        &self.0.premises
    }

    pub fn conclusion(&self) -> &Judgment {
        &self.0.conclusion
    }

    /// Number of distinct rule applications in the tree. A premise shared
    /// by several steps is counted once.
    pub fn size(&self) -> usize {
        let mut seen = HashSet::new();
        let mut todo = vec![self];
        while let Some(d) = todo.pop() {
            if seen.insert(d.id()) {
                todo.extend(d.premises());
            }
        }
        seen.len()
    }

    /// Length of the longest chain from the conclusion to a leaf, counting
    /// both ends.
    pub fn height(&self) -> usize {
        let mut heights = HashMap::<*const Step, usize>::new();
        let mut todo = vec![self];
        while let Some(&d) = todo.last() {
            if heights.contains_key(&d.id()) {
                todo.pop();
                continue;
            }
            let pending = d
                .premises()
                .iter()
                .filter(|p| !heights.contains_key(&p.id()))
                .collect::<Vec<_>>();
            if pending.is_empty() {
                let h = d.premises().iter().map(|p| heights[&p.id()]).max();
                heights.insert(d.id(), 1 + h.unwrap_or(0));
                todo.pop();
            } else {
                todo.extend(pending);
            }
        }
        heights[&self.id()]
    }
}
