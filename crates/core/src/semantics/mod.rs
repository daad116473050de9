use strum::{Display, EnumIter, EnumString};

pub mod derivation;
pub mod env;
pub mod judgment;
pub mod rules;

pub use judgment::JudgmentKind;

/// Names of the primitive inference rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    // Contexts.
    ContextEmpty,
    ContextVariable,

    // Definitional equality.
    EqReflexive,
    EqSymmetric,
    EqTransitive,

    // Transport.
    TypeTransport,
    EqTransport,
}

impl Rule {
    /// How many judgments the rule takes as premises.
    pub fn premises(&self) -> usize {
        match self {
            Rule::ContextEmpty | Rule::ContextVariable => 0,
            Rule::EqReflexive | Rule::EqSymmetric => 1,
            Rule::EqTransitive | Rule::TypeTransport | Rule::EqTransport => 2,
        }
    }
}
