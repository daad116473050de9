use ustr::Ustr;

/// Variable names, interned so that comparison is a pointer check.
pub type Name = Ustr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    // Naming.
    Variable {
        name: Name,
    },

    // Functions.
    Lambda {
        domain: Box<Self>,
        value: Box<Self>,
    },
    Application {
        function: Box<Self>,
        argument: Box<Self>,
    },

    // Types.
    Pi {
        domain: Box<Self>,
        value: Box<Self>,
    },
}

impl Expr {
    pub fn var(name: impl Into<Name>) -> Self {
        Self::Variable { name: name.into() }
    }

    pub fn lambda(domain: Self, value: Self) -> Self {
        Self::Lambda {
            domain: Box::new(domain),
            value: Box::new(value),
        }
    }

    pub fn pi(domain: Self, value: Self) -> Self {
        Self::Pi {
            domain: Box::new(domain),
            value: Box::new(value),
        }
    }

    pub fn app(function: Self, argument: Self) -> Self {
        Self::Application {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }
}
