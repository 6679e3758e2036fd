//! Terms: atoms, variables and compound tuples.

use std::fmt;
use std::hash::{Hash, Hasher};

/// First character of every variable minted by renaming.
pub const INTERNAL_MARKER: char = '_';

/// Naming convention for variables: an uppercase first letter (user
/// variables) or the internal marker (renamed variables).
///
/// Only loaders consult this. Once a term is built the variant decides.
pub fn is_variable_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || c == INTERNAL_MARKER)
}

/// Which side of the naming convention a variable falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// Written by the user; reported in answers.
    User,
    /// Produced by renaming; never reported.
    Internal,
}

/// A logic variable, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var { name: name.into() }
    }

    /// The renamed copy of this variable for counter value `n`.
    pub fn fresh(&self, n: u64) -> Self {
        Var {
            name: format!("{}{}_{}", INTERNAL_MARKER, self.name, n),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VarKind {
        if self.name.starts_with(INTERNAL_MARKER) {
            VarKind::Internal
        } else {
            VarKind::User
        }
    }

    pub fn is_user(&self) -> bool {
        self.kind() == VarKind::User
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A real number with bitwise equality, so terms keep total equality.
#[derive(Debug, Clone, Copy)]
pub struct Real(f64);

impl Real {
    pub fn new(value: f64) -> Self {
        Real(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// An opaque constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Bare lowercase identifier: `pasaporte`, `costo`
    Symbol(String),
    /// Quoted text: `'Recaudacion de Rentas Ensenada'`
    Text(String),
    Int(i64),
    Real(Real),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Symbol(name) => write!(f, "{}", name),
            Atom::Text(text) => write!(f, "'{}'", text.replace('\'', "\\'")),
            Atom::Int(n) => write!(f, "{}", n),
            Atom::Real(r) => write!(f, "{:?}", r.value()),
        }
    }
}

/// Syntactic class of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Atom,
    Variable,
    Compound,
}

/// A term.
///
/// A predicate application such as `costo(Tramite, Desc, Monto)` is the
/// compound tuple `(costo, Tramite, Desc, Monto)`: the functor is simply the
/// first element, and arity is the tuple length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(Atom),
    Var(Var),
    Compound(Vec<Term>),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Var::new(name))
    }

    /// Create a symbolic constant.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Atom(Atom::Symbol(name.into()))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Term::Atom(Atom::Text(text.into()))
    }

    pub fn int(n: i64) -> Self {
        Term::Atom(Atom::Int(n))
    }

    pub fn real(value: f64) -> Self {
        Term::Atom(Atom::Real(Real::new(value)))
    }

    /// Create a predicate application `functor(args...)`.
    pub fn app(functor: impl Into<String>, args: Vec<Term>) -> Self {
        let mut items = Vec::with_capacity(args.len() + 1);
        items.push(Term::constant(functor));
        items.extend(args);
        Term::Compound(items)
    }

    /// Create a bare tuple.
    pub fn tuple(items: Vec<Term>) -> Self {
        Term::Compound(items)
    }

    /// Build a term from an external name, classifying it by the naming
    /// convention.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if is_variable_name(&name) {
            Term::Var(Var::new(name))
        } else {
            Term::Atom(Atom::Symbol(name))
        }
    }

    pub fn classify(&self) -> TermKind {
        match self {
            Term::Atom(_) => TermKind::Atom,
            Term::Var(_) => TermKind::Variable,
            Term::Compound(_) => TermKind::Compound,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(var) => Some(var),
            _ => None,
        }
    }

    /// Tuple length for compounds; `None` otherwise.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Term::Compound(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Predicate name: the leading symbol of a compound, or a bare symbol.
    pub fn functor(&self) -> Option<&str> {
        match self {
            Term::Atom(Atom::Symbol(name)) => Some(name),
            Term::Compound(items) => match items.first() {
                Some(Term::Atom(Atom::Symbol(name))) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Variables of this term in first-occurrence order, without repeats.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub(crate) fn collect_variables(&self, vars: &mut Vec<Var>) {
        match self {
            Term::Var(var) => {
                if !vars.contains(var) {
                    vars.push(var.clone());
                }
            }
            Term::Compound(items) => {
                for item in items {
                    item.collect_variables(vars);
                }
            }
            Term::Atom(_) => {}
        }
    }

    /// Check if this term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Atom(_) => true,
            Term::Compound(items) => items.iter().all(|item| item.is_ground()),
        }
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(atom)
    }
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(atom) => write!(f, "{}", atom),
            Term::Var(var) => write!(f, "{}", var),
            Term::Compound(items) => {
                let (open, args) = match items.split_first() {
                    Some((Term::Atom(Atom::Symbol(name)), rest)) => {
                        write!(f, "{}(", name)?;
                        (true, rest)
                    }
                    _ => {
                        write!(f, "(")?;
                        (false, items.as_slice())
                    }
                };
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                // A bare 1-tuple prints with a trailing comma.
                if !open && args.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}
