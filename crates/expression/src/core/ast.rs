//! Argument syntax tree
//!
//! Rule arguments parse into a small tree: literals, `$Field` references,
//! `$func(...)` calls and binary comparisons. Evaluation lives in
//! [`crate::eval`].

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ExpressionError;
use crate::value::Value;

/// Parsed rule arguments, keyed by the trimmed source text of each argument.
///
/// Iteration order matches source order, so positional access through
/// [`IndexMap::get_index`] or `values()` is stable. Two arguments with
/// identical text collapse into one entry.
pub type Arguments = IndexMap<String, Argument>;

/// A node in the argument tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A fixed value.
    Literal(Value),
    /// A named member of the context object, written `$Name`.
    FieldRef(String),
    /// A builtin invocation, written `$name(arg, ...)`.
    FunctionCall(FunctionCall),
    /// A comparison between two sub-arguments.
    Condition(Condition),
}

impl Argument {
    /// Shorthand for a literal argument.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Shorthand for a field reference.
    pub fn field(name: impl Into<String>) -> Self {
        Self::FieldRef(name.into())
    }

    /// Returns true when the argument needs no context to evaluate.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Literal(_) => true,
            Self::FieldRef(_) => false,
            Self::FunctionCall(call) => call.args.iter().all(Self::is_constant),
            Self::Condition(cond) => cond.lhs.is_constant() && cond.rhs.is_constant(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Value::String(s)) => write!(f, "{s:?}"),
            Self::Literal(value) => write!(f, "{value}"),
            Self::FieldRef(name) => write!(f, "${name}"),
            Self::FunctionCall(call) => write!(f, "{call}"),
            Self::Condition(cond) => write!(f, "{cond}"),
        }
    }
}

/// `$name(args...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Argument>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// `lhs <op> rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub lhs: Box<Argument>,
    pub operator: Operator,
    pub rhs: Box<Argument>,
}

impl Condition {
    pub fn new(lhs: Argument, operator: Operator, rhs: Argument) -> Self {
        Self {
            lhs: Box::new(lhs),
            operator,
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl Operator {
    /// Operators in the order they are tried when splitting a condition.
    /// Two-character operators come first so `<=` is never read as `<`.
    pub const PRIORITY: [Self; 6] = [
        Self::LessEqual,
        Self::GreaterEqual,
        Self::Equal,
        Self::NotEqual,
        Self::Less,
        Self::Greater,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }

    /// Returns true for `<`, `<=`, `>` and `>=`.
    pub const fn is_ordering(self) -> bool {
        !matches!(self, Self::Equal | Self::NotEqual)
    }

    /// Applies the operator to two comparable operands.
    pub fn holds<T: PartialOrd>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Self::LessEqual => lhs <= rhs,
            Self::GreaterEqual => lhs >= rhs,
            Self::Equal => lhs == rhs,
            Self::NotEqual => lhs != rhs,
            Self::Less => lhs < rhs,
            Self::Greater => lhs > rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PRIORITY
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ExpressionError::UnknownOperator(s.to_owned()))
    }
}
