//! Argument evaluation
//!
//! Resolves an [`Argument`] tree to a [`Value`] against an optional context
//! object. Literals return themselves, field references read the context,
//! function calls dispatch to the [`BuiltinRegistry`] and conditions compare
//! their two sides into a boolean.

use std::sync::{Arc, LazyLock};

use tracing::trace;

use crate::builtins::{BuiltinRegistry, check_arg_count};
use crate::context::FieldLookup;
use crate::core::ast::{Argument, Condition, FunctionCall, Operator};
use crate::error::{ExpressionError, ExpressionResult};
use crate::value::Value;

/// Maximum recursion depth for argument evaluation
pub(crate) const MAX_RECURSION_DEPTH: usize = 256;

static DEFAULT_EVALUATOR: LazyLock<Evaluator> =
    LazyLock::new(|| Evaluator::new(Arc::new(BuiltinRegistry::new())));

/// Evaluator for argument trees
#[derive(Debug, Clone)]
pub struct Evaluator {
    builtins: Arc<BuiltinRegistry>,
}

impl Evaluator {
    /// Create a new evaluator with the given builtin registry
    pub fn new(builtins: Arc<BuiltinRegistry>) -> Self {
        Self { builtins }
    }

    /// The process-wide evaluator backed by the standard builtins
    pub fn shared() -> &'static Self {
        &DEFAULT_EVALUATOR
    }

    /// The builtins this evaluator dispatches to
    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    /// Evaluate an argument against `context`
    #[inline]
    pub fn eval(
        &self,
        argument: &Argument,
        context: Option<&dyn FieldLookup>,
    ) -> ExpressionResult<Value> {
        self.eval_with_depth(argument, context, 0)
    }

    fn eval_with_depth(
        &self,
        argument: &Argument,
        context: Option<&dyn FieldLookup>,
        depth: usize,
    ) -> ExpressionResult<Value> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH));
        }

        match argument {
            Argument::Literal(value) => Ok(value.clone()),
            Argument::FieldRef(name) => resolve_field(name, context),
            Argument::FunctionCall(call) => self.eval_call(call, context, depth),
            Argument::Condition(cond) => self.eval_condition(cond, context, depth),
        }
    }

    fn eval_call(
        &self,
        call: &FunctionCall,
        context: Option<&dyn FieldLookup>,
        depth: usize,
    ) -> ExpressionResult<Value> {
        let builtin = self.builtins.get(&call.name)?;
        check_arg_count(&call.name, call.args.len(), builtin.arity)?;

        let args = call
            .args
            .iter()
            .map(|arg| self.eval_with_depth(arg, context, depth + 1))
            .collect::<ExpressionResult<Vec<_>>>()?;

        let result = (builtin.func)(&args)?;
        trace!(function = %call.name, result = %result, "builtin evaluated");
        Ok(result)
    }

    fn eval_condition(
        &self,
        cond: &Condition,
        context: Option<&dyn FieldLookup>,
        depth: usize,
    ) -> ExpressionResult<Value> {
        let lhs = self.eval_with_depth(&cond.lhs, context, depth + 1)?;
        let rhs = self.eval_with_depth(&cond.rhs, context, depth + 1)?;
        compare(&lhs, cond.operator, &rhs).map(Value::Bool)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(BuiltinRegistry::new()))
    }
}

impl Argument {
    /// Evaluate with the standard builtins.
    pub fn evaluate(&self, context: Option<&dyn FieldLookup>) -> ExpressionResult<Value> {
        Evaluator::shared().eval(self, context)
    }
}

fn resolve_field(name: &str, context: Option<&dyn FieldLookup>) -> ExpressionResult<Value> {
    let context = context.ok_or(ExpressionError::NilObject)?;
    context
        .get_field(name)
        .ok_or_else(|| ExpressionError::field_not_found(name))
}

/// Compares two values.
///
/// Both sides must be the same variant. `==` and `!=` use structural
/// equality; the ordering operators are defined for ints, uints and floats
/// only.
pub fn compare(lhs: &Value, operator: Operator, rhs: &Value) -> ExpressionResult<bool> {
    if !lhs.same_kind(rhs) {
        return Err(ExpressionError::type_mismatch(lhs, rhs));
    }

    match operator {
        Operator::Equal => Ok(lhs == rhs),
        Operator::NotEqual => Ok(lhs != rhs),
        _ => match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(operator.holds(a, b)),
            (Value::Uint(a), Value::Uint(b)) => Ok(operator.holds(a, b)),
            (Value::Float(a), Value::Float(b)) => Ok(operator.holds(a, b)),
            _ => Err(ExpressionError::UnsupportedComparison(lhs.type_name())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::parser::parse_argument;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn eval(text: &str, ctx: &Context) -> ExpressionResult<Value> {
        parse_argument(text)?.evaluate(Some(ctx))
    }

    fn person() -> Context {
        Context::builder()
            .field("Name", "Alice")
            .field("Age", 30)
            .field("Tags", vec!["a", "b"])
            .field("Score", 9.5)
            .build()
    }

    #[test]
    fn test_literal_ignores_context() {
        assert_eq!(Argument::literal(5).evaluate(None).unwrap(), Value::Int(5));
    }

    #[test]
    fn test_field_without_context() {
        assert_eq!(
            Argument::field("Age").evaluate(None).unwrap_err(),
            ExpressionError::NilObject
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            eval("$Height", &person()).unwrap_err().to_string(),
            "field Height not found in input"
        );
    }

    #[rstest]
    #[case("$Age", Value::Int(30))]
    #[case("$len($Name)", Value::Int(5))]
    #[case("$len($Tags)", Value::Int(2))]
    #[case("$int($len($Name))", Value::Int(5))]
    #[case("$float($Age)", Value::Float(30.0))]
    #[case("$len($Name)>3", Value::Bool(true))]
    #[case("$Age>=30", Value::Bool(true))]
    #[case("$Age<30", Value::Bool(false))]
    #[case("$Age==30", Value::Bool(true))]
    #[case("$Age!=30", Value::Bool(false))]
    #[case("$Score>9.0", Value::Bool(true))]
    #[case(r#"$Name=="Alice""#, Value::Bool(true))]
    #[case("$Tags==[a,b]", Value::Bool(true))]
    fn test_eval(#[case] text: &str, #[case] expected: Value) {
        assert_eq!(eval(text, &person()).unwrap(), expected);
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            eval("$Age>9.5", &person()).unwrap_err().to_string(),
            "type mismatch: lhs is int, rhs is float"
        );
        assert!(matches!(
            eval("$Name==1", &person()).unwrap_err(),
            ExpressionError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_ordering_on_strings_is_unsupported() {
        assert_eq!(
            eval("$Name>abc", &person()).unwrap_err(),
            ExpressionError::UnsupportedComparison("string")
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            eval("$max($Age)", &person()).unwrap_err(),
            ExpressionError::UnknownFunction("max".into())
        );
    }

    #[test]
    fn test_arity_checked_before_arguments() {
        // $Missing would fail too, the count is reported first
        assert_eq!(
            eval("$len($Missing, 1)", &person()).unwrap_err().to_string(),
            "len expects 1 argument, got 2"
        );
    }

    #[test]
    fn test_uint_ordering() {
        assert!(compare(&Value::Uint(2), Operator::Greater, &Value::Uint(1)).unwrap());
    }

    #[test]
    fn test_nan_is_never_ordered() {
        let nan = Value::Float(f64::NAN);
        assert!(!compare(&nan, Operator::Less, &Value::Float(1.0)).unwrap());
        assert!(!compare(&nan, Operator::Equal, &nan).unwrap());
    }

    #[test]
    fn test_custom_registry() {
        fn double(args: &[Value]) -> ExpressionResult<Value> {
            match args {
                [Value::Int(n)] => Ok(Value::Int(n * 2)),
                _ => Err(ExpressionError::UnsupportedComparison("double")),
            }
        }

        let mut registry = BuiltinRegistry::new();
        registry.register("double", 1, double);
        let evaluator = Evaluator::new(Arc::new(registry));

        let arg = parse_argument("$double($Age)").unwrap();
        assert_eq!(
            evaluator.eval(&arg, Some(&person())).unwrap(),
            Value::Int(60)
        );
    }
}
