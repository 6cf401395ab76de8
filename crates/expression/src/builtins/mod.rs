//! Built-in functions callable from rule arguments as `$name(...)`
//!
//! The registry is small and fixed: `len`, `int` and `float`. Each entry
//! records its arity so the evaluator can reject a bad call before any
//! argument is evaluated.

pub mod conversion;
pub mod util;

use std::collections::HashMap;

use crate::error::{ExpressionError, ExpressionResult};
use crate::value::Value;

/// Type alias for a builtin function
pub type BuiltinFunction = fn(&[Value]) -> ExpressionResult<Value>;

/// A registered builtin and its exact argument count.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub arity: usize,
    pub func: BuiltinFunction,
}

/// Registry of all builtin functions
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    functions: HashMap<&'static str, Builtin>,
}

impl BuiltinRegistry {
    /// Create a new builtin registry with all standard functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        registry.register_util_functions();
        registry.register_conversion_functions();

        registry
    }

    /// Register a builtin function
    pub fn register(&mut self, name: &'static str, arity: usize, func: BuiltinFunction) {
        self.functions.insert(name, Builtin { arity, func });
    }

    /// Look up a builtin by name
    pub fn get(&self, name: &str) -> ExpressionResult<&Builtin> {
        self.functions
            .get(name)
            .ok_or_else(|| ExpressionError::UnknownFunction(name.to_owned()))
    }

    /// Call a builtin function by name with already evaluated arguments
    pub fn call(&self, name: &str, args: &[Value]) -> ExpressionResult<Value> {
        let builtin = self.get(name)?;
        check_arg_count(name, args.len(), builtin.arity)?;
        (builtin.func)(args)
    }

    /// Check if a function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Get all function names, sorted
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn register_util_functions(&mut self) {
        self.register("len", 1, util::len);
    }

    fn register_conversion_functions(&mut self) {
        self.register("int", 1, conversion::int);
        self.register("float", 1, conversion::float);
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to check argument count
pub(crate) fn check_arg_count(
    func_name: &str,
    actual: usize,
    expected: usize,
) -> ExpressionResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ExpressionError::argument_count(func_name, expected, actual))
    }
}

/// Helper to unpack a single-argument call
pub(crate) fn single_arg<'a>(func_name: &str, args: &'a [Value]) -> ExpressionResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(ExpressionError::argument_count(func_name, 1, args.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let registry = BuiltinRegistry::new();
        assert_eq!(registry.function_names(), ["float", "int", "len"]);
        assert!(registry.has_function("len"));
        assert!(!registry.has_function("max"));
    }

    #[test]
    fn test_unknown_function() {
        let registry = BuiltinRegistry::new();
        assert_eq!(
            registry.call("max", &[Value::Int(1)]).unwrap_err(),
            ExpressionError::UnknownFunction("max".into())
        );
    }

    #[test]
    fn test_arity_is_enforced() {
        let registry = BuiltinRegistry::new();
        let err = registry
            .call("len", &[Value::from("a"), Value::from("b")])
            .unwrap_err();
        assert_eq!(err.to_string(), "len expects 1 argument, got 2");
        assert!(registry.call("int", &[]).is_err());
    }

    #[test]
    fn test_custom_registration() {
        fn answer(_: &[Value]) -> ExpressionResult<Value> {
            Ok(Value::Int(42))
        }

        let mut registry = BuiltinRegistry::new();
        registry.register("answer", 0, answer);
        assert_eq!(registry.call("answer", &[]).unwrap(), Value::Int(42));
    }
}
