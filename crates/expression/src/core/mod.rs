//! Core syntax types shared by the parser and the evaluator

pub mod ast;

pub use ast::{Argument, Arguments, Condition, FunctionCall, Operator};
