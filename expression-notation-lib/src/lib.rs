//! Parses arithmetic expressions written in infix, prefix or postfix notation into
//! binary expression trees, which can be rendered in any of the three notations
//! and evaluated against variable bindings.

pub mod interpreter;
