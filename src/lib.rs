//! A compiler and evaluator for RPAL (Right-reference Parallel
//! Applicative Language).
//!
//! # Pipeline
//!
//! - [`lexer`] - tokenizes source text
//! - [`parser`] - builds an abstract syntax tree from tokens
//! - [`ast`] - the shared tree type's AST-side printing
//! - [`normalizer`] - rewrites the AST into a standardized tree (ST)
//! - [`cse`] - the Control-Stack-Environment machine that evaluates an ST
//! - [`driver`] - wires the stages together into the CLI's pipeline
//! - [`tree`] - the `Tree`/`Label`/`Operator` type shared by the AST and ST
//! - [`token`] - token kinds and source location tracking
//!
//! # Example
//!
//! ```
//! use myrpal::lexer::Lexer;
//! use myrpal::parser::Parser;
//! use myrpal::normalizer::normalize;
//! use myrpal::cse::evaluate;
//!
//! let source = "let x = 5 in x + 3";
//!
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize().expect("lexer error");
//!
//! let mut parser = Parser::new(tokens);
//! let ast = parser.parse().expect("parse error");
//!
//! let st = normalize(ast).expect("normalization error");
//!
//! let mut out = Vec::new();
//! let value = evaluate(&st, &mut out, false).expect("evaluation error");
//! assert_eq!(value.render_raw(), "8");
//! ```

pub mod ast;
pub mod cse;
pub mod driver;
pub mod lexer;
pub mod normalizer;
pub mod parser;
pub mod token;
pub mod tree;
