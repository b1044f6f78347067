pub mod parser;
mod tests;
pub mod tokenizer;

pub use parser::{ASTNode, ASTNodeType, Parser, ParserError, parse};
pub use tokenizer::{Token, TokenSubType, TokenType, Tokenizer, TokenizerError};

// Re-export common types
pub use reckoner_common::{CalcError, CalcErrorKind, Value};
