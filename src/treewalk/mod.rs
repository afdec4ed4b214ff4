mod environment;
mod errors;
mod interpreter;
mod operations;
mod value;

pub use environment::Environment;
pub use errors::{InterpreterError, RuntimeResult};
pub use interpreter::Interpreter;
pub use operations::eval_binary;
pub use value::{Value, ValueKind, NONE_STR};
