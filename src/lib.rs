//! Identify controller actions by their controller name, action name and parameter types, and
//! look up metadata registered against them.

pub use error::SignatureError;
pub use signature::{ActionSignature, ParamType, ParamTypeTuple};
pub use table::ActionTable;

mod error;
mod signature;
mod table;
