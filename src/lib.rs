/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod atterberg;
mod classification;
mod moisture;
mod phases;
mod report;
mod samples;
mod session;
pub use crate::atterberg::*;
pub use crate::classification::*;
pub use crate::moisture::*;
pub use crate::phases::*;
pub use crate::report::*;
pub use crate::samples::*;
pub use crate::session::*;
