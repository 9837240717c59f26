mod policy;
mod scheduler;
mod seek;
mod validator;

pub use policy::*;
pub use scheduler::*;
pub use seek::*;
pub use validator::*;
