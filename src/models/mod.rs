pub mod employee;
pub mod responses;

pub use employee::*;
pub use responses::*;
