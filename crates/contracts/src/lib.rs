//! Data contracts shared by the back-office frontend and the REST backend,
//! plus the pure list/validation logic every management page builds on.

pub mod domain;
pub mod shared;
pub mod system;
