// Typed entity records and their create/update payloads.
//
// Every record carries a store-assigned `id: i64`; payload structs carry
// everything except the id and are used for both POST (create) and PUT
// (full-field update).

pub mod locations;
pub mod reagents;
pub mod reports;
pub mod samples;
pub mod sops;
pub mod testing;
pub mod users;
pub mod warehouses;

pub use locations::*;
pub use reagents::*;
pub use reports::*;
pub use samples::*;
pub use sops::*;
pub use testing::*;
pub use users::*;
pub use warehouses::*;
