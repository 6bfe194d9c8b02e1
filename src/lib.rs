//! # `rollbook` - a fixed-width student record store
//!
//! ## Design goals
//!
//! * One flat binary file, no header and no index: the file is exactly
//!   the concatenation of equally sized record slots.
//! * Every operation opens, uses and closes its own file handle; nothing
//!   is cached or locked across calls.
//! * Lookups are linear scans; the first record with a matching key wins.
//!
//! ## Usage guide
//!
//! ### Example
//!
//! ```rust,ignore
//! use rollbook::{Fields, Record, RecordStore};
//!
//! let store = RecordStore::new("./students.dat");
//!
//! store
//!     .append(&Record::new(17, "Ada Lovelace", "Mathematics", 4.0))
//!     .unwrap();
//!
//! for record in store.scan().unwrap() {
//!     println!("{:?}", record.unwrap());
//! }
//!
//! store
//!     .update(17, &Fields::new("Ada King", "Mathematics", 4.0))
//!     .unwrap();
//! ```
//!
//! ### On-disk format
//!
//! Records occupy fixed 108-byte slots in append order. A record is never
//! moved or deleted; an update rewrites its slot in place. A trailing
//! partial slot (for example after an interrupted append) is ignored by
//! readers rather than reported.

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod error;
mod field;
mod record;
mod scan;
mod slot;
mod store;
#[cfg(test)]
mod testutils;

pub use error::Error;
pub use field::{FieldStr, CAPACITY as FIELD_CAPACITY};
pub use record::{Fields, Record};
pub use scan::Scan;
pub use store::RecordStore;
