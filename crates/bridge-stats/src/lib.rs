//! Frequency tables of double-dummy trick counts.
//!
//! Each recorded deal contributes one count per seat and denomination, binned by
//! the seat's partnership strength and, for trump contracts, by the fit in that
//! suit. Tables are plain nested counts so partial tables from separate runs can
//! be merged by addition.

pub mod aggregate;
pub mod error;
pub mod persist;
pub mod table;

pub use aggregate::{deal_indices, record_deal, TrickOracle};
pub use error::{Axis, StatsError};
pub use persist::{load_table, read_deals, save_table, DealLog};
pub use table::{FrequencyTable, NoTrumpTable, TableIndex, TrumpTable};
