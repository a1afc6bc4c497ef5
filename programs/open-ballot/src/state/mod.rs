// Persistent ballot state

pub mod ballot;
pub mod ledger;
pub mod voter_record;

pub use ballot::*;
pub use ledger::*;
pub use voter_record::*;
