// Export all instruction modules

pub mod initialize;
pub mod configure_poll;
pub mod fund_for_creator;
pub mod request_allocation;
pub mod submit_vote;
pub mod release_allocation;
pub mod purge_allocations;
pub mod terminate;
pub mod opt_in;
pub mod opt_out;

// Re-export the instruction structs for easy access
pub use initialize::*;
pub use configure_poll::*;
pub use fund_for_creator::*;
pub use request_allocation::*;
pub use submit_vote::*;
pub use release_allocation::*;
pub use purge_allocations::*;
pub use terminate::*;
pub use opt_in::*;
pub use opt_out::*;
