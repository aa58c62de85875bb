mod chain;
mod depths;

pub use chain::{is_branch_header, locate_chain, resolve_block_body, BranchBlock, BranchChain};
pub use depths::{compute_depths, DepthTable};
