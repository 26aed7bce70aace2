pub mod git;
pub mod matcher;
pub mod remote;
