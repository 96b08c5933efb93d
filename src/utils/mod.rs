pub mod chat;
pub mod editor;
pub mod git;
pub mod process;
#[cfg(test)]
pub mod test_utils;
pub mod yq;
