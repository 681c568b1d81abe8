pub mod build;
pub mod extract_issue;
pub mod install_requirements;
pub mod workflow;
