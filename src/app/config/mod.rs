mod load_config;

pub use load_config::load_tools_config;
