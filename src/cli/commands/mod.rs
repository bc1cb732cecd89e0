mod check_config;
mod seed;

pub use check_config::cmd_check_config;
pub use seed::cmd_seed;
