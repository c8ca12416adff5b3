mod generate;
mod show;

pub use generate::cmd_generate;
pub use show::cmd_show;
