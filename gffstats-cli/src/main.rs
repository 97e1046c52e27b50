mod cli;
mod handlers;

use anyhow::Result;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "gffstats";
    pub const BIN_NAME: &str = "gffstats";
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli::create_gffstats_cli().get_matches();
    log::debug!("{} {}", consts::PKG_NAME, consts::VERSION);

    handlers::run_gffstats(&matches)
}
