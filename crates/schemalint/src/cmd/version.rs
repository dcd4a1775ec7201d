use schemalint::syntax::{KeywordDialect, DEFAULT_MAX_DEPTH};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("schemalint {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: schemalint");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!("default_dialect: {}", KeywordDialect::default().name());
    println!("default_max_depth: {DEFAULT_MAX_DEPTH}");
    println!("features: cli=true");

    Ok(SUCCESS)
}
