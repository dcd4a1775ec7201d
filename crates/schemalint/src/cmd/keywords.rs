use schemalint::syntax::ValidationConfig;

use crate::cmd::KeywordsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_keywords, OutputFormat};

pub fn run(args: KeywordsArgs, format: OutputFormat) -> CliResult<i32> {
    let config = ValidationConfig::new(args.dialect.into());
    print_keywords(config.dialect(), config.registry(), format);
    Ok(SUCCESS)
}
