use anyhow::Result;

use crate::cli::ProfileArgs;
use nutricare::core::summary;
use nutricare::models::config::Config;
use nutricare::output::human;

pub fn run(args: &ProfileArgs, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let (body, activity) = super::resolve_profile(&config, args)?;
    let result = summary::summarize(&body, &activity);

    if human_flag {
        println!("{}", human::format_summary(&result, config.units.system));
    } else {
        super::print_json("metrics", &result)?;
    }
    Ok(())
}
