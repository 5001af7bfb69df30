use anyhow::{Context, Result};
use console::style;

use modpack_finder::api::modpackindex::ModpackIndexClient;
use modpack_finder::cli::{self, Invocation};
use modpack_finder::commands;

fn run(args: &[String]) -> Result<()> {
    let config = match cli::parse_args(args)? {
        Invocation::Help => {
            eprintln!("{}", cli::usage(args.first().map(String::as_str)));
            return Ok(());
        }
        Invocation::Run(config) => config,
    };

    let client =
        ModpackIndexClient::new().context("Failed to initialize Modpack Index API client")?;

    commands::list::run(&client, &config)
}

fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if let Err(err) = run(&args) {
        eprintln!("{}", style("[ERROR]").for_stderr().bold().red());
        eprintln!("{:?}", style(err).for_stderr().red());
        std::process::exit(1);
    }
}
