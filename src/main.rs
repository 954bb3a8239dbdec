use clap::Parser;

use ct_lines::EXIT_CONFIG_ERROR;
use ct_lines::cli::Cli;
use ct_lines::commands::run;
use ct_lines::output::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            ErrorOutput::new(cli.color).report(&e);
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}
