use std::process::ExitCode;

use kubeconfig_correct::{cli::Cli, config::Config, errors::AppError};

fn main() -> ExitCode {
    kubeconfig_correct::logging::init();

    let cli = <Cli as clap::Parser>::parse();
    let config = Config::from(cli);

    match kubeconfig_correct::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ AppError::Yaml { .. }) => {
            // yaml errors go to stdout with their own exit code
            println!("{err}");
            ExitCode::from(AppError::YAML_EXIT_CODE)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
