use std::env;
use std::io;
use std::process::ExitCode;

use env_logger::Env;

use merge_bench::Config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Non UTF-8 arguments become replacement characters and fail validation like any other junk.
    let args = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let result = Config::from_env()
        .and_then(|config| merge_bench::run(args, &config, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err}");
            eprintln!("Error");
            ExitCode::FAILURE
        }
    }
}
