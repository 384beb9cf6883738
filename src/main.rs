use std::process::ExitCode;

use splat::Conf;

fn main() -> ExitCode {
    env_logger::init();
    match splat::run(&Conf::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
