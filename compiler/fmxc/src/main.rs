//! export-funcmap CLI

use fmxc::commands::{parse_args, run_export, usage, Command};

fn main() {
    fmxc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_oracle = std::env::var("FMX_ORACLE").ok();

    match parse_args(&args, env_oracle) {
        Ok(Command::Help) => print!("{}", usage()),
        Ok(Command::Version) => println!("export-funcmap {}", env!("CARGO_PKG_VERSION")),
        Ok(Command::Export(export)) => {
            if let Err(err) = run_export(&export) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprint!("{}", usage());
            eprintln!();
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
