#[macro_use]
extern crate log;
extern crate simgeom;
extern crate simplelog;

use simgeom::VerificationBuilder;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use std::process;

fn main() {
    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .expect("Logger could not be initialized");

    match VerificationBuilder::new().build().run() {
        Ok(_) => info!("Successfully passed all tests!"),
        Err(err) => {
            error!("{}. Abort!", err);
            process::exit(1);
        }
    }
}
