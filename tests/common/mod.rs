use chrono::prelude::*;

use simplelog::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use std::path::PathBuf;
use std::fs::{File, create_dir_all};

/// Seed shared by the integration tests, so failures can be reproduced.
pub const TEST_SEED: u64 = 20061106;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

pub fn prepare_test_directory(test_directory_name: &str) -> PathBuf {
    let test_output_parent_directory = "test_output";

    let mut path_buf = PathBuf::from(test_output_parent_directory);
    path_buf.push(format!("{}-{}", filename_timestamp(), test_directory_name));

    create_dir_all(&path_buf).expect("Test output directory could not be created");

    let log_file = create_log_file(&mut path_buf);

    // Tests in the same binary share the logger, only the first one installs it
    let installed = CombinedLogger::init(
        vec![
            TermLogger::new(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
            WriteLogger::new(LevelFilter::Debug, Config::default(), log_file),
        ]
    );

    if installed.is_ok() {
        info!("Created test directory {:?} and initialized logging", path_buf);
    }

    path_buf
}

fn create_log_file(parent_directory: &mut PathBuf) -> File {
    parent_directory.push(format!("log-{}", filename_timestamp()));
    parent_directory.set_extension("log");

    let log_file = File::create(&parent_directory).expect("Log file could not be created");
    // Restore state before pushing and setting extension
    parent_directory.pop();

    log_file
}

/// Returns the current time formatted like "2014-11-28T120009+0000", i.e.
/// an ISO 8601 timestamp with the colons removed, since colons are traditionally
/// used as directory separators on mac and linux
fn filename_timestamp() -> String {
    Utc::now()
        .to_rfc3339()
        .replace(":", "")
}
