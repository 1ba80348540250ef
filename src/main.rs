#[macro_use]
extern crate clap;

#[macro_use]
mod common;
mod class_record;
mod csv_source;
mod database;
mod frame;
mod loader;

use clap::{App, ArgMatches};
use frame::OutputFormat;
use mhlog::err;
use rusqlite::Connection;
use std::io;
use std::path::PathBuf;
use std::process;

/// Options collected from the command line.
#[derive(Debug, Clone)]
struct Options {
    /// Grades CSV file to load.
    csv_path: PathBuf,
    /// Database file, or `None` for an in-memory database.
    database: Option<PathBuf>,
    format: OutputFormat,
}

impl Options {
    fn from_matches(m: &ArgMatches<'_>) -> Options {
        Options {
            // CSV is a required argument
            csv_path: m.value_of("CSV").map(PathBuf::from).unwrap_or_default(),
            database: m.value_of("DATABASE").map(PathBuf::from),
            format: if m.is_present("JSON") {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
        }
    }

    fn open_database(&self) -> rusqlite::Result<Connection> {
        match &self.database {
            Some(path) => Connection::open(path),
            None => Connection::open_in_memory(),
        }
    }
}

fn run(opts: &Options) -> anyhow::Result<()> {
    let mut conn = opts.open_database()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    loader::load_sql(&mut conn, &opts.csv_path, &mut out, opts.format)?;
    Ok(())
}

fn app<'a, 'b>() -> App<'a, 'b> {
    clap_app!(gradebook =>
        (version: crate_version!())
        (author: "Magnus Aa. Hirth <magnus.hirth@gmail.com>")
        (about: "Load a CSV file of class grades into a SQLite table and print it.")
        (@arg CSV: +required "CSV file with course, midterm_1, midterm_2 and midterm_3 columns.")
        (@arg DATABASE: -d --database +takes_value "SQLite database file. Defaults to an in-memory database.")
        (@arg JSON: --json "Print the table as JSON.")
    )
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let m = app().get_matches();
    let opts = Options::from_matches(&m);
    if let Err(e) = run(&opts) {
        err!("Failed to load {}: {:#}", opts.csv_path.display(), e);
        process::exit(1);
    }
}
