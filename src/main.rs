// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: runs the search for the configured number of
//! generations, printing surviving staircases to stdout and one progress
//! line per generation to stderr.

use std::env;
use std::io::{self, BufWriter, Write};

use staircase_search::config::{parse_args, Command, USAGE};
use staircase_search::geometry::GENERATIONS_ENV;
use staircase_search::output::WriterEmitter;
use staircase_search::SearchContext;

fn main() {
    let env_generations = env::var(GENERATIONS_ENV).ok();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let exit_code = run(
        env::args().skip(1),
        env_generations.as_deref(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run<I, W, E>(args: I, env_generations: Option<&str>, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = String>,
    W: Write,
    E: Write,
{
    let config = match parse_args(args, env_generations) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            return if out.write_all(USAGE.as_bytes()).is_ok() { 0 } else { 1 };
        }
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            let _ = err.write_all(USAGE.as_bytes());
            return 2;
        }
    };

    let quiet = config.quiet;
    let mut ctx = SearchContext::new(config);
    let mut emitter = WriterEmitter::new(BufWriter::new(out));

    let result = ctx.run(&mut emitter, |report| {
        if !quiet {
            let _ = writeln!(err, "{report}");
        }
    });
    if let Err(e) = result.and_then(|()| emitter.flush().map_err(Into::into)) {
        let _ = writeln!(err, "error: {e}");
        return 1;
    }

    let _ = writeln!(err, "Done, size={}", ctx.final_pool_size());
    0
}
