use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use stockroom_cli::{Args, Session};

const WELCOME: &str = "Welcome to the Inventory Management System. Type `help` for commands.";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    stockroom_observability::init(&args.log_level);

    let config = args.resolve_config()?;
    tracing::info!(
        restock_threshold = config.restock_threshold,
        categories = config.categories.len(),
        seeded = !args.no_seed,
        "starting session"
    );

    let (mut session, notices) = if args.no_seed {
        (Session::new(config)?, Vec::new())
    } else {
        Session::with_sample_data(config)?
    };

    let mut stdout = io::stdout().lock();
    for notice in &notices {
        writeln!(stdout, "{notice}")?;
    }
    writeln!(stdout, "{WELCOME}")?;

    let mut input = io::stdin().lock().lines();
    loop {
        write!(stdout, "{}> ", session.active_name())?;
        stdout.flush().context("failed to flush stdout")?;

        let Some(line) = input.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;

        let outcome = session.handle_line(&line);
        for line in &outcome.lines {
            writeln!(stdout, "{line}")?;
        }
        if outcome.exit {
            break;
        }
    }

    Ok(())
}
