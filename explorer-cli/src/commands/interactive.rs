//! Interactive command handler
//!
//! Runs the dashboard as a line-oriented loop: every line read is one
//! submission of the search form.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::dashboard::Dashboard;
use crate::render::{print_entries, print_error, print_kept_term, print_title};

/// Line that leaves the loop
const EXIT_COMMAND: &str = "exit";

/// Handle `interactive`, reading from stdin
pub async fn handle_interactive_command(mut dashboard: Dashboard) -> Result<()> {
    print_title();
    println!();
    print_entries(&dashboard.entries());

    let stdin = BufReader::new(tokio::io::stdin());
    run_loop(&mut dashboard, stdin).await
}

/// Submit every line of `input` until `exit` or end of input
async fn run_loop<R>(dashboard: &mut Dashboard, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            debug!("End of input");
            break;
        };

        if line.trim() == EXIT_COMMAND {
            break;
        }

        dashboard.set_search_term(line);
        dashboard.handle_add_repository().await;

        if dashboard.has_error() {
            print_error(dashboard.input_error());
            print_kept_term(dashboard.search_term());
        } else {
            print_entries(&dashboard.entries());
        }
    }

    println!();
    Ok(())
}
