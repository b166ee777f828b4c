// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::path::PathBuf;

use addressbook_find::commands::{format_person_list, parse_command};
use addressbook_find::storage::load_address_book;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "addressbook-find")]
#[command(about = "Search an address book by name, tag, phone, or email", long_about = None)]
#[command(version)]
struct Cli {
    /// Address book JSON file
    #[arg(short, long, env = "ADDRESSBOOK_DATA", default_value = "addressbook.json")]
    data: PathBuf,
    /// Command line to run, e.g. `find alice friend 91234567`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let book = load_address_book(&cli.data)?;
    let command = parse_command(&cli.command.join(" "))?;
    let result = command.execute(&book);

    if !result.persons.is_empty() {
        println!("{}", format_person_list(&result.persons));
    }
    println!("{}", result.feedback);

    Ok(())
}
