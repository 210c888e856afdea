//! Lines command - Print the winning line table

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    tictactoe::{Coordinate, Dimensionality, lines},
};

#[derive(Parser, Debug)]
#[command(about = "List the winning lines of a board")]
pub struct LinesArgs {
    /// Board dimensionality (2 or 3)
    #[arg(long, short = 'd', default_value_t = 2)]
    pub dimensions: usize,
}

pub fn execute(args: LinesArgs) -> Result<()> {
    let dimensionality = Dimensionality::try_from(args.dimensions)?;
    let table = lines::winning_lines(dimensionality);

    print_section(&format!("{dimensionality} winning lines"));
    print_kv("Table entries", &table.len().to_string());
    print_kv(
        "Distinct lines",
        &lines::distinct_lines(dimensionality).len().to_string(),
    );
    println!();

    for (n, line) in table.iter().enumerate() {
        let cells: Vec<String> = line
            .iter()
            .map(|&index| Coordinate::from_index(index, dimensionality).to_string())
            .collect();
        println!("  {n:>2}  {}", cells.join(" "));
    }
    Ok(())
}
