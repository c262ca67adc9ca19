use clap::Parser;
use log::info;
use memory_board::api::{handle_query, GameResponse, COLUMNS_PARAM, ROWS_PARAM};
use memory_board::{BoardConfig, BoardGenerator};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a shuffled memory game board", long_about = None)]
struct Args {
    /// Number of rows (1-6)
    #[arg(long, allow_hyphen_values = true)]
    rows: Option<String>,

    /// Number of columns (1-6)
    #[arg(long, allow_hyphen_values = true)]
    columns: Option<String>,

    /// Fixed shuffle seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,

    /// Also print the board as a text grid on stderr
    #[arg(long)]
    grid: bool,
}

/// Present arguments as query pairs, so parsing matches the request layer.
fn query_pairs(args: &Args) -> Vec<(&'static str, &str)> {
    let rows = args.rows.as_deref().map(|v| (ROWS_PARAM, v));
    let columns = args.columns.as_deref().map(|v| (COLUMNS_PARAM, v));
    rows.into_iter().chain(columns).collect()
}

fn generator_for(args: &Args) -> BoardGenerator {
    let mut config = BoardConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    BoardGenerator::with_config(config)
}

fn respond(args: &Args) -> GameResponse {
    let mut generator = generator_for(args);
    info!("using seed {}", generator.seed());
    handle_query(query_pairs(args), &mut generator)
}

fn exit_status(response: &GameResponse) -> u8 {
    if response.is_ok() {
        0
    } else {
        1
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let response = respond(&args);

    if args.grid {
        if let GameResponse::Ok(game) = &response {
            eprintln!("{}", game.board);
        }
    }

    match response.to_json(args.pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::from(exit_status(&response))
}
