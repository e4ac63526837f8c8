//! godiag: render a Go move record as a text diagram.
//!
//! ## Usage
//!
//! - `godiag "B D4" "W C3" ...` - Replay moves and print the diagram
//! - `godiag --range 2-3 ...` - Label only moves 2 through 3
//! - `godiag --limit 5 ...` - Apply only the first 5 entries
//! - `godiag` - Show a small capture demo

use anyhow::{bail, Context};
use clap::Parser;

use godiag::apply::{Move, Selection};
use godiag::board::{format_coord, parse_coord, Stone};
use godiag::diagram::{render, Diagram};

/// godiag: static Go diagram engine
#[derive(Parser)]
#[command(name = "godiag")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size
    #[arg(short, long, default_value_t = 9)]
    size: usize,

    /// Label only moves START-END (for example "16-18")
    #[arg(short, long, value_name = "START-END")]
    range: Option<String>,

    /// Apply only the first K entries of the move list
    #[arg(short, long, value_name = "K")]
    limit: Option<usize>,

    /// Moves in record order, like "B D4", "W Q16", or "B pass"
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let selection = match (&cli.range, cli.limit) {
        (Some(range), None) => parse_range(range)?,
        (None, Some(k)) => Selection::first(k),
        (None, None) => Selection::all(),
        (Some(_), Some(_)) => bail!("--range and --limit cannot be combined"),
    };

    let moves = if cli.moves.is_empty() {
        demo_moves()
    } else {
        parse_moves(&cli.moves, cli.size)?
    };

    let diagram = render(cli.size, &moves, &selection)?;
    print_diagram(&diagram);
    Ok(())
}

fn parse_range(s: &str) -> anyhow::Result<Selection> {
    let (start, end) = s
        .split_once('-')
        .with_context(|| format!("range {s:?} is not of the form START-END"))?;
    let start = start.trim().parse().with_context(|| format!("bad range start {start:?}"))?;
    let end = end.trim().parse().with_context(|| format!("bad range end {end:?}"))?;
    Ok(Selection::range(start, end)?)
}

fn parse_moves(args: &[String], size: usize) -> anyhow::Result<Vec<Move>> {
    let mut moves = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        let number = (i + 1) as u32;
        let (color, coord) = arg
            .split_once(' ')
            .with_context(|| format!("move {number} ({arg:?}) is not of the form \"B D4\""))?;
        let stone = match color.to_ascii_uppercase().as_str() {
            "B" => Stone::Black,
            "W" => Stone::White,
            _ => bail!("move {number}: unknown color {color:?}"),
        };
        if coord.eq_ignore_ascii_case("pass") {
            moves.push(Move::pass(number, stone));
            continue;
        }
        let pt = parse_coord(coord, size)
            .with_context(|| format!("move {number}: bad coordinate {coord:?}"))?;
        moves.push(Move::play(number, stone, pt));
    }
    Ok(moves)
}

/// The classic corner capture: White's third move takes Black's stone.
fn demo_moves() -> Vec<Move> {
    vec![
        Move::play(1, Stone::Black, (0, 0)),
        Move::play(2, Stone::White, (1, 0)),
        Move::play(3, Stone::White, (0, 1)),
    ]
}

fn print_diagram(diagram: &Diagram) {
    print!("{}", diagram.board);
    println!("{} moves applied", diagram.applied.len());

    for (pt, n) in sorted_labels(diagram) {
        println!("{n} = {}", format_coord(pt, diagram.board.size));
    }

    for line in &diagram.caption {
        println!("{line}");
    }
}

/// Labels in move-number order, for stable output.
fn sorted_labels(diagram: &Diagram) -> Vec<(godiag::board::Point, u32)> {
    let mut labels: Vec<_> = diagram.labels.iter().map(|(&pt, &n)| (pt, n)).collect();
    labels.sort_by_key(|&(_, n)| n);
    labels
}
