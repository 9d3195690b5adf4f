//! yz: score Yatzy rolls from the command line.
//!
//! Subcommands:
//! - score
//! - table
//! - categories

use std::env;
use std::process;

use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use yz_core::{
    best_category_with, score_with, scores_for_roll_with, Config, DiceRoll, ScoreCategory,
};

/// Exit status for bad input (invalid dice, unknown category, unreadable config).
const EXIT_INPUT: i32 = 1;
/// Exit status for malformed command lines.
const EXIT_USAGE: i32 = 2;

#[derive(Serialize)]
struct ScoreReport {
    dice: DiceRoll,
    category: ScoreCategory,
    score: u32,
}

/// Options shared by `score` and `table`.
struct Opts {
    positional: Vec<String>,
    config: Config,
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("YZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // Already-initialized is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(code: i32, msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    process::exit(code);
}

fn parse_opts(cmd: &str, args: &[String], help: fn()) -> Opts {
    let mut positional = Vec::new();
    let mut config_path: Option<String> = None;
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                help();
                process::exit(0);
            }
            "--config" => {
                if i + 1 >= args.len() {
                    fail(EXIT_USAGE, "Missing value for --config");
                }
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option for `yz {cmd}`: {other}");
                fail(EXIT_USAGE, format!("Run `yz {cmd} --help` for usage."));
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    let config = match config_path {
        Some(path) => Config::load(&path)
            .unwrap_or_else(|e| fail(EXIT_INPUT, format!("Invalid config {path}: {e}"))),
        None => Config::default(),
    };

    Opts {
        positional,
        config,
        json,
    }
}

fn parse_roll(s: &str) -> DiceRoll {
    s.parse()
        .unwrap_or_else(|e| fail(EXIT_INPUT, format!("Invalid dice {s:?}: {e}")))
}

fn parse_category(s: &str) -> ScoreCategory {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        fail(EXIT_INPUT, "Run `yz categories` to list valid names.")
    })
}

fn print_score_help() {
    println!(
        r#"yz score

USAGE:
    yz score <DICE> <CATEGORY> [--config PATH] [--json]

ARGS:
    <DICE>        Five dice, e.g. "6, 2, 2, 2, 6" or 62226
    <CATEGORY>    Category name, e.g. full_house (see `yz categories`)

OPTIONS:
    --config PATH    YAML ruleset (default: built-in rewards)
    --json           Print a JSON object instead of the bare score
"#
    );
}

fn cmd_score(args: &[String]) {
    let opts = parse_opts("score", args, print_score_help);
    let [dice, category] = opts.positional.as_slice() else {
        eprintln!("Usage: yz score <DICE> <CATEGORY> [--config PATH] [--json]");
        process::exit(EXIT_USAGE);
    };

    let roll = parse_roll(dice);
    let category = parse_category(category);
    let score = score_with(category, &roll, &opts.config.scoring);
    tracing::debug!(%roll, %category, score, "scored roll");

    if opts.json {
        let report = ScoreReport {
            dice: roll,
            category,
            score,
        };
        match serde_json::to_string(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => fail(EXIT_INPUT, format!("Failed to encode JSON: {e}")),
        }
    } else {
        println!("{score}");
    }
}

fn print_table_help() {
    println!(
        r#"yz table

USAGE:
    yz table <DICE> [--config PATH] [--json]

Prints the score of <DICE> in every category and the best category.

OPTIONS:
    --config PATH    YAML ruleset (default: built-in rewards)
    --json           Print a JSON object instead of a table
"#
    );
}

fn cmd_table(args: &[String]) {
    let opts = parse_opts("table", args, print_table_help);
    let [dice] = opts.positional.as_slice() else {
        eprintln!("Usage: yz table <DICE> [--config PATH] [--json]");
        process::exit(EXIT_USAGE);
    };

    let roll = parse_roll(dice);
    let scores = scores_for_roll_with(&roll, &opts.config.scoring);
    let (best, best_score) = best_category_with(&roll, &opts.config.scoring);

    if opts.json {
        let rows: Vec<_> = ScoreCategory::ALL
            .iter()
            .map(|c| json!({ "category": c, "score": scores[c.index()] }))
            .collect();
        let out = json!({
            "dice": roll,
            "scores": rows,
            "best": { "category": best, "score": best_score },
        });
        println!("{out}");
        return;
    }

    println!("dice: {roll}");
    for c in ScoreCategory::ALL {
        println!("{:<16} {:>3}", c.name(), scores[c.index()]);
    }
    println!("best: {best} ({best_score})");
}

fn cmd_categories() {
    for c in ScoreCategory::ALL {
        println!("{}", c.name());
    }
}

fn print_help() {
    eprintln!(
        r#"yz - Yatzy roll scorer

USAGE:
    yz <COMMAND> [OPTIONS]

COMMANDS:
    score <DICE> <CATEGORY>    Score one roll in one category
    table <DICE>               Score one roll in every category
    categories                 List category names

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Set YZ_LOG (e.g. YZ_LOG=debug) to control log output on stderr.
"#
    );
}

fn print_version() {
    println!("yz {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "table" => {
            cmd_table(&args[2..]);
        }
        "categories" => {
            cmd_categories();
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `yz --help` for usage.");
            process::exit(EXIT_USAGE);
        }
    }
}
