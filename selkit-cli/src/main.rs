//! selkit CLI
//!
//! Builds a CSS selector from ordered part tokens, e.g.
//!
//! ```text
//! selkit element=a 'attr=href$=".png"' pseudo-class=focus
//! selkit id=nav '>' element=ul _ element=li
//! ```

mod parts;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Build a CSS selector from ordered parts and combinators.
#[derive(Debug, Parser)]
#[command(name = "selkit", version, about)]
struct Cli {
    /// Parts as `<category>=<value>` (element, id, class, attr, pseudo-class,
    /// pseudo-element) and combinators (`>`, `+`, `~`, `_` for descendant).
    #[arg(required = true, allow_hyphen_values = true)]
    parts: Vec<String>,

    /// Print the result as a JSON object.
    #[arg(long)]
    json: bool,
}

/// JSON output shape for `--json`.
#[derive(Debug, Serialize)]
struct Output<'a> {
    selector: &'a str,
}

/// The text printed for `cli`: the bare selector, or a JSON object with `--json`.
fn render(cli: &Cli) -> Result<String> {
    let selector = parts::build(&cli.parts)?;
    if cli.json {
        Ok(selkit_common::serialize(&Output {
            selector: &selector,
        })?)
    } else {
        Ok(selector)
    }
}

fn main() {
    let cli = Cli::parse();
    match render(&cli) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
