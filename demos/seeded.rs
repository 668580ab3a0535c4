// Seeds a tree with a fixed key set and prints every view of it.
//
// Set AVLTREE_LOG=trace to see each rotation as it happens.
use std::{
    error::Error,
    io::{self, Write},
};

use avltree::AvlTree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const KEYS: [i32; 11] = [10, 5, 15, 3, 8, 12, 20, 2, 4, 17, 25];

fn main() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("AVLTREE_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let mut tree = AvlTree::new();
    for key in KEYS {
        tree.insert(key);
    }

    let mut out = io::stdout().lock();
    writeln!(out, "InOrder:")?;
    tree.write_in_order(&mut out)?;
    writeln!(out, "\n\nPreOrder:")?;
    tree.write_pre_order(&mut out)?;
    writeln!(out, "\n\nAVL tree:")?;
    tree.print_tree(&mut out)?;
    Ok(())
}
