mod config;

use std::env;
use std::num::ParseIntError;

use avl_tree::AVLTree;
use log::{info, warn};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use config::Config;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid key `{arg}`")]
    InvalidKey {
        arg: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to initialize logging")]
    Logger(#[from] log::SetLoggerError),
}

fn initialize_logging(level: log::LevelFilter) -> Result<(), DemoError> {
    TermLogger::init(level, LogConfig::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn join(keys: impl IntoIterator<Item = impl ToString>) -> String {
    keys.into_iter().map(|key| key.to_string()).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<(), DemoError> {
    let config = Config::from_args(env::args().skip(1))?;
    initialize_logging(config.log_level)?;

    println!("Inserting values in order: ");
    println!("{}", join(&config.keys));
    println!();

    println!("Building AVL tree...");
    let mut tree = AVLTree::new();
    for &key in &config.keys {
        if !tree.insert(key) {
            warn!("{} is already in the tree", key);
        }
    }
    info!("tree has {} keys and height {}", tree.len(), tree.height());
    println!();

    println!("Inorder Traversal (sorted order):");
    println!("--------------------------------");
    println!("{}", join(&tree));
    println!();

    println!("Tree Structure (with Balance Factors):");
    println!("--------------------------------------");
    println!("{}", tree);

    Ok(())
}
