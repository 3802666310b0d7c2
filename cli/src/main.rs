use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use friendgraph::{input, output, FriendGraph, Input, Profile, Session};

use crate::config::Config;

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let graph = graph(&config)?;
    let mut input = script(&config);
    let mut session = Session::new(graph)
        .format(config.format.format())
        .fail_fast(config.fail_fast);
    session.run(input.as_mut(), &mut output::StdOut::default())?;
    Ok(())
}

fn graph(config: &Config) -> Result<FriendGraph> {
    let profiles = match &config.profiles {
        None => vec![],
        Some(path) => profiles(path)?,
    };
    info!("Starting with {} profiles.", profiles.len());
    Ok(FriendGraph::new(profiles)?)
}

fn profiles(path: &Path) -> Result<Vec<Profile>> {
    let file = File::open(path).context("read profiles")?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("parse profiles")
}

fn script(config: &Config) -> Box<dyn Input> {
    match &config.input {
        None => Box::new(input::StdIn::new()),
        Some(path) => Box::new(input::File::new(path)),
    }
}
