// SPDX-License-Identifier: GPL-3.0-only

use anywho::Error;

use crate::api::CatalogApi;
use crate::app::{AppState, Message, render, render_detail, update};
use crate::config::Config;

mod api;
mod app;
mod config;
mod entities;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        print_help();
        return Ok(());
    }

    let flag = args.get(1).map(String::as_str).unwrap_or("-l");
    if !matches!(flag, "-l" | "-g" | "-r") {
        println!("Invalid flag: {flag}");
        print_help();
        return Ok(());
    }

    let api = CatalogApi::new(Config::default())?;
    let mut state = AppState::new();

    update(&mut state, Message::FetchStarted);
    match api.fetch_all_pokemon().await {
        Ok(catalog) => update(&mut state, Message::CatalogLoaded(catalog)),
        Err(err) => update(&mut state, Message::FetchFailed(err)),
    }

    match flag {
        "-g" => {
            update(&mut state, Message::ToggleView);
            println!("{}", render(&state));
        }
        "-r" => {
            update(&mut state, Message::SetRandom);
            println!("{}", render_detail(&state));
        }
        _ => println!("{}", render(&state)),
    }

    Ok(())
}

fn print_help() {
    println!(
        "Usage: {} [FLAG]",
        std::env::args()
            .next()
            .unwrap_or_else(|| "kantodex".to_string())
    );
    println!();
    println!("FLAGS:");
    println!("  -l    Show the catalog as a list (default)");
    println!("  -g    Show the catalog as a grid");
    println!("  -r    Show the detail view of a random Pokémon");
    println!();
    println!("You can only pass one flag at a time.");
}
