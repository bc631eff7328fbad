use log::error;
use macroquad::prelude::*;

use client::run;
use common::config::GameConfig;

const WINDOW_SIZE: i32 = 600;

fn window_conf() -> Conf {
    Conf {
        window_title: "Maze Game".to_owned(),
        window_width: WINDOW_SIZE,
        window_height: WINDOW_SIZE,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    run::run(config).await;
}
