use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use iconlib::UPDATER;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use lazy_static::lazy_static;

lazy_static! {
    static ref BAR: Arc<Mutex<CLIProgressBar>> = Arc::new(Mutex::new(CLIProgressBar::new()));
}

#[derive(Debug)]
pub struct CLIProgressBar {
    bar: indicatif::ProgressBar,
}

impl CLIProgressBar {
    pub fn new() -> Self {
        CLIProgressBar {
            bar: ProgressBar::hidden(),
        }
    }
}

impl Default for CLIProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

fn init_cb(len: Option<usize>) -> color_eyre::Result<()> {
    match BAR.lock() {
        Ok(progress) => {
            progress.bar.reset();
            if let Some(len) = len {
                progress.bar.set_length(len as u64);
            }
            progress.bar.set_draw_target(ProgressDrawTarget::stderr());
            progress.bar.enable_steady_tick(Duration::from_millis(200));
            progress.bar.set_style(
                ProgressStyle::with_template("{spinner} {msg} {wide_bar} {pos}/{len}")?
                    .tick_chars(" ⠁⠃⠇⡇⣇⣧⣷⣿⣾⣼⣸⢸⠸⠘⠈ ")
                    .progress_chars("█▉▊▋▌▍▎▏ "),
            );
            Ok(())
        }
        Err(err) => Err(color_eyre::eyre::eyre!("{:?}", err)),
    }
}

fn inc_cb(n: usize) -> color_eyre::Result<()> {
    match BAR.lock() {
        Ok(progress) => {
            progress.bar.inc(n as u64);
            Ok(())
        }
        Err(err) => Err(color_eyre::eyre::eyre!("{:?}", err)),
    }
}

fn finish_cb() -> color_eyre::Result<()> {
    match BAR.lock() {
        Ok(progress) => {
            progress.bar.set_message("".to_string());
            progress.bar.finish_and_clear();
            Ok(())
        }
        Err(err) => Err(color_eyre::eyre::eyre!("{:?}", err)),
    }
}

fn on_msg_cb(message: String) -> color_eyre::Result<()> {
    match BAR.lock() {
        Ok(progress) => {
            progress.bar.set_message(message);
            Ok(())
        }
        Err(err) => Err(color_eyre::eyre::eyre!("{:?}", err)),
    }
}

fn on_title_cb(title: String) -> color_eyre::Result<()> {
    match BAR.lock() {
        Ok(progress) => {
            progress.bar.suspend(|| println!("{}", title));
            Ok(())
        }
        Err(err) => Err(color_eyre::eyre::eyre!("{:?}", err)),
    }
}

pub fn init_cli_progress() {
    if let Ok(mut updater) = UPDATER.lock() {
        updater
            .on_init(Some(init_cb))
            .on_increment(Some(inc_cb))
            .on_finish(Some(finish_cb))
            .on_message(Some(on_msg_cb))
            .on_title(Some(on_title_cb));
    }
}
