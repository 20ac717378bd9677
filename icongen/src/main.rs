use clap::Parser;
use color_eyre::{eyre::WrapErr, Section};
use colored::Colorize;
use iconlib::{generate_icon_set, IconSetConfig};

mod cli;
mod progress;

use cli::Cli;

const RULE_WIDTH: usize = 50;

const NEXT_STEPS: [&str; 3] = [
    "Run 'npm run build' to produce the production build",
    "Deploy it to test the PWA installation",
    "In the browser, you will see the 'Install app' option",
];

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn summary(count: usize, dir: &str) -> Vec<String> {
    vec![
        format!("{} {} icons generated successfully!", "✓".green(), count),
        format!("{} Icons saved in: {}", "✓".green(), dir),
    ]
}

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    #[cfg(feature = "log")]
    env_logger::init();
    progress::init_cli_progress();

    let _args = Cli::parse();
    let config = IconSetConfig::default();
    let dir = config.output_dir.display().to_string();

    println!("Generating PWA icons...");
    println!("{}", rule());

    let icons = generate_icon_set(&config)
        .wrap_err("Error generating icons")
        .suggestion(format!(
            "Make sure '{}' can be created and written to from the current directory",
            dir
        ))?;
    #[cfg(feature = "log")]
    log::debug!("Wrote {:?}", icons);

    println!("{}", rule());
    for line in summary(icons.len(), &dir) {
        println!("{}", line);
    }
    println!("\n{}", "Next steps:".bold());
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
    Ok(())
}
