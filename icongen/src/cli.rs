use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version)]
/// Generates the PWA icon set into public/icons
///
/// Every run regenerates all sizes (72, 96, 128, 144, 152, 192, 384 and
/// 512 px) and overwrites existing files.
pub struct Cli {}
