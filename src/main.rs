mod extract;
mod model;
mod render;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "List the builtins registered in a source file as categorized markdown", long_about = None)]
struct Cli {
    /// Source file containing the builtins registration routine
    #[arg(value_name = "SOURCE_FILE")]
    source_file: String,
    /// Further arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "builtindoc".into());
            println!("Usage: {} <source_file>", program);
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let path = Utf8PathBuf::from(&cli.source_file);
    let catalog = extract::scan_file(&path)?;
    print!("{}", render::to_markdown(&catalog));
    Ok(())
}
