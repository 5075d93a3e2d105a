// SPDX-License-Identifier: MPL-2.0
use inline_lens::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: inline_lens [OPTIONS] [DOCUMENT | IMAGE...]

Shows a text document with inline image thumbnails. A single non-image
path is read as a document where `![alt](path)` inserts an image; image
paths are listed one after another. Without paths, sample images are shown.

Options:
  --lang <ID>           Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding persisted state
  --diagnostics <FILE>  Write a JSON diagnostics report on exit
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let diagnostics_path = args.opt_value_from_os_str("--diagnostics", |s| {
        Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let paths = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Flags {
        lang,
        paths,
        data_dir,
        config_dir,
        diagnostics_path,
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("inline_lens: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
