use clap::Args;
use nuzsave::{message::DecodeResponse, BoxMapping, GameSelection};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Opts {
    #[arg(short, long)]
    pub sav: PathBuf,
    /// RBY, GS, Crystal, RS, Emerald, FRLG or Auto.
    #[arg(short, long, default_value = "Auto")]
    pub game: GameSelection,
    /// Write the JSON here instead of stdout.
    #[arg(long)]
    pub dest: Option<PathBuf>,
    #[arg(long)]
    pub pretty: bool,
}

/// Decodes a save and writes the result as a JSON decode response. A save that
/// fails to decode still produces a response, carrying the error.
pub fn run(opts: Opts, box_mappings: Vec<BoxMapping>) -> anyhow::Result<()> {
    let response = match crate::decode_file(&opts.sav, opts.game, box_mappings) {
        Ok(result) => DecodeResponse::from(result),
        Err(err) => {
            log::error!("{err:#}");
            match err.downcast::<nuzsave::DecodeError>() {
                Ok(decode_err) => DecodeResponse::from(decode_err),
                Err(err) => return Err(err),
            }
        }
    };

    let json = if opts.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        response.to_json()?
    };
    match opts.dest {
        Some(dest) => {
            println!("Saving to {}", dest.display());
            std::fs::write(dest, json)?;
        }
        None => println!("{json}"),
    }

    if let Some(error) = response.error {
        anyhow::bail!("{}: {}", error.kind, error.message);
    }
    Ok(())
}
