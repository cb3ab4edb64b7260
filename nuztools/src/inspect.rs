use clap::Args;
use nuzsave::{BoxMapping, DecodeResult, GameSelection, Slot};
use prettytable::{format, row, Table};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Opts {
    #[arg(short, long)]
    pub sav: PathBuf,
    #[arg(short, long, default_value = "Auto")]
    pub game: GameSelection,
    /// "party", "boxN", or everything when omitted.
    #[arg(short, long)]
    pub location: Option<String>,
}

pub enum Selected {
    All,
    Party,
    Box(u8),
}

pub fn parse_location(location: Option<&str>) -> anyhow::Result<Selected> {
    match location {
        None => Ok(Selected::All),
        Some("party") => Ok(Selected::Party),
        Some(location) if location.starts_with("box") => Ok(Selected::Box(location[3..].parse()?)),
        Some(location) => Err(anyhow::anyhow!("Unknown location: {location}")),
    }
}

pub fn run(opts: Opts, box_mappings: Vec<BoxMapping>) -> anyhow::Result<()> {
    let selected = parse_location(opts.location.as_deref())?;
    let result = crate::decode_file(&opts.sav, opts.game, box_mappings)?;

    trainer_table(&result).printstd();
    println!();
    slot_table(&result, &selected).printstd();

    let unreadable = result.unreadable_count();
    if unreadable > 0 {
        println!("{unreadable} record(s) could not be read");
    }
    Ok(())
}

pub fn trainer_table(result: &DecodeResult) -> Table {
    let trainer = &result.trainer;
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["GAME", "TRAINER NAME", "TRAINER ID", "MONEY", "PLAYTIME"]);
    table.add_row(row![
        result.detected_format,
        trainer.name,
        trainer.id.public_id,
        trainer.money,
        format!(
            "{:02}:{:02}",
            trainer.time_played.hours, trainer.time_played.minutes
        ),
    ]);
    table
}

pub fn slot_table(result: &DecodeResult, selected: &Selected) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["BOX", "SLOT", "POKEMON", "NICKNAME", "LEVEL", "STATUS"]);

    let party: &[Slot] = match selected {
        Selected::All | Selected::Party => result.party.as_slice(),
        Selected::Box(_) => &[],
    };
    for slot in party {
        add_slot_row(&mut table, "P".to_owned(), slot);
    }

    for stored in &result.boxes {
        let wanted = match selected {
            Selected::All => true,
            Selected::Party => false,
            Selected::Box(number) => *number == stored.number,
        };
        if !wanted {
            continue;
        }
        for slot in &stored.slots {
            add_slot_row(&mut table, stored.label.clone(), slot);
        }
    }
    table
}

fn add_slot_row(table: &mut Table, container: String, slot: &Slot) {
    let position = match slot.location() {
        nuzsave::Location::Party { slot } => slot,
        nuzsave::Location::Box { slot, .. } => slot,
    };
    match slot {
        Slot::Occupied(record) => {
            let species = if record.is_egg {
                format!("{} (egg)", record.species.name)
            } else {
                record.species.name.clone()
            };
            table.add_row(row![
                container,
                position,
                species,
                record.nickname,
                record.level,
                record.status
            ]);
        }
        Slot::Unreadable(unreadable) => {
            table.add_row(row![container, position, "???", unreadable.error, "", ""]);
        }
    }
}
