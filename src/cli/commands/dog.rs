use crate::cli::parser::{Cli, DogCommand};
use crate::config::Config;
use crate::core::dogs::DogRegistry;
use crate::core::ledger::SessionLedger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::dog::{Dog, NewDog};
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use crate::ui::output::print_json;
use crate::utils::colors::{color_for_optional_field, color_for_validated, paint};
use crate::utils::formatting::{bold, or_dash};
use crate::utils::table::Table;
use crate::utils::time::{format_optional_timestamp, format_timestamp};
use serde::Serialize;

#[derive(Serialize)]
struct DogDetails<'a> {
    #[serde(flatten)]
    dog: &'a Dog,
    sessions: &'a [Session],
}

pub fn handle(action: &DogCommand, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(cfg)?;

    match action {
        DogCommand::Add { name, breed, owner } => {
            let dog = DogRegistry::create_dog(
                &mut pool,
                &NewDog {
                    name: name.clone(),
                    breed: breed.clone(),
                    owner_name: owner.clone(),
                },
            )?;

            if cli.json {
                return print_json(&dog);
            }
            success(format!("Dog '{}' registered with id {}", dog.name, dog.id));
        }

        DogCommand::List { skip, limit } => {
            let dogs = DogRegistry::list_dogs(&mut pool, *skip, *limit)?;

            if cli.json {
                return print_json(&dogs);
            }
            if dogs.is_empty() {
                info("No dogs registered.");
                return Ok(());
            }

            let mut table = Table::with_headers(&["ID", "NAME", "BREED", "OWNER", "CREATED"]);
            for d in &dogs {
                table.add_row(vec![
                    d.id.to_string(),
                    d.name.clone(),
                    or_dash(d.breed.as_deref()),
                    or_dash(d.owner_name.as_deref()),
                    format_timestamp(&d.created_at),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        DogCommand::Show { id } => {
            let dog = DogRegistry::get_dog(&mut pool, *id)?;
            let sessions = SessionLedger::list_sessions(&mut pool, Some(dog.id))?;

            if cli.json {
                return print_json(&DogDetails {
                    dog: &dog,
                    sessions: &sessions,
                });
            }

            println!("🐕 {} (id {})", bold(&dog.name), dog.id);
            println!(
                "   Breed : {}",
                paint(
                    color_for_optional_field(dog.breed.as_deref()),
                    or_dash(dog.breed.as_deref())
                )
            );
            println!(
                "   Owner : {}",
                paint(
                    color_for_optional_field(dog.owner_name.as_deref()),
                    or_dash(dog.owner_name.as_deref())
                )
            );
            println!("   Since : {}\n", format_timestamp(&dog.created_at));

            if sessions.is_empty() {
                info("No sessions yet.");
                return Ok(());
            }

            for s in &sessions {
                println!(
                    "   #{:<4} {:<8} {} started {}  ended {}",
                    s.id,
                    s.posture,
                    paint(color_for_validated(s.validated), format!("{:<9}", s.state().as_str())),
                    format_timestamp(&s.started_at),
                    format_optional_timestamp(s.ended_at.as_deref()),
                );
            }
        }
    }

    Ok(())
}
