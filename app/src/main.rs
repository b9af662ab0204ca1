mod config;
mod logging;

use clap::Parser;
use color_eyre::Result;
use domain::{
    CrudRepository, EntityId,
    person::{Person, PersonRepo, PersonRepoExt},
};

#[derive(Parser, Debug)]
#[command(name = "repository")]
#[command(about = "Run a CRUD session against an in-memory person repository")]
struct Args {
    /// Name of a person to create (repeatable)
    #[arg(short, long = "name", default_values_t = [String::from("A"), String::from("B")])]
    names: Vec<String>,

    /// Id of a person to remove after creation (repeatable)
    #[arg(short, long = "remove")]
    removals: Vec<EntityId>,

    /// Pretty-print the JSON snapshot
    #[arg(long)]
    pretty: bool,
}

fn run(args: &Args, repo: &mut PersonRepo) -> Vec<Person> {
    for name in &args.names {
        repo.create_person(name.clone());
    }

    for &id in &args.removals {
        match repo.remove(id) {
            Ok(()) => tracing::info!(id, "Removed person"),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    repo.find_all()
}

fn main() -> Result<()> {
    color_eyre::install()?;

    logging::init()?;
    tracing::info!("Starting {}", config::PROJECT_NAME.as_str());

    let args = Args::parse();
    let mut repo = PersonRepo::new();
    let snapshot = run(&args, &mut repo);
    tracing::debug!("Repository state: {repo:#?}");

    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");

    Ok(())
}
