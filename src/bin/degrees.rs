//! degrees CLI
//!
//! Loads a relation directory and prints how two people are connected.

use std::path::PathBuf;
use std::process::ExitCode;

use degrees::telemetry::init_tracing;
use degrees::{
    load_directory, Candidates, Connection, DegreesResult, NameResolver, PathFinder, PersonId,
    Resolution,
};

/// CLI configuration
struct Config {
    /// Directory holding people.csv, movies.csv and stars.csv
    data_dir: PathBuf,
    /// Print the connection as JSON instead of text
    json: bool,
    source: String,
    target: String,
    /// Pick among people sharing the source name
    source_id: Option<PersonId>,
    /// Pick among people sharing the target name
    target_id: Option<PersonId>,
}

fn usage() {
    println!("degrees - degrees of separation between two people");
    println!();
    println!("USAGE:");
    println!("    degrees [OPTIONS] <SOURCE> <TARGET>");
    println!();
    println!("OPTIONS:");
    println!("    -d, --data-dir <DIR>      Relation directory [default: large]");
    println!("        --source-id <ID>      Person id to use when SOURCE is ambiguous");
    println!("        --target-id <ID>      Person id to use when TARGET is ambiguous");
    println!("        --json                Print the result as JSON");
    println!("    -h, --help                Print help information");
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut data_dir = PathBuf::from("large");
    let mut json = false;
    let mut source_id = None;
    let mut target_id = None;
    let mut names = Vec::new();

    let value_of = |i: usize, flag: &str| -> String {
        args.get(i + 1).cloned().unwrap_or_else(|| {
            eprintln!("error: {flag} requires a value");
            std::process::exit(1);
        })
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                data_dir = PathBuf::from(value_of(i, "--data-dir"));
                i += 2;
            }
            "--source-id" => {
                source_id = Some(PersonId::new(value_of(i, "--source-id")));
                i += 2;
            }
            "--target-id" => {
                target_id = Some(PersonId::new(value_of(i, "--target-id")));
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "--help" | "-h" => {
                usage();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("error: unknown argument: {arg}");
                std::process::exit(1);
            }
            name => {
                names.push(name.to_string());
                i += 1;
            }
        }
    }

    let [source, target]: [String; 2] = names.try_into().unwrap_or_else(|_| {
        eprintln!("error: expected exactly two names");
        usage();
        std::process::exit(1);
    });

    Config {
        data_dir,
        json,
        source,
        target,
        source_id,
        target_id,
    }
}

fn list_candidates(candidates: &Candidates) {
    eprintln!("Which '{}'?", candidates.name());
    for c in candidates.iter() {
        let birth = c.birth.map_or_else(|| "unknown".to_string(), |b| b.to_string());
        eprintln!("ID: {}, Name: {}, Birth: {}", c.id, c.name, birth);
    }
}

fn pick(names: &NameResolver, name: &str, chosen: Option<&PersonId>) -> DegreesResult<PersonId> {
    let id = names.person_id_for_name(name, |candidates| {
        if chosen.is_none() {
            list_candidates(candidates);
        }
        chosen.cloned()
    })?;
    Ok(id)
}

fn run(config: &Config) -> DegreesResult<()> {
    let graph = load_directory(&config.data_dir)?;
    let names = NameResolver::from_graph(&graph);

    let source = pick(&names, &config.source, config.source_id.as_ref())?;
    let target = pick(&names, &config.target, config.target_id.as_ref())?;

    let Some(path) = PathFinder::new(&graph).shortest_path(&source, &target)? else {
        println!("Not connected.");
        return Ok(());
    };

    let connection = Connection::from_path(&graph, &source, &path)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&connection)?);
        return Ok(());
    }

    println!("{} degrees of separation.", connection.degrees());
    for (i, hop) in connection.hops.iter().enumerate() {
        println!("{}: {hop}", i + 1);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let config = parse_args();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
