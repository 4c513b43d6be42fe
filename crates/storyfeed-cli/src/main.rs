use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::sync::Arc;
use std::time::Duration;
use storyfeed_core::{SessionConfig, SimulatedRepository, Story, StorySession};
use storyfeed_store::{JsonFileStore, MemoryStore, StoreHandle};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("storyfeed")
        .version("0.1.0")
        .about("Story browser core demo")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("browse")
                .about("Load the collection and print the filtered view")
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .default_value("")
                        .help("Search term applied to story titles"),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .default_value("200")
                        .value_parser(value_parser!(u64))
                        .help("Simulated fetch latency in milliseconds"),
                )
                .arg(
                    Arg::new("fail")
                        .long("fail")
                        .action(ArgAction::SetTrue)
                        .help("Make the simulated fetch fail"),
                )
                .arg(
                    Arg::new("remove")
                        .long("remove")
                        .value_parser(value_parser!(u64))
                        .action(ArgAction::Append)
                        .help("Remove a story by id after the load"),
                )
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .action(ArgAction::SetTrue)
                        .help("Restore the seed collection after removals"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the visible stories as JSON"),
                )
                .arg(
                    Arg::new("store")
                        .long("store")
                        .help("Path of the JSON file persisting the search term"),
                ),
        )
        .subcommand(Command::new("seed").about("Print the seed collection as JSON"));

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("browse", args)) => browse(args).await,
        Some(("seed", _)) => {
            println!("{}", serde_json::to_string_pretty(&Story::samples())?);
            Ok(())
        }
        _ => Ok(()),
    }
}

async fn browse(args: &ArgMatches) -> anyhow::Result<()> {
    let filter = args
        .get_one::<String>("filter")
        .cloned()
        .unwrap_or_default();
    let delay_ms = *args.get_one::<u64>("delay-ms").unwrap();
    let fail = args.get_flag("fail");

    let store: StoreHandle = match args.get_one::<String>("store") {
        Some(path) => Arc::new(JsonFileStore::open(path)?),
        None => Arc::new(MemoryStore::new()),
    };

    let mut repository =
        SimulatedRepository::new(Story::samples()).with_delay(Duration::from_millis(delay_ms));
    if fail {
        repository = repository.failing();
    }

    let session = StorySession::new(SessionConfig::new(), Arc::new(repository), store);
    if !filter.is_empty() {
        session.set_search_term(filter);
    }

    if let Err(err) = session.load().await {
        eprintln!("load failed: {err}");
    }

    for id in args.get_many::<u64>("remove").into_iter().flatten() {
        match session.stories().iter().find(|s| s.id.0 == *id).cloned() {
            Some(story) => session.remove_story(&story),
            None => eprintln!("no story with id {id}"),
        }
    }

    if args.get_flag("reset") {
        session.reset();
    }

    let visible = session.visible_stories();
    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        println!("Searching for: {:?}", session.search_term());
        if session.is_error() {
            println!("Something went wrong ...");
        }
        for story in &visible {
            println!(
                "[{}] {} <{}> by {} ({} comments, {} points)",
                story.id, story.title, story.url, story.author, story.num_comments, story.points
            );
        }
        println!();
        println!(
            "{} of {} stories visible",
            visible.len(),
            session.stories().len()
        );
    }

    if session.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
