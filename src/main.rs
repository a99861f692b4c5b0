use clap::Parser;
use habitual::application::{analytics, init::init, manage_config::ConfigService};
use habitual::application::{BreakdownResolver, BuildHabitService};
use habitual::cli::{self, BreakdownArgs, Cli, Commands};
use habitual::domain::{schedule, CoachPersona, EnergyMode, MicroPlan};
use habitual::error::HabitError;
use habitual::infrastructure::proxy::{self, ProxySettings};
use habitual::infrastructure::{
    BreakdownSource, Config, FileSystemRepository, HabitRepository, HabitStore,
    RemoteBreakdownClient,
};
use log::debug;

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() {
    setup_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Resolver for a workspace: remote-first when an endpoint is configured
fn resolver_for(config: &Config, local_only: bool) -> Result<BreakdownResolver, HabitError> {
    if local_only {
        return Ok(BreakdownResolver::local());
    }

    match config.resolved_endpoint() {
        Some(endpoint) => {
            debug!("remote breakdown endpoint: {}", endpoint);
            let client: Box<dyn BreakdownSource> =
                Box::new(RemoteBreakdownClient::new(endpoint, config.timeout())?);
            Ok(BreakdownResolver::new(Some(client)))
        }
        None => Ok(BreakdownResolver::local()),
    }
}

fn build_service(
    args: &BreakdownArgs,
) -> Result<(Config, BuildHabitService<FileSystemRepository>), HabitError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let resolver = resolver_for(&config, args.local)?;
    Ok((config, BuildHabitService::new(HabitStore::new(repo), resolver)))
}

/// Mood and time for a breakdown, falling back to configured defaults
fn mood_and_time(args: &BreakdownArgs, config: &Config) -> (String, Option<String>) {
    let mood = args
        .mood
        .clone()
        .unwrap_or_else(|| config.default_mood.to_string());
    let time = if args.no_time {
        None
    } else {
        args.time
            .clone()
            .or_else(|| config.preferred_time().map(str::to_string))
    };
    (mood, time)
}

fn run(cli: Cli) -> Result<(), HabitError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Build(args)) => {
            let (config, service) = build_service(&args)?;
            let (mood, time) = mood_and_time(&args, &config);

            let habit = service.execute(&args.name, Some(&mood), time.as_deref())?;
            println!("Building: {}", habit.name);
            print!("{}", cli::format_steps(&habit.subtasks));
            Ok(())
        }
        Some(Commands::Breakdown(args)) => {
            let (config, service) = build_service(&args)?;
            let (mood, time) = mood_and_time(&args, &config);

            let resolved = service.preview(&args.name, Some(&mood), time.as_deref())?;
            println!(
                "{} ({} breakdown)",
                args.name.trim(),
                cli::origin_label(resolved.origin)
            );
            print!("{}", cli::format_steps(&resolved.steps));
            Ok(())
        }
        Some(Commands::List { details }) => {
            let store = HabitStore::new(FileSystemRepository::discover()?);
            print!("{}", cli::format_habit_list(&store.load(), details));
            Ok(())
        }
        Some(Commands::Analytics) => {
            let store = HabitStore::new(FileSystemRepository::discover()?);
            print!("{}", cli::format_summary(&analytics(&store)));
            Ok(())
        }
        Some(Commands::Checkin { text }) => {
            print!("{}", cli::format_checkin(EnergyMode::analyze(&text)));
            Ok(())
        }
        Some(Commands::Coach { persona }) => {
            let (name, message) = match persona {
                Some(name) => {
                    let message = CoachPersona::message_for(&name);
                    (name, message)
                }
                None => {
                    let config = FileSystemRepository::discover()?.load_config()?;
                    (config.persona.to_string(), config.persona.message())
                }
            };
            println!("{}", message);
            println!("Coach Persona: {}", name);
            Ok(())
        }
        Some(Commands::Schedule { wake, bed }) => {
            let blocks = schedule::time_blocks(&wake, &bed)?;
            print!("{}", cli::format_time_blocks(&blocks));
            Ok(())
        }
        Some(Commands::Split { task, done }) => {
            let mut plan = MicroPlan::for_task(&task)?;
            for step in done {
                if step > 0 {
                    plan.toggle(step - 1);
                }
            }
            print!("{}", cli::format_micro_plan(&plan));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("persona = {}", config.persona);
                println!(
                    "endpoint = {}",
                    config.endpoint.as_deref().unwrap_or_default()
                );
                println!("timeout_ms = {}", config.timeout_ms);
                println!("default_mood = {}", config.default_mood);
                println!("default_time = {}", config.default_time);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: habitual config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: persona, endpoint, timeout_ms, default_mood, default_time, created"
                );
                Ok(())
            }
        }
        Some(Commands::Serve { port }) => proxy::serve(&ProxySettings::from_env(port)),
        None => {
            println!("habitual - Break habits into small timed steps");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
