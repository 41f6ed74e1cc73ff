use std::io::{self, BufRead};

use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, warn};

use crate::{
    cli::{
        TerminalPrompter,
        command::{Cli, Commands},
        display_contact,
    },
    domain::ContactManager,
    errors::AppError,
    helper,
    notify::{BusMessage, BusSink, Receiver, SinkKind, parse_sink},
    skill::{AddOutcome, ContactsSkill, Dialog, LogPrompter, Prompter, RemovalState},
    store::{StorageMediums, parse_store},
};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let db_path = helper::resolve_db_path(cli.db_path)?;
    let storage = parse_store(StorageMediums::from(&cli.storage)?, db_path)?;
    let receiver = Receiver::from_sender(Some(&cli.receiver));

    debug!(medium = storage.get_medium(), %receiver, "storage ready");

    let command = cli.command;
    let manager = match command {
        // Stdout is the bus here, so nothing else may print to it
        Commands::Events => ContactManager::new(storage, Box::new(BusSink::new(io::stdout()))),
        _ => ContactManager::new(
            storage,
            parse_sink(SinkKind::from(&cli.sink)?, cli.sink_url.as_deref())?,
        ),
    }
    .with_receiver(receiver);

    match command {
        Commands::Add { name, email, phone } => {
            let prompter = TerminalPrompter::stdio()
                .prefill(Dialog::AskForName, name)
                .prefill(Dialog::AskForEmail, email)
                .prefill(Dialog::AskForPhone, phone);
            let mut skill = ContactsSkill::new(manager, prompter);

            match skill.add_contact() {
                AddOutcome::Added(_) => Ok(()),
                AddOutcome::Duplicate => Err(AppError::DuplicateKey),
                AddOutcome::Aborted => Err(AppError::Aborted("No contact added".to_string())),
                AddOutcome::Invalid => Err(AppError::Aborted(
                    "Name, email and phone are all required".to_string(),
                )),
                AddOutcome::Failed => Err(AppError::Aborted("Could not add contact".to_string())),
            }
        }

        Commands::List => {
            let mut skill = ContactsSkill::new(manager, TerminalPrompter::stdio());

            let contacts = skill
                .list_contacts()
                .ok_or_else(|| AppError::Aborted("Could not list contacts".to_string()))?;

            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", display_contact(i + 1, c));
            }
            Ok(())
        }

        Commands::Remove { name } => {
            let mut skill = ContactsSkill::new(manager, TerminalPrompter::stdio());

            match skill.remove_contact(name.as_deref()) {
                RemovalState::NotFound(_) => Err(AppError::NotFound("Contact".to_string())),
                RemovalState::Failed(reason) => Err(AppError::Aborted(reason)),
                _ => Ok(()),
            }
        }

        Commands::Match { query } => {
            let mut skill = ContactsSkill::new(manager, TerminalPrompter::stdio());

            for (i, m) in skill.find_contact(&query).iter().enumerate() {
                println!("{} {:.3}", display_contact(i + 1, &m.contact), m.score);
            }
            Ok(())
        }

        Commands::Events => {
            let mut skill = ContactsSkill::new(manager, LogPrompter);
            run_events(&mut skill, io::stdin().lock())
        }
    }
}

/// Feeds each JSON line from `input` to the skill. Lines that do not parse are skipped.
pub fn run_events<P: Prompter, R: BufRead>(
    skill: &mut ContactsSkill<P>,
    input: R,
) -> Result<(), AppError> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<BusMessage>(&line) {
            Ok(message) => {
                let outcome = skill.handle_event(&message);
                debug!(msg_type = %message.msg_type, ?outcome, "event handled");
            }
            Err(e) => warn!(error = %e, "skipping malformed bus message"),
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();
}
