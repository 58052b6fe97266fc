use log::debug;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::service::{DictionaryService, Membership, Removal};

/// Reply produced for one dispatched command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// A list of results; `None` when there is nothing to list.
    Results(Option<Vec<String>>),
    /// The command succeeded.
    Success(String),
    /// The command could not act on the dictionary.
    Failure(String),
}

/// Executes one command against `service`.
///
/// `Command::Clear` clears unconditionally; asking for confirmation is
/// up to the caller. `Command::Exit` has no effect on the dictionary.
pub fn execute<S: DictionaryService>(service: &S, command: Command) -> Reply {
    debug!("Executing {:?}", command);

    match command {
        Command::Keys => Reply::Results(service.list_keys()),
        Command::Members { key } => Reply::Results(service.list_members(&key)),
        Command::Add { key, member } => {
            if service.add_member(&key, &member) {
                Reply::Success(format!("Successfully added {member} to {key}"))
            } else {
                Reply::Failure(format!("Failure, {member} already exists for {key}"))
            }
        }
        Command::Remove { key, member } => match service.remove_member(&key, &member) {
            Removal::Removed => Reply::Success(format!("Successfully removed {member} from {key}")),
            Removal::MemberAbsent => Reply::Failure(format!(
                "Failure, member {member} does not exist for key {key}"
            )),
            Removal::KeyAbsent => key_absent(&key),
        },
        Command::RemoveAll { key } => {
            if service.remove_key(&key) {
                Reply::Success(format!("Successfully removed key {key} and all members"))
            } else {
                key_absent(&key)
            }
        }
        Command::Clear => {
            service.clear_all();
            Reply::Success("Confirmed, All keys and their members have been cleared".to_owned())
        }
        Command::KeyExists { key } => Reply::Success(service.key_exists(&key).to_string()),
        Command::MemberExists { key, member } => match service.member_exists(&key, &member) {
            Membership::KeyAbsent => key_absent(&key),
            Membership::Absent => Reply::Success(false.to_string()),
            Membership::Present => Reply::Success(true.to_string()),
        },
        Command::AllMembers => Reply::Results(non_empty(service.list_all_members())),
        Command::Items => Reply::Results(non_empty(
            service
                .list_all_items()
                .iter()
                .map(ToString::to_string)
                .collect(),
        )),
        Command::Exit => Reply::Success("Goodbye".to_owned()),
    }
}

fn key_absent(key: &str) -> Reply {
    Reply::Failure(format!("Failure, key {key} does not exist"))
}

fn non_empty(results: Vec<String>) -> Option<Vec<String>> {
    if results.is_empty() {
        None
    } else {
        Some(results)
    }
}
