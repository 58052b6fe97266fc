use std::str::FromStr;

use crate::MvdError;

/// A command parsed from one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every key.
    Keys,
    /// List the members of a key.
    Members {
        /// The key to look up.
        key: String,
    },
    /// Add a member to a key.
    Add {
        /// The key to add to.
        key: String,
        /// The member to add.
        member: String,
    },
    /// Remove a member from a key.
    Remove {
        /// The key to remove from.
        key: String,
        /// The member to remove.
        member: String,
    },
    /// Remove a key and all of its members.
    RemoveAll {
        /// The key to remove.
        key: String,
    },
    /// Remove every key and member.
    Clear,
    /// Check whether a key exists.
    KeyExists {
        /// The key to check.
        key: String,
    },
    /// Check whether a member exists for a key.
    MemberExists {
        /// The key to check.
        key: String,
        /// The member to check.
        member: String,
    },
    /// List every member of every key.
    AllMembers,
    /// List every key with its members.
    Items,
    /// End the session.
    Exit,
}

impl FromStr for Command {
    type Err = MvdError;

    /// Parses `COMMAND [key [member]]`.
    ///
    /// The command word is case-insensitive; keys and members are not.
    /// Tokens past the member are ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || MvdError::InvalidCommand(line.to_owned());

        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or_else(invalid)?.to_uppercase();
        let key = tokens.next().map(str::to_owned);
        let member = tokens.next().map(str::to_owned);

        let command = match name.as_str() {
            "KEYS" => Command::Keys,
            "MEMBERS" => Command::Members {
                key: key.ok_or_else(invalid)?,
            },
            "ADD" => Command::Add {
                key: key.ok_or_else(invalid)?,
                member: member.ok_or_else(invalid)?,
            },
            "REMOVE" => Command::Remove {
                key: key.ok_or_else(invalid)?,
                member: member.ok_or_else(invalid)?,
            },
            "REMOVEALL" => Command::RemoveAll {
                key: key.ok_or_else(invalid)?,
            },
            "CLEAR" => Command::Clear,
            "KEYEXISTS" => Command::KeyExists {
                key: key.ok_or_else(invalid)?,
            },
            "MEMBEREXISTS" => Command::MemberExists {
                key: key.ok_or_else(invalid)?,
                member: member.ok_or_else(invalid)?,
            },
            "ALLMEMBERS" => Command::AllMembers,
            "ITEMS" => Command::Items,
            "EXIT" => Command::Exit,
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}
