use std::io::Cursor;

use mvd::{Config, DictionaryService, Format, MultiValueDictionary, Session};

fn quiet() -> Config {
    Config {
        prompt: String::new(),
        banner: false,
        ..Config::default()
    }
}

fn run(dict: &MultiValueDictionary, config: Config, input: &str) -> String {
    run_bytes(dict, config, input.as_bytes())
}

fn run_bytes(dict: &MultiValueDictionary, config: Config, input: &[u8]) -> String {
    let mut session = Session::new(dict.clone(), Cursor::new(input), Vec::new(), config);
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn fruit_session() {
    let dict = MultiValueDictionary::new();
    let output = run(
        &dict,
        quiet(),
        "ADD fruit apple\nADD fruit banana\nADD fruit apple\nMEMBERS fruit\nREMOVE fruit apple\nITEMS\nEXIT\n",
    );
    assert_eq!(
        output,
        "Successfully added apple to fruit\n\
         Successfully added banana to fruit\n\
         Failure, apple already exists for fruit\n\
         1) apple\n\
         2) banana\n\
         Successfully removed apple from fruit\n\
         1) fruit: [banana]\n"
    );
}

#[test]
fn exit_stops_reading() {
    let dict = MultiValueDictionary::new();
    run(&dict, quiet(), "ADD a 1\nEXIT\nADD b 2\n");
    assert!(dict.key_exists("a"));
    assert!(!dict.key_exists("b"));
}

#[test]
fn end_of_input_ends_session() {
    let dict = MultiValueDictionary::new();
    let output = run(&dict, quiet(), "ADD a 1");
    assert_eq!(output, "Successfully added 1 to a\n");
}

#[test]
fn invalid_input_is_reported_and_session_continues() {
    let dict = MultiValueDictionary::new();
    let output = run(&dict, quiet(), "FETCH a\nADD a\n\nKEYEXISTS a\n");
    assert_eq!(
        output,
        "Invalid input FETCH a, please try again or EXIT\n\
         Invalid input ADD a, please try again or EXIT\n\
         Invalid input , please try again or EXIT\n\
         false\n"
    );
}

#[test]
fn clear_requires_confirmation() {
    let dict = MultiValueDictionary::new();
    let output = run(&dict, quiet(), "ADD a 1\nCLEAR\nn\nKEYS\nCLEAR\n y \nKEYS\n");
    assert_eq!(
        output,
        "Successfully added 1 to a\n\
         Are you sure you want to clear all keys and their members? (Y to confirm, any key to abort) > \
         Aborted, no keys were cleared\n\
         1) a\n\
         Are you sure you want to clear all keys and their members? (Y to confirm, any key to abort) > \
         Confirmed, All keys and their members have been cleared\n\
         No results found\n"
    );
}

#[test]
fn clear_without_confirmation() {
    let dict = MultiValueDictionary::new();
    let config = Config {
        confirm_clear: false,
        ..quiet()
    };
    run(&dict, config, "ADD a 1\nCLEAR\n");
    assert_eq!(dict.list_keys(), None);
}

#[test]
fn clear_aborts_at_end_of_input() {
    let dict = MultiValueDictionary::new();
    run(&dict, quiet(), "ADD a 1\nCLEAR\n");
    assert!(dict.key_exists("a"));
}

#[test]
fn banner_and_prompt() {
    let dict = MultiValueDictionary::new();
    let output = run(&dict, Config::default(), "KEYS\nEXIT\n");
    assert!(output.starts_with("Multi-Value Dictionary "));
    assert!(output.contains("Commands: KEYS, MEMBERS, ADD"));
    assert!(output.ends_with("> No results found\n> "));
}

#[test]
fn json_session() {
    let dict = MultiValueDictionary::new();
    let config = Config {
        format: Format::Json,
        ..Config::default()
    };
    let output = run(&dict, config, "ADD k m\nMEMBEREXISTS x m\nMEMBERS k\nCLEAR\n");
    assert_eq!(
        output,
        "{\"Success\":\"Successfully added m to k\"}\n\
         {\"Failure\":\"Failure, key x does not exist\"}\n\
         {\"Results\":[\"m\"]}\n\
         {\"Success\":\"Confirmed, All keys and their members have been cleared\"}\n"
    );
}

#[test]
fn invalid_utf8_line_is_not_fatal() {
    let dict = MultiValueDictionary::new();
    let output = run_bytes(&dict, quiet(), b"ADD a 1\nADD b \xff\nKEYS\n");
    assert_eq!(
        output,
        "Successfully added 1 to a\n\
         Successfully added \u{FFFD} to b\n\
         1) a\n\
         2) b\n"
    );
    assert_eq!(
        dict.member_exists("b", "\u{FFFD}").for_existing_key(),
        Some(true)
    );
}

#[test]
fn json_clear_does_not_consume_next_command() {
    let dict = MultiValueDictionary::new();
    let config = Config {
        format: Format::Json,
        ..Config::default()
    };
    let output = run(&dict, config, "ADD a 1\nCLEAR\nADD b 2\n");
    assert_eq!(
        output,
        "{\"Success\":\"Successfully added 1 to a\"}\n\
         {\"Success\":\"Confirmed, All keys and their members have been cleared\"}\n\
         {\"Success\":\"Successfully added 2 to b\"}\n"
    );
    assert!(!dict.key_exists("a"));
    assert!(dict.key_exists("b"));
}
