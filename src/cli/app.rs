//! Main CLI application
//!
//! The binary is the outermost application boundary: it reads the debug
//! flag from the command line, renders a `{}`-slot template through the
//! library, and hands the result to the executor.

use crate::error::Result;
use crate::runner::Executor;
use crate::template::{render, Value};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Build the clap command
fn build_command() -> Command {
    Command::new("shtpl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a shell command template and run it")
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print the command before executing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the rendered command instead of running it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dir")
                .short('C')
                .long("dir")
                .value_name("DIR")
                .help("Working directory for the command"),
        )
        .arg(
            Arg::new("template")
                .value_name("TEMPLATE")
                .required(true)
                .help("Command template; {} marks a value slot"),
        )
        .arg(
            Arg::new("values")
                .value_name("VALUE")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Values spliced into the slots in order; slots without a value drop their flag"),
        )
}

/// Split a CLI template into its literal fragments at `{}` slots
fn split_template(template: &str) -> Vec<&str> {
    template.split("{}").collect()
}

/// Turn CLI arguments into interpolation values
///
/// Every argument is literal text. Slots beyond the last argument render
/// as absent, which is how omission is spelled from the command line.
fn build_values(args: &[String]) -> Vec<Value> {
    args.iter().map(|s| Value::from(s.as_str())).collect()
}

/// Run the CLI application with command line arguments
pub fn run() -> Result<()> {
    let matches = build_command().get_matches();
    run_with_matches(&matches)
}

/// Run the application from parsed matches
fn run_with_matches(matches: &ArgMatches) -> Result<()> {
    let template = matches
        .get_one::<String>("template")
        .map(String::as_str)
        .unwrap_or_default();
    let args: Vec<String> = matches
        .get_many::<String>("values")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let fragments = split_template(template);
    let command = render(&fragments, &build_values(&args));

    if matches.get_flag("dry-run") {
        println!("{}", command);
        return Ok(());
    }

    let mut executor = Executor::new().with_echo(matches.get_flag("debug"));
    if let Some(dir) = matches.get_one::<String>("dir") {
        executor = executor.with_working_dir(PathBuf::from(dir));
    }

    executor.run(&command)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_template_no_slots() {
        assert_eq!(split_template("echo hello"), vec!["echo hello"]);
    }

    #[test]
    fn test_split_template_with_slots() {
        assert_eq!(
            split_template("run -t{} -u{} task"),
            vec!["run -t", " -u", " task"]
        );
    }

    #[test]
    fn test_build_values() {
        let args = vec!["1".to_string(), "two".to_string()];
        let values = build_values(&args);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].render(), "1");
        assert_eq!(values[1].render(), "two");
    }

    #[test]
    fn test_parse_flags() {
        let matches = build_command()
            .try_get_matches_from(vec!["shtpl", "--debug", "-n", "echo hi"])
            .unwrap();
        assert!(matches.get_flag("debug"));
        assert!(matches.get_flag("dry-run"));
        assert_eq!(
            matches.get_one::<String>("template").map(String::as_str),
            Some("echo hi")
        );
    }

    #[test]
    fn test_template_is_required() {
        let result = build_command().try_get_matches_from(vec!["shtpl"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_values_may_look_like_flags() {
        let matches = build_command()
            .try_get_matches_from(vec!["shtpl", "echo {}", "--weird"])
            .unwrap();
        let values: Vec<&String> = matches.get_many::<String>("values").unwrap().collect();
        assert_eq!(values, ["--weird"]);
    }

    #[test]
    fn test_dry_run_renders_without_executing() {
        let matches = build_command()
            .try_get_matches_from(vec!["shtpl", "-n", "run -t{} task"])
            .unwrap();
        // The slot has no value, so the flag drops; with --dry-run nothing
        // is executed, so this cannot fail.
        assert!(run_with_matches(&matches).is_ok());
    }
}
