// src/cli.rs
use anyhow::Result;
use clap::{error::ErrorKind, Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, time::Duration};

use crate::{
    commands::{self, run::RunOptions},
    core::config::{self, HarnessConfig},
    infra::t,
};

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub report: Option<PathBuf>,
    pub verbose: bool,
    /// `[program, args..., TCF]`, untouched.
    pub invocation: Vec<String>,
}

/// The outcome of parsing: either arguments to run with, or an exit status
/// for a request that was already answered (help, version, usage error).
#[derive(Debug)]
pub enum Parsed {
    Run(CliArgs),
    Exit(u8),
}

/// Harness options that consume the following argument as their value.
const VALUE_OPTIONS: [&str; 5] = ["-c", "--config", "-t", "--timeout", "--report"];

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>` among the harness's
/// own options, which always precede the program.
fn pre_parse_language(args: &[String]) -> Option<String> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if let Some(lang) = arg.strip_prefix("--lang=") {
            return Some(lang.to_string());
        }
        if arg == "--lang" {
            return iter.next().cloned();
        }
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            iter.next();
            continue;
        }
        if !arg.starts_with('-') {
            break;
        }
    }
    None
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("tcf-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .override_usage("tcf-runner [OPTIONS] <program> [program-args...] <TCF>")
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help(t!("arg_timeout", locale = locale).to_string())
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help(t!("arg_report", locale = locale).to_string())
                .value_name("REPORT")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("invocation")
                .help(t!("arg_command", locale = locale).to_string())
                .value_name("ARGS")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

fn args_from_matches(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        lang: matches.get_one::<String>("lang").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        timeout_secs: matches.get_one::<u64>("timeout").copied(),
        report: matches.get_one::<PathBuf>("report").cloned(),
        verbose: matches.get_flag("verbose"),
        invocation: matches
            .get_many::<String>("invocation")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    }
}

/// Parses an argument vector (including the binary name).
///
/// Help and version requests are printed and answered with exit status 0.
/// Any other parse error, and an invocation with fewer than two positional
/// arguments, prints the usage to stdout and yields exit status 1.
pub fn parse_args_from(args: Vec<String>) -> Parsed {
    let locale = pre_parse_language(&args)
        .map(|lang| crate::resolve_locale(&lang))
        .unwrap_or_else(crate::detect_locale);

    match build_cli(&locale).try_get_matches_from(args) {
        Ok(matches) => {
            let cli_args = args_from_matches(&matches);
            if cli_args.invocation.len() < 2 {
                println!("{}", t!("usage", locale = &locale));
                return Parsed::Exit(1);
            }
            Parsed::Run(cli_args)
        }
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Parsed::Exit(0)
        }
        Err(e) => {
            println!("{}", e.render());
            println!("{}", t!("usage", locale = &locale));
            Parsed::Exit(1)
        }
    }
}

/// Runs the harness for the current process's arguments and returns the
/// harness's exit status.
pub async fn run() -> Result<u8> {
    let cli_args = match parse_args_from(env::args().collect()) {
        Parsed::Run(cli_args) => cli_args,
        Parsed::Exit(code) => return Ok(code),
    };

    // Config errors should already speak the requested language.
    if let Some(lang) = &cli_args.lang {
        rust_i18n::set_locale(&crate::resolve_locale(lang));
    }

    let file_config = match &cli_args.config {
        Some(path) => config::load_config(path)?,
        None => HarnessConfig::default(),
    };
    let settings = file_config.merged_with(
        cli_args.lang.clone(),
        cli_args.timeout_secs,
        cli_args.report.clone(),
    );

    let language = settings
        .language
        .as_deref()
        .map(crate::resolve_locale)
        .unwrap_or_else(crate::detect_locale);
    rust_i18n::set_locale(&language);

    let Some((test_case, command)) = cli_args.invocation.split_last() else {
        println!("{}", t!("usage", locale = &language));
        return Ok(1);
    };

    let options = RunOptions {
        command: command.to_vec(),
        test_case: PathBuf::from(test_case),
        timeout: settings.timeout_secs.map(Duration::from_secs),
        report: settings.report,
        verbose: cli_args.verbose,
        locale: language,
    };

    let outcome = commands::run::execute(options).await?;
    Ok(outcome.exit_code())
}
