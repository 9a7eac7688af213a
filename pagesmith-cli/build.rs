use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the block types registered by pagesmith-blocks.
// Build scripts can't depend on the library being built alongside them.
const BLOCK_TYPES: &[&str] = &[
    "carousel",
    "four-categories",
    "eight-icons",
    "products-showroom",
    "custom",
    "style",
    "script",
];

fn file_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_hint(ValueHint::FilePath)
}

fn block_type_arg() -> Arg {
    Arg::new("type")
        .help("Block type")
        .required(true)
        .value_parser(clap::builder::PossibleValuesParser::new(BLOCK_TYPES))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("pagesmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build, import and export block-based landing pages")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("import")
                .arg(file_arg("input", "HTML file to import"))
                .arg(Arg::new("output").short('o').long("output").value_hint(ValueHint::FilePath)),
        )
        .subcommand(
            Command::new("generate")
                .arg(file_arg("components", "Components JSON file"))
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(clap::builder::PossibleValuesParser::new(["code", "preview"])),
                )
                .arg(Arg::new("output").short('o').long("output").value_hint(ValueHint::FilePath)),
        )
        .subcommand(
            Command::new("render")
                .arg(block_type_arg())
                .arg(Arg::new("config-json").long("config-json").value_hint(ValueHint::FilePath)),
        )
        .subcommand(Command::new("detect").arg(file_arg("input", "HTML fragment file")))
        .subcommand(
            Command::new("add")
                .arg(file_arg("components", "Components JSON file"))
                .arg(block_type_arg()),
        )
        .subcommand(
            Command::new("edit")
                .arg(file_arg("components", "Components JSON file"))
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("config-json").long("config-json").value_hint(ValueHint::FilePath))
                .arg(Arg::new("html").long("html").value_hint(ValueHint::FilePath)),
        )
        .subcommand(
            Command::new("settings").arg(Arg::new("set").long("set").action(ArgAction::Append)),
        )
        .subcommand(Command::new("list-blocks"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "pagesmith", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "pagesmith", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "pagesmith", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
