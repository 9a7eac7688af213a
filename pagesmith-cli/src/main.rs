// Command-line interface for pagesmith
//
// This binary drives the block model from the shell. Pages are kept as a JSON
// array of components; every command that edits a page reads that file and
// writes it back in place.
//
// Usage:
//  pagesmith import <page.html> [-o components.json]       - Split a pasted page into components
//  pagesmith generate <components.json> [--mode code|preview] [-o page.html]
//  pagesmith render <type> [--config-json config.json]     - Render one block
//  pagesmith detect <fragment.html>                        - Print the detected block type
//  pagesmith add <components.json> <type>                  - Append a block with its default config
//  pagesmith edit <components.json> <id> (--config-json FILE | --html FILE)
//  pagesmith settings [--set key=value]...                 - Show or persist search settings
//  pagesmith list-blocks                                   - List registered block types
//
// Global options --config and --store pick the configuration file and the
// settings store file.

use clap::{Arg, ArgAction, ArgGroup, Command, ValueHint};
use pagesmith_blocks::model::BlockConfig;
use pagesmith_blocks::{
    detect, generate, import, BlockKind, ExportMode, Session, Settings, TemplateRegistry,
};
use pagesmith_config::store::SETTING_KEYS;
use pagesmith_config::{resolve_settings, Loader, PagesmithConfig, SettingsStore};
use std::fs;

fn block_type_arg() -> Arg {
    Arg::new("type")
        .help("Block type")
        .required(true)
        .value_parser(clap::builder::PossibleValuesParser::new(
            BlockKind::ALL.map(BlockKind::as_str),
        ))
        .value_hint(ValueHint::Other)
}

fn components_arg() -> Arg {
    Arg::new("components")
        .help("Components JSON file")
        .required(true)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("pagesmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build, import and export block-based landing pages")
        .long_about(
            "pagesmith keeps a landing page as an ordered list of typed blocks.\n\n\
            Pages exported with `generate` carry boundary markers, so importing them\n\
            again gives back the same components. Pages without markers are split\n\
            into top-level elements and each one is matched to a block type.\n\n\
            Examples:\n  \
            pagesmith import landing.html -o page.json\n  \
            pagesmith add page.json carousel\n  \
            pagesmith generate page.json --mode code -o landing.html"
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pagesmith.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .help("Path to the settings store (overrides storage.path)")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("import")
                .about("Split an HTML page into components")
                .arg(
                    Arg::new("input")
                        .help("HTML file to import")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("generate")
                .about("Export components as a page with boundary markers")
                .arg(components_arg())
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .help("Marker flavour (defaults to export.mode)")
                        .value_parser(clap::builder::PossibleValuesParser::new(["code", "preview"])),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a single block")
                .arg(block_type_arg())
                .arg(
                    Arg::new("config-json")
                        .long("config-json")
                        .value_name("FILE")
                        .help("Block config as JSON (defaults to the block's default config)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("detect")
                .about("Print the block type of an HTML fragment")
                .arg(
                    Arg::new("input")
                        .help("HTML fragment file")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Append a block with its default config")
                .arg(components_arg())
                .arg(block_type_arg()),
        )
        .subcommand(
            Command::new("edit")
                .about("Save a component from a config or from hand-edited HTML")
                .arg(components_arg())
                .arg(Arg::new("id").help("Component id").required(true))
                .arg(
                    Arg::new("config-json")
                        .long("config-json")
                        .value_name("FILE")
                        .help("New block config as JSON")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .value_name("FILE")
                        .help("Hand-edited HTML for the component")
                        .value_hint(ValueHint::FilePath),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["config-json", "html"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Show or persist the search settings")
                .arg(
                    Arg::new("set")
                        .long("set")
                        .value_name("KEY=VALUE")
                        .help("Store a setting (app_id, api_search_key, index_name, currency)")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("list-blocks").about("List registered block types"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("store").map(|s| s.as_str()),
    );
    let registry = TemplateRegistry::with_defaults();

    match matches.subcommand() {
        Some(("import", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_import_command(input, output, &registry);
        }
        Some(("generate", sub_matches)) => {
            let components = sub_matches
                .get_one::<String>("components")
                .expect("components is required");
            let mode = match sub_matches.get_one::<String>("mode") {
                Some(raw) => raw
                    .parse::<ExportMode>()
                    .unwrap_or_else(|e| fail(&e)),
                None => config.export.mode,
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_generate_command(components, mode, output, &config, &registry);
        }
        Some(("render", sub_matches)) => {
            let block_type = sub_matches
                .get_one::<String>("type")
                .expect("type is required");
            let config_json = sub_matches.get_one::<String>("config-json").map(|s| s.as_str());
            handle_render_command(block_type, config_json, &config, &registry);
        }
        Some(("detect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_detect_command(input);
        }
        Some(("add", sub_matches)) => {
            let components = sub_matches
                .get_one::<String>("components")
                .expect("components is required");
            let block_type = sub_matches
                .get_one::<String>("type")
                .expect("type is required");
            handle_add_command(components, block_type, &config, &registry);
        }
        Some(("edit", sub_matches)) => {
            let components = sub_matches
                .get_one::<String>("components")
                .expect("components is required");
            let id = sub_matches.get_one::<String>("id").expect("id is required");
            let edit = match (
                sub_matches.get_one::<String>("config-json"),
                sub_matches.get_one::<String>("html"),
            ) {
                (Some(path), _) => Edit::Form(path),
                (None, Some(path)) => Edit::Code(path),
                (None, None) => fail("one of --config-json or --html is required"),
            };
            handle_edit_command(components, id, edit, &config, &registry);
        }
        Some(("settings", sub_matches)) => {
            let assignments: Vec<&String> = sub_matches
                .get_many::<String>("set")
                .map(|values| values.collect())
                .unwrap_or_default();
            handle_settings_command(&assignments, &config);
        }
        Some(("list-blocks", _)) => {
            handle_list_blocks_command(&registry);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_import_command(input: &str, output: Option<&str>, registry: &TemplateRegistry) {
    let html = read_file(input);
    let components = import(&html, registry);
    log::info!("imported {} components from {input}", components.len());
    write_output(output, &to_json(&Session::from_components(components)));
}

fn handle_generate_command(
    components: &str,
    mode: ExportMode,
    output: Option<&str>,
    config: &PagesmithConfig,
    registry: &TemplateRegistry,
) {
    let session = read_session(components);
    let Some(settings) = load_settings(config) else {
        fail("No settings found. Use `pagesmith settings --set app_id=...` first");
    };
    let page = generate(session.components(), mode, Some(&settings), registry);
    write_output(output, &page);
}

fn handle_render_command(
    block_type: &str,
    config_json: Option<&str>,
    config: &PagesmithConfig,
    registry: &TemplateRegistry,
) {
    let block_config = match config_json {
        Some(path) => parse_block_config(path),
        None => registry
            .default_config(block_type)
            .unwrap_or_else(|e| fail(&e.to_string())),
    };
    let settings = load_settings(config);
    println!("{}", registry.render(block_type, &block_config, settings.as_ref()));
}

fn handle_detect_command(input: &str) {
    let html = read_file(input);
    println!("{}", detect(&html));
}

fn handle_add_command(
    components: &str,
    block_type: &str,
    config: &PagesmithConfig,
    registry: &TemplateRegistry,
) {
    let mut session = read_session(components);
    let settings = load_settings(config);
    let id = match session.add_block(block_type, registry, settings.as_ref()) {
        Ok(component) => component.id.clone(),
        Err(e) => fail(&e.to_string()),
    };
    write_session(components, &session);
    println!("{id}");
}

enum Edit<'a> {
    Form(&'a str),
    Code(&'a str),
}

fn handle_edit_command(
    components: &str,
    id: &str,
    edit: Edit<'_>,
    config: &PagesmithConfig,
    registry: &TemplateRegistry,
) {
    let mut session = read_session(components);
    let saved = match edit {
        Edit::Form(path) => {
            let block_config = parse_block_config(path);
            let settings = load_settings(config);
            session.save_from_form(id, block_config, registry, settings.as_ref())
        }
        Edit::Code(path) => session.save_from_code(id, &read_file(path), registry),
    };
    let kind = match saved {
        Ok(component) => component.kind(),
        Err(e) => fail(&e.to_string()),
    };
    write_session(components, &session);
    println!("Updated {id} ({kind})");
}

fn handle_settings_command(assignments: &[&String], config: &PagesmithConfig) {
    let store = SettingsStore::from_config(&config.storage);

    if !assignments.is_empty() {
        for assignment in assignments {
            let Some((key, value)) = assignment.split_once('=') else {
                fail(&format!("Expected KEY=VALUE, got '{assignment}'"));
            };
            if let Err(e) = store.set(key.trim(), value.trim()) {
                fail(&e.to_string());
            }
        }
        println!("Saved {} setting(s) to {}", assignments.len(), store.path().display());
        return;
    }

    for key in SETTING_KEYS {
        let stored = store.get(key).unwrap_or_else(|e| fail(&e.to_string()));
        let (value, source) = match stored {
            Some(value) => (value, "store"),
            None => match config.settings.value(key) {
                Some(value) => (value.to_string(), "config"),
                None => (String::new(), "unset"),
            },
        };
        println!("{key:<16} = {value} ({source})");
    }
    if load_settings(config).is_none() {
        println!("\nSettings are incomplete: app_id, api_search_key and index_name are all required.");
    }
}

fn handle_list_blocks_command(registry: &TemplateRegistry) {
    println!("Available blocks:\n");
    for kind in registry.list_blocks() {
        println!("  {:<18} - {}", kind.as_str(), kind.display_name());
    }
}

/// Load the layered configuration: defaults, `pagesmith.toml` in the working
/// directory, then `--config` and `--store`.
fn load_cli_config(explicit_path: Option<&str>, store_path: Option<&str>) -> PagesmithConfig {
    let loader = Loader::new().with_optional_file("pagesmith.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match store_path {
        Some(path) => loader
            .set_override("storage.path", path)
            .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}"))),
        None => loader,
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn load_settings(config: &PagesmithConfig) -> Option<Settings> {
    let store = SettingsStore::from_config(&config.storage);
    resolve_settings(config, &store).unwrap_or_else(|e| fail(&e.to_string()))
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| fail(&format!("reading file '{path}': {e}")))
}

fn read_session(path: &str) -> Session {
    let raw = read_file(path);
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| fail(&format!("'{path}' is not a component list: {e}")))
}

fn write_session(path: &str, session: &Session) {
    if let Err(e) = fs::write(path, to_json(session)) {
        fail(&format!("writing file '{path}': {e}"));
    }
}

fn parse_block_config(path: &str) -> BlockConfig {
    let raw = read_file(path);
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| fail(&format!("'{path}' is not a block config: {e}")))
}

fn to_json(session: &Session) -> String {
    serde_json::to_string_pretty(session)
        .unwrap_or_else(|e| fail(&format!("serializing components: {e}")))
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                fail(&format!("writing file '{path}': {e}"));
            }
        }
        None => println!("{text}"),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
