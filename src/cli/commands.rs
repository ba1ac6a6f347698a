//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::automaton::{Automaton, AutomatonLoader, LoadError, TableLayout};
use crate::decision::{decide, verdict};
use crate::reachability::{closure, try_reachable};
use crate::serialization::{
    AutomatonSerializer, BincodeSerializer, JsonSerializer, PlainTextSerializer,
};
use crate::word::Word;
use crate::Error;

use super::args::{AutomatonArgs, CheckArgs, Commands, SerializationFormat};
use super::detect::{detect_format, format_from_extension, DetectionMethod, FormatDetection};
use super::paths::{config_file_path, PersistentConfig};

/// Execute a `dfa-tool` command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Check(args) => cmd_check(&args, config_path).map(|_| ()),
        Commands::Reach {
            source,
            target,
            automaton,
        } => cmd_reach(source, target, &automaton, config_path),
        Commands::Info { automaton } => cmd_info(&automaton, config_path),
        Commands::Convert {
            input,
            output,
            from_format,
            to_format,
            layout,
        } => cmd_convert(&input, &output, from_format, to_format, layout),
        Commands::Settings {
            set_automaton,
            set_layout,
            reset,
        } => cmd_settings(set_automaton, set_layout, reset, config_path),
    }
}

/// Check command: prints the verdict and returns the decision
pub fn cmd_check(args: &CheckArgs, config_path: Option<&Path>) -> Result<bool> {
    let (_, automaton) = resolve_and_load(&args.source, config_path)?;

    let word1 = parse_word(&args.word1, "first")?;
    let word2 = parse_word(&args.word2, "second")?;
    debug!(word1 = %word1, word2 = %word2, "parsed words");

    let acceptable = decide(&automaton, &word1, &word2)
        .map_err(Error::from)
        .context("Failed to apply words to the automaton")?;

    println!("{}", verdict(acceptable));
    Ok(acceptable)
}

/// Reach command
fn cmd_reach(
    source: usize,
    target: Option<usize>,
    args: &AutomatonArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let (_, automaton) = resolve_and_load(args, config_path)?;

    match target {
        Some(target) => {
            let reachable = try_reachable(&automaton, source, target).map_err(Error::from)?;
            println!("{}", if reachable { "reachable" } else { "unreachable" });
        }
        None => {
            let states = closure(&automaton, source).map_err(Error::from)?;
            let states: Vec<String> = states.iter().map(|s| s.to_string()).collect();
            println!("{}", states.join(" "));
        }
    }

    Ok(())
}

/// Info command
fn cmd_info(args: &AutomatonArgs, config_path: Option<&Path>) -> Result<()> {
    let (path, automaton, detection) = resolve_and_detect(args, config_path)?;

    println!("{}", "Automaton Information".bold().underline());
    println!();
    println!("  Path:      {}", path.display().to_string().cyan());
    println!(
        "  Format:    {} (detected via {})",
        detection.format.to_string().green(),
        detection.method.to_string().yellow()
    );

    let finals: Vec<String> = automaton.final_states().map(|s| s.to_string()).collect();
    let reachable = closure(&automaton, automaton.initial_state()).map_err(Error::from)?;

    println!("  Alphabet:  {} symbol(s)", automaton.alphabet_size());
    println!("  States:    {}", automaton.states_size());
    println!("  Initial:   {}", automaton.initial_state());
    println!("  Final:     [{}]", finals.join(", "));
    println!(
        "  Reachable: {} of {} state(s) from the initial state",
        reachable.len(),
        automaton.states_size()
    );

    Ok(())
}

/// Convert command
fn cmd_convert(
    input: &Path,
    output: &Path,
    from_format: Option<SerializationFormat>,
    to_format: Option<SerializationFormat>,
    layout: Option<TableLayout>,
) -> Result<()> {
    let to_format = match to_format.or_else(|| format_from_extension(output)) {
        Some(format) => format,
        None => bail!(
            "Cannot determine output format for {}; pass --to-format",
            output.display()
        ),
    };

    let automaton = load_automaton(input, from_format, layout.unwrap_or_default())?;
    save_automaton(&automaton, output, to_format)?;

    println!(
        "{} {} -> {} ({})",
        "Converted".green().bold(),
        input.display(),
        output.display(),
        to_format
    );

    Ok(())
}

/// Settings command
fn cmd_settings(
    set_automaton: Option<PathBuf>,
    set_layout: Option<TableLayout>,
    reset: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let changed = reset || set_automaton.is_some() || set_layout.is_some();

    let mut config = if reset {
        PersistentConfig::default()
    } else {
        PersistentConfig::load_from(config_path)?
    };
    config = config.merge_with_cli(set_automaton, set_layout);

    if changed {
        config.save_to(config_path)?;
    }

    println!("{}", "Settings".bold().underline());
    println!();
    println!("  Config:    {}", config_file_path(config_path)?.display().to_string().cyan());
    println!(
        "  Automaton: {}",
        config.automaton_path_or_default().display().to_string().green()
    );
    println!("  Layout:    {}", config.layout_or_default().to_string().green());

    Ok(())
}

/// Load persistent config, tolerating an unreadable default config file
fn load_config(config_path: Option<&Path>) -> Result<PersistentConfig> {
    match config_path {
        Some(path) => PersistentConfig::load_from(Some(path)),
        None => Ok(PersistentConfig::load().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring unreadable default config");
            PersistentConfig::default()
        })),
    }
}

/// Resolve the automaton path and layout from CLI options and config, then load it
pub fn resolve_and_load(
    args: &AutomatonArgs,
    config_path: Option<&Path>,
) -> Result<(PathBuf, Automaton)> {
    let (path, automaton, _) = resolve_and_detect(args, config_path)?;
    Ok((path, automaton))
}

fn resolve_and_detect(
    args: &AutomatonArgs,
    config_path: Option<&Path>,
) -> Result<(PathBuf, Automaton, FormatDetection)> {
    let config = load_config(config_path)?.merge_with_cli(args.automaton.clone(), args.layout);
    let path = config.automaton_path_or_default();
    let (automaton, detection) = load_detected(&path, args.format, config.layout_or_default())?;
    Ok((path, automaton, detection))
}

/// Load an automaton in any supported format
///
/// An explicit format or a known extension is binding. Otherwise a JSON or
/// bincode guess from the file's content is tried first, and the numeric
/// description format is the fallback.
pub fn load_automaton(
    path: &Path,
    format: Option<SerializationFormat>,
    layout: TableLayout,
) -> Result<Automaton> {
    load_detected(path, format, layout).map(|(automaton, _)| automaton)
}

fn load_detected(
    path: &Path,
    format: Option<SerializationFormat>,
    layout: TableLayout,
) -> Result<(Automaton, FormatDetection)> {
    let loaded = match format {
        Some(format) => load_as(path, format, layout).map(|automaton| {
            (automaton, FormatDetection { format, method: DetectionMethod::UserSpecified })
        }),
        None => match format_from_extension(path) {
            Some(format) => load_as(path, format, layout).map(|automaton| {
                (automaton, FormatDetection { format, method: DetectionMethod::Extension })
            }),
            None => load_by_content(path, layout),
        },
    };

    loaded.with_context(|| format!("Failed to load automaton from {}", path.display()))
}

fn load_by_content(
    path: &Path,
    layout: TableLayout,
) -> std::result::Result<(Automaton, FormatDetection), Error> {
    // Unreadable files fall through to the text loader so they surface as I/O errors
    let guess = detect_format(path, None).ok().map(|detection| detection.format);

    if let Some(format @ (SerializationFormat::Json | SerializationFormat::Bincode)) = guess {
        match load_as(path, format, layout) {
            Ok(automaton) => {
                return Ok((automaton, FormatDetection { format, method: DetectionMethod::Content }));
            }
            Err(err) => debug!(path = %path.display(), %format, error = %err, "reading as text instead"),
        }
    }

    let format = SerializationFormat::Text;
    load_as(path, format, layout)
        .map(|automaton| (automaton, FormatDetection { format, method: DetectionMethod::Content }))
}

fn load_as(
    path: &Path,
    format: SerializationFormat,
    layout: TableLayout,
) -> std::result::Result<Automaton, Error> {
    debug!(path = %path.display(), %format, %layout, "loading automaton");

    match format {
        SerializationFormat::Text => AutomatonLoader::with_layout(layout)
            .load_path(path)
            .map_err(Error::from),
        SerializationFormat::Json => {
            open(path).and_then(|file| JsonSerializer::deserialize(file).map_err(Error::from))
        }
        SerializationFormat::Bincode => {
            open(path).and_then(|file| BincodeSerializer::deserialize(file).map_err(Error::from))
        }
    }
}

fn open(path: &Path) -> std::result::Result<BufReader<File>, Error> {
    File::open(path).map(BufReader::new).map_err(|source| {
        Error::from(LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        })
    })
}

/// Save an automaton in the given format
pub fn save_automaton(automaton: &Automaton, path: &Path, format: SerializationFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        SerializationFormat::Text => PlainTextSerializer::serialize(automaton, &mut writer),
        SerializationFormat::Json => JsonSerializer::serialize(automaton, &mut writer),
        SerializationFormat::Bincode => BincodeSerializer::serialize(automaton, &mut writer),
    }
    .map_err(Error::from)
    .with_context(|| format!("Failed to write automaton to {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("Failed to write automaton to {}", path.display()))
}

fn parse_word(token: &str, which: &str) -> Result<Word> {
    Word::parse(token)
        .map_err(Error::from)
        .with_context(|| format!("Failed to read {} word {:?}", which, token))
}
