//! Command-line interface definitions.
//!
//! Each screen of the app is a subcommand: browsing surahs, tafseer, hadith,
//! prayer times, duas and reflections, plus the locally stored tasbih
//! counter, favorites and notes.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::paths;
use crate::application::hadith::DEFAULT_PAGE_LIMIT;

/// Quran, prayer times, hadith and daily remembrance in the terminal
#[derive(Parser, Debug)]
#[command(name = "mishkat")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.mishkat/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The config file to read, falling back to the default location.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::default_config)
    }

    /// Log level implied by `-v` flags, if any.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// `None` means detect from the terminal.
    #[must_use]
    pub fn forced(&self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse and search the surahs
    #[command(subcommand)]
    Surah(SurahCommand),

    /// List the available reciters
    Reciters,

    /// Read commentary on an ayah
    #[command(subcommand)]
    Tafseer(TafseerCommand),

    /// Browse hadith collections
    #[command(subcommand)]
    Hadith(HadithCommand),

    /// Show today's prayer times and the next prayer
    Prayer(PrayerArgs),

    /// Show the reflection of the day
    Reflection(ReflectionArgs),

    /// Browse duas by category
    #[command(subcommand)]
    Dua(DuaCommand),

    /// Tasbih counter
    Tasbih(TasbihArgs),

    /// Manage favorite surahs
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Manage per-surah notes
    #[command(subcommand)]
    Notes(NotesCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `mishkat surah`.
#[derive(Subcommand, Debug)]
pub enum SurahCommand {
    /// List surahs, optionally filtered
    List {
        /// Arabic or English name, number, or مكية / مدنية
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the text of a surah
    Show(SurahShowArgs),
    /// Show the recitation URL and ayah seek points
    Audio(SurahAudioArgs),
}

#[derive(Args, Debug)]
pub struct SurahShowArgs {
    /// Surah number (1-114)
    pub number: u32,

    /// First ayah to show
    #[arg(long)]
    pub from: Option<u32>,

    /// Last ayah to show
    #[arg(long)]
    pub to: Option<u32>,
}

#[derive(Args, Debug)]
pub struct SurahAudioArgs {
    /// Surah number (1-114)
    pub number: u32,

    /// Reciter id (see `mishkat reciters`)
    #[arg(short, long)]
    pub reciter: Option<u32>,

    /// Length of the recording in seconds, to estimate ayah positions
    #[arg(long)]
    pub duration: Option<f64>,

    /// Playback position in seconds; reports the ayah being recited
    #[arg(long, requires = "duration")]
    pub at: Option<f64>,
}

/// Subcommands for `mishkat tafseer`.
#[derive(Subcommand, Debug)]
pub enum TafseerCommand {
    /// List the available commentaries
    Editions,
    /// Show commentary on one ayah
    Show {
        /// Surah number (1-114)
        surah: u32,
        /// Ayah number within the surah
        ayah: u32,
        /// Edition identifier, e.g. ar-tafsir-ibn-kathir
        #[arg(short, long)]
        edition: Option<String>,
    },
}

/// Subcommands for `mishkat hadith`.
#[derive(Subcommand, Debug)]
pub enum HadithCommand {
    /// List the hadith collections
    Collections,
    /// List one page of a collection
    List {
        /// Collection id, e.g. bukhari
        collection: String,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Hadiths per page (1-100)
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
}

#[derive(Args, Debug)]
pub struct PrayerArgs {
    /// Latitude; overrides the configured location
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude; overrides the configured location
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Date as YYYY-MM-DD [default: today]
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,
}

impl PrayerArgs {
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }
}

#[derive(Args, Debug)]
pub struct ReflectionArgs {
    /// List every reflection instead of today's
    #[arg(long)]
    pub all: bool,
}

/// Subcommands for `mishkat dua`.
#[derive(Subcommand, Debug)]
pub enum DuaCommand {
    /// List dua categories
    Categories,
    /// List duas
    List {
        /// Category id or English slug, e.g. forgiveness
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct TasbihArgs {
    #[command(subcommand)]
    pub action: Option<TasbihCommand>,
}

/// Subcommands for `mishkat tasbih`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TasbihCommand {
    /// Show the current count (default)
    Show,
    /// Count one or more tasbihat
    Add {
        #[arg(short = 'n', long, default_value_t = 1)]
        times: u64,
    },
    /// Reset the counter to zero
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Subcommands for `mishkat favorites`.
#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorite surahs
    List,
    /// Add a surah to favorites
    Add { number: u32 },
    /// Remove a surah from favorites
    Remove { number: u32 },
    /// Add or remove a surah
    Toggle { number: u32 },
}

/// Subcommands for `mishkat notes`.
#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    /// List every surah with a note
    List,
    /// Show the note for a surah
    Show { number: u32 },
    /// Write the note for a surah; empty text deletes it
    Set { number: u32, text: String },
    /// Delete the note for a surah
    Delete { number: u32 },
}

/// Subcommands for `mishkat config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}

/// Subcommands for `mishkat check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Probe every upstream API
    Connection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = parse(&["mishkat", "reciters", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.log_level(), Some("debug"));
        assert!(matches!(cli.command, Commands::Reciters));
    }

    #[test]
    fn config_path_defaults_to_home() {
        let cli = parse(&["mishkat", "reciters"]);
        assert!(cli.config_path().ends_with(".mishkat/config.toml"));

        let cli = parse(&["mishkat", "--config", "/tmp/m.toml", "reciters"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/m.toml"));
    }

    #[test]
    fn surah_show_range() {
        let cli = parse(&["mishkat", "surah", "show", "2", "--from", "255", "--to", "257"]);
        match cli.command {
            Commands::Surah(SurahCommand::Show(args)) => {
                assert_eq!(args.number, 2);
                assert_eq!(args.from, Some(255));
                assert_eq!(args.to, Some(257));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn audio_position_needs_duration() {
        assert!(Cli::try_parse_from(["mishkat", "surah", "audio", "1", "--at", "30"]).is_err());
        assert!(Cli::try_parse_from([
            "mishkat", "surah", "audio", "1", "--duration", "60", "--at", "30"
        ])
        .is_ok());
    }

    #[test]
    fn hadith_paging_defaults() {
        match parse(&["mishkat", "hadith", "list", "bukhari"]).command {
            Commands::Hadith(HadithCommand::List {
                collection,
                page,
                limit,
            }) => {
                assert_eq!(collection, "bukhari");
                assert_eq!(page, 1);
                assert_eq!(limit, DEFAULT_PAGE_LIMIT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn prayer_needs_both_coordinates() {
        assert!(Cli::try_parse_from(["mishkat", "prayer", "--lat", "21.4"]).is_err());

        let cli = parse(&["mishkat", "prayer", "--lat", "-33.86", "--lng", "151.2", "--date", "2026-03-20"]);
        match cli.command {
            Commands::Prayer(args) => {
                assert_eq!(args.coordinates(), Some((-33.86, 151.2)));
                assert_eq!(
                    args.date,
                    chrono::NaiveDate::from_ymd_opt(2026, 3, 20)
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tasbih_defaults_to_show() {
        match parse(&["mishkat", "tasbih"]).command {
            Commands::Tasbih(args) => assert_eq!(args.action, None),
            other => panic!("unexpected command: {other:?}"),
        }
        match parse(&["mishkat", "tasbih", "add", "-n", "33"]).command {
            Commands::Tasbih(args) => {
                assert_eq!(args.action, Some(TasbihCommand::Add { times: 33 }));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn color_choice_forcing() {
        assert_eq!(ColorChoice::Auto.forced(), None);
        assert_eq!(ColorChoice::Never.forced(), Some(false));
    }
}
