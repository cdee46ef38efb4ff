//! Command-line front end.
//!
//! [`execute`] loads the configuration named by the global flags, sets up
//! logging, and hands each subcommand to its handler module.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dua;
pub mod favorites;
pub mod hadith;
pub mod notes;
pub mod output;
pub mod paths;
pub mod prayer;
pub mod reflection;
pub mod surah;
pub mod tafseer;
pub mod tasbih;

use std::path::PathBuf;

use tracing::debug;

use self::command::{
    CheckCommand, Cli, Commands, ConfigCommand, DuaCommand, FavoritesCommand, HadithCommand,
    NotesCommand, SurahCommand, TafseerCommand,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Storage file: the configured path, else `~/.mishkat/storage.json`.
#[must_use]
pub fn storage_path(config: &Config) -> PathBuf {
    config
        .storage
        .path
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .map_or_else(paths::default_storage, PathBuf::from)
}

/// Run one parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();

    // `config init` and `config validate` must work on a file that does not
    // load yet.
    match &cli.command {
        Commands::Config(ConfigCommand::Init { force }) => {
            return config::execute_init(&config_path, *force);
        }
        Commands::Config(ConfigCommand::Validate) => {
            return config::execute_validate(&config_path);
        }
        _ => {}
    }

    let config = Config::load_or_default(&config_path)?;
    config.init_logging(cli.log_level());
    debug!(config = %config_path.display(), "Configuration loaded");

    let store = storage_path(&config);
    match &cli.command {
        Commands::Surah(SurahCommand::List { search }) => {
            surah::execute_list(&config, search.as_deref()).await
        }
        Commands::Surah(SurahCommand::Show(args)) => surah::execute_show(&config, args).await,
        Commands::Surah(SurahCommand::Audio(args)) => surah::execute_audio(&config, args),
        Commands::Reciters => surah::execute_reciters(&config),
        Commands::Tafseer(TafseerCommand::Editions) => tafseer::execute_editions(&config).await,
        Commands::Tafseer(TafseerCommand::Show {
            surah,
            ayah,
            edition,
        }) => tafseer::execute_show(&config, *surah, *ayah, edition.as_deref()).await,
        Commands::Hadith(HadithCommand::Collections) => hadith::execute_collections().await,
        Commands::Hadith(HadithCommand::List {
            collection,
            page,
            limit,
        }) => hadith::execute_list(collection, *page, *limit).await,
        Commands::Prayer(args) => prayer::execute(&config, args).await,
        Commands::Reflection(args) => reflection::execute(args.all),
        Commands::Dua(DuaCommand::Categories) => dua::execute_categories().await,
        Commands::Dua(DuaCommand::List { category }) => {
            dua::execute_list(category.as_deref()).await
        }
        Commands::Tasbih(args) => tasbih::execute(&store, args.action.as_ref()),
        Commands::Favorites(FavoritesCommand::List) => favorites::execute_list(&store),
        Commands::Favorites(FavoritesCommand::Add { number }) => {
            favorites::execute_add(&config, &store, *number).await
        }
        Commands::Favorites(FavoritesCommand::Remove { number }) => {
            favorites::execute_remove(&store, *number)
        }
        Commands::Favorites(FavoritesCommand::Toggle { number }) => {
            favorites::execute_toggle(&config, &store, *number).await
        }
        Commands::Notes(NotesCommand::List) => notes::execute_list(&store),
        Commands::Notes(NotesCommand::Show { number }) => notes::execute_show(&store, *number),
        Commands::Notes(NotesCommand::Set { number, text }) => {
            notes::execute_set(&store, *number, text)
        }
        Commands::Notes(NotesCommand::Delete { number }) => {
            notes::execute_delete(&store, *number)
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(&config_path, &config),
        Commands::Config(ConfigCommand::Init { .. } | ConfigCommand::Validate) => Ok(()),
        Commands::Check(CheckCommand::Connection) => check::execute_connection(&config).await,
    }
}
