use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::Clock;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::store::KeyValueStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite store and its schema
pub fn handle(cli: &Cli, clock: &dyn Clock) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.as_deref(), cli.test)?;

    println!("⚙️  Initializing breaktracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Store      : {}", &cfg.store);

    let store = SqliteStore::open(&cfg.store)?;

    if let Err(e) = store.audit(
        clock.now(),
        "init",
        "",
        &format!("Store initialized at {}", &cfg.store),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 breaktracker initialization completed!");
    Ok(())
}
