use clap::Parser;
use std::path::PathBuf;

/// Version string shown by `--version`, with the git hash and commit date
/// appended when the build had them.
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} ({} {})", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "gestad", version = get_version())]
#[command(about = "Système de gestion administrative du personnel", long_about = None)]
pub struct Cli {
    /// Fichier de données JSON (défaut : data_administration.json)
    #[arg(short = 'f', long = "fichier", value_name = "CHEMIN")]
    pub data_file: Option<PathBuf>,
}
