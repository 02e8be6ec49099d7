use clap::Parser;

/// Offline password generator with ambiguity-free character pools.
///
/// Mode precedence when several are given: bank > ascii > paranoid > strong.
#[derive(Debug, Default, Parser)]
#[command(name = "aegur", version)]
pub struct CliFlags {
    /// Safe ASCII letters, digits and symbols
    #[arg(long)]
    pub ascii_only: bool,

    /// Alphanumeric ASCII only
    #[arg(long)]
    pub bank_mode: bool,

    /// ASCII plus Greek, Cyrillic and symbol characters (default)
    #[arg(long)]
    pub strong_mode: bool,

    /// Hide the password unless --show-password, scrub it before exit
    #[arg(long)]
    pub paranoid_mode: bool,

    /// Characters per password [default: 16]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Print entropy statistics after the password
    #[arg(long)]
    pub verbose: bool,

    /// Print the password in paranoid mode
    #[arg(long)]
    pub show_password: bool,

    /// Draw every character straight from the OS random source
    #[arg(short, long)]
    pub urandom: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Guesses per second assumed by the brute-force estimate [default: 10^12]
    #[arg(long, value_name = "N", env = "AEGUR_GUESS_RATE",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub guess_rate: Option<u64>,

    /// Save length, mode and guess rate as defaults
    #[arg(short, long)]
    pub save: bool,

    /// Ignore saved defaults for this run
    #[arg(short, long, conflicts_with = "save")]
    pub default: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    pub fn has_mode_flag(&self) -> bool {
        self.ascii_only || self.bank_mode || self.strong_mode || self.paranoid_mode
    }
}
