//! CLI context: resolves flags against saved settings and runs one generation.

use std::io::Write;

use super::{CliFlags, prompts};
use crate::entropy::Report;
use crate::error::{AegurError, Result};
use crate::pass::{Mode, Password, output};
use crate::rng::{self, Source};
use crate::settings::Settings;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Build a context, loading saved defaults unless `--default` was given.
    pub fn new(flags: CliFlags) -> Self {
        prompts::set_quiet(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        Self::with_settings(flags, settings)
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    pub fn length(&self) -> Result<usize> {
        match self.flags.length {
            Some(n) if n < 1 => Err(AegurError::InvalidLength { length: n }),
            Some(n) => usize::try_from(n).map_err(|_| AegurError::InvalidLength { length: n }),
            None => Ok(self.settings.pass_length),
        }
    }

    /// Mode flags win over the saved mode.
    pub fn mode(&self) -> Mode {
        if self.flags.has_mode_flag() {
            Mode::from_flags(
                self.flags.bank_mode,
                self.flags.ascii_only,
                self.flags.paranoid_mode,
            )
        } else {
            self.settings.mode
        }
    }

    /// `--paranoid-mode` keeps its handling even when a higher-precedence
    /// mode picked the pool. Without mode flags the saved choice applies.
    pub fn is_paranoid(&self) -> bool {
        self.flags.paranoid_mode
            || self.mode() == Mode::Paranoid
            || (!self.flags.has_mode_flag() && self.settings.paranoid)
    }

    pub fn guesses_per_second(&self) -> u64 {
        self.flags
            .guess_rate
            .unwrap_or(self.settings.guesses_per_second)
    }

    /// Generate one password and write everything the flags ask for to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let length = self.length()?;
        let mode = self.mode();
        let paranoid = self.is_paranoid();
        tracing::debug!(%mode, length, paranoid, "resolved options");

        self.handle_save(length, mode);

        let mut password = rng::generate(Source::from_flag(self.flags.urandom), length, mode)?;
        if paranoid && !password.is_locked() {
            prompts::mlock_failed();
        }

        let result = self.emit(out, &password, mode);

        if paranoid {
            password.scrub();
        }
        result
    }

    fn handle_save(&mut self, length: usize, mode: Mode) {
        if !self.flags.save {
            return;
        }
        self.settings = Settings {
            pass_length: length,
            mode,
            guesses_per_second: self.guesses_per_second(),
            paranoid: self.is_paranoid(),
        };
        match self.settings.save_to_file() {
            Ok(path) => prompts::settings_saved(&path),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn emit<W: Write>(&self, out: &mut W, password: &Password, mode: Mode) -> Result<()> {
        if self.is_paranoid() && !self.flags.show_password {
            writeln!(out, "{}", prompts::PARANOID_NOTICE)?;
            if self.flags.verbose {
                writeln!(out, "SHA3-256 Hash: {}", password.sha3_256_hex())?;
            }
            return Ok(());
        }

        if self.flags.board {
            output::to_clipboard(password)?;
            if !prompts::quiet() {
                writeln!(out, "{}", prompts::CLIPBOARD_COPIED)?;
            }
        } else {
            output::to_writer(out, password)?;
        }

        if self.flags.verbose {
            let report = Report::new(password.len(), mode, self.guesses_per_second());
            writeln!(out, "{report}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset;
    use clap::Parser;

    fn context(args: &[&str]) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("aegur").chain(args.iter().copied())).unwrap();
        Context::with_settings(flags, Settings::default())
    }

    fn run(args: &[&str]) -> Result<String> {
        let mut out = Vec::new();
        context(args).run(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_is_strong_sixteen() {
        let text = run(&[]).unwrap();
        let line = text.lines().next().unwrap();
        assert_eq!(line.chars().count(), 16);
        let pool = charset::pool_for(Mode::Strong);
        assert!(line.chars().all(|c| pool.contains(&c)));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn bank_verbose_reports_declared_pool() {
        let text = run(&["--bank-mode", "--length", "12", "--verbose"]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].chars().count(), 12);
        assert!(lines[0].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(lines[1], "Length: 12");
        assert_eq!(lines[2], "Character pool: 55");
        assert_eq!(lines[3], "Estimated entropy: 69.4 bits");
    }

    #[test]
    fn paranoid_hides_password() {
        let text = run(&["--paranoid-mode"]).unwrap();
        assert_eq!(text, format!("{}\n", prompts::PARANOID_NOTICE));
    }

    #[test]
    fn paranoid_verbose_prints_digest_only() {
        let text = run(&["--paranoid-mode", "--verbose"]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], prompts::PARANOID_NOTICE);
        let hex = lines[1].strip_prefix("SHA3-256 Hash: ").unwrap();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn paranoid_show_password_prints_it() {
        let text = run(&["--paranoid-mode", "--show-password", "--verbose", "-l", "20"]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].chars().count(), 20);
        assert_eq!(lines[2], "Character pool: 81");
    }

    #[test]
    fn bank_wins_over_paranoid_but_stays_hidden() {
        let ctx = context(&["--bank-mode", "--paranoid-mode"]);
        assert_eq!(ctx.mode(), Mode::Bank);
        assert!(ctx.is_paranoid());
    }

    #[test]
    fn non_positive_length_is_rejected_without_output() {
        for bad in ["0", "-3"] {
            let mut out = Vec::new();
            let err = context(&["--length", bad]).run(&mut out).unwrap_err();
            assert!(matches!(err, AegurError::InvalidLength { .. }));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn saved_settings_apply_without_flags() {
        let flags = CliFlags::try_parse_from(["aegur"]).unwrap();
        let settings = Settings {
            pass_length: 30,
            mode: Mode::AsciiOnly,
            guesses_per_second: 1_000,
            ..Settings::default()
        };
        let ctx = Context::with_settings(flags, settings);
        assert_eq!(ctx.length().unwrap(), 30);
        assert_eq!(ctx.mode(), Mode::AsciiOnly);
        assert_eq!(ctx.guesses_per_second(), 1_000);
    }

    #[test]
    fn flags_override_settings() {
        let flags =
            CliFlags::try_parse_from(["aegur", "--strong-mode", "-l", "8", "--guess-rate", "7"])
                .unwrap();
        let settings = Settings {
            pass_length: 30,
            mode: Mode::Bank,
            guesses_per_second: 1_000,
            paranoid: true,
        };
        let ctx = Context::with_settings(flags, settings);
        assert_eq!(ctx.length().unwrap(), 8);
        assert_eq!(ctx.mode(), Mode::Strong);
        assert_eq!(ctx.guesses_per_second(), 7);
        assert!(!ctx.is_paranoid());
    }

    #[test]
    fn saved_paranoid_mode_hides_password() {
        let flags = CliFlags::try_parse_from(["aegur"]).unwrap();
        let settings = Settings {
            mode: Mode::Paranoid,
            ..Settings::default()
        };
        let mut out = Vec::new();
        Context::with_settings(flags, settings).run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", prompts::PARANOID_NOTICE));
    }

    #[test]
    fn saved_paranoid_flag_keeps_bank_pool_hidden() {
        let flags = CliFlags::try_parse_from(["aegur"]).unwrap();
        let settings = Settings {
            mode: Mode::Bank,
            paranoid: true,
            ..Settings::default()
        };
        let ctx = Context::with_settings(flags, settings);
        assert_eq!(ctx.mode(), Mode::Bank);
        assert!(ctx.is_paranoid());
    }

    #[test]
    fn explicit_mode_flag_drops_saved_paranoid() {
        let flags = CliFlags::try_parse_from(["aegur", "--bank-mode"]).unwrap();
        let settings = Settings {
            paranoid: true,
            ..Settings::default()
        };
        assert!(!Context::with_settings(flags, settings).is_paranoid());
    }

    #[test]
    fn custom_rate_shows_in_report() {
        let text = run(&["--bank-mode", "--verbose", "--guess-rate", "2500000"]).unwrap();
        assert!(text.contains("Brute-force resistance (2,500,000 guesses/s): "));
    }
}
