//! Command line interface.

use clap::Parser;

/// Terminal companion app mockup for a smart pet feeder.
///
/// All feeder data shown is simulated; no device is contacted.
#[derive(Debug, Parser)]
#[command(name = "pawfeed", version, about)]
pub struct Cli {
    /// Color theme: dark, light or nocolor
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Disable all UI colors (same as --theme nocolor)
    #[arg(long)]
    pub no_colors: bool,

    /// Start directly on the dashboard, skipping splash/onboarding/login
    #[arg(long)]
    pub skip_intro: bool,
}

impl Cli {
    /// Resolve the effective theme from the flags.
    pub fn theme_type(&self) -> crate::styles::ThemeType {
        if self.no_colors {
            return crate::styles::ThemeType::NoColor;
        }
        self.theme.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::ThemeType;

    #[test]
    fn no_colors_flag_wins_over_theme() {
        let cli = Cli::parse_from(["pawfeed", "--theme", "light", "--no-colors"]);
        assert_eq!(cli.theme_type(), ThemeType::NoColor);
    }

    #[test]
    fn theme_flag_parses() {
        let cli = Cli::parse_from(["pawfeed", "--theme", "light"]);
        assert_eq!(cli.theme_type(), ThemeType::Light);
        assert!(!cli.skip_intro);
    }
}
