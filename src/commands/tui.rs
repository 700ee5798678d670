//! Tui command implementation

use crate::cli::TuiArgs;
use crate::config::Config;
use crate::demo::{bare_tree, initial_tree};
use crate::error::Result;
use crate::tui::{self, App};

/// Run the interactive editor
pub fn run(args: TuiArgs, config: &Config) -> Result<()> {
    let mut tui_config = config.tui.clone();
    if let Some(locale) = args.locale {
        tui_config.locale = locale;
    }
    if args.no_mouse {
        tui_config.mouse = false;
    }

    let (forest, root) = if args.empty {
        bare_tree(&config.tree.root_label)
    } else {
        initial_tree(&config.tree)?
    };

    tracing::info!(locale = %tui_config.locale, mouse = tui_config.mouse, "Starting TUI");
    let app = App::with_config(forest, root, &tui_config);
    tui::run(app, &tui_config)
}
