//! Show command implementation

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::demo::{bare_tree, demo_tree};
use crate::error::Result;
use crate::tree::render::{order_line, outline, render_static};

/// Build the text printed by `show`.
pub fn render(args: &ShowArgs, config: &Config) -> Result<String> {
    let (forest, root) = if args.empty || !config.tree.seed_demo {
        bare_tree(&config.tree.root_label)
    } else {
        demo_tree(&config.tree.root_label)?
    };
    debug_assert!(forest.validate(root).is_ok());

    let indent = args
        .indent
        .map(usize::from)
        .unwrap_or(config.tui.indent_width);

    let mut output = if args.outline {
        outline(&forest, root)
    } else {
        render_static(&forest, root, indent)
    };

    if args.order {
        output.push_str("\n\n");
        output.push_str(&order_line(&forest, root));
    }

    Ok(output)
}

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    tracing::info!(?args, "Rendering tree");
    println!("{}", render(&args, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ShowArgs {
        ShowArgs {
            empty: false,
            indent: None,
            outline: false,
            order: false,
        }
    }

    #[test]
    fn default_rendering() {
        let output = render(&args(), &Config::default()).unwrap();
        assert_eq!(output, "Root\n  A\n    C\n    D\n  B");
    }

    #[test]
    fn order_is_appended() {
        let output = render(
            &ShowArgs {
                order: true,
                ..args()
            },
            &Config::default(),
        )
        .unwrap();
        assert!(output.ends_with("\n\nRoot → A → C → D → B"));
    }

    #[test]
    fn empty_tree() {
        let output = render(
            &ShowArgs {
                empty: true,
                ..args()
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(output, "Root");
    }
}
